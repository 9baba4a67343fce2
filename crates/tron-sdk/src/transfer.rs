//! Transfer request builder

use tron_primitives::{Address, Sun, U256};

use crate::abi::{encode, scale_amount, uint_to_u64, AbiError, Token};
use crate::types::{TransferValue, TriggerSmartContractRequest, TRC20_TRANSFER_SELECTOR};
use crate::SdkError;

/// Builds the bodies of the TRX, TRC10 and TRC20 transfer endpoints
///
/// Addresses are always submitted in hex form. `scale` multiplies the TRC20
/// amount and fee limit before they are sent; it defaults to 1, meaning both
/// are already in token base units and SUN respectively.
#[derive(Debug, Clone)]
pub struct TransferBuilder {
    from: Address,
    to: Address,
    amount: Option<U256>,
    fee_limit: Option<Sun>,
    scale: u64,
}

impl TransferBuilder {
    /// Create a builder for a transfer from `from` to `to`
    pub fn new(from: Address, to: Address) -> Self {
        Self {
            from,
            to,
            amount: None,
            fee_limit: None,
            scale: 1,
        }
    }

    /// Set the amount (SUN for TRX, token units otherwise)
    pub fn amount(mut self, amount: impl Into<U256>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the fee limit for TRC20 transfers, in SUN
    pub fn fee_limit(mut self, fee_limit: Sun) -> Self {
        self.fee_limit = Some(fee_limit);
        self
    }

    /// Multiply the TRC20 amount and fee limit by `scale` before sending
    pub fn scale(mut self, scale: u64) -> Self {
        self.scale = scale;
        self
    }

    fn required_amount(&self) -> Result<U256, SdkError> {
        self.amount
            .ok_or_else(|| SdkError::MissingField("amount".to_string()))
    }

    /// Body of `wallet/createtransaction`
    pub fn build_trx(&self) -> Result<TransferValue, SdkError> {
        let amount = uint_to_u64(self.required_amount()?)?;
        Ok(TransferValue {
            amount,
            owner_address: self.from.to_hex(),
            to_address: self.to.to_hex(),
            ..Default::default()
        })
    }

    /// Body of `wallet/transferasset`
    ///
    /// The asset name is the hex of the token ID's decimal string.
    pub fn build_trc10(&self, token_id: u64) -> Result<TransferValue, SdkError> {
        let mut value = self.build_trx()?;
        value.asset_name = hex::encode(token_id.to_string());
        Ok(value)
    }

    /// Body of `wallet/triggersmartcontract` calling `transfer(address,uint256)`
    pub fn build_trc20(&self, contract: &Address) -> Result<TriggerSmartContractRequest, SdkError> {
        let amount = scale_amount(self.required_amount()?, self.scale)?;
        let fee_limit = self
            .fee_limit
            .ok_or_else(|| SdkError::MissingField("fee_limit".to_string()))?
            .checked_mul(self.scale)
            .ok_or_else(|| AbiError::ValueTooLarge("fee_limit * scale overflows u64".to_string()))?;

        let parameter = encode(&[Token::Address(self.to), Token::Uint(amount)]);

        Ok(TriggerSmartContractRequest {
            owner_address: self.from.to_hex(),
            contract_address: contract.to_hex(),
            function_selector: TRC20_TRANSFER_SELECTOR.to_string(),
            call_value: 0,
            parameter: parameter.to_hex(),
            fee_limit,
            call_token_value: 0,
            token_id: 0,
        })
    }
}
