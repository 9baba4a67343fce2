//! TronClient - contract calls and node queries

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tron_primitives::{Address, BlockHeight, Sun, U256};

use crate::abi::{
    decode, decode_revert_message, encode_address, uint_to_u64, DecodedValue, ParamType,
    ParameterBlock,
};
use crate::transfer::TransferBuilder;
use crate::transport::{deserialize_response, path, Transport};
use crate::types::{
    AccountReply, AccountRequest, Block, Blocks, BroadcastSignedTransactionReply,
    BroadcastSignedTransactionRequest, CreateTransactionReply, GetAssetIssueByIdReply,
    GetAssetIssueByIdRequest, GetBlockByLimitNextRequest, GetBlockByNumRequest,
    GetContractReply, GetContractRequest, TriggerConstantContractReply,
    TriggerConstantContractRequest, TriggerSmartContractRequest,
    TriggerSmartContractTransferReply,
};
use crate::SdkError;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Client for the node's wallet API
///
/// Holds no state besides the transport, so one instance can serve
/// concurrent callers.
pub struct TronClient {
    transport: Box<dyn Transport>,
}

impl TronClient {
    /// Create a new client with HTTP transport
    #[cfg(feature = "http")]
    pub fn connect(config: crate::ClientConfig) -> Result<Self, SdkError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            transport: Box::new(transport),
        })
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Serialize `body`, POST it once and deserialize the reply
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let body = serde_json::to_value(body)?;
        tracing::debug!(path, "posting request");
        let value = self.transport.post_json(path, body).await?;
        deserialize_response(path, value)
    }

    // ==================== Blocks ====================

    /// Number of the latest block
    pub async fn current_block_number(&self) -> Result<BlockHeight, SdkError> {
        let block: Block = self
            .post(path::GET_NOW_BLOCK, &serde_json::json!({}))
            .await?;
        Ok(block.block_header.data.number)
    }

    /// Block at `num`
    pub async fn get_block_by_number(&self, num: BlockHeight) -> Result<Block, SdkError> {
        self.post(path::GET_BLOCK_BY_NUM, &GetBlockByNumRequest { num })
            .await
    }

    /// Blocks in `[start, end)`
    pub async fn get_block_by_limit_next(
        &self,
        start: BlockHeight,
        end: BlockHeight,
    ) -> Result<Vec<Block>, SdkError> {
        let request = GetBlockByLimitNextRequest {
            start_num: start,
            end_num: end,
        };
        let blocks: Blocks = self.post(path::GET_BLOCK_BY_LIMIT_NEXT, &request).await?;
        Ok(blocks.blocks)
    }

    // ==================== Accounts ====================

    /// TRX balance of `address`, in SUN
    ///
    /// The account endpoint only accepts hex addresses.
    pub async fn get_account_balance(&self, address: &Address) -> Result<Sun, SdkError> {
        let request = AccountRequest {
            address: address.to_hex(),
            visible: false,
        };
        let reply: AccountReply = self.post(path::GET_ACCOUNT, &request).await?;
        Ok(reply.balance)
    }

    // ==================== Constant Calls ====================

    /// Run a read-only contract call and return the raw result slots
    ///
    /// Addresses are submitted in Base58Check form.
    pub async fn trigger_constant_contract(
        &self,
        owner: &Address,
        contract: &Address,
        selector: &str,
        params: &ParameterBlock,
    ) -> Result<Vec<String>, SdkError> {
        let request = TriggerConstantContractRequest {
            owner_address: owner.to_base58check(),
            contract_address: contract.to_base58check(),
            function_selector: selector.to_string(),
            parameter: params.to_hex(),
            visible: true,
        };
        let reply: TriggerConstantContractReply =
            self.post(path::TRIGGER_CONSTANT_CONTRACT, &request).await?;
        tracing::debug!(
            selector,
            energy_used = reply.energy_used,
            slots = reply.constant_result.len(),
            "constant call returned"
        );
        Ok(reply.constant_result)
    }

    /// Run a read-only contract call and decode its first result as `shape`
    pub async fn call_constant(
        &self,
        owner: &Address,
        contract: &Address,
        selector: &str,
        params: &ParameterBlock,
        shape: ParamType,
    ) -> Result<DecodedValue, SdkError> {
        let results = self
            .trigger_constant_contract(owner, contract, selector, params)
            .await?;
        match results.first() {
            Some(result) if !result.is_empty() => Ok(decode(shape, result)?),
            _ => Err(SdkError::EmptyResult(selector.to_string())),
        }
    }

    /// `symbol()` of a TRC20 contract
    pub async fn get_trc20_token_symbol(
        &self,
        owner: &Address,
        contract: &Address,
    ) -> Result<String, SdkError> {
        let value = self
            .call_constant(owner, contract, "symbol()", &ParameterBlock::new(), ParamType::String)
            .await?;
        value
            .into_string()
            .ok_or_else(|| SdkError::Serialization("symbol() did not decode to a string".into()))
    }

    /// `decimals()` of a TRC20 contract
    pub async fn get_trc20_token_decimals(
        &self,
        owner: &Address,
        contract: &Address,
    ) -> Result<u64, SdkError> {
        let value = self
            .call_constant(owner, contract, "decimals()", &ParameterBlock::new(), ParamType::Uint)
            .await?;
        let decimals = value
            .into_uint()
            .ok_or_else(|| SdkError::Serialization("decimals() did not decode to a uint".into()))?;
        Ok(uint_to_u64(decimals)?)
    }

    /// `balanceOf(owner)` of a TRC20 contract, in token base units
    pub async fn get_trc20_token_balance(
        &self,
        owner: &Address,
        contract: &Address,
    ) -> Result<U256, SdkError> {
        let params = ParameterBlock::new().with(encode_address(owner));
        let value = self
            .call_constant(owner, contract, "balanceOf(address)", &params, ParamType::Uint)
            .await?;
        value
            .into_uint()
            .ok_or_else(|| SdkError::Serialization("balanceOf() did not decode to a uint".into()))
    }

    // ==================== Token Metadata ====================

    /// Contract metadata (name, origin, bytecode)
    pub async fn get_trc20_smart_contract(
        &self,
        contract: &Address,
    ) -> Result<GetContractReply, SdkError> {
        let request = GetContractRequest {
            value: contract.to_base58check(),
            visible: true,
        };
        self.post(path::GET_CONTRACT, &request).await
    }

    /// TRC10 token issue info
    pub async fn get_trc10_token_info_by_id(
        &self,
        id: u64,
    ) -> Result<GetAssetIssueByIdReply, SdkError> {
        self.post(path::GET_ASSET_ISSUE_BY_ID, &GetAssetIssueByIdRequest { value: id })
            .await
    }

    // ==================== Transactions ====================

    /// Run a state-changing contract call and return the unsigned transaction
    ///
    /// Fails with [`SdkError::ContractExecution`] carrying the decoded revert
    /// message when the node reports the call failed.
    pub async fn trigger_smart_contract(
        &self,
        request: &TriggerSmartContractRequest,
    ) -> Result<CreateTransactionReply, SdkError> {
        let reply: TriggerSmartContractTransferReply =
            self.post(path::TRIGGER_SMART_CONTRACT, request).await?;
        if !reply.result.result {
            let message = decode_revert_message(&reply.result.message);
            tracing::warn!(
                selector = %request.function_selector,
                code = %reply.result.code,
                error = %message,
                "contract call failed"
            );
            return Err(SdkError::ContractExecution(message));
        }
        Ok(reply.transaction)
    }

    /// Build an unsigned TRX transfer
    pub async fn transfer_trx(
        &self,
        from: &Address,
        to: &Address,
        amount: Sun,
    ) -> Result<CreateTransactionReply, SdkError> {
        let value = TransferBuilder::new(*from, *to).amount(amount).build_trx()?;
        self.post(path::CREATE_TRANSACTION, &value).await
    }

    /// Build an unsigned TRC10 transfer
    pub async fn transfer_trc10(
        &self,
        from: &Address,
        to: &Address,
        token_id: u64,
        amount: u64,
    ) -> Result<CreateTransactionReply, SdkError> {
        let value = TransferBuilder::new(*from, *to)
            .amount(amount)
            .build_trc10(token_id)?;
        self.post(path::TRANSFER_ASSET, &value).await
    }

    /// Build an unsigned TRC20 transfer through `contract`
    pub async fn transfer_trc20(
        &self,
        transfer: &TransferBuilder,
        contract: &Address,
    ) -> Result<CreateTransactionReply, SdkError> {
        let request = transfer.build_trc20(contract)?;
        self.trigger_smart_contract(&request).await
    }

    /// Broadcast a transaction signed elsewhere
    pub async fn broadcast_signed_transaction(
        &self,
        raw_data: impl Into<String>,
        raw_data_hex: impl Into<String>,
    ) -> Result<BroadcastSignedTransactionReply, SdkError> {
        let request = BroadcastSignedTransactionRequest {
            raw_data: raw_data.into(),
            raw_data_hex: raw_data_hex.into(),
        };
        self.post(path::BROADCAST_TRANSACTION, &request).await
    }
}

/// Race `call` against `token`
///
/// Every client operation is a single POST, so cancelling the future abandons
/// that one request. Fails with [`SdkError::Cancelled`] if the token fires
/// first, including when it is already cancelled.
pub async fn with_cancellation<T, F>(token: &CancellationToken, call: F) -> Result<T, SdkError>
where
    F: Future<Output = Result<T, SdkError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("operation cancelled");
            Err(SdkError::Cancelled)
        }
        result = call => result,
    }
}
