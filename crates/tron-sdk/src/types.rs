//! Request and reply models for the node's HTTP wallet API
//!
//! Field names follow the node's JSON exactly. Reply structs default any
//! field the node leaves out.

use serde::{Deserialize, Serialize};

/// Token standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Native asset, transferred with an asset-ID field
    #[serde(rename = "TRC10")]
    Trc10,
    /// Smart-contract token, transferred with a `transfer` call
    #[serde(rename = "TRC20")]
    Trc20,
}

impl TokenType {
    /// Name as used on chain
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Trc10 => "TRC10",
            TokenType::Trc20 => "TRC20",
        }
    }
}

/// Method id of `transfer(address,uint256)` as it appears in call data
pub const SIG_TRANSFER: &str = "a9059cbb";

/// Method id of the DEX swap call seen in TRC20 transaction data
pub const SIG_SWAP: &str = "a8f85ca6";

/// Selector sent for TRC20 transfers
pub const TRC20_TRANSFER_SELECTOR: &str = "transfer (address, uint256)";

fn is_zero(v: &u64) -> bool {
    *v == 0
}

// ==================== Blocks ====================

/// Block as returned by `getnowblock` / `getblockbynum`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Block id (hash)
    #[serde(rename = "blockID")]
    pub block_id: String,
    /// Transactions in the block
    #[serde(rename = "transactions")]
    pub txs: Vec<Tx>,
    /// Block header
    pub block_header: BlockHeader,
}

/// Block header wrapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeader {
    /// Header raw data
    #[serde(rename = "raw_data")]
    pub data: BlockData,
}

/// Block header raw data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockData {
    /// Block number
    pub number: u64,
    /// Block timestamp (ms)
    pub timestamp: i64,
}

/// Reply of `getblockbylimitnext`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blocks {
    /// Blocks in range
    #[serde(rename = "block")]
    pub blocks: Vec<Block>,
}

/// Transaction inside a block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tx {
    /// Transaction id
    #[serde(rename = "txID")]
    pub id: String,
    /// Block timestamp (ms)
    #[serde(rename = "block_timestamp")]
    pub block_time: i64,
    /// Raw data
    #[serde(rename = "raw_data")]
    pub data: TxData,
}

/// Transaction raw data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxData {
    /// Creation timestamp (ms)
    pub timestamp: i64,
    /// Contracts executed by the transaction
    #[serde(rename = "contract")]
    pub contracts: Vec<Contract>,
}

/// Contract entry of a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contract {
    /// Contract type, e.g. `TransferContract`
    #[serde(rename = "type")]
    pub contract_type: String,
    /// Contract parameter
    pub parameter: Parameter,
}

/// Contract parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// Parameter value
    pub value: TransferValue,
    /// Protobuf type URL
    pub type_url: String,
}

/// Transfer fields shared by TRX, TRC10 and TRC20 contracts
///
/// Also the request body of `createtransaction` and `transferasset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferValue {
    /// Call data (TRC20)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data: String,
    /// Contract address (TRC20)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contract_address: String,
    /// TRX sent with the call (TRC20)
    #[serde(skip_serializing_if = "is_zero")]
    pub call_value: u64,
    /// Amount (TRC10 and TRX)
    #[serde(skip_serializing_if = "is_zero")]
    pub amount: u64,
    /// Sender
    pub owner_address: String,
    /// Recipient (TRC10 and TRX)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_address: String,
    /// Hex of the asset ID (TRC10)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub asset_name: String,
}

/// Body of `getblockbynum`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlockByNumRequest {
    /// Block number
    pub num: u64,
}

/// Body of `getblockbylimitnext`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlockByLimitNextRequest {
    /// First block (inclusive)
    #[serde(rename = "startNum")]
    pub start_num: u64,
    /// Last block (exclusive)
    #[serde(rename = "endNum")]
    pub end_num: u64,
}

// ==================== Accounts ====================

/// Body of `getaccount`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRequest {
    /// Account address
    pub address: String,
    /// Whether `address` is Base58Check
    pub visible: bool,
}

/// Reply of `getaccount`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountReply {
    /// Account name
    pub account_name: String,
    /// Account address
    pub address: String,
    /// Balance in SUN
    pub balance: u64,
}

// ==================== Smart contracts ====================

/// Body of `triggerconstantcontract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerConstantContractRequest {
    /// Caller address
    pub owner_address: String,
    /// Contract address
    pub contract_address: String,
    /// Function signature, e.g. `balanceOf(address)`
    pub function_selector: String,
    /// Concatenated ABI slots
    pub parameter: String,
    /// Whether the addresses are Base58Check
    pub visible: bool,
}

/// Reply of `triggerconstantcontract`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConstantContractReply {
    /// Energy consumed by the call
    pub energy_used: u64,
    /// Result blobs, hex
    pub constant_result: Vec<String>,
}

/// Body of `triggersmartcontract`, addresses in hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerSmartContractRequest {
    /// Caller address
    pub owner_address: String,
    /// Contract address
    pub contract_address: String,
    /// Function signature
    pub function_selector: String,
    /// TRX sent with the call, SUN
    pub call_value: u64,
    /// Concatenated ABI slots
    pub parameter: String,
    /// Maximum TRX the call may burn, SUN
    pub fee_limit: u64,
    /// TRC10 amount sent with the call
    pub call_token_value: u64,
    /// TRC10 token id sent with the call
    pub token_id: u64,
}

/// Execution status inside a `triggersmartcontract` reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerResult {
    /// True when the node accepted the call
    pub result: bool,
    /// Failure code
    pub code: String,
    /// Hex-encoded failure message
    pub message: String,
}

/// Reply of `triggersmartcontract`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerSmartContractTransferReply {
    /// Execution status
    pub result: TriggerResult,
    /// Unsigned transaction
    pub transaction: CreateTransactionReply,
}

/// Body of `getcontract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetContractRequest {
    /// Contract address
    pub value: String,
    /// Whether `value` is Base58Check
    pub visible: bool,
}

/// Reply of `getcontract`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetContractReply {
    /// Deployed bytecode
    pub bytecode: String,
    /// Share of energy paid by callers, percent
    #[serde(
        rename = "consume_users_resource_percent",
        alias = "consume_user_resource_percent"
    )]
    pub consume_users_resource_percent: u64,
    /// Contract name
    pub name: String,
    /// Deployer address
    pub origin_address: String,
    /// Energy limit the deployer provides per call
    pub origin_energy_limit: u64,
    /// Contract address
    pub contract_address: String,
    /// Code hash
    pub code_hash: String,
}

// ==================== TRC10 ====================

/// Body of `getassetissuebyid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAssetIssueByIdRequest {
    /// Token id
    pub value: u64,
}

/// Reply of `getassetissuebyid`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAssetIssueByIdReply {
    /// Issuer
    pub owner_address: String,
    /// Token name, hex
    pub name: String,
    /// Abbreviation, hex
    pub abbr: String,
    /// Total supply
    pub total_supply: i64,
    /// TRX side of the issue ratio
    pub trx_num: i64,
    /// Token side of the issue ratio
    pub num: i64,
    /// Issue start (ms)
    pub start_time: i64,
    /// Issue end (ms)
    pub end_time: i64,
    /// Description, hex
    pub description: String,
    /// Project URL, hex
    pub url: String,
    /// Token id as a decimal string
    pub id: String,
}

// ==================== Transactions ====================

/// Raw data of an unsigned transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRawData {
    /// Contracts executed
    pub contract: Vec<Contract>,
    /// Reference block bytes
    pub ref_block_bytes: String,
    /// Reference block hash
    pub ref_block_hash: String,
    /// Expiration (ms)
    pub expiration: u64,
    /// Creation timestamp (ms)
    pub timestamp: u64,
    /// Fee limit, SUN
    pub fee_limit: u64,
}

/// Unsigned transaction returned by the transfer endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTransactionReply {
    /// Whether addresses are Base58Check
    pub visible: bool,
    /// Transaction id
    #[serde(rename = "txID")]
    pub tx_id: String,
    /// Raw data
    pub raw_data: TransactionRawData,
    /// Protobuf-encoded raw data, hex
    pub raw_data_hex: String,
}

/// Body of `broadcasttransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BroadcastSignedTransactionRequest {
    /// Raw data, JSON text
    pub raw_data: String,
    /// Raw data, hex
    pub raw_data_hex: String,
}

/// Reply of `broadcasttransaction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastSignedTransactionReply {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_deserialize() {
        let value = json!({
            "blockID": "0000000002faf080abcdef",
            "block_header": {
                "raw_data": { "number": 50000000, "timestamp": 1680000000000i64 }
            }
        });
        let block: Block = serde_json::from_value(value).unwrap();
        assert_eq!(block.block_id, "0000000002faf080abcdef");
        assert_eq!(block.block_header.data.number, 50_000_000);
        assert!(block.txs.is_empty());
    }

    #[test]
    fn test_tx_contract_type_field() {
        let value = json!({
            "txID": "ab",
            "raw_data": {
                "contract": [{
                    "type": "TriggerSmartContract",
                    "parameter": {
                        "value": {
                            "data": "a9059cbb",
                            "owner_address": "41aa",
                            "contract_address": "41bb"
                        },
                        "type_url": "type.googleapis.com/protocol.TriggerSmartContract"
                    }
                }]
            }
        });
        let tx: Tx = serde_json::from_value(value).unwrap();
        let contract = &tx.data.contracts[0];
        assert_eq!(contract.contract_type, "TriggerSmartContract");
        assert!(contract.parameter.value.data.starts_with(SIG_TRANSFER));
    }

    #[test]
    fn test_transfer_value_omits_empty_fields() {
        let value = TransferValue {
            amount: 10,
            owner_address: "41aa".into(),
            to_address: "41bb".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["amount"], 10);
        assert!(json.get("data").is_none());
        assert!(json.get("asset_name").is_none());
        assert!(json.get("call_value").is_none());
    }

    #[test]
    fn test_block_by_limit_next_field_names() {
        let req = GetBlockByLimitNextRequest {
            start_num: 1,
            end_num: 5,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, json!({"startNum": 1, "endNum": 5}));
    }

    #[test]
    fn test_trigger_smart_contract_has_no_visible() {
        let req = TriggerSmartContractRequest {
            owner_address: "41aa".into(),
            contract_address: "41bb".into(),
            function_selector: TRC20_TRANSFER_SELECTOR.into(),
            call_value: 0,
            parameter: String::new(),
            fee_limit: 1,
            call_token_value: 0,
            token_id: 0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("visible").is_none());
        assert_eq!(json["function_selector"], "transfer (address, uint256)");
    }

    #[test]
    fn test_create_transaction_reply_deserialize() {
        let value = json!({
            "visible": false,
            "txID": "deadbeef",
            "raw_data": {
                "ref_block_bytes": "1234",
                "ref_block_hash": "abcd",
                "expiration": 1,
                "timestamp": 2,
                "fee_limit": 3
            },
            "raw_data_hex": "0a02"
        });
        let reply: CreateTransactionReply = serde_json::from_value(value).unwrap();
        assert_eq!(reply.tx_id, "deadbeef");
        assert_eq!(reply.raw_data.fee_limit, 3);
    }

    #[test]
    fn test_token_type_names() {
        assert_eq!(serde_json::to_string(&TokenType::Trc10).unwrap(), "\"TRC10\"");
        assert_eq!(TokenType::Trc20.as_str(), "TRC20");
    }
}
