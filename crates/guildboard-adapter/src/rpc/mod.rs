/*
[INPUT]:  EVM JSON-RPC endpoint, ERC-20 contract and owner addresses
[OUTPUT]: Token balances in wei and ether-denominated strings
[POS]:    RPC layer - read-only chain queries
[UPDATE]: When adding contract calls or changing the default endpoint
*/

pub mod abi;
pub mod client;

pub use abi::{BALANCE_OF_SELECTOR, decode_uint256, encode_balance_of, format_ether, parse_address};
pub use client::{DEFAULT_RPC_URL, EvmRpcClient};
