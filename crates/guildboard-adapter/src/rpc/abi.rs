/*
[INPUT]:  Addresses and raw `eth_call` return data
[OUTPUT]: ABI-encoded call data, decoded uint256 values, ether strings
[POS]:    RPC layer - minimal ERC-20 ABI codec
[UPDATE]: When more ERC-20 methods are queried
*/

use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::http::{GuildboardError, Result};

/// First four bytes of keccak256("balanceOf(address)")
pub const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

const ETHER_DECIMALS: usize = 18;

/// Parse a hex address, accepting any checksum casing
pub fn parse_address(value: &str) -> Result<Address> {
    Address::from_str(value.trim()).map_err(|err| GuildboardError::InvalidAddress {
        address: value.to_string(),
        reason: err.to_string(),
    })
}

/// `0x`-prefixed call data for `balanceOf(owner)`
pub fn encode_balance_of(owner: &Address) -> String {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&BALANCE_OF_SELECTOR);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(owner.as_slice());
    format!("0x{}", hex::encode(data))
}

/// Decode the leading `uint256` word of a return value
///
/// Nodes answer `0x` for calls to addresses without code; that is reported
/// as an invalid response rather than a zero balance.
pub fn decode_uint256(data: &str) -> Result<U256> {
    let hex_str = data.trim().trim_start_matches("0x");
    if hex_str.is_empty() {
        return Err(GuildboardError::InvalidResponse(
            "empty eth_call result (is the contract deployed?)".to_string(),
        ));
    }

    let bytes = hex::decode(hex_str)
        .map_err(|err| GuildboardError::InvalidResponse(format!("invalid hex in eth_call result: {}", err)))?;
    if bytes.len() < 32 {
        return Err(GuildboardError::InvalidResponse(format!(
            "expected 32-byte uint256, got {} bytes",
            bytes.len()
        )));
    }

    Ok(U256::from_be_slice(&bytes[..32]))
}

/// Render a wei amount as ether with trailing zeros trimmed
pub fn format_ether(wei: U256) -> String {
    let digits = wei.to_string();
    if digits.len() <= ETHER_DECIMALS {
        let fraction = format!("{:0>width$}", digits, width = ETHER_DECIMALS);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            return "0".to_string();
        }
        return format!("0.{}", fraction);
    }

    let (whole, fraction) = digits.split_at(digits.len() - ETHER_DECIMALS);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}
