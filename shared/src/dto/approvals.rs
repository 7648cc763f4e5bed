//! # Token Approval DTOs
//!
//! Active spend approvals returned by `GET /api/approvals/{address}`.

use serde::{Deserialize, Serialize};

/// A token-spend approval granted by the wallet.
///
/// `allowance` is the raw on-chain figure as a decimal string. Values at or
/// above 10^18 conventionally encode an unlimited approval; classification
/// against that boundary must compare the string exactly, never through
/// floating point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenApproval {
    /// Token contract address.
    pub token: String,
    /// Contract authorized to spend the token.
    pub spender: String,
    pub amount: String,
    pub allowance: String,
    pub symbol: String,
    pub name: String,
}
