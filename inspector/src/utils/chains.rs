//! # Chain Registry
//!
//! Supported chain identifiers and their block-explorer URL templates.

/// Chains the backend understands natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainId {
    Ethereum,
    Polygon,
    Bsc,
    Arbitrum,
}

impl ChainId {
    /// All supported chains, in display order.
    pub fn all() -> &'static [ChainId] {
        &[ChainId::Ethereum, ChainId::Polygon, ChainId::Bsc, ChainId::Arbitrum]
    }

    /// Wire identifier sent to the backend.
    pub fn name(&self) -> &'static str {
        match self {
            ChainId::Ethereum => "ethereum",
            ChainId::Polygon => "polygon",
            ChainId::Bsc => "bsc",
            ChainId::Arbitrum => "arbitrum",
        }
    }

    /// Parse a wire identifier; unknown names return `None`.
    pub fn from_name(name: &str) -> Option<ChainId> {
        match name {
            "ethereum" => Some(ChainId::Ethereum),
            "polygon" => Some(ChainId::Polygon),
            "bsc" => Some(ChainId::Bsc),
            "arbitrum" => Some(ChainId::Arbitrum),
            _ => None,
        }
    }

    fn explorer_base(&self) -> &'static str {
        match self {
            ChainId::Ethereum => "https://etherscan.io",
            ChainId::Polygon => "https://polygonscan.com",
            ChainId::Bsc => "https://bscscan.com",
            ChainId::Arbitrum => "https://arbiscan.io",
        }
    }
}

/// Link target on a block explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerTarget {
    Tx,
    Address,
}

/// Resolve the explorer URL for a hash or address on the given chain.
///
/// Unrecognized chain names resolve to the Ethereum explorer. That fallback
/// is a deliberate default, not an error: the chain value is user-supplied
/// and passed through to the backend unvalidated, and a cross-link to the
/// wrong explorer beats no link at all.
pub fn explorer_url(target: ExplorerTarget, value: &str, chain: &str) -> String {
    let chain_id = ChainId::from_name(chain).unwrap_or(ChainId::Ethereum);
    let segment = match target {
        ExplorerTarget::Tx => "tx",
        ExplorerTarget::Address => "address",
    };
    format!("{}/{}/{}", chain_id.explorer_base(), segment, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chains_resolve_their_explorer() {
        assert_eq!(
            explorer_url(ExplorerTarget::Tx, "0xabc", "polygon"),
            "https://polygonscan.com/tx/0xabc"
        );
        assert_eq!(
            explorer_url(ExplorerTarget::Address, "0xdef", "bsc"),
            "https://bscscan.com/address/0xdef"
        );
        assert_eq!(
            explorer_url(ExplorerTarget::Tx, "0xabc", "arbitrum"),
            "https://arbiscan.io/tx/0xabc"
        );
    }

    #[test]
    fn test_unknown_chain_falls_back_to_ethereum() {
        let hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
        assert_eq!(
            explorer_url(ExplorerTarget::Tx, hash, "solana"),
            explorer_url(ExplorerTarget::Tx, hash, "ethereum")
        );
        assert_eq!(
            explorer_url(ExplorerTarget::Address, "0xabc", ""),
            "https://etherscan.io/address/0xabc"
        );
    }

    #[test]
    fn test_wire_names_round_trip() {
        for chain in ChainId::all() {
            assert_eq!(ChainId::from_name(chain.name()), Some(*chain));
        }
        assert_eq!(ChainId::from_name("solana"), None);
    }
}
