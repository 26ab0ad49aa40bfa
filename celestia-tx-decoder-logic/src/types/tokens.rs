use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TokenType {
    Collateral,
    Synthetic,
}

/// Hyperlane warp token created by a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub owner: String,
    pub mailbox: String,
    /// Local denomination backing a collateral token, empty for synthetic ones.
    pub denom: String,
    pub token_type: TokenType,
    pub height: u64,
}
