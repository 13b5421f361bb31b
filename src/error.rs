//! Domain error types
//!
//! All variants are recoverable: the triggering request is dropped and no
//! state is mutated.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WalletError {
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),

    #[error("staking amount {amount} exceeds ceiling {ceiling}")]
    StakingCeiling { amount: i64, ceiling: i64 },

    #[error("empty required field: {0}")]
    EmptyField(&'static str),

    #[error("a {0} operation is already in flight")]
    OperationConflict(&'static str),
}

pub type Result<T> = std::result::Result<T, WalletError>;
