use thiserror::Error;

use crate::domain::ParseCentsError;

/// The full taxonomy of submission rejections. Every variant leaves the
/// ledger untouched; there is nothing to recover once input passes the gate.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown entry kind: {0} (expected income or expense)")]
    UnknownKind(String),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseCentsError),

    #[error("Amount must be greater than zero: {0}")]
    NonPositiveAmount(String),
}
