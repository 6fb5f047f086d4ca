//! Error types for register access

use thiserror::Error;

use crate::ErdCode;

/// Result type for register operations
pub type ErdResult<T> = Result<T, ErdError>;

/// Errors that can occur when reading or writing a register
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ErdError {
    /// The appliance is offline or not yet connected
    #[error("appliance {serial} is unavailable")]
    Unavailable { serial: String },

    /// The register is a status register and cannot be written
    #[error("register {0} is read-only")]
    ReadOnly(ErdCode),

    /// The appliance refused the write
    #[error("appliance rejected write to {code}: {reason}")]
    Rejected { code: ErdCode, reason: String },

    /// The transport to the appliance failed
    #[error("transport error: {0}")]
    Transport(String),
}
