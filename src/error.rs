// Ordergate
// Copyright (C) 2025 Ordergate Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Error handling for gate and registry operations

use thiserror::Error;

/// Status code carried by a write-path rejection, distinct from generic
/// failures so hosts can surface it specially.
pub const WRITE_REJECTED_STATUS: u16 = 40;

/// Status code for every other failure.
pub const GENERIC_FAILURE_STATUS: u16 = 1;

/// Errors produced by the gate and its registry
#[derive(Error, Debug)]
pub enum GateError {
    /// A restricted actor attempted a content update. Terminal for the
    /// request: the host must surface the message and halt processing.
    #[error("Write rejected: {message}")]
    WriteRejected { message: String },

    /// The host role store failed an install/remove/lookup operation.
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl GateError {
    /// Numeric status the host reports for this error.
    pub fn status(&self) -> u16 {
        match self {
            GateError::WriteRejected { .. } => WRITE_REJECTED_STATUS,
            _ => GENERIC_FAILURE_STATUS,
        }
    }

    /// Convenience constructor for host store implementations, which carry
    /// only a message across the trait boundary.
    pub fn store(message: impl Into<String>) -> Self {
        GateError::Store { message: message.into() }
    }

    /// Short identifier for logs and audit details.
    pub fn error_type(&self) -> &'static str {
        match self {
            GateError::WriteRejected { .. } => "write_rejected",
            GateError::Store { .. } => "store_error",
            GateError::SerdeJson(_) => "json_error",
        }
    }
}

/// Result type for gate operations
pub type GateResult<T> = Result<T, GateError>;
