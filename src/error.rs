//! Setup-time error types
//!
//! Runtime reconciliation never fails: empty registration sets are no-ops
//! and missing callbacks are skipped. Errors only surface synchronously
//! when something is misconfigured.

use thiserror::Error;

/// Errors reported at setup time
#[derive(Debug, Error)]
pub enum Error {
    /// `arrow_control` was given a speed that can't drive movement
    #[error("arrow control speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    /// Configuration file or environment override failed to load
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
