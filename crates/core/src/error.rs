use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BattError {
    /// The state query failed outright — the platform exposes no
    /// power-management data (ACPI off, desktop machine, VM).
    #[error("no battery information found (is ACPI enabled?)")]
    NoBatteryInfo,

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BattError> = std::result::Result<T, E>;
