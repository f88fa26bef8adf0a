//! Configuration for a parse run.

/// What the statement driver does after the first fatal parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Log the error, then keep advancing tokens so the scan reaches the end
    /// of the input before the error is returned. This is the historical
    /// behavior of the Bluc driver loop.
    #[default]
    RecoverAndContinue,

    /// Return the error immediately, leaving the cursor where it failed.
    AbortOnFirstError,
}

/// Configuration for the blucc front end
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Error-recovery policy of the statement parser.
    pub recovery: RecoveryMode,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that stops the statement parser at the first fatal error.
    pub fn abort_on_first_error() -> Self {
        Self {
            recovery: RecoveryMode::AbortOnFirstError,
        }
    }
}
