//! Failure reporting
//!
//! The scraper never decides how a failed run is presented. It hands one
//! human-readable message and the originating error to an [`ErrorReporter`].

use tracing::error;

use crate::error::KinostarError;

/// Receiver of the single terminal failure of an extraction run
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, error: &KinostarError);
}

/// Reporter that writes the failure to the `tracing` log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, message: &str, error: &KinostarError) {
        error!(kind = ?error.kind(), error = %error, "{}", message);
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(&str, &KinostarError) + Send + Sync,
{
    fn report(&self, message: &str, error: &KinostarError) {
        self(message, error)
    }
}
