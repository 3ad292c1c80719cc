//! Where accepted contact form submissions are reported
//!
//! Nothing is sent over the network; the default sink writes a log record.

use crate::state::ContactSubmission;

/// Receives every accepted submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn record(&mut self, submission: &ContactSubmission);
}

/// Logs submissions through `tracing`
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&mut self, submission: &ContactSubmission) {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "contact form submitted"
        );
    }
}
