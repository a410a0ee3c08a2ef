use tracing::warn;

use crate::logging::redact::Redacted;
use crate::trace_ctx;

/// Log a credential lookup that failed for infrastructure reasons.
///
/// The client still sees `INVALID_EMAIL`; this line is what keeps the outage
/// visible to operators.
pub fn credential_store_failed(email: &str, error: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_CREDENTIAL_STORE_FAILED",
        %trace_id,
        email = %Redacted(email),
        error = %Redacted(error),
        "Credential lookup failed"
    );
}
