use thiserror::Error;

/// Errors that can occur during SSM patch group operations.
///
/// Absence of a mapping during reconciliation is NOT an error and is modeled
/// as `Ok(None)` by the callers instead.
#[derive(Debug, Error)]
pub enum SsmError {
    /// A required input field was empty at creation time
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// RegisterPatchBaselineForPatchGroup failed; surfaced without retry
    #[error("registering patch baseline for patch group failed: {message}")]
    Register { message: String },

    /// DescribePatchGroups failed while paging through mappings
    #[error("describing patch groups failed: {message}")]
    Describe { message: String },

    /// DeregisterPatchBaselineForPatchGroup failed; carries the composite
    /// identifier for diagnostic context
    #[error("error deregistering patch group ({id}): {message}")]
    Deregister { id: String, message: String },

    /// The service accepted a registration but the response was missing the
    /// confirmed identity fields
    #[error("malformed registration response: {message}")]
    MalformedResponse { message: String },
}
