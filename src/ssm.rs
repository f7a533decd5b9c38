mod client;
mod error;
mod types;

pub use client::SsmPatchClient;
pub use error::SsmError;
pub use types::DEFAULT_PAGE_SIZE;

use crate::association::PatchGroupAssociation;

/// Coordinates the patch group association lifecycle against a
/// caller-supplied SSM client.
///
/// Per association the transitions are `absent -> associate -> present`,
/// `present -> disassociate -> absent`, and `present -> reconcile(no match)
/// -> absent`. Both fields are fixed once present, so there is no update
/// transition.
pub struct PatchGroupManager {
    client: SsmPatchClient,
}

impl PatchGroupManager {
    pub fn new(client: SsmPatchClient) -> Self {
        Self { client }
    }

    /// Registers the baseline for the patch group, then re-reads the listing
    /// to confirm the association and populate its attributes.
    ///
    /// Registration errors are surfaced without retry and produce no
    /// composite identifier.
    pub async fn associate(
        &self,
        baseline_id: &str,
        patch_group: &str,
    ) -> Result<PatchGroupAssociation, SsmError> {
        if baseline_id.is_empty() {
            return Err(SsmError::EmptyField {
                field: "baseline_id",
            });
        }
        if patch_group.is_empty() {
            return Err(SsmError::EmptyField {
                field: "patch_group",
            });
        }

        let confirmed = self.client.register(baseline_id, patch_group).await?;
        let id = confirmed.composite_id();
        tracing::info!(%id, "patch group registered");

        match self.reconcile(&id).await? {
            Some(association) => Ok(association),
            None => {
                // Registration succeeded but the mapping is not visible in
                // the listing yet; fall back to the server-confirmed values.
                tracing::warn!(%id, "registered mapping not visible in listing yet");
                Ok(confirmed)
            }
        }
    }

    /// Looks up the stored composite identifier in the remote listing.
    ///
    /// Absence is not an error: `Ok(None)` means the association no longer
    /// exists remotely and the local record should be discarded.
    pub async fn reconcile(
        &self,
        composite_id: &str,
    ) -> Result<Option<PatchGroupAssociation>, SsmError> {
        match self.client.find_mapping(composite_id).await? {
            Some(association) => Ok(Some(association)),
            None => {
                tracing::info!(id = %composite_id, "patch group mapping not found, removing local record");
                Ok(None)
            }
        }
    }

    /// Deregisters the association using its stored field values, not the
    /// composite identifier.
    pub async fn disassociate(
        &self,
        association: &PatchGroupAssociation,
    ) -> Result<(), SsmError> {
        tracing::info!(id = %association.composite_id(), "deregistering patch group");
        self.client
            .deregister(&association.baseline_id, &association.patch_group)
            .await
    }

    /// Lists every baseline-to-patch-group mapping across all pages.
    pub async fn list(&self) -> Result<Vec<PatchGroupAssociation>, SsmError> {
        self.client.list_mappings().await
    }
}
