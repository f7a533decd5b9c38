use aws_config::BehaviorVersion;
use aws_sdk_ssm::error::DisplayErrorContext;

use super::error::SsmError;
use super::types::{DEFAULT_PAGE_SIZE, association_from_mapping};
use crate::association::{PatchGroupAssociation, composite_id};

/// Thin wrapper over the AWS SSM client exposing the three patch group
/// association calls plus the paginated mapping listing.
#[derive(Clone, Debug)]
pub struct SsmPatchClient {
    inner: aws_sdk_ssm::Client,
}

impl SsmPatchClient {
    /// Wraps an already-configured SDK client.
    ///
    /// NOTE: Also the construction path for tests, which point the SDK config
    /// at a mock server via `endpoint_url`.
    pub fn new(inner: aws_sdk_ssm::Client) -> Self {
        Self { inner }
    }

    /// Builds a client from the default AWS environment (credential chain,
    /// region, profile).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(aws_sdk_ssm::Client::new(&config))
    }

    /// Registers the baseline for the patch group.
    ///
    /// The returned association is built from the response payload rather
    /// than the inputs, so the composite identifier reflects server-confirmed
    /// values.
    pub async fn register(
        &self,
        baseline_id: &str,
        patch_group: &str,
    ) -> Result<PatchGroupAssociation, SsmError> {
        let resp = self
            .inner
            .register_patch_baseline_for_patch_group()
            .baseline_id(baseline_id)
            .patch_group(patch_group)
            .send()
            .await
            .map_err(|e| SsmError::Register {
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        let baseline_id = resp.baseline_id().ok_or_else(|| SsmError::MalformedResponse {
            message: "registration response missing BaselineId".to_string(),
        })?;
        let patch_group = resp.patch_group().ok_or_else(|| SsmError::MalformedResponse {
            message: "registration response missing PatchGroup".to_string(),
        })?;

        Ok(PatchGroupAssociation::new(baseline_id, patch_group))
    }

    /// Scans the mapping listing for an entry whose reconstructed composite
    /// key equals `composite_id`, pulling pages lazily and stopping at the
    /// first match. Every page is consulted before concluding absence.
    pub async fn find_mapping(
        &self,
        composite_id: &str,
    ) -> Result<Option<PatchGroupAssociation>, SsmError> {
        let mut mappings = self
            .inner
            .describe_patch_groups()
            .into_paginator()
            .page_size(DEFAULT_PAGE_SIZE)
            .items()
            .send();

        while let Some(item) = mappings.next().await {
            let mapping = item.map_err(|e| SsmError::Describe {
                message: format!("{}", DisplayErrorContext(e)),
            })?;

            if let Some(association) = association_from_mapping(&mapping) {
                if association.composite_id() == composite_id {
                    return Ok(Some(association));
                }
            }
        }

        Ok(None)
    }

    /// Drains every page of the mapping listing.
    pub async fn list_mappings(&self) -> Result<Vec<PatchGroupAssociation>, SsmError> {
        let mut mappings = self
            .inner
            .describe_patch_groups()
            .into_paginator()
            .page_size(DEFAULT_PAGE_SIZE)
            .items()
            .send();

        let mut all = Vec::new();
        while let Some(item) = mappings.next().await {
            let mapping = item.map_err(|e| SsmError::Describe {
                message: format!("{}", DisplayErrorContext(e)),
            })?;

            match association_from_mapping(&mapping) {
                Some(association) => all.push(association),
                None => tracing::debug!("skipping mapping without identity fields"),
            }
        }

        Ok(all)
    }

    /// Deregisters the baseline from the patch group using the stored field
    /// values. Failures are wrapped with the composite identifier; the
    /// service's own not-found error is propagated, never swallowed.
    pub async fn deregister(
        &self,
        baseline_id: &str,
        patch_group: &str,
    ) -> Result<(), SsmError> {
        self.inner
            .deregister_patch_baseline_for_patch_group()
            .baseline_id(baseline_id)
            .patch_group(patch_group)
            .send()
            .await
            .map_err(|e| SsmError::Deregister {
                id: composite_id(patch_group, baseline_id),
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        Ok(())
    }
}
