use aws_sdk_ssm::types::PatchGroupPatchBaselineMapping;

use crate::association::PatchGroupAssociation;

/// Page size for DescribePatchGroups. The service caps MaxResults at 100.
pub const DEFAULT_PAGE_SIZE: i32 = 50;

/// Extracts the identifying fields from an SDK mapping record.
///
/// A mapping without a patch group or baseline identity cannot match any
/// stored composite identifier, so it yields `None` and callers skip it.
pub(crate) fn association_from_mapping(
    mapping: &PatchGroupPatchBaselineMapping,
) -> Option<PatchGroupAssociation> {
    let patch_group = mapping.patch_group()?;
    let baseline_id = mapping.baseline_identity()?.baseline_id()?;
    Some(PatchGroupAssociation::new(baseline_id, patch_group))
}
