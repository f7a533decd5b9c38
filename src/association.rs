use serde::{Deserialize, Serialize};

/// A baseline-to-patch-group association.
///
/// Both fields are fixed once the association exists; changing either means
/// deregistering and registering a new mapping. Identity is the composite
/// string `"<patch_group>:<baseline_id>"`, which is only ever compared for
/// exact equality, never parsed. Embedded colons in either field are kept
/// as-is even though they make the identifier ambiguous to split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchGroupAssociation {
    pub baseline_id: String,
    pub patch_group: String,
}

impl PatchGroupAssociation {
    pub fn new(baseline_id: impl Into<String>, patch_group: impl Into<String>) -> Self {
        Self {
            baseline_id: baseline_id.into(),
            patch_group: patch_group.into(),
        }
    }

    pub fn composite_id(&self) -> String {
        composite_id(&self.patch_group, &self.baseline_id)
    }
}

/// Patch group first, then baseline id, joined by a single colon.
pub fn composite_id(patch_group: &str, baseline_id: &str) -> String {
    format!("{}:{}", patch_group, baseline_id)
}
