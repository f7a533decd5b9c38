use tabled::{Table, Tabled};

use crate::association::PatchGroupAssociation;

#[derive(Tabled)]
struct AssociationRow {
    #[tabled(rename = "PATCH GROUP")]
    patch_group: String,
    #[tabled(rename = "BASELINE ID")]
    baseline_id: String,
    #[tabled(rename = "ID")]
    id: String,
}

pub fn render_table(associations: &[PatchGroupAssociation]) -> String {
    let rows: Vec<AssociationRow> = associations
        .iter()
        .map(|a| AssociationRow {
            patch_group: a.patch_group.clone(),
            baseline_id: a.baseline_id.clone(),
            id: a.composite_id(),
        })
        .collect();
    Table::new(rows).to_string()
}

pub fn render_json(associations: &[PatchGroupAssociation]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(associations)
}
