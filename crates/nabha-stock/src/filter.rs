//! Medicine search filter.
//!
//! A medicine is kept iff its name or category contains the query as a
//! case-insensitive substring. Order is preserved and an empty query keeps
//! everything. There is no ranking and no pagination.

use tracing::debug;

use nabha_contracts::Medicine;

/// Return true if `medicine` matches `query`.
pub fn matches(medicine: &Medicine, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowered(medicine, &needle)
}

fn matches_lowered(medicine: &Medicine, needle: &str) -> bool {
    medicine.name.to_lowercase().contains(needle)
        || medicine.category.to_lowercase().contains(needle)
}

/// Filter `catalog` down to the medicines matching `query`.
///
/// The result is a subsequence of `catalog` in original order.
pub fn filter<'a>(catalog: &'a [Medicine], query: &str) -> Vec<&'a Medicine> {
    let needle = query.to_lowercase();
    let visible: Vec<&Medicine> = catalog
        .iter()
        .filter(|m| matches_lowered(m, &needle))
        .collect();

    debug!(
        query = %query,
        total = catalog.len(),
        visible = visible.len(),
        "filtered catalog"
    );

    visible
}
