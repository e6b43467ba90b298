use super::allow_list::AllowList;
use super::model::Catalog;

// ---------------------------------------------------------------------------
// Group filter
// ---------------------------------------------------------------------------

/// Counts reported after a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub scanned: usize,
    pub retained: usize,
}

impl FilterSummary {
    pub fn dropped(&self) -> usize {
        self.scanned - self.retained
    }
}

/// Return the records of `catalog` whose `groupID` is in `allow`.
///
/// Kept records are copied unchanged and stay in their original order.  A
/// `groupID` too large for [`GroupId`](super::model::GroupId) is never a
/// ship group.
pub fn filter_catalog(catalog: &Catalog, allow: &AllowList) -> (Catalog, FilterSummary) {
    let entries: Vec<_> = catalog
        .iter()
        .filter(|(_, record)| record.group_id().is_some_and(|g| allow.contains(g)))
        .map(|(id, record)| (id.to_owned(), record.clone()))
        .collect();

    let summary = FilterSummary {
        scanned: catalog.len(),
        retained: entries.len(),
    };
    (Catalog::from_entries(entries), summary)
}
