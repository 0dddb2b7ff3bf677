// domain analytics sorting utilities
use crate::{analytics::DomainTally, model::Entry};

/// Turns an unordered [`DomainTally`] into entries ordered by domain.
///
/// Domains compare byte-wise (`str::cmp`): no case folding, no locale
/// collation. Keys are unique, so the order is total and no tie-break exists.
pub struct DomainSorter;

impl DomainSorter {
    pub fn sort(tally: DomainTally) -> Vec<Entry> {
        let mut entries: Vec<Entry> =
            tally.into_iter().map(|(domain, count)| Entry { domain, count }).collect();
        entries.sort_unstable_by(|a, b| a.domain.cmp(&b.domain));
        entries
    }

    /// Whether `entries` are strictly ascending by domain.
    pub fn is_sorted(entries: &[Entry]) -> bool {
        entries.windows(2).all(|w| w[0].domain < w[1].domain)
    }
}
