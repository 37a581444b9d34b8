//! Series grouping for search results.
//!
//! A result naming several series appears in each of those groups; the
//! shared record is reference-counted, never duplicated. Results with no
//! series information collect under a "Standalone" group.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::SearchResult;

/// Group label for results that name no series.
pub const STANDALONE_GROUP: &str = "Standalone";

/// Ordering sentinel for books whose series number is absent or
/// non-numeric; sorts after any real number.
const UNNUMBERED_SORT_KEY: f64 = 999.0;

/// One series (or the standalone bucket) and its member results.
#[derive(Debug, Clone)]
pub struct SeriesGroup {
    pub series_name: String,
    pub books: Vec<Arc<SearchResult>>,
}

impl SeriesGroup {
    fn sort_key(result: &SearchResult) -> f64 {
        result
            .series
            .first()
            .and_then(|s| s.number.as_deref())
            .and_then(|n| n.parse::<f64>().ok())
            .unwrap_or(UNNUMBERED_SORT_KEY)
    }
}

/// Partitions results into series groups.
///
/// Group order is first-seen order over the input. Within a group, books
/// sort ascending by the numeric parse of their first series number;
/// unparseable and missing numbers share the same late sentinel, and the
/// sort is stable, so ties keep input order. A result in several series is
/// fanned out to every named group via a shared [`Arc`].
#[must_use]
pub fn group_by_series(results: Vec<SearchResult>) -> Vec<SeriesGroup> {
    let mut groups: Vec<SeriesGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for result in results {
        let result = Arc::new(result);
        let names: Vec<String> = if result.series.is_empty() {
            vec![STANDALONE_GROUP.to_owned()]
        } else {
            result.series.iter().map(|s| s.name.clone()).collect()
        };
        for name in names {
            let index = *index_by_name.entry(name.clone()).or_insert_with(|| {
                groups.push(SeriesGroup {
                    series_name: name,
                    books: Vec::new(),
                });
                groups.len() - 1
            });
            groups[index].books.push(Arc::clone(&result));
        }
    }

    for group in &mut groups {
        group
            .books
            .sort_by(|a, b| SeriesGroup::sort_key(a).total_cmp(&SeriesGroup::sort_key(b)));
    }
    groups
}
