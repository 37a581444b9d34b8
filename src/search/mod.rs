//! Presentation-side search logic: series grouping and batch selection.

pub mod grouping;
pub mod selection;

pub use grouping::{STANDALONE_GROUP, SeriesGroup, group_by_series};
pub use selection::{GroupSelection, SelectionSet};
