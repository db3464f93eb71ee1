//! FAQ corpus loading and indexing.
//!
//! A [`CorpusSource`] supplies raw records; [`CorpusIndex::build`]
//! resolves field aliases once and precomputes each entry's expanded
//! token set. Indexes are immutable once built and are replaced
//! wholesale on reload.

mod index;
mod record;
mod source;

pub use index::{CorpusIndex, IndexedEntry};
pub use record::{parse_records, FaqRecord};
pub use source::{CorpusSource, JsonFileSource, StaticSource};
