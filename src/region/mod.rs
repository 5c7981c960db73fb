//! Region subsystem for SCB Regions.
//!
//! Provides the built-in catalog of Swedish regions (riket, län, kommuner),
//! text normalization for Swedish names, and query resolution.

mod data;

pub mod catalog;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use catalog::RegionCatalog;
pub use normalize::normalize;
pub use resolver::{RegionResolver, SearchResult};
pub use types::{CatalogError, MatchRule, Region, RegionKind, RegionStats};
