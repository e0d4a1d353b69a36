pub mod builder;
pub mod suborg;

pub use builder::{recalculate, HierarchyIndex, OrgMetrics};
pub use suborg::{descendants, is_descendant};
