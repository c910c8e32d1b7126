//! Tree construction module

mod builder;
mod order;
mod parents;

pub use builder::{NodeIndex, StructureError, Tree, TreeBuilder, TreeRecord};
pub use order::NodeOrder;
pub use parents::ParentRelation;
