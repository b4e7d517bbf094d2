// crates/addrdb-core/src/model/mod.rs

pub mod address;
pub mod record;
pub mod rules;
pub mod tree;

pub use address::{Address, AddressField};
pub use record::{RegionMap, RegionRecord};
pub use rules::{Choice, ValidationRules};
pub use tree::{RegionNode, RegionTree};
