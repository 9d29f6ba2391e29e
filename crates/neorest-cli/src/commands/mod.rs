//! Command implementations.

pub mod info;
pub mod node;
pub mod properties;
pub mod relationship;
pub mod types;

pub use self::info::execute_info;
pub use self::node::execute_node;
pub use self::properties::execute_properties;
pub use self::relationship::execute_relationship;
pub use self::types::execute_types;
