//! Data structures and serialization.

pub mod changes;
pub mod review;
pub mod security;
pub mod store;
pub mod style;
pub mod yaml;

pub use changes::*;
pub use review::*;
pub use security::*;
pub use store::StyleStore;
pub use style::*;
pub use yaml::*;
