//! Transit graph storage and loading.
//!
//! The graph is assembled once, either by hand through [`GraphStore`] or
//! from a JSON network file, and treated as immutable afterwards.

mod loader;
mod store;

pub use loader::{
    EdgeRecord, NetworkError, NetworkFile, StationRecord, load_network_from_path,
    load_network_from_str,
};
pub use store::{Adjacency, GraphError, GraphStore};

#[cfg(test)]
pub(crate) use store::test_support;
