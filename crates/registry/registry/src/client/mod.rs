//! Registry clients - access to the schema registry
//!
//! Provides the registry access contract plus:
//! - In-memory registry for development and testing
//! - Lookup caching over any other client

mod cached;
mod memory;
mod trait_def;

pub use cached::CachedRegistryClient;
pub use memory::{MemoryRegistryClient, MemoryRegistryConfig};
pub use trait_def::SchemaRegistryClient;
