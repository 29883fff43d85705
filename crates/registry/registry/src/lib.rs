//! # Corvus Registry
//!
//! Schema registry layer for Corvus providing:
//! - Async client contract for registry access
//! - In-memory and lookup-caching client implementations
//! - Subject resolution over records and tagged unions
//! - Compatibility verification and registration orchestration
//!
//! ## Example
//!
//! ```rust,ignore
//! use corvus_registry::{MemoryRegistryClient, SchemaManager};
//! use std::sync::Arc;
//!
//! let manager = SchemaManager::new(Arc::new(MemoryRegistryClient::new()));
//!
//! // Register every subject of a record or union schema.
//! let registered = manager.register_schemas(&schema).await?;
//! for entry in &registered {
//!     println!("{:?} -> {}", entry.schema, entry.id);
//! }
//! ```

mod error;
mod manager;
mod types;
pub mod client;
pub mod schema;

pub use client::{CachedRegistryClient, MemoryRegistryClient, MemoryRegistryConfig, SchemaRegistryClient};
pub use error::{RegistryError, RegistryResult};
pub use manager::SchemaManager;
pub use types::{CompatibilityLevel, SchemaId, SubjectCompatibility, SubjectRegistration};
