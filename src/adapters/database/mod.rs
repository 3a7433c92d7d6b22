//! Database abstraction layer
//!
//! A trait-based seam over the document database service plus the provider
//! that owns the process-wide connection handle.

pub mod factory;
pub mod traits;

pub use factory::ClientProvider;
pub use traits::DocumentStore;
