// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the store implementations.
//!
//! This module contains the concrete implementations of the `ConfigStore` trait: the
//! recursive parameter store and the flat catalog store.

pub mod catalog_store;
pub mod parameter_store;

// Re-export commonly used types
pub use catalog_store::CatalogStore;
pub use parameter_store::{ParameterStore, ParameterStoreBuilder};
