// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits at the crate's seams: document parsers, which
//! adapters implement, and the transformer contract, which user plugins implement.

pub mod parser;
pub mod transformer;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use transformer::{short_type_name, Transformer, TRANSFORMER_PARAMS_DIR};
