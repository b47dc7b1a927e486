// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transformer plugin contract.
//!
//! A transformer is a user type that receives a ready [`ParameterStore`] when it is
//! built and implements one transformation. Leaving out `transform` is a compile
//! error, not a runtime failure:
//!
//! ```compile_fail
//! use flowerpower::prelude::*;
//!
//! struct Incomplete(ParameterStore);
//!
//! impl Transformer for Incomplete {
//!     type Output = ();
//!
//!     fn from_params(params: ParameterStore) -> Self {
//!         Incomplete(params)
//!     }
//!
//!     fn params(&self) -> &ParameterStore {
//!         &self.0
//!     }
//! }
//! ```

use crate::domain::Result;
use crate::service::ParameterStore;
use std::path::Path;

/// Subdirectory of the config directory holding per-transformer parameter files.
pub const TRANSFORMER_PARAMS_DIR: &str = "params";

/// The plugin contract for parameterised transformations.
///
/// # Examples
///
/// ```rust
/// use flowerpower::prelude::*;
///
/// struct Scale {
///     params: ParameterStore,
/// }
///
/// impl Transformer for Scale {
///     type Output = f64;
///
///     fn from_params(params: ParameterStore) -> Self {
///         Scale { params }
///     }
///
///     fn params(&self) -> &ParameterStore {
///         &self.params
///     }
///
///     fn transform(&mut self) -> Result<f64> {
///         Ok(self.params.root().get_f64("factor")? * 2.0)
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let params = ParameterStore::from_raw(vec![("factor".to_string(), RawValue::from(1.5))]);
/// let mut scale = Scale::load(Some(params), "conf")?;
/// assert_eq!(scale.name(), "Scale");
/// assert_eq!(scale.transform()?, 3.0);
/// # Ok(())
/// # }
/// ```
pub trait Transformer: Sized {
    /// What a transformation produces.
    type Output;

    /// Builds the transformer around its parameters.
    fn from_params(params: ParameterStore) -> Self;

    /// Returns the parameters the transformer was built with.
    fn params(&self) -> &ParameterStore;

    /// Runs the transformation.
    fn transform(&mut self) -> Result<Self::Output>;

    /// Builds the transformer from injected parameters, or loads them from disk.
    ///
    /// Injected parameters are used as they are. Without them, the per-type file
    /// `<cfg_path>/params/<file_stem>.{toml,yaml,yml,json}` is loaded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if parameters have to be loaded and no
    /// per-type file exists, or any decoding error of that file.
    fn load<P: AsRef<Path>>(params: Option<ParameterStore>, cfg_path: P) -> Result<Self> {
        let params = match params {
            Some(params) => params,
            None => {
                let directory = cfg_path.as_ref().join(TRANSFORMER_PARAMS_DIR);
                tracing::debug!(
                    "Loading parameters for transformer '{}' from {}",
                    short_type_name::<Self>(),
                    directory.display()
                );
                ParameterStore::with_basename(directory, &Self::file_stem())?
            }
        };
        Ok(Self::from_params(params))
    }

    /// Returns the implementing type's name, without module path or generics.
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    /// Returns the lower-cased type name used for the per-type parameter file.
    fn file_stem() -> String {
        short_type_name::<Self>().to_lowercase()
    }
}

/// Returns the last path segment of a type's name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
