// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the transformer plugin contract.

mod common;

use common::ConfDir;
use flowerpower::prelude::*;

/// Multiplies every listed input by the configured factor.
struct ScaleInputs {
    params: ParameterStore,
}

impl Transformer for ScaleInputs {
    type Output = Vec<f64>;

    fn from_params(params: ParameterStore) -> Self {
        ScaleInputs { params }
    }

    fn params(&self) -> &ParameterStore {
        &self.params
    }

    fn transform(&mut self) -> Result<Vec<f64>> {
        let factor = self.params.root().get_f64("factor")?;
        self.params
            .root()
            .get_sequence("inputs")?
            .iter()
            .map(|input| {
                input
                    .as_f64()
                    .map(|x| x * factor)
                    .ok_or_else(|| ConfigError::TypeConversionError {
                        key: "inputs".to_string(),
                        target_type: "float".to_string(),
                        found: input.kind().to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(feature = "toml")]
#[test]
fn test_loads_per_type_file() {
    let conf = ConfDir::new().with_file("params/scaleinputs.toml", "factor = 2\ninputs = [1, 2.5]\n");

    let mut transformer = ScaleInputs::load(None, conf.path()).unwrap();
    assert_eq!(transformer.name(), "ScaleInputs");
    assert_eq!(transformer.transform().unwrap(), vec![2.0, 5.0]);
    assert_eq!(
        transformer.params().document().unwrap().path(),
        conf.path().join("params").join("scaleinputs.toml")
    );
}

#[cfg(feature = "json")]
#[test]
fn test_per_type_file_in_any_format() {
    let conf = ConfDir::new().with_file(
        "params/scaleinputs.json",
        r#"{"factor": 0.5, "inputs": [4]}"#,
    );

    let mut transformer = ScaleInputs::load(None, conf.path()).unwrap();
    assert_eq!(transformer.transform().unwrap(), vec![2.0]);
}

#[test]
fn test_shared_params_file_is_not_used_implicitly() {
    let conf = ConfDir::new().with_file("params.toml", "factor = 2\ninputs = [1]\n");

    match ScaleInputs::load(None, conf.path()) {
        Err(ConfigError::ConfigNotFound { basename, .. }) => assert_eq!(basename, "scaleinputs"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected the per-type file to be required"),
    }
}

#[cfg(feature = "yaml")]
#[test]
fn test_injected_shared_store() {
    let conf = ConfDir::new().with_file("params.yaml", "factor: 3\ninputs: [1, 2]\n");
    let shared = ParameterStore::new(conf.path()).unwrap();

    let mut transformer = ScaleInputs::load(Some(shared), "/does/not/exist").unwrap();
    assert_eq!(transformer.transform().unwrap(), vec![3.0, 6.0]);
}

#[test]
fn test_transform_error_propagates() {
    let params = ParameterStore::from_raw(vec![
        ("factor".to_string(), RawValue::from(1)),
        ("inputs".to_string(), RawValue::from(vec![RawValue::from("x")])),
    ]);

    let mut transformer = ScaleInputs::from_params(params);
    assert!(matches!(
        transformer.transform(),
        Err(ConfigError::TypeConversionError { .. })
    ));
}
