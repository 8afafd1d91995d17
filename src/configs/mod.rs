//! Network configs read from JSON and their evaluation.

mod adapter;
mod network;

use std::{fs, path::Path};

use serde::Serialize;

pub use adapter::Adapter;
pub use network::{NamedNetwork, NetworkConfig, ReportConfig};

use crate::{Architecture, Complexity, Result};

/// The estimate of a single configured network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub name: String,
    pub architecture: Architecture,
    pub complexity: Complexity,
}

/// Parses a report config from a JSON string.
///
/// # Errors
/// `Json` if the string is not a valid report config.
pub fn from_json(json: &str) -> Result<ReportConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a report config from a JSON file.
///
/// # Errors
/// `Io` if the file can't be read, `Json` if it is not a valid report config.
pub fn from_path(path: impl AsRef<Path>) -> Result<ReportConfig> {
    let path = path.as_ref();
    log::info!("reading network config from {}", path.display());
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Estimates every network of the config, in order.
///
/// Unnamed networks are reported under their architecture label.
///
/// # Errors
/// The first error produced while adapting or estimating a network. No partial
/// report is returned.
pub fn estimate(config: &ReportConfig) -> Result<Vec<Estimate>> {
    log::info!("estimating {} network(s)", config.networks.len());
    let adapter = Adapter::new();

    config
        .networks
        .iter()
        .map(|named| {
            let architecture = adapter.adapt(&named.network)?;
            let complexity = architecture.complexity()?;
            let name = named
                .name
                .clone()
                .unwrap_or_else(|| architecture.label().to_string());

            Ok(Estimate {
                name,
                architecture,
                complexity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_externally_tagged_networks() {
        let config = from_json(
            r#"{
                "networks": [
                    { "name": "equalizer", "network": { "cvfnn": { "layers": [6, 97, 3] } } },
                    { "network": { "fcrbf": { "inputs": 6, "neurons": 100, "outputs": 3 } } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.networks[0].name.as_deref(), Some("equalizer"));
        assert_eq!(
            config.networks[1].network,
            NetworkConfig::Fcrbf {
                inputs: 6,
                neurons: 100,
                outputs: 3
            }
        );
    }

    #[test]
    fn unnamed_networks_use_the_architecture_label() {
        let config = ReportConfig {
            networks: vec![NamedNetwork {
                name: None,
                network: NetworkConfig::Scfnn {
                    layers: vec![6, 97, 3],
                },
            }],
        };

        let estimates = estimate(&config).unwrap();
        assert_eq!(estimates[0].name, "SCFNN");
        assert_eq!(estimates[0].complexity, Complexity::new(8942, 3492));
    }

    #[test]
    fn unknown_architectures_are_json_errors() {
        let err = from_json(r#"{ "networks": [ { "network": { "lstm": {} } } ] }"#).unwrap_err();
        assert!(matches!(err, crate::ComplexityError::Json(_)));
    }
}
