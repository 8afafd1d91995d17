use serde::{Deserialize, Serialize};

/// A network as written in a config file.
///
/// Widths are signed so that negative values can be reported instead of being
/// rejected as a generic parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkConfig {
    Cvfnn {
        layers: Vec<i64>,
    },
    Scfnn {
        layers: Vec<i64>,
    },
    Mlmvn {
        layers: Vec<i64>,
    },
    Crbf {
        inputs: i64,
        neurons: i64,
        outputs: i64,
    },
    Fcrbf {
        inputs: i64,
        neurons: i64,
        outputs: i64,
    },
    Ptrbf {
        neurons: Vec<i64>,
        outputs: Vec<i64>,
    },
}

/// A network and an optional name to report it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedNetwork {
    #[serde(default)]
    pub name: Option<String>,
    pub network: NetworkConfig,
}

/// The networks to estimate in a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub networks: Vec<NamedNetwork>,
}
