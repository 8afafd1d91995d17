use super::NetworkConfig;
use crate::{error::ComplexityError, feedforward, rbf, Architecture, Result};

/// Turns config-level networks into typed architectures.
#[derive(Debug, Default)]
pub struct Adapter;

impl Adapter {
    pub fn new() -> Self {
        Self
    }

    /// Adapts a network config into an `Architecture`.
    ///
    /// Only the sign and magnitude of each width are checked here, layer counts
    /// are checked by the estimators themselves.
    ///
    /// # Errors
    /// `NegativeWidth` for the first negative width found.
    pub fn adapt(&self, network: &NetworkConfig) -> Result<Architecture> {
        let architecture = match network {
            NetworkConfig::Cvfnn { layers } => {
                Architecture::Cvfnn(self.widths(feedforward::CVFNN, layers)?)
            }
            NetworkConfig::Scfnn { layers } => {
                Architecture::Scfnn(self.widths(feedforward::SCFNN, layers)?)
            }
            NetworkConfig::Mlmvn { layers } => {
                Architecture::Mlmvn(self.widths(feedforward::MLMVN, layers)?)
            }
            NetworkConfig::Crbf {
                inputs,
                neurons,
                outputs,
            } => {
                let [inputs, neurons, outputs] =
                    self.shallow(rbf::CRBF, *inputs, *neurons, *outputs)?;
                Architecture::Crbf {
                    inputs,
                    neurons,
                    outputs,
                }
            }
            NetworkConfig::Fcrbf {
                inputs,
                neurons,
                outputs,
            } => {
                let [inputs, neurons, outputs] =
                    self.shallow(rbf::FCRBF, *inputs, *neurons, *outputs)?;
                Architecture::Fcrbf {
                    inputs,
                    neurons,
                    outputs,
                }
            }
            NetworkConfig::Ptrbf { neurons, outputs } => Architecture::Ptrbf {
                neurons: self.widths(rbf::PTRBF, neurons)?,
                outputs: self.widths(rbf::PTRBF, outputs)?,
            },
        };

        log::debug!("adapted {} config", architecture.label());
        Ok(architecture)
    }

    fn shallow(
        &self,
        architecture: &'static str,
        inputs: i64,
        neurons: i64,
        outputs: i64,
    ) -> Result<[usize; 3]> {
        Ok([
            self.width(architecture, 0, inputs)?,
            self.width(architecture, 1, neurons)?,
            self.width(architecture, 2, outputs)?,
        ])
    }

    fn widths(&self, architecture: &'static str, widths: &[i64]) -> Result<Vec<usize>> {
        widths
            .iter()
            .enumerate()
            .map(|(index, &width)| self.width(architecture, index, width))
            .collect()
    }

    fn width(&self, architecture: &'static str, index: usize, width: i64) -> Result<usize> {
        if width < 0 {
            return Err(ComplexityError::NegativeWidth {
                architecture,
                index,
                width,
            });
        }

        usize::try_from(width).map_err(|_| ComplexityError::WidthTooLarge {
            architecture,
            index,
            width: width as u64,
        })
    }
}
