use std::fmt::{self, Display};

use serde::Serialize;

use crate::{error::ComplexityError, feedforward, rbf, Result};

/// The largest layer width accepted by any estimator.
pub const MAX_WIDTH: usize = u32::MAX as usize;

/// Real-valued multiplications needed by a network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Complexity {
    /// Multiplications per SGD training iteration.
    pub training: u64,
    /// Multiplications per inference pass.
    pub inference: u64,
}

impl Complexity {
    pub fn new(training: u64, inference: u64) -> Self {
        Self {
            training,
            inference,
        }
    }

    /// Returns the `(training, inference)` pair.
    pub fn into_pair(self) -> (u64, u64) {
        self.into()
    }
}

impl From<Complexity> for (u64, u64) {
    fn from(c: Complexity) -> Self {
        (c.training, c.inference)
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "training: {} FLOP, inference: {} FLOP",
            self.training, self.inference
        )
    }
}

/// An owned description of one of the supported networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    Cvfnn(Vec<usize>),
    Scfnn(Vec<usize>),
    Mlmvn(Vec<usize>),
    Crbf {
        inputs: usize,
        neurons: usize,
        outputs: usize,
    },
    Fcrbf {
        inputs: usize,
        neurons: usize,
        outputs: usize,
    },
    Ptrbf {
        neurons: Vec<usize>,
        outputs: Vec<usize>,
    },
}

impl Architecture {
    /// Returns the short name the literature uses for this family.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cvfnn(_) => feedforward::CVFNN,
            Self::Scfnn(_) => feedforward::SCFNN,
            Self::Mlmvn(_) => feedforward::MLMVN,
            Self::Crbf { .. } => rbf::CRBF,
            Self::Fcrbf { .. } => rbf::FCRBF,
            Self::Ptrbf { .. } => rbf::PTRBF,
        }
    }

    /// Evaluates the multiplication counts of this network.
    ///
    /// # Errors
    /// Whatever the matching estimator returns for these widths.
    pub fn complexity(&self) -> Result<Complexity> {
        match self {
            Self::Cvfnn(layers) => feedforward::cvfnn_complexity(layers),
            Self::Scfnn(layers) => feedforward::scfnn_complexity(layers),
            Self::Mlmvn(layers) => feedforward::mlmvn_complexity(layers),
            Self::Crbf {
                inputs,
                neurons,
                outputs,
            } => rbf::crbf_complexity(*inputs, *neurons, *outputs),
            Self::Fcrbf {
                inputs,
                neurons,
                outputs,
            } => rbf::fcrbf_complexity(*inputs, *neurons, *outputs),
            Self::Ptrbf { neurons, outputs } => rbf::ptrbf_complexity(neurons, outputs),
        }
    }
}

/// Widens every width for overflow-free accumulation.
///
/// # Errors
/// `WidthTooLarge` for the first width above `MAX_WIDTH`.
pub(crate) fn widen(architecture: &'static str, widths: &[usize]) -> Result<Vec<u128>> {
    widths
        .iter()
        .enumerate()
        .map(|(index, &width)| {
            if width > MAX_WIDTH {
                return Err(ComplexityError::WidthTooLarge {
                    architecture,
                    index,
                    width: width as u64,
                });
            }

            Ok(width as u128)
        })
        .collect()
}

/// Narrows both accumulated counts back to `u64`.
pub(crate) fn finish(
    architecture: &'static str,
    training: u128,
    inference: u128,
) -> Result<Complexity> {
    let narrow = |count: u128| {
        u64::try_from(count).map_err(|_| ComplexityError::Overflow { architecture })
    };

    let complexity = Complexity::new(narrow(training)?, narrow(inference)?);
    log::debug!("{architecture}: {complexity}");
    Ok(complexity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_training_inference_pair() {
        let pair: (u64, u64) = Complexity::new(4712, 1900).into();
        assert_eq!(pair, (4712, 1900));
    }

    #[test]
    fn architecture_dispatches_to_its_estimator() {
        let arch = Architecture::Fcrbf {
            inputs: 6,
            neurons: 100,
            outputs: 3,
        };

        assert_eq!(arch.label(), "FC-RBF");
        assert_eq!(arch.complexity().unwrap(), Complexity::new(12012, 3600));
    }

    #[test]
    fn widen_rejects_oversized_widths() {
        let err = widen("CVFNN", &[6, MAX_WIDTH + 1]).unwrap_err();

        assert!(matches!(
            err,
            ComplexityError::WidthTooLarge { index: 1, .. }
        ));
    }

    #[test]
    fn finish_reports_overflow() {
        let err = finish("C-RBF", u64::MAX as u128 + 1, 0).unwrap_err();
        assert!(matches!(err, ComplexityError::Overflow { architecture: "C-RBF" }));
    }

    #[test]
    fn displays_both_counts() {
        assert_eq!(
            Complexity::new(8948, 3492).to_string(),
            "training: 8948 FLOP, inference: 3492 FLOP"
        );
    }
}
