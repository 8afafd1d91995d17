//! Feed-forward networks described by their full layer-width sequence,
//! input and output layers included.

use crate::{
    complexity::{finish, widen},
    error::ComplexityError,
    Complexity, Result,
};

pub(crate) const CVFNN: &str = "CVFNN";
pub(crate) const SCFNN: &str = "SCFNN";
pub(crate) const MLMVN: &str = "MLMVN";

/// Input and output layers. A sequence of exactly this length has no hidden layer.
const MIN_LAYERS: usize = 2;

/// Computes the complexity of a fully complex-valued feed-forward network.
///
/// # Args
/// * `layers` - Neurons per layer, including the input and output layers.
///
/// # Returns
/// The multiplications per SGD training iteration and per inference pass.
///
/// # Errors
/// `InvalidLength` for fewer than two layers, `WidthTooLarge` for oversized widths.
///
/// ```
/// # use cvnn_complexity::{cvfnn_complexity, Complexity};
/// // 6 inputs, 97 hidden neurons and 3 outputs.
/// let complexity = cvfnn_complexity(&[6, 97, 3])?;
/// assert_eq!(complexity, Complexity::new(8948, 3492));
/// # Ok::<(), cvnn_complexity::ComplexityError>(())
/// ```
pub fn cvfnn_complexity(layers: &[usize]) -> Result<Complexity> {
    let w = layer_widths(CVFNN, layers)?;
    let (last, prev) = output_layer(&w);

    let training = 4 * hidden_terms(&w, 2) + 8 * last * (prev + 1);
    let inference = 4 * weighted_sums(&w, 0);
    finish(CVFNN, training, inference)
}

/// Computes the complexity of a split-complex feed-forward network.
///
/// Hidden layers cost the same as in a CVFNN, only the output layer differs.
///
/// # Errors
/// `InvalidLength` for fewer than two layers, `WidthTooLarge` for oversized widths.
pub fn scfnn_complexity(layers: &[usize]) -> Result<Complexity> {
    let w = layer_widths(SCFNN, layers)?;
    let (last, prev) = output_layer(&w);

    let training = 4 * hidden_terms(&w, 2) + 2 * last * (4 * prev + 3);
    let inference = 4 * weighted_sums(&w, 0);
    finish(SCFNN, training, inference)
}

/// Computes the complexity of a multilayer network of multi-valued neurons.
///
/// Unlike the CVFNN and SCFNN, every non-input neuron also pays for its bias
/// during inference.
///
/// # Errors
/// `InvalidLength` for fewer than two layers, `WidthTooLarge` for oversized widths.
pub fn mlmvn_complexity(layers: &[usize]) -> Result<Complexity> {
    let w = layer_widths(MLMVN, layers)?;
    let (last, prev) = output_layer(&w);

    let training = 4 * hidden_terms(&w, 4) + 4 * last * (2 * prev + 3);
    let inference = 4 * weighted_sums(&w, 1);
    finish(MLMVN, training, inference)
}

fn layer_widths(architecture: &'static str, layers: &[usize]) -> Result<Vec<u128>> {
    if layers.len() < MIN_LAYERS {
        return Err(ComplexityError::InvalidLength {
            architecture,
            got: layers.len(),
            min: MIN_LAYERS,
        });
    }

    widen(architecture, layers)
}

/// Returns the output layer width and the width feeding it.
fn output_layer(w: &[u128]) -> (u128, u128) {
    let n = w.len();
    (w[n - 1], w[n - 2])
}

/// Sums `I[l] * (2 * I[l - 1] + I[l + 1] + bias)` over the hidden layers.
///
/// Empty when there is no hidden layer.
fn hidden_terms(w: &[u128], bias: u128) -> u128 {
    w.windows(3)
        .map(|l| l[1] * (2 * l[0] + l[2] + bias))
        .sum()
}

/// Sums `I[l] * (I[l - 1] + bias)` over every non-input layer.
fn weighted_sums(w: &[u128], bias: u128) -> u128 {
    w.windows(2).map(|l| l[1] * (l[0] + bias)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hidden_layer_keeps_only_the_output_term() {
        // 8 * 3 * (6 + 1), 4 * 3 * 6
        assert_eq!(cvfnn_complexity(&[6, 3]).unwrap(), Complexity::new(168, 72));
        // 2 * 3 * (4 * 6 + 3)
        assert_eq!(scfnn_complexity(&[6, 3]).unwrap(), Complexity::new(162, 72));
        // 4 * 3 * (2 * 6 + 3), 4 * 3 * 7
        assert_eq!(mlmvn_complexity(&[6, 3]).unwrap(), Complexity::new(180, 84));
    }

    #[test]
    fn deep_networks_sum_every_hidden_layer() {
        // hidden: 4*4*(2*2+3+2) + 4*3*(2*4+1+2), output: 8*1*(3+1)
        // inference: 4*(4*2 + 3*4 + 1*3)
        assert_eq!(
            cvfnn_complexity(&[2, 4, 3, 1]).unwrap(),
            Complexity::new(144 + 132 + 32, 92)
        );
    }

    #[test]
    fn rejects_sequences_without_an_output_layer() {
        let cases: [&[usize]; 2] = [&[], &[6]];
        for layers in cases {
            let err = mlmvn_complexity(layers).unwrap_err();
            assert!(matches!(
                err,
                ComplexityError::InvalidLength {
                    architecture: "MLMVN",
                    min: 2,
                    ..
                }
            ));
        }
    }

    #[test]
    fn zero_widths_cost_nothing_but_the_output() {
        assert_eq!(cvfnn_complexity(&[0, 0, 0]).unwrap(), Complexity::new(0, 0));
        assert_eq!(mlmvn_complexity(&[0, 0, 2]).unwrap(), Complexity::new(24, 8));
    }
}
