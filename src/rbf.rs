//! Radial basis function networks.
//!
//! C-RBF and FC-RBF only exist as shallow networks: an input layer, a single
//! RBF layer and an output layer. PT-RBF stacks any number of RBF layers.

use crate::{
    complexity::{finish, widen},
    error::ComplexityError,
    Complexity, Result,
};

pub(crate) const CRBF: &str = "C-RBF";
pub(crate) const FCRBF: &str = "FC-RBF";
pub(crate) const PTRBF: &str = "PT-RBF";

/// Computes the complexity of a shallow complex RBF network.
///
/// # Args
/// * `inputs` - Number of inputs.
/// * `neurons` - Number of neurons in the RBF layer.
/// * `outputs` - Number of outputs.
///
/// # Errors
/// `WidthTooLarge` if any count is above `MAX_WIDTH`.
///
/// ```
/// # use cvnn_complexity::crbf_complexity;
/// let (training, inference) = crbf_complexity(6, 100, 3)?.into_pair();
/// assert_eq!((training, inference), (4712, 1900));
/// # Ok::<(), cvnn_complexity::ComplexityError>(())
/// ```
pub fn crbf_complexity(inputs: usize, neurons: usize, outputs: usize) -> Result<Complexity> {
    let [i, n, o] = shallow_widths(CRBF, inputs, neurons, outputs)?;

    let training = n * (4 * i + 6 * o + 5) + 4 * o;
    let inference = n * (2 * i + 2 * o + 1);
    finish(CRBF, training, inference)
}

/// Computes the complexity of a shallow fully complex RBF network.
///
/// # Errors
/// `WidthTooLarge` if any count is above `MAX_WIDTH`.
pub fn fcrbf_complexity(inputs: usize, neurons: usize, outputs: usize) -> Result<Complexity> {
    let [i, n, o] = shallow_widths(FCRBF, inputs, neurons, outputs)?;

    let training = 12 * n * (i + o + 1) + 4 * o;
    let inference = 4 * n * (i + o);
    finish(FCRBF, training, inference)
}

/// Computes the complexity of a phase-transmittance RBF network.
///
/// Layers are numbered from 1: `neurons[l - 1]` is the neuron count of layer
/// `l`, whose inputs number `outputs[l - 1]` and whose outputs number
/// `outputs[l]`. `outputs[0]` is therefore the network input width and the last
/// entry the network output width. A layer 0 would have no neurons.
///
/// # Args
/// * `neurons` - Neurons per RBF layer.
/// * `outputs` - Outputs per layer, starting with the network inputs.
///
/// # Errors
/// `InvalidLength` without RBF layers, `MisalignedSequences` unless
/// `outputs.len() == neurons.len() + 1`, `WidthTooLarge` for oversized widths.
///
/// ```
/// # use cvnn_complexity::{ptrbf_complexity, Complexity};
/// // 6 inputs, a first layer with 50 neurons and 50 outputs, and a second
/// // layer with 50 neurons and 3 outputs.
/// let complexity = ptrbf_complexity(&[50, 50], &[6, 50, 3])?;
/// assert_eq!(complexity, Complexity::new(54412, 16400));
/// # Ok::<(), cvnn_complexity::ComplexityError>(())
/// ```
pub fn ptrbf_complexity(neurons: &[usize], outputs: &[usize]) -> Result<Complexity> {
    if neurons.is_empty() {
        return Err(ComplexityError::InvalidLength {
            architecture: PTRBF,
            got: 0,
            min: 1,
        });
    }
    if outputs.len() != neurons.len() + 1 {
        return Err(ComplexityError::MisalignedSequences {
            neurons: neurons.len(),
            outputs: outputs.len(),
        });
    }

    let n = widen(PTRBF, neurons)?;
    let o = widen(PTRBF, outputs)?;
    let layers = n.len();

    // Layer l, fed by outputs[l - 1] and producing outputs[l].
    let rbf_terms: u128 = n
        .iter()
        .zip(o.windows(2))
        .map(|(&width, io)| width * (io[0] + 3 * io[1] + 3))
        .sum();
    // Outputs of layer l back-propagated through layer l + 1.
    let backprop_terms: u128 = o[1..layers]
        .iter()
        .zip(&n[1..])
        .map(|(&out, &next)| out * (next + 1))
        .sum();
    let inference_terms: u128 = n
        .iter()
        .zip(o.windows(2))
        .map(|(&width, io)| width * (io[0] + 2 * io[1] + 1))
        .sum();

    let training = 4 * rbf_terms + 4 * backprop_terms + 4 * o[layers];
    let inference = 2 * inference_terms;
    finish(PTRBF, training, inference)
}

fn shallow_widths(
    architecture: &'static str,
    inputs: usize,
    neurons: usize,
    outputs: usize,
) -> Result<[u128; 3]> {
    let w = widen(architecture, &[inputs, neurons, outputs])?;
    Ok([w[0], w[1], w[2]])
}
