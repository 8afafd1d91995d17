//! Closed-form computational complexities of complex-valued neural networks.
//!
//! Every estimator counts real-valued multiplications for one SGD training
//! iteration and for one inference pass:
//!
//! | Network | Estimator           |
//! |---------|---------------------|
//! | CVFNN   | [`cvfnn_complexity`] |
//! | SCFNN   | [`scfnn_complexity`] |
//! | MLMVN   | [`mlmvn_complexity`] |
//! | C-RBF   | [`crbf_complexity`]  |
//! | FC-RBF  | [`fcrbf_complexity`] |
//! | PT-RBF  | [`ptrbf_complexity`] |
//!
//! The formulas follow K. S. Mayer, J. A. Soares, A. A. Cruz and D. S. Arantes,
//! "On the computational complexities of complex-valued neural networks",
//! IEEE Latin-American Conference on Communications, 2023.

mod complexity;
pub mod configs;
pub mod error;
mod feedforward;
mod rbf;

pub use complexity::{Architecture, Complexity, MAX_WIDTH};
pub use error::{ComplexityError, Result};
pub use feedforward::{cvfnn_complexity, mlmvn_complexity, scfnn_complexity};
pub use rbf::{crbf_complexity, fcrbf_complexity, ptrbf_complexity};
