use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, ComplexityError>;

/// All the ways a complexity estimate can be refused.
#[derive(Debug)]
pub enum ComplexityError {
    /// A layer-width sequence is shorter than the architecture allows.
    InvalidLength {
        architecture: &'static str,
        got: usize,
        min: usize,
    },
    /// The PT-RBF output counts must have exactly one more entry than the neuron counts.
    MisalignedSequences { neurons: usize, outputs: usize },
    /// A width given in a config is negative.
    NegativeWidth {
        architecture: &'static str,
        index: usize,
        width: i64,
    },
    /// A width is above `MAX_WIDTH`.
    WidthTooLarge {
        architecture: &'static str,
        index: usize,
        width: u64,
    },
    /// The resulting count does not fit in a `u64`.
    Overflow { architecture: &'static str },
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for ComplexityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength {
                architecture,
                got,
                min,
            } => write!(
                f,
                "{architecture} needs at least {min} layer widths, got {got}"
            ),
            Self::MisalignedSequences { neurons, outputs } => write!(
                f,
                "PT-RBF output counts must have one entry more than neuron counts, got {outputs} outputs for {neurons} layers"
            ),
            Self::NegativeWidth {
                architecture,
                index,
                width,
            } => write!(f, "{architecture}: width {index} is negative ({width})"),
            Self::WidthTooLarge {
                architecture,
                index,
                width,
            } => write!(
                f,
                "{architecture}: width {index} ({width}) exceeds the maximum of {}",
                crate::MAX_WIDTH
            ),
            Self::Overflow { architecture } => {
                write!(f, "{architecture}: multiplication count overflows u64")
            }
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "invalid network config: {e}"),
        }
    }
}

impl Error for ComplexityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ComplexityError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ComplexityError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_architecture() {
        let err = ComplexityError::InvalidLength {
            architecture: "MLMVN",
            got: 1,
            min: 2,
        };

        assert_eq!(err.to_string(), "MLMVN needs at least 2 layer widths, got 1");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = ComplexityError::from(io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}
