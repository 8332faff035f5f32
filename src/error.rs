/// Error types shared across the formula modules.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AvoError>;

/// Failure modes of the library.
///
/// Every function reports errors synchronously through its return value;
/// there are no partial results.
#[derive(Debug, Error)]
pub enum AvoError {
    /// Input arrays or parameters failed validation before any computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A normal-equation matrix could not be factorized (rank-deficient
    /// design matrix, or a weight blow-up from an extreme residual
    /// distribution).
    #[error("singular normal-equation matrix")]
    SingularMatrix(#[from] ndarray_linalg::error::LinalgError),
}

/// Check that two arrays that must align sample-for-sample agree in length.
pub(crate) fn check_same_len(what: &str, a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(AvoError::InvalidInput(format!(
            "{what}: expected matching lengths, got {a} and {b}"
        )));
    }
    Ok(())
}
