use thiserror::Error;

/// An error type for the checked matrix operations.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// The buffer used to build a matrix does not hold exactly four elements.
    #[error("Invalid buffer length: expected 4 elements, got {0}")]
    InvalidBufferLength(usize),

    /// The matrix has a zero or non-finite determinant and cannot be inverted.
    #[error("Singular matrix: determinant is {0}")]
    Singular(f64),

    /// A row or column index is outside of `0..2`.
    #[error("Index out of bounds: ({0}, {1}) is outside of a 2x2 matrix")]
    IndexOutOfBounds(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatrixError::InvalidBufferLength(3).to_string(),
            "Invalid buffer length: expected 4 elements, got 3"
        );
        assert_eq!(
            MatrixError::Singular(0.0).to_string(),
            "Singular matrix: determinant is 0"
        );
        assert_eq!(
            MatrixError::IndexOutOfBounds(2, 0).to_string(),
            "Index out of bounds: (2, 0) is outside of a 2x2 matrix"
        );
    }
}
