#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A matrix access landed outside the operand's actual shape.
    ///
    /// The multiplication kernel infers dimensions from the outer length and
    /// the first-row length of each operand and performs no up-front shape
    /// validation, so mismatched or ragged inputs surface here at the first
    /// out-of-range access.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
}
