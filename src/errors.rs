//! Swap math errors
use thiserror::Error;

/// Errors raised by the swap step arithmetic.
///
/// All variants are unrecoverable for the step that produced them: they signal either inputs
/// that violate the kernel's preconditions or a result that cannot be represented. The caller
/// running the swap loop decides how to surface them.
/// Variants:
/// - `Overflow`: a result or intermediate value does not fit into its integer width.
/// - `DivisionByZero`: a denominator was zero.
/// - `InsufficientReserves`: the requested output meets or exceeds the virtual reserves available
///   at the given liquidity.
/// - `InvalidInput`: a precondition such as non-zero liquidity or a valid fee rate was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapMathError {
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Insufficient reserves: {0}")]
    InsufficientReserves(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
