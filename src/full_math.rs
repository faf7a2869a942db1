//! Full precision multiply-divide.
//!
//! Products are formed in 512 bits so `a * b / denominator` is exact for every pair of U256
//! operands; only the final quotient has to fit into 256 bits. The rounding direction is an
//! explicit argument at every call site.
use alloy_primitives::{U256, U512};
use serde::{Deserialize, Serialize};

use crate::{
    errors::SwapMathError,
    safe_math::{
        div_mod_u256, div_mod_u512, safe_add_u256, safe_add_u512, truncate_to_u256,
        widening_mul_u256,
    },
};

/// Direction in which an inexact quotient is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Towards zero (floor for unsigned values).
    Down,
    /// Away from zero whenever the division leaves a remainder.
    Up,
}

/// Computes `a * b / denominator` without intermediate overflow.
///
/// # Errors
/// - `DivisionByZero` if `denominator` is zero.
/// - `Overflow` if the rounded quotient does not fit into 256 bits.
pub fn mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, SwapMathError> {
    let product = widening_mul_u256(a, b);
    let (mut result, rest) = div_mod_u512(product, U512::from(denominator))?;
    if rounding == Rounding::Up && !rest.is_zero() {
        result = safe_add_u512(result, U512::from(1u64))?;
    }
    truncate_to_u256(result)
}

/// Divides two U256 values with the requested rounding.
pub fn div(a: U256, b: U256, rounding: Rounding) -> Result<U256, SwapMathError> {
    let (result, rest) = div_mod_u256(a, b)?;
    match rounding {
        Rounding::Up if !rest.is_zero() => safe_add_u256(result, U256::from(1u64)),
        _ => Ok(result),
    }
}
