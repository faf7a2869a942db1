//! Safe Math
//!
//! Checked arithmetic on the fixed width integers of `alloy-primitives`. An operation that
//! would wrap returns a `SwapMathError` instead, so overflow always surfaces to the caller.
//! Functions for the types U256 and U512 are available.
use alloy_primitives::{U256, U512};

use crate::errors::SwapMathError;

pub fn safe_add_u256(a: U256, b: U256) -> Result<U256, SwapMathError> {
    construct_result_u256(a.checked_add(b), "add")
}

pub fn safe_sub_u256(a: U256, b: U256) -> Result<U256, SwapMathError> {
    construct_result_u256(a.checked_sub(b), "sub")
}

pub fn div_mod_u256(a: U256, b: U256) -> Result<(U256, U256), SwapMathError> {
    if b.is_zero() {
        return Err(SwapMathError::DivisionByZero);
    }
    Ok((a / b, a % b))
}

fn construct_result_u256(res: Option<U256>, op: &str) -> Result<U256, SwapMathError> {
    res.ok_or_else(|| SwapMathError::Overflow(format!("U256 {op}")))
}

/// Widening multiplication. The product of two U256 values always fits into 512 bits.
pub fn widening_mul_u256(a: U256, b: U256) -> U512 {
    U512::from(a) * U512::from(b)
}

pub fn safe_add_u512(a: U512, b: U512) -> Result<U512, SwapMathError> {
    a.checked_add(b)
        .ok_or_else(|| SwapMathError::Overflow("U512 add".to_string()))
}

pub fn div_mod_u512(a: U512, b: U512) -> Result<(U512, U512), SwapMathError> {
    if b.is_zero() {
        return Err(SwapMathError::DivisionByZero);
    }
    Ok((a / b, a % b))
}

/// Narrows a U512 back to U256, failing if any of the upper 256 bits are set.
pub fn truncate_to_u256(value: U512) -> Result<U256, SwapMathError> {
    let limbs = value.as_limbs();
    if limbs[4..].iter().any(|limb| *limb != 0) {
        return Err(SwapMathError::Overflow("value exceeds 256 bits".to_string()));
    }
    Ok(U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]))
}
