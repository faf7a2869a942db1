//! Sqrt price arithmetic
//!
//! Token amount deltas between two Q64.96 sqrt prices and price updates for a given amount of
//! token0 or token1, with the rounding direction fixed by the caller. Asset amounts are derived
//! from the virtual reserves `x = L / sqrt(P)` and `y = L * sqrt(P)`.
use alloy_primitives::{Sign, I256, U256};

use crate::{
    constants::{Q96, RESOLUTION, U160_MAX},
    errors::SwapMathError,
    full_math::{div, mul_div, Rounding},
    safe_math::safe_add_u256,
};

fn sort_ratios(a: U256, b: U256) -> (U256, U256) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

fn check_sqrt_price(sqrt_price: U256) -> Result<U256, SwapMathError> {
    if sqrt_price > U160_MAX {
        return Err(SwapMathError::Overflow(format!("sqrt price {sqrt_price} exceeds 160 bits")));
    }
    Ok(sqrt_price)
}

fn check_step_inputs(sqrt_price: U256, liquidity: u128) -> Result<(), SwapMathError> {
    if sqrt_price.is_zero() {
        return Err(SwapMathError::InvalidInput("sqrt price is zero".to_string()));
    }
    if liquidity == 0 {
        return Err(SwapMathError::InvalidInput("liquidity is zero".to_string()));
    }
    Ok(())
}

/// Amount of token0 between two sqrt prices: `L * 2^96 * (hi - lo) / hi / lo`.
///
/// The order of `a` and `b` does not matter. Both divisions round in the same direction so the
/// result is a strict bound in that direction.
///
/// # Errors
/// `InvalidInput` if the lower sqrt price is zero.
pub fn get_amount0_delta(
    a: U256,
    b: U256,
    liquidity: u128,
    rounding: Rounding,
) -> Result<U256, SwapMathError> {
    let (sqrt_ratio_a, sqrt_ratio_b) = sort_ratios(a, b);
    if sqrt_ratio_a.is_zero() {
        return Err(SwapMathError::InvalidInput("sqrt price is zero".to_string()));
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b - sqrt_ratio_a;

    div(mul_div(numerator1, numerator2, sqrt_ratio_b, rounding)?, sqrt_ratio_a, rounding)
}

/// Amount of token1 between two sqrt prices: `L * (hi - lo) / 2^96`.
pub fn get_amount1_delta(
    a: U256,
    b: U256,
    liquidity: u128,
    rounding: Rounding,
) -> Result<U256, SwapMathError> {
    let (sqrt_ratio_a, sqrt_ratio_b) = sort_ratios(a, b);
    mul_div(U256::from(liquidity), sqrt_ratio_b - sqrt_ratio_a, Q96, rounding)
}

/// Signed token0 delta for a liquidity change.
///
/// Added liquidity (positive) owes the rounded up amount to the pool, removed liquidity
/// (negative) is paid the rounded down amount.
pub fn get_amount0_delta_signed(a: U256, b: U256, liquidity: i128) -> Result<I256, SwapMathError> {
    let rounding = if liquidity < 0 { Rounding::Down } else { Rounding::Up };
    let amount = get_amount0_delta(a, b, liquidity.unsigned_abs(), rounding)?;
    to_signed(amount, liquidity < 0)
}

/// Signed token1 delta for a liquidity change. See [`get_amount0_delta_signed`].
pub fn get_amount1_delta_signed(a: U256, b: U256, liquidity: i128) -> Result<I256, SwapMathError> {
    let rounding = if liquidity < 0 { Rounding::Down } else { Rounding::Up };
    let amount = get_amount1_delta(a, b, liquidity.unsigned_abs(), rounding)?;
    to_signed(amount, liquidity < 0)
}

fn to_signed(amount: U256, negative: bool) -> Result<I256, SwapMathError> {
    let sign = if negative { Sign::Negative } else { Sign::Positive };
    I256::checked_from_sign_and_abs(sign, amount)
        .ok_or_else(|| SwapMathError::Overflow(format!("amount {amount} does not fit into I256")))
}

/// Sqrt price after `amount_in` of the input token is added to the pool.
///
/// Token0 in (`zero_for_one`) lowers the price, token1 in raises it. Both round so that the
/// price moves no further than the exact input would justify.
///
/// # Errors
/// - `InvalidInput` if `sqrt_price` or `liquidity` is zero.
/// - `Overflow` if the new price does not fit into 160 bits.
pub fn get_next_sqrt_price_from_input(
    sqrt_price: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, SwapMathError> {
    check_step_inputs(sqrt_price, liquidity)?;

    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price, liquidity, amount_in, true)
    }
}

/// Sqrt price after `amount_out` of the output token is removed from the pool.
///
/// # Errors
/// - `InvalidInput` if `sqrt_price` or `liquidity` is zero.
/// - `InsufficientReserves` if `amount_out` reaches the virtual reserves of the output token.
/// - `Overflow` if the new price does not fit into 160 bits.
pub fn get_next_sqrt_price_from_output(
    sqrt_price: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, SwapMathError> {
    check_step_inputs(sqrt_price, liquidity)?;

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price, liquidity, amount_out, false)
    }
}

fn get_next_sqrt_price_from_amount0_rounding_up(
    sqrt_price: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, SwapMathError> {
    if amount.is_zero() {
        return Ok(sqrt_price);
    }
    let numerator1 = U256::from(liquidity) << RESOLUTION;

    if add {
        // liquidity * sqrtP / (liquidity + amount * sqrtP)
        if let Some(denominator) = amount
            .checked_mul(sqrt_price)
            .and_then(|product| numerator1.checked_add(product))
        {
            return mul_div(numerator1, sqrt_price, denominator, Rounding::Up);
        }
        // liquidity / (liquidity / sqrtP + amount)
        let denominator = safe_add_u256(div(numerator1, sqrt_price, Rounding::Down)?, amount)?;
        div(numerator1, denominator, Rounding::Up)
    } else {
        let product = amount
            .checked_mul(sqrt_price)
            .filter(|product| *product < numerator1)
            .ok_or_else(|| {
                SwapMathError::InsufficientReserves(format!(
                    "token0 output {amount} exceeds virtual reserves"
                ))
            })?;
        let denominator = numerator1 - product;
        check_sqrt_price(mul_div(numerator1, sqrt_price, denominator, Rounding::Up)?)
    }
}

fn get_next_sqrt_price_from_amount1_rounding_down(
    sqrt_price: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, SwapMathError> {
    let liquidity = U256::from(liquidity);
    let rounding = if add { Rounding::Down } else { Rounding::Up };
    // amounts up to 160 bits can be shifted without leaving U256
    let quotient = if amount <= U160_MAX {
        div(amount << RESOLUTION, liquidity, rounding)?
    } else {
        mul_div(amount, Q96, liquidity, rounding)?
    };

    if add {
        check_sqrt_price(safe_add_u256(sqrt_price, quotient)?)
    } else {
        if sqrt_price <= quotient {
            return Err(SwapMathError::InsufficientReserves(format!(
                "token1 output {amount} exceeds virtual reserves"
            )));
        }
        Ok(sqrt_price - quotient)
    }
}
