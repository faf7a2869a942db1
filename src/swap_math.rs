use alloy_primitives::U256;
use tracing::{debug, trace};

use crate::{
    constants::{FEE_DENOMINATOR, U160_MAX},
    errors::SwapMathError,
    full_math::{mul_div, Rounding},
    models::{AmountSpec, SwapStepResult},
    safe_math::safe_sub_u256,
    sqrt_price_math,
};

/// Computes the result of swapping within a single price range.
///
/// The price moves from `sqrt_ratio_current` towards `sqrt_ratio_target` until either the
/// remaining amount is used up or the target is reached; it never moves past the target. The
/// direction is derived once from the two prices: a target at or below the current price means
/// token0 is sold for token1.
///
/// Every rounding decision favours the pool. Input amounts round up, output amounts round down
/// and the fee rounds up.
///
/// # Arguments
/// - `sqrt_ratio_current`: The current sqrt price of the pool (Q64.96).
/// - `sqrt_ratio_target`: The sqrt price that may not be crossed in this step.
/// - `liquidity`: The liquidity active between the two prices.
/// - `amount_remaining`: The amount still to be swapped, exact input or exact output.
/// - `fee_pips`: The fee rate in hundredths of a basis point.
///
/// # Errors
/// - `InvalidInput` if `fee_pips >= 1_000_000`, `liquidity` is zero, or either price is zero or
///   wider than 160 bits.
/// - Any arithmetic error raised while computing the step.
pub fn compute_swap_step(
    sqrt_ratio_current: U256,
    sqrt_ratio_target: U256,
    liquidity: u128,
    amount_remaining: AmountSpec,
    fee_pips: u32,
) -> Result<SwapStepResult, SwapMathError> {
    check_inputs(sqrt_ratio_current, sqrt_ratio_target, liquidity, fee_pips)?;

    let zero_for_one = sqrt_ratio_current >= sqrt_ratio_target;
    let exact_in = amount_remaining.is_exact_in();
    let amount_remaining_abs = amount_remaining.amount();
    let fee_denominator = U256::from(FEE_DENOMINATOR);

    let sqrt_ratio_next: U256;
    let mut amount_in = U256::ZERO;
    let mut amount_out = U256::ZERO;

    if exact_in {
        let amount_remaining_less_fee = mul_div(
            amount_remaining_abs,
            U256::from(FEE_DENOMINATOR - fee_pips),
            fee_denominator,
            Rounding::Down,
        )?;
        amount_in = amount_in_between(
            sqrt_ratio_current,
            sqrt_ratio_target,
            liquidity,
            zero_for_one,
        )?;
        sqrt_ratio_next = if amount_remaining_less_fee >= amount_in {
            sqrt_ratio_target
        } else {
            sqrt_price_math::get_next_sqrt_price_from_input(
                sqrt_ratio_current,
                liquidity,
                amount_remaining_less_fee,
                zero_for_one,
            )?
        };
    } else {
        amount_out = amount_out_between(
            sqrt_ratio_current,
            sqrt_ratio_target,
            liquidity,
            zero_for_one,
        )?;
        sqrt_ratio_next = if amount_remaining_abs >= amount_out {
            sqrt_ratio_target
        } else {
            sqrt_price_math::get_next_sqrt_price_from_output(
                sqrt_ratio_current,
                liquidity,
                amount_remaining_abs,
                zero_for_one,
            )?
        };
    }

    let max = sqrt_ratio_target == sqrt_ratio_next;

    // Amounts computed against the target only hold if the target was actually reached.
    if !(max && exact_in) {
        amount_in = amount_in_between(sqrt_ratio_current, sqrt_ratio_next, liquidity, zero_for_one)?;
    }
    if !(max && !exact_in) {
        amount_out =
            amount_out_between(sqrt_ratio_current, sqrt_ratio_next, liquidity, zero_for_one)?;
    }

    if !exact_in && amount_out > amount_remaining_abs {
        amount_out = amount_remaining_abs;
    }

    let fee_amount = if exact_in && !max {
        // the rest of the input is kept as fee
        safe_sub_u256(amount_remaining_abs, amount_in)?
    } else {
        mul_div(
            amount_in,
            U256::from(fee_pips),
            U256::from(FEE_DENOMINATOR - fee_pips),
            Rounding::Up,
        )?
    };

    let result = SwapStepResult {
        sqrt_price_next: sqrt_ratio_next,
        amount_in,
        amount_out,
        fee_amount,
        zero_for_one,
    };
    trace!(
        ?sqrt_ratio_current,
        ?sqrt_ratio_target,
        ?liquidity,
        ?amount_remaining,
        fee_pips,
        ?result,
        "SWAP STEP"
    );
    Ok(result)
}

/// Input needed to move the price from `from` to `to`, rounded up.
fn amount_in_between(
    from: U256,
    to: U256,
    liquidity: u128,
    zero_for_one: bool,
) -> Result<U256, SwapMathError> {
    if zero_for_one {
        sqrt_price_math::get_amount0_delta(to, from, liquidity, Rounding::Up)
    } else {
        sqrt_price_math::get_amount1_delta(from, to, liquidity, Rounding::Up)
    }
}

/// Output released by moving the price from `from` to `to`, rounded down.
fn amount_out_between(
    from: U256,
    to: U256,
    liquidity: u128,
    zero_for_one: bool,
) -> Result<U256, SwapMathError> {
    if zero_for_one {
        sqrt_price_math::get_amount1_delta(to, from, liquidity, Rounding::Down)
    } else {
        sqrt_price_math::get_amount0_delta(from, to, liquidity, Rounding::Down)
    }
}

fn check_inputs(
    sqrt_ratio_current: U256,
    sqrt_ratio_target: U256,
    liquidity: u128,
    fee_pips: u32,
) -> Result<(), SwapMathError> {
    let reason = if fee_pips >= FEE_DENOMINATOR {
        format!("fee of {fee_pips} pips is not below {FEE_DENOMINATOR}")
    } else if liquidity == 0 {
        "liquidity is zero".to_string()
    } else if sqrt_ratio_current.is_zero() || sqrt_ratio_target.is_zero() {
        "sqrt price is zero".to_string()
    } else if sqrt_ratio_current > U160_MAX || sqrt_ratio_target > U160_MAX {
        "sqrt price exceeds 160 bits".to_string()
    } else {
        return Ok(());
    };
    debug!(
        ?sqrt_ratio_current,
        ?sqrt_ratio_target,
        ?liquidity,
        fee_pips,
        "Rejected swap step: {reason}"
    );
    Err(SwapMathError::InvalidInput(reason))
}
