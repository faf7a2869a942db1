//! Basic data structures
//!
//! Inputs and results of a single swap step. `AmountSpec` carries the swap mode explicitly,
//! `FeeAmount` lists the standard fee tiers and `SwapStepResult` is what the pricing kernel hands
//! back to the swap loop.
use alloy_primitives::{I256, U256};
use serde::{Deserialize, Serialize};

use crate::{errors::SwapMathError, safe_math::safe_add_u256};

/// Amount still to be swapped, tagged with the swap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountSpec {
    /// Exact amount of the input token the caller delivers into the pool, fee included.
    ExactIn(U256),
    /// Exact amount of the output token the caller wants to receive.
    ExactOut(U256),
}

impl AmountSpec {
    /// The unsigned amount regardless of mode.
    pub fn amount(&self) -> U256 {
        match self {
            AmountSpec::ExactIn(amount) | AmountSpec::ExactOut(amount) => *amount,
        }
    }

    pub fn is_exact_in(&self) -> bool {
        matches!(self, AmountSpec::ExactIn(_))
    }
}

/// Signed convention used by swap loops that track the remaining amount as one integer:
/// non-negative values are exact input, negative values request their magnitude as output.
impl From<I256> for AmountSpec {
    fn from(value: I256) -> Self {
        if value.is_negative() {
            AmountSpec::ExactOut(value.unsigned_abs())
        } else {
            AmountSpec::ExactIn(value.into_raw())
        }
    }
}

/// Standard fee tiers in pips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeAmount {
    Lowest = 100,
    Low = 500,
    Medium = 3000,
    High = 10_000,
}

impl FeeAmount {
    /// Fee rate in hundredths of a basis point.
    pub fn pips(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = SwapMathError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(FeeAmount::Lowest),
            500 => Ok(FeeAmount::Low),
            3000 => Ok(FeeAmount::Medium),
            10_000 => Ok(FeeAmount::High),
            _ => Err(SwapMathError::InvalidInput(format!("{value} is not a standard fee tier"))),
        }
    }
}

/// Outcome of one bounded swap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStepResult {
    /// Sqrt price after the step, between the current and the target price inclusive.
    pub sqrt_price_next: U256,
    /// Input token paid into the pool, excluding the fee.
    pub amount_in: U256,
    /// Output token paid out of the pool.
    pub amount_out: U256,
    /// Fee retained by the pool, in the input token.
    pub fee_amount: U256,
    /// True when token0 is sold for token1, i.e. the price is falling.
    pub zero_for_one: bool,
}

impl SwapStepResult {
    /// Total the payer is charged for this step.
    pub fn amount_in_with_fee(&self) -> Result<U256, SwapMathError> {
        safe_add_u256(self.amount_in, self.fee_amount)
    }
}
