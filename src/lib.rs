//! Swap step pricing for concentrated-liquidity pools.
//!
//! This library computes a single bounded step of a swap against a concentrated-liquidity
//! pool: given the current sqrt price, the price bound of the active range, the liquidity in
//! that range, the amount still to be swapped and the fee rate, it returns the next price, the
//! amounts paid in and out and the fee retained.
//!
//! All arithmetic is exact integer arithmetic on `alloy-primitives` types. Products are widened
//! to 512 bits before dividing and every rounding direction is chosen so that the pool, never
//! the trader, keeps the rounding dust.
//!
//! The swap loop that walks across ranges, tick bookkeeping and token accounting live with the
//! caller; [`compute_swap_step`] is called once per range.
pub mod constants;
pub mod errors;
pub mod full_math;
pub mod models;
pub mod safe_math;
pub mod sqrt_price_math;
pub mod swap_math;

// Reexports
pub use alloy_primitives::{I256, U256};
pub use errors::SwapMathError;
pub use full_math::Rounding;
pub use models::{AmountSpec, FeeAmount, SwapStepResult};
pub use swap_math::compute_swap_step;
