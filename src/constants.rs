use alloy_primitives::U256;

/// Number of fractional bits of a Q64.96 sqrt price.
pub const RESOLUTION: usize = 96;

/// 2^96, the fixed-point representation of one.
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);

/// 2^160 - 1. Sqrt prices never exceed 160 bits.
pub const U160_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, 4294967295, 0]);

/// Fee rates are expressed in pips, hundredths of a basis point.
pub const FEE_DENOMINATOR: u32 = 1_000_000;
