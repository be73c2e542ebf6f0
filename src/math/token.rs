//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use ethnum::U256;

use crate::{
    CoreError, AMOUNT_EXCEEDS_MAX_U128, ARITHMETIC_OVERFLOW, INVALID_SLIPPAGE_TOLERANCE,
    SLIPPAGE_TOLERANCE_MUL_VALUE,
};

/// Compute `a * b / denominator` in 256-bit space with explicit rounding.
///
/// # Parameters
/// - `a` - A u128 integer representing the multiplicand
/// - `b` - A u128 integer representing the multiplier
/// - `denominator` - A u128 integer representing the divisor
/// - `round_up` - A boolean indicating if the result should round up
///
/// # Returns
/// - `Ok`: A u128 integer representing the result
pub fn try_mul_div(a: u128, b: u128, denominator: u128, round_up: bool) -> Result<u128, CoreError> {
    if denominator == 0 {
        return Err(ARITHMETIC_OVERFLOW);
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let product = <U256>::from(a) * <U256>::from(b);
    let quotient = product / denominator;
    let remainder = product % denominator;

    let result = if round_up && remainder != 0 {
        quotient + 1
    } else {
        quotient
    };

    result.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
}

/// Apply a slippage tolerance downwards, rounding against the user.
/// The tolerance is expressed in basis points and must be below 100%.
///
/// # Parameters
/// - `amount` - A u128 integer representing the estimated amount
/// - `slippage_tolerance_bps` - A u16 integer representing the slippage tolerance in basis points
///
/// # Returns
/// - `Ok`: A u128 integer representing the minimum acceptable amount
pub fn try_get_min_amount_with_slippage_tolerance(
    amount: u128,
    slippage_tolerance_bps: u16,
) -> Result<u128, CoreError> {
    if slippage_tolerance_bps >= SLIPPAGE_TOLERANCE_MUL_VALUE {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = (SLIPPAGE_TOLERANCE_MUL_VALUE - slippage_tolerance_bps) as u128;
    try_mul_div(amount, numerator, SLIPPAGE_TOLERANCE_MUL_VALUE as u128, false)
}

/// Apply a slippage tolerance upwards, rounding against the user.
///
/// # Parameters
/// - `amount` - A u128 integer representing the estimated amount
/// - `slippage_tolerance_bps` - A u16 integer representing the slippage tolerance in basis points
///
/// # Returns
/// - `Ok`: A u128 integer representing the maximum acceptable amount
pub fn try_get_max_amount_with_slippage_tolerance(
    amount: u128,
    slippage_tolerance_bps: u16,
) -> Result<u128, CoreError> {
    if slippage_tolerance_bps >= SLIPPAGE_TOLERANCE_MUL_VALUE {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = (SLIPPAGE_TOLERANCE_MUL_VALUE + slippage_tolerance_bps) as u128;
    try_mul_div(amount, numerator, SLIPPAGE_TOLERANCE_MUL_VALUE as u128, true)
}
