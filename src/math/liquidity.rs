//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use ethnum::U256;

use crate::{
    position_status, try_tick_index_to_sqrt_price, CoreError, PositionStatus, TokenAmounts,
    AMOUNT_EXCEEDS_MAX_U128, ARITHMETIC_OVERFLOW, INVALID_TICK_RANGE,
};

/// Calculate the token amounts backing a given amount of liquidity over a
/// price range. Deposits round up, withdrawals round down, so a deposit
/// never under-funds and a withdrawal never over-pays.
///
/// # Parameters
/// - `liquidity_delta` - The amount of liquidity to get token amounts for
/// - `current_sqrt_price` - The current sqrt price of the pool
/// - `tick_lower_index` - The lower tick index of the range
/// - `tick_upper_index` - The upper tick index of the range
/// - `round_up` - Whether to round the token amounts up
///
/// # Returns
/// - `Ok`: A TokenAmounts struct containing the amounts of token A and token B
pub fn try_get_token_amounts_from_liquidity(
    liquidity_delta: u128,
    current_sqrt_price: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
    round_up: bool,
) -> Result<TokenAmounts, CoreError> {
    let status = position_status(current_sqrt_price, tick_lower_index, tick_upper_index)?;

    if liquidity_delta == 0 {
        return Ok(TokenAmounts::default());
    }

    let sqrt_price_lower = try_tick_index_to_sqrt_price(tick_lower_index)?;
    let sqrt_price_upper = try_tick_index_to_sqrt_price(tick_upper_index)?;

    match status {
        PositionStatus::PriceBelowRange => {
            let a = try_get_token_a_from_liquidity(
                liquidity_delta,
                sqrt_price_lower,
                sqrt_price_upper,
                round_up,
            )?;
            Ok(TokenAmounts { a, b: 0 })
        }
        PositionStatus::PriceInRange => {
            let a = try_get_token_a_from_liquidity(
                liquidity_delta,
                current_sqrt_price,
                sqrt_price_upper,
                round_up,
            )?;
            let b = try_get_token_b_from_liquidity(
                liquidity_delta,
                sqrt_price_lower,
                current_sqrt_price,
                round_up,
            )?;
            Ok(TokenAmounts { a, b })
        }
        PositionStatus::PriceAboveRange => {
            let b = try_get_token_b_from_liquidity(
                liquidity_delta,
                sqrt_price_lower,
                sqrt_price_upper,
                round_up,
            )?;
            Ok(TokenAmounts { a: 0, b })
        }
    }
}

/// Calculate the liquidity a token A amount is worth between two sqrt
/// prices, rounding down.
pub fn try_get_liquidity_from_a(
    token_delta_a: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> Result<u128, CoreError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(INVALID_TICK_RANGE);
    }
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    let mul: U256 = <U256>::from(token_delta_a)
        .checked_mul(sqrt_price_lower.into())
        .ok_or(ARITHMETIC_OVERFLOW)?
        .checked_mul(sqrt_price_upper.into())
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let result: U256 = (mul / sqrt_price_diff) >> 64;
    result.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
}

/// Calculate the liquidity a token B amount is worth between two sqrt
/// prices, rounding down.
pub fn try_get_liquidity_from_b(
    token_delta_b: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> Result<u128, CoreError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(INVALID_TICK_RANGE);
    }
    let numerator: U256 = <U256>::from(token_delta_b) << 64;
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    let result = numerator / <U256>::from(sqrt_price_diff);
    result.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
}

/// Calculate the token A amount backing a liquidity delta between two sqrt
/// prices.
pub fn try_get_token_a_from_liquidity(
    liquidity_delta: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<u128, CoreError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(INVALID_TICK_RANGE);
    }
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    // checked_shl only guards the shift amount, not the value, so the
    // Q64 scaling goes through checked_mul
    let numerator: U256 = <U256>::from(liquidity_delta)
        .checked_mul(sqrt_price_diff.into())
        .ok_or(ARITHMETIC_OVERFLOW)?
        .checked_mul((1u128 << 64).into())
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let denominator = <U256>::from(sqrt_price_upper)
        .checked_mul(<U256>::from(sqrt_price_lower))
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if round_up && remainder != 0 {
        (quotient + 1).try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
    } else {
        quotient.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
    }
}

/// Calculate the token B amount backing a liquidity delta between two sqrt
/// prices.
pub fn try_get_token_b_from_liquidity(
    liquidity_delta: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<u128, CoreError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(INVALID_TICK_RANGE);
    }
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    let mul: U256 = <U256>::from(liquidity_delta)
        .checked_mul(sqrt_price_diff.into())
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let result: U256 = mul >> 64;
    if round_up && mul & <U256>::from(u64::MAX) > 0 {
        (result + 1).try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
    } else {
        result.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INVALID_TICK_RANGE;

    const SQRT_PRICE_LOWER: u128 = 18437523468038800957; // tick -10
    const SQRT_PRICE_UPPER: u128 = 18455969290605290427; // tick 10

    #[test]
    fn test_token_amounts_below_range() {
        let dn = try_get_token_amounts_from_liquidity(1000000, 18354745142194483561, -10, 10, false)
            .unwrap();
        assert_eq!(dn, TokenAmounts { a: 999, b: 0 });
        let up = try_get_token_amounts_from_liquidity(1000000, 18354745142194483561, -10, 10, true)
            .unwrap();
        assert_eq!(up, TokenAmounts { a: 1000, b: 0 });
    }

    #[test]
    fn test_token_amounts_in_range() {
        let dn = try_get_token_amounts_from_liquidity(1000000, 18446744073709551616, -10, 10, false)
            .unwrap();
        assert_eq!(dn, TokenAmounts { a: 499, b: 499 });
        let up = try_get_token_amounts_from_liquidity(1000000, 18446744073709551616, -10, 10, true)
            .unwrap();
        assert_eq!(up, TokenAmounts { a: 500, b: 500 });
    }

    #[test]
    fn test_token_amounts_above_range() {
        let dn = try_get_token_amounts_from_liquidity(1000000, 18539204128674405812, -10, 10, false)
            .unwrap();
        assert_eq!(dn, TokenAmounts { a: 0, b: 999 });
        let up = try_get_token_amounts_from_liquidity(1000000, 18539204128674405812, -10, 10, true)
            .unwrap();
        assert_eq!(up, TokenAmounts { a: 0, b: 1000 });
    }

    #[test]
    fn test_token_amounts_regime_boundaries() {
        // price exactly on the lower bound is all token A
        let at_lower =
            try_get_token_amounts_from_liquidity(1000000, SQRT_PRICE_LOWER, -10, 10, false)
                .unwrap();
        assert_eq!(at_lower, TokenAmounts { a: 999, b: 0 });

        // price exactly on the upper bound is all token B
        let at_upper =
            try_get_token_amounts_from_liquidity(1000000, SQRT_PRICE_UPPER, -10, 10, false)
                .unwrap();
        assert_eq!(at_upper, TokenAmounts { a: 0, b: 999 });
    }

    #[test]
    fn test_token_amounts_zero_liquidity() {
        let result = try_get_token_amounts_from_liquidity(0, 18446744073709551616, -10, 10, true)
            .unwrap();
        assert_eq!(result, TokenAmounts { a: 0, b: 0 });
    }

    #[test]
    fn test_token_amounts_rejects_bad_range() {
        assert_eq!(
            try_get_token_amounts_from_liquidity(1000000, 18446744073709551616, 10, -10, false),
            Err(INVALID_TICK_RANGE)
        );
        assert_eq!(
            try_get_token_amounts_from_liquidity(0, 18446744073709551616, 10, 10, false),
            Err(INVALID_TICK_RANGE)
        );
    }

    #[test]
    fn test_liquidity_from_a() {
        assert_eq!(
            try_get_liquidity_from_a(500, 18446744073709551616, SQRT_PRICE_UPPER),
            Ok(1000300)
        );
        assert_eq!(
            try_get_liquidity_from_a(1000, SQRT_PRICE_LOWER, SQRT_PRICE_UPPER),
            Ok(1000049)
        );
    }

    #[test]
    fn test_liquidity_from_b() {
        assert_eq!(
            try_get_liquidity_from_b(500, SQRT_PRICE_LOWER, 18446744073709551616),
            Ok(1000300)
        );
        assert_eq!(
            try_get_liquidity_from_b(1000, SQRT_PRICE_LOWER, SQRT_PRICE_UPPER),
            Ok(1000049)
        );
    }

    #[test]
    fn test_helpers_reject_unordered_sqrt_prices() {
        // reversed and degenerate bounds must error, not wrap or divide
        // by zero
        assert_eq!(
            try_get_liquidity_from_a(1, SQRT_PRICE_UPPER, SQRT_PRICE_LOWER),
            Err(INVALID_TICK_RANGE)
        );
        assert_eq!(
            try_get_liquidity_from_b(1, SQRT_PRICE_UPPER, SQRT_PRICE_LOWER),
            Err(INVALID_TICK_RANGE)
        );
        assert_eq!(
            try_get_token_a_from_liquidity(1, SQRT_PRICE_LOWER, SQRT_PRICE_LOWER, false),
            Err(INVALID_TICK_RANGE)
        );
        assert_eq!(
            try_get_token_b_from_liquidity(1, SQRT_PRICE_UPPER, SQRT_PRICE_LOWER, false),
            Err(INVALID_TICK_RANGE)
        );
    }

    #[test]
    fn test_token_amounts_overflow_u128() {
        // max liquidity over the full tick range backs more token B than
        // u128 can hold
        assert_eq!(
            try_get_token_amounts_from_liquidity(
                u128::MAX,
                crate::MAX_SQRT_PRICE,
                crate::MIN_TICK_INDEX,
                crate::MAX_TICK_INDEX,
                false,
            ),
            Err(AMOUNT_EXCEEDS_MAX_U128)
        );
    }

    #[test]
    fn test_liquidity_token_round_trip() {
        // depositing the rounded-up amounts always covers the liquidity
        for liquidity in [1u128, 1000, 1000000, 1 << 40] {
            let amounts = try_get_token_amounts_from_liquidity(
                liquidity,
                18446744073709551616,
                -10,
                10,
                true,
            )
            .unwrap();
            let from_a = try_get_liquidity_from_a(
                amounts.a,
                18446744073709551616,
                SQRT_PRICE_UPPER,
            )
            .unwrap();
            let from_b = try_get_liquidity_from_b(
                amounts.b,
                SQRT_PRICE_LOWER,
                18446744073709551616,
            )
            .unwrap();
            assert!(from_a >= liquidity);
            assert!(from_b >= liquidity);
        }
    }
}
