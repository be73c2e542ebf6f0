//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use ethnum::U256;

use crate::{
    is_tick_index_in_bounds, try_tick_index_to_sqrt_price, CoreError, PositionRatio,
    PositionStatus, INVALID_TICK_RANGE,
};

/// Check if a position is in range.
/// When a position is in range it is earning fees and rewards
///
/// # Parameters
/// - `current_sqrt_price` - A u128 integer representing the sqrt price of the pool
/// - `tick_lower_index` - A i32 integer representing the lower tick index of the position
/// - `tick_upper_index` - A i32 integer representing the upper tick index of the position
///
/// # Returns
/// - A boolean value indicating if the position is in range
pub fn is_position_in_range(
    current_sqrt_price: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<bool, CoreError> {
    let status = position_status(current_sqrt_price, tick_lower_index, tick_upper_index)?;
    Ok(status == PositionStatus::PriceInRange)
}

/// Calculate the status of a position.
/// The status can be one of three values:
/// - PriceInRange: The position is in range
/// - PriceBelowRange: The current price is at or below the lower bound
/// - PriceAboveRange: The current price is at or above the upper bound
///
/// The tick range is taken as given and is never reordered; a range where
/// the lower index does not sit strictly below the upper is rejected.
///
/// # Parameters
/// - `current_sqrt_price` - A u128 integer representing the sqrt price of the pool
/// - `tick_lower_index` - A i32 integer representing the lower tick index of the position
/// - `tick_upper_index` - A i32 integer representing the upper tick index of the position
///
/// # Returns
/// - `Ok`: A PositionStatus enum value indicating the status of the position
pub fn position_status(
    current_sqrt_price: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<PositionStatus, CoreError> {
    if tick_lower_index >= tick_upper_index
        || !is_tick_index_in_bounds(tick_lower_index)
        || !is_tick_index_in_bounds(tick_upper_index)
    {
        return Err(INVALID_TICK_RANGE);
    }

    let sqrt_price_lower = try_tick_index_to_sqrt_price(tick_lower_index)?;
    let sqrt_price_upper = try_tick_index_to_sqrt_price(tick_upper_index)?;

    if current_sqrt_price <= sqrt_price_lower {
        Ok(PositionStatus::PriceBelowRange)
    } else if current_sqrt_price >= sqrt_price_upper {
        Ok(PositionStatus::PriceAboveRange)
    } else {
        Ok(PositionStatus::PriceInRange)
    }
}

/// Calculate the token_a / token_b deposit ratio of a (fictitious) position
///
/// # Parameters
/// - `current_sqrt_price` - A u128 integer representing the sqrt price of the pool
/// - `tick_lower_index` - A i32 integer representing the lower tick index of the position
/// - `tick_upper_index` - A i32 integer representing the upper tick index of the position
///
/// # Returns
/// - `Ok`: A PositionRatio struct containing the ratio of token_a and token_b
pub fn position_ratio_x64(
    current_sqrt_price: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<PositionRatio, CoreError> {
    let one_x64: u128 = 1 << 64;
    let status = position_status(current_sqrt_price, tick_lower_index, tick_upper_index)?;
    match status {
        PositionStatus::PriceBelowRange => Ok(PositionRatio {
            ratio_a: one_x64,
            ratio_b: 0,
        }),
        PositionStatus::PriceAboveRange => Ok(PositionRatio {
            ratio_a: 0,
            ratio_b: one_x64,
        }),
        PositionStatus::PriceInRange => {
            let lower_sqrt_price = try_tick_index_to_sqrt_price(tick_lower_index)?;
            let upper_sqrt_price = try_tick_index_to_sqrt_price(tick_upper_index)?;

            let l: U256 = <U256>::from(1u16) << 64;
            let p = <U256>::from(current_sqrt_price) * <U256>::from(current_sqrt_price);

            let deposit_a_1: U256 = (l << 64) / current_sqrt_price;
            let deposit_a_2: U256 = (l << 64) / upper_sqrt_price;
            let deposit_a: U256 = ((deposit_a_1 - deposit_a_2) * p) >> 64;

            let deposit_b_1 = current_sqrt_price - lower_sqrt_price;
            let deposit_b = l * deposit_b_1;

            let total_deposit: U256 = deposit_a + deposit_b;

            let ratio_a: u128 = ((deposit_a * <U256>::from(one_x64)) / total_deposit).as_u128();
            let ratio_b: u128 = one_x64 - ratio_a;

            Ok(PositionRatio { ratio_a, ratio_b })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_TICK_INDEX, MIN_TICK_INDEX};

    #[test]
    fn test_is_position_in_range() {
        assert_eq!(is_position_in_range(18446744073709551616, -5, 5), Ok(true));
        assert_eq!(is_position_in_range(18446744073709551616, 0, 5), Ok(false));
        assert_eq!(is_position_in_range(18446744073709551616, -5, 0), Ok(false));
        assert_eq!(is_position_in_range(18446744073709551616, -5, -1), Ok(false));
        assert_eq!(is_position_in_range(18446744073709551616, 1, 5), Ok(false));
    }

    #[test]
    fn test_position_status() {
        assert_eq!(position_status(18354745142194483560, -100, 100), Ok(PositionStatus::PriceBelowRange));
        assert_eq!(position_status(18354745142194483561, -100, 100), Ok(PositionStatus::PriceBelowRange));
        assert_eq!(position_status(18354745142194483562, -100, 100), Ok(PositionStatus::PriceInRange));
        assert_eq!(position_status(18446744073709551616, -100, 100), Ok(PositionStatus::PriceInRange));
        assert_eq!(position_status(18539204128674405811, -100, 100), Ok(PositionStatus::PriceInRange));
        assert_eq!(position_status(18539204128674405812, -100, 100), Ok(PositionStatus::PriceAboveRange));
        assert_eq!(position_status(18539204128674405813, -100, 100), Ok(PositionStatus::PriceAboveRange));
    }

    #[test]
    fn test_position_status_rejects_bad_range() {
        assert_eq!(position_status(18446744073709551616, 100, 100), Err(INVALID_TICK_RANGE));
        assert_eq!(position_status(18446744073709551616, 100, -100), Err(INVALID_TICK_RANGE));
        assert_eq!(position_status(18446744073709551616, MIN_TICK_INDEX - 1, 100), Err(INVALID_TICK_RANGE));
        assert_eq!(position_status(18446744073709551616, -100, MAX_TICK_INDEX + 1), Err(INVALID_TICK_RANGE));
    }

    #[test]
    fn test_position_ratio_x64() {
        let ratio_1 = position_ratio_x64(18354745142194483561, -100, 100).unwrap();
        assert_eq!(ratio_1.ratio_a, 1 << 64);
        assert_eq!(ratio_1.ratio_b, 0);

        let ratio_2 = position_ratio_x64(18446744073709551616, -100, 100).unwrap();
        assert_eq!(ratio_2.ratio_a, 9223372036854775707); // <50%
        assert_eq!(ratio_2.ratio_b, 9223372036854775909); // >50%

        let ratio_3 = position_ratio_x64(18539204128674405812, -100, 100).unwrap();
        assert_eq!(ratio_3.ratio_a, 0);
        assert_eq!(ratio_3.ratio_b, 1 << 64);

        let ratio_4 = position_ratio_x64(7267764841821948241, -21136, -17240).unwrap();
        assert_eq!(ratio_4.ratio_a, 6696687687134031069);
        assert_eq!(ratio_4.ratio_b, 11750056386575520547);

        assert_eq!(position_ratio_x64(18446744073709551616, 0, 0), Err(INVALID_TICK_RANGE));
    }
}
