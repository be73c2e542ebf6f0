//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use crate::{
    try_get_token_amounts_from_liquidity, try_mul_div, CoreError, SpecifiedAmount, TokenAmounts,
    INCOMPLETE_QUOTE_INPUT,
};

// Liquidity at which the per-token deposit ratio of a range is sampled.
// Large enough that integer truncation of the unit amounts is negligible.
const RATIO_REFERENCE_LIQUIDITY: u128 = 1 << 64;

/// Given one side of a deposit, derive the amount of the other token that
/// matches the deposit ratio of the range at the current price.
///
/// The ratio is taken as the exact rational between the two token amounts
/// backing a reference amount of liquidity, so the derived amount carries a
/// single rounding step regardless of how close the ratio is to 1.
///
/// When the range is entirely on one side of the current price the position
/// is single-sided: fixing the active token yields zero of the other, and
/// fixing a nonzero amount of the inactive token is rejected since no
/// counterpart amount can satisfy it.
///
/// # Parameters
/// - `specified` - The token amount the caller has fixed
/// - `round_up` - Whether to round the derived amount up (deposits) or down (withdrawals)
/// - `current_sqrt_price` - The current sqrt price of the pool
/// - `tick_lower_index` - The lower tick index of the range
/// - `tick_upper_index` - The upper tick index of the range
///
/// # Returns
/// - `Ok`: A TokenAmounts struct containing the specified and derived amounts
pub fn matching_amounts_quote(
    specified: SpecifiedAmount,
    round_up: bool,
    current_sqrt_price: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<TokenAmounts, CoreError> {
    let unit = try_get_token_amounts_from_liquidity(
        RATIO_REFERENCE_LIQUIDITY,
        current_sqrt_price,
        tick_lower_index,
        tick_upper_index,
        false,
    )?;

    match specified {
        SpecifiedAmount::TokenA(amount) => {
            if unit.a == 0 {
                if amount == 0 {
                    Ok(TokenAmounts::default())
                } else {
                    Err(INCOMPLETE_QUOTE_INPUT)
                }
            } else if unit.b == 0 {
                Ok(TokenAmounts { a: amount, b: 0 })
            } else {
                let b = try_mul_div(amount, unit.b, unit.a, round_up)?;
                Ok(TokenAmounts { a: amount, b })
            }
        }
        SpecifiedAmount::TokenB(amount) => {
            if unit.b == 0 {
                if amount == 0 {
                    Ok(TokenAmounts::default())
                } else {
                    Err(INCOMPLETE_QUOTE_INPUT)
                }
            } else if unit.a == 0 {
                Ok(TokenAmounts { a: 0, b: amount })
            } else {
                let a = try_mul_div(amount, unit.a, unit.b, round_up)?;
                Ok(TokenAmounts { a, b: amount })
            }
        }
    }
}
