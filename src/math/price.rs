//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use libm::{pow, sqrt};

use crate::{
    sqrt_price_to_tick_index, try_tick_index_to_sqrt_price, CoreError,
};

const Q64_RESOLUTION: f64 = 18446744073709551616.0;

/// Convert a sqrt price into a human readable price, adjusted for the
/// decimal scale of both tokens. Lossy; use only for display and for
/// seeding tick range selection, never for amount math.
///
/// # Parameters
/// - `sqrt_price` - A u128 Q64.64 representing the sqrt price
/// - `decimals_a` - A u8 integer representing the decimals of token A
/// - `decimals_b` - A u8 integer representing the decimals of token B
///
/// # Returns
/// - A f64 representing the price of token A in terms of token B
pub fn sqrt_price_to_price(sqrt_price: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let power = pow(10f64, decimals_a as f64 - decimals_b as f64);
    let sqrt_price = sqrt_price as f64 / Q64_RESOLUTION;
    sqrt_price * sqrt_price * power
}

/// Convert a decimal-adjusted price into a sqrt price.
///
/// Accepts finite, non-negative prices. Negative or non-finite inputs have
/// no square root and saturate to 0, which sits below the minimum sqrt
/// price and is rejected by the tick conversions.
///
/// # Parameters
/// - `price` - A f64 representing the price of token A in terms of token B
/// - `decimals_a` - A u8 integer representing the decimals of token A
/// - `decimals_b` - A u8 integer representing the decimals of token B
///
/// # Returns
/// - A u128 Q64.64 representing the sqrt price
pub fn price_to_sqrt_price(price: f64, decimals_a: u8, decimals_b: u8) -> u128 {
    let power = pow(10f64, decimals_a as f64 - decimals_b as f64);
    (sqrt(price / power) * Q64_RESOLUTION) as u128
}

/// Convert a tick index into a decimal-adjusted price.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick index
/// - `decimals_a` - A u8 integer representing the decimals of token A
/// - `decimals_b` - A u8 integer representing the decimals of token B
///
/// # Returns
/// - `Ok`: A f64 representing the price of token A in terms of token B
pub fn tick_index_to_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> Result<f64, CoreError> {
    let sqrt_price = try_tick_index_to_sqrt_price(tick_index)?;
    Ok(sqrt_price_to_price(sqrt_price, decimals_a, decimals_b))
}

/// Convert a decimal-adjusted price into the nearest initializable tick
/// index at or below it.
///
/// # Parameters
/// - `price` - A f64 representing the price of token A in terms of token B
/// - `decimals_a` - A u8 integer representing the decimals of token A
/// - `decimals_b` - A u8 integer representing the decimals of token B
///
/// # Returns
/// - `Ok`: A i32 integer representing the tick index
pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> Result<i32, CoreError> {
    let sqrt_price = price_to_sqrt_price(price, decimals_a, decimals_b);
    sqrt_price_to_tick_index(sqrt_price)
}
