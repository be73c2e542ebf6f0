//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use ethnum::U256;

use crate::{
    CoreError, MAX_SQRT_PRICE, MAX_TICK_INDEX, MIN_SQRT_PRICE, MIN_TICK_INDEX,
    SQRT_PRICE_OUT_OF_BOUNDS, TICK_INDEX_OUT_OF_BOUNDS,
};

const LOG_B_2_X32: i128 = 59543866431248i128;
const BIT_PRECISION: u32 = 14;
const LOG_B_P_ERR_MARGIN_LOWER_X64: i128 = 184467440737095516i128; // 0.01
const LOG_B_P_ERR_MARGIN_UPPER_X64: i128 = 15793534762490258745i128; // 2^-precision / log_2_b + 0.01

/// Check if a tick is in-bounds.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick integer
///
/// # Returns
/// - A boolean value indicating if the tick is in-bounds
#[allow(clippy::manual_range_contains)]
pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    tick_index <= MAX_TICK_INDEX && tick_index >= MIN_TICK_INDEX
}

/// Decode a tick index from the on-chain sign/magnitude encoding.
/// The sign convention is preserved exactly: the magnitude is never
/// reinterpreted through two's complement.
///
/// # Parameters
/// - `magnitude` - A u32 integer representing the absolute tick value
/// - `is_negative` - A boolean value indicating the sign of the tick
///
/// # Returns
/// - `Ok`: A i32 integer representing the signed tick index
pub fn tick_index_from_sign_magnitude(magnitude: u32, is_negative: bool) -> Result<i32, CoreError> {
    let magnitude: i32 = magnitude.try_into().map_err(|_| TICK_INDEX_OUT_OF_BOUNDS)?;
    let tick_index = if is_negative { -magnitude } else { magnitude };
    if !is_tick_index_in_bounds(tick_index) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    Ok(tick_index)
}

/// Derive the sqrt price from a tick index. Matches the on-chain fixed-point
/// formula bit-for-bit; the same tick must map to the same price the program
/// validates against.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick integer
///
/// # Returns
/// - `Ok`: A u128 Q64.64 representing the sqrt price
pub fn try_tick_index_to_sqrt_price(tick_index: i32) -> Result<u128, CoreError> {
    if !is_tick_index_in_bounds(tick_index) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    Ok(sqrt_price_from_tick_index(tick_index))
}

/// Derive the tick index from a sqrt price.
///
/// # Parameters
/// - `sqrt_price` - A u128 integer representing the sqrt price
///
/// # Returns
/// - `Ok`: A i32 integer representing the tick integer
pub fn sqrt_price_to_tick_index(sqrt_price: u128) -> Result<i32, CoreError> {
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price) {
        return Err(SQRT_PRICE_OUT_OF_BOUNDS);
    }

    // Determine log_b(sqrt_ratio). First by calculating integer portion (msb)
    let msb: u32 = 128 - sqrt_price.leading_zeros() - 1;
    let log2p_integer_x32 = (msb as i128 - 64) << 32;

    // get fractional value (r/2^msb), msb always > 128
    // We begin the iteration from bit 63 (0.5 in Q64.64)
    let mut bit: i128 = 0x8000_0000_0000_0000i128;
    let mut precision = 0;
    let mut log2p_fraction_x64 = 0;

    // Log2 iterative approximation for the fractional part
    // Go through each 2^(j) bit where j < 64 in a Q64.64 number
    // Append current bit value to fraction result if r^2 Q2.126 is more than 2
    let mut r = if msb >= 64 {
        sqrt_price >> (msb - 63)
    } else {
        sqrt_price << (63 - msb)
    };

    while bit > 0 && precision < BIT_PRECISION {
        r *= r;
        let is_r_more_than_two = r >> 127_u32;
        r >>= 63 + is_r_more_than_two;
        log2p_fraction_x64 += bit * is_r_more_than_two as i128;
        bit >>= 1;
        precision += 1;
    }

    let log2p_fraction_x32 = log2p_fraction_x64 >> 32;
    let log2p_x32 = log2p_integer_x32 + log2p_fraction_x32;

    // Transform from base 2 to base b
    let logbp_x64 = log2p_x32 * LOG_B_2_X32;

    // Derive tick_low & high estimate. Adjust with the possibility of
    // under-estimating by 2^precision_bits/log_2(b) + 0.01 error margin.
    let tick_low = ((logbp_x64 - LOG_B_P_ERR_MARGIN_LOWER_X64) >> 64) as i32;
    let tick_high = ((logbp_x64 + LOG_B_P_ERR_MARGIN_UPPER_X64) >> 64) as i32;

    if tick_low == tick_high {
        Ok(tick_low)
    } else {
        // If our estimation for tick_high returns a lower sqrt_price than the
        // input then the actual tick_high has to be higher than tick_high.
        // Otherwise, the actual value is between tick_low & tick_high, so a
        // floor value (tick_low) is returned
        let actual_tick_high_sqrt_price = sqrt_price_from_tick_index(tick_high);
        if actual_tick_high_sqrt_price <= sqrt_price {
            Ok(tick_high)
        } else {
            Ok(tick_low)
        }
    }
}

// Private functions

fn sqrt_price_from_tick_index(tick_index: i32) -> u128 {
    if tick_index >= 0 {
        get_sqrt_price_positive_tick(tick_index)
    } else {
        get_sqrt_price_negative_tick(tick_index)
    }
}

fn mul_shift_96(n0: u128, n1: u128) -> u128 {
    let mul = <U256>::from(n0) * <U256>::from(n1);
    mul.wrapping_shr(96).as_u128()
}

fn get_sqrt_price_positive_tick(tick: i32) -> u128 {
    let mut ratio: u128 = if tick & 1 != 0 {
        79232123823359799118286999567
    } else {
        79228162514264337593543950336
    };

    if tick & 2 != 0 {
        ratio = mul_shift_96(ratio, 79236085330515764027303304731);
    }
    if tick & 4 != 0 {
        ratio = mul_shift_96(ratio, 79244008939048815603706035061);
    }
    if tick & 8 != 0 {
        ratio = mul_shift_96(ratio, 79259858533276714757314932305);
    }
    if tick & 16 != 0 {
        ratio = mul_shift_96(ratio, 79291567232598584799939703904);
    }
    if tick & 32 != 0 {
        ratio = mul_shift_96(ratio, 79355022692464371645785046466);
    }
    if tick & 64 != 0 {
        ratio = mul_shift_96(ratio, 79482085999252804386437311141);
    }
    if tick & 128 != 0 {
        ratio = mul_shift_96(ratio, 79736823300114093921829183326);
    }
    if tick & 256 != 0 {
        ratio = mul_shift_96(ratio, 80248749790819932309965073892);
    }
    if tick & 512 != 0 {
        ratio = mul_shift_96(ratio, 81282483887344747381513967011);
    }
    if tick & 1024 != 0 {
        ratio = mul_shift_96(ratio, 83390072131320151908154831281);
    }
    if tick & 2048 != 0 {
        ratio = mul_shift_96(ratio, 87770609709833776024991924138);
    }
    if tick & 4096 != 0 {
        ratio = mul_shift_96(ratio, 97234110755111693312479820773);
    }
    if tick & 8192 != 0 {
        ratio = mul_shift_96(ratio, 119332217159966728226237229890);
    }
    if tick & 16384 != 0 {
        ratio = mul_shift_96(ratio, 179736315981702064433883588727);
    }
    if tick & 32768 != 0 {
        ratio = mul_shift_96(ratio, 407748233172238350107850275304);
    }
    if tick & 65536 != 0 {
        ratio = mul_shift_96(ratio, 2098478828474011932436660412517);
    }
    if tick & 131072 != 0 {
        ratio = mul_shift_96(ratio, 55581415166113811149459800483533);
    }
    if tick & 262144 != 0 {
        ratio = mul_shift_96(ratio, 38992368544603139932233054999993551);
    }

    ratio >> 32
}

fn get_sqrt_price_negative_tick(tick: i32) -> u128 {
    let abs_tick = tick.abs();

    let mut ratio: u128 = if abs_tick & 1 != 0 {
        18445821805675392311
    } else {
        18446744073709551616
    };

    if abs_tick & 2 != 0 {
        ratio = (ratio * 18444899583751176498) >> 64
    }
    if abs_tick & 4 != 0 {
        ratio = (ratio * 18443055278223354162) >> 64
    }
    if abs_tick & 8 != 0 {
        ratio = (ratio * 18439367220385604838) >> 64
    }
    if abs_tick & 16 != 0 {
        ratio = (ratio * 18431993317065449817) >> 64
    }
    if abs_tick & 32 != 0 {
        ratio = (ratio * 18417254355718160513) >> 64
    }
    if abs_tick & 64 != 0 {
        ratio = (ratio * 18387811781193591352) >> 64
    }
    if abs_tick & 128 != 0 {
        ratio = (ratio * 18329067761203520168) >> 64
    }
    if abs_tick & 256 != 0 {
        ratio = (ratio * 18212142134806087854) >> 64
    }
    if abs_tick & 512 != 0 {
        ratio = (ratio * 17980523815641551639) >> 64
    }
    if abs_tick & 1024 != 0 {
        ratio = (ratio * 17526086738831147013) >> 64
    }
    if abs_tick & 2048 != 0 {
        ratio = (ratio * 16651378430235024244) >> 64
    }
    if abs_tick & 4096 != 0 {
        ratio = (ratio * 15030750278693429944) >> 64
    }
    if abs_tick & 8192 != 0 {
        ratio = (ratio * 12247334978882834399) >> 64
    }
    if abs_tick & 16384 != 0 {
        ratio = (ratio * 8131365268884726200) >> 64
    }
    if abs_tick & 32768 != 0 {
        ratio = (ratio * 3584323654723342297) >> 64
    }
    if abs_tick & 65536 != 0 {
        ratio = (ratio * 696457651847595233) >> 64
    }
    if abs_tick & 131072 != 0 {
        ratio = (ratio * 26294789957452057) >> 64
    }
    if abs_tick & 262144 != 0 {
        ratio = (ratio * 37481735321082) >> 64
    }

    ratio
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_index_to_sqrt_price() {
        assert_eq!(try_tick_index_to_sqrt_price(100), Ok(18539204128674405812));
        assert_eq!(try_tick_index_to_sqrt_price(1), Ok(18447666387855959850));
        assert_eq!(try_tick_index_to_sqrt_price(0), Ok(18446744073709551616));
        assert_eq!(try_tick_index_to_sqrt_price(-1), Ok(18445821805675392311));
        assert_eq!(try_tick_index_to_sqrt_price(-100), Ok(18354745142194483561));
    }

    #[test]
    fn test_tick_index_to_sqrt_price_bounds() {
        assert_eq!(try_tick_index_to_sqrt_price(MIN_TICK_INDEX), Ok(MIN_SQRT_PRICE));
        assert_eq!(try_tick_index_to_sqrt_price(MAX_TICK_INDEX), Ok(MAX_SQRT_PRICE));
        assert_eq!(try_tick_index_to_sqrt_price(MAX_TICK_INDEX + 1), Err(TICK_INDEX_OUT_OF_BOUNDS));
        assert_eq!(try_tick_index_to_sqrt_price(MIN_TICK_INDEX - 1), Err(TICK_INDEX_OUT_OF_BOUNDS));
    }

    #[test]
    fn test_sqrt_price_to_tick_index() {
        assert_eq!(sqrt_price_to_tick_index(18539204128674405812), Ok(100));
        assert_eq!(sqrt_price_to_tick_index(18447666387855959850), Ok(1));
        assert_eq!(sqrt_price_to_tick_index(18446744073709551616), Ok(0));
        assert_eq!(sqrt_price_to_tick_index(18445821805675392311), Ok(-1));
        assert_eq!(sqrt_price_to_tick_index(18354745142194483561), Ok(-100));
        assert_eq!(sqrt_price_to_tick_index(MAX_SQRT_PRICE + 1), Err(SQRT_PRICE_OUT_OF_BOUNDS));
        assert_eq!(sqrt_price_to_tick_index(MIN_SQRT_PRICE - 1), Err(SQRT_PRICE_OUT_OF_BOUNDS));
    }

    #[test]
    fn test_tick_round_trip() {
        for tick_index in [MIN_TICK_INDEX, -100000, -100, -1, 0, 1, 100, 100000, MAX_TICK_INDEX] {
            let sqrt_price = try_tick_index_to_sqrt_price(tick_index).unwrap();
            assert_eq!(sqrt_price_to_tick_index(sqrt_price), Ok(tick_index));
        }
    }

    #[test]
    fn test_tick_index_from_sign_magnitude() {
        assert_eq!(tick_index_from_sign_magnitude(100, false), Ok(100));
        assert_eq!(tick_index_from_sign_magnitude(100, true), Ok(-100));
        assert_eq!(tick_index_from_sign_magnitude(0, true), Ok(0));
        assert_eq!(tick_index_from_sign_magnitude(443637, true), Err(TICK_INDEX_OUT_OF_BOUNDS));
        assert_eq!(tick_index_from_sign_magnitude(u32::MAX, false), Err(TICK_INDEX_OUT_OF_BOUNDS));
    }

    #[test]
    fn test_is_tick_index_in_bounds() {
        assert!(is_tick_index_in_bounds(MAX_TICK_INDEX));
        assert!(is_tick_index_in_bounds(MIN_TICK_INDEX));
        assert!(!is_tick_index_in_bounds(MAX_TICK_INDEX + 1));
        assert!(!is_tick_index_in_bounds(MIN_TICK_INDEX - 1));
    }
}
