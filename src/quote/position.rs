//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use crate::{
    matching_amounts_quote, position_status, try_get_liquidity_from_a, try_get_liquidity_from_b,
    try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance,
    try_get_token_amounts_from_liquidity, try_mul_div, try_tick_index_to_sqrt_price,
    ClosePositionQuote, CollectFeesQuote, CoreError, DecreaseLiquidityQuote,
    IncreaseLiquidityQuote, PoolFacade, PositionFacade, PositionStatus, SpecifiedAmount,
    INVALID_LIQUIDITY_PERCENTAGE,
};

/// Calculate the quote for opening a position over a tick range.
///
/// The caller fixes one token amount; the other is derived from the deposit
/// ratio of the range at the pool's current price, rounding up so the
/// deposit always covers the resulting liquidity.
///
/// # Parameters
/// - `specified` - The token amount the caller has fixed
/// - `slippage_tolerance_bps` - The slippage tolerance in basis points
/// - `pool` - A PoolFacade struct with the pool state to quote against
/// - `tick_lower_index` - The lower tick index of the position
/// - `tick_upper_index` - The upper tick index of the position
///
/// # Returns
/// - `Ok`: An IncreaseLiquidityQuote struct containing the estimated token amounts
pub fn create_position_quote(
    specified: SpecifiedAmount,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let token_est = matching_amounts_quote(
        specified,
        true,
        pool.sqrt_price,
        tick_lower_index,
        tick_upper_index,
    )?;

    let liquidity_delta = try_get_liquidity_delta(
        specified,
        pool.sqrt_price,
        tick_lower_index,
        tick_upper_index,
    )?;

    let token_max_a =
        try_get_max_amount_with_slippage_tolerance(token_est.a, slippage_tolerance_bps)?;
    let token_max_b =
        try_get_max_amount_with_slippage_tolerance(token_est.b, slippage_tolerance_bps)?;

    Ok(IncreaseLiquidityQuote {
        liquidity_delta,
        token_est_a: token_est.a,
        token_est_b: token_est.b,
        token_max_a,
        token_max_b,
    })
}

/// Calculate the quote for adding liquidity to an existing position.
/// Identical to opening a position over the position's own tick range.
///
/// # Parameters
/// - `specified` - The token amount the caller has fixed
/// - `slippage_tolerance_bps` - The slippage tolerance in basis points
/// - `pool` - A PoolFacade struct with the pool state to quote against
/// - `position` - A PositionFacade struct with the position state
///
/// # Returns
/// - `Ok`: An IncreaseLiquidityQuote struct containing the estimated token amounts
pub fn increase_position_quote(
    specified: SpecifiedAmount,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    position: PositionFacade,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    create_position_quote(
        specified,
        slippage_tolerance_bps,
        pool,
        position.tick_lower_index,
        position.tick_upper_index,
    )
}

/// Calculate the quote for withdrawing a percentage of a position's
/// liquidity. Both the liquidity delta and the token estimates round down
/// so the withdrawal never over-claims.
///
/// # Parameters
/// - `liquidity_percentage` - The percentage of liquidity to withdraw, 0 to 100
/// - `slippage_tolerance_bps` - The slippage tolerance in basis points
/// - `pool` - A PoolFacade struct with the pool state to quote against
/// - `position` - A PositionFacade struct with the position state
///
/// # Returns
/// - `Ok`: A DecreaseLiquidityQuote struct containing the estimated token amounts
pub fn decrease_position_quote(
    liquidity_percentage: u8,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    position: PositionFacade,
) -> Result<DecreaseLiquidityQuote, CoreError> {
    if liquidity_percentage > 100 {
        return Err(INVALID_LIQUIDITY_PERCENTAGE);
    }

    let liquidity_delta = try_mul_div(position.liquidity, liquidity_percentage as u128, 100, false)?;

    let token_est = try_get_token_amounts_from_liquidity(
        liquidity_delta,
        pool.sqrt_price,
        position.tick_lower_index,
        position.tick_upper_index,
        false,
    )?;

    let token_min_a =
        try_get_min_amount_with_slippage_tolerance(token_est.a, slippage_tolerance_bps)?;
    let token_min_b =
        try_get_min_amount_with_slippage_tolerance(token_est.b, slippage_tolerance_bps)?;

    Ok(DecreaseLiquidityQuote {
        liquidity_delta,
        token_est_a: token_est.a,
        token_est_b: token_est.b,
        token_min_a,
        token_min_b,
    })
}

/// Calculate the quote for withdrawing a full position, including the
/// accrued fees and rewards reported by the protocol.
///
/// # Parameters
/// - `slippage_tolerance_bps` - The slippage tolerance in basis points
/// - `pool` - A PoolFacade struct with the pool state to quote against
/// - `position` - A PositionFacade struct with the position state
///
/// # Returns
/// - `Ok`: A ClosePositionQuote struct containing the estimated token amounts
pub fn close_position_quote(
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    position: PositionFacade,
) -> Result<ClosePositionQuote, CoreError> {
    let token_est = try_get_token_amounts_from_liquidity(
        position.liquidity,
        pool.sqrt_price,
        position.tick_lower_index,
        position.tick_upper_index,
        false,
    )?;

    let token_min_a =
        try_get_min_amount_with_slippage_tolerance(token_est.a, slippage_tolerance_bps)?;
    let token_min_b =
        try_get_min_amount_with_slippage_tolerance(token_est.b, slippage_tolerance_bps)?;

    Ok(ClosePositionQuote {
        token_est_a: token_est.a,
        token_est_b: token_est.b,
        token_min_a,
        token_min_b,
        fee_owed_a: position.fee_owed_a,
        fee_owed_b: position.fee_owed_b,
        reward_owed: position.reward_owed,
    })
}

/// Pass through the accrued, unclaimed fee balances of a position.
///
/// # Parameters
/// - `position` - A PositionFacade struct with the position state
///
/// # Returns
/// - A CollectFeesQuote struct containing the fee balances
pub fn collect_fees_quote(position: PositionFacade) -> CollectFeesQuote {
    CollectFeesQuote {
        fee_owed_a: position.fee_owed_a,
        fee_owed_b: position.fee_owed_b,
    }
}

// Private functions

fn try_get_liquidity_delta(
    specified: SpecifiedAmount,
    current_sqrt_price: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<u128, CoreError> {
    let status = position_status(current_sqrt_price, tick_lower_index, tick_upper_index)?;
    let sqrt_price_lower = try_tick_index_to_sqrt_price(tick_lower_index)?;
    let sqrt_price_upper = try_tick_index_to_sqrt_price(tick_upper_index)?;

    match (specified, status) {
        (SpecifiedAmount::TokenA(amount), PositionStatus::PriceBelowRange) => {
            try_get_liquidity_from_a(amount, sqrt_price_lower, sqrt_price_upper)
        }
        (SpecifiedAmount::TokenA(amount), PositionStatus::PriceInRange) => {
            try_get_liquidity_from_a(amount, current_sqrt_price, sqrt_price_upper)
        }
        (SpecifiedAmount::TokenB(amount), PositionStatus::PriceAboveRange) => {
            try_get_liquidity_from_b(amount, sqrt_price_lower, sqrt_price_upper)
        }
        (SpecifiedAmount::TokenB(amount), PositionStatus::PriceInRange) => {
            try_get_liquidity_from_b(amount, sqrt_price_lower, current_sqrt_price)
        }
        // the specified token sits on the inactive side of the range
        (SpecifiedAmount::TokenA(_), PositionStatus::PriceAboveRange)
        | (SpecifiedAmount::TokenB(_), PositionStatus::PriceBelowRange) => Ok(0),
    }
}
