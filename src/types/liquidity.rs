//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

use crate::NUM_REWARDS;

/// Quote for opening a position or adding liquidity to an existing one.
/// Estimates use deposit rounding (up); `token_max_*` are the
/// slippage-adjusted upper bounds to embed in the transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct IncreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_max_a: u128,
    pub token_max_b: u128,
}

/// Quote for withdrawing part of a position. Estimates use withdrawal
/// rounding (down); `token_min_*` are the slippage-adjusted lower bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct DecreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_min_a: u128,
    pub token_min_b: u128,
}

/// Quote for withdrawing a full position, including the accrued fee and
/// reward balances passed through from the position snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ClosePositionQuote {
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_min_a: u128,
    pub token_min_b: u128,
    pub fee_owed_a: u128,
    pub fee_owed_b: u128,
    pub reward_owed: [u128; NUM_REWARDS],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct CollectFeesQuote {
    pub fee_owed_a: u128,
    pub fee_owed_b: u128,
}
