//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

/// Number of reward slots a position carries.
pub const NUM_REWARDS: usize = 3;

/// Read-only snapshot of a position. Ownership and persistence of the
/// position itself belong to the protocol; the engine only computes on the
/// values passed in here.
///
/// `fee_owed_*` and `reward_owed` are accrued, unclaimed balances as
/// reported by the protocol. The engine passes them through without
/// recomputing accrual.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PositionFacade {
    pub liquidity: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub fee_owed_a: u128,
    pub fee_owed_b: u128,
    pub reward_owed: [u128; NUM_REWARDS],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionStatus {
    PriceInRange,
    PriceBelowRange,
    PriceAboveRange,
}

/// Token A / token B deposit ratio of a range, Q64.64. The two ratios
/// always sum to 2^64.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PositionRatio {
    pub ratio_a: u128,
    pub ratio_b: u128,
}
