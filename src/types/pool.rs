//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

/// Read-only snapshot of the pool state a quote is computed against.
///
/// Token A is the base coin of the pair, token B the quote coin. The engine
/// never refreshes this itself; callers fetch it before every quote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PoolFacade {
    /// Current pool sqrt price, Q64.64.
    pub sqrt_price: u128,
    /// Swap fee rate in parts per million. Carried for display purposes
    /// only; quoting never applies it.
    pub fee_rate: u32,
    pub decimals_a: u8,
    pub decimals_b: u8,
}
