//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

/// Slippage tolerance denominator. Tolerances are expressed in basis points
/// and must stay below this value, i.e. below 100%.
pub const SLIPPAGE_TOLERANCE_MUL_VALUE: u16 = 10_000;

/// Pool fee rate denominator. Fee rates are expressed in parts per million.
pub const FEE_RATE_MUL_VALUE: u32 = 1_000_000;
