//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

/// A pair of raw (undecimaled) token amounts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TokenAmounts {
    pub a: u128,
    pub b: u128,
}

/// The one side of a deposit the caller has fixed; the engine derives the
/// other. Replaces the base-or-quote string discriminant of earlier clients
/// so that exactly one side is always populated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecifiedAmount {
    TokenA(u128),
    TokenB(u128),
}
