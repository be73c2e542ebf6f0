//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -443636;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 443636;

/// The sqrt price of the minimum tick, Q64.64.
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// The sqrt price of the maximum tick, Q64.64.
pub const MAX_SQRT_PRICE: u128 = 79226673515401279992447579055;
