//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

pub type CoreError = &'static str;

pub const INVALID_TICK_RANGE: CoreError = "Invalid tick range";

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const SQRT_PRICE_OUT_OF_BOUNDS: CoreError = "Sqrt price out of bounds";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const AMOUNT_EXCEEDS_MAX_U128: CoreError = "Amount exceeds max u128";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";

pub const INVALID_LIQUIDITY_PERCENTAGE: CoreError = "Invalid liquidity percentage";

pub const INCOMPLETE_QUOTE_INPUT: CoreError = "Incomplete quote input";
