//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

mod liquidity;
mod position;
mod tick;
mod token;

#[cfg(feature = "floats")]
mod price;

pub use liquidity::*;
pub use position::*;
pub use tick::*;
pub use token::*;

#[cfg(feature = "floats")]
pub use price::*;
