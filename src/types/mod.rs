//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

mod liquidity;
mod pool;
mod position;
mod token;

pub use liquidity::*;
pub use pool::*;
pub use position::*;
pub use token::*;
