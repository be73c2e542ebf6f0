//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

mod error;
mod tick;
mod token;

pub use error::*;
pub use tick::*;
pub use token::*;
