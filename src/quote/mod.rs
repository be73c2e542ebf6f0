//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0.
//

mod position;
mod ratio;

pub use position::*;
pub use ratio::*;
