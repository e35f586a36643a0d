pub mod delivery;
pub mod macros;
pub mod time;

pub use delivery::*;
pub use time::*;
