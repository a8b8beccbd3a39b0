pub mod fundamentals;
pub mod indicators;
pub mod price;
pub mod round;
pub mod sector;
pub mod signals;

pub use fundamentals::*;
pub use indicators::*;
pub use price::*;
pub use sector::*;
pub use signals::*;
