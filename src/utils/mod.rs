pub mod clock;
pub mod config;
pub mod consts;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use consts::*;
