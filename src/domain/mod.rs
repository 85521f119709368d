pub mod claims;
pub mod errors;
pub mod principal;
pub mod signing_key;

pub use claims::*;
pub use errors::*;
pub use principal::*;
pub use signing_key::*;
