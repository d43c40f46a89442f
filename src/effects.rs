pub mod base;
pub mod negate;
pub mod outline;
