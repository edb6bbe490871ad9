pub mod error;
pub mod logger;
pub mod rounding;
pub mod validation;
