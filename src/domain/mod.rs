pub mod configuration;
pub mod error;
pub mod parse_strategy;
pub mod usage;
pub mod validation;

pub use configuration::Configuration;
pub use error::{AcquisitionError, GreeterError, ParseError, ValidationError};
pub use parse_strategy::{ParseStrategy, Reporter};
pub use usage::{Usage, render_usage};
pub use validation::validate;
