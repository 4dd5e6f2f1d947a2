//! Family member records, their request payloads and their validation rules.

pub mod error;
pub mod person;
pub mod validation;

pub use error::PersonError;
pub use person::*;
pub use validation::REQUIRED_SURNAME;
