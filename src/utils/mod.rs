pub mod error;
pub mod validation;

pub use error::{DiffError, DiffResult, PathError, ValidationError};
pub use validation::{validate_options, validate_output_path, validate_request};
