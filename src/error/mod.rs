mod acronyms;
mod validation;

pub use acronyms::{AcronymsError, ApiErrorBody, ApiErrorObject};
pub use validation::{FieldError, Location, ValidationErrors};
