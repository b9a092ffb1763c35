use serde::Serialize;
use serde_json::Value;
use std::fmt;

const INVALID_VALUE: &str = "Invalid value";

/// Where a rejected field was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Query,
    Body,
    Params,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::Query => "query",
            Location::Body => "body",
            Location::Params => "params",
        };
        f.write_str(s)
    }
}

/// One rejected field. Serialized as `{value, msg, param, location}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: Location,
}

impl FieldError {
    pub fn invalid(param: &str, location: Location, value: Option<Value>) -> Self {
        Self {
            value,
            msg: INVALID_VALUE.to_string(),
            param: param.to_string(),
            location,
        }
    }
}

/// Every violation found on a request; serialized as `{"errors": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}.{}: {}", e.location, e.param, e.msg)?;
        }
        Ok(())
    }
}
