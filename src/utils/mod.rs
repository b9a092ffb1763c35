pub mod logging;
pub mod sanitize;
