use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Key {key} violates ordering bound {bound}")]
    OrderViolation { key: String, bound: String },

    #[error("Counted {counted} nodes but tree records {recorded}")]
    LengthMismatch { counted: usize, recorded: usize },

    #[error("Layout parameter {field} must be finite and positive, got {value}")]
    InvalidLayout { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
