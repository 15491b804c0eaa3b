use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout parameters: {0}")]
    InvalidParams(String),
}
