use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IconError {
    /// No candidate file exists. Not fatal; the renderer draws a placeholder.
    #[error("No icon file found for '{icon_name}'")]
    NotFound { icon_name: String },
}
