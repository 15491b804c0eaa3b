//! Error module for the tapgrid domain layer.

use crate::catalog::{CatalogError, EntryError};
use crate::icons::IconError;
use crate::layout::LayoutError;
use tapgrid_core::CoreError;
use thiserror::Error;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Icon(#[from] IconError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl DomainError {
    /// Only a failed catalog allocation prevents the launcher from starting.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Catalog(CatalogError::AllocationFailure(_)))
    }
}
