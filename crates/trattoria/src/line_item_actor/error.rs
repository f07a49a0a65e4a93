//! Error types for the Line Item actor.

use crate::model::CatalogItemId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LineItemError {
    /// The line item points at a menu item the catalog does not have.
    #[error("Unknown menu item: {}", .0.value())]
    UnknownCatalogItem(CatalogItemId),

    /// The line item data provided is invalid.
    #[error("{0}")]
    ValidationError(String),

    /// The catalog could not be asked whether the menu item exists.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LineItemError {
    fn from(msg: String) -> Self {
        LineItemError::ActorCommunicationError(msg)
    }
}
