//! Error taxonomy of the order service.
//!
//! Every actor error is folded into one of four kinds; the HTTP layer maps each kind to
//! a status code.

use crate::catalog_actor::CatalogError;
use crate::line_item_actor::LineItemError;
use crate::order_actor::OrderError;
use crate::stats::RevenueOverflow;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// Caller input was rejected. Nothing was stored.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// A record store could not complete the request.
    #[error("{0}")]
    Persistence(String),

    /// Stored data refers to something that does not exist.
    #[error("{0}")]
    Integrity(String),
}

impl From<OrderError> for ServiceError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ServiceError::NotFound("Order not found".to_string()),
            OrderError::ValidationError(_) | OrderError::IllegalTransition { .. } => {
                ServiceError::Validation(e.to_string())
            }
            OrderError::ActorCommunicationError(msg) => {
                ServiceError::Persistence(format!("Order store failed: {msg}"))
            }
        }
    }
}

impl From<CatalogError> for ServiceError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ServiceError::NotFound("Menu item not found".to_string()),
            CatalogError::ValidationError(msg) => ServiceError::Validation(msg),
            CatalogError::ActorCommunicationError(msg) => {
                ServiceError::Persistence(format!("Catalog store failed: {msg}"))
            }
        }
    }
}

impl From<LineItemError> for ServiceError {
    fn from(e: LineItemError) -> Self {
        match e {
            LineItemError::UnknownCatalogItem(_) | LineItemError::ValidationError(_) => {
                ServiceError::Validation(e.to_string())
            }
            LineItemError::CatalogUnavailable(_) | LineItemError::ActorCommunicationError(_) => {
                ServiceError::Persistence(format!("Line item store failed: {e}"))
            }
        }
    }
}

impl From<RevenueOverflow> for ServiceError {
    fn from(e: RevenueOverflow) -> Self {
        ServiceError::Integrity(e.to_string())
    }
}
