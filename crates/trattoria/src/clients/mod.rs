//! # Typed Clients
//!
//! One client per record-store actor. Each wraps a generic
//! [`ResourceClient`](trattoria_actors::ResourceClient), inherits `get`/`list`/`delete`
//! from [`ActorClient`](trattoria_actors::ActorClient) and adds the queries its record
//! kind needs.

pub mod catalog_client;
pub mod line_item_client;
pub mod order_client;

pub use catalog_client::CatalogClient;
pub use line_item_client::LineItemClient;
pub use order_client::OrderClient;

use trattoria_actors::FrameworkError;

/// Turn a framework error back into the record's own error.
///
/// Hook errors travel boxed inside [`FrameworkError::EntityError`]; when the box holds
/// an `E` it is returned as is, so callers can match on e.g. `OrderError::IllegalTransition`.
pub(crate) fn recover_entity_error<E>(e: FrameworkError, not_found: impl FnOnce(String) -> E) -> E
where
    E: std::error::Error + From<String> + 'static,
{
    match e {
        FrameworkError::NotFound(id) => not_found(id),
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(err) => *err,
            Err(other) => E::from(other.to_string()),
        },
        other => E::from(other.to_string()),
    }
}
