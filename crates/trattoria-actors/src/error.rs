//! # Framework Errors
//!
//! Errors raised by the record-store plumbing itself, as opposed to the errors a
//! record kind returns from its hooks (those travel boxed inside [`FrameworkError::EntityError`]).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the concrete entity error carried by [`FrameworkError::EntityError`].
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// True when the actor task is gone or never answered.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FrameworkError::ActorClosed | FrameworkError::ActorDropped
        )
    }
}
