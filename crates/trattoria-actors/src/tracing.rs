//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! Levels come from `RUST_LOG`. The format is compact and hides the module path
//! (`with_target(false)`): record-store actors already tag every line with
//! `entity_type`, and spans name the operation.
//!
//! ```bash
//! RUST_LOG=info cargo run            # lifecycle + one line per write
//! RUST_LOG=debug cargo run           # full payloads at each request
//! RUST_LOG=trattoria=debug,tower_http=info cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with final store size
//! - **Record operations**: `Created`, `Updated`, `Deleted` at info, `Get`/`List` at debug
//! - **Failures**: rejected creates and updates at warn, with the record id and error
//!
//! With `RUST_LOG=info`, creating an order reads like:
//!
//! ```text
//! INFO create_order: Created entity_type="Order" id=order_1 size=1
//! INFO create_order: Created entity_type="OrderLineItem" id=line_1 size=1
//! INFO create_order: Broadcast event="new_order" delivered=2 dropped=0
//! ```

/// Install the global subscriber. Call once, at the top of `main`.
///
/// Uses `try_init` so a second call (tests, embedding) is a no-op instead of a panic.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
