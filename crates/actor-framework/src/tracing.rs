//! # Tracing Setup
//!
//! The actor logs its lifecycle and every request through `tracing`:
//!
//! - **Actor lifecycle**: `Actor started` with the initial store size, `Shutdown` with
//!   the final size.
//! - **Requests**: `List`, `Get`, `Search`, `Create`, `Update`, `Delete` at `debug`,
//!   with the payload recorded via its `Debug` representation.
//! - **Mutations**: `Created`, `Updated`, `Deleted` at `info` with the entity id.
//! - **Failures**: `Create failed`, `Update failed`, `Already exists`, `Not found` at
//!   `warn`.
//!
//! Every event carries an `entity_type` field (e.g. `Person`), so the module path is
//! left out of the output.
//!
//! ```bash
//! RUST_LOG=info cargo run    # mutations and failures
//! RUST_LOG=debug cargo run   # every request with its payload
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact `fmt` subscriber.
///
/// The filter comes from `RUST_LOG`; when it is unset or unparsable, `default_directive`
/// is used instead (e.g. `"info"`). Calling this twice is harmless: the second
/// installation attempt is ignored.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
