//! # System Lifecycle
//!
//! Starting, wiring and stopping the family registry.
//!
//! ## The FamilySystem Pattern
//!
//! [`FamilySystem`] is the composition root: it builds the registry actor from a
//! [`RegistryConfig`](crate::config::RegistryConfig), spawns it, and hands out the
//! [`PersonClient`](crate::clients::PersonClient). There is no global instance;
//! whoever needs the registry gets a clone of the client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - Processes remaining messages, logs its final size
//! 4. **Await completion** - Wait for the actor task to finish
//!
//! The HTTP router holds its own clone of the client, so the server has to stop
//! before [`FamilySystem::shutdown`] can complete.
//!
//! ## Observability & Tracing
//!
//! Logging is set up once in `main` with
//! [`setup_tracing`](actor_framework::tracing::setup_tracing).
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod family_system;

pub use family_system::*;
