//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod person_client;

pub use person_client::*;
