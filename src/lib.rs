//! # Family Registry
//!
//! An in-memory registry of family members, kept by a single actor and served over
//! HTTP.
//!
//! - **[model]**: The validated [`Person`](model::Person) record, its payloads and rules.
//! - **[person_actor]**: The [`ActorEntity`](actor_framework::ActorEntity) wiring and the
//!   starting records.
//! - **[clients]**: [`PersonClient`](clients::PersonClient), the typed API over the actor.
//! - **[lifecycle]**: [`FamilySystem`](lifecycle::FamilySystem), which starts and stops it.
//! - **[http]**: The axum router.
//! - **[config]**: Environment-based configuration.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod person_actor;
