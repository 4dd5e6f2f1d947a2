//! # Actor Framework
//!
//! Building blocks for keeping a collection of validated records inside a single
//! Tokio task and talking to it through typed messages. It is a **Resource-Oriented**
//! API (list, get, search, create, update, delete) on top of the **Actor Model**.
//!
//! ## Why an actor for a record store?
//!
//! - **Single writer**: the actor is the only code that touches the store, so every
//!   request is applied as a whole before the next one starts. No locks.
//! - **Cheap handles**: a [`ResourceClient`] is just a channel sender. Clone it into as
//!   many request handlers as needed.
//! - **Validation in one place**: records are built and changed only through the
//!   [`ActorEntity`] hooks, so the store never holds an invalid record.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your record type and its validation rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and the ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Book { id: u32, title: String }
//!
//! #[derive(Debug)] struct BookUpdate { title: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("title must not be blank")]
//! struct BlankTitle;
//!
//! impl ActorEntity for Book {
//!     type Id = u32;
//!     type Create = Book;
//!     type Update = BookUpdate;
//!     type Query = String;
//!     type Error = BlankTitle;
//!
//!     fn id(&self) -> u32 { self.id }
//!
//!     fn from_create_params(params: Book) -> Result<Self, BlankTitle> {
//!         if params.title.is_empty() { return Err(BlankTitle); }
//!         Ok(params)
//!     }
//!
//!     fn apply_update(&mut self, update: BookUpdate) -> Result<(), BlankTitle> {
//!         if update.title.is_empty() { return Err(BlankTitle); }
//!         self.title = update.title;
//!         Ok(())
//!     }
//!
//!     fn matches(&self, query: &String) -> bool { self.title.eq_ignore_ascii_case(query) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Book>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     client.create(Book { id: 1, title: "Dune".into() }).await.unwrap();
//!
//!     // Same id again: rejected, store unchanged.
//!     let dup = client.create(Book { id: 1, title: "Emma".into() }).await;
//!     assert!(matches!(dup, Err(FrameworkError::Conflict(_))));
//!
//!     let hits = client.search("dune".into()).await.unwrap();
//!     assert_eq!(hits.len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers a real `ResourceClient<T>`
//! from scripted expectations so code built on top of a client can be tested without
//! an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
