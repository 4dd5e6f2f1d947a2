//! # Person Actor
//!
//! This module implements the family registry actor, managing [`Person`] records with
//! list, lookup, search, create, update and delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Person`]
//! - [`seed`] - the ten family members the registry starts with
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use family_registry::person_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = person_actor::new(32, true)?;
//!     tokio::spawn(actor.run());
//!
//!     let anna = client.get_person(1).await?;
//!     assert_eq!(anna.first_name(), "Anna");
//!
//!     let raleigh = client.search_by_city("RALEIGH".to_string()).await?;
//!     assert_eq!(raleigh.len(), 6);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod seed;

pub use seed::family_seed;

use crate::clients::PersonClient;
use crate::model::{Person, PersonError};
use actor_framework::ResourceActor;

/// Creates a new Person actor and its client.
///
/// With `seed` set the store starts with [`family_seed`], otherwise empty.
pub fn new(
    channel_capacity: usize,
    seed: bool,
) -> Result<(ResourceActor<Person>, PersonClient), PersonError> {
    let people = if seed { family_seed()? } else { Vec::new() };

    let (actor, generic_client) = ResourceActor::with_entities(channel_capacity, people);
    let client = PersonClient::new(generic_client);

    Ok((actor, client))
}
