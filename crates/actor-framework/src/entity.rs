//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type implements to be held by a
//! [`ResourceActor`](crate::ResourceActor). It names the identifier, the creation and
//! update payloads, the search query and the error type, and it tells the actor how
//! to build, mutate and match a record.
//!
//! # Associated Types
//! A `Person` entity requires a `PersonCreate` payload; a `PersonQuery` can only be
//! sent to an actor that stores `Person`s. The compiler rejects the mix-ups.
//!
//! # Validation Lives In The Entity
//! The actor never inspects fields. Every rule that keeps a record valid is enforced
//! by `from_create_params` and `apply_update`, so a record can only enter or change
//! inside the store by going through those two functions.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier carried by each record (e.g. `i64`, `String`).
    ///
    /// Ids are supplied by the caller inside the creation payload; the actor only
    /// checks them for uniqueness.
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to replace the mutable state of an existing instance.
    type Update: Send + Sync + Debug;

    /// A filter used by `Search` requests.
    type Query: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// The framework boxes it into [`FrameworkError::EntityError`](crate::FrameworkError::EntityError);
    /// resource clients downcast it back to recover the typed error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier of this record.
    fn id(&self) -> Self::Id;

    /// Construct and validate a record from its creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update in place.
    ///
    /// The actor does not snapshot the record before calling this, so whatever the
    /// implementation changed before returning `Err` stays changed.
    fn apply_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this record is selected by `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
