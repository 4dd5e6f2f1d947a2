//! # Generic Messages
//!
//! The request type sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Every actor manages one kind of record (the [`ActorEntity`]). Instead of ad-hoc
/// messages per use case, the variants cover the operations that apply to any
/// collection of records:
///
/// - **List**: the whole collection in insertion order.
/// - **Get**: the record with a given id, if any.
/// - **Search**: every record selected by an [`ActorEntity::Query`].
/// - **Create**: build a record from [`ActorEntity::Create`] and append it.
/// - **Update**: apply an [`ActorEntity::Update`] to a stored record.
/// - **Delete**: remove a record.
///
/// Each variant carries its own typed reply channel, so a `Search` can only ever be
/// answered with a list of the actor's own record type.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Search {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
