//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! records. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor handles one request at a time inside its own task, so no caller can
/// observe another caller's request half-applied, and the `store` needs no `Mutex`
/// or `RwLock`. Clients are cheap to clone and can be used from any task.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_entities()` to start from a
///     fixture) to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever requests need to be sent.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagUpdate { label: String }
/// #[derive(Debug, thiserror::Error)] #[error("bad tag")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = Tag;
///     type Update = TagUpdate;
///     type Query = String;
///     type Error = TagError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(params: Tag) -> Result<Self, TagError> { Ok(params) }
///     fn apply_update(&mut self, update: TagUpdate) -> Result<(), TagError> {
///         self.label = update.label;
///         Ok(())
///     }
///     fn matches(&self, query: &String) -> bool { &self.label == query }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///
///     let tag = client.create(Tag { id: 1, label: "red".into() }).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **List**: clones the whole store in insertion order.
/// * **Get**: the first record whose id matches, or `None`.
/// * **Search**: every record for which [`ActorEntity::matches`] holds, in order.
/// * **Create**: builds the record with [`ActorEntity::from_create_params`] first,
///   then rejects it with `Conflict` if its id is already stored. Otherwise appends.
/// * **Update**: finds the first record with the id and calls
///   [`ActorEntity::apply_update`] on it in place. The record keeps its position.
///   A failing update is reported as `EntityError`; nothing is rolled back.
/// * **Delete**: removes the *last* record carrying the id.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new, empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_entities(buffer_size, Vec::new())
    }

    /// Creates a `ResourceActor` whose store starts with `entities`, in order.
    ///
    /// The records are taken as-is: callers are expected to have built them through
    /// [`ActorEntity::from_create_params`] and to pass unique ids.
    pub fn with_entities(buffer_size: usize, entities: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: entities,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Person" instead of "family_registry::model::person::Person")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Search { query, respond_to } => {
                    let hits: Vec<T> = self
                        .store
                        .iter()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, hits = hits.len(), "Search");
                    let _ = respond_to.send(Ok(hits));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(item) => {
                            let id = item.id();
                            if self.store.iter().any(|existing| existing.id() == id) {
                                warn!(entity_type, %id, "Already exists");
                                let _ = respond_to
                                    .send(Err(FrameworkError::Conflict(id.to_string())));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.iter_mut().find(|item| item.id() == id) {
                        if let Err(e) = item.apply_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(index) = self.store.iter().rposition(|item| item.id() == id) {
                        self.store.remove(index);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
