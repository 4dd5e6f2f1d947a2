use thiserror::Error;
use tracing::{error, info};

use crate::clients::PersonClient;
use crate::config::RegistryConfig;
use crate::model::PersonError;

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    /// The seed fixture failed validation.
    #[error("Failed to seed registry: {0}")]
    Seed(#[from] PersonError),

    /// The actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// Owns the running family registry actor.
///
/// `FamilySystem` is responsible for:
/// - **Lifecycle Management**: Starting the registry actor and stopping it again
/// - **Seeding**: Handing the actor its starting records, as configured
///
/// # Example
///
/// ```rust
/// use family_registry::config::RegistryConfig;
/// use family_registry::lifecycle::FamilySystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = FamilySystem::new(&RegistryConfig::default())?;
///
///     let beth = system.person_client.get_person(10).await?;
///     assert_eq!(beth.city(), "Shelby");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct FamilySystem {
    /// Client for interacting with the Person actor
    pub person_client: PersonClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl FamilySystem {
    /// Creates the registry actor, seeded or empty, and spawns it on the current runtime.
    pub fn new(config: &RegistryConfig) -> Result<Self, SystemError> {
        let (person_actor, person_client) =
            crate::person_actor::new(config.channel_capacity, config.seed)?;

        let handle = tokio::spawn(person_actor.run());

        info!(
            channel_capacity = config.channel_capacity,
            seeded = config.seed,
            "Family system started"
        );

        Ok(Self {
            person_client,
            handle,
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel once every clone handed out (e.g. to
    /// the HTTP router) is gone as well. The actor then drains its queue, logs its
    /// final size and exits.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.person_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
