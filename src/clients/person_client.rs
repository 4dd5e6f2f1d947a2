//! # Person Client
//!
//! Provides a high‑level API for interacting with the `Person` actor.
//! It wraps a `ResourceClient<Person>` and adds the argument checks and
//! "nothing found" rules of the registry on top of the raw requests.
use crate::model::validation;
use crate::model::{Person, PersonCreate, PersonError, PersonQuery, PersonUpdate, SearchField};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Person actor.
#[derive(Clone)]
pub struct PersonClient {
    inner: ResourceClient<Person>,
}

impl PersonClient {
    pub fn new(inner: ResourceClient<Person>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Person> for PersonClient {
    type Error = PersonError;

    fn inner(&self) -> &ResourceClient<Person> {
        &self.inner
    }

    /// Entity errors are unboxed back into the `PersonError` the record produced.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<PersonError>() {
                Ok(err) => *err,
                Err(other) => PersonError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => PersonError::NotFound(format!("id {id}")),
            FrameworkError::Conflict(id) => match id.parse() {
                Ok(id) => PersonError::Conflict(id),
                Err(_) => PersonError::ActorCommunicationError(format!("Item already exists: {id}")),
            },
            other => PersonError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PersonClient {
    /// Fetch one family member. Non-positive ids are rejected without asking the actor.
    #[instrument(skip(self))]
    pub async fn get_person(&self, id: i64) -> Result<Person, PersonError> {
        validation::positive("id", id)?;
        debug!("Sending request");
        self.get(id)
            .await?
            .ok_or_else(|| PersonError::NotFound(format!("id {id}")))
    }

    pub async fn search_by_first_name(&self, term: String) -> Result<Vec<Person>, PersonError> {
        self.search(SearchField::FirstName, term).await
    }

    pub async fn search_by_city(&self, term: String) -> Result<Vec<Person>, PersonError> {
        self.search(SearchField::City, term).await
    }

    pub async fn search_by_likes(&self, term: String) -> Result<Vec<Person>, PersonError> {
        self.search(SearchField::Likes, term).await
    }

    pub async fn search_by_company(&self, term: String) -> Result<Vec<Person>, PersonError> {
        self.search(SearchField::Company, term).await
    }

    /// Every family member whose `field` equals `term`, ignoring case.
    ///
    /// An empty term is `InvalidValue`; no match at all is `NotFound`.
    #[instrument(skip(self))]
    pub async fn search(&self, field: SearchField, term: String) -> Result<Vec<Person>, PersonError> {
        validation::not_blank(field.name(), &term)?;
        debug!("Sending request");
        let query = PersonQuery {
            field,
            term: term.clone(),
        };
        let hits = self.inner.search(query).await.map_err(Self::map_error)?;
        if hits.is_empty() {
            return Err(PersonError::NotFound(format!("{} '{}'", field.name(), term)));
        }
        Ok(hits)
    }

    /// Validate and append a new family member.
    #[instrument(skip(self))]
    pub async fn create_person(&self, params: PersonCreate) -> Result<Person, PersonError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replace every field but the id of an existing family member.
    #[instrument(skip(self))]
    pub async fn update_person(&self, id: i64, update: PersonUpdate) -> Result<Person, PersonError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
