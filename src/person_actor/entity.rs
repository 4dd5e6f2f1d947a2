//! Entity trait implementation for the [`Person`] domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Person`] to be managed by the generic
//! [`ResourceActor`](actor_framework::ResourceActor).

use crate::model::{Person, PersonCreate, PersonError, PersonQuery, PersonUpdate};
use actor_framework::ActorEntity;

impl ActorEntity for Person {
    type Id = i64;
    type Create = PersonCreate;
    type Update = PersonUpdate;
    type Query = PersonQuery;
    type Error = PersonError;

    fn id(&self) -> i64 {
        Person::id(self)
    }

    /// Builds a new Person, running every field check.
    fn from_create_params(params: PersonCreate) -> Result<Self, PersonError> {
        Person::try_from(params)
    }

    /// Replaces every field except the id through the validating setters.
    ///
    /// Setters run in this order: last name, first name, birthday, email, likes, city,
    /// zip code, company. The first failure stops the update; fields set before it
    /// keep their new values.
    fn apply_update(&mut self, update: PersonUpdate) -> Result<(), PersonError> {
        self.set_last_name(update.last_name)?;
        self.set_first_name(update.first_name)?;
        self.set_birthday(update.birthday)?;
        self.set_email(update.email)?;
        self.set_likes(update.likes)?;
        self.set_city(update.city)?;
        self.set_zip_code(update.zip_code)?;
        self.set_company(update.company)
    }

    fn matches(&self, query: &PersonQuery) -> bool {
        self.field(query.field).eq_ignore_ascii_case(&query.term)
    }
}
