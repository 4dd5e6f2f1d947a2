use serde::{de, Deserialize, Deserializer, Serialize};

use super::error::PersonError;
use super::validation;

/// A validated family member record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Person`](#impl-ActorEntity-for-Person) for details on:
/// - Creation parameters ([`PersonCreate`])
/// - Update parameters ([`PersonUpdate`])
/// - Search queries ([`PersonQuery`])
///
/// Fields are private: a `Person` can only be built by [`Person::new`] and changed by
/// its setters, all of which validate. Each call either fully succeeds or leaves the
/// record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: i64,
    last_name: String,
    first_name: String,
    birthday: String,
    email: String,
    likes: String,
    city: String,
    zip_code: i64,
    company: String,
}

/// Payload for creating a new family member. The caller picks the id.
///
/// Every field is required. `id` and `zipCode` may be sent as JSON numbers or as
/// numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCreate {
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub birthday: String,
    pub email: String,
    pub likes: String,
    pub city: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub zip_code: i64,
    pub company: String,
}

/// Payload for updating an existing family member. Every field is required and
/// replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
    pub last_name: String,
    pub first_name: String,
    pub birthday: String,
    pub email: String,
    pub likes: String,
    pub city: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub zip_code: i64,
    pub company: String,
}

/// Accepts `27614` as well as `"27614"`.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(i64),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(n) => Ok(n),
        Wire::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got \"{text}\""))),
    }
}

/// Fields that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    City,
    Likes,
    Company,
}

impl SearchField {
    /// The field name as it appears in JSON and error messages.
    pub fn name(self) -> &'static str {
        match self {
            SearchField::FirstName => "firstName",
            SearchField::City => "city",
            SearchField::Likes => "likes",
            SearchField::Company => "company",
        }
    }
}

/// Exact, case-insensitive match of one field against a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonQuery {
    pub field: SearchField,
    pub term: String,
}

impl Person {
    /// Builds a family member, checking every field.
    ///
    /// Checks run in a fixed order and the first failure is returned: id, the blank
    /// checks (last name, first name, birthday, email, likes, city, company), zip code,
    /// surname, first name letters, birthday shape, email shape.
    ///
    /// Unlike [`Person::set_last_name`], the last name is not checked for letters only.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
        likes: impl Into<String>,
        city: impl Into<String>,
        zip_code: i64,
        company: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let person = Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            birthday: birthday.into(),
            email: email.into(),
            likes: likes.into(),
            city: city.into(),
            zip_code,
            company: company.into(),
        };

        validation::positive("id", person.id)?;
        validation::not_blank("lastName", &person.last_name)?;
        validation::not_blank("firstName", &person.first_name)?;
        validation::not_blank("birthday", &person.birthday)?;
        validation::not_blank("email", &person.email)?;
        validation::not_blank("likes", &person.likes)?;
        validation::not_blank("city", &person.city)?;
        validation::not_blank("company", &person.company)?;
        validation::positive("zipCode", person.zip_code)?;
        validation::surname(&person.last_name)?;
        validation::alphabetic("firstName", &person.first_name)?;
        validation::birthday_format(&person.birthday)?;
        validation::email_shape(&person.email)?;

        Ok(person)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn likes(&self) -> &str {
        &self.likes
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn zip_code(&self) -> i64 {
        self.zip_code
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    /// Value of a searchable field.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::FirstName => &self.first_name,
            SearchField::City => &self.city,
            SearchField::Likes => &self.likes,
            SearchField::Company => &self.company,
        }
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), PersonError> {
        let last_name = last_name.into();
        validation::not_blank("lastName", &last_name)?;
        validation::alphabetic("lastName", &last_name)?;
        validation::surname(&last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), PersonError> {
        let first_name = first_name.into();
        validation::not_blank("firstName", &first_name)?;
        validation::alphabetic("firstName", &first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> Result<(), PersonError> {
        let birthday = birthday.into();
        validation::not_blank("birthday", &birthday)?;
        validation::birthday_format(&birthday)?;
        self.birthday = birthday;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), PersonError> {
        let email = email.into();
        validation::not_blank("email", &email)?;
        validation::email_shape(&email)?;
        self.email = email;
        Ok(())
    }

    pub fn set_likes(&mut self, likes: impl Into<String>) -> Result<(), PersonError> {
        let likes = likes.into();
        validation::not_blank("likes", &likes)?;
        self.likes = likes;
        Ok(())
    }

    pub fn set_city(&mut self, city: impl Into<String>) -> Result<(), PersonError> {
        let city = city.into();
        validation::not_blank("city", &city)?;
        self.city = city;
        Ok(())
    }

    pub fn set_zip_code(&mut self, zip_code: i64) -> Result<(), PersonError> {
        validation::positive("zipCode", zip_code)?;
        self.zip_code = zip_code;
        Ok(())
    }

    pub fn set_company(&mut self, company: impl Into<String>) -> Result<(), PersonError> {
        let company = company.into();
        validation::not_blank("company", &company)?;
        self.company = company;
        Ok(())
    }
}

impl TryFrom<PersonCreate> for Person {
    type Error = PersonError;

    fn try_from(params: PersonCreate) -> Result<Self, Self::Error> {
        Person::new(
            params.id,
            params.last_name,
            params.first_name,
            params.birthday,
            params.email,
            params.likes,
            params.city,
            params.zip_code,
            params.company,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> PersonCreate {
        PersonCreate {
            id: 1,
            last_name: "Pruett".into(),
            first_name: "Anna".into(),
            birthday: "04/29/2002".into(),
            email: "anna.pruett@oracle.com".into(),
            likes: "Horses".into(),
            city: "Raleigh".into(),
            zip_code: 27614,
            company: "Oracle".into(),
        }
    }

    fn field_of(result: Result<Person, PersonError>) -> &'static str {
        match result {
            Err(PersonError::InvalidValue { field, .. }) => field,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_new_keeps_every_field() {
        let person = Person::try_from(anna()).unwrap();
        assert_eq!(person.id(), 1);
        assert_eq!(person.last_name(), "Pruett");
        assert_eq!(person.first_name(), "Anna");
        assert_eq!(person.birthday(), "04/29/2002");
        assert_eq!(person.email(), "anna.pruett@oracle.com");
        assert_eq!(person.likes(), "Horses");
        assert_eq!(person.city(), "Raleigh");
        assert_eq!(person.zip_code(), 27614);
        assert_eq!(person.company(), "Oracle");
    }

    #[test]
    fn test_new_rejects_each_blank_field() {
        let cases: [(&str, fn(&mut PersonCreate)); 7] = [
            ("lastName", |p: &mut PersonCreate| p.last_name.clear()),
            ("firstName", |p: &mut PersonCreate| p.first_name.clear()),
            ("birthday", |p: &mut PersonCreate| p.birthday.clear()),
            ("email", |p: &mut PersonCreate| p.email.clear()),
            ("likes", |p: &mut PersonCreate| p.likes.clear()),
            ("city", |p: &mut PersonCreate| p.city.clear()),
            ("company", |p: &mut PersonCreate| p.company.clear()),
        ];

        for (expected, blank) in cases {
            let mut params = anna();
            blank(&mut params);
            assert_eq!(field_of(Person::try_from(params)), expected);
        }
    }

    #[test]
    fn test_new_rejects_non_positive_numbers() {
        let mut params = anna();
        params.id = 0;
        assert_eq!(field_of(Person::try_from(params)), "id");

        let mut params = anna();
        params.zip_code = -1;
        assert_eq!(field_of(Person::try_from(params)), "zipCode");
    }

    #[test]
    fn test_new_reports_first_failure_in_check_order() {
        // Blank city wins over the bad surname and the bad email.
        let mut params = anna();
        params.city.clear();
        params.last_name = "Smith".into();
        params.email = "nope".into();
        assert_eq!(field_of(Person::try_from(params)), "city");

        // Zip code is checked before the surname.
        let mut params = anna();
        params.zip_code = 0;
        params.last_name = "Smith".into();
        assert_eq!(field_of(Person::try_from(params)), "zipCode");

        // Surname before the first name letters.
        let mut params = anna();
        params.last_name = "Smith".into();
        params.first_name = "Anna1".into();
        assert_eq!(field_of(Person::try_from(params)), "lastName");
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        let mut params = anna();
        params.first_name = "Anna-Marie".into();
        assert_eq!(field_of(Person::try_from(params)), "firstName");

        for birthday in ["2002/04/29", "04/29/02", "04/29/2002 "] {
            let mut params = anna();
            params.birthday = birthday.into();
            assert_eq!(field_of(Person::try_from(params)), "birthday");
        }

        for email in ["anna.pruett.oracle.com", "anna.pruett@oracle", "a@@b.com"] {
            let mut params = anna();
            params.email = email.into();
            assert_eq!(field_of(Person::try_from(params)), "email");
        }
    }

    #[test]
    fn test_new_accepts_surname_in_any_case() {
        let mut params = anna();
        params.last_name = "pRUETT".into();
        let person = Person::try_from(params).unwrap();
        assert_eq!(person.last_name(), "pRUETT");
    }

    #[test]
    fn test_setters_validate_and_keep_old_value_on_error() {
        let mut person = Person::try_from(anna()).unwrap();

        assert!(person.set_first_name("Annabelle").is_ok());
        assert_eq!(person.first_name(), "Annabelle");

        assert!(person.set_email("anna@gmail").is_err());
        assert_eq!(person.email(), "anna.pruett@oracle.com");

        assert!(person.set_birthday("13/99/2099").is_ok());
        assert!(person.set_birthday("1/1/2000").is_err());
        assert_eq!(person.birthday(), "13/99/2099");

        assert!(person.set_zip_code(0).is_err());
        assert_eq!(person.zip_code(), 27614);

        assert!(person.set_likes("").is_err());
        assert!(person.set_city("").is_err());
        assert!(person.set_company("").is_err());
    }

    #[test]
    fn test_set_last_name_checks_letters() {
        let mut person = Person::try_from(anna()).unwrap();

        let err = person.set_last_name("Pruett1").unwrap_err();
        assert!(matches!(
            err,
            PersonError::InvalidValue {
                field: "lastName",
                reason: "must only contain uppercase or lowercase letters",
                ..
            }
        ));

        let err = person.set_last_name("Smith").unwrap_err();
        assert!(matches!(
            err,
            PersonError::InvalidValue {
                reason: "must be a Pruett surname",
                ..
            }
        ));

        assert!(person.set_last_name("PRUETT").is_ok());
        assert_eq!(person.last_name(), "PRUETT");
    }

    #[test]
    fn test_serializes_camel_case() {
        let person = Person::try_from(anna()).unwrap();
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["lastName"], "Pruett");
        assert_eq!(json["zipCode"], 27614);
    }

    #[test]
    fn test_payload_fields_are_required() {
        let err = serde_json::from_str::<PersonCreate>(r#"{"id": 3, "firstName": "Cindy"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field"));

        let update = serde_json::json!({
            "lastName": "Pruett",
            "firstName": "Zed",
            "birthday": "04/29/2002",
            "email": "zed@pruett.com",
            "likes": "Horses",
            "city": "Boston",
            "company": "Oracle"
        });
        let err = serde_json::from_value::<PersonUpdate>(update).unwrap_err();
        assert!(err.to_string().contains("zipCode"));
    }

    #[test]
    fn test_numbers_accepted_as_strings() {
        let mut body = serde_json::to_value(anna()).unwrap();
        body["id"] = serde_json::json!("11");
        body["zipCode"] = serde_json::json!(" 27614 ");

        let params: PersonCreate = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(params.id, 11);
        assert_eq!(params.zip_code, 27614);

        body["zipCode"] = serde_json::json!("Raleigh");
        assert!(serde_json::from_value::<PersonCreate>(body).is_err());
    }
}
