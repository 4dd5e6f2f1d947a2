//! The family members the registry starts with.

use crate::model::{Person, PersonError, REQUIRED_SURNAME};

/// Builds the ten starting records, ids 1 to 10, through the validating constructor.
pub fn family_seed() -> Result<Vec<Person>, PersonError> {
    let rows: [(i64, &str, &str, &str, &str, &str, i64, &str); 10] = [
        (1, "Anna", "04/29/2002", "anna.pruett@oracle.com", "Horses", "Raleigh", 27614, "Oracle"),
        (2, "Jackson", "08/18/2003", "jackson.pruett@epicGames.com", "Rocks", "Raleigh", 27614, "Epic Games"),
        (3, "Cindy", "05/10/1967", "nccindypruett@IBM.com", "Beaches", "Sunset Beach", 28468, "IBM"),
        (4, "Gregory", "06/13/1970", "ncgregpruett@lenovo.com", "Turtles", "Sunset Beach", 28468, "Lenovo"),
        (5, "Carly", "10/29/2020", "carly@gmail.com", "Dogs", "Raleigh", 27614, "Petco"),
        (6, "Rocco", "03/06/2017", "roccoPruett@pruett.com", "Hamsters", "Raleigh", 27614, "PetSmart"),
        (7, "Misty", "12/25/2014", "mistyPruett@pruett.com", "Mice", "Raleigh", 27614, "PetSmart"),
        (8, "Tobi", "10/01/2014", "mistyPruett@pruett.com", "Rats", "Raleigh", 27614, "PetSmart"),
        (9, "Ron", "05/23/1942", "ncronpruett@gmail.com", "Golf", "Shelby", 28150, "VMWare"),
        (10, "Beth", "07/02/1945", "ncbethpruett@gmail.com", "Flowers", "Shelby", 28150, "Library"),
    ];

    rows.into_iter()
        .map(|(id, first, birthday, email, likes, city, zip, company)| {
            Person::new(id, REQUIRED_SURNAME, first, birthday, email, likes, city, zip, company)
        })
        .collect()
}
