//! Field rules shared by [`Person::new`](super::Person::new) and the setters.
//!
//! Offsets and lengths are counted in `char`s.

use super::error::PersonError;

/// Every stored family member carries this surname (compared ignoring ASCII case).
pub const REQUIRED_SURNAME: &str = "Pruett";

pub(crate) fn positive(field: &'static str, value: i64) -> Result<(), PersonError> {
    if value <= 0 {
        return Err(PersonError::invalid(field, value, "must be greater than zero"));
    }
    Ok(())
}

pub(crate) fn not_blank(field: &'static str, value: &str) -> Result<(), PersonError> {
    if value.is_empty() {
        return Err(PersonError::invalid(field, value, "must not be blank"));
    }
    Ok(())
}

pub(crate) fn alphabetic(field: &'static str, value: &str) -> Result<(), PersonError> {
    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PersonError::invalid(
            field,
            value,
            "must only contain uppercase or lowercase letters",
        ));
    }
    Ok(())
}

pub(crate) fn surname(value: &str) -> Result<(), PersonError> {
    if !value.eq_ignore_ascii_case(REQUIRED_SURNAME) {
        return Err(PersonError::invalid(
            "lastName",
            value,
            "must be a Pruett surname",
        ));
    }
    Ok(())
}

/// `MM/DD/YYYY` by shape only: no calendar check, so `13/99/2099` passes.
pub(crate) fn birthday_format(value: &str) -> Result<(), PersonError> {
    let chars: Vec<char> = value.chars().collect();
    let digits = |range: std::ops::Range<usize>| chars[range].iter().all(|c| c.is_ascii_digit());

    let well_formed = chars.len() == 10
        && chars[2] == '/'
        && chars[5] == '/'
        && digits(0..2)
        && digits(3..5)
        && digits(6..10);

    if !well_formed {
        return Err(PersonError::invalid(
            "birthday",
            value,
            "must be in the form of month/day/year, e.g. 04/29/2002",
        ));
    }
    Ok(())
}

/// Exactly one `@`, and the last `.` must not come before it.
///
/// Without any `.` the last-dot position counts as 0, so only an address that
/// starts with `@` gets through.
pub(crate) fn email_shape(value: &str) -> Result<(), PersonError> {
    let invalid = || PersonError::invalid("email", value, "must contain an '@' and a '.'");

    let mut at_count = 0;
    let mut at_index = 0;
    let mut dot_index = 0;
    for (i, c) in value.chars().enumerate() {
        match c {
            '@' => {
                at_count += 1;
                at_index = i;
            }
            '.' => dot_index = i,
            _ => {}
        }
    }

    if at_count != 1 || dot_index < at_index {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: Result<(), PersonError>) -> &'static str {
        match result {
            Err(PersonError::InvalidValue { reason, .. }) => reason,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_positive() {
        assert!(positive("id", 1).is_ok());
        assert_eq!(reason(positive("id", 0)), "must be greater than zero");
        assert!(positive("zipCode", -27614).is_err());
    }

    #[test]
    fn test_alphabetic() {
        assert!(alphabetic("firstName", "Anna").is_ok());
        assert!(alphabetic("firstName", "Anna2").is_err());
        assert!(alphabetic("firstName", "Anna Lee").is_err());
        assert!(alphabetic("firstName", "Zoë").is_err());
    }

    #[test]
    fn test_surname_ignores_case() {
        assert!(surname("Pruett").is_ok());
        assert!(surname("PRUETT").is_ok());
        assert!(surname("pruett").is_ok());
        assert!(surname("Smith").is_err());
        assert!(surname("Pruetts").is_err());
    }

    #[test]
    fn test_birthday_shape_only() {
        assert!(birthday_format("04/29/2002").is_ok());
        assert!(birthday_format("13/99/2099").is_ok());

        assert!(birthday_format("4/29/2002").is_err());
        assert!(birthday_format("04-29-2002").is_err());
        assert!(birthday_format("04/29/02").is_err());
        assert!(birthday_format("04/2a/2002").is_err());
        assert!(birthday_format("04/29/2002x").is_err());
        assert!(birthday_format("").is_err());
    }

    #[test]
    fn test_email_positions() {
        assert!(email_shape("anna.pruett@oracle.com").is_ok());
        assert!(email_shape("a@b.c").is_ok());

        // Dot only before the '@'.
        assert!(email_shape("anna.pruett@oracle").is_err());
        // No '@' at all, and two of them.
        assert!(email_shape("anna.oracle.com").is_err());
        assert!(email_shape("a@b@c.com").is_err());
        // No dot: accepted only when '@' is the first character.
        assert!(email_shape("a@host").is_err());
        assert!(email_shape("@host").is_ok());
    }
}
