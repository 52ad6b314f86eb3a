//! Property tests for the field validators

use proptest::prelude::*;

use forum::shared::validation::{
    is_valid_email, validate_email, validate_password, validate_username, MAX_PASSWORD_LEN,
    MAX_USERNAME_LEN, MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};
use forum::shared::SharedError;

fn field_of(err: SharedError) -> String {
    match err {
        SharedError::ValidationError { field, .. } | SharedError::MissingField { field } => field,
    }
}

proptest! {
    #[test]
    fn valid_usernames_accepted(username in "[A-Za-z0-9_]{3,15}") {
        prop_assert!(validate_username(&username).is_ok());
    }

    #[test]
    fn usernames_with_other_characters_rejected(
        prefix in "[a-z]{2,6}",
        bad in "[^A-Za-z0-9_]",
        suffix in "[a-z]{0,6}",
    ) {
        let username = format!("{}{}{}", prefix, bad, suffix);
        let err = validate_username(&username).unwrap_err();
        prop_assert_eq!(field_of(err), "username");
    }

    #[test]
    fn username_length_bounds(len in 0usize..40) {
        let username = "a".repeat(len);
        let in_bounds = (MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len);
        prop_assert_eq!(validate_username(&username).is_ok(), in_bounds);
    }

    #[test]
    fn well_formed_emails_accepted(
        local in "[A-Za-z0-9._%+-]{1,20}",
        host in "[A-Za-z0-9-]{1,20}",
        tld in "[A-Za-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, host, tld);
        prop_assert!(validate_email(&email).is_ok());
        prop_assert!(is_valid_email(&email.to_lowercase()));
    }

    #[test]
    fn emails_without_at_rejected(text in "[A-Za-z0-9.]{0,30}") {
        prop_assert!(!is_valid_email(&text));
    }

    #[test]
    fn single_letter_tld_rejected(local in "[a-z]{1,10}", host in "[a-z]{1,10}", tld in "[a-z]") {
        let email = format!("{}@{}.{}", local, host, tld);
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn strong_passwords_accepted(
        upper in "[A-Z]{1,5}",
        lower in "[a-z]{1,5}",
        digit in "[0-9]{1,5}",
        symbol in "[!@#$%^&*]{1,5}",
    ) {
        let password = format!("{}{}{}{}xxxx", upper, lower, digit, symbol);
        prop_assert!(validate_password(&password).is_ok());
    }

    #[test]
    fn passwords_missing_a_class_rejected(password in "[a-z0-9]{8,30}") {
        let err = validate_password(&password).unwrap_err();
        prop_assert_eq!(field_of(err), "password");
    }

    #[test]
    fn password_length_bounds(len in 0usize..100) {
        let password: String = "Aa1!".chars().cycle().take(len).collect();
        let expected = (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len);
        prop_assert_eq!(validate_password(&password).is_ok(), expected);
    }
}
