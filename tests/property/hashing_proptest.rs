//! Property tests for the password hasher
//!
//! Kept to a handful of cases at the minimum bcrypt cost.

use proptest::prelude::*;

use forum::backend::auth::PasswordHasher;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn hash_then_verify(password in "[ -~]{1,40}") {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash(&password).unwrap();
        prop_assert_eq!(digest.len(), 60);
        prop_assert!(hasher.verify(&password, &digest));
    }

    #[test]
    fn other_password_does_not_verify(password in "[a-z]{1,20}", other in "[A-Z]{1,20}") {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash(&password).unwrap();
        prop_assert!(!hasher.verify(&other, &digest));
    }

    #[test]
    fn digests_are_salted(password in "[ -~]{1,40}") {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash(&password).unwrap();
        let second = hasher.hash(&password).unwrap();
        prop_assert_ne!(first, second);
    }
}
