//! Property tests: round trip and determinism for both engines.

use classicrypt::alphabet::ALPHABET;
use classicrypt::error::CipherError;
use classicrypt::{PolyalphabeticSubstitution, RouteTransposition, TextCipher};
use proptest::prelude::*;

/// Strategy for a non-weak key drawn from the alphabet, in mixed case.
fn poly_key() -> impl Strategy<Value = String> {
    prop::collection::vec((0..ALPHABET.len(), any::<bool>()), 1..12)
        .prop_filter("weak key", |k| k.len() == 1 || k.iter().any(|(i, _)| *i != k[0].0))
        .prop_map(|k| {
            k.into_iter()
                .flat_map(|(i, lower)| {
                    let c = ALPHABET[i];
                    let s: String = if lower {
                        c.to_lowercase().collect()
                    } else {
                        c.to_string()
                    };
                    s.chars().collect::<Vec<_>>()
                })
                .collect()
        })
}

fn route_normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

proptest! {
    #[test]
    fn route_roundtrip(columns in 1i64..20, text in "[a-zA-Z0-9 ,.!]{0,200}") {
        let cipher = RouteTransposition::new(columns).unwrap();
        let normalized = route_normalize(&text);

        match cipher.encrypt(&text) {
            Ok(encrypted) => {
                prop_assert!(normalized.len() > columns as usize);
                prop_assert_eq!(encrypted.len(), normalized.len());
                prop_assert_eq!(cipher.decrypt(&encrypted).unwrap(), normalized);
            }
            Err(CipherError::EmptyText) => {
                prop_assert!(text.is_empty())
            }
            Err(CipherError::NoLetters) => {
                prop_assert!(normalized.is_empty())
            }
            Err(CipherError::TextTooShort) => {
                prop_assert!(normalized.len() <= columns as usize)
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other)
            }
        }
    }

    #[test]
    fn route_deterministic(columns in 1i64..10, text in "[A-Z]{11,60}") {
        let first = RouteTransposition::new(columns).unwrap();
        let second = RouteTransposition::new(columns).unwrap();
        prop_assert_eq!(first.encrypt(&text).unwrap(), second.encrypt(&text).unwrap());
        prop_assert_eq!(first.encrypt(&text).unwrap(), first.encrypt(&text).unwrap());
    }

    #[test]
    fn poly_roundtrip(key in poly_key(), text in "[а-яёА-ЯЁ a-z0-9,.]{1,200}") {
        let cipher = PolyalphabeticSubstitution::new(&key).unwrap();
        let normalized: String = text
            .chars()
            .filter_map(classicrypt::alphabet::to_upper)
            .collect();

        match cipher.encrypt(&text) {
            Ok(encrypted) => {
                prop_assert_eq!(encrypted.chars().count(), normalized.chars().count());
                prop_assert_eq!(cipher.decrypt(&encrypted).unwrap(), normalized);
            }
            Err(CipherError::EmptyText) => {
                prop_assert!(normalized.is_empty())
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other)
            }
        }
    }

    #[test]
    fn poly_deterministic(key in poly_key(), text in "[А-ЯЁ]{1,80}") {
        let first = PolyalphabeticSubstitution::new(&key).unwrap();
        let second = PolyalphabeticSubstitution::new(&key).unwrap();
        prop_assert_eq!(first.encrypt(&text).unwrap(), second.encrypt(&text).unwrap());
    }

    #[test]
    fn poly_decrypt_rejects_lowercase(key in poly_key(), text in "[А-ЯЁ]{0,20}[а-яё][А-ЯЁ]{0,20}") {
        let cipher = PolyalphabeticSubstitution::new(&key).unwrap();
        prop_assert_eq!(cipher.decrypt(&text), Err(CipherError::InvalidCipherText));
    }

    #[test]
    fn trait_roundtrip(columns in 1i64..8, text in "[A-Z]{9,50}") {
        let cipher: Box<dyn TextCipher> = Box::new(RouteTransposition::new(columns).unwrap());
        let encrypted = cipher.encrypt(&text).unwrap();
        prop_assert_eq!(cipher.decrypt(&encrypted).unwrap(), text);
    }
}
