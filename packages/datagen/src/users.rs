// ABOUTME: Fake user batch generation
// ABOUTME: Locale-aware first names paired with batch-unique emails

use std::collections::HashSet;

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::{en, fr_fr, zh_tw};
use fake::Fake;
use rand::Rng;
use serde::Serialize;

/// One synthetic (first name, email) pair
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedUser {
    pub name: String,
    pub email: String,
}

/// Locale profiles a generated name may come from
#[derive(Debug, Clone, Copy)]
enum Locale {
    En,
    FrFr,
    ZhTw,
}

const LOCALES: &[Locale] = &[Locale::En, Locale::FrFr, Locale::ZhTw];

/// Fake user source, constructed once at startup and shared through the
/// application state.
#[derive(Debug, Clone, Default)]
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Produce exactly `count` users. Emails are unique within the batch;
    /// collisions get a numeric suffix on the local part.
    pub fn generate(&self, count: usize) -> Vec<GeneratedUser> {
        let mut rng = rand::thread_rng();
        let mut seen: HashSet<String> = HashSet::with_capacity(count);

        (0..count)
            .map(|_| {
                let locale = LOCALES[rng.gen_range(0..LOCALES.len())];
                let name: String = match locale {
                    Locale::En => en::FirstName().fake_with_rng(&mut rng),
                    Locale::FrFr => fr_fr::FirstName().fake_with_rng(&mut rng),
                    Locale::ZhTw => zh_tw::FirstName().fake_with_rng(&mut rng),
                };

                let candidate: String = SafeEmail().fake_with_rng(&mut rng);
                let email = dedupe_email(candidate, &mut seen);

                GeneratedUser { name, email }
            })
            .collect()
    }
}

/// Make `candidate` unique against `seen`, recording the chosen address.
fn dedupe_email(candidate: String, seen: &mut HashSet<String>) -> String {
    if seen.insert(candidate.clone()) {
        return candidate;
    }

    let (local, domain) = candidate.split_once('@').unwrap_or((candidate.as_str(), ""));
    let mut n = 2u64;
    loop {
        let next = if domain.is_empty() {
            format!("{}{}", local, n)
        } else {
            format!("{}{}@{}", local, n, domain)
        };
        if seen.insert(next.clone()) {
            return next;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count() {
        let generator = UserGenerator::new();
        for count in [0, 1, 100] {
            assert_eq!(generator.generate(count).len(), count);
        }
    }

    #[test]
    fn test_names_non_empty_and_emails_valid() {
        let generator = UserGenerator::new();
        for user in generator.generate(100) {
            assert!(!user.name.is_empty());
            assert!(user.email.contains('@'), "bad email: {}", user.email);
        }
    }

    #[test]
    fn test_emails_unique_within_batch() {
        let generator = UserGenerator::new();
        let users = generator.generate(500);
        let unique: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(unique.len(), users.len());
    }

    #[test]
    fn test_dedupe_appends_suffix() {
        let mut seen = HashSet::new();
        let first = dedupe_email("vasya@mail.com".to_string(), &mut seen);
        let second = dedupe_email("vasya@mail.com".to_string(), &mut seen);
        assert_eq!(first, "vasya@mail.com");
        assert_eq!(second, "vasya2@mail.com");
    }
}
