use std::fmt::{self, Display};
use std::str::FromStr;

use base64::Engine;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::Error;

/// The name of the persistence slot a [`CartStore`](crate::CartStore) reads
/// and writes.
///
/// Any non-empty string is a valid key; pick one per shopping session or per
/// user so that carts do not collide. [`CartKey::random`] generates a
/// collision-resistant key for anonymous carts.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CartKey(String);

impl CartKey {
    /// Creates a key from a caller-chosen name.
    ///
    /// Returns [`Error::EmptyCartKey`] for the empty string; everything else
    /// is accepted verbatim.
    pub fn new(key: impl Into<String>) -> Result<Self, Error> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::EmptyCartKey);
        }

        Ok(Self(key))
    }

    /// Generates a random 22-character key from 16 OS-random bytes.
    pub fn random() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes).unwrap();
        Self(BASE64_URL_SAFE_NO_PAD.encode(bytes))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CartKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CartKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_the_empty_string() {
        assert!(matches!(CartKey::new(""), Err(Error::EmptyCartKey)));
        assert!("".parse::<CartKey>().is_err());
    }

    #[test]
    fn test_accepts_arbitrary_names() {
        let key: CartKey = "user-42/checkout".parse().unwrap();
        assert_eq!(key.as_str(), "user-42/checkout");
        assert_eq!(key.to_string(), "user-42/checkout");
    }

    #[test]
    fn test_random_keys_do_not_collide() {
        let a = CartKey::random();
        let b = CartKey::random();

        assert_eq!(a.as_str().len(), 22);
        assert_ne!(a, b);
    }
}
