//! See [`Id`].

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use derive_more::derive::{AsMut, AsRef, Deref};
use rand::RngCore;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// A todo's ID. Twelve bytes, or 16 characters of `base64url`.
pub type TodoId = Id<[u8; 12]>;

/// A fixed-size ID that can be deserialized from and serialized to `base64url` (without padding).
#[derive(
    Deref,
    AsRef,
    AsMut,
    DeserializeFromStr,
    SerializeDisplay,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
#[as_ref(forward)]
#[as_mut(forward)]
pub struct Id<T>(T);

impl<const N: usize> Id<[u8; N]> {
    /// Generates a pseudorandom ID.
    pub fn generate() -> Self {
        let mut id = Self([0; N]);
        id.reroll();
        id
    }

    /// Constructs an ID from raw bytes, such as a value read back from the database.
    ///
    /// # Errors
    ///
    /// Fails if the number of bytes doesn't match the size of the ID.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; N] = bytes.try_into().map_err(|_| Error::Size {
            expected: N,
            found: bytes.len(),
        })?;

        Ok(Self(bytes))
    }
}

impl<T: AsMut<[u8]>> Id<T> {
    /// Overwrites this ID with a new pseudorandom ID, reusing the existing memory.
    pub fn reroll(&mut self) {
        rand::thread_rng().fill_bytes(self.as_mut());
    }
}

impl<T: AsRef<[u8]>> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", URL_SAFE_NO_PAD.encode(self))
    }
}

/// An error constructing an [`Id`].
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The ID isn't valid Base64.
    #[error("failed to construct ID from Base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The size of the decoded bytes doesn't match the expected size of the ID's type.
    #[error("expected ID to be {expected} bytes, found {found} bytes")]
    Size {
        /// The expected size of the ID's type.
        expected: usize,

        /// The size of the decoded bytes.
        found: usize,
    },
}

impl<const N: usize> FromStr for Id<[u8; N]> {
    type Err = Error;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE_NO_PAD.decode(str)?;

        Self::from_slice(&bytes)
    }
}
