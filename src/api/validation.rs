//! Utilities to help with API request validation.

use derive_more::derive::{AsRef, Deref, Display};
use serde::Deserialize;
use serde_with::SerializeDisplay;
use thiserror::Error;

/// A todo's text. Must not be empty, but is otherwise stored exactly as submitted.
///
/// There is no maximum length. Only the request body size limit bounds it.
pub type TodoText = BoundedString<1, { usize::MAX }>;

/// A [`String`] newtype that guarantees its length is within a certain range.
#[derive(
    Deref,
    AsRef,
    Display,
    Deserialize,
    SerializeDisplay,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct BoundedString<const MIN: usize, const MAX: usize>(String);

impl<const MIN: usize, const MAX: usize> BoundedString<MIN, MAX> {
    /// Consumes the [`BoundedString`], returning the wrapped [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// An error constructing a [`BoundedString`].
#[derive(Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BoundedStringError<const MIN: usize, const MAX: usize> {
    /// The length was less than the [`BoundedString`]'s `MIN`.
    #[error("invalid length {0}, expected at least {MIN}")]
    TooShort(usize),

    /// The length was greater than the [`BoundedString`]'s `MAX`.
    #[error("invalid length {0}, expected at most {MAX}")]
    TooLong(usize),
}

impl<const MIN: usize, const MAX: usize> TryFrom<String> for BoundedString<MIN, MAX> {
    type Error = BoundedStringError<MIN, MAX>;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        if string.len() < MIN {
            Err(BoundedStringError::TooShort(string.len()))
        } else if string.len() > MAX {
            Err(BoundedStringError::TooLong(string.len()))
        } else {
            Ok(Self(string))
        }
    }
}

impl<const MIN: usize, const MAX: usize> TryFrom<&str> for BoundedString<MIN, MAX> {
    type Error = BoundedStringError<MIN, MAX>;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        Self::try_from(str.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_todo_text_rejected() {
        assert_eq!(TodoText::try_from(""), Err(BoundedStringError::TooShort(0)));
    }

    #[test]
    fn todo_text_kept_untrimmed() -> anyhow::Result<()> {
        let text = TodoText::try_from("  buy milk ")?;

        assert_eq!(text.as_str(), "  buy milk ");

        Ok(())
    }

    #[test]
    fn long_todo_text_accepted() {
        let text = "a".repeat(100_000);

        TodoText::try_from(text).expect("long todo text should be valid");
    }

    #[test]
    fn bounded_string_rejects_long_input() {
        type Short = BoundedString<0, 3>;

        assert_eq!(Short::try_from("four"), Err(BoundedStringError::TooLong(4)));
    }

    #[test]
    fn todo_text_deserialization() {
        serde_json::from_str::<TodoText>(r#""buy milk""#).expect("todo text should be valid");
        serde_json::from_str::<TodoText>(r#""""#).expect_err("empty todo text should be invalid");
        serde_json::from_str::<TodoText>("null").expect_err("null todo text should be invalid");
    }
}
