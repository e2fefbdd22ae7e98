//! See [`Todo`].

use serde::{Deserialize, Serialize};

use crate::id::TodoId;

/// A short text item with a completion flag.
///
/// Only `completed` ever changes after creation.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// The ID assigned by the store when the todo was created.
    pub id: TodoId,

    /// The todo's text. Never empty.
    pub text: String,

    /// Whether the todo is done.
    pub completed: bool,
}
