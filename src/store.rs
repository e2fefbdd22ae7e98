//! Persistent storage for todos.

mod memory;
mod postgres;

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::{api::validation::TodoText, id, id::TodoId, todo::Todo};

/// A persistent collection of [`Todo`]s.
///
/// Each method is a single atomic operation on the collection. Concurrent updates to the same todo
/// are last-write-wins.
#[async_trait]
pub trait TodoStore: Send + Sync + Debug {
    /// Returns every todo, in whatever order the store keeps them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store can't be read.
    async fn find_all(&self) -> Result<Vec<Todo>, Error>;

    /// Persists a new incomplete todo under a newly assigned ID, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the todo.
    async fn create(&self, text: TodoText) -> Result<Todo, Error>;

    /// Sets the `completed` field of the todo with the specified ID, returning the updated todo, or
    /// `None` if no such todo exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to apply the update.
    async fn find_by_id_and_update(&self, id: &TodoId, completed: bool)
        -> Result<Option<Todo>, Error>;

    /// Removes the todo with the specified ID, returning the removed todo, or `None` if no such
    /// todo exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to remove the todo.
    async fn find_by_id_and_delete(&self, id: &TodoId) -> Result<Option<Todo>, Error>;
}

/// An error from a [`TodoStore`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The database failed or rejected a query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored todo's ID couldn't be read back.
    #[error("stored todo has an invalid ID: {0}")]
    InvalidId(#[from] id::Error),
}
