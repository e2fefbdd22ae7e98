//! See [`PgStore`].

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};

use super::{Error, TodoStore};
use crate::{api::validation::TodoText, id::TodoId, todo::Todo};

/// Creates the `todos` table if it doesn't exist yet.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id BYTEA PRIMARY KEY,
    text TEXT NOT NULL CHECK (text <> ''),
    completed BOOLEAN NOT NULL DEFAULT FALSE
)";

/// The advisory lock key held while creating the `todos` table.
const CREATE_TABLE_LOCK: i64 = 0x746f_646f_7300;

/// The name of the `todos` table's primary key constraint.
const PRIMARY_KEY: &str = "todos_pkey";

/// A [`TodoStore`] backed by a PostgreSQL `todos` table.
#[derive(Clone, Debug)]
pub struct PgStore {
    /// The SQLx database pool.
    pool: PgPool,
}

impl PgStore {
    /// Connects to the database and ensures the `todos` table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial database connection or table creation fails.
    pub async fn connect(db_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().connect(db_url).await?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, ensuring the `todos` table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails.
    pub async fn from_pool(pool: PgPool) -> Result<Self, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Concurrent `CREATE TABLE IF NOT EXISTS` statements can still conflict, so instances
        // starting at the same time take turns.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(CREATE_TABLE_LOCK)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(Self { pool })
    }

    /// Like [`TodoStore::create`], but tries `id` first, only generating a new ID if `id` is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the todo.
    pub async fn create_with_id(&self, mut id: TodoId, text: TodoText) -> Result<Todo, Error> {
        loop {
            match sqlx::query_as::<_, TodoRow>(
                "INSERT INTO todos (id, text)
                    VALUES ($1, $2)
                    RETURNING id, text, completed",
            )
            .bind(id.as_slice())
            .bind(text.as_str())
            .fetch_one(&self.pool)
            .await
            {
                Err(sqlx::Error::Database(error)) if error.constraint() == Some(PRIMARY_KEY) => {
                    id.reroll();
                }
                result => break result?.try_into(),
            }
        }
    }
}

/// A row of the `todos` table.
#[derive(FromRow, Debug)]
struct TodoRow {
    /// See [`Todo::id`].
    id: Vec<u8>,

    /// See [`Todo::text`].
    text: String,

    /// See [`Todo::completed`].
    completed: bool,
}

impl TryFrom<TodoRow> for Todo {
    type Error = Error;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TodoId::from_slice(&row.id)?,
            text: row.text,
            completed: row.completed,
        })
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn find_all(&self) -> Result<Vec<Todo>, Error> {
        sqlx::query_as::<_, TodoRow>("SELECT id, text, completed FROM todos")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Todo::try_from)
            .collect()
    }

    async fn create(&self, text: TodoText) -> Result<Todo, Error> {
        self.create_with_id(TodoId::generate(), text).await
    }

    async fn find_by_id_and_update(
        &self,
        id: &TodoId,
        completed: bool,
    ) -> Result<Option<Todo>, Error> {
        sqlx::query_as::<_, TodoRow>(
            "UPDATE todos SET completed = $2
                WHERE id = $1
                RETURNING id, text, completed",
        )
        .bind(id.as_slice())
        .bind(completed)
        .fetch_optional(&self.pool)
        .await?
        .map(Todo::try_from)
        .transpose()
    }

    async fn find_by_id_and_delete(&self, id: &TodoId) -> Result<Option<Todo>, Error> {
        sqlx::query_as::<_, TodoRow>(
            "DELETE FROM todos
                WHERE id = $1
                RETURNING id, text, completed",
        )
        .bind(id.as_slice())
        .fetch_optional(&self.pool)
        .await?
        .map(Todo::try_from)
        .transpose()
    }
}
