//! See [`MemoryStore`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Error, TodoStore};
use crate::{api::validation::TodoText, id::TodoId, todo::Todo};

/// A [`TodoStore`] that keeps todos in memory, in creation order. Nothing is persisted across
/// restarts.
#[derive(Default, Debug)]
pub struct MemoryStore {
    /// The stored todos.
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    /// Constructs an empty [`MemoryStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`TodoStore::create`], but tries `id` first, only generating a new ID if `id` is taken.
    pub async fn create_with_id(&self, mut id: TodoId, text: TodoText) -> Todo {
        let mut todos = self.todos.write().await;

        while todos.iter().any(|todo| todo.id == id) {
            id.reroll();
        }

        let todo = Todo {
            id,
            text: text.into_inner(),
            completed: false,
        };
        todos.push(todo.clone());

        todo
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Todo>, Error> {
        Ok(self.todos.read().await.clone())
    }

    async fn create(&self, text: TodoText) -> Result<Todo, Error> {
        Ok(self.create_with_id(TodoId::generate(), text).await)
    }

    async fn find_by_id_and_update(
        &self,
        id: &TodoId,
        completed: bool,
    ) -> Result<Option<Todo>, Error> {
        let mut todos = self.todos.write().await;

        Ok(todos.iter_mut().find(|todo| todo.id == *id).map(|todo| {
            todo.completed = completed;
            todo.clone()
        }))
    }

    async fn find_by_id_and_delete(&self, id: &TodoId) -> Result<Option<Todo>, Error> {
        let mut todos = self.todos.write().await;

        Ok(todos
            .iter()
            .position(|todo| todo.id == *id)
            .map(|index| todos.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_unique_ids() -> anyhow::Result<()> {
        let store = MemoryStore::new();

        let first = store.create(TodoText::try_from("buy milk")?).await?;
        let second = store.create(TodoText::try_from("buy milk")?).await?;

        assert_ne!(first.id, second.id);
        assert!(!first.completed, "new todos should be incomplete");
        assert_eq!(store.find_all().await?, [first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn taken_id_rerolled() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let existing = store.create(TodoText::try_from("buy milk")?).await?;

        let todo = store
            .create_with_id(existing.id, TodoText::try_from("walk dog")?)
            .await;

        assert_ne!(todo.id, existing.id);
        assert_eq!(todo.text, "walk dog");
        assert_eq!(store.find_all().await?, [existing, todo]);

        Ok(())
    }

    #[tokio::test]
    async fn free_id_kept() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let id = TodoId::generate();

        let todo = store
            .create_with_id(id, TodoText::try_from("buy milk")?)
            .await;

        assert_eq!(todo.id, id);

        Ok(())
    }

    #[tokio::test]
    async fn update_only_changes_completed() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let todo = store.create(TodoText::try_from("walk dog")?).await?;

        let updated = store
            .find_by_id_and_update(&todo.id, true)
            .await?
            .expect("todo should exist");

        assert_eq!(
            updated,
            Todo {
                completed: true,
                ..todo
            },
        );
        assert_eq!(store.find_all().await?, [updated]);

        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_report_none() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let id = TodoId::generate();

        assert_eq!(store.find_by_id_and_update(&id, true).await?, None);
        assert_eq!(store.find_by_id_and_delete(&id).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_todo_once() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let todo = store.create(TodoText::try_from("water plants")?).await?;

        assert_eq!(store.find_by_id_and_delete(&todo.id).await?, Some(todo.clone()));
        assert_eq!(store.find_by_id_and_delete(&todo.id).await?, None);
        assert!(store.find_all().await?.is_empty(), "store should be empty");

        Ok(())
    }
}
