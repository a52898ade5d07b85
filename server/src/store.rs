//! In-memory item store.
//!
//! The collection is a flat `Vec` scanned linearly, so insertion order is the
//! list order. Ids come from a per-store counter rather than the clock, which
//! keeps back-to-back creates distinct.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::RwLock;

use crate::model::{Fields, Todo};

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<Vec<Todo>>>,
    last_id: Arc<AtomicU64>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn create(&self, fields: Fields) -> Todo {
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        let todo = Todo::new(id, fields);
        self.todos.write().await.push(todo.clone());
        todo
    }

    /// Merge `patch` into the first item with `id`. Returns `None` when no
    /// item matches; nothing is inserted in that case.
    pub async fn update(&self, id: u64, patch: Fields) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.iter_mut().find(|todo| todo.id == id)?;
        todo.apply(patch);
        Some(todo.clone())
    }

    /// Remove every item with `id` and return how many were dropped.
    pub async fn delete(&self, id: u64) -> usize {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        before - todos.len()
    }
}
