//! Client application state: a local mirror of the server's collection plus
//! the draft, edit and filter state a todo view needs.
//!
//! # Design
//! The mirror only changes once the server has answered. Every mutating
//! action sends one request through the `Transport`, and on success folds the
//! server's response into the mirror. Failures leave the mirror as it was and
//! are returned to the caller, which is expected to log them.
//!
//! Delete is the exception: once any HTTP response arrives, the item is
//! dropped locally without looking at the status.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Filter, Priority, Todo, UpdateTodo};

/// Executes one HTTP round-trip.
///
/// Non-2xx statuses must come back as `Ok(HttpResponse)`; `Err` is reserved
/// for requests that never produced a response.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Text, due date and priority as typed by the user, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub due_date: String,
    pub priority: Priority,
}

impl Draft {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            text: todo.text.clone(),
            due_date: todo.due_date.clone(),
            priority: todo.priority,
        }
    }
}

/// Scratch state for the item currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editing {
    pub id: u64,
    pub draft: Draft,
}

pub struct TodoApp<T> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    draft: Draft,
    editing: Option<Editing>,
    filter: Filter,
}

impl<T: Transport> TodoApp<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Vec::new(),
            draft: Draft::default(),
            editing: None,
            filter: Filter::All,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<&Editing> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Editing> {
        self.editing.as_mut()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The mirror as seen through the current filter, in insertion order.
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .collect()
    }

    /// Replace the mirror wholesale with the server's list.
    pub fn fetch_todos(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_todos();
        let response = self.transport.execute(request)?;
        self.todos = self.client.parse_list_todos(response)?;
        tracing::debug!(count = self.todos.len(), "fetched todos");
        Ok(())
    }

    /// Submit the draft. Returns `Ok(false)` without sending anything when
    /// the draft text is blank.
    pub fn add_todo(&mut self) -> Result<bool, ApiError> {
        if self.draft.text.trim().is_empty() {
            return Ok(false);
        }
        let input = CreateTodo {
            text: self.draft.text.clone(),
            due_date: self.draft.due_date.clone(),
            priority: self.draft.priority,
        };
        let request = self.client.build_create_todo(&input)?;
        let response = self.transport.execute(request)?;
        let todo = self.client.parse_create_todo(response)?;
        tracing::debug!(id = todo.id, "added todo");
        self.todos.push(todo);
        self.draft = Draft::default();
        Ok(true)
    }

    /// Flip completion on the mirrored item `id`. Returns `Ok(false)` when the
    /// mirror has no such item.
    pub fn toggle_todo(&mut self, id: u64) -> Result<bool, ApiError> {
        let Some(current) = self.todos.iter().find(|todo| todo.id == id) else {
            return Ok(false);
        };
        let patch = UpdateTodo::toggled(current);
        let request = self.client.build_update_todo(id, &patch)?;
        let response = self.transport.execute(request)?;
        let updated = self.client.parse_update_todo(response)?;
        self.replace(id, updated);
        Ok(true)
    }

    /// Capture the fields of item `id` into edit scratch state.
    pub fn start_editing(&mut self, id: u64) -> bool {
        match self.todos.iter().find(|todo| todo.id == id) {
            Some(todo) => {
                self.editing = Some(Editing {
                    id,
                    draft: Draft::from_todo(todo),
                });
                true
            }
            None => false,
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Send the scratch text, due date and priority. `completed` is left out
    /// so the server keeps whatever it has. Edit mode ends only on success.
    pub fn save_edit(&mut self) -> Result<bool, ApiError> {
        let Some(editing) = &self.editing else {
            return Ok(false);
        };
        let id = editing.id;
        let patch = UpdateTodo {
            text: Some(editing.draft.text.clone()),
            completed: None,
            due_date: Some(editing.draft.due_date.clone()),
            priority: Some(editing.draft.priority),
        };
        let request = self.client.build_update_todo(id, &patch)?;
        let response = self.transport.execute(request)?;
        let updated = self.client.parse_update_todo(response)?;
        self.replace(id, updated);
        self.cancel_editing();
        Ok(true)
    }

    /// Ask the server to delete `id`, then drop it from the mirror as soon as
    /// a response arrives. An unexpected status is still reported, after the
    /// local removal.
    pub fn delete_todo(&mut self, id: u64) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self.transport.execute(request)?;
        self.todos.retain(|todo| todo.id != id);
        if self.editing.as_ref().is_some_and(|editing| editing.id == id) {
            self.editing = None;
        }
        self.client.parse_delete_todo(response)
    }

    fn replace(&mut self, id: u64, updated: Todo) {
        for todo in self.todos.iter_mut().filter(|todo| todo.id == id) {
            *todo = updated.clone();
        }
    }
}
