//! Wire types for the todo API.
//!
//! Only `id` is owned by the server. Everything else on an item is whatever
//! the caller sent, kept as raw JSON: a non-string `text` or an unknown
//! `priority` is stored and echoed back unchanged. The browser client sends
//! `text`, `dueDate` and `priority`, and the store adds `completed`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied item fields, keyed by their JSON names.
pub type Fields = Map<String, Value>;

const ID: &str = "id";
const COMPLETED: &str = "completed";

/// Fields carried by a request body. A JSON value that is not an object
/// carries none.
pub fn payload_fields(body: Value) -> Fields {
    match body {
        Value::Object(mut fields) => {
            fields.remove(ID);
            fields
        }
        _ => Fields::new(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Todo {
    /// A new item from a create payload. `completed` is forced to `false`
    /// whatever the payload said.
    pub fn new(id: u64, mut fields: Fields) -> Self {
        fields.remove(ID);
        fields.insert(COMPLETED.to_string(), Value::Bool(false));
        Self { id, fields }
    }

    /// Shallow merge: every key in `patch` overwrites, absent keys keep their
    /// values. `id` is never taken from a patch.
    pub fn apply(&mut self, patch: Fields) {
        for (key, value) in patch {
            if key != ID {
                self.fields.insert(key, value);
            }
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
