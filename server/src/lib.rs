//! In-memory todo API.
//!
//! # Design
//! The store is built explicitly and handed to the router as state, so each
//! `Router` owns its own collection for as long as the server runs. Handlers
//! are thin: they parse the path id, call into `TodoStore`, and shape the
//! response.

pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use model::{payload_fields, Fields, Message, Todo};
pub use store::TodoStore;

/// Router around a fresh, empty store.
pub fn app() -> Router {
    router(TodoStore::new())
}

pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(middleware::from_fn(cors::allow_any_origin))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Leading-integer parse of a path id: optional whitespace and sign, then the
/// longest run of digits (`0x` switches to hex). Trailing text is ignored, so
/// `12abc` is 12. No digits at all, or a negative value, matches no item.
fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let value = u64::from_str_radix(&s[..end], radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

async fn welcome() -> Json<Message> {
    Json(Message::new("Welcome to the TODO API"))
}

async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn create_todo(
    State(store): State<TodoStore>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Todo>) {
    let todo = store.create(payload_fields(body)).await;
    tracing::info!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    match store.update(id, payload_fields(body)).await {
        Some(todo) => {
            tracing::info!(id, "updated todo");
            Ok(Json(todo))
        }
        None => {
            tracing::debug!(id, "update target missing");
            Err(ApiError::NotFound)
        }
    }
}

async fn delete_todo(State(store): State<TodoStore>, Path(id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&id) {
        let removed = store.delete(id).await;
        tracing::info!(id, removed, "deleted todo");
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("17"), Some(17));
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("+5"), Some(5));
        assert_eq!(parse_id("  8"), Some(8));
    }

    #[test]
    fn parse_id_takes_the_leading_number() {
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("1e3"), Some(1));
        assert_eq!(parse_id("0x1f"), Some(31));
    }

    #[test]
    fn parse_id_without_digits_matches_nothing() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id(".5"), None);
    }

    #[test]
    fn parse_id_negative_or_huge_matches_nothing() {
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn not_found_message_matches_wire_text() {
        assert_eq!(ApiError::NotFound.to_string(), "Todo not found");
    }
}
