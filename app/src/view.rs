use std::fmt::Write;

use todo_core::{Filter, Priority, Todo, TodoApp, Transport};

fn flag(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "[low]   ",
        Priority::Medium => "[medium]",
        Priority::High => "[high]  ",
    }
}

fn filter_bar(active: Filter) -> String {
    [Filter::All, Filter::Active, Filter::Completed]
        .iter()
        .map(|filter| {
            if *filter == active {
                format!("<{filter}>")
            } else {
                format!(" {filter} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn todo_line(row: usize, todo: &Todo) -> String {
    let check = if todo.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{row:>3}. {check} {} {}", flag(todo.priority), todo.text);
    if todo.completed {
        line.push_str("  (done)");
    }
    if !todo.due_date.is_empty() {
        let _ = write!(line, "  due {}", todo.due_date);
    }
    line
}

/// Render the whole screen: header, filter bar, then the filtered rows.
pub fn render<T: Transport>(app: &TodoApp<T>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== TODO ==");
    let _ = writeln!(out, "filter: {}", filter_bar(app.filter()));

    let visible = app.visible_todos();
    if visible.is_empty() {
        let _ = writeln!(out, "  (nothing here)");
    }
    for (index, todo) in visible.iter().enumerate() {
        let row = index + 1;
        match app.editing() {
            Some(editing) if editing.id == todo.id => {
                let draft = &editing.draft;
                let _ = writeln!(out, "{row:>3}. editing:");
                let _ = writeln!(out, "       text:     {}", draft.text);
                let _ = writeln!(out, "       due:      {}", draft.due_date);
                let _ = writeln!(out, "       priority: {}", draft.priority);
                let _ = writeln!(out, "       (save | cancel)");
            }
            _ => {
                let _ = writeln!(out, "{}", todo_line(row, todo));
            }
        }
    }
    out
}

/// Map a 1-based row in the current view to an item id.
pub fn row_id<T: Transport>(app: &TodoApp<T>, row: usize) -> Option<u64> {
    app.visible_todos()
        .get(row.checked_sub(1)?)
        .map(|todo| todo.id)
}

#[cfg(test)]
mod tests {
    use todo_core::{ApiError, HttpRequest, HttpResponse, TodoClient};

    use super::*;

    struct Fixed(&'static str);

    impl Transport for Fixed {
        fn execute(&mut self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse::new(200, self.0))
        }
    }

    const LIST: &str = r#"[
        {"id":10,"text":"done thing","completed":true,"dueDate":"2024-05-05","priority":"high"},
        {"id":11,"text":"open thing","completed":false,"dueDate":"","priority":"low"}
    ]"#;

    fn app() -> TodoApp<Fixed> {
        let mut app = TodoApp::new(TodoClient::default(), Fixed(LIST));
        app.fetch_todos().unwrap();
        app
    }

    #[test]
    fn renders_rows_with_state() {
        let screen = render(&app());
        assert!(screen.contains("<all>"));
        assert!(screen.contains("  1. [x] [high]   done thing  (done)  due 2024-05-05"));
        assert!(screen.contains("  2. [ ] [low]    open thing"));
    }

    #[test]
    fn rows_follow_the_filter() {
        let mut app = app();
        app.set_filter(Filter::Active);
        assert_eq!(row_id(&app, 1), Some(11));
        assert_eq!(row_id(&app, 2), None);
        assert_eq!(row_id(&app, 0), None);
        assert!(!render(&app).contains("done thing"));
    }

    #[test]
    fn editing_row_shows_scratch_fields() {
        let mut app = app();
        app.start_editing(11);
        app.editing_mut().unwrap().draft.text = "renamed".to_string();
        let screen = render(&app);
        assert!(screen.contains("editing:"));
        assert!(screen.contains("text:     renamed"));
    }

    #[test]
    fn empty_view_says_so() {
        let mut app = app();
        app.set_filter(Filter::Completed);
        app.delete_todo(10).ok();
        assert!(render(&app).contains("(nothing here)"));
    }
}
