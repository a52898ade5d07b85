//! Terminal client for the todo API.
//!
//! Fetches the list once at startup, then reads one command per line and
//! redraws after each action. Failed requests are logged to stderr and leave
//! the view as it was.

mod command;
mod transport;
mod view;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use todo_core::{TodoApp, TodoClient, Transport, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use transport::UreqTransport;

enum Flow {
    Continue,
    Quit,
}

/// First CLI argument, else `TODO_API_URL`, else the local default.
fn base_url() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TODO_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let client = TodoClient::new(&base_url());
    tracing::info!(base_url = client.base_url(), "starting");
    let mut app = TodoApp::new(client, UreqTransport::new());

    if let Err(err) = app.fetch_todos() {
        tracing::error!(%err, "Error fetching todos");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", view::render(&app));
    println!("type `help` for commands");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => {
                if let Flow::Quit = dispatch(&mut app, command) {
                    break;
                }
            }
            Err(message) => {
                println!("{message}");
                continue;
            }
        }
        print!("{}", view::render(&app));
    }

    Ok(())
}

fn dispatch<T: Transport>(app: &mut TodoApp<T>, command: Command) -> Flow {
    match command {
        Command::Add {
            text,
            due_date,
            priority,
        } => {
            let draft = app.draft_mut();
            draft.text = text;
            if let Some(due_date) = due_date {
                draft.due_date = due_date;
            }
            if let Some(priority) = priority {
                draft.priority = priority;
            }
            match app.add_todo() {
                Ok(true) => {}
                Ok(false) => println!("task text is empty"),
                Err(err) => tracing::error!(%err, "Error adding todo"),
            }
        }
        Command::Toggle(row) => {
            if let Some(id) = lookup(app, row) {
                if let Err(err) = app.toggle_todo(id) {
                    tracing::error!(%err, id, "Error toggling todo");
                }
            }
        }
        Command::Edit(row) => {
            if let Some(id) = lookup(app, row) {
                app.start_editing(id);
            }
        }
        Command::SetText(text) => edit_field(app, |draft| draft.text = text),
        Command::SetDue(due_date) => edit_field(app, |draft| draft.due_date = due_date),
        Command::SetPriority(priority) => edit_field(app, |draft| draft.priority = priority),
        Command::Save => match app.save_edit() {
            Ok(true) => {}
            Ok(false) => println!("not editing"),
            Err(err) => tracing::error!(%err, "Error updating todo"),
        },
        Command::Cancel => app.cancel_editing(),
        Command::Delete(row) => {
            if let Some(id) = lookup(app, row) {
                if let Err(err) = app.delete_todo(id) {
                    tracing::error!(%err, id, "Error deleting todo");
                }
            }
        }
        Command::Filter(filter) => app.set_filter(filter),
        Command::Help => println!("{HELP}"),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn lookup<T: Transport>(app: &TodoApp<T>, row: usize) -> Option<u64> {
    let id = view::row_id(app, row);
    if id.is_none() {
        println!("no row {row}");
    }
    id
}

fn edit_field<T: Transport>(app: &mut TodoApp<T>, set: impl FnOnce(&mut todo_core::Draft)) {
    match app.editing_mut() {
        Some(editing) => set(&mut editing.draft),
        None => println!("not editing; use `edit <n>` first"),
    }
}
