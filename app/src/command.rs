//! Line commands understood by the terminal client.

use todo_core::{Filter, Priority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <text> [due=YYYY-MM-DD] [priority=low|medium|high]`
    Add {
        text: String,
        due_date: Option<String>,
        priority: Option<Priority>,
    },
    Toggle(usize),
    Edit(usize),
    SetText(String),
    SetDue(String),
    SetPriority(Priority),
    Save,
    Cancel,
    Delete(usize),
    Filter(Filter),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <text> [due=YYYY-MM-DD] [priority=low|medium|high]
  toggle <n>              flip completion of row n
  edit <n>                start editing row n
    text <text>           set the edited text
    due <date>            set the edited due date (empty clears it)
    priority <level>      set the edited priority
    save | cancel         finish editing
  delete <n>              delete row n
  filter all|active|completed
  help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "add" | "a" => parse_add(rest),
            "toggle" | "t" => row(rest).map(Command::Toggle),
            "edit" | "e" => row(rest).map(Command::Edit),
            "text" => Ok(Command::SetText(rest.to_string())),
            "due" => Ok(Command::SetDue(rest.to_string())),
            "priority" | "p" => rest.parse().map(Command::SetPriority),
            "save" | "s" => Ok(Command::Save),
            "cancel" | "c" => Ok(Command::Cancel),
            "delete" | "d" | "rm" => row(rest).map(Command::Delete),
            "filter" | "f" => rest.parse().map(Command::Filter),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

fn row(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a row number, got {arg:?}")),
    }
}

/// Trailing `due=`/`priority=` tokens are options; everything before them is
/// the task text, kept as typed.
fn parse_add(rest: &str) -> Result<Command, String> {
    let mut text = rest.trim_end();
    let mut due_date = None;
    let mut priority = None;

    loop {
        let (head, token) = match text.rsplit_once(char::is_whitespace) {
            Some((head, token)) => (head, token),
            None => ("", text),
        };
        if let Some(value) = token.strip_prefix("due=") {
            if due_date.is_none() {
                due_date = Some(value.to_string());
            }
        } else if let Some(value) = token.strip_prefix("priority=") {
            if priority.is_none() {
                priority = Some(value.parse()?);
            }
        } else {
            break;
        }
        text = head.trim_end();
    }

    Ok(Command::Add {
        text: text.to_string(),
        due_date,
        priority,
    })
}
