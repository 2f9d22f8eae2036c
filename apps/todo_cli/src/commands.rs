//! Line commands typed at the todo prompt.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a command is a new todo title (Enter submits).
    Add(String),
    /// Row numbers are 1-based, as printed.
    Toggle(usize),
    Edit(usize),
    Delete(usize),
    Reload,
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  <title> | add <title>   create a todo
  toggle <n>              mark row n done / not done
  edit <n>                rename row n
  delete <n>              delete row n
  reload                  fetch the list again
  list                    show the list
  help                    show this help
  quit                    exit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match (keyword.to_ascii_lowercase().as_str(), rest) {
        ("add", title) => Command::Add(title.to_string()),
        ("reload", "") => Command::Reload,
        ("list" | "ls", "") => Command::List,
        ("help" | "?", "") => Command::Help,
        ("quit" | "exit" | "q", "") => Command::Quit,
        ("toggle" | "t" | "done", row) => row_command(row, Command::Toggle, line),
        ("edit" | "e", row) => row_command(row, Command::Edit, line),
        ("delete" | "del" | "rm", row) => row_command(row, Command::Delete, line),
        _ => Command::Add(line.to_string()),
    }
}

fn row_command(row: &str, make: fn(usize) -> Command, line: &str) -> Command {
    match row.parse::<usize>() {
        Ok(row) if row > 0 => make(row),
        _ => Command::Add(line.to_string()),
    }
}
