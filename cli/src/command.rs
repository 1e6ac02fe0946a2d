//! Line-oriented command grammar for the interactive session.
//!
//! Title text is passed through to the form untouched — validation lives in
//! the core, not the parser, so `add` with a blank title parses fine and is
//! rejected by the form with the field flagged.

/// One edit targets exactly one field, mirroring the form's per-field
/// setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    Title(String),
    Description(String),
    Active(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(i64),
    Add { title: String, description: Option<String> },
    BatchAdd { title: String, description: Option<String> },
    BatchShow,
    BatchSubmit,
    Edit { id: i64, field: EditField },
    Delete(i64),
    Select(i64),
    SelectAll,
    DeleteSelected,
    Help,
    Quit,
}

pub const USAGE: &str = "\
commands:
  list                       fetch and show all items
  show <id>                  fetch one item
  add <title> [| <desc>]     create one item
  batch-add <title> [| <desc>]  queue an item for batch create
  batch-show                 show the pending batch
  batch-submit               send the pending batch
  edit <id> title <text>     rename an item
  edit <id> desc <text>      change an item's description
  edit <id> active <bool>    set an item active or inactive
  del <id>                   delete one item
  sel <id>                   toggle selection of an item
  sel-all                    select all / clear selection
  del-sel                    batch-delete the selected items
  help                       show this text
  quit                       leave";

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "list" => Ok(Command::List),
        "show" => Ok(Command::Show(parse_id(rest)?)),
        "add" => {
            let (title, description) = split_title(rest);
            Ok(Command::Add { title, description })
        }
        "batch-add" => {
            let (title, description) = split_title(rest);
            Ok(Command::BatchAdd { title, description })
        }
        "batch-show" => Ok(Command::BatchShow),
        "batch-submit" => Ok(Command::BatchSubmit),
        "edit" => parse_edit(rest),
        "del" => Ok(Command::Delete(parse_id(rest)?)),
        "sel" => Ok(Command::Select(parse_id(rest)?)),
        "sel-all" => Ok(Command::SelectAll),
        "del-sel" => Ok(Command::DeleteSelected),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}` (try `help`)")),
    }
}

fn parse_id(text: &str) -> Result<i64, String> {
    text.parse().map_err(|_| format!("expected an item id, got `{text}`"))
}

/// Split `title | description` on the first pipe. Either side may be empty;
/// an empty description is treated as absent.
fn split_title(rest: &str) -> (String, Option<String>) {
    match rest.split_once('|') {
        Some((title, description)) => {
            let description = description.trim();
            (
                title.trim().to_string(),
                (!description.is_empty()).then(|| description.to_string()),
            )
        }
        None => (rest.to_string(), None),
    }
}

fn parse_edit(rest: &str) -> Result<Command, String> {
    const USAGE_EDIT: &str = "usage: edit <id> <title|desc|active> <value>";
    let (id_text, rest) = rest.split_once(char::is_whitespace).ok_or(USAGE_EDIT)?;
    let id = parse_id(id_text)?;
    let (field, value) = match rest.trim().split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest.trim(), ""),
    };
    let field = match field {
        "title" => EditField::Title(value.to_string()),
        "desc" => EditField::Description(value.to_string()),
        "active" => match value {
            "true" => EditField::Active(true),
            "false" => EditField::Active(false),
            other => return Err(format!("expected true or false, got `{other}`")),
        },
        other => return Err(format!("unknown field `{other}` ({USAGE_EDIT})")),
    };
    Ok(Command::Edit { id, field })
}
