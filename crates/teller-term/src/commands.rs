//! Terminal input classification.

/// What a line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    History,
    Usage,
    /// Anything else is sent to the model verbatim (trimmed).
    Say(String),
}

/// Classify one input line. Returns `None` for blank lines.
///
/// Command words match case-insensitively and only as the whole line.
pub fn parse_line(line: &str) -> Option<Command> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    let command = match text.to_lowercase().as_str() {
        "quit" => Command::Quit,
        "reset" => Command::Reset,
        "history" => Command::History,
        "usage" => Command::Usage,
        _ => Command::Say(text.to_string()),
    };
    Some(command)
}
