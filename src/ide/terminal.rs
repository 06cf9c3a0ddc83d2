//! # Mock Terminal
//!
//! A canned shell. Nothing is executed: each command line is matched against
//! a fixed table and answered with at most one line of output.
//!
//! | Input          | Output                                  |
//! |----------------|-----------------------------------------|
//! | `help`         | the command list                        |
//! | `clear`        | (empties the history)                   |
//! | `ls`           | a fixed directory listing               |
//! | `pwd`          | a fixed path                            |
//! | `echo <text>`  | `<text>` verbatim                       |
//! | `date`         | the current UTC time, RFC 2822          |
//! | anything else  | `Command not found: <input>`            |
//! | empty          | nothing, not even the input line        |

use chrono::{DateTime, Utc};

pub const BANNER: [&str; 2] = [
    "HENU PS Terminal v1.0.0",
    "Type \"help\" for available commands",
];
pub const HELP_TEXT: &str = "Available commands: help, clear, ls, pwd, echo, date";
pub const LS_OUTPUT: &str = "src/  backend/  README.md  package.json";
pub const PWD_OUTPUT: &str = "/workspace/my-project";
pub const PROMPT: &str = "$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Input,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl HistoryEntry {
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Input,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Output,
            text: text.into(),
        }
    }
}

/// How the interpreter answers one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank line: nothing is recorded.
    Nothing,
    /// Wipe the history.
    Clear,
    /// Record the input, then the output if there is any.
    Output(Option<String>),
}

/// Answer a command line. Pure apart from reading `now` for `date`.
pub fn interpret(line: &str, now: DateTime<Utc>) -> Reply {
    let command = line.trim();
    let output = match command {
        "" => return Reply::Nothing,
        "clear" => return Reply::Clear,
        "help" => HELP_TEXT.to_string(),
        "ls" => LS_OUTPUT.to_string(),
        "pwd" => PWD_OUTPUT.to_string(),
        "date" => now.to_rfc2822(),
        _ => match command.strip_prefix("echo ") {
            Some(rest) => rest.to_string(),
            None => format!("Command not found: {}", command),
        },
    };
    Reply::Output(Some(output).filter(|text| !text.is_empty()))
}

/// Session history plus the line being typed.
#[derive(Debug, Clone)]
pub struct MockTerminal {
    history: Vec<HistoryEntry>,
    input: String,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTerminal {
    pub fn new() -> Self {
        Self {
            history: BANNER.iter().map(|line| HistoryEntry::output(*line)).collect(),
            input: String::new(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Run whatever is in the input buffer and clear it.
    pub fn submit(&mut self, now: DateTime<Utc>) -> bool {
        let line = std::mem::take(&mut self.input);
        self.execute(&line, now)
    }

    /// Run one command line. Returns `true` if the history changed.
    pub fn execute(&mut self, line: &str, now: DateTime<Utc>) -> bool {
        match interpret(line, now) {
            Reply::Nothing => false,
            Reply::Clear => {
                self.history.clear();
                true
            }
            Reply::Output(output) => {
                self.history.push(HistoryEntry::input(line.trim()));
                if let Some(text) = output {
                    self.history.push(HistoryEntry::output(text));
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0)
            .single()
            .expect("valid date")
    }

    fn run(line: &str) -> Vec<HistoryEntry> {
        let mut term = MockTerminal::new();
        term.execute(line, fixed_now());
        term.history()[BANNER.len()..].to_vec()
    }

    #[test]
    fn test_banner() {
        let term = MockTerminal::new();
        assert_eq!(term.history().len(), 2);
        assert!(term
            .history()
            .iter()
            .all(|entry| entry.kind == EntryKind::Output));
    }

    #[test]
    fn test_help() {
        let entries = run("help");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], HistoryEntry::input("help"));
        assert_eq!(entries[1].kind, EntryKind::Output);
        assert!(entries[1].text.contains("commands"));
    }

    #[test]
    fn test_empty_input_appends_nothing() {
        assert!(run("").is_empty());
        assert!(run("   ").is_empty());
    }

    #[test]
    fn test_clear_empties_history() {
        let mut term = MockTerminal::new();
        term.execute("ls", fixed_now());
        assert!(term.execute("clear", fixed_now()));
        assert!(term.history().is_empty());
    }

    #[test]
    fn test_echo() {
        let entries = run("echo hello world");
        assert_eq!(entries[1], HistoryEntry::output("hello world"));
    }

    #[test]
    fn test_bare_echo_is_not_a_command() {
        let entries = run("echo");
        assert_eq!(entries[1].text, "Command not found: echo");
    }

    #[test]
    fn test_unknown_command() {
        let entries = run("unknown-cmd");
        assert_eq!(entries[0], HistoryEntry::input("unknown-cmd"));
        assert_eq!(entries[1], HistoryEntry::output("Command not found: unknown-cmd"));
    }

    #[test]
    fn test_fixed_outputs() {
        assert_eq!(run("ls")[1].text, LS_OUTPUT);
        assert_eq!(run("pwd")[1].text, PWD_OUTPUT);
    }

    #[test]
    fn test_input_is_trimmed() {
        let entries = run("  pwd  ");
        assert_eq!(entries[0].text, "pwd");
        assert_eq!(entries[1].text, PWD_OUTPUT);
    }

    #[test]
    fn test_date_uses_injected_clock() {
        let entries = run("date");
        assert_eq!(entries[1].text, "Wed, 15 Jan 2025 09:30:00 +0000");
    }

    #[test]
    fn test_submit_takes_input_buffer() {
        let mut term = MockTerminal::new();
        for c in "pwdx".chars() {
            term.push_char(c);
        }
        term.pop_char();
        assert!(term.submit(fixed_now()));
        assert_eq!(term.input(), "");
        assert_eq!(term.history().last().map(|e| e.text.as_str()), Some(PWD_OUTPUT));
    }
}
