//! # Panel State
//!
//! The single source of truth for what the IDE screen shows: whether a folder
//! is open, whether the bottom panel is up, which bottom tab is active and
//! which mock file the editor is previewing.

use std::fmt;

/// Languages the mock editor knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Css,
    Text,
    Markdown,
    Json,
}

impl Language {
    /// Guess a language from a file extension. Unknown extensions are plain text.
    pub fn from_extension(file_name: &str) -> Self {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "py" => Language::Python,
            "js" | "jsx" | "mjs" | "ts" | "tsx" => Language::JavaScript,
            "css" => Language::Css,
            "md" | "markdown" => Language::Markdown,
            "json" => Language::Json,
            _ => Language::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Css => "CSS",
            Language::Text => "Plain Text",
            Language::Markdown => "Markdown",
            Language::Json => "JSON",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file in the mock project tree. Selecting one only swaps the canned snippet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef {
    pub name: String,
    pub language: Language,
}

impl FileRef {
    pub fn new(name: impl Into<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            language,
        }
    }
}

/// Tabs of the bottom panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BottomTab {
    #[default]
    Terminal,
    Console,
    Problems,
}

impl BottomTab {
    pub const ALL: [BottomTab; 3] = [BottomTab::Terminal, BottomTab::Console, BottomTab::Problems];

    pub fn title(self) -> &'static str {
        match self {
            BottomTab::Terminal => "TERMINAL",
            BottomTab::Console => "CONSOLE",
            BottomTab::Problems => "PROBLEMS",
        }
    }

    pub fn next(self) -> Self {
        match self {
            BottomTab::Terminal => BottomTab::Console,
            BottomTab::Console => BottomTab::Problems,
            BottomTab::Problems => BottomTab::Terminal,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            BottomTab::Terminal => BottomTab::Problems,
            BottomTab::Console => BottomTab::Terminal,
            BottomTab::Problems => BottomTab::Console,
        }
    }
}

/// Visible panels and selections for one mounted IDE screen.
///
/// All mutators are synchronous and return `true` only when something changed,
/// which lets the controller bump its revision counter precisely.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub folder_opened: bool,
    pub terminal_visible: bool,
    pub assistant_visible: bool,
    pub active_bottom_tab: BottomTab,
    pub selected_file: Option<FileRef>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            folder_opened: false,
            terminal_visible: false,
            assistant_visible: true,
            active_bottom_tab: BottomTab::Terminal,
            selected_file: None,
        }
    }

    pub fn open_folder(&mut self) -> bool {
        let changed = !self.folder_opened;
        self.folder_opened = true;
        changed
    }

    /// Last write wins; the selection never clears on its own.
    pub fn select_file(&mut self, file: FileRef) -> bool {
        if self.selected_file.as_ref() == Some(&file) {
            return false;
        }
        self.selected_file = Some(file);
        true
    }

    pub fn set_bottom_tab(&mut self, tab: BottomTab) -> bool {
        let changed = self.active_bottom_tab != tab;
        self.active_bottom_tab = tab;
        changed
    }

    pub fn toggle_terminal(&mut self) -> bool {
        self.terminal_visible = !self.terminal_visible;
        true
    }

    pub fn show_terminal(&mut self) -> bool {
        let changed = !self.terminal_visible;
        self.terminal_visible = true;
        changed
    }

    pub fn hide_terminal(&mut self) -> bool {
        let changed = self.terminal_visible;
        self.terminal_visible = false;
        changed
    }

    pub fn toggle_assistant(&mut self) -> bool {
        self.assistant_visible = !self.assistant_visible;
        true
    }
}
