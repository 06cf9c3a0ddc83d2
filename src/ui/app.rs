use crate::ide::animation::TagRain;
use crate::ide::content::{self, Page, TreeNode};
use crate::ide::highlight::Highlighter;
use crate::ide::{IdeController, Timings};
use crate::ui::config::{Config, TransitionStyle};
use crate::ui::theme::Theme;
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Poll interval while something on screen is moving (~60fps).
pub const ANIMATION_POLL: Duration = Duration::from_millis(16);
/// Poll interval when the screen is static.
pub const IDLE_POLL: Duration = Duration::from_millis(100);

/// Pages of the site. Pure view selection: no parameters, no query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Workflow,
    Blog,
    Resources,
    Ide,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Landing,
        Route::Workflow,
        Route::Blog,
        Route::Resources,
        Route::Ide,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Workflow => "/workflow",
            Route::Blog => "/blog",
            Route::Resources => "/resources",
            Route::Ide => "/ide",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Landing => "HENU PS",
            Route::Workflow => "WORKFLOW SCENARIO",
            Route::Blog => "BLOG",
            Route::Resources => "RESOURCES",
            Route::Ide => "IDE",
        }
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match Route::ALL.iter().find(|r| r.path() == normalized) {
            Some(route) => Ok(*route),
            None => bail!(
                "Unknown route: {} (expected one of: {})",
                trimmed,
                Route::ALL.map(Route::path).join(", ")
            ),
        }
    }

    /// Static copy shown on the route, `None` for the IDE.
    pub fn page(self) -> Option<&'static Page> {
        match self {
            Route::Landing => Some(&content::LANDING),
            Route::Workflow => Some(&content::WORKFLOW),
            Route::Blog => Some(&content::BLOG),
            Route::Resources => Some(&content::RESOURCES),
            Route::Ide => None,
        }
    }

    /// Route bound to a digit key (`1`..`5`).
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Route::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Explorer,
    Editor,
    BottomPanel,
    Assistant,
}

/// One visible row of the explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerItem {
    pub depth: usize,
    /// Slash-joined path from the project root, used as the expansion key.
    pub path: String,
    pub node: TreeNode,
}

impl ExplorerItem {
    pub fn is_folder(&self) -> bool {
        matches!(self.node, TreeNode::Folder { .. })
    }
}

pub struct App {
    pub route: Route,
    pub ide: Option<IdeController>,
    /// The landing page's reveal, rebuilt each time `/` is entered.
    landing: Option<TagRain>,
    pub theme: Theme,
    pub style: TransitionStyle,
    pub timings: Timings,
    pub highlighter: Highlighter,
    pub focus: FocusPane,
    pub explorer_index: usize,
    pub expanded_folders: Vec<String>,
    pub editor_scroll: u16,
    pub page_scroll: u16,
    pub should_quit: bool,
    /// Where theme changes are persisted; `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    config: Config,
}

impl App {
    pub fn new(config: Config, route: Route, highlighter: Highlighter, now: Instant) -> Self {
        let theme = Theme::by_name(&config.theme)
            .unwrap_or_else(Theme::default_theme)
            .clone();
        let mut app = Self {
            route: Route::Landing,
            ide: None,
            landing: None,
            theme,
            style: config.animation.style,
            timings: config.animation.timings(),
            highlighter,
            focus: FocusPane::Explorer,
            explorer_index: 0,
            expanded_folders: vec![content::PROJECT_NAME.to_string()],
            editor_scroll: 0,
            page_scroll: 0,
            should_quit: false,
            config_path: None,
            config,
        };
        app.navigate(route, now);
        app
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ide(&self) -> Option<&IdeController> {
        self.ide.as_ref()
    }

    pub fn landing(&self) -> Option<&TagRain> {
        self.landing.as_ref()
    }

    /// Switch pages. Leaving `/ide` unmounts and drops its controller;
    /// entering it mounts a fresh one. Entering `/` replays the tag rain.
    pub fn navigate(&mut self, route: Route, now: Instant) {
        let live = match route {
            Route::Ide => self.ide.is_some(),
            Route::Landing => self.landing.is_some(),
            _ => true,
        };
        if route == self.route && live {
            return;
        }

        if let Some(mut ide) = self.ide.take() {
            ide.unmount();
        }
        if route == Route::Ide {
            let mut ide = IdeController::new(self.timings);
            ide.mount(now);
            self.ide = Some(ide);
        }
        self.landing =
            (route == Route::Landing).then(|| TagRain::new(now, &mut rand::thread_rng()));

        tracing::info!(from = self.route.path(), to = route.path(), "navigate");
        self.route = route;
        self.focus = FocusPane::Explorer;
        self.explorer_index = 0;
        self.expanded_folders = vec![content::PROJECT_NAME.to_string()];
        self.editor_scroll = 0;
        self.page_scroll = 0;
    }

    /// Advance the IDE's timers and keep focus on a visible pane.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(ide) = self.ide.as_mut() else {
            return false;
        };
        let was_visible = ide.panels().terminal_visible;
        let changed = ide.tick(now);
        let visible = ide.panels().terminal_visible;

        if visible && !was_visible {
            self.focus = FocusPane::BottomPanel;
        }
        self.sync_focus();
        changed
    }

    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let raining = self.landing().is_some_and(|rain| !rain.is_settled(now));
        if raining || self.ide().is_some_and(|ide| ide.is_animating(now)) {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        }
    }

    /// Move focus off a pane that is no longer shown.
    pub fn sync_focus(&mut self) {
        let Some(ide) = self.ide() else {
            self.focus = FocusPane::Explorer;
            return;
        };
        let panels = ide.panels();
        let hidden = match self.focus {
            FocusPane::BottomPanel => !panels.terminal_visible,
            FocusPane::Assistant => !panels.assistant_visible,
            _ => false,
        };
        if hidden {
            self.focus = FocusPane::Explorer;
        }
    }

    /// Cycle Explorer -> Editor -> Bottom panel -> Assistant, skipping hidden panes.
    pub fn toggle_focus(&mut self) {
        let Some(ide) = self.ide() else {
            return;
        };
        let panels = ide.panels();
        let mut next = self.focus;
        for _ in 0..4 {
            next = match next {
                FocusPane::Explorer => FocusPane::Editor,
                FocusPane::Editor => FocusPane::BottomPanel,
                FocusPane::BottomPanel => FocusPane::Assistant,
                FocusPane::Assistant => FocusPane::Explorer,
            };
            let shown = match next {
                FocusPane::BottomPanel => panels.terminal_visible,
                FocusPane::Assistant => panels.assistant_visible,
                _ => true,
            };
            if shown {
                break;
            }
        }
        self.focus = next;
    }

    /// Whether typed characters go into a text field instead of key bindings.
    pub fn is_text_entry(&self) -> bool {
        let Some(ide) = self.ide() else {
            return false;
        };
        match self.focus {
            FocusPane::BottomPanel => {
                ide.panels().active_bottom_tab == crate::ide::BottomTab::Terminal
            }
            FocusPane::Assistant => true,
            _ => false,
        }
    }

    // -- Explorer -----------------------------------------------------------

    pub fn is_folder_expanded(&self, path: &str) -> bool {
        self.expanded_folders.iter().any(|p| p == path)
    }

    pub fn toggle_folder(&mut self, path: &str) {
        if let Some(pos) = self.expanded_folders.iter().position(|p| p == path) {
            self.expanded_folders.remove(pos);
        } else {
            self.expanded_folders.push(path.to_string());
        }
    }

    /// Flattened, visible rows of the mock tree.
    pub fn tree_items(&self) -> Vec<ExplorerItem> {
        let mut items = Vec::new();
        self.collect_items(&content::project_tree(), 0, "", &mut items);
        items
    }

    fn collect_items(&self, node: &TreeNode, depth: usize, parent: &str, items: &mut Vec<ExplorerItem>) {
        let path = if parent.is_empty() {
            node.name().to_string()
        } else {
            format!("{}/{}", parent, node.name())
        };
        items.push(ExplorerItem {
            depth,
            path: path.clone(),
            node: node.clone(),
        });

        if let TreeNode::Folder { children, .. } = node {
            if self.is_folder_expanded(&path) {
                for child in children {
                    self.collect_items(child, depth + 1, &path, items);
                }
            }
        }
    }

    pub fn selected_item(&self) -> Option<ExplorerItem> {
        self.tree_items().get(self.explorer_index).cloned()
    }

    pub fn next(&mut self) {
        let item_count = self.tree_items().len();

        if item_count > 0 {
            self.explorer_index = (self.explorer_index + 1) % item_count;
        }
    }

    pub fn previous(&mut self) {
        let item_count = self.tree_items().len();

        if item_count > 0 {
            if self.explorer_index > 0 {
                self.explorer_index -= 1;
            } else {
                self.explorer_index = item_count - 1;
            }
        }
    }

    /// Enter on the explorer: open the folder if none is open yet, otherwise
    /// expand/collapse a folder row or preview a file row.
    pub fn activate_selected(&mut self, now: Instant) {
        let folder_opened = self.ide().is_some_and(|ide| ide.panels().folder_opened);
        if !folder_opened {
            if let Some(ide) = self.ide.as_mut() {
                ide.open_folder_with_animation(now);
            }
            return;
        }

        let Some(item) = self.selected_item() else {
            return;
        };
        match item.node.file_ref() {
            Some(file) => {
                if let Some(ide) = self.ide.as_mut() {
                    if ide.select_file(file) {
                        self.editor_scroll = 0;
                    }
                }
            }
            None => self.toggle_folder(&item.path),
        }
    }

    /// Left on the explorer: collapse the folder, or jump to the parent folder.
    pub fn collapse_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        if item.is_folder() && self.is_folder_expanded(&item.path) {
            self.toggle_folder(&item.path);
            return;
        }
        if let Some((parent, _)) = item.path.rsplit_once('/') {
            if let Some(index) = self.tree_items().iter().position(|i| i.path == parent) {
                self.explorer_index = index;
            }
        }
    }

    // -- Scrolling --------------------------------------------------------------

    pub fn scroll_editor_down(&mut self) {
        self.editor_scroll = self.editor_scroll.saturating_add(1);
    }

    pub fn scroll_editor_up(&mut self) {
        self.editor_scroll = self.editor_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.page_scroll = self.page_scroll.saturating_add(1);
    }

    pub fn scroll_page_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(1);
    }

    // -- Theme ------------------------------------------------------------------

    /// Switch to the next built-in theme and persist the choice.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        self.config.theme = self.theme.name.to_string();
        tracing::info!(theme = self.theme.name, "theme changed");

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!("Failed to save theme: {:#}", e);
            }
        }
    }
}
