use crate::ide::animation::{TagRain, EXPLORER_WAVES, GROUND_LEVEL};
use crate::ide::assistant::Speaker;
use crate::ide::content::{self, Page, Severity};
use crate::ide::highlight;
use crate::ide::terminal::{EntryKind, PROMPT};
use crate::ide::{BottomTab, IdeController, TransitionKind};
use crate::ui::app::{App, FocusPane, Route};
use crate::ui::config::TransitionStyle;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

const EXPLORER_WIDTH: u16 = 28;
const ASSISTANT_WIDTH: u16 = 36;
const BOTTOM_PANEL_HEIGHT: u16 = 10;
const CURSOR: &str = "█";
/// Stage height shown above the landing ground line; higher tags drop in
/// from off screen.
const STAGE_CEILING: f32 = 10.0;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let theme = &app.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Main layout: Nav + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_nav(frame, app, main_chunks[0]);

    match (app.route.page(), app.ide()) {
        (Some(page), _) => render_page(frame, app, page, main_chunks[1], now),
        (None, Some(ide)) => render_ide(frame, app, ide, main_chunks[1], now),
        (None, None) => {}
    }

    render_footer(frame, app, main_chunks[2]);
}

fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        " HENU PS ",
        Style::default()
            .fg(theme.brand)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, route) in Route::ALL.iter().enumerate() {
        let style = if *route == app.route {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} {} ", i + 1, route.label()), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
        area,
    );
}

fn render_page(frame: &mut Frame, app: &App, page: &Page, area: Rect, now: Instant) {
    let theme = &app.theme;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            page.title,
            Style::default()
                .fg(theme.brand)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(page.tagline, Style::default().fg(theme.fg_dim))),
        Line::from(""),
    ];

    for section in page.sections {
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(meta) = section.meta {
            lines.push(Line::from(Span::styled(
                meta,
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(section.body));
        lines.push(Line::from(""));
    }

    let text_height = lines.len() as u16 + 2;
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0));

    let text_area = match app.landing() {
        Some(rain) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(text_height)])
                .split(area);
            render_tag_rain(frame, theme, rain, chunks[0], now);
            chunks[1]
        }
        None => area,
    };

    frame.render_widget(paragraph, text_area);
}

/// Paint the falling extension tags over a ground line on the last row.
fn render_tag_rain(frame: &mut Frame, theme: &Theme, rain: &TagRain, area: Rect, now: Instant) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let buffer = frame.buffer_mut();
    let ground = area.bottom() - 1;
    let rows_per_unit = f32::from(area.height - 1) / (STAGE_CEILING - GROUND_LEVEL);

    for x in area.left()..area.right() {
        if let Some(cell) = buffer.cell_mut((x, ground)) {
            cell.set_symbol("─").set_style(Style::default().fg(theme.fg_dim));
        }
    }

    let elapsed = rain.elapsed(now);
    for tag in rain.tags() {
        let mut lift = ((tag.height(elapsed) - GROUND_LEVEL) * rows_per_unit).round() as u16;
        if tag.stays {
            lift = lift.max(1);
        }
        if tag.depth < 0.0 {
            lift += 1;
        }
        let Some(y) = ground.checked_sub(lift).filter(|y| *y >= area.y) else {
            continue;
        };

        let (open, close) = match ((tag.spin(elapsed) / FRAC_PI_2) as u32) % 4 {
            0 => ('[', ']'),
            1 => ('(', ')'),
            2 => ('{', '}'),
            _ => ('<', '>'),
        };
        let label = format!("{}{}{}", open, tag.extension, close);
        let free = area.width.saturating_sub(label.len() as u16);
        let x = area.x + (tag.column * f32::from(free)).round() as u16;

        let style = if tag.is_settled(elapsed) && !tag.stays {
            Style::default().fg(theme.fg_dim)
        } else {
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
        };
        buffer.set_string(x, y, &label, style);
        for offset in [0, label.len() as u16 - 1] {
            if let Some(cell) = buffer.cell_mut((x + offset, y)) {
                cell.set_fg(theme.brand);
            }
        }
    }
}

fn render_ide(frame: &mut Frame, app: &App, ide: &IdeController, area: Rect, now: Instant) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_top_bar(frame, app, ide, rows[0]);

    let panels = ide.panels();
    let mut columns = vec![Constraint::Length(EXPLORER_WIDTH), Constraint::Min(20)];
    if panels.assistant_visible {
        columns.push(Constraint::Length(ASSISTANT_WIDTH));
    }
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(rows[1]);

    render_explorer(frame, app, ide, body[0], now);

    if panels.terminal_visible {
        let center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(BOTTOM_PANEL_HEIGHT),
            ])
            .split(body[1]);
        render_editor(frame, app, ide, center[0]);
        render_bottom_panel(frame, app, ide, center[1], now);
    } else {
        render_editor(frame, app, ide, body[1]);
    }

    if panels.assistant_visible {
        render_assistant(frame, app, ide, body[2]);
    }

    if let Some((kind, progress)) = ide.transition_progress(now) {
        match app.style {
            TransitionStyle::Logo => render_logo_overlay(frame, &app.theme, rows[1], kind, progress),
            TransitionStyle::Ripple => render_ripple_overlay(frame, &app.theme, rows[1], progress),
        }
    }
}

fn render_top_bar(frame: &mut Frame, app: &App, ide: &IdeController, area: Rect) {
    let theme = &app.theme;
    let glow = ide.logo_glow();
    let logo_color = blend(theme.fg_dim, theme.brand, 0.4 + 0.6 * glow);
    // Thinking spreads the glow into a halo behind the logo
    let halo = if ide.assistant().is_typing() {
        blend(theme.surface, theme.brand, 0.35 * glow)
    } else {
        theme.surface
    };

    let mut spans = vec![
        Span::styled(
            " HENU PS ",
            Style::default()
                .fg(logo_color)
                .bg(halo)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    for item in ["File", "Edit", "View", "Run"] {
        spans.push(Span::styled(
            format!(" {} ", item),
            Style::default().fg(theme.fg_dim),
        ));
    }
    if ide.is_transitioning() {
        spans.push(Span::styled(
            "  working...",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
        area,
    );
}

fn pane_block<'a>(app: &App, title: Line<'a>, pane: FocusPane, color: Color) -> Block<'a> {
    let border_color = if app.focus == pane {
        color
    } else {
        app.theme.fg_dim
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(app.theme.surface))
}

fn render_explorer(frame: &mut Frame, app: &App, ide: &IdeController, area: Rect, now: Instant) {
    let theme = &app.theme;
    let block = pane_block(app, Line::from(" Explorer "), FocusPane::Explorer, theme.accent);

    if !ide.panels().folder_opened {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Bands run behind the prompt text
        if ide.ambient_active(now) {
            if let Some(mounted_at) = ide.mounted_at() {
                render_waves(frame, theme, inner, now.saturating_duration_since(mounted_at));
            }
        }

        let prompt = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No folder opened",
                Style::default().fg(theme.fg_dim),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ Open Folder ]",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enter / o",
                Style::default().fg(theme.fg_dim),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(prompt, inner);
        return;
    }

    let selected_name = ide.panels().selected_file.as_ref().map(|f| f.name.as_str());
    let items: Vec<ListItem> = app
        .tree_items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let indent = "  ".repeat(item.depth);
            let label = if item.is_folder() {
                let icon = if app.is_folder_expanded(&item.path) {
                    "▼"
                } else {
                    "▶"
                };
                format!("{}{} {}", indent, icon, item.node.name())
            } else {
                format!("{}  {}", indent, item.node.name())
            };

            let style = if i == app.explorer_index && app.focus == FocusPane::Explorer {
                Style::default()
                    .fg(theme.fg)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else if Some(item.node.name()) == selected_name && !item.is_folder() {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(label).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Paint the travelling bands over the empty explorer.
fn render_waves(frame: &mut Frame, theme: &Theme, area: Rect, elapsed: std::time::Duration) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buffer = frame.buffer_mut();
    let last_row = f32::from(area.height - 1);

    for lane in EXPLORER_WAVES.iter() {
        let Some(position) = lane.position(elapsed) else {
            continue;
        };
        let x = area.x + (lane.column * f32::from(area.width - 1)).round() as u16;
        let head = (position * last_row).round() as u16;

        for (offset, color) in [(0u16, theme.accent), (1, theme.fg_dim)] {
            for y in [head.checked_sub(offset), head.checked_add(offset)]
                .into_iter()
                .flatten()
                .filter(|y| *y < area.height)
            {
                if let Some(cell) = buffer.cell_mut((x, area.y + y)) {
                    cell.set_symbol("┃").set_style(Style::default().fg(color));
                }
            }
        }
    }
}

fn render_editor(frame: &mut Frame, app: &App, ide: &IdeController, area: Rect) {
    let theme = &app.theme;
    let selected = ide.panels().selected_file.as_ref();
    let (language, code) = content::preview_for(selected);
    let tab = selected.map_or("welcome.js", |f| f.name.as_str());
    let title = format!(" {} · {} ", tab, language);

    let spans = app.highlighter.highlight(code, language);
    let width = code.lines().count().max(1).to_string().len();
    let lines: Vec<Line> = highlight::split_lines(&spans)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let mut out = vec![Span::styled(
                format!("{:>width$} ", i + 1, width = width),
                Style::default().fg(theme.fg_dim),
            )];
            out.extend(line.into_iter().map(|span| {
                Span::styled(span.text, Style::default().fg(theme.token_color(span.kind)))
            }));
            Line::from(out)
        })
        .collect();

    let title = Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    ));
    let block = pane_block(app, title, FocusPane::Editor, theme.highlight);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app.editor_scroll, 0)),
        area,
    );
}

fn render_bottom_panel(frame: &mut Frame, app: &App, ide: &IdeController, area: Rect, now: Instant) {
    let theme = &app.theme;
    let active = ide.panels().active_bottom_tab;

    let border_color = match ide.ripple_progress(now) {
        Some(progress) => blend(theme.highlight, theme.success, progress),
        None if app.focus == FocusPane::BottomPanel => theme.success,
        None => theme.fg_dim,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Panel  [Esc] close ")
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selected = BottomTab::ALL.iter().position(|t| *t == active).unwrap_or(0);
    let tabs = Tabs::new(BottomTab::ALL.iter().map(|t| t.title()))
        .select(selected)
        .style(Style::default().fg(theme.fg_dim))
        .highlight_style(
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, rows[0]);

    let lines: Vec<Line> = match active {
        BottomTab::Terminal => terminal_lines(app, ide),
        BottomTab::Console => content::CONSOLE_LINES
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(theme.fg))))
            .collect(),
        BottomTab::Problems => content::PROBLEMS
            .iter()
            .map(|p| {
                let (icon, color) = match p.severity {
                    Severity::Warning => ("⚠", theme.secondary),
                    Severity::Error => ("✖", theme.error),
                };
                Line::from(vec![
                    Span::styled(format!("{} ", icon), Style::default().fg(color)),
                    Span::styled(p.location, Style::default().fg(theme.fg_dim)),
                    Span::raw("  "),
                    Span::raw(p.message),
                ])
            })
            .collect(),
    };

    // Keep the newest lines in view
    let overflow = lines.len().saturating_sub(usize::from(rows[1].height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), rows[1]);
}

fn terminal_lines<'a>(app: &App, ide: &'a IdeController) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let prompt_style = Style::default()
        .fg(theme.success)
        .add_modifier(Modifier::BOLD);
    let terminal = ide.terminal();

    let mut lines: Vec<Line> = terminal
        .history()
        .iter()
        .map(|entry| match entry.kind {
            EntryKind::Input => Line::from(vec![
                Span::styled(format!("{} ", PROMPT), prompt_style),
                Span::raw(entry.text.as_str()),
            ]),
            EntryKind::Output => Line::from(Span::styled(
                entry.text.as_str(),
                Style::default().fg(theme.fg),
            )),
        })
        .collect();

    let mut input = vec![
        Span::styled(format!("{} ", PROMPT), prompt_style),
        Span::raw(terminal.input()),
    ];
    if app.focus == FocusPane::BottomPanel {
        input.push(Span::styled(CURSOR, Style::default().fg(theme.fg)));
    }
    lines.push(Line::from(input));
    lines
}

fn render_assistant(frame: &mut Frame, app: &App, ide: &IdeController, area: Rect) {
    let theme = &app.theme;
    let block = pane_block(app, Line::from(" AI Assistant "), FocusPane::Assistant, theme.secondary);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let assistant = ide.assistant();
    let mut lines = Vec::new();
    for message in assistant.messages() {
        let (who, color) = match message.speaker {
            Speaker::User => ("You", theme.accent),
            Speaker::Assistant => ("AI", theme.secondary),
        };
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(message.text.as_str()));
        lines.push(Line::from(""));
    }
    if assistant.is_typing() {
        lines.push(Line::from(Span::styled(
            "Thinking...",
            Style::default()
                .fg(theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        rows[0],
    );

    let mut input = vec![
        Span::styled("> ", Style::default().fg(theme.secondary)),
        Span::raw(assistant.input()),
    ];
    if app.focus == FocusPane::Assistant {
        input.push(Span::styled(CURSOR, Style::default().fg(theme.fg)));
    } else if assistant.input().is_empty() {
        input.push(Span::styled(
            "Ask anything...",
            Style::default().fg(theme.fg_dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(input)), rows[1]);
}

/// The logo grows in the middle of the screen as the transition plays.
fn render_logo_overlay(frame: &mut Frame, theme: &Theme, area: Rect, kind: TransitionKind, progress: f32) {
    let scale = 0.4 + 0.6 * progress;
    let width = ((36.0 * scale) as u16).max(14).min(area.width);
    let height = 5u16.min(area.height);
    let overlay = centered(area, width, height);

    let caption = match kind {
        TransitionKind::OpenTerminal => "Opening terminal...",
        TransitionKind::OpenFolder => "Opening folder...",
    };
    let glow = blend(theme.fg_dim, theme.brand, progress);
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "HENU PS",
            Style::default().fg(glow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(theme.fg_dim))),
        Line::from(Span::styled(
            "━".repeat(usize::from(width.saturating_sub(4)) * (progress * 100.0) as usize / 100),
            Style::default().fg(theme.highlight),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(glow))
            .style(Style::default().bg(theme.bg)),
    );

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}

/// Concentric rings spreading from the centre.
fn render_ripple_overlay(frame: &mut Frame, theme: &Theme, area: Rect, progress: f32) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let cx = f32::from(area.x) + f32::from(area.width) / 2.0;
    let cy = f32::from(area.y) + f32::from(area.height) / 2.0;
    // Cells are about twice as tall as they are wide
    let max_radius = (f32::from(area.width) / 2.0).max(f32::from(area.height));
    let rings = [progress, progress - 0.25, progress - 0.5];

    let buffer = frame.buffer_mut();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let dx = (f32::from(x) - cx) / 2.0;
            let dy = f32::from(y) - cy;
            let distance = (dx * dx + dy * dy).sqrt() / max_radius;

            let on_ring = rings
                .iter()
                .filter(|r| **r > 0.0)
                .any(|r| (distance - r).abs() < 0.03);
            if on_ring {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol("·")
                        .set_style(Style::default().fg(theme.highlight));
                }
            }
        }
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.route, app.focus) {
        (Route::Landing, _) => "[1-5] Pages  [Enter] Launch IDE  [t] Theme  [Q] Quit",
        (route, _) if route != Route::Ide => "[1-5] Pages  [↑↓/jk] Scroll  [t] Theme  [Q] Quit",
        (_, FocusPane::Explorer) => {
            "[Ctrl+`] Terminal  [↑↓/jk] Navigate  [Enter] Open  [o] Folder  [a] Assistant  [Tab] Switch  [Q] Quit"
        }
        (_, FocusPane::Editor) => "[Ctrl+`] Terminal  [↑↓/jk] Scroll  [Tab] Switch  [Q] Quit",
        (_, FocusPane::BottomPanel) => {
            "[Enter] Run  [←→] Tabs  [Esc] Close terminal  [Tab] Switch  [Ctrl+C] Quit"
        }
        (_, FocusPane::Assistant) => "[Enter] Send  [Esc] Leave  [Tab] Switch  [Ctrl+C] Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Linear mix of two RGB colors; anything else snaps to the nearer end.
fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
