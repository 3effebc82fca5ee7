//! Layout components (header, content split, status bar)

use super::palette::Colors;
use crate::app::App;
use folio_ui::platform::{SAVE_SHORTCUT, SEARCH_SHORTCUT, THEME_SHORTCUT};
use folio_ui::state::{Surface, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the frame into header and main content, leaving the status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / navbar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Page content on the left, forms on the right
pub fn split_content(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the page title, nav links and theme toggle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let navbar = app.page.scroll().and_then(|s| s.navbar());
    let mut spans = vec![Span::styled(
        format!(" {} ", app.page.title()),
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )];

    // A hidden navbar collapses to the title only
    if !navbar.is_some_and(|n| n.hidden) {
        let links = app.page.scroll().map(|s| s.nav_links()).unwrap_or_default();
        for (idx, link) in links.iter().enumerate() {
            let style = if link.active {
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors.text)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("{}:{}", idx + 1, link.label), style));
        }
    }

    if let Some(icon) = app.page.theme().icon() {
        let glyph = match app.page.theme().current_theme() {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(glyph, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {}", icon.title),
            Style::default().fg(colors.border),
        ));
    }

    // The scrolled navbar gets a solid accent border
    let border = if navbar.is_some_and(|n| n.scrolled) {
        colors.accent
    } else {
        colors.border
    };
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.page.surface().label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    if app.page.admin().is_some_and(|a| a.has_unsaved_changes()) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("● unsaved", Style::default().fg(Color::Yellow)));
    }

    if let Some(location) = app.page.location() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(location, Style::default().fg(Color::Blue)));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " q/^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current surface and focus
fn hints(app: &App) -> String {
    if app.page.focus().is_some() {
        return match app.page.surface() {
            Surface::Admin => format!("Tab:next  Enter:submit  {SAVE_SHORTCUT}:save  Esc:leave"),
            Surface::Public => "Tab:next  Enter:send  Esc:leave".to_string(),
        };
    }
    match app.page.surface() {
        Surface::Public => {
            format!("j/k:scroll  1-9:jump  g:top  h:hover  f:filter  l:more  y:copy  Tab:form  {THEME_SHORTCUT}:theme")
        }
        Surface::Admin => format!(
            "{SEARCH_SHORTCUT}:search  s:sort  e/E:export  x:feature  m:modal  d:leave  Tab:form  {THEME_SHORTCUT}:theme"
        ),
    }
}
