//! Centered overlay dialog

use super::palette::Colors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Falls back to the theme text colour
    pub title_color: Option<Color>,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "",
            title_color: None,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// Render a dialog centered over the whole frame, painted in theme colours
pub fn render_dialog(frame: &mut Frame, colors: &Colors, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16;
    let wrapped_lines = wrap_text(config.message, config.max_width.saturating_sub(padding) as usize);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + padding + 2).min(config.max_width).min(area.width);
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + wrapped_lines.len() as u16 + hint_lines + 2)
        .max(5)
        .min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color.unwrap_or(colors.text))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let style = Style::default().bg(colors.background).fg(colors.text);
    let dialog = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent))
            .style(style),
    );
    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap; blank input lines are kept
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
