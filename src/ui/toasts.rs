//! Toast stack in the top-right corner of the content area

use super::palette::{severity_color, severity_glyph};
use folio_ui::state::{NoticePhase, NotificationCenter};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, area: Rect, notices: &NotificationCenter) {
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y;

    for notice in notices.notices().iter().filter(|n| n.is_on_screen()) {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };
        y += TOAST_HEIGHT;

        let accent = severity_color(notice.severity);
        let mut text_style = Style::default().fg(Color::White);
        if notice.phase == NoticePhase::Leaving {
            text_style = text_style.add_modifier(Modifier::DIM);
        }
        let line = Line::from(vec![
            Span::styled(format!("{} ", severity_glyph(notice.severity)), Style::default().fg(accent)),
            Span::styled(notice.message.as_str(), text_style),
        ]);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(line).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(format!(" {} ", notice.created_at.format("%H:%M:%S")))
                    .style(Style::default().bg(Color::Black)),
            ),
            toast_area,
        );
    }
}
