//! Form rendering: one bordered input per field with inline errors

use super::palette::Colors;
use crate::app::App;
use folio_ui::page::Focus;
use folio_ui::state::{FormField, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw every form on the page, stacked
pub fn draw(frame: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let Some(forms) = app.page.forms() else {
        return;
    };
    let focused = match app.page.focus() {
        Some(Focus::Field(at)) => Some(at),
        _ => None,
    };

    let heights: Vec<Constraint> = forms
        .forms()
        .iter()
        .map(|f| Constraint::Length(form_height(f)))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(heights)
        .split(area);

    for (form_index, form) in forms.forms().iter().enumerate() {
        let active = focused.filter(|at| at.form == form_index).map(|at| at.field);
        draw_form(frame, chunks[form_index], form, active, colors);
    }
}

fn field_height(field: &FormField) -> u16 {
    // Borders plus one value line (three for textareas) plus the error line
    let body = if field.is_multiline() { 3 } else { 1 };
    2 + body + u16::from(field.error().is_some())
}

fn form_height(form: &FormState) -> u16 {
    form.fields.iter().map(field_height).sum::<u16>() + 2
}

fn draw_form(frame: &mut Frame, area: Rect, form: &FormState, active: Option<usize>, colors: &Colors) {
    let title = if form.unsaved {
        format!(" {} ● ", form.id)
    } else {
        format!(" {} ", form.id)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, active == Some(idx), colors);
    }
}

/// Draw a single input with its counter in the title and error below
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, colors: &Colors) {
    let has_error = field.error().is_some();
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(colors.accent)
    } else {
        Style::default().fg(colors.border)
    };
    let value_style = if is_active {
        Style::default().fg(colors.accent)
    } else {
        Style::default().fg(colors.text)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(colors.accent));

    let mut lines: Vec<Line> = if field.is_multiline() {
        display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(display_str, value_style))]
    };
    match lines.last_mut() {
        Some(last) => last.spans.push(cursor),
        None => lines.push(Line::from(cursor)),
    }

    let required = if field.required { "*" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", field.label, required))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(counter) = field.counter_text() {
        let counter_style = if field.is_over_limit() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(colors.border)
        };
        block = block.title_top(Line::from(Span::styled(format!(" {counter} "), counter_style)).right_aligned());
    }

    let error_height = u16::from(has_error);
    let input_area = Rect {
        height: area.height.saturating_sub(error_height),
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        input_area,
    );

    if let Some(error) = field.error() {
        let error_area = Rect {
            y: input_area.y + input_area.height,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            )),
            error_area,
        );
    }
}
