//! UI module for rendering the page preview

mod dialog;
mod forms;
mod layout;
mod page_view;
mod palette;
mod toasts;

use crate::app::App;
use dialog::{render_dialog, DialogConfig};
use palette::Colors;
use ratatui::{
    style::{Color, Style},
    text::Span,
    widgets::Block,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let colors = Colors::from(app.page.theme().palette());
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        frame.area(),
    );

    let (header_area, main_area) = layout::create_layout(frame.area());
    layout::draw_header(frame, header_area, app, &colors);

    match app.page.forms() {
        Some(forms) if !forms.forms().is_empty() => {
            let (content_area, form_area) = layout::split_content(main_area);
            page_view::draw(frame, content_area, app, &colors);
            forms::draw(frame, form_area, app, &colors);
        }
        _ => page_view::draw(frame, main_area, app, &colors),
    }

    toasts::draw(frame, main_area, app.page.notices());

    if let Some(modal) = app
        .page
        .admin()
        .and_then(|a| a.modals().iter().find(|m| !m.hidden))
    {
        render_dialog(
            frame,
            &colors,
            DialogConfig {
                title: &modal.id,
                message: "Modal open.",
                hint: Some(vec![
                    Span::styled("Esc", Style::default().fg(Color::Yellow)),
                    Span::raw(": close"),
                ]),
                ..Default::default()
            },
        );
    }

    if let Some(prompt) = app.confirm_prompt {
        render_dialog(
            frame,
            &colors,
            DialogConfig {
                title: "Unsaved changes",
                title_color: Some(Color::Yellow),
                message: prompt,
                hint: Some(vec![
                    Span::styled("y", Style::default().fg(Color::Yellow)),
                    Span::raw(": leave  "),
                    Span::styled("any key", Style::default().fg(Color::Yellow)),
                    Span::raw(": stay"),
                ]),
                max_width: 50,
            },
        );
    }

    layout::draw_status_bar(frame, app);
}
