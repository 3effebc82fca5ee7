//! Main content: scroll-driven sections on the public site, data panels on
//! the admin panel

use super::palette::Colors;
use crate::app::App;
use folio_ui::features::{featured_icon, AdminTools, CardState, SiteFeatures};
use folio_ui::page::Focus;
use folio_ui::state::{RevealTarget, ScrollAnimationController, Surface};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, LineGauge, List, ListItem, Paragraph, Row, Table},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    match app.page.surface() {
        Surface::Public => draw_public(frame, area, app, colors),
        Surface::Admin => draw_admin(frame, area, app, colors),
    }
}

fn panel<'a>(title: &'a str, colors: &Colors) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
}

fn draw_public(frame: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hero
            Constraint::Length(1), // Scroll progress
            Constraint::Min(0),    // Sections and projects
        ])
        .split(area);

    if let Some(scroll) = app.page.scroll() {
        draw_hero(frame, chunks[0], scroll, colors);
        draw_progress(frame, chunks[1], scroll, colors);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    if let Some(scroll) = app.page.scroll() {
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(scroll.skill_bars().len() as u16 + 2),
            ])
            .split(body[0]);
        draw_sections(frame, left[0], scroll, colors);
        draw_skills(frame, left[1], scroll, colors);
    }
    if let Some(site) = app.page.site() {
        draw_projects(frame, body[1], site, colors);
    }
}

fn draw_hero(frame: &mut Frame, area: Rect, scroll: &ScrollAnimationController, colors: &Colors) {
    let Some(typewriter) = scroll.typewriter() else {
        return;
    };
    let mut spans = vec![Span::styled(
        typewriter.text(),
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled("|", Style::default().fg(colors.accent)));
    if typewriter.is_paused() {
        spans.push(Span::styled("  (paused)", Style::default().fg(colors.border)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel("Hero", colors)), area);
}

fn draw_progress(frame: &mut Frame, area: Rect, scroll: &ScrollAnimationController, colors: &Colors) {
    let progress = scroll.progress().clamp(0.0, 100.0);
    let label = if scroll.back_to_top_visible() {
        format!("{progress:>3.0}%  ↑ top")
    } else {
        format!("{progress:>3.0}%")
    };
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(colors.accent))
        .unfilled_style(Style::default().fg(colors.border))
        .ratio(progress / 100.0)
        .label(label);
    frame.render_widget(gauge, area);
}

fn reveal_line<'a>(target: &'a RevealTarget, colors: &Colors) -> Line<'a> {
    let (mark, style) = if target.revealed {
        ("✓", Style::default().fg(Color::Green))
    } else {
        ("·", Style::default().fg(colors.border))
    };
    let mut spans = vec![
        Span::raw("    "),
        Span::styled(mark, style),
        Span::raw(format!(" {}", target.id)),
    ];
    if target.revealed {
        let classes: Vec<&str> = target.classes.iter().map(String::as_str).collect();
        spans.push(Span::styled(
            format!("  [{}]", classes.join(" ")),
            Style::default().fg(colors.border),
        ));
    }
    if target.stagger {
        let staggered = target.children.iter().filter(|c| c.delay.is_some()).count();
        spans.push(Span::styled(
            format!("  {staggered}/{} staggered", target.children.len()),
            Style::default().fg(colors.border),
        ));
    }
    Line::from(spans)
}

fn draw_sections(frame: &mut Frame, area: Rect, scroll: &ScrollAnimationController, colors: &Colors) {
    let view_top = scroll.scroll_y();
    let view_bottom = view_top + scroll.viewport_height();
    let active_href = scroll.active_link().map(|l| l.href.as_str());

    let mut items = Vec::new();
    for section in scroll.sections() {
        let on_screen = section.top < view_bottom && section.top + section.height > view_top;
        let is_active = active_href == Some(format!("#{}", section.id).as_str());
        let marker = if is_active { "▸" } else { " " };
        let style = match (is_active, on_screen) {
            (true, _) => Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(colors.text),
            (false, false) => Style::default().fg(colors.border),
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{marker} {} ({:.0}px)", section.title, section.top),
            style,
        ))));
        for target in scroll
            .targets()
            .iter()
            .filter(|t| section.contains(t.top))
        {
            items.push(ListItem::new(reveal_line(target, colors)));
        }
    }

    let title = format!("Sections @ {:.0}px", view_top);
    frame.render_widget(List::new(items).block(panel(&title, colors)), area);
}

fn draw_skills(frame: &mut Frame, area: Rect, scroll: &ScrollAnimationController, colors: &Colors) {
    let block = panel("Skills", colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (idx, bar) in scroll.skill_bars().iter().enumerate() {
        let row = Rect {
            y: inner.y + idx as u16,
            height: 1,
            ..inner
        };
        if row.y >= inner.y + inner.height {
            break;
        }
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(colors.accent))
            .unfilled_style(Style::default().fg(colors.border))
            .ratio(f64::from(bar.width.min(100)) / 100.0)
            .label(format!("{:<12}{:>3}%", bar.name, bar.width));
        frame.render_widget(gauge, row);
    }
}

fn draw_projects(frame: &mut Frame, area: Rect, site: &SiteFeatures, colors: &Colors) {
    let active_filter = site.active_filter();
    let mut tabs = Vec::new();
    for filter in site.filters() {
        let style = if Some(filter.as_str()) == active_filter {
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.border)
        };
        tabs.push(Span::styled(format!("[{filter}] "), style));
    }

    let mut lines = vec![Line::from(tabs), Line::from("")];
    for card in site.cards().iter().filter(|c| c.state.is_displayed()) {
        let style = match card.state {
            CardState::Shown => Style::default().fg(colors.text),
            _ => Style::default().fg(colors.border).add_modifier(Modifier::DIM),
        };
        let star = if card.project.featured { "★ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(star, Style::default().fg(Color::Yellow)),
            Span::styled(card.project.title.as_str(), style.add_modifier(Modifier::BOLD)),
        ]));
        if let Some(stack) = &card.project.tech_stack {
            lines.push(Line::from(Span::styled(format!("    {stack}"), style)));
        }
    }

    if site.is_loading() {
        lines.push(Line::from(Span::styled("  Loading…", Style::default().fg(colors.accent))));
    } else if site.has_load_more() {
        lines.push(Line::from(Span::styled("  [l] Load more", Style::default().fg(colors.border))));
    }
    for button in site.copy_buttons() {
        lines.push(Line::from(Span::styled(
            format!("  [y] Copy {}", button.text),
            Style::default().fg(colors.border),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(panel("Projects", colors)), area);
}

fn draw_admin(frame: &mut Frame, area: Rect, app: &App, colors: &Colors) {
    let Some(admin) = app.page.admin() else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search
            Constraint::Percentage(45), // Table
            Constraint::Min(0),         // Projects and messages
        ])
        .split(area);

    let search_focused = matches!(app.page.focus(), Some(Focus::Search(_)));
    draw_search(frame, chunks[0], admin, search_focused, colors);
    draw_table(frame, chunks[1], admin, colors);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_featured(frame, bottom[0], admin, colors);
    draw_messages(frame, bottom[1], admin, colors);
}

fn draw_search(frame: &mut Frame, area: Rect, admin: &AdminTools, focused: bool, colors: &Colors) {
    let Some(search) = admin.searches().first() else {
        return;
    };
    let border = if focused { colors.accent } else { colors.border };
    let cursor = if focused { "▌" } else { "" };
    let visible: Vec<&str> = search
        .items
        .iter()
        .filter(|i| i.visible)
        .map(|i| i.text.as_str())
        .collect();
    let line = Line::from(vec![
        Span::styled(format!("{}{cursor}", search.term), Style::default().fg(colors.text)),
        Span::styled(
            format!("   {}/{}: {}", search.visible_count(), search.items.len(), visible.join(", ")),
            Style::default().fg(colors.border),
        ),
    ]);
    let block = Block::default()
        .title(format!(" Search {} ", search.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_table(frame: &mut Frame, area: Rect, admin: &AdminTools, colors: &Colors) {
    let Some(table) = admin.tables().first() else {
        return;
    };
    let header = Row::new(table.columns.iter().enumerate().map(|(idx, column)| {
        let marker = match table.marker(idx) {
            Some("asc") => " ▲",
            Some(_) => " ▼",
            None if column.sort.is_some() => " ⇅",
            None => "",
        };
        Cell::from(format!("{}{marker}", column.label))
    }))
    .style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD));

    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));
    let widths = vec![Constraint::Fill(1); table.columns.len()];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(panel(&table.id, colors));
    frame.render_widget(widget, area);
}

fn draw_featured(frame: &mut Frame, area: Rect, admin: &AdminTools, colors: &Colors) {
    let items: Vec<ListItem> = admin
        .projects()
        .iter()
        .map(|project| {
            let icon = featured_icon(project.featured);
            let (star, style) = if icon.starts_with("fas") {
                ("★", Style::default().fg(Color::Yellow))
            } else {
                ("☆", Style::default().fg(colors.border))
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{star} "), style),
                Span::raw(format!("#{} {}", project.id, project.title)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(panel("Projects", colors)), area);
}

fn draw_messages(frame: &mut Frame, area: Rect, admin: &AdminTools, colors: &Colors) {
    let items: Vec<ListItem> = admin
        .messages()
        .iter()
        .map(|message| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    message.subject.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {} <{}>  {}", message.name, message.email, message.date),
                    Style::default().fg(colors.border),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(panel("Messages", colors)), area);
}
