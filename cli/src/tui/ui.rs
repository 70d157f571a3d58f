use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use moodlog_core::day_key;

use crate::tui::app::{App, HistoryLine, HistoryList, Mode, Tab, CAROUSEL_WINDOW};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let today = day_key(Local::now().date_naive());
    let header = Paragraph::new(format!("MOODLOG  |  today is: {}", today))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[0]);

    let tabs = Tabs::new(vec![Line::from("Moods"), Line::from("Diary")])
        .select(match app.tab {
            Tab::Moods => 0,
            Tab::Diary => 1,
        })
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(tabs, main_chunks[1]);

    match app.tab {
        Tab::Moods => draw_moods_tab(f, app, main_chunks[2]),
        Tab::Diary => draw_diary_tab(f, app, main_chunks[2]),
    }

    let footer = Paragraph::new(footer_text(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if app.mode == Mode::ConfirmDelete {
        draw_confirm_modal(f, size);
    }
    if let Some(notice) = app.notice.clone() {
        draw_notice(f, size, &notice);
    }
}

fn draw_moods_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    draw_carousel(f, app, chunks[0]);
    draw_history(f, &mut app.moods_list, " Mood history ", chunks[1]);
}

fn draw_carousel(f: &mut Frame, app: &App, area: Rect) {
    let end = (app.carousel_offset + CAROUSEL_WINDOW).min(app.palette.len());

    let mut spans = vec![Span::styled("◀  ", Style::default().fg(Color::DarkGray))];
    for (i, mood) in app.palette[app.carousel_offset..end].iter().enumerate() {
        let style = if app.carousel_offset + i == app.picked {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", mood.label), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));

    let strip = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Pick a mood ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(strip, area);
}

fn draw_diary_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let (text, style) = if app.mode == Mode::DiaryInput {
        (app.input.as_str(), Style::default())
    } else {
        (
            "Press 'a' to write a new entry",
            Style::default().fg(Color::DarkGray),
        )
    };
    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title(" New entry ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, chunks[0]);

    if app.mode == Mode::DiaryInput {
        let prefix: usize = app
            .input
            .chars()
            .take(app.cursor_position)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        f.set_cursor_position((chunks[0].x + 1 + prefix as u16, chunks[0].y + 1));
    }

    draw_history(f, &mut app.diary_list, " Diary history ", chunks[1]);
}

fn draw_history(f: &mut Frame, list: &mut HistoryList, title: &str, area: Rect) {
    // Border, highlight symbol and indent eat into the row width.
    let row_width = area.width.saturating_sub(7) as usize;

    let items: Vec<ListItem> = list
        .lines
        .iter()
        .map(|line| match line {
            HistoryLine::DayHeader(day) => ListItem::new(Line::from(Span::styled(
                day.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))),
            HistoryLine::Entry { text, .. } => {
                ListItem::new(Line::from(format!("  {}", truncate_to_width(text, row_width))))
            }
        })
        .collect();

    let widget = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(widget, area, &mut list.state);
}

fn draw_confirm_modal(f: &mut Frame, area: Rect) {
    let modal = centered_rect(50, 5, area);
    f.render_widget(Clear, modal);

    let body = Paragraph::new(vec![
        Line::from("Are you sure you want to delete this entry?"),
        Line::from(""),
        Line::from(Span::styled(
            "y: delete    n: keep",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(body, modal);
}

fn draw_notice(f: &mut Frame, area: Rect, notice: &str) {
    let modal = centered_rect((notice.width() as u16 + 6).max(30), 3, area);
    f.render_widget(Clear, modal);

    let body = Paragraph::new(notice)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(body, modal);
}

fn footer_text(app: &App) -> &'static str {
    match (app.mode, app.tab) {
        (Mode::DiaryInput, _) => "Enter: Save | Esc: Cancel",
        (Mode::ConfirmDelete, _) => "y: Delete | n: Keep",
        (Mode::Browse, Tab::Moods) => {
            "Tab: Switch | h/l: Pick mood | Enter: Record | j/k: Navigate | d: Delete | q: Quit"
        }
        (Mode::Browse, Tab::Diary) => {
            "Tab: Switch | a: Write | j/k: Navigate | d: Delete | q: Quit"
        }
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
