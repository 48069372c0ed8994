//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use super::state::{App, AppMode};
use crate::models::{JokeRecord, ViewMode};
use components::{render_dialog_framework, render_search_widget};
use layouts::centered_rect;

pub const SEARCH_PLACEHOLDER: &str = "Search jokes in English or Japanese...";
pub const EMPTY_MESSAGE: &str = "No jokes found matching your search 😢";
pub const FEATURED_MARK: &str = "★";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 标题
            Constraint::Length(3), // 搜索框
            Constraint::Length(3), // 视图标签 / 返回
            Constraint::Min(6),    // 列表
            Constraint::Length(6), // 详情
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_search_widget(
        frame,
        chunks[1],
        app.browser.search_text(),
        SEARCH_PLACEHOLDER,
        app.mode == AppMode::Searching,
    );
    render_controls(frame, app, chunks[2]);
    render_jokes(frame, app, chunks[3]);
    render_details(frame, app, chunks[4]);
    render_help(frame, app, chunks[5]);

    if app.mode == AppMode::About {
        render_about_dialog(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "JLPT Jokes",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Learn Japanese Through Laughter!"),
    ];
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// 搜索时显示返回按钮，否则显示三个视图标签
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    if app.browser.is_searching() {
        let back = Paragraph::new(Span::styled(
            "← Back to All Jokes [b]",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(back, area);
        return;
    }

    let titles: Vec<Line> = ViewMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("[{}] {}", i + 1, mode.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.browser.view_mode().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

/// 单条笑话的列表项
pub fn joke_item(joke: &JokeRecord, show_mark: bool) -> ListItem<'_> {
    let mut lines = Vec::with_capacity(4);
    if show_mark && joke.featured {
        lines.push(Line::from(Span::styled(
            FEATURED_MARK,
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        joke.english.as_str(),
        Style::default().fg(Color::Red),
    )));
    lines.push(Line::from(Span::styled(
        joke.punchline.as_str(),
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        joke.explanation.as_str(),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    ListItem::new(Text::from(lines))
}

fn render_jokes(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "Jokes ({}/{})",
        app.display_list.len(),
        app.browser.jokes().len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.display_list.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let show_mark = app.show_featured_mark();
    let items: Vec<ListItem> = app
        .visible_jokes()
        .map(|joke| joke_item(joke, show_mark))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_joke() {
        Some(joke) => format!(
            "{}\n{}\nAdded: {} ({} days ago)",
            joke.punchline,
            joke.explanation,
            joke.date.format("%Y-%m-%d"),
            joke.days_old(app.clock.today()),
        ),
        None => String::new(),
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("Details").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Browsing if app.browser.is_searching() => {
            "[/] edit search  [b/Esc] back to all  [j/k] navigate  [?] about  [q] quit"
        }
        AppMode::Browsing => {
            "[/] search  [1/2/3] view  [Tab] next view  [j/k] navigate  [?] about  [q] quit"
        }
        AppMode::Searching => "type to filter  [Enter] done  [Esc] clear  [↑/↓] navigate",
        AppMode::About => "[?/Esc] close",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_about_dialog(frame: &mut Frame) {
    let area = centered_rect(70, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "About JLPT Jokes");

    let text = vec![
        Line::from(
            "JLPT Jokes was created to make learning Japanese more enjoyable through \
             wordplay and humor. Our collection of bilingual jokes helps students \
             understand language nuances while having fun.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Contact & Social",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("jlptjokes@gmail.com"),
        Line::from("Instagram: https://instagram.com/jlptjokesoffical"),
        Line::from("TikTok: https://tiktok.com/@jlptjokes"),
        Line::from(""),
        Line::from(Span::styled(
            "© 2024 - 2025 JlptJokes. All rights reserved.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let about = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(about, inner);
}
