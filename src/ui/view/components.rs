//! 通用 UI 组件
//!
//! 对话框、搜索框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 单行搜索框，空且未聚焦时显示占位文字
pub fn render_search_widget(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let (text, style) = if value.is_empty() && !is_focused {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else if is_focused {
        (
            value,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (value, Style::default().fg(Color::White))
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title("🔍 Search")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if is_focused {
        frame.set_cursor_position((cursor_column(area, value), area.y + 1));
    }
}

/// 光标放在文本末尾（按显示宽度，兼容全角字符），不超出边框
pub fn cursor_column(area: Rect, value: &str) -> u16 {
    let max_x = area.x + area.width.saturating_sub(2);
    let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
    (area.x + 1).saturating_add(width).min(max_x)
}
