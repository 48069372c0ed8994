//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::ViewMode;

/// 根据当前模式、搜索状态和按键获取对应的 Action
///
/// 搜索进行中时视图标签不可见，对应按键也不绑定。
pub fn get_action(mode: AppMode, searching: bool, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Browsing => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('?') => Some(Action::ToggleAbout),
            KeyCode::Char('b') | KeyCode::Esc if searching => Some(Action::ClearSearch),
            _ if searching => None,
            KeyCode::Char('1') => Some(Action::SelectView(ViewMode::Featured)),
            KeyCode::Char('2') => Some(Action::SelectView(ViewMode::Newest)),
            KeyCode::Char('3') => Some(Action::SelectView(ViewMode::All)),
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextView),
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PreviousView),
            _ => None,
        },
        AppMode::Searching => match key {
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::About => match key {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::ToggleAbout),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.mode, app.browser.is_searching(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
