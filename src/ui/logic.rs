//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种处理方法

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::ViewMode;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::FocusSearch => self.focus_search(),
            Action::ClearSearch => self.clear_search(),
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Submit => self.mode = AppMode::Browsing,

            Action::SelectView(mode) => self.select_view(mode),
            Action::NextView => self.select_view(self.browser.view_mode().next()),
            Action::PreviousView => self.select_view(self.browser.view_mode().previous()),

            Action::ToggleAbout => self.toggle_about(),
        }
        self.refresh_display_list();
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.display_list.len() {
            self.selected_index += 1;
        }
    }

    // ============ 搜索相关 ============

    pub fn focus_search(&mut self) {
        self.mode = AppMode::Searching;
        self.message = None;
    }

    /// 输入字符，整段文本重新搜索
    pub fn input_char(&mut self, c: char) {
        let mut text = self.browser.search_text().to_string();
        text.push(c);
        self.update_search(text);
    }

    /// 删除最后一个字符
    pub fn delete_char(&mut self) {
        let mut text = self.browser.search_text().to_string();
        if text.pop().is_some() {
            self.update_search(text);
        }
    }

    fn update_search(&mut self, text: String) {
        self.browser.update_search_text(text);
        self.selected_index = 0;
    }

    /// "Back to All Jokes"
    pub fn clear_search(&mut self) {
        self.browser.clear_search();
        self.mode = AppMode::Browsing;
        self.selected_index = 0;
        self.message = None;
    }

    // ============ 视图相关 ============

    pub fn select_view(&mut self, mode: ViewMode) {
        self.browser.select_view_mode(mode);
        self.selected_index = 0;
        self.message = match mode {
            ViewMode::Newest => Some(format!(
                "jokes from the last {} days",
                self.browser.newest_window_days()
            )),
            _ => None,
        };
    }

    pub fn toggle_about(&mut self) {
        self.mode = match self.mode {
            AppMode::About => AppMode::Browsing,
            _ => AppMode::About,
        };
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::browser::JokeBrowser;
    use crate::clock::FixedClock;
    use crate::models::{JokeRecord, SearchState};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn app() -> App {
        let joke = |english: &str, featured: bool, days_ago: i64| JokeRecord {
            english: english.to_string(),
            punchline: String::new(),
            explanation: String::new(),
            featured,
            date: today() - Duration::days(days_ago),
        };
        let browser = JokeBrowser::new(vec![
            joke("cat", true, 0),
            joke("dog", false, 200),
            joke("cow", true, 10),
        ]);
        App::new(browser, Box::new(FixedClock(today())))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_initial_featured_list() {
        let app = app();
        assert_eq!(app.display_list, vec![0, 2]);
        assert_eq!(app.mode, AppMode::Browsing);
    }

    #[test]
    fn test_typing_searches_each_keystroke() {
        let mut app = app();
        app.dispatch(Action::FocusSearch);
        app.dispatch(Action::Input('c'));
        assert_eq!(app.display_list, vec![0, 2]);
        app.dispatch(Action::Input('o'));
        assert_eq!(app.display_list, vec![2]);
        assert_eq!(app.browser.search_text(), "co");
        assert!(!app.show_featured_mark());
    }

    #[test]
    fn test_backspace_to_empty_ends_search() {
        let mut app = app();
        app.dispatch(Action::FocusSearch);
        type_text(&mut app, "do");
        assert_eq!(app.display_list, vec![1]);

        app.dispatch(Action::DeleteChar);
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.browser.search(), &SearchState::Inactive);
        assert_eq!(app.display_list, vec![0, 2]);
        assert_eq!(app.mode, AppMode::Searching);

        // 空文本时再删除不变
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.browser.search_text(), "");
    }

    #[test]
    fn test_clear_search_returns_to_view() {
        let mut app = app();
        app.dispatch(Action::FocusSearch);
        type_text(&mut app, "zzz");
        assert!(app.display_list.is_empty());

        app.dispatch(Action::ClearSearch);
        assert_eq!(app.browser.search_text(), "");
        assert_eq!(app.browser.search(), &SearchState::Inactive);
        assert_eq!(app.mode, AppMode::Browsing);
        assert_eq!(app.display_list, vec![0, 2]);
    }

    #[test]
    fn test_submit_keeps_results() {
        let mut app = app();
        app.dispatch(Action::FocusSearch);
        type_text(&mut app, "dog");
        app.dispatch(Action::Submit);
        assert_eq!(app.mode, AppMode::Browsing);
        assert_eq!(app.display_list, vec![1]);
    }

    #[test]
    fn test_view_switching() {
        let mut app = app();
        app.dispatch(Action::SelectView(ViewMode::Newest));
        assert_eq!(app.display_list, vec![0, 2]);
        assert_eq!(app.message.as_deref(), Some("jokes from the last 90 days"));
        app.dispatch(Action::NextView);
        assert!(app.message.is_none());
        assert_eq!(app.browser.view_mode(), ViewMode::All);
        assert_eq!(app.display_list, vec![0, 1, 2]);
        app.dispatch(Action::NextView);
        assert_eq!(app.browser.view_mode(), ViewMode::Featured);
        app.dispatch(Action::PreviousView);
        assert_eq!(app.browser.view_mode(), ViewMode::All);
    }

    #[test]
    fn test_selection_clamped() {
        let mut app = app();
        app.dispatch(Action::SelectView(ViewMode::All));
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::MoveSelectionDown);
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.selected_joke().map(|j| j.english.as_str()), Some("cow"));

        app.dispatch(Action::MoveSelectionUp);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_about_toggle_and_quit() {
        let mut app = app();
        assert!(!app.dispatch(Action::ToggleAbout));
        assert_eq!(app.mode, AppMode::About);
        app.dispatch(Action::ToggleAbout);
        assert_eq!(app.mode, AppMode::Browsing);
        assert!(app.dispatch(Action::Quit));
    }
}
