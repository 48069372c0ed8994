//! 笑话浏览核心逻辑
//!
//! 持有只读的笑话集合与浏览状态（搜索文本、搜索结果、视图模式），
//! 并根据当前状态计算要显示的列表。

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::clock::Clock;
use crate::models::{JokeRecord, SearchState, ViewMode};

pub const DEFAULT_NEWEST_WINDOW_DAYS: u32 = 90;

#[derive(Debug, Clone)]
pub struct JokeBrowser {
    jokes: Vec<JokeRecord>, // 加载后不再修改
    search_text: String,
    search: SearchState,
    view_mode: ViewMode,
    newest_window: Duration,
}

impl JokeBrowser {
    pub fn new(jokes: Vec<JokeRecord>) -> Self {
        Self {
            jokes,
            search_text: String::new(),
            search: SearchState::Inactive,
            view_mode: ViewMode::Featured,
            newest_window: Duration::days(i64::from(DEFAULT_NEWEST_WINDOW_DAYS)),
        }
    }

    /// 设置"最新"视图的时间窗口（天）
    pub fn with_newest_window(mut self, days: u32) -> Self {
        self.newest_window = Duration::days(i64::from(days));
        self
    }

    /// 设置初始视图模式
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn jokes(&self) -> &[JokeRecord] {
        &self.jokes
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[allow(dead_code)]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_active()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn newest_window_days(&self) -> i64 {
        self.newest_window.num_days()
    }

    /// 更新搜索文本并重新计算搜索结果
    ///
    /// 原始输入原样保存；去除首尾空白后为空则结束搜索。
    pub fn update_search_text(&mut self, raw_input: impl Into<String>) {
        self.search_text = raw_input.into();
        let query = self.search_text.trim().to_lowercase();

        if query.is_empty() {
            self.search = SearchState::Inactive;
            return;
        }

        let results: Vec<usize> = self
            .jokes
            .iter()
            .enumerate()
            .filter(|(_, joke)| joke.matches(&query))
            .map(|(i, _)| i)
            .collect();
        debug!(query = %query, matches = results.len(), "search updated");
        self.search = SearchState::Active(results);
    }

    /// 清除搜索（"返回全部"按钮）
    pub fn clear_search(&mut self) {
        self.search = SearchState::Inactive;
        self.search_text.clear();
        debug!("search cleared");
    }

    pub fn select_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            debug!(from = ?self.view_mode, to = ?mode, "view mode changed");
        }
        self.view_mode = mode;
    }

    /// 当前应显示记录的下标，始终保持集合原始顺序
    pub fn visible_indices(&self, clock: &dyn Clock) -> Vec<usize> {
        if let SearchState::Active(results) = &self.search {
            return results.clone();
        }

        let indices = 0..self.jokes.len();
        match self.view_mode {
            ViewMode::Featured => indices.filter(|&i| self.jokes[i].featured).collect(),
            ViewMode::Newest => {
                // 窗口超出日期范围时显示全部
                let cutoff = clock
                    .today()
                    .checked_sub_signed(self.newest_window)
                    .unwrap_or(NaiveDate::MIN);
                indices.filter(|&i| self.jokes[i].date >= cutoff).collect()
            }
            ViewMode::All => indices.collect(),
        }
    }

    /// 当前应显示的记录
    pub fn visible_jokes(&self, clock: &dyn Clock) -> Vec<&JokeRecord> {
        self.visible_indices(clock)
            .into_iter()
            .map(|i| &self.jokes[i])
            .collect()
    }
}
