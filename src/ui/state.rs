//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::browser::JokeBrowser;
use crate::clock::Clock;
use crate::models::JokeRecord;

/// 应用状态
pub struct App {
    pub browser: JokeBrowser,
    pub clock: Box<dyn Clock>,
    pub selected_index: usize,
    pub display_list: Vec<usize>, // 当前可见记录在集合中的下标
    pub mode: AppMode,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browsing,
    Searching, // 搜索框获得焦点
    About,
}

impl App {
    /// 创建新的应用实例
    pub fn new(browser: JokeBrowser, clock: Box<dyn Clock>) -> Self {
        let mut app = Self {
            browser,
            clock,
            selected_index: 0,
            display_list: Vec::new(),
            mode: AppMode::Browsing,
            message: None,
        };
        app.refresh_display_list();
        app
    }

    /// 刷新显示列表（每次状态变化后调用，不缓存）
    pub fn refresh_display_list(&mut self) {
        self.display_list = self.browser.visible_indices(self.clock.as_ref());

        // 确保选中索引有效
        if self.display_list.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.display_list.len() {
            self.selected_index = self.display_list.len() - 1;
        }
    }

    /// 当前显示的记录
    pub fn visible_jokes(&self) -> impl Iterator<Item = &JokeRecord> {
        self.display_list
            .iter()
            .map(|&i| &self.browser.jokes()[i])
    }

    /// 获取当前选中的记录
    pub fn selected_joke(&self) -> Option<&JokeRecord> {
        self.display_list
            .get(self.selected_index)
            .map(|&i| &self.browser.jokes()[i])
    }

    /// 是否显示精选标记（搜索时隐藏）
    pub fn show_featured_mark(&self) -> bool {
        !self.browser.is_searching()
    }
}
