//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::ViewMode;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 搜索
    FocusSearch,
    ClearSearch, // "Back to All Jokes"
    Input(char),
    DeleteChar,
    Submit, // 离开搜索框，保留结果

    // 视图切换（仅无搜索时可用）
    SelectView(ViewMode),
    NextView,
    PreviousView,

    ToggleAbout,
}
