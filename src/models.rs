use chrono::NaiveDate;
use serde::Deserialize;

/// 视图模式（无搜索时生效）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Featured, // 精选
    Newest, // 最近 N 天
    All,    // 全部
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Featured, ViewMode::Newest, ViewMode::All];

    /// 标签页上显示的文字
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Featured => "⭐ Featured",
            ViewMode::Newest => "🆕 Newest",
            ViewMode::All => "📚 All",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewMode::Featured => 0,
            ViewMode::Newest => 1,
            ViewMode::All => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 一条双语笑话
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JokeRecord {
    pub english: String,
    pub punchline: String,
    pub explanation: String,
    #[serde(default)]
    pub featured: bool,
    pub date: NaiveDate,
}

impl JokeRecord {
    /// 三个可搜索字段中任意一个包含 `needle`（调用方需先转为小写）
    pub fn matches(&self, needle: &str) -> bool {
        [&self.english, &self.punchline, &self.explanation]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// 距 `today` 的天数
    pub fn days_old(&self, today: NaiveDate) -> i64 {
        (today - self.date).num_days().max(0)
    }
}

/// JSON 数据文件结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeCatalog {
    pub puns: Vec<JokeRecord>,
}

/// 当前搜索状态
///
/// `Active` 中保存匹配记录在集合中的下标（保持原始顺序）。
/// 空的 `Active` 表示"有搜索但无结果"，与 `Inactive` 不同。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Inactive,
    Active(Vec<usize>),
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Active(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(english: &str, punchline: &str, explanation: &str) -> JokeRecord {
        JokeRecord {
            english: english.to_string(),
            punchline: punchline.to_string(),
            explanation: explanation.to_string(),
            featured: false,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_matches_each_field() {
        let joke = record("The Frog", "カエルが帰る", "Kaeru means frog");
        assert!(joke.matches("frog"));
        assert!(joke.matches("帰る"));
        assert!(joke.matches("kaeru means"));
        assert!(!joke.matches("dolphin"));
    }

    #[test]
    fn test_matches_ignores_date_and_flag() {
        let joke = record("a", "b", "c");
        assert!(!joke.matches("2025"));
        assert!(!joke.matches("true"));
    }

    #[test]
    fn test_view_mode_cycle() {
        assert_eq!(ViewMode::Featured.next(), ViewMode::Newest);
        assert_eq!(ViewMode::All.next(), ViewMode::Featured);
        assert_eq!(ViewMode::Featured.previous(), ViewMode::All);
        assert_eq!(ViewMode::default(), ViewMode::Featured);
    }

    #[test]
    fn test_catalog_deserialize() {
        let json = r#"{"puns":[
            {"english":"e","punchline":"p","explanation":"x","featured":true,"date":"2024-12-01"},
            {"english":"e2","punchline":"p2","explanation":"x2","date":"2025-02-10"}
        ]}"#;
        let catalog: JokeCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.puns.len(), 2);
        assert!(catalog.puns[0].featured);
        assert!(!catalog.puns[1].featured);
        assert_eq!(
            catalog.puns[1].date,
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
        );
    }

    #[test]
    fn test_days_old() {
        let joke = record("a", "b", "c");
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(joke.days_old(today), 30);
        let earlier = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(joke.days_old(earlier), 0);
    }
}
