use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{JokeCatalog, JokeRecord};

/// 编译时打包的默认数据集
const BUNDLED_JOKES: &str = include_str!("../data/jokes.json");

/// 解析 JSON 数据集
pub fn parse_jokes(content: &str) -> Result<Vec<JokeRecord>> {
    let catalog: JokeCatalog = serde_json::from_str(content)?;
    Ok(catalog.puns)
}

/// 加载数据集：指定路径时从文件读取，否则使用内置数据
pub fn load_jokes(path: Option<&Path>) -> Result<Vec<JokeRecord>> {
    let jokes = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| AppError::DatasetRead {
                path: path.to_path_buf(),
                source,
            })?;
            let jokes = parse_jokes(&content)?;
            info!(path = %path.display(), count = jokes.len(), "dataset loaded from file");
            jokes
        }
        None => {
            let jokes = parse_jokes(BUNDLED_JOKES)?;
            info!(count = jokes.len(), "bundled dataset loaded");
            jokes
        }
    };
    Ok(jokes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_is_well_formed() {
        let jokes = load_jokes(None).unwrap();
        assert!(!jokes.is_empty());
        assert!(jokes.iter().any(|j| j.featured));
        assert!(jokes.iter().any(|j| !j.featured));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jokes.json");
        fs::write(
            &path,
            r#"{"puns":[{"english":"Why?","punchline":"なぜ","explanation":"because","featured":true,"date":"2025-01-02"}]}"#,
        )
        .unwrap();

        let jokes = load_jokes(Some(path.as_path())).unwrap();
        assert_eq!(jokes.len(), 1);
        assert_eq!(jokes[0].punchline, "なぜ");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load_jokes(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, AppError::DatasetRead { .. }));
    }

    #[test]
    fn test_bad_date_is_error() {
        let err = parse_jokes(
            r#"{"puns":[{"english":"a","punchline":"b","explanation":"c","date":"yesterday"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Dataset(_)));
    }

    #[test]
    fn test_missing_field_is_error() {
        let err = parse_jokes(r#"{"puns":[{"english":"a","date":"2025-01-01"}]}"#).unwrap_err();
        assert!(matches!(err, AppError::Dataset(_)));
    }
}
