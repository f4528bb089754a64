//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NovelError;

/// 小说唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NovelId(String);

impl NovelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NovelId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for NovelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NovelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NovelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 章节唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(String);

impl ChapterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChapterId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ChapterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ChapterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 标题（小说与章节共用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, NovelError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(NovelError::InvalidTitle("标题不能为空".to_string()));
        }
        if title.chars().count() > 200 {
            return Err(NovelError::InvalidTitle("标题长度不能超过200字符".to_string()));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = NovelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 连载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NovelStatus {
    /// 连载中
    Ongoing,
    /// 已完结
    Completed,
    /// 暂停更新
    Hiatus,
}

impl NovelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "ONGOING",
            NovelStatus::Completed => "COMPLETED",
            NovelStatus::Hiatus => "HIATUS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_rejects_blank() {
        assert!(Title::new("").is_err());
        assert!(Title::new("   ").is_err());
        assert_eq!(Title::new("第一章").unwrap().as_str(), "第一章");
    }

    #[test]
    fn test_title_length_counts_chars() {
        // 200 个汉字按字符计数，不按字节
        let long = "字".repeat(200);
        assert!(Title::new(long).is_ok());
        assert!(Title::new("字".repeat(201)).is_err());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(NovelId::new(), NovelId::new());
        assert_ne!(ChapterId::new(), ChapterId::new());
    }

    #[test]
    fn test_status_wire_names() {
        for status in [NovelStatus::Ongoing, NovelStatus::Completed, NovelStatus::Hiatus] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
        assert!(serde_json::from_str::<NovelStatus>("\"ongoing\"").is_err());
    }
}
