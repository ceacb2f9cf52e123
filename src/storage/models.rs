use serde::{Deserialize, Serialize};

/// A stored bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub tags: Option<String>,
    pub url: String,
    pub file_group: String,
}

/// The four user-supplied fields of a link, used by `create` and `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLink {
    pub description: String,
    #[serde(default)]
    pub tags: Option<String>,
    pub url: String,
    pub file_group: String,
}

impl NewLink {
    pub fn new(
        description: impl Into<String>,
        tags: Option<&str>,
        url: impl Into<String>,
        file_group: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            tags: tags.map(str::to_string),
            url: url.into(),
            file_group: file_group.into(),
        }
    }
}

impl From<Link> for NewLink {
    fn from(link: Link) -> Self {
        Self {
            description: link.description,
            tags: link.tags,
            url: link.url,
            file_group: link.file_group,
        }
    }
}

/// 单个分组及其链接数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub group: String,
    pub count: u64,
}

/// 链接统计信息
///
/// `most_populous` 为 `None` 表示当前没有任何链接。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub total_links: u64,
    pub total_groups: u64,
    pub most_populous: Option<GroupCount>,
}
