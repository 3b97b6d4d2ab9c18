// ============================================================================
// Kratos - 候选入口数据模型
// ============================================================================
//
// 文件: src/models/candidate.rs
// 职责: 入口发现结果的数据结构定义
// 边界:
//   - ✅ 候选入口映射（相对路径 -> 绝对路径）
//   - ✅ 回退映射构造
//   - ❌ 不应包含目录遍历逻辑
//   - ❌ 不应包含用户交互逻辑
//
// ============================================================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 候选入口映射
///
/// 键为相对于查找根目录的路径，值为绝对路径。每次调用重新构建。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMap {
    entries: BTreeMap<String, PathBuf>,
}

impl CandidateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未找到任何入口时的回退映射: `{"": start}`
    pub fn fallback(start: &Path) -> Self {
        let mut map = Self::new();
        map.insert(String::new(), start.to_path_buf());
        map
    }

    pub fn insert(&mut self, key: String, path: PathBuf) {
        self.entries.insert(key, path);
    }

    pub fn get(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 相对路径列表（用于交互选择）
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// 唯一的候选项
    pub fn sole(&self) -> Option<&Path> {
        if self.entries.len() == 1 {
            self.entries.values().next().map(PathBuf::as_path)
        } else {
            None
        }
    }
}

impl FromIterator<(String, PathBuf)> for CandidateMap {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
