// ============================================================================
// Kratos - 入口定位器
// ============================================================================
//
// 文件: src/core/locator.rs
// 职责: 在项目目录树中查找可运行入口（cmd/* 目录）
// 边界:
//   - ✅ 目录树遍历
//   - ✅ 软链接单层解析
//   - ✅ 模块根标记检测
//   - ✅ 逐级向上查找
//   - ❌ 不应包含用户交互逻辑
//   - ❌ 不应包含进程启动逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// 算法设计:
// 1. 以当前查找根遍历整棵目录树
// 2. 名为 cmd 的目录：收集其直接子目录作为候选，不再深入
// 3. 软链接：读取一次目标并遍历目标树，规则同上，不跟随目标树中的软链接
// 4. 遇到模块根标记文件（go.mod）则记录当前根为模块边界
// 5. 遇到入口目录立即返回（可能为空）；否则在未到达模块边界时上移一级重试
// 6. 重试次数用尽仍无候选时，回退为 {"": 起始目录}
//
// ============================================================================

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::RunError;
use crate::models::config::RunConfig;
use crate::models::CandidateMap;

/// 单次遍历的结果
#[derive(Debug, Default)]
struct Scan {
    candidates: CandidateMap,
    /// 是否遇到过入口目录（即便其下没有子目录）
    entry_dir_found: bool,
    module_root: bool,
}

/// 入口定位器
#[derive(Debug, Clone)]
pub struct EntryLocator {
    /// 入口目录名
    entry_dir: String,
    /// 模块根标记文件名
    marker: String,
    /// 最大查找次数（含首次）
    max_attempts: usize,
    /// 跳过的路径模式
    ignore: Vec<glob::Pattern>,
}

impl EntryLocator {
    /// 创建新的定位器
    pub fn new(entry_dir: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            entry_dir: entry_dir.into(),
            marker: marker.into(),
            max_attempts: 5,
            ignore: Vec::new(),
        }
    }

    /// 从 run 配置创建定位器
    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.entry_dir.clone(), config.marker.clone())
            .with_max_attempts(config.max_attempts)
            .with_ignore(&config.ignore)
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// 设置忽略模式，无效模式会被跳过
    pub fn with_ignore<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.ignore = patterns
            .iter()
            .filter_map(|pattern| {
                let pattern: &str = pattern.as_ref();
                match glob::Pattern::new(pattern) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        warn!(pattern, error = %e, "ignoring invalid pattern");
                        None
                    }
                }
            })
            .collect();
        self
    }

    /// 查找候选入口
    ///
    /// 找到入口目录时返回其子目录映射（入口目录为空时映射为空）；
    /// 完全没有入口目录时返回 `{"": start}`。
    pub fn locate(&self, start: &Path) -> Result<CandidateMap, RunError> {
        let mut root = start.to_path_buf();

        for attempt in 1..=self.max_attempts {
            debug!(root = %root.display(), attempt, "scanning for entry directories");
            let scan = self.scan(&root)?;

            if !scan.candidates.is_empty() {
                debug!(count = scan.candidates.len(), "found entry candidates");
                return Ok(scan.candidates);
            }
            if scan.entry_dir_found {
                debug!(root = %root.display(), "entry directory has no subdirectories");
                return Ok(scan.candidates);
            }
            if scan.module_root {
                debug!(root = %root.display(), marker = %self.marker, "reached module root");
                break;
            }

            match next_root(&root) {
                Some(parent) => root = parent.to_path_buf(),
                None => break,
            }
        }

        debug!(start = %start.display(), "no entry directory found, falling back");
        Ok(CandidateMap::fallback(start))
    }

    /// 遍历一次查找根
    fn scan(&self, root: &Path) -> Result<Scan, RunError> {
        let mut scan = Scan::default();
        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| RunError::from_walk(root, e))?;

            if entry.depth() > 0 && entry.path_is_symlink() {
                self.scan_link(root, entry.path(), &mut scan)?;
                continue;
            }

            if self.is_entry_dir(&entry) {
                self.collect(root, entry.path(), entry.path(), &mut scan)?;
                walker.skip_current_dir();
                continue;
            }

            if self.is_marker(&entry) {
                scan.module_root = true;
            }
        }

        Ok(scan)
    }

    /// 解析软链接并遍历其目标
    ///
    /// 候选键使用经过链接的逻辑路径，值使用解析后的真实路径。
    fn scan_link(&self, root: &Path, link: &Path, scan: &mut Scan) -> Result<(), RunError> {
        let target = fs::read_link(link).map_err(|e| RunError::discovery(link, e))?;
        let target = match link.parent() {
            Some(parent) if target.is_relative() => parent.join(target),
            _ => target,
        };
        trace!(link = %link.display(), target = %target.display(), "following symlink");

        let mut walker = WalkDir::new(&target)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_ignored(e));

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| RunError::from_walk(&target, e))?;

            // 只解析一层链接
            if entry.depth() > 0 && entry.path_is_symlink() {
                continue;
            }

            if self.is_entry_dir(&entry) {
                let logical = match entry.path().strip_prefix(&target) {
                    Ok(rel) if !rel.as_os_str().is_empty() => link.join(rel),
                    _ => link.to_path_buf(),
                };
                self.collect(root, &logical, entry.path(), scan)?;
                walker.skip_current_dir();
                continue;
            }

            if self.is_marker(&entry) {
                scan.module_root = true;
            }
        }

        Ok(())
    }

    /// 收集入口目录下的直接子目录
    fn collect(
        &self,
        root: &Path,
        logical_dir: &Path,
        real_dir: &Path,
        scan: &mut Scan,
    ) -> Result<(), RunError> {
        scan.entry_dir_found = true;
        let entries = fs::read_dir(real_dir).map_err(|e| RunError::discovery(real_dir, e))?;

        for child in entries {
            let child = child.map_err(|e| RunError::discovery(real_dir, e))?;
            let file_type = child
                .file_type()
                .map_err(|e| RunError::discovery(child.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }

            let name = child.file_name();
            let key = relative_key(root, &logical_dir.join(&name));
            let path = real_dir.join(&name);
            trace!(key = %key, path = %path.display(), "entry candidate");
            scan.candidates.insert(key, path);
        }

        Ok(())
    }

    fn is_entry_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir() && entry.file_name() == OsStr::new(&self.entry_dir)
    }

    fn is_marker(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file() && entry.file_name() == OsStr::new(&self.marker)
    }

    /// 根目录本身永不忽略
    fn is_ignored(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.ignore.iter().any(|pattern| pattern.matches(&name))
    }
}

/// 相对于查找根的键
/// 上一级查找根；不向上扫描文件系统根目录
fn next_root(root: &Path) -> Option<&Path> {
    root.parent().filter(|parent| parent.parent().is_some())
}

fn relative_key(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => path.to_string_lossy().to_string(),
    }
}

impl Default for EntryLocator {
    fn default() -> Self {
        Self::from_config(&RunConfig::default())
    }
}
