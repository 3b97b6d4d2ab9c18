// ============================================================================
// Kratos - 候选入口选择
// ============================================================================
//
// 文件: src/core/resolver.rs
// 职责: 从候选入口中确定唯一的运行目录
// 边界:
//   - ✅ 零/单/多候选处理
//   - ✅ 交互式单选（可注入）
//   - ❌ 不应包含目录遍历逻辑
//   - ❌ 不应包含进程启动逻辑
//
// ============================================================================

use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use tracing::debug;

use crate::core::error::RunError;
use crate::models::CandidateMap;
use crate::t;

/// 交互提示每页显示的选项数
const PAGE_SIZE: usize = 10;

/// 单选能力：从若干带标签的选项中选出一个
///
/// 返回 `None` 表示用户取消。
pub trait Chooser {
    fn choose(&self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// 终端交互选择
#[derive(Debug, Default)]
pub struct TerminalChooser;

impl Chooser for TerminalChooser {
    fn choose(&self, prompt: &str, options: &[String]) -> Option<usize> {
        let result = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .max_length(PAGE_SIZE)
            .interact_opt();

        match result {
            Ok(selection) => selection,
            Err(e) => {
                debug!(error = %e, "selection prompt failed");
                None
            }
        }
    }
}

/// 选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 选定的运行目录
    Selected(PathBuf),
    /// 用户放弃选择，静默退出
    Aborted,
}

/// 从候选映射中确定运行目录
pub fn resolve(candidates: &CandidateMap, chooser: &dyn Chooser) -> Result<Resolution, RunError> {
    if candidates.is_empty() {
        return Err(RunError::NoTarget);
    }

    if let Some(dir) = candidates.sole() {
        debug!(dir = %dir.display(), "single candidate selected");
        return Ok(Resolution::Selected(dir.to_path_buf()));
    }

    let options = candidates.keys();
    let selected = chooser
        .choose(&t!("run.select_prompt"), &options)
        .and_then(|index| options.get(index))
        .filter(|key| !key.is_empty())
        .and_then(|key| candidates.get(key));

    match selected {
        Some(dir) => {
            debug!(dir = %dir.display(), "candidate chosen");
            Ok(Resolution::Selected(dir.to_path_buf()))
        }
        None => Ok(Resolution::Aborted),
    }
}
