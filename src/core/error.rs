// ============================================================================
// Kratos - run 错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: run 命令各阶段的错误分类
// 边界:
//   - ✅ 错误种类定义
//   - ✅ 错误信息格式化（英文 Display 与按界面语言的本地化文本）
//   - ❌ 不应包含错误输出逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::i18n;

/// run 命令错误
///
/// 用户取消选择不属于错误，见 [`crate::core::resolver::Resolution::Aborted`]。
#[derive(Debug, Error)]
pub enum RunError {
    /// 无法确定当前目录
    #[error("failed to determine the current directory: {0}")]
    Environment(#[source] std::io::Error),

    /// 目录遍历失败
    #[error("failed to scan {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 没有可运行的目标
    #[error("The cmd directory cannot be found in the current directory")]
    NoTarget,

    /// 工具链无法启动
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// 工具链执行失败
    #[error("`{command}` exited with {}", exit_label(.code))]
    Launch { command: String, code: Option<i32> },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl RunError {
    /// 按当前界面语言生成面向用户的错误信息
    pub fn localized(&self) -> String {
        self.localized_in(&i18n::current_language())
    }

    /// 按指定语言生成错误信息
    pub fn localized_in(&self, language: &str) -> String {
        let message = |key: &str, args: Vec<String>| {
            i18n::format_with_args(i18n::translate(language, key), args)
        };
        match self {
            RunError::Environment(source) => message("error.environment", vec![source.to_string()]),
            RunError::Discovery { path, source } => message(
                "error.discovery",
                vec![path.display().to_string(), source.to_string()],
            ),
            RunError::NoTarget => message("error.no_target", vec![]),
            RunError::Spawn { program, source } => {
                message("error.spawn", vec![program.clone(), source.to_string()])
            }
            RunError::Launch {
                command,
                code: Some(code),
            } => message("error.launch_status", vec![command.clone(), code.to_string()]),
            RunError::Launch { command, code: None } => {
                message("error.launch_signal", vec![command.clone()])
            }
        }
    }

    pub(crate) fn discovery(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RunError::Discovery {
            path: path.into(),
            source,
        }
    }

    /// 由 walkdir 错误构造，保留出错路径
    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Self::discovery(path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_message_includes_status() {
        let err = RunError::Launch {
            command: "go run ./cmd/server".to_string(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "`go run ./cmd/server` exited with status 2");

        let err = RunError::Launch {
            command: "go run .".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "`go run .` exited with a signal");
    }

    #[test]
    fn test_english_localization_matches_display() {
        let errors = [
            RunError::NoTarget,
            RunError::Launch {
                command: "go run .".to_string(),
                code: Some(1),
            },
            RunError::discovery("/p/cmd", std::io::Error::other("denied")),
        ];
        for err in errors {
            assert_eq!(err.localized_in("en_us"), err.to_string());
        }
    }

    #[test]
    fn test_chinese_localization() {
        assert_eq!(
            RunError::NoTarget.localized_in("zh_cn"),
            "当前目录下找不到 cmd 目录"
        );
        let err = RunError::Launch {
            command: "go run .".to_string(),
            code: Some(2),
        };
        assert_eq!(err.localized_in("zh_cn"), "`go run .` 退出，状态码 2");
    }
}
