// ============================================================================
// Kratos - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和主题管理
// 边界:
//   - ✅ 日志级别颜色主题
//   - ✅ 颜色开关（按输出流判断，非终端输出纯文本）
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};

use atty::Stream;
use colored::{ColoredString, Colorize};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 设置颜色总开关
    ///
    /// 是否着色最终按输出流判断，见 [`Colors::for_stream`]。
    pub fn configure(enabled: bool) {
        ENABLED.store(enabled, Ordering::Relaxed);
        colored::control::set_override(enabled);
    }

    /// 按目标输出流决定是否保留颜色，非终端输出纯文本
    pub fn for_stream(stream: Stream, text: ColoredString) -> ColoredString {
        Self::paint(text, ENABLED.load(Ordering::Relaxed) && atty::is(stream))
    }

    fn paint(text: ColoredString, colored: bool) -> ColoredString {
        if colored {
            text
        } else {
            text.clear()
        }
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> ColoredString {
        text.cyan()
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> ColoredString {
        text.yellow()
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_disabled() {
        Colors::configure(false);
        assert_eq!(Colors::error("[ERROR]").to_string(), "[ERROR]");
        assert_eq!(Colors::info("[KRATOS]").to_string(), "[KRATOS]");
    }

    #[test]
    fn test_paint_strips_color_for_plain_stream() {
        assert_eq!(Colors::paint(Colors::error("[ERROR]"), false).to_string(), "[ERROR]");
        assert_eq!(Colors::paint("[WARN]".yellow(), false).to_string(), "[WARN]");
    }
}
