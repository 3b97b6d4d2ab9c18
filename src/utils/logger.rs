// ============================================================================
// Kratos - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 日志输出和格式化工具
// 边界:
//   - ✅ 用户可见消息输出（带颜色前缀）
//   - ✅ 诊断日志初始化（tracing）
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use atty::Stream;
use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::{APP_NAME, LOG_ENV};

/// 简单的日志工具
pub struct Logger;

impl Logger {
    /// 初始化诊断日志
    ///
    /// 过滤规则取自 `KRATOS_LOG`，未设置时 verbose 为 debug，否则为 warn。
    pub fn init(verbose: bool) {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(format!("kratos={}", default_level)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        let prefix = Colors::for_stream(Stream::Stdout, Colors::info(&format!("[{}]", APP_NAME)));
        println!("{} {}", prefix, msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        let prefix = Colors::for_stream(Stream::Stderr, Colors::warn("[WARN]"));
        eprintln!("{} {}", prefix, msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        let prefix = Colors::for_stream(Stream::Stderr, Colors::error("[ERROR]"));
        eprintln!("{} {}", prefix, msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        let prefix =
            Colors::for_stream(Stream::Stdout, Colors::success(&format!("[{}]", APP_NAME)));
        println!("{} {}", prefix, msg.as_ref());
    }
}
