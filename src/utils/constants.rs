// ============================================================================
// Kratos - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "KRATOS";

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "kratos.toml";

/// 日志过滤环境变量
pub const LOG_ENV: &str = "KRATOS_LOG";
