// ============================================================================
// Kratos - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // run 命令
    ("run.select_prompt", "要运行哪个目录？"),
    ("run.searching", "从 {} 开始查找入口目录"),
    ("run.launching", "运行: {}"),
    ("run.work_dir", "工作目录: {}"),
    // init 命令
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.create_failed", "创建配置文件 {} 失败"),
    // 错误
    ("error.environment", "无法确定当前目录: {}"),
    ("error.discovery", "扫描 {} 失败: {}"),
    ("error.no_target", "当前目录下找不到 cmd 目录"),
    ("error.spawn", "无法启动 `{}`: {}"),
    ("error.launch_status", "`{}` 退出，状态码 {}"),
    ("error.launch_signal", "`{}` 被信号终止"),
];
