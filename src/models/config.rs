// ============================================================================
// Kratos - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 运行时参数合并
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含入口发现逻辑
//   - ❌ 不应包含 CLI 参数解析
//   - ❌ 不应包含进程启动逻辑
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::utils::constants::CONFIG_FILE_NAME;

/// 全局只读配置（合并运行时参数后安装一次）
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Kratos 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// run 命令配置
    #[serde(default)]
    pub run: RunConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// run 命令配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// 构建运行工具链，执行 `<toolchain> run <dir>`
    #[serde(default = "Config::default_toolchain")]
    pub toolchain: String,
    /// 入口目录名
    #[serde(default = "Config::default_entry_dir")]
    pub entry_dir: String,
    /// 模块根标记文件
    #[serde(default = "Config::default_marker")]
    pub marker: String,
    /// 向上查找的最大次数
    #[serde(default = "Config::default_max_attempts")]
    pub max_attempts: usize,
    /// 遍历时跳过的目录或文件模式
    #[serde(default = "Config::default_ignore_patterns")]
    pub ignore: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default = "Config::default_verbose")]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_toolchain() -> String {
        "go".to_string()
    }

    fn default_entry_dir() -> String {
        "cmd".to_string()
    }

    fn default_marker() -> String {
        "go.mod".to_string()
    }

    /// 获取默认向上查找次数
    fn default_max_attempts() -> usize {
        5
    }

    /// 获取默认忽略模式
    fn default_ignore_patterns() -> Vec<String> {
        vec![
            ".git".to_string(),
            "vendor".to_string(),
            "node_modules".to_string(),
        ]
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 加载配置文件
    ///
    /// 显式指定的路径必须存在；未指定时读取当前目录下的 `kratos.toml`，
    /// 不存在则使用默认配置。
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (config_path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE_NAME), false),
        };

        if !config_path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 安装为全局配置（程序启动时调用一次）
    pub fn install(self) -> anyhow::Result<&'static Config> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Self::global()
    }

    /// 获取全局配置
    pub fn global() -> anyhow::Result<&'static Config> {
        GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::global()?.i18n.language.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            toolchain: Config::default_toolchain(),
            entry_dir: Config::default_entry_dir(),
            marker: Config::default_marker(),
            max_attempts: Config::default_max_attempts(),
            ignore: Config::default_ignore_patterns(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
