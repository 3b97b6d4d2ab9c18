// ============================================================================
// Kratos - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 透传参数拆分
//   - ✅ 配置加载与运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod init;
pub mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::args::{separator_position, split_args};
use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use init::{handle_init, InitArgs};
use run::{handle_run, RunArgs};

/// Kratos: An elegant toolkit for Go microservices.
#[derive(Debug, Parser)]
#[command(name = "kratos")]
#[command(about = "Kratos: An elegant toolkit for Go microservices.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file (defaults to ./kratos.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run project. Example: kratos run
    Run(RunArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    // `--` 之后的参数不交给 clap 解析，且按原始字节透传
    let argv: Vec<OsString> = std::env::args_os().collect();
    let (tool_args, passthrough) = split_args(&argv, separator_position(&argv));
    let cli = Cli::parse_from(tool_args);

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_runtime_args(build_runtime_args(&cli));
    let config = config.install()?;

    Colors::configure(config.output.colored);
    Logger::init(config.output.verbose);

    match cli.command {
        Commands::Run(args) => handle_run(args, passthrough.to_vec(), config).await,
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
    }
}
