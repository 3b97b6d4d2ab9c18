// ============================================================================
// Kratos - CLI Run 命令
// ============================================================================
//
// 文件: src/cli/run.rs
// 职责: run 命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义
//   - ✅ 串联 查找 -> 选择 -> 启动
//   - ❌ 不应包含目录遍历细节
//   - ❌ 不应包含进程管理细节
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::launcher::launch;
use crate::core::resolver::resolve;
use crate::core::{Chooser, EntryLocator, Resolution, RunError, TerminalChooser};
use crate::models::config::{Config, RunConfig};
use crate::models::Invocation;
use crate::tf;
use crate::utils::logger::Logger;

/// 运行项目命令
#[derive(Debug, Args)]
pub struct RunArgs {
    /// 要运行的目录（指定时跳过入口查找）
    pub dir: Option<PathBuf>,

    /// 子进程的工作目录
    #[arg(short = 'w', long = "work", default_value = "")]
    pub work: String,
}

/// run 命令的完整输入
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// 查找起点，同时用于解析相对的目标目录
    pub base: PathBuf,
    /// 显式指定的目标目录
    pub dir: Option<PathBuf>,
    /// 工作目录覆盖
    pub work: String,
    /// 透传给子进程的参数
    pub passthrough: Vec<OsString>,
    pub run: RunConfig,
    pub verbose: bool,
}

/// 处理 run 命令
pub async fn handle_run(
    args: RunArgs,
    passthrough: Vec<OsString>,
    config: &Config,
) -> Result<()> {
    let base = std::env::current_dir().map_err(RunError::Environment)?;
    let options = RunOptions {
        base,
        dir: args.dir.filter(|dir| !dir.as_os_str().is_empty()),
        work: args.work,
        passthrough,
        run: config.run.clone(),
        verbose: config.output.verbose,
    };

    run(options, &TerminalChooser).await?;
    Ok(())
}

/// 查找入口并运行
///
/// 用户取消选择时直接返回 `Ok(())`，不启动任何进程。
pub async fn run(options: RunOptions, chooser: &dyn Chooser) -> Result<(), RunError> {
    let target = match &options.dir {
        Some(dir) => options.base.join(dir),
        None => {
            if options.verbose {
                Logger::info(tf!("run.searching", options.base.display()));
            }
            let candidates = EntryLocator::from_config(&options.run).locate(&options.base)?;
            match resolve(&candidates, chooser)? {
                Resolution::Selected(dir) => dir,
                Resolution::Aborted => return Ok(()),
            }
        }
    };

    let invocation = Invocation::new(
        options.run.toolchain.as_str(),
        target,
        Some(options.work.as_str()),
        options.passthrough,
    );

    if options.verbose {
        Logger::info(tf!("run.launching", invocation.display_command()));
        Logger::info(tf!("run.work_dir", invocation.work_dir().display()));
    }

    launch(&invocation).await
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Pick(&'static str);

    impl Chooser for Pick {
        fn choose(&self, _prompt: &str, options: &[String]) -> Option<usize> {
            options.iter().position(|o| o == self.0)
        }
    }

    struct Cancel;

    impl Chooser for Cancel {
        fn choose(&self, _prompt: &str, _options: &[String]) -> Option<usize> {
            None
        }
    }

    /// `sh run <dir>` 执行工作目录下的 run 脚本
    fn install_recorder(dir: &Path) {
        fs::write(dir.join("run"), "pwd > pwd.txt\nprintf '%s\\n' \"$@\" > args.txt\n").unwrap();
    }

    fn options(base: &Path) -> RunOptions {
        RunOptions {
            base: base.to_path_buf(),
            dir: None,
            work: String::new(),
            passthrough: Vec::new(),
            run: RunConfig {
                toolchain: "sh".to_string(),
                ..RunConfig::default()
            },
            verbose: false,
        }
    }

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for dir in ["cmd/server", "cmd/worker"] {
            let path = tmp.path().join(dir);
            fs::create_dir_all(&path).unwrap();
            install_recorder(&path);
        }
        fs::write(tmp.path().join("go.mod"), "module example.com/p\n").unwrap();
        tmp
    }

    #[tokio::test]
    async fn test_selected_candidate_runs_in_its_dir() {
        let tmp = project();
        let mut opts = options(tmp.path());
        opts.passthrough = vec!["-conf".into(), "configs".into()];

        run(opts, &Pick("cmd/server")).await.unwrap();

        let server = tmp.path().join("cmd/server");
        let pwd = fs::read_to_string(server.join("pwd.txt")).unwrap();
        assert_eq!(pwd.trim(), fs::canonicalize(&server).unwrap().to_string_lossy());
        let args: Vec<String> = fs::read_to_string(server.join("args.txt"))
            .unwrap()
            .lines()
            .map(String::from)
            .collect();
        let expected = vec![
            server.to_string_lossy().to_string(),
            "-conf".to_string(),
            "configs".to_string(),
        ];
        assert_eq!(args, expected);
        assert!(!tmp.path().join("cmd/worker/pwd.txt").exists());
    }

    #[tokio::test]
    async fn test_cancel_launches_nothing() {
        let tmp = project();

        run(options(tmp.path()), &Cancel).await.unwrap();

        assert!(!tmp.path().join("cmd/server/pwd.txt").exists());
        assert!(!tmp.path().join("cmd/worker/pwd.txt").exists());
    }

    #[tokio::test]
    async fn test_work_override_wins() {
        let tmp = project();
        let work = tmp.path().join("override");
        fs::create_dir_all(&work).unwrap();
        install_recorder(&work);
        let mut opts = options(tmp.path());
        opts.work = format!(" {} ", work.display());

        run(opts, &Pick("cmd/worker")).await.unwrap();

        assert!(work.join("pwd.txt").exists());
        assert!(!tmp.path().join("cmd/worker/pwd.txt").exists());
    }

    #[tokio::test]
    async fn test_explicit_dir_skips_discovery() {
        let tmp = TempDir::new().unwrap();
        let app = tmp.path().join("app");
        fs::create_dir_all(&app).unwrap();
        install_recorder(&app);
        let mut opts = options(tmp.path());
        opts.dir = Some(PathBuf::from("app"));

        // 选择器不应被调用
        run(opts, &Cancel).await.unwrap();

        assert!(app.join("pwd.txt").exists());
    }

    #[tokio::test]
    async fn test_empty_cmd_is_no_target() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("cmd")).unwrap();

        let err = run(options(tmp.path()), &Cancel).await.unwrap_err();

        assert!(matches!(err, RunError::NoTarget));
    }

    #[tokio::test]
    async fn test_fallback_runs_base_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("go.mod"), "module example.com/p\n").unwrap();
        install_recorder(tmp.path());

        run(options(tmp.path()), &Cancel).await.unwrap();

        assert!(tmp.path().join("pwd.txt").exists());
    }

    #[tokio::test]
    async fn test_non_utf8_passthrough_reaches_child() {
        use std::os::unix::ffi::OsStringExt;

        let tmp = project();
        let mut opts = options(tmp.path());
        opts.passthrough = vec![OsString::from_vec(b"file\xff.txt".to_vec())];

        run(opts, &Pick("cmd/worker")).await.unwrap();

        let args = fs::read(tmp.path().join("cmd/worker/args.txt")).unwrap();
        let last = args.split(|b| *b == b'\n').filter(|line| !line.is_empty()).last();
        assert_eq!(last, Some(&b"file\xff.txt"[..]));
    }
}
