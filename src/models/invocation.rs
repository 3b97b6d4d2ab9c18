// ============================================================================
// Kratos - 调用描述数据模型
// ============================================================================
//
// 文件: src/models/invocation.rs
// 职责: 一次 run 调用的不可变描述
// 边界:
//   - ✅ 目标目录、工作目录、透传参数
//   - ✅ 工作目录覆盖规则
//   - ❌ 不应包含进程启动逻辑
//
// ============================================================================

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 调用描述：构造后不可变，由启动器独占
///
/// 目标路径与透传参数保持原始字节，不经过 UTF-8 转换。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    toolchain: String,
    target: PathBuf,
    work_dir: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    /// 创建调用描述
    ///
    /// 工作目录默认为目标目录；`work_override` 去除首尾空白后非空时替换之。
    pub fn new(
        toolchain: impl Into<String>,
        target: impl Into<PathBuf>,
        work_override: Option<&str>,
        args: Vec<OsString>,
    ) -> Self {
        let target = target.into();
        let work_dir = match work_override.map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => target.clone(),
        };

        Self {
            toolchain: toolchain.into(),
            target,
            work_dir,
            args,
        }
    }

    pub fn toolchain(&self) -> &str {
        &self.toolchain
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// 完整的命令行参数: `run <target> <args...>`
    pub fn command_args(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(OsString::from("run"));
        argv.push(self.target.as_os_str().to_owned());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// 用于日志展示的命令行（非 UTF-8 字节以替换字符显示）
    pub fn display_command(&self) -> String {
        let argv: Vec<String> = self
            .command_args()
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        format!("{} {}", self.toolchain, argv.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_dir_defaults_to_target() {
        let invocation = Invocation::new("go", "/p/cmd/server", None, vec![]);
        assert_eq!(invocation.work_dir(), Path::new("/p/cmd/server"));
    }

    #[test]
    fn test_work_dir_override() {
        let invocation = Invocation::new("go", "/p/cmd/server", Some("  /tmp/override "), vec![]);
        assert_eq!(invocation.work_dir(), Path::new("/tmp/override"));
        assert_eq!(invocation.target(), Path::new("/p/cmd/server"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let invocation = Invocation::new("go", "/p/cmd/server", Some(" \t "), vec![]);
        assert_eq!(invocation.work_dir(), Path::new("/p/cmd/server"));
    }

    #[test]
    fn test_command_args_keep_passthrough_order() {
        let invocation = Invocation::new(
            "go",
            "/p/cmd/server",
            None,
            vec!["-conf".into(), "../../configs".into()],
        );
        let expected: Vec<OsString> = ["run", "/p/cmd/server", "-conf", "../../configs"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(invocation.command_args(), expected);
        assert_eq!(
            invocation.display_command(),
            "go run /p/cmd/server -conf ../../configs"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_target_is_passed_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let target = Path::new(OsStr::from_bytes(b"/p/cmd/srv\xff"));
        let invocation = Invocation::new("go", target, None, vec![]);

        let argv = invocation.command_args();
        assert_eq!(argv[1].as_bytes(), b"/p/cmd/srv\xff");
        assert_eq!(invocation.work_dir(), target);
        assert_eq!(invocation.display_command(), "go run /p/cmd/srv\u{FFFD}");
    }
}
