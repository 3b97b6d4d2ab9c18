// ============================================================================
// Kratos - 进程启动器
// ============================================================================
//
// 文件: src/core/launcher.rs
// 职责: 根据调用描述启动工具链子进程
// 边界:
//   - ✅ 命令构建
//   - ✅ 标准输入输出继承
//   - ✅ 等待子进程退出
//   - ❌ 不包含超时与重试
//   - ❌ 不包含入口发现逻辑
//
// ============================================================================

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::core::error::RunError;
use crate::models::Invocation;

/// 构建子进程命令
pub fn build_command(invocation: &Invocation) -> Command {
    let mut command = Command::new(invocation.toolchain());
    command
        .args(invocation.command_args())
        .current_dir(invocation.work_dir())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// 启动并等待子进程退出
pub async fn launch(invocation: &Invocation) -> Result<(), RunError> {
    debug!(
        command = %invocation.display_command(),
        target = %invocation.target().display(),
        work_dir = %invocation.work_dir().display(),
        "launching"
    );

    let status = build_command(invocation)
        .status()
        .await
        .map_err(|source| RunError::Spawn {
            program: invocation.toolchain().to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(RunError::Launch {
            command: invocation.display_command(),
            code: status.code(),
        })
    }
}
