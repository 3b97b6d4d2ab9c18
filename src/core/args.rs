// ============================================================================
// Kratos - 参数分割
// ============================================================================
//
// 文件: src/core/args.rs
// 职责: 在 `--` 分隔符处拆分命令行参数
// 边界:
//   - ✅ 工具参数 / 透传参数拆分
//   - ❌ 不应包含参数解析逻辑
//
// ============================================================================

use std::ffi::OsStr;

/// 透传参数分隔符
pub const SEPARATOR: &str = "--";

fn is_separator<S: AsRef<OsStr>>(arg: &S) -> bool {
    arg.as_ref() == OsStr::new(SEPARATOR)
}

/// 查找第一个分隔符的位置
pub fn separator_position<S: AsRef<OsStr>>(args: &[S]) -> Option<usize> {
    args.iter().position(is_separator)
}

/// 拆分为 (工具参数, 透传参数)
///
/// `dash_at` 之前的参数属于工具；之后的参数原样透传。若 `dash_at` 处正是分隔符本身，
/// 它不会出现在任一侧。越界的下标会被截断到参数长度。参数按原始字节处理，
/// 不要求是合法的 UTF-8。
pub fn split_args<S: AsRef<OsStr>>(args: &[S], dash_at: Option<usize>) -> (&[S], &[S]) {
    let Some(at) = dash_at else {
        return (args, &[]);
    };
    let at = at.min(args.len());
    let (tool, rest) = args.split_at(at);
    match rest.first() {
        Some(first) if is_separator(first) => (tool, &rest[1..]),
        _ => (tool, rest),
    }
}
