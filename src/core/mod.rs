// ============================================================================
// Kratos - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod args;
pub mod error;
pub mod launcher;
pub mod locator;
pub mod resolver;

// 重新导出常用类型
pub use error::RunError;
pub use locator::EntryLocator;
pub use resolver::{Chooser, Resolution, TerminalChooser};
