// ============================================================================
// Kratos - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
//
// ============================================================================

pub mod candidate;
pub mod config;
pub mod invocation;

pub use candidate::CandidateMap;
pub use invocation::Invocation;
