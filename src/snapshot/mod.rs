//! 快照模块：汇总全部投影器，产出不可变快照
pub mod snapshot;
pub mod analyzer;
pub mod summary;

// 导出核心接口
pub use self::analyzer::{SaveAnalyzer, project_all};
pub use self::snapshot::ParsedSnapshot;
pub use self::summary::render_summary;
