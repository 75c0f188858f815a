//! 原始记录模块：存档数据模型、异构访问器、文档解码
pub mod value;
pub mod accessor;
pub mod document;

// 导出核心接口
pub use self::value::RawValue;
pub use self::document::{SaveDocument, PLAYER_DATA_KEY, SCENE_DATA_KEY};
