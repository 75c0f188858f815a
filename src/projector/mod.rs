//! 投影模块：将原始存档记录按模式表投影为结构化视图
//! 所有投影器均为纯函数，不修改输入，缺失数据一律回落为默认值
pub mod fields;
pub mod flags;
pub mod tools;
pub mod equip;

// 导出核心接口
pub use self::equip::{EquipCategory, EquipProjection, EquipProjector, EquippedToolInfo};
pub use self::fields::{FieldProjector, FieldSet, ParsedField};
pub use self::flags::{FlagItem, FlagProjection, FlagProjector, FlagStats};
pub use self::tools::{ToolProjection, ToolProjector, ToolRecord, ToolStats, UpgradeGroup};
