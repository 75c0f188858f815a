//! 模式模块：声明式存档模式表（字段、标志、工具、升级组、装备别名）及注册表
pub mod model;
pub mod fields;
pub mod tools;
pub mod flags;
pub mod equip;
pub mod registry;

// 导出核心接口
pub use self::model::{EquipAlias, EquipAliasKind, FieldGroup, FlagKind, SchemaEntry, UpgradeSet};
pub use self::registry::{SchemaLists, SchemaRegistry};
pub use self::tools::FALLBACK_TOOL_ICON;
