//! silkstat - Silksong 存档数据投影工具

// 导出全局错误类型
pub use self::error::{SilkstatError, SilkResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出原始数据模块核心接口
pub use self::record::{RawValue, SaveDocument, PLAYER_DATA_KEY, SCENE_DATA_KEY};

// 导出模式模块核心接口
pub use self::schema::{
    SchemaEntry, SchemaLists, SchemaRegistry, UpgradeSet, EquipAlias, EquipAliasKind,
    FieldGroup, FlagKind, FALLBACK_TOOL_ICON
};

// 导出投影模块核心接口
pub use self::projector::{
    FieldProjector, FieldSet, ParsedField,
    FlagProjector, FlagProjection, FlagItem, FlagStats,
    ToolProjector, ToolProjection, ToolRecord, ToolStats, UpgradeGroup,
    EquipProjector, EquipProjection, EquippedToolInfo, EquipCategory
};

// 导出快照模块核心接口
pub use self::snapshot::{ParsedSnapshot, SaveAnalyzer, project_all, render_summary};

// 导出工具模块核心接口
pub use self::utils::{
    format_play_time, format_number, format_number_with, format_percent, game_mode_label,
    play_time_seconds
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod record;
pub mod schema;
pub mod projector;
pub mod snapshot;
pub mod utils;
