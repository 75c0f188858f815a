//! 简单字段模式表（直接读取 playerData 顶层键）

use super::model::SchemaEntry;

/// 概览：版本、模式、完成度、游戏时长、上限值
pub const GENERAL_FIELDS: &[SchemaEntry] = &[
    SchemaEntry::new("version", "Game Version"),
    SchemaEntry::new("permadeathMode", "Game Mode"),
    SchemaEntry::new("completionPercentage", "Completion"),
    SchemaEntry::new("playTime", "Play Time"),
    SchemaEntry::new("maxHealth", "Max Health"),
    SchemaEntry::new("silkMax", "Max Silk"),
    SchemaEntry::new("silkRegenMax", "Max Silk Hearts"),
];

/// 当前状态：生命、丝线、货币、纹章、位置
pub const CURRENT_FIELDS: &[SchemaEntry] = &[
    SchemaEntry::new("health", "Current Health"),
    SchemaEntry::new("maxHealth", "Max Health"),
    SchemaEntry::new("silk", "Current Silk"),
    SchemaEntry::new("silkMax", "Max Silk"),
    SchemaEntry::new("geo", "Rosaries"),
    SchemaEntry::new("ShellShards", "Shell Shards"),
    SchemaEntry::new("CurrentCrestID", "Equipped Crest"),
    SchemaEntry::new("currentArea", "Current Area"),
    SchemaEntry::new("mapZone", "Map Zone"),
    SchemaEntry::new("atBench", "At Bench"),
];

/// 杂项：重生点
pub const MISC_FIELDS: &[SchemaEntry] = &[
    SchemaEntry::new("respawnScene", "Respawn Area"),
    SchemaEntry::new("respawnMarkerName", "Respawn Marker"),
    SchemaEntry::new("respawnType", "Respawn Type"),
];
