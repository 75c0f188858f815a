//! 存档分析器：整合各投影器，输出完整快照
use tracing::debug;

use super::snapshot::ParsedSnapshot;
use crate::error::{SilkResult, SilkstatError};
use crate::projector::{EquipProjector, FieldProjector, FlagProjector, ToolProjector};
use crate::record::{PLAYER_DATA_KEY, RawValue, SaveDocument};
use crate::schema::{FieldGroup, FlagKind, SchemaRegistry};

/// 存档分析器
#[derive(Debug, Clone, Copy)]
pub struct SaveAnalyzer<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> SaveAnalyzer<'r> {
    /// 基于指定注册表创建分析器
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// 核心分析接口：记录缺失（None / Null）时返回 None
    pub fn analyze<'a>(&self, record: Option<&'a RawValue>) -> Option<ParsedSnapshot<'a>> {
        let Some(raw) = record.filter(|r| !r.is_null()) else {
            debug!("No player record to analyze");
            return None;
        };
        let record = Some(raw);
        let registry = self.registry;

        // 1. 简单字段
        let general = FieldProjector::project(record, registry.fields(FieldGroup::General));
        let current = FieldProjector::project(record, registry.fields(FieldGroup::Current));
        let misc = FieldProjector::project(record, registry.fields(FieldGroup::Misc));

        // 2. 工具与装备
        let tools = ToolProjector::project(record, registry);
        let equipped_tools = EquipProjector::project(record, registry);

        // 3. 布尔标志
        let bosses = FlagProjector::project_kind(record, registry, FlagKind::Bosses);
        let fleas = FlagProjector::project_kind(record, registry, FlagKind::Fleas);
        let maps = FlagProjector::project_kind(record, registry, FlagKind::Maps);
        let abilities = FlagProjector::project_kind(record, registry, FlagKind::Abilities);
        let skills = FlagProjector::project_kind(record, registry, FlagKind::Skills);

        debug!(
            "Snapshot built: {}/{} tools, {}/{} bosses, {} equipped",
            tools.stats.unlocked,
            tools.stats.total,
            bosses.stats.counted,
            bosses.stats.total,
            equipped_tools.len()
        );

        Some(ParsedSnapshot {
            general,
            current,
            misc,
            tools,
            bosses,
            fleas,
            maps,
            abilities,
            skills,
            equipped_tools,
            raw,
        })
    }

    /// 分析完整存档文档（要求存在 playerData 段）
    pub fn analyze_document<'a>(&self, document: &'a SaveDocument) -> SilkResult<ParsedSnapshot<'a>> {
        let player_data = document.require_player_data()?;
        self.analyze(Some(player_data))
            .ok_or_else(|| SilkstatError::MissingSection(PLAYER_DATA_KEY.to_string()))
    }
}

impl Default for SaveAnalyzer<'static> {
    fn default() -> Self {
        Self::new(SchemaRegistry::global())
    }
}

/// 使用全局注册表投影一条玩家记录
pub fn project_all(record: Option<&RawValue>) -> Option<ParsedSnapshot<'_>> {
    SaveAnalyzer::default().analyze(record)
}
