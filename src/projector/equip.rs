//! 装备投影器
//! 主装备槽：根据 CurrentCrestID 在 ToolEquips.savedData 中定位纹章，读取其 Slots
//! 额外装备槽：ExtraToolEquips.savedData 中的每个条目（槽位名取自 Name）

use serde::Serialize;
use tracing::debug;

use crate::record::{RawValue, accessor};
use crate::schema::{EquipAliasKind, FALLBACK_TOOL_ICON, SchemaRegistry};

const TOOL_EQUIPS_CONTAINER: &str = "ToolEquips";
const EXTRA_EQUIPS_CONTAINER: &str = "ExtraToolEquips";

/// 装备项分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquipCategory {
    Tool,
    Skill,
    Ability,
    Unknown,
}

impl EquipCategory {
    /// 图标资源分组
    pub fn icon_group(self) -> &'static str {
        match self {
            EquipCategory::Tool | EquipCategory::Unknown => "tools",
            EquipCategory::Skill => "general/skills",
            EquipCategory::Ability => "general/ability",
        }
    }
}

impl From<EquipAliasKind> for EquipCategory {
    fn from(kind: EquipAliasKind) -> Self {
        match kind {
            EquipAliasKind::Skill => EquipCategory::Skill,
            EquipAliasKind::Ability => EquipCategory::Ability,
        }
    }
}

/// 单个已装备项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquippedToolInfo<'a> {
    /// 存档中的原始名称
    pub name: &'a str,
    pub display: &'a str,
    pub icon: &'a str,
    pub category: EquipCategory,
    pub icon_group: &'static str,
    /// 仅额外装备槽带槽位名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_name: Option<&'a str>,
}

/// 装备投影结果
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipProjection<'a> {
    pub equipped_tools: Vec<EquippedToolInfo<'a>>,
    pub extra_equipped_tools: Vec<EquippedToolInfo<'a>>,
    /// 原样透传的当前纹章 ID
    pub crest_id: Option<&'a RawValue>,
}

impl EquipProjection<'_> {
    pub fn len(&self) -> usize {
        self.equipped_tools.len() + self.extra_equipped_tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 装备投影器
pub struct EquipProjector;

impl EquipProjector {
    pub fn project<'a>(record: Option<&'a RawValue>, registry: &SchemaRegistry) -> EquipProjection<'a> {
        let crest_id = accessor::get(record, "CurrentCrestID");

        let mut equipped_tools = Vec::new();
        if let Some(crest_id) = crest_id.filter(|id| id.is_truthy()) {
            let crest = accessor::saved_data(record, TOOL_EQUIPS_CONTAINER)
                .iter()
                .find(|entry| {
                    accessor::get(Some(*entry), "Name").is_some_and(|name| name.same_value(crest_id))
                });
            match crest {
                Some(crest) => {
                    let slots = accessor::get_list(accessor::get(Some(crest), "Data"), "Slots");
                    equipped_tools.extend(
                        slots
                            .iter()
                            .filter_map(|slot| Self::equipped_name(Some(slot)))
                            .map(|name| Self::resolve(name, None, registry)),
                    );
                }
                None => debug!("Current crest has no matching ToolEquips entry"),
            }
        }

        let extra_equipped_tools: Vec<_> = accessor::saved_data(record, EXTRA_EQUIPS_CONTAINER)
            .iter()
            .filter_map(|entry| {
                let name = Self::equipped_name(accessor::get(Some(entry), "Data"))?;
                let slot_name = accessor::get_str(Some(entry), "Name");
                Some(Self::resolve(name, slot_name, registry))
            })
            .collect();

        debug!(
            "Projected equipment: {} crest slots, {} extra slots",
            equipped_tools.len(),
            extra_equipped_tools.len()
        );

        EquipProjection {
            equipped_tools,
            extra_equipped_tools,
            crest_id,
        }
    }

    /// 解析装备名称：工具模式表 → 别名表 → 未知（原名 + 默认图标）
    pub fn resolve<'a>(
        name: &'a str,
        slot_name: Option<&'a str>,
        registry: &SchemaRegistry,
    ) -> EquippedToolInfo<'a> {
        let (display, icon, category) = if let Some(tool) = registry.tool(name) {
            let display = if tool.display.is_empty() { name } else { tool.display };
            (display, tool.icon.unwrap_or(FALLBACK_TOOL_ICON), EquipCategory::Tool)
        } else if let Some(alias) = registry.equip_alias(name) {
            (alias.display, alias.icon, EquipCategory::from(alias.kind))
        } else {
            debug!("Unknown equipped item: {}", name);
            (name, FALLBACK_TOOL_ICON, EquipCategory::Unknown)
        };

        EquippedToolInfo {
            name,
            display,
            icon,
            category,
            icon_group: category.icon_group(),
            slot_name,
        }
    }

    // 空字符串表示空槽
    fn equipped_name(data: Option<&RawValue>) -> Option<&str> {
        accessor::get_str(data, "EquippedTool").filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EquipAlias, SchemaLists};
    use serde_json::json;

    fn sample_save() -> RawValue {
        RawValue::from(json!({
            "CurrentCrestID": "Hunter",
            "ToolEquips": { "savedData": [
                { "Name": "Reaper", "Data": { "Slots": [ { "EquippedTool": "Compass" } ] } },
                { "Name": "Hunter", "Data": { "Slots": [
                    { "EquippedTool": "Straight Pin" },
                    { "EquippedTool": "" },
                    { "EquippedTool": "Parry" },
                    { "IsUnlocked": true },
                    { "EquippedTool": "Mystery Gadget" },
                ] } },
            ] },
            "ExtraToolEquips": { "savedData": [
                { "Name": "Attack Slot", "Data": { "EquippedTool": "Bell Bind" } },
                { "Name": "Empty Slot", "Data": { "EquippedTool": "" } },
            ] },
        }))
    }

    #[test]
    fn test_project_matching_crest() {
        let raw = sample_save();
        let projection = EquipProjector::project(Some(&raw), SchemaRegistry::global());

        assert_eq!(projection.crest_id.and_then(RawValue::as_str), Some("Hunter"));
        let names: Vec<_> = projection.equipped_tools.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Straight Pin", "Parry", "Mystery Gadget"]);

        let pin = &projection.equipped_tools[0];
        assert_eq!(pin.category, EquipCategory::Tool);
        assert_eq!(pin.icon, "T_straight_pin.png");
        assert_eq!(pin.icon_group, "tools");
        assert_eq!(pin.slot_name, None);

        let parry = &projection.equipped_tools[1];
        assert_eq!(parry.category, EquipCategory::Skill);
        assert_eq!(parry.display, "Cross Stitch");
        assert_eq!(parry.icon_group, "general/skills");

        let unknown = &projection.equipped_tools[2];
        assert_eq!(unknown.category, EquipCategory::Unknown);
        assert_eq!(unknown.display, "Mystery Gadget");
        assert_eq!(unknown.icon, FALLBACK_TOOL_ICON);
        assert_eq!(unknown.icon_group, "tools");
    }

    #[test]
    fn test_extra_slots_carry_slot_name() {
        let raw = sample_save();
        let projection = EquipProjector::project(Some(&raw), SchemaRegistry::global());

        assert_eq!(projection.extra_equipped_tools.len(), 1);
        let bell = &projection.extra_equipped_tools[0];
        assert_eq!(bell.name, "Bell Bind");
        assert_eq!(bell.display, "Warding Bell");
        assert_eq!(bell.slot_name, Some("Attack Slot"));
        assert_eq!(projection.len(), 4);
    }

    #[test]
    fn test_non_matching_crest_yields_no_primary_slots() {
        let raw = RawValue::from(json!({
            "CurrentCrestID": "Wanderer",
            "ToolEquips": { "savedData": [
                { "Name": "Hunter", "Data": { "Slots": [ { "EquippedTool": "Compass" } ] } },
            ] },
        }));
        let projection = EquipProjector::project(Some(&raw), SchemaRegistry::global());
        assert!(projection.equipped_tools.is_empty());
        assert_eq!(projection.crest_id.and_then(RawValue::as_str), Some("Wanderer"));
    }

    #[test]
    fn test_falsy_crest_skips_primary_slots() {
        let raw = RawValue::from(json!({
            "CurrentCrestID": "",
            "ToolEquips": { "savedData": [
                { "Name": "", "Data": { "Slots": [ { "EquippedTool": "Compass" } ] } },
            ] },
            "ExtraToolEquips": { "savedData": [
                { "Name": "Slot A", "Data": { "EquippedTool": "Compass" } },
            ] },
        }));
        let projection = EquipProjector::project(Some(&raw), SchemaRegistry::global());
        assert!(projection.equipped_tools.is_empty());
        assert_eq!(projection.extra_equipped_tools.len(), 1);
    }

    #[test]
    fn test_absent_record() {
        let projection = EquipProjector::project(None, SchemaRegistry::global());
        assert!(projection.is_empty());
        assert_eq!(projection.crest_id, None);
    }

    #[test]
    fn test_numeric_crest_id_and_assoc_representation() {
        let keyed = RawValue::from(json!({
            "CurrentCrestID": 3,
            "ToolEquips": { "savedData": [
                { "Name": 3, "Data": { "Slots": [ { "EquippedTool": "Compass" } ] } },
            ] },
        }));
        let assoc = keyed.to_assoc();
        let registry = SchemaRegistry::global();

        let from_keyed = EquipProjector::project(Some(&keyed), registry);
        let from_assoc = EquipProjector::project(Some(&assoc), registry);
        assert_eq!(from_keyed.equipped_tools, from_assoc.equipped_tools);
        assert_eq!(from_keyed.equipped_tools[0].display, "Compass");
    }

    #[test]
    fn test_integer_crest_id_matches_float_name() {
        let raw = RawValue::from(json!({
            "CurrentCrestID": 3,
            "ToolEquips": { "savedData": [
                { "Name": 3.0, "Data": { "Slots": [ { "EquippedTool": "Compass" } ] } },
            ] },
        }));
        let projection = EquipProjector::project(Some(&raw), SchemaRegistry::global());
        assert_eq!(projection.equipped_tools.len(), 1);
        assert_eq!(projection.equipped_tools[0].name, "Compass");
    }

    const ABILITY_ALIASES: &[EquipAlias] = &[EquipAlias {
        name: "Harpoon Dash",
        display: "Clawline",
        icon: "Clawline.png",
        kind: EquipAliasKind::Ability,
    }];

    #[test]
    fn test_ability_alias_from_custom_registry() {
        let registry = SchemaRegistry::new(SchemaLists {
            equip_aliases: ABILITY_ALIASES,
            ..SchemaLists::BUILTIN
        });
        let info = EquipProjector::resolve("Harpoon Dash", None, &registry);
        assert_eq!(info.category, EquipCategory::Ability);
        assert_eq!(info.icon_group, "general/ability");
        assert_eq!(info.display, "Clawline");

        // 自定义别名表中不再包含内置技能
        assert_eq!(EquipProjector::resolve("Parry", None, &registry).category, EquipCategory::Unknown);
    }

    #[test]
    fn test_serialized_shape() {
        let raw = sample_save();
        let projection = EquipProjector::project(Some(&raw), SchemaRegistry::global());
        let out = serde_json::to_value(&projection).unwrap();

        assert_eq!(out["crestId"], "Hunter");
        assert_eq!(out["equippedTools"][1]["category"], "Skill");
        assert_eq!(out["equippedTools"][1]["iconGroup"], "general/skills");
        assert!(out["equippedTools"][0].get("slotName").is_none());
        assert_eq!(out["extraEquippedTools"][0]["slotName"], "Attack Slot");
    }
}
