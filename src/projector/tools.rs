//! 工具投影器
//! 1. 读取 Tools.savedData 并按 Name 建立索引（同名以后出现者为准）
//! 2. 按模式表顺序生成工具记录（解锁 / 已查看 / 已选择）
//! 3. 升级组折叠为单条记录（优先展示 preferred 成员）
//! 4. 拆分「其他工具」，仅对主列表统计

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::record::{RawValue, accessor};
use crate::schema::{SchemaEntry, SchemaRegistry, UpgradeSet};

/// 存档中工具条目的容器名
pub const TOOLS_CONTAINER: &str = "Tools";

/// 升级组折叠信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeGroup {
    pub upgrade_set_name: &'static str,
    /// 与 variants 一一对应
    pub variant_labels: Vec<&'static str>,
    pub variants: Vec<ToolRecord>,
}

/// 工具投影记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub key: &'static str,
    pub display: &'static str,
    pub category: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub unlocked: bool,
    pub seen: bool,
    pub selected: bool,
    pub is_upgrade_set: bool,
    /// 折叠记录的升级组字段（序列化时平铺到记录上）
    #[serde(flatten)]
    pub upgrade_set: Option<UpgradeGroup>,
    pub is_other: bool,
}

/// 主列表统计（不含其他工具）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ToolStats {
    pub total: usize,
    pub unlocked: usize,
    pub seen: usize,
    pub selected: usize,
}

/// 工具投影结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolProjection {
    pub tools: Vec<ToolRecord>,
    pub other_tools: Vec<ToolRecord>,
    pub stats: ToolStats,
}

impl ToolProjection {
    /// 按键查找（主列表、其他工具及折叠后的升级组成员）
    pub fn find(&self, key: &str) -> Option<&ToolRecord> {
        self.tools
            .iter()
            .chain(self.other_tools.iter())
            .find_map(|tool| {
                if tool.key == key {
                    return Some(tool);
                }
                tool.upgrade_set
                    .as_ref()
                    .and_then(|group| group.variants.iter().find(|v| v.key == key))
            })
    }
}

/// 工具投影器
pub struct ToolProjector;

impl ToolProjector {
    pub fn project(record: Option<&RawValue>, registry: &SchemaRegistry) -> ToolProjection {
        let entries = accessor::saved_data(record, TOOLS_CONTAINER);
        let mut by_name: HashMap<&str, &RawValue> = HashMap::with_capacity(entries.len());
        for entry in entries {
            match accessor::get_str(Some(entry), "Name") {
                Some(name) if !name.is_empty() => {
                    by_name.insert(name, entry);
                }
                _ => trace!("Skipping tool entry without a usable name"),
            }
        }

        let records: Vec<ToolRecord> = registry
            .tools()
            .iter()
            .map(|def| Self::build_record(def, by_name.get(def.key).copied()))
            .collect();

        let collapsed = Self::collapse_upgrade_sets(records, registry);

        let (mut other_tools, tools): (Vec<ToolRecord>, Vec<ToolRecord>) = collapsed
            .into_iter()
            .partition(|tool| registry.is_other_tool(tool.key));
        for tool in &mut other_tools {
            tool.is_other = true;
        }

        let stats = ToolStats {
            total: tools.len(),
            unlocked: tools.iter().filter(|t| t.unlocked).count(),
            seen: tools.iter().filter(|t| t.seen).count(),
            selected: tools.iter().filter(|t| t.selected).count(),
        };
        debug!(
            "Projected tools: {}/{} unlocked ({} save entries, {} other tools)",
            stats.unlocked,
            stats.total,
            entries.len(),
            other_tools.len()
        );

        ToolProjection {
            tools,
            other_tools,
            stats,
        }
    }

    fn build_record(def: &SchemaEntry, found: Option<&RawValue>) -> ToolRecord {
        let data = accessor::get(found, "Data");
        ToolRecord {
            key: def.key,
            display: def.display,
            category: def.category,
            icon: def.icon,
            unlocked: accessor::get_flag(data, "IsUnlocked"),
            seen: accessor::get_flag(data, "HasBeenSeen"),
            selected: accessor::get_flag(data, "HasBeenSelected"),
            is_upgrade_set: false,
            upgrade_set: None,
            is_other: false,
        }
    }

    /// 折叠升级组：折叠记录占据首个出现成员的位置，其余成员移除
    fn collapse_upgrade_sets(records: Vec<ToolRecord>, registry: &SchemaRegistry) -> Vec<ToolRecord> {
        // 组名 → (成员序号, 记录)，按成员序排列
        let mut groups: HashMap<&'static str, Vec<(usize, ToolRecord)>> = HashMap::new();
        for record in &records {
            if let Some(set) = registry.upgrade_set_of(record.key) {
                let tier = set.members.iter().position(|m| *m == record.key).unwrap_or(0);
                groups.entry(set.name).or_default().push((tier, record.clone()));
            }
        }

        let mut out = Vec::with_capacity(records.len());
        for record in records {
            match registry.upgrade_set_of(record.key) {
                None => out.push(record),
                Some(set) => {
                    if let Some(mut members) = groups.remove(set.name) {
                        members.sort_by_key(|(tier, _)| *tier);
                        out.extend(Self::collapse(set, members));
                    }
                }
            }
        }
        out
    }

    fn collapse(set: &UpgradeSet, members: Vec<(usize, ToolRecord)>) -> Option<ToolRecord> {
        let (_, mut shown) = members
            .iter()
            .find(|(_, m)| m.unlocked && m.key == set.preferred)
            .or_else(|| members.iter().find(|(_, m)| m.unlocked))
            .or_else(|| members.first())
            .cloned()?;
        trace!("Upgrade set {} shows {}", set.name, shown.key);

        let variant_labels = members
            .iter()
            .map(|(tier, m)| {
                set.variant_labels
                    .and_then(|labels| labels.get(*tier).copied())
                    .unwrap_or(m.display)
            })
            .collect();
        let variants = members.into_iter().map(|(_, m)| m).collect();

        shown.is_upgrade_set = true;
        shown.upgrade_set = Some(UpgradeGroup {
            upgrade_set_name: set.name,
            variant_labels,
            variants,
        });
        Some(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn tool(name: &str, unlocked: bool) -> Value {
        json!({
            "Name": name,
            "Data": { "IsUnlocked": unlocked, "HasBeenSeen": unlocked, "HasBeenSelected": false }
        })
    }

    fn save_with(tools: Vec<Value>) -> RawValue {
        RawValue::from(json!({ "Tools": { "savedData": tools } }))
    }

    #[test]
    fn test_empty_record_totals() {
        let registry = SchemaRegistry::global();
        let projection = ToolProjector::project(None, registry);

        // 59 个工具 - 3 个其他工具 - 9 个升级组成员 + 4 条折叠记录
        assert_eq!(projection.stats.total, 51);
        assert_eq!(projection.tools.len(), 51);
        assert_eq!(projection.other_tools.len(), 3);
        assert_eq!(projection.stats.unlocked, 0);
        assert!(projection.tools.iter().all(|t| !t.unlocked && !t.is_other));
        assert!(projection.other_tools.iter().all(|t| t.is_other));
    }

    #[test]
    fn test_schema_order_and_collapse_position() {
        let projection = ToolProjector::project(None, SchemaRegistry::global());
        let keys: Vec<_> = projection.tools.iter().map(|t| t.key).collect();

        assert_eq!(&keys[..6], &["Straight Pin", "Tri Pin", "Sting Shard", "Tack", "Harpoon", "Curve Claws"]);
        // 升级组成员仅出现一次
        assert!(!keys.contains(&"Curve Claws Upgraded"));
        assert_eq!(keys.iter().filter(|k| k.starts_with("WebShot")).count(), 1);
        assert!(!keys.contains(&"Flea Brew"));
    }

    #[test]
    fn test_unlocked_tool_flags() {
        let raw = RawValue::from(json!({
            "Tools": { "savedData": [
                { "Name": "Compass", "Data": { "IsUnlocked": true, "HasBeenSeen": true, "HasBeenSelected": true } },
                { "Name": "Tri Pin", "Data": { "IsUnlocked": false, "HasBeenSeen": true } },
            ] }
        }));
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());

        let compass = projection.find("Compass").unwrap();
        assert!(compass.unlocked && compass.seen && compass.selected);
        assert_eq!(compass.category, Some("Yellow"));
        let tri_pin = projection.find("Tri Pin").unwrap();
        assert!(!tri_pin.unlocked && tri_pin.seen);

        assert_eq!(projection.stats.unlocked, 1);
        assert_eq!(projection.stats.seen, 2);
        assert_eq!(projection.stats.selected, 1);
    }

    #[test]
    fn test_preferred_member_wins() {
        let raw = save_with(vec![
            tool("WebShot Forge", true),
            tool("WebShot Architect", true),
            tool("WebShot Weaver", true),
        ]);
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());
        let silkshot = projection.tools.iter().find(|t| t.is_upgrade_set && t.key.starts_with("WebShot")).unwrap();

        assert_eq!(silkshot.key, "WebShot Weaver");
        assert!(silkshot.unlocked);
        let group = silkshot.upgrade_set.as_ref().unwrap();
        assert_eq!(group.upgrade_set_name, "Silkshot");
        assert_eq!(group.variant_labels, vec!["Forge Daughter", "Twelfth Architect", "Mount Fay"]);
        let variant_keys: Vec<_> = group.variants.iter().map(|v| v.key).collect();
        assert_eq!(variant_keys, vec!["WebShot Forge", "WebShot Architect", "WebShot Weaver"]);
        assert_eq!(projection.stats.unlocked, 1);
    }

    #[test]
    fn test_two_member_set_prefers_upgraded() {
        let raw = save_with(vec![tool("Curve Claws", true), tool("Curve Claws Upgraded", true)]);
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());
        let curveclaw = projection
            .tools
            .iter()
            .find(|t| t.upgrade_set.as_ref().is_some_and(|g| g.upgrade_set_name == "Curveclaw"))
            .unwrap();

        assert_eq!(curveclaw.key, "Curve Claws Upgraded");
        assert_eq!(curveclaw.display, "Curvesickle");
        assert!(curveclaw.unlocked);
        assert_eq!(projection.stats.unlocked, 1);
    }

    #[test]
    fn test_first_unlocked_member_without_preferred() {
        let raw = save_with(vec![tool("WebShot Architect", true), tool("WebShot Weaver", false)]);
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());
        let silkshot = projection.find("WebShot Architect").unwrap();

        assert!(silkshot.is_upgrade_set);
        assert!(silkshot.unlocked);
    }

    #[test]
    fn test_locked_set_shows_first_member() {
        let projection = ToolProjector::project(None, SchemaRegistry::global());
        let curveclaw = projection.tools.iter().find(|t| t.key == "Curve Claws").unwrap();

        assert!(curveclaw.is_upgrade_set);
        assert!(!curveclaw.unlocked);
        let group = curveclaw.upgrade_set.as_ref().unwrap();
        assert_eq!(group.variant_labels, vec!["Curveclaw", "Curvesickle"]);
    }

    #[test]
    fn test_other_tools_are_not_counted() {
        let raw = save_with(vec![tool("Flea Brew", true), tool("Extractor", true), tool("Compass", true)]);
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());

        assert_eq!(projection.stats.unlocked, 1);
        assert_eq!(projection.stats.total, 51);
        let flea_brew = projection.other_tools.iter().find(|t| t.key == "Flea Brew").unwrap();
        assert!(flea_brew.unlocked && flea_brew.is_other);
    }

    #[test]
    fn test_assoc_representation_matches_keyed() {
        let keyed = save_with(vec![
            tool("Compass", true),
            tool("Dazzle Bind", true),
            tool("Mosscreep Tool 2", true),
        ]);
        let assoc = keyed.to_assoc();
        let registry = SchemaRegistry::global();

        assert_eq!(
            ToolProjector::project(Some(&keyed), registry),
            ToolProjector::project(Some(&assoc), registry)
        );
    }

    #[test]
    fn test_last_entry_with_same_name_wins() {
        let raw = save_with(vec![tool("Compass", true), tool("Compass", false)]);
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());
        assert!(!projection.find("Compass").unwrap().unlocked);
    }

    #[test]
    fn test_malformed_entries_are_ignored() {
        let raw = RawValue::from(json!({
            "Tools": { "savedData": [
                42,
                { "Name": "" },
                { "Data": { "IsUnlocked": true } },
                { "Name": "Compass", "Data": "broken" },
            ] }
        }));
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());
        assert_eq!(projection.stats.unlocked, 0);
        assert_eq!(projection.stats.total, 51);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let raw = save_with(vec![tool("Curve Claws Upgraded", true), tool("Lifeblood Syringe", true)]);
        let registry = SchemaRegistry::global();
        assert_eq!(
            ToolProjector::project(Some(&raw), registry),
            ToolProjector::project(Some(&raw), registry)
        );
    }

    #[test]
    fn test_serialized_shape() {
        let raw = save_with(vec![tool("Dazzle Bind Upgraded", true)]);
        let projection = ToolProjector::project(Some(&raw), SchemaRegistry::global());
        let out = serde_json::to_value(&projection).unwrap();

        let mirror = out["tools"]
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["upgradeSetName"] == "Claw Mirror")
            .unwrap();
        assert_eq!(mirror["key"], "Dazzle Bind Upgraded");
        assert_eq!(mirror["isUpgradeSet"], true);
        assert_eq!(mirror["variants"].as_array().unwrap().len(), 2);
        assert_eq!(mirror["variantLabels"], json!(["Claw Mirror", "Claw Mirrors"]));
        assert!(mirror.get("upgradeSet").is_none());

        let compass = out["tools"].as_array().unwrap().iter().find(|t| t["key"] == "Compass").unwrap();
        assert!(compass.get("upgradeSetName").is_none());
        assert!(compass.get("variants").is_none());
        assert_eq!(compass["isUpgradeSet"], false);
        assert_eq!(out["stats"]["total"], 51);
        assert_eq!(out["otherTools"].as_array().unwrap().len(), 3);
    }
}
