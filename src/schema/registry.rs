//! 模式注册表
//! 汇总全部声明式模式表，并预先构建查找索引；全局实例进程内唯一、只读

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::equip::EQUIP_ALIASES;
use super::fields::{CURRENT_FIELDS, GENERAL_FIELDS, MISC_FIELDS};
use super::flags::{ABILITIES, BOSSES, FLEAS, MAPS, SKILLS};
use super::model::{EquipAlias, FieldGroup, FlagKind, SchemaEntry, UpgradeSet};
use super::tools::{OTHER_TOOLS, TOOLS, UPGRADE_SETS};
use crate::error::{SilkResult, SilkstatError};

/// 全部模式表（纯数据，可整体替换用于测试或新版本存档）
#[derive(Debug, Clone, Copy)]
pub struct SchemaLists {
    pub general: &'static [SchemaEntry],
    pub current: &'static [SchemaEntry],
    pub misc: &'static [SchemaEntry],
    pub tools: &'static [SchemaEntry],
    pub bosses: &'static [SchemaEntry],
    pub fleas: &'static [SchemaEntry],
    pub maps: &'static [SchemaEntry],
    pub abilities: &'static [SchemaEntry],
    pub skills: &'static [SchemaEntry],
    pub upgrade_sets: &'static [UpgradeSet],
    pub other_tools: &'static [&'static str],
    pub equip_aliases: &'static [EquipAlias],
}

impl SchemaLists {
    /// 内置模式表
    pub const BUILTIN: SchemaLists = SchemaLists {
        general: GENERAL_FIELDS,
        current: CURRENT_FIELDS,
        misc: MISC_FIELDS,
        tools: TOOLS,
        bosses: BOSSES,
        fleas: FLEAS,
        maps: MAPS,
        abilities: ABILITIES,
        skills: SKILLS,
        upgrade_sets: UPGRADE_SETS,
        other_tools: OTHER_TOOLS,
        equip_aliases: EQUIP_ALIASES,
    };
}

impl Default for SchemaLists {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// 全局模式注册表实例
static GLOBAL_REGISTRY: Lazy<SchemaRegistry> = Lazy::new(|| {
    let registry = SchemaRegistry::new(SchemaLists::BUILTIN);
    if let Err(e) = registry.validate() {
        warn!("Built-in schema failed integrity check: {}", e);
    }
    debug!(
        "Schema registry initialized: {} tools, {} upgrade sets, {} flag lists",
        registry.tools().len(),
        registry.upgrade_sets().len(),
        FlagKind::ALL.len()
    );
    registry
});

/// 模式注册表（模式表 + 查找索引）
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    lists: SchemaLists,
    tool_index: HashMap<&'static str, &'static SchemaEntry>,
    alias_index: HashMap<&'static str, &'static EquipAlias>,
    set_index: HashMap<&'static str, &'static UpgradeSet>,
    other_index: HashSet<&'static str>,
}

impl SchemaRegistry {
    /// 基于模式表构建注册表（重复键以首次出现为准）
    pub fn new(lists: SchemaLists) -> Self {
        let mut tool_index = HashMap::with_capacity(lists.tools.len());
        for entry in lists.tools {
            tool_index.entry(entry.key).or_insert(entry);
        }

        let mut alias_index = HashMap::with_capacity(lists.equip_aliases.len());
        for alias in lists.equip_aliases {
            alias_index.entry(alias.name).or_insert(alias);
        }

        let mut set_index = HashMap::new();
        for set in lists.upgrade_sets {
            for member in set.members {
                set_index.entry(*member).or_insert(set);
            }
        }

        let other_index = lists.other_tools.iter().copied().collect();

        Self {
            lists,
            tool_index,
            alias_index,
            set_index,
            other_index,
        }
    }

    /// 获取全局注册表（内置模式表，首次访问时初始化）
    pub fn global() -> &'static SchemaRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn lists(&self) -> &SchemaLists {
        &self.lists
    }

    pub fn fields(&self, group: FieldGroup) -> &'static [SchemaEntry] {
        match group {
            FieldGroup::General => self.lists.general,
            FieldGroup::Current => self.lists.current,
            FieldGroup::Misc => self.lists.misc,
        }
    }

    pub fn flags(&self, kind: FlagKind) -> &'static [SchemaEntry] {
        match kind {
            FlagKind::Bosses => self.lists.bosses,
            FlagKind::Fleas => self.lists.fleas,
            FlagKind::Maps => self.lists.maps,
            FlagKind::Abilities => self.lists.abilities,
            FlagKind::Skills => self.lists.skills,
        }
    }

    pub fn tools(&self) -> &'static [SchemaEntry] {
        self.lists.tools
    }

    pub fn upgrade_sets(&self) -> &'static [UpgradeSet] {
        self.lists.upgrade_sets
    }

    pub fn other_tools(&self) -> &'static [&'static str] {
        self.lists.other_tools
    }

    pub fn tool(&self, key: &str) -> Option<&'static SchemaEntry> {
        self.tool_index.get(key).copied()
    }

    pub fn equip_alias(&self, name: &str) -> Option<&'static EquipAlias> {
        self.alias_index.get(name).copied()
    }

    pub fn upgrade_set_of(&self, key: &str) -> Option<&'static UpgradeSet> {
        self.set_index.get(key).copied()
    }

    pub fn is_other_tool(&self, key: &str) -> bool {
        self.other_index.contains(key)
    }

    /// 模式表完整性校验，返回发现的第一个缺陷
    pub fn validate(&self) -> SilkResult<()> {
        let named_lists: [(&'static str, &'static [SchemaEntry]); 9] = [
            ("general", self.lists.general),
            ("current", self.lists.current),
            ("misc", self.lists.misc),
            ("tools", self.lists.tools),
            ("bosses", self.lists.bosses),
            ("fleas", self.lists.fleas),
            ("maps", self.lists.maps),
            ("abilities", self.lists.abilities),
            ("skills", self.lists.skills),
        ];
        for (list, entries) in named_lists {
            Self::check_unique(list, entries.iter().map(|e| e.key))?;
        }
        Self::check_unique("equip_aliases", self.lists.equip_aliases.iter().map(|a| a.name))?;
        Self::check_unique("other_tools", self.lists.other_tools.iter().copied())?;
        Self::check_unique("upgrade_sets", self.lists.upgrade_sets.iter().map(|s| s.name))?;

        let mut owner: HashMap<&'static str, &'static str> = HashMap::new();
        for set in self.lists.upgrade_sets {
            if !(2..=3).contains(&set.members.len()) {
                return Err(SilkstatError::InvalidUpgradeSet {
                    set: set.name,
                    reason: format!("expected 2-3 members, found {}", set.members.len()),
                });
            }
            if !set.contains(set.preferred) {
                return Err(SilkstatError::InvalidUpgradeSet {
                    set: set.name,
                    reason: format!("preferred key {} is not a member", set.preferred),
                });
            }
            if let Some(labels) = set.variant_labels {
                if labels.len() != set.members.len() {
                    return Err(SilkstatError::InvalidUpgradeSet {
                        set: set.name,
                        reason: format!(
                            "{} variant labels for {} members",
                            labels.len(),
                            set.members.len()
                        ),
                    });
                }
            }
            for &member in set.members {
                if self.tool(member).is_none() {
                    return Err(SilkstatError::DanglingToolKey {
                        context: format!("upgrade set {}", set.name),
                        key: member,
                    });
                }
                if let Some(previous) = owner.insert(member, set.name) {
                    return Err(SilkstatError::InvalidUpgradeSet {
                        set: set.name,
                        reason: format!("{} already belongs to {}", member, previous),
                    });
                }
            }
        }

        for &key in self.lists.other_tools {
            if self.tool(key).is_none() {
                return Err(SilkstatError::DanglingToolKey {
                    context: "other tools".to_string(),
                    key,
                });
            }
        }

        Ok(())
    }

    fn check_unique(
        list: &'static str,
        keys: impl Iterator<Item = &'static str>,
    ) -> SilkResult<()> {
        let mut seen = HashSet::new();
        for key in keys {
            if !seen.insert(key) {
                return Err(SilkstatError::DuplicateSchemaKey { list, key });
            }
        }
        Ok(())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new(SchemaLists::BUILTIN)
    }
}
