//! 模式表数据模型定义
//! 仅存储声明式数据，无任何业务逻辑；进程启动时加载，之后只读

use serde::Serialize;

/// 模式条目：一个可识别的存档字段 / 标志 / 工具
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    /// 存档中的原始键名（逐字匹配，不做大小写转换）
    pub key: &'static str,
    /// 展示名称
    pub display: &'static str,
    /// 分类（工具颜色等），对投影逻辑不透明
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    /// 图标资源名，对投影逻辑不透明
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

impl SchemaEntry {
    pub const fn new(key: &'static str, display: &'static str) -> Self {
        Self {
            key,
            display,
            category: None,
            icon: None,
        }
    }

    pub const fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = Some(category);
        self
    }

    /// 工具条目（分类 + 图标）
    pub const fn tool(
        key: &'static str,
        display: &'static str,
        category: &'static str,
        icon: &'static str,
    ) -> Self {
        Self::new(key, display).with_category(category).with_icon(icon)
    }
}

/// 升级组：同一逻辑物品的多个目录条目（逐级升级或互斥变体），展示时折叠为一条
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeSet {
    /// 逻辑物品名称
    pub name: &'static str,
    /// 成员键（按解锁层级排序，2-3个）
    pub members: &'static [&'static str],
    /// 多个成员同时解锁时优先展示的键
    pub preferred: &'static str,
    /// 变体标签覆盖（互斥变体使用；长度与成员一致）
    pub variant_labels: Option<&'static [&'static str]>,
}

impl UpgradeSet {
    pub fn contains(&self, key: &str) -> bool {
        self.members.contains(&key)
    }
}

/// 装备别名类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EquipAliasKind {
    Skill,
    Ability,
}

/// 装备槽名称别名：技能 / 能力也可以占用工具装备槽
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipAlias {
    /// 装备槽中出现的原始名称
    pub name: &'static str,
    pub display: &'static str,
    pub icon: &'static str,
    pub kind: EquipAliasKind,
}

/// 简单字段分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    General,
    Current,
    Misc,
}

/// 布尔标志分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Bosses,
    Fleas,
    Maps,
    Abilities,
    Skills,
}

impl FlagKind {
    pub const ALL: [FlagKind; 5] = [
        FlagKind::Bosses,
        FlagKind::Fleas,
        FlagKind::Maps,
        FlagKind::Abilities,
        FlagKind::Skills,
    ];

    /// 统计字段名（defeated / saved / unlocked）
    pub fn counted_label(self) -> &'static str {
        match self {
            FlagKind::Bosses => "defeated",
            FlagKind::Fleas => "saved",
            FlagKind::Maps | FlagKind::Abilities | FlagKind::Skills => "unlocked",
        }
    }

    pub fn list_name(self) -> &'static str {
        match self {
            FlagKind::Bosses => "bosses",
            FlagKind::Fleas => "fleas",
            FlagKind::Maps => "maps",
            FlagKind::Abilities => "abilities",
            FlagKind::Skills => "skills",
        }
    }
}
