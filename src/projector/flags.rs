//! 布尔标志投影器（Boss / 跳蚤 / 地图 / 能力 / 技能）
//! 缺失或假值统一归一化为 false

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::record::{RawValue, accessor};
use crate::schema::{FlagKind, SchemaEntry, SchemaRegistry};

/// 单个标志的投影结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagItem {
    pub key: &'static str,
    pub display: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub value: bool,
}

/// 标志统计（序列化时计数字段名随分组变化：defeated / saved / unlocked）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagStats {
    pub kind: FlagKind,
    pub total: usize,
    pub counted: usize,
}

impl Serialize for FlagStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry(self.kind.counted_label(), &self.counted)?;
        map.end()
    }
}

/// 分组投影结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagProjection {
    pub items: Vec<FlagItem>,
    pub stats: FlagStats,
}

impl FlagProjection {
    pub fn find(&self, key: &str) -> Option<&FlagItem> {
        self.items.iter().find(|item| item.key == key)
    }
}

/// 布尔标志投影器
pub struct FlagProjector;

impl FlagProjector {
    /// 按标志模式表投影
    pub fn project(record: Option<&RawValue>, flags: &'static [SchemaEntry]) -> Vec<FlagItem> {
        flags
            .iter()
            .map(|entry| FlagItem {
                key: entry.key,
                display: entry.display,
                icon: entry.icon,
                value: accessor::get_flag(record, entry.key),
            })
            .collect()
    }

    /// 投影指定分组并计算统计
    pub fn project_kind(
        record: Option<&RawValue>,
        registry: &SchemaRegistry,
        kind: FlagKind,
    ) -> FlagProjection {
        let items = Self::project(record, registry.flags(kind));
        let stats = FlagStats {
            kind,
            total: items.len(),
            counted: items.iter().filter(|item| item.value).count(),
        };
        debug!(
            "Projected {} flags: {}/{} {}",
            kind.list_name(),
            stats.counted,
            stats.total,
            kind.counted_label()
        );
        FlagProjection { items, stats }
    }
}
