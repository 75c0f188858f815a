//! 简单字段投影器
//! 按模式表顺序逐项读取原始值（不做类型转换，转换由使用方负责）

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::record::{RawValue, accessor};
use crate::schema::SchemaEntry;

/// 单个字段的投影结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedField<'a> {
    #[serde(skip)]
    pub key: &'static str,
    /// 原始值，缺失时为 None
    pub value: Option<&'a RawValue>,
    pub display: &'static str,
}

/// 有序字段集合（键 → 字段）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSet<'a> {
    fields: Vec<ParsedField<'a>>,
}

impl<'a> FieldSet<'a> {
    pub fn get(&self, key: &str) -> Option<&ParsedField<'a>> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// 直接取原始值
    pub fn value(&self, key: &str) -> Option<&'a RawValue> {
        self.get(key).and_then(|f| f.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParsedField<'a>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FieldSet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(field.key, field)?;
        }
        map.end()
    }
}

/// 简单字段投影器
pub struct FieldProjector;

impl FieldProjector {
    /// 按模式表投影字段，永不失败
    pub fn project<'a>(record: Option<&'a RawValue>, schema: &'static [SchemaEntry]) -> FieldSet<'a> {
        let fields = schema
            .iter()
            .map(|entry| ParsedField {
                key: entry.key,
                value: accessor::get(record, entry.key),
                display: entry.display,
            })
            .collect();
        FieldSet { fields }
    }
}
