//! 原始存档数据模型
//! 外部解密步骤产出的键值结构，支持两种互不兼容的容器表示：
//! - Object：普通键值对象（字符串键）
//! - Map：关联映射（有序键值条目，键可以是任意值，按字符串键查找）
//! 两种表示可以在任意嵌套层级混用，本层只读不写

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// 原始存档值
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<RawValue>),
    Object(BTreeMap<String, RawValue>),
    Map(Vec<(RawValue, RawValue)>),
}

impl RawValue {
    /// 是否为空值
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// 是否为容器（两种记录表示之一）
    pub fn is_record(&self) -> bool {
        matches!(self, RawValue::Object(_) | RawValue::Map(_))
    }

    /// 真值判定：null / false / 0 / "" 为假，其余（含所有容器）为真
    pub fn is_truthy(&self) -> bool {
        match self {
            RawValue::Null => false,
            RawValue::Bool(b) => *b,
            RawValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            RawValue::String(s) => !s.is_empty(),
            RawValue::List(_) | RawValue::Object(_) | RawValue::Map(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// 标识比较：数值按数值大小比较（3 与 3.0 相等），其余按结构相等
    pub fn same_value(&self, other: &RawValue) -> bool {
        match (self, other) {
            (RawValue::Number(a), RawValue::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => a == b,
            },
            _ => self == other,
        }
    }

    /// 将所有普通对象递归转换为关联映射表示（与WASM边界产出的结构一致）
    pub fn to_assoc(&self) -> RawValue {
        match self {
            RawValue::Object(map) => RawValue::Map(
                map.iter()
                    .map(|(k, v)| (RawValue::String(k.clone()), v.to_assoc()))
                    .collect(),
            ),
            RawValue::Map(entries) => RawValue::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_assoc()))
                    .collect(),
            ),
            RawValue::List(items) => RawValue::List(items.iter().map(RawValue::to_assoc).collect()),
            other => other.clone(),
        }
    }
}

// ======== 类型转换 ========
impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => RawValue::Number(n),
            Value::String(s) => RawValue::String(s),
            Value::Array(items) => RawValue::List(items.into_iter().map(RawValue::from).collect()),
            Value::Object(map) => RawValue::Object(
                map.into_iter().map(|(k, v)| (k, RawValue::from(v))).collect(),
            ),
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n.into())
    }
}

// ======== 序列化 ========
impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Null => serializer.serialize_unit(),
            RawValue::Bool(b) => serializer.serialize_bool(*b),
            RawValue::Number(n) => n.serialize(serializer),
            RawValue::String(s) => serializer.serialize_str(s),
            RawValue::List(items) => serializer.collect_seq(items),
            RawValue::Object(map) => serializer.collect_map(map),
            // 键全部为字符串时按对象输出，否则退化为 [键, 值] 条目列表
            RawValue::Map(entries) => {
                if entries.iter().all(|(k, _)| matches!(k, RawValue::String(_))) {
                    serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
                } else {
                    serializer.collect_seq(entries)
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(RawValue::from)
    }
}
