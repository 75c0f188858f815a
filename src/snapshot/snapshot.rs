//! 快照：一次分析的全部投影结果（不可变，借用原始记录）
use serde::Serialize;
use serde_json::Value;

use crate::config::GlobalConfig;
use crate::error::SilkResult;
use crate::projector::{EquipProjection, FieldSet, FlagProjection, ToolProjection};
use crate::record::RawValue;
use crate::schema::{FieldGroup, FlagKind};

/// 存档投影快照
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSnapshot<'a> {
    pub general: FieldSet<'a>,
    pub current: FieldSet<'a>,
    pub misc: FieldSet<'a>,
    pub tools: ToolProjection,
    pub bosses: FlagProjection,
    pub fleas: FlagProjection,
    pub maps: FlagProjection,
    pub abilities: FlagProjection,
    pub skills: FlagProjection,
    pub equipped_tools: EquipProjection<'a>,
    /// 原始输入记录
    pub raw: &'a RawValue,
}

impl<'a> ParsedSnapshot<'a> {
    pub fn fields(&self, group: FieldGroup) -> &FieldSet<'a> {
        match group {
            FieldGroup::General => &self.general,
            FieldGroup::Current => &self.current,
            FieldGroup::Misc => &self.misc,
        }
    }

    pub fn flags(&self, kind: FlagKind) -> &FlagProjection {
        match kind {
            FlagKind::Bosses => &self.bosses,
            FlagKind::Fleas => &self.fleas,
            FlagKind::Maps => &self.maps,
            FlagKind::Abilities => &self.abilities,
            FlagKind::Skills => &self.skills,
        }
    }

    /// 转换为JSON值（按配置决定是否保留 raw）
    pub fn to_json_value(&self, config: &GlobalConfig) -> SilkResult<Value> {
        let mut value = serde_json::to_value(self)?;
        if !config.include_raw {
            if let Value::Object(map) = &mut value {
                map.remove("raw");
            }
        }
        Ok(value)
    }

    /// 转换为JSON字符串
    pub fn to_json_string(&self, config: &GlobalConfig, pretty: bool) -> SilkResult<String> {
        let value = self.to_json_value(config)?;
        let json = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }
}
