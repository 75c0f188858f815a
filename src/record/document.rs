//! 已解密存档文档
//! 解密本身由外部完成，这里只负责把解密后的JSON字节转换为原始值，并定位数据段

use std::fs;
use std::path::Path;

use tracing::debug;

use super::accessor;
use super::value::RawValue;
use crate::error::{SilkResult, SilkstatError};

/// 玩家数据段键名
pub const PLAYER_DATA_KEY: &str = "playerData";
/// 场景数据段键名
pub const SCENE_DATA_KEY: &str = "sceneData";

/// 已解密的完整存档
#[derive(Debug, Clone, PartialEq)]
pub struct SaveDocument {
    root: RawValue,
}

impl SaveDocument {
    /// 从解密后的JSON字节解析
    pub fn from_slice(bytes: &[u8]) -> SilkResult<Self> {
        let json_str = std::str::from_utf8(bytes)?;
        Self::from_json_str(json_str)
    }

    /// 从文件读取已解密的存档JSON
    pub fn from_path(path: impl AsRef<Path>) -> SilkResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_slice(&bytes)
    }

    /// 从JSON字符串解析
    pub fn from_json_str(json_str: &str) -> SilkResult<Self> {
        let root: RawValue = serde_json::from_str(json_str)?;
        debug!(
            "Save document decoded: {} bytes, top-level record = {}",
            json_str.len(),
            root.is_record()
        );
        Ok(Self { root })
    }

    /// 直接包装已有的原始值（例如来自WASM边界的关联映射）
    pub fn from_raw(root: RawValue) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &RawValue {
        &self.root
    }

    /// 玩家数据段（缺失时为 None）
    pub fn player_data(&self) -> Option<&RawValue> {
        accessor::get(Some(&self.root), PLAYER_DATA_KEY).filter(|v| !v.is_null())
    }

    /// 场景数据段（缺失时为 None）
    pub fn scene_data(&self) -> Option<&RawValue> {
        accessor::get(Some(&self.root), SCENE_DATA_KEY).filter(|v| !v.is_null())
    }

    /// 玩家数据段，缺失时报错
    pub fn require_player_data(&self) -> SilkResult<&RawValue> {
        self.player_data()
            .ok_or_else(|| SilkstatError::MissingSection(PLAYER_DATA_KEY.to_string()))
    }

    pub fn into_raw(self) -> RawValue {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_extracts_player_data() {
        let bytes = br#"{"playerData":{"version":"1.0.0","health":5},"sceneData":{}}"#;
        let doc = SaveDocument::from_slice(bytes).unwrap();

        let player = doc.player_data().unwrap();
        assert_eq!(accessor::get_str(Some(player), "version"), Some("1.0.0"));
        assert!(doc.scene_data().is_some());
    }

    #[test]
    fn test_invalid_utf8_and_json() {
        let err = SaveDocument::from_slice(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, SilkstatError::Utf8Error(_)));

        let err = SaveDocument::from_slice(b"{ not json").unwrap_err();
        assert!(matches!(err, SilkstatError::JsonError(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SaveDocument::from_path("/nonexistent/silkstat/user1.json").unwrap_err();
        assert!(matches!(err, SilkstatError::IoError(_)));
    }

    #[test]
    fn test_missing_player_data() {
        let doc = SaveDocument::from_slice(br#"{"playerData":null}"#).unwrap();
        assert!(doc.player_data().is_none());
        let err = doc.require_player_data().unwrap_err();
        assert!(matches!(err, SilkstatError::MissingSection(ref s) if s == "playerData"));
    }

    #[test]
    fn test_player_data_through_assoc_root() {
        let doc = SaveDocument::from_slice(br#"{"playerData":{"geo":120}}"#).unwrap();
        let assoc = SaveDocument::from_raw(doc.root().to_assoc());
        let player = assoc.require_player_data().unwrap();
        assert_eq!(accessor::get(Some(player), "geo").and_then(RawValue::as_i64), Some(120));
    }
}
