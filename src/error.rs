//! 全局错误类型定义
//! 投影层本身不会失败（缺失数据一律取默认值），错误只出现在边缘：
//! 存档文档解码、模式表完整性校验、命令行读写

use std::io::Error as IoError;
use std::str::Utf8Error;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SilkstatError {
    // 文档解码相关错误
    #[error("存档内容不是合法的UTF-8：{0}")]
    Utf8Error(#[from] Utf8Error),
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("存档缺少必需的数据段：{0}")]
    MissingSection(String),

    // 模式表相关错误
    #[error("模式表 {list} 中存在重复键：{key}")]
    DuplicateSchemaKey { list: &'static str, key: &'static str },
    #[error("模式表引用了不存在的工具键（{context}）：{key}")]
    DanglingToolKey { context: String, key: &'static str },
    #[error("升级组定义无效（{set}）：{reason}")]
    InvalidUpgradeSet { set: &'static str, reason: String },

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type SilkResult<T> = Result<T, SilkstatError>;
