//! 工具模块：展示格式化
pub mod format;

// 导出核心接口
pub use self::format::{
    format_number, format_number_with, format_percent, format_play_time, game_mode_label,
    play_time_seconds,
};
