//! 展示格式化工具
//! 把原始数值转换为展示字符串（时长、千分位整数、百分比、游戏模式）

use crate::record::RawValue;

/// 游戏时长格式化：`HHh MMm SSs`（各段补零，小时位数随数值增长）
pub fn format_play_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}h {:02}m {:02}s", hours, minutes, secs)
}

/// 将存档中的游戏时长（浮点秒）规整为整数秒，缺失 / 非法 / 负值取 0
pub fn play_time_seconds(value: Option<&RawValue>) -> u64 {
    value
        .and_then(RawValue::as_f64)
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(|secs| secs.floor() as u64)
        .unwrap_or(0)
}

/// 千分位整数（默认逗号分隔）
pub fn format_number(value: i64) -> String {
    format_number_with(value, ',')
}

/// 千分位整数（自定义分隔符）
pub fn format_number_with(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// 百分比，保留一位小数（恰好居中时远离零取整）
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}%", rounded)
}

/// 游戏模式标签（permadeathMode 为真值时为钢魂模式）
pub fn game_mode_label(permadeath_mode: Option<&RawValue>) -> &'static str {
    if permadeath_mode.is_some_and(RawValue::is_truthy) {
        "Steel Soul"
    } else {
        "Classic"
    }
}
