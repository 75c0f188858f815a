//! 异构访问器
//! 统一的读取原语：无论记录是普通对象还是关联映射，都通过同一入口按键取值。
//! 所有投影器、所有嵌套层级（工具条目、纹章条目、装备槽条目）都只经由这里读取

use super::value::RawValue;

/// 按键读取字段
///
/// - `record` 为 `None` / `Null` / 非容器值：返回 `None`
/// - 普通对象：直接按键查找
/// - 关联映射：按条目键（字符串）查找第一个匹配项
pub fn get<'a>(record: Option<&'a RawValue>, key: &str) -> Option<&'a RawValue> {
    match record? {
        RawValue::Object(map) => map.get(key),
        RawValue::Map(entries) => entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v),
        _ => None,
    }
}

/// 按路径逐层读取（每一层都重新判定表示方式）
pub fn get_path<'a>(record: Option<&'a RawValue>, path: &[&str]) -> Option<&'a RawValue> {
    path.iter().try_fold(record?, |current, key| get(Some(current), key))
}

/// 读取字符串字段，非字符串视为缺失
pub fn get_str<'a>(record: Option<&'a RawValue>, key: &str) -> Option<&'a str> {
    get(record, key).and_then(RawValue::as_str)
}

/// 读取列表字段，缺失或形状不符时返回空切片
pub fn get_list<'a>(record: Option<&'a RawValue>, key: &str) -> &'a [RawValue] {
    get(record, key).and_then(RawValue::as_list).unwrap_or(&[])
}

/// 读取布尔标志：缺失与假值等价，统一归一化为 false
pub fn get_flag(record: Option<&RawValue>, key: &str) -> bool {
    get(record, key).is_some_and(RawValue::is_truthy)
}

/// 读取 `<container>.savedData` 条目列表（Tools / ToolEquips / ExtraToolEquips 通用）
pub fn saved_data<'a>(record: Option<&'a RawValue>, container: &str) -> &'a [RawValue] {
    get_list(get(record, container), "savedData")
}
