//! 纯文本摘要渲染（命令行 summary 输出）
use crate::config::GlobalConfig;
use crate::projector::{EquippedToolInfo, FieldSet};
use crate::record::RawValue;
use crate::schema::FlagKind;
use crate::utils::{format_number_with, format_percent, format_play_time, game_mode_label, play_time_seconds};

use super::snapshot::ParsedSnapshot;

const MISSING: &str = "-";

/// 渲染快照摘要
pub fn render_summary(snapshot: &ParsedSnapshot<'_>, config: &GlobalConfig) -> String {
    let mut lines = Vec::new();

    lines.push("== General ==".to_string());
    render_fields(&mut lines, &snapshot.general, config);
    lines.push("== Current ==".to_string());
    render_fields(&mut lines, &snapshot.current, config);
    lines.push("== Misc ==".to_string());
    render_fields(&mut lines, &snapshot.misc, config);

    lines.push("== Progress ==".to_string());
    let tools = &snapshot.tools.stats;
    lines.push(format!(
        "Tools: {}/{} unlocked ({} seen, {} selected)",
        tools.unlocked, tools.total, tools.seen, tools.selected
    ));
    for kind in FlagKind::ALL {
        let stats = &snapshot.flags(kind).stats;
        lines.push(format!(
            "{}: {}/{} {}",
            flag_heading(kind),
            stats.counted,
            stats.total,
            kind.counted_label()
        ));
    }

    lines.push("== Equipped ==".to_string());
    let equip = &snapshot.equipped_tools;
    let crest = equip.crest_id.map(|id| render_raw(id, config)).unwrap_or_else(|| MISSING.to_string());
    lines.push(format!("Crest: {}", crest));
    if equip.is_empty() {
        lines.push("(nothing equipped)".to_string());
    }
    for tool in &equip.equipped_tools {
        lines.push(format!("- {}", render_equipped(tool)));
    }
    for tool in &equip.extra_equipped_tools {
        lines.push(format!("- {} [{}]", render_equipped(tool), tool.slot_name.unwrap_or(MISSING)));
    }

    lines.join("\n")
}

fn render_fields(lines: &mut Vec<String>, fields: &FieldSet<'_>, config: &GlobalConfig) {
    for field in fields.iter() {
        let rendered = match field.key {
            "playTime" => format_play_time(play_time_seconds(field.value)),
            "permadeathMode" => game_mode_label(field.value).to_string(),
            "completionPercentage" => field
                .value
                .and_then(RawValue::as_f64)
                .map(format_percent)
                .unwrap_or_else(|| MISSING.to_string()),
            _ => field
                .value
                .map(|value| render_raw(value, config))
                .unwrap_or_else(|| MISSING.to_string()),
        };
        lines.push(format!("{}: {}", field.display, rendered));
    }
}

fn render_raw(value: &RawValue, config: &GlobalConfig) -> String {
    match value {
        RawValue::Null => MISSING.to_string(),
        RawValue::Bool(true) => "Yes".to_string(),
        RawValue::Bool(false) => "No".to_string(),
        RawValue::Number(n) => match n.as_i64() {
            Some(i) => format_number_with(i, config.group_separator),
            None => n.to_string(),
        },
        RawValue::String(s) if s.is_empty() => MISSING.to_string(),
        RawValue::String(s) => s.clone(),
        RawValue::List(items) => format!("[{} items]", items.len()),
        RawValue::Object(_) | RawValue::Map(_) => "{...}".to_string(),
    }
}

fn render_equipped(tool: &EquippedToolInfo<'_>) -> String {
    format!("{} ({:?})", tool.display, tool.category)
}

fn flag_heading(kind: FlagKind) -> &'static str {
    match kind {
        FlagKind::Bosses => "Bosses",
        FlagKind::Fleas => "Fleas",
        FlagKind::Maps => "Maps",
        FlagKind::Abilities => "Abilities",
        FlagKind::Skills => "Skills",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::snapshot::project_all;
    use serde_json::json;

    #[test]
    fn test_render_summary() {
        let raw = RawValue::from(json!({
            "version": "1.0.28324",
            "permadeathMode": true,
            "completionPercentage": 99.99,
            "playTime": 3661.4,
            "geo": 1234567,
            "CurrentCrestID": "Hunter",
            "defeatedMossMother": true,
            "ToolEquips": { "savedData": [
                { "Name": "Hunter", "Data": { "Slots": [ { "EquippedTool": "Parry" } ] } },
            ] },
            "ExtraToolEquips": { "savedData": [
                { "Name": "Yellow Slot", "Data": { "EquippedTool": "Compass" } },
            ] },
        }));
        let snapshot = project_all(Some(&raw)).unwrap();
        let summary = render_summary(&snapshot, &ConfigManager::get_default());

        assert!(summary.contains("Game Version: 1.0.28324"));
        assert!(summary.contains("Game Mode: Steel Soul"));
        assert!(summary.contains("Completion: 100.0%"));
        assert!(summary.contains("Play Time: 01h 01m 01s"));
        assert!(summary.contains("Rosaries: 1,234,567"));
        assert!(summary.contains("Bosses: 1/36 defeated"));
        assert!(summary.contains("Tools: 0/51 unlocked"));
        assert!(summary.contains("Crest: Hunter"));
        assert!(summary.contains("- Cross Stitch (Skill)"));
        assert!(summary.contains("- Compass (Tool) [Yellow Slot]"));
        assert!(summary.contains("Respawn Area: -"));
    }

    #[test]
    fn test_custom_separator() {
        let raw = RawValue::from(json!({ "geo": 98765 }));
        let snapshot = project_all(Some(&raw)).unwrap();
        let config = ConfigManager::custom().group_separator(' ').build();
        let summary = render_summary(&snapshot, &config);

        assert!(summary.contains("Rosaries: 98 765"));
        assert!(summary.contains("Game Mode: Classic"));
        assert!(summary.contains("(nothing equipped)"));
    }
}
