//! 工具目录模式表
//! 对应 playerData.Tools.savedData，每个条目含 Name 与 Data.{IsUnlocked, HasBeenSeen, HasBeenSelected}

use super::model::{SchemaEntry, UpgradeSet};

pub const RED: &str = "Red";
pub const BLUE: &str = "Blue";
pub const YELLOW: &str = "Yellow";

/// 未知装备的占位图标
pub const FALLBACK_TOOL_ICON: &str = "T_straight_pin.png";

pub const TOOLS: &[SchemaEntry] = &[
    // 红色工具
    SchemaEntry::tool("Straight Pin", "Straight Pin", RED, "T_straight_pin.png"),
    SchemaEntry::tool("Tri Pin", "Threefold Pin", RED, "T_tri_pin.png"),
    SchemaEntry::tool("Sting Shard", "Sting Shard", RED, "T_sting_shard.png"),
    SchemaEntry::tool("Tack", "Tacks", RED, "T_tack.png"),
    SchemaEntry::tool("Harpoon", "Longpin", RED, "T_claw_javelin.png"),
    SchemaEntry::tool("Curve Claws", "Curveclaw", RED, "T_curve_claw.png"),
    SchemaEntry::tool("Curve Claws Upgraded", "Curvesickle", RED, "T_curve_claw_upgraded.png"),
    SchemaEntry::tool("Shakra Ring", "Throwing Ring", RED, "T_shakra_ring.png"),
    SchemaEntry::tool("Pimpilo", "Pimpillo", RED, "T_pimpilo.png"),
    SchemaEntry::tool("Conch Drill", "Conchcutter", RED, "T_Conch_Drill_Shot.png"),
    SchemaEntry::tool("WebShot Forge", "Silkshot (Forge Daughter)", RED, "_0002_T_web_shot_forge.png"),
    SchemaEntry::tool("WebShot Architect", "Silkshot (Twelfth Architect)", RED, "_0003_T_web_shot_architect.png"),
    SchemaEntry::tool("WebShot Weaver", "Silkshot (Mount Fay)", RED, "_0001_T_web_shot_forge_runes.png"),
    SchemaEntry::tool("Screw Attack", "Delver's Drill", RED, "T_Spine_head.png"),
    SchemaEntry::tool("Cogwork Saw", "Cogwork Wheel", RED, "T_cogwork_saw.png"),
    SchemaEntry::tool("Cogwork Flier", "Cogfly", RED, "T_cogwork_flier.png"),
    SchemaEntry::tool("Rosary Cannon", "Rosary Cannon", RED, "_0004_T_rosary_cannon_loaded.png"),
    SchemaEntry::tool("Flintstone", "Flintslate", RED, "Hornet_icon_0003_T_flintstone.png"),
    SchemaEntry::tool("Silk Snare", "Snare Setter", RED, "_0004_T_snare_setter.png"),
    SchemaEntry::tool("Flea Brew", "Flea Brew", RED, "T_flea_brew.png"),
    SchemaEntry::tool("Lifeblood Syringe", "Plasmium Phial", RED, "T_syringe_lifeblood.png"),
    SchemaEntry::tool("Extractor", "Needle Phial", RED, "T_Extractor.png"),
    SchemaEntry::tool("Lightning Rod", "Voltvessels", RED, "_0004_T_lightning__0001_1_venom.png"),
    // 蓝色工具
    SchemaEntry::tool("Mosscreep Tool 1", "Druid's Eye", BLUE, "T_mossmedal.png"),
    SchemaEntry::tool("Mosscreep Tool 2", "Druid's Eyes", BLUE, "T_mossmedal_second.png"),
    SchemaEntry::tool("Lava Charm", "Magma Bell", BLUE, "Hornet_T_lava_charm.png"),
    SchemaEntry::tool("Bell Bind", "Warding Bell", BLUE, "Hornet_icon_0001_T_bell_shield.png"),
    SchemaEntry::tool("Poison Pouch", "Pollip Pouch", BLUE, "T_poison_pouch.png"),
    SchemaEntry::tool("Fractured Mask", "Fractured Mask", BLUE, "Hornet_T_Fractured_Mask.png"),
    SchemaEntry::tool("Multibind", "Multibinder", BLUE, "T_multi_bind.png"),
    SchemaEntry::tool("White Ring", "Weavelight", BLUE, "T_icon_white_ring.png"),
    SchemaEntry::tool("Brolly Spike", "Sawtooth Circlet", BLUE, "T_brolly_spike.png"),
    SchemaEntry::tool("Quickbind", "Injector Band", BLUE, "T_quick_bind.png"),
    SchemaEntry::tool("Spool Extender", "Spool Extender", BLUE, "T_spool_bar_extender.png"),
    SchemaEntry::tool("Reserve Bind", "Reserve Bind", BLUE, "T_focus_spool.png"),
    SchemaEntry::tool("Dazzle Bind", "Claw Mirror", BLUE, "T_dazzle_bind.png"),
    SchemaEntry::tool("Dazzle Bind Upgraded", "Claw Mirrors", BLUE, "T_dazzle_bind_upg.png"),
    SchemaEntry::tool("Revenge Crystal", "Memory Crystal", BLUE, "T_revenge_crystal.png"),
    SchemaEntry::tool("Thief Claw", "Snitch Pick", BLUE, "Thief_Claw.png"),
    SchemaEntry::tool("Zap Imbuement", "Volt Filament", BLUE, "T_zap_imbuement.png"),
    SchemaEntry::tool("Quick Sling", "Quick Sling", BLUE, "T_quick_sling.png"),
    SchemaEntry::tool("Maggot Charm", "Wreath of Purity", BLUE, "poultice_pouch_icon.png"),
    SchemaEntry::tool("Longneedle", "Longclaw", BLUE, "T_longneedle.png"),
    SchemaEntry::tool("Wisp Lantern", "Wispfire Lantern", BLUE, "T_wisp_lantern.png"),
    SchemaEntry::tool("Flea Charm", "Egg of Flealia", BLUE, "Flea_Egg.png"),
    SchemaEntry::tool("Pinstress Tool", "Pin Badge", BLUE, "T_pinstress_tool.png"),
    // 黄色工具
    SchemaEntry::tool("Compass", "Compass", YELLOW, "T_Compass.png"),
    SchemaEntry::tool("Bone Necklace", "Shard Pendant", YELLOW, "Hornet_Bone_Necklace.png"),
    SchemaEntry::tool("Rosary Magnet", "Magnetite Brooch", YELLOW, "T_rosary_magnet.png"),
    SchemaEntry::tool("Weighted Anklet", "Weighted Belt", YELLOW, "T_weighted_anklet.png"),
    SchemaEntry::tool("Barbed Wire", "Barbed Bracelet", YELLOW, "T_barbed_wire.png"),
    SchemaEntry::tool("Dead Mans Purse", "Dead Bug's Purse", YELLOW, "T_dead_purse.png"),
    SchemaEntry::tool("Shell Satchel", "Shell Satchel", YELLOW, "T_shell_satchel.png"),
    SchemaEntry::tool("Magnetite Dice", "Magnetite Dice", YELLOW, "_0006_I_magnetite_dice.png"),
    SchemaEntry::tool("Scuttlebrace", "Scuttlebrace", YELLOW, "T_steel_spine.png"),
    SchemaEntry::tool("Wallcling", "Ascendant's Grip", YELLOW, "T_longneedle_old1.png"),
    SchemaEntry::tool("Musician Charm", "Spider Strings", YELLOW, "T_attunement_charm.png"),
    SchemaEntry::tool("Sprintmaster", "Silkspeed Anklets", YELLOW, "T_icon_sprintmaster.png"),
    SchemaEntry::tool("Thief Charm", "Thief's Mark", YELLOW, "Thief_Brooch.png"),
];

/// 升级组：逐级升级（基础款 → 升级款）与互斥的三种丝弹变体
pub const UPGRADE_SETS: &[UpgradeSet] = &[
    UpgradeSet {
        name: "Curveclaw",
        members: &["Curve Claws", "Curve Claws Upgraded"],
        preferred: "Curve Claws Upgraded",
        variant_labels: None,
    },
    UpgradeSet {
        name: "Silkshot",
        members: &["WebShot Forge", "WebShot Architect", "WebShot Weaver"],
        preferred: "WebShot Weaver",
        variant_labels: Some(&["Forge Daughter", "Twelfth Architect", "Mount Fay"]),
    },
    UpgradeSet {
        name: "Druid's Eye",
        members: &["Mosscreep Tool 1", "Mosscreep Tool 2"],
        preferred: "Mosscreep Tool 2",
        variant_labels: None,
    },
    UpgradeSet {
        name: "Claw Mirror",
        members: &["Dazzle Bind", "Dazzle Bind Upgraded"],
        preferred: "Dazzle Bind Upgraded",
        variant_labels: None,
    },
];

/// 不计入完成度统计的工具（消耗品 / 功能性道具）
pub const OTHER_TOOLS: &[&str] = &["Flea Brew", "Lifeblood Syringe", "Extractor"];
