//! 装备槽别名表
//! 装备槽中可能出现技能名称（与工具共享装备槽，但图标资源不同）

use super::model::{EquipAlias, EquipAliasKind};

pub const EQUIP_ALIASES: &[EquipAlias] = &[
    EquipAlias {
        name: "Silk Spear",
        display: "Silkspear",
        icon: "Art_Rune__0002_silk_spear.png",
        kind: EquipAliasKind::Skill,
    },
    EquipAlias {
        name: "Thread Sphere",
        display: "Thread Storm",
        icon: "Art_Rune__0008_silk_sphere.png",
        kind: EquipAliasKind::Skill,
    },
    EquipAlias {
        name: "Parry",
        display: "Cross Stitch",
        icon: "Art_Rune__0014_cross_stitch.png",
        kind: EquipAliasKind::Skill,
    },
    EquipAlias {
        name: "Silk Dart",
        display: "Sharp Dart",
        icon: "Art_Rune__0017_silk_dart.png",
        kind: EquipAliasKind::Skill,
    },
    EquipAlias {
        name: "Silk Bomb",
        display: "Rune Rage",
        icon: "Art_Rune__0005_silk_bomb.png",
        kind: EquipAliasKind::Skill,
    },
    EquipAlias {
        name: "Finger Blades",
        display: "Pale Nails",
        icon: "Art_Rune__0011_finger_blades.png",
        kind: EquipAliasKind::Skill,
    },
];
