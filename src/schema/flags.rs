//! 布尔标志模式表（playerData 顶层布尔键）
//! 缺失与显式 false 等价

use super::model::SchemaEntry;

// Boss 击败标志
pub const BOSSES: &[SchemaEntry] = &[
    SchemaEntry::new("defeatedMossMother", "Moss Mother").with_icon("Moss Mother - Mossbone Mother.png"),
    SchemaEntry::new("defeatedBellBeast", "Bell Beast").with_icon("Bell Beast - Bone Beast.png"),
    SchemaEntry::new("defeatedLace1", "Lace 1 (Deep Docks)").with_icon("Lace.png"),
    SchemaEntry::new("defeatedSongGolem", "Fourth Chorus").with_icon("Fourth Chorus - Song Golem.png"),
    SchemaEntry::new("defeatedVampireGnatBoss", "Moorwing").with_icon("Moorwing - Vampire Gnat.png"),
    SchemaEntry::new("defeatedSplinterQueen", "Sister Splinter").with_icon("Sister Splinter - Splinter Queen.png"),
    SchemaEntry::new("skullKingDefeated", "Skull Tyrant 1").with_icon("Skull Tyrant - Skull King.png"),
    SchemaEntry::new("skullKingKilled", "Skull Tyrant 2").with_icon("Skull Tyrant - Skull King.png"),
    SchemaEntry::new("defeatedCoralDrillers", "Great Conchflies").with_icon("Great Conchfly - Coral Conch Driller Giant.png"),
    SchemaEntry::new("defeatedPhantom", "Phantom").with_icon("Phantom.png"),
    SchemaEntry::new("defeatedLastJudge", "The Last Judge").with_icon("Last Judge.png"),
    SchemaEntry::new("defeatedBoneFlyerGiant", "Savage Beastfly 1").with_icon("Savage Beastfly - Bone Flyer Giant.png"),
    SchemaEntry::new("defeatedBoneFlyerGiantGolemScene", "Savage Beastfly 2").with_icon("Savage Beastfly - Bone Flyer Giant.png"),
    SchemaEntry::new("defeatedCogworkDancers", "Cogwork Dancers").with_icon("Cogwork Dancers - Clockwork Dancer.png"),
    SchemaEntry::new("defeatedTrobbio", "Trobbio").with_icon("Trobbio #4267244.png"),
    SchemaEntry::new("defeatedSongChevalierBoss", "Second Sentinel").with_icon("Second Sentinel - Song Knight.png"),
    SchemaEntry::new("defeatedFirstWeaver", "First Sinner").with_icon("First Sinner - First Weaver.png"),
    SchemaEntry::new("defeatedRoachkeeperChef", "Disgraced Chef Lugoli").with_icon("Disgraced Chef Lugoli - Roachkeeper Chef.png"),
    SchemaEntry::new("defeatedBroodMother", "Broodmother").with_icon("Broodmother - Slab Fly Broodmother.png"),
    SchemaEntry::new("defeatedWispPyreEffigy", "Father of the Flame").with_icon("Father of the Flame - Wisp Pyre Effigy.png"),
    SchemaEntry::new("defeatedCoralDrillerSolo", "Raging Conchfly").with_icon("Great Conchfly - Coral Conch Driller Giant.png"),
    SchemaEntry::new("defeatedDockForemen", "Forebrothers Signis & Gron").with_icon("Forebrothers Signis & Gron - Dock Guard Thrower.png"),
    SchemaEntry::new("wardBossDefeated", "The Unravelled").with_icon("The Unravelled - Conductor Boss.png"),
    SchemaEntry::new("DefeatedSwampShaman", "Groal the Great").with_icon("Groal the Great - Swamp Shaman.png"),
    SchemaEntry::new("defeatedZapCoreEnemy", "Voltvyrm").with_icon("Voltvyrm - Zap Core Enemy.png"),
    SchemaEntry::new("defeatedLaceTower", "Lace 2 (The Cradle)").with_icon("Lace #4267252.png"),
    SchemaEntry::new("garmondBlackThreadDefeated", "Lost Garmond").with_icon("Lost Garmond - Garmond.png"),
    SchemaEntry::new("defeatedAntTrapper", "Gurr the Outcast").with_icon("Gurr the Outcast - Bone Hunter Trapper.png"),
    SchemaEntry::new("PinstressPeakBattleAccepted", "Pinstress").with_icon("Pinstress Boss.png"),
    SchemaEntry::new("defeatedTormentedTrobbio", "Tormented Trobbio").with_icon("Tormented Trobbio.png"),
    SchemaEntry::new("defeatedWhiteCloverstag", "Palestag").with_icon("Palestag - Cloverstag White.png"),
    SchemaEntry::new("defeatedAntQueen", "Skarrsinger Karmelita").with_icon("Skarrsinger Karmelita - Hunter Queen.png"),
    SchemaEntry::new("defeatedCoralKing", "Crust King Khann").with_icon("Crust King Khann - Coral King.png"),
    SchemaEntry::new("defeatedSeth", "Seth").with_icon("Shrine Guardian Seth - Seth.png"),
    SchemaEntry::new("defeatedFlowerQueen", "Nyleth").with_icon("Nyleth - Flower Queen.png"),
    SchemaEntry::new("defeatedCloverDancers", "Clover Dancers").with_icon("Clover Dancers - Clover Dancer.png"),
];

// 跳蚤营救标志（部分跳蚤以NPC事件标志记录）
pub const FLEAS: &[SchemaEntry] = &[
    SchemaEntry::new("SavedFlea_Ant_03", "Flea (Ant 03)"),
    SchemaEntry::new("SavedFlea_Belltown_04", "Flea (Belltown 04)"),
    SchemaEntry::new("SavedFlea_Bone_06", "Flea (Bone 06)"),
    SchemaEntry::new("SavedFlea_Bone_East_05", "Flea (Bone East 05)"),
    SchemaEntry::new("SavedFlea_Bone_East_10_Church", "Flea (Bone East Church)"),
    SchemaEntry::new("SavedFlea_Bone_East_17b", "Flea (Bone East 17b)"),
    SchemaEntry::new("SavedFlea_Coral_24", "Flea (Coral 24)"),
    SchemaEntry::new("SavedFlea_Coral_35", "Flea (Coral 35)"),
    SchemaEntry::new("SavedFlea_Crawl_06", "Flea (Crawl 06)"),
    SchemaEntry::new("SavedFlea_Dock_03d", "Flea (Dock 03d)"),
    SchemaEntry::new("SavedFlea_Dock_16", "Flea (Dock 16)"),
    SchemaEntry::new("SavedFlea_Dust_09", "Flea (Dust 09)"),
    SchemaEntry::new("SavedFlea_Dust_12", "Flea (Dust 12)"),
    SchemaEntry::new("SavedFlea_Greymoor_06", "Flea (Greymoor 06)"),
    SchemaEntry::new("SavedFlea_Greymoor_15b", "Flea (Greymoor 15b)"),
    SchemaEntry::new("SavedFlea_Library_01", "Flea (Library 01)"),
    SchemaEntry::new("SavedFlea_Library_09", "Flea (Library 09)"),
    SchemaEntry::new("SavedFlea_Peak_05c", "Flea (Peak 05c)"),
    SchemaEntry::new("SavedFlea_Shadow_10", "Flea (Shadow 10)"),
    SchemaEntry::new("SavedFlea_Shadow_28", "Flea (Shadow 28)"),
    SchemaEntry::new("SavedFlea_Shellwood_03", "Flea (Shellwood 03)"),
    SchemaEntry::new("SavedFlea_Slab_06", "Flea (Slab 06)"),
    SchemaEntry::new("SavedFlea_Slab_Cell", "Flea (Slab Cell)"),
    SchemaEntry::new("SavedFlea_Song_11", "Flea (Song 11)"),
    SchemaEntry::new("SavedFlea_Song_14", "Flea (Song 14)"),
    SchemaEntry::new("SavedFlea_Under_21", "Flea (Under 21)"),
    SchemaEntry::new("SavedFlea_Under_23", "Flea (Under 23)"),
    SchemaEntry::new("CaravanLechReturnedToCaravan", "Kratt"),
    SchemaEntry::new("tamedGiantFlea", "Huge Flea"),
    SchemaEntry::new("MetTroupeHunterWild", "Vog"),
];

// 地图购买标志
pub const MAPS: &[SchemaEntry] = &[
    SchemaEntry::new("HasMossGrottoMap", "Moss Grotto").with_icon("Shop_map_icon__0003_moss.png"),
    SchemaEntry::new("HasBoneforestMap", "The Marrow").with_icon("Shop_map_icon__0008_sinners.png"),
    SchemaEntry::new("HasDocksMap", "Deep Docks").with_icon("Shop_map_icon__0006_docks.png"),
    SchemaEntry::new("HasWildsMap", "Far Fields").with_icon("Shop_map_icon__0004_fields.png"),
    SchemaEntry::new("HasGreymoorMap", "Greymoor").with_icon("Shop_map_icon__0001_greymoor.png"),
    SchemaEntry::new("HasBellhartMap", "Bellhart").with_icon("Shop_map_icon__0007_bellhart.png"),
    SchemaEntry::new("HasShellwoodMap", "Shellwood").with_icon("Shop_map_icon__0002_shellwood.png"),
    SchemaEntry::new("HasHuntersNestMap", "Hunter's March").with_icon("Shop_map_icon__0000_hunters_march.png"),
    SchemaEntry::new("HasJudgeStepsMap", "Blasted Steps").with_icon("Shop_map_icon__0005_steps.png"),
    SchemaEntry::new("HasPeakMap", "Mount Fay").with_icon("Shop_map_icon__0008_generic_peak.png"),
    SchemaEntry::new("HasSlabMap", "The Slab").with_icon("Shop_map_icon__0008_slab.png"),
    SchemaEntry::new("HasSwampMap", "Bilewater").with_icon("Shop_map_icon__0004_bilewater.png"),
    SchemaEntry::new("HasAqueductMap", "Putrified Ducts").with_icon("Shop_map_icon__0008_crawl.png"),
    SchemaEntry::new("HasCoralMap", "Sands of Karak").with_icon("Shop_map_icon__0008_coral_cave.png"),
    SchemaEntry::new("HasWeavehomeMap", "Weavernest Atla").with_icon("Shop_map_icon__weavehome.png"),
    SchemaEntry::new("HasCrawlMap", "Wormways").with_icon("Shop_map_icon__0008_crawl.png"),
    SchemaEntry::new("HasDustpensMap", "Sinner's Road").with_icon("Shop_map_icon__0008_sinners.png"),
    SchemaEntry::new("HasSongGateMap", "Citadel - Grand Gate").with_icon("Shop_map_icon__0008_generic.png"),
    SchemaEntry::new("HasCitadelUnderstoreMap", "Citadel - Underworks").with_icon("Shop_map_icon_understore.png"),
    SchemaEntry::new("HasCogMap", "Citadel - Cogwork Core").with_icon("Shop_map_icon__0012_cog.png"),
    SchemaEntry::new("HasArboriumMap", "Citadel - Memorium").with_icon("Shop_map_icon__0012_arborium.png"),
    SchemaEntry::new("HasWardMap", "Citadel - Whiteward").with_icon("Shop_map_icon__0010_ward.png"),
    SchemaEntry::new("HasLibraryMap", "Citadel - Whispering Vault").with_icon("Shop_map_icon__0009_library.png"),
    SchemaEntry::new("HasHallsMap", "Citadel - Choral Chambers").with_icon("Shop_map_icon__0012_halls_new.png"),
    SchemaEntry::new("HasHangMap", "Citadel - High Halls").with_icon("Shop_map_icon__0011_conductor.png"),
    SchemaEntry::new("HasCradleMap", "The Cradle").with_icon("Shop_map_icon__0012_cradle.png"),
    SchemaEntry::new("HasAbyssMap", "The Abyss").with_icon("I_map_type_02.png"),
    SchemaEntry::new("HasCloverMap", "Verdania").with_icon("Shop_map_icon__0003_clover.png"),
];

// 移动能力
pub const ABILITIES: &[SchemaEntry] = &[
    SchemaEntry::new("hasDash", "Swift Step").with_icon("Ability_swift_step.png"),
    SchemaEntry::new("hasBrolly", "Drifter's Cloak").with_icon("Ability_drifters_cloak.png"),
    SchemaEntry::new("hasWalljump", "Cling Grip").with_icon("Ability_cling_grip.png"),
    SchemaEntry::new("hasNeedolin", "Needolin").with_icon("Ability_needolin.png"),
    SchemaEntry::new("hasHarpoonDash", "Clawline").with_icon("Ability_clawline.png"),
    SchemaEntry::new("hasDoubleJump", "Faydown Cloak").with_icon("Ability_faydown_cloak.png"),
    SchemaEntry::new("hasSuperJump", "Silk Soar").with_icon("Ability_silk_soar.png"),
    SchemaEntry::new("hasChargeSlash", "Needle Strike").with_icon("Ability_needle_strike.png"),
];

// 丝技
pub const SKILLS: &[SchemaEntry] = &[
    SchemaEntry::new("hasNeedleThrow", "Silkspear").with_icon("Art_Rune__0002_silk_spear.png"),
    SchemaEntry::new("hasThreadSphere", "Thread Storm").with_icon("Art_Rune__0008_silk_sphere.png"),
    SchemaEntry::new("hasParry", "Cross Stitch").with_icon("Art_Rune__0014_cross_stitch.png"),
    SchemaEntry::new("hasSilkCharge", "Sharpdart").with_icon("Art_Rune__0017_silk_dart.png"),
    SchemaEntry::new("hasSilkBomb", "Rune Rage").with_icon("Art_Rune__0005_silk_bomb.png"),
    SchemaEntry::new("hasSilkBossNeedle", "Pale Nails").with_icon("Art_Rune__0011_finger_blades.png"),
];
