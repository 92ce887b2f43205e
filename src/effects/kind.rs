//! Effect identifiers.
//!
//! Every magical or mechanical effect in the game is named here. The
//! numeric ids start at 1 (0 is "no effect" on item records) and are
//! stable: they appear in saved games and data files, so new effects are
//! appended before `Reserved`, never inserted.

use serde::{Deserialize, Serialize};

/// One effect kind. The discriminant is the wire id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum EffectKind {
    Poison = 1,
    Blind,
    Scare,
    Confuse,
    Hallucinate,
    Paralyze,
    Slow,
    CurePoison,
    CureBlindness,
    CureParanoia,
    CureConfusion,
    CureMind,
    CureBody,
    CureLight,
    CureSerious,
    CureCritical,
    CureFull,
    CureFull2,
    CureTemp,
    Heal1,
    Heal2,
    Heal3,
    GainExp,
    LoseExp,
    RestoreExp,
    RestoreMana,
    GainStr,
    GainInt,
    GainWis,
    GainDex,
    GainCon,
    GainAll,
    Brawn,
    Intellect,
    Contemplation,
    Toughness,
    Nimbleness,
    LoseStr,
    LoseInt,
    LoseWis,
    LoseDex,
    LoseCon,
    LoseCon2,
    RestoreStr,
    RestoreInt,
    RestoreWis,
    RestoreDex,
    RestoreCon,
    CureNonorlybig,
    RestoreAll,
    RestoreStLev,
    TmdInfra,
    TmdSinvis,
    TmdEsp,
    Enlightenment,
    Enlightenment2,
    Hero,
    Shero,
    ResistAcid,
    ResistElec,
    ResistFire,
    ResistCold,
    ResistPois,
    ResistAll,
    DetectTreasure,
    DetectTrap,
    DetectDoorstair,
    DetectInvis,
    DetectEvil,
    DetectAll,
    EnchantToHit,
    EnchantToDam,
    EnchantWeapon,
    EnchantArmor,
    EnchantArmor2,
    RestoreItem,
    Identify,
    RemoveCurse,
    RemoveCurse2,
    Light,
    SummonMon,
    SummonUndead,
    TelePhase,
    TeleLong,
    TeleLevel,
    Confusing,
    Mapping,
    Rune,
    Acquire,
    Acquire2,
    AnnoyMon,
    CreateTrap,
    DestroyTdoors,
    Recharge,
    Banishment,
    Darkness,
    ProtEvil,
    Satisfy,
    CurseWeapon,
    CurseArmor,
    Blessing,
    Blessing2,
    Blessing3,
    Recall,
    DeepDescent,
    LosHaste,
    LosSleep,
    LosSlow,
    LosConf,
    LosKill,
    Earthquakes,
    Destruction2,
    Illumination,
    Clairvoyance,
    Probing,
    StoneToMud,
    Confuse2,
    Bizarre,
    StarBall,
    RageBlessResist,
    SleepII,
    RestoreLife,
    Missile,
    DispelEvil,
    DispelEvil60,
    DispelUndead,
    DispelAll,
    Haste,
    Haste1,
    Haste2,
    FireBolt,
    FireBolt2,
    FireBolt3,
    FireBolt72,
    FireBall,
    FireBall2,
    FireBall200,
    ColdBolt,
    ColdBolt2,
    ColdBall2,
    ColdBall50,
    ColdBall100,
    ColdBall160,
    AcidBolt,
    AcidBolt2,
    AcidBolt3,
    AcidBall,
    ElecBolt,
    ElecBall,
    ElecBall2,
    Arrow,
    RemFearPois,
    StinkingCloud,
    DrainLife1,
    DrainLife2,
    DrainLife3,
    DrainLife4,
    Firebrand,
    ManaBolt,
    MonHeal,
    MonHaste,
    MonSlow,
    MonConfuse,
    MonSleep,
    MonClone,
    MonScare,
    LightLine,
    TeleOther,
    Disarming,
    TdoorDest,
    Polymorph,
    Starlight,
    Starlight2,
    Berserker,
    Wonder,
    WandBreath,
    StaffMagi,
    StaffHoly,
    DrinkBreath,
    DrinkGood,
    DrinkDeath,
    DrinkRuin,
    DrinkDetonate,
    DrinkSalt,
    FoodGood,
    FoodWaybread,
    FoodCrunch,
    FoodWhisky,
    FoodWine,
    ShroomEmergency,
    ShroomTerror,
    ShroomStone,
    ShroomDebility,
    ShroomSprinting,
    ShroomPurging,
    RingAcid,
    RingFlames,
    RingIce,
    RingLightning,
    DragonBlue,
    DragonGreen,
    DragonRed,
    DragonMultihued,
    DragonBronze,
    DragonGold,
    DragonChaos,
    DragonLaw,
    DragonBalance,
    DragonShining,
    DragonPower,
    TrapDoor,
    TrapPit,
    TrapPitSpikes,
    TrapPitPoison,
    TrapRuneSummon,
    TrapRuneTeleport,
    TrapSpotFire,
    TrapSpotAcid,
    TrapDartSlow,
    TrapDartLoseStr,
    TrapDartLoseDex,
    TrapDartLoseCon,
    TrapGasBlind,
    TrapGasConfuse,
    TrapGasPoison,
    TrapGasSleep,
    /// Declared but deliberately unimplemented; exists to exercise the
    /// unhandled-effect path.
    Reserved,
}

impl EffectKind {
    /// Number of declared effect kinds.
    pub const COUNT: usize = 227;

    /// Highest valid id.
    pub const MAX: u16 = Self::COUNT as u16;

    /// Every declared kind, in id order.
    pub const ALL: [EffectKind; Self::COUNT] = [
        EffectKind::Poison,
        EffectKind::Blind,
        EffectKind::Scare,
        EffectKind::Confuse,
        EffectKind::Hallucinate,
        EffectKind::Paralyze,
        EffectKind::Slow,
        EffectKind::CurePoison,
        EffectKind::CureBlindness,
        EffectKind::CureParanoia,
        EffectKind::CureConfusion,
        EffectKind::CureMind,
        EffectKind::CureBody,
        EffectKind::CureLight,
        EffectKind::CureSerious,
        EffectKind::CureCritical,
        EffectKind::CureFull,
        EffectKind::CureFull2,
        EffectKind::CureTemp,
        EffectKind::Heal1,
        EffectKind::Heal2,
        EffectKind::Heal3,
        EffectKind::GainExp,
        EffectKind::LoseExp,
        EffectKind::RestoreExp,
        EffectKind::RestoreMana,
        EffectKind::GainStr,
        EffectKind::GainInt,
        EffectKind::GainWis,
        EffectKind::GainDex,
        EffectKind::GainCon,
        EffectKind::GainAll,
        EffectKind::Brawn,
        EffectKind::Intellect,
        EffectKind::Contemplation,
        EffectKind::Toughness,
        EffectKind::Nimbleness,
        EffectKind::LoseStr,
        EffectKind::LoseInt,
        EffectKind::LoseWis,
        EffectKind::LoseDex,
        EffectKind::LoseCon,
        EffectKind::LoseCon2,
        EffectKind::RestoreStr,
        EffectKind::RestoreInt,
        EffectKind::RestoreWis,
        EffectKind::RestoreDex,
        EffectKind::RestoreCon,
        EffectKind::CureNonorlybig,
        EffectKind::RestoreAll,
        EffectKind::RestoreStLev,
        EffectKind::TmdInfra,
        EffectKind::TmdSinvis,
        EffectKind::TmdEsp,
        EffectKind::Enlightenment,
        EffectKind::Enlightenment2,
        EffectKind::Hero,
        EffectKind::Shero,
        EffectKind::ResistAcid,
        EffectKind::ResistElec,
        EffectKind::ResistFire,
        EffectKind::ResistCold,
        EffectKind::ResistPois,
        EffectKind::ResistAll,
        EffectKind::DetectTreasure,
        EffectKind::DetectTrap,
        EffectKind::DetectDoorstair,
        EffectKind::DetectInvis,
        EffectKind::DetectEvil,
        EffectKind::DetectAll,
        EffectKind::EnchantToHit,
        EffectKind::EnchantToDam,
        EffectKind::EnchantWeapon,
        EffectKind::EnchantArmor,
        EffectKind::EnchantArmor2,
        EffectKind::RestoreItem,
        EffectKind::Identify,
        EffectKind::RemoveCurse,
        EffectKind::RemoveCurse2,
        EffectKind::Light,
        EffectKind::SummonMon,
        EffectKind::SummonUndead,
        EffectKind::TelePhase,
        EffectKind::TeleLong,
        EffectKind::TeleLevel,
        EffectKind::Confusing,
        EffectKind::Mapping,
        EffectKind::Rune,
        EffectKind::Acquire,
        EffectKind::Acquire2,
        EffectKind::AnnoyMon,
        EffectKind::CreateTrap,
        EffectKind::DestroyTdoors,
        EffectKind::Recharge,
        EffectKind::Banishment,
        EffectKind::Darkness,
        EffectKind::ProtEvil,
        EffectKind::Satisfy,
        EffectKind::CurseWeapon,
        EffectKind::CurseArmor,
        EffectKind::Blessing,
        EffectKind::Blessing2,
        EffectKind::Blessing3,
        EffectKind::Recall,
        EffectKind::DeepDescent,
        EffectKind::LosHaste,
        EffectKind::LosSleep,
        EffectKind::LosSlow,
        EffectKind::LosConf,
        EffectKind::LosKill,
        EffectKind::Earthquakes,
        EffectKind::Destruction2,
        EffectKind::Illumination,
        EffectKind::Clairvoyance,
        EffectKind::Probing,
        EffectKind::StoneToMud,
        EffectKind::Confuse2,
        EffectKind::Bizarre,
        EffectKind::StarBall,
        EffectKind::RageBlessResist,
        EffectKind::SleepII,
        EffectKind::RestoreLife,
        EffectKind::Missile,
        EffectKind::DispelEvil,
        EffectKind::DispelEvil60,
        EffectKind::DispelUndead,
        EffectKind::DispelAll,
        EffectKind::Haste,
        EffectKind::Haste1,
        EffectKind::Haste2,
        EffectKind::FireBolt,
        EffectKind::FireBolt2,
        EffectKind::FireBolt3,
        EffectKind::FireBolt72,
        EffectKind::FireBall,
        EffectKind::FireBall2,
        EffectKind::FireBall200,
        EffectKind::ColdBolt,
        EffectKind::ColdBolt2,
        EffectKind::ColdBall2,
        EffectKind::ColdBall50,
        EffectKind::ColdBall100,
        EffectKind::ColdBall160,
        EffectKind::AcidBolt,
        EffectKind::AcidBolt2,
        EffectKind::AcidBolt3,
        EffectKind::AcidBall,
        EffectKind::ElecBolt,
        EffectKind::ElecBall,
        EffectKind::ElecBall2,
        EffectKind::Arrow,
        EffectKind::RemFearPois,
        EffectKind::StinkingCloud,
        EffectKind::DrainLife1,
        EffectKind::DrainLife2,
        EffectKind::DrainLife3,
        EffectKind::DrainLife4,
        EffectKind::Firebrand,
        EffectKind::ManaBolt,
        EffectKind::MonHeal,
        EffectKind::MonHaste,
        EffectKind::MonSlow,
        EffectKind::MonConfuse,
        EffectKind::MonSleep,
        EffectKind::MonClone,
        EffectKind::MonScare,
        EffectKind::LightLine,
        EffectKind::TeleOther,
        EffectKind::Disarming,
        EffectKind::TdoorDest,
        EffectKind::Polymorph,
        EffectKind::Starlight,
        EffectKind::Starlight2,
        EffectKind::Berserker,
        EffectKind::Wonder,
        EffectKind::WandBreath,
        EffectKind::StaffMagi,
        EffectKind::StaffHoly,
        EffectKind::DrinkBreath,
        EffectKind::DrinkGood,
        EffectKind::DrinkDeath,
        EffectKind::DrinkRuin,
        EffectKind::DrinkDetonate,
        EffectKind::DrinkSalt,
        EffectKind::FoodGood,
        EffectKind::FoodWaybread,
        EffectKind::FoodCrunch,
        EffectKind::FoodWhisky,
        EffectKind::FoodWine,
        EffectKind::ShroomEmergency,
        EffectKind::ShroomTerror,
        EffectKind::ShroomStone,
        EffectKind::ShroomDebility,
        EffectKind::ShroomSprinting,
        EffectKind::ShroomPurging,
        EffectKind::RingAcid,
        EffectKind::RingFlames,
        EffectKind::RingIce,
        EffectKind::RingLightning,
        EffectKind::DragonBlue,
        EffectKind::DragonGreen,
        EffectKind::DragonRed,
        EffectKind::DragonMultihued,
        EffectKind::DragonBronze,
        EffectKind::DragonGold,
        EffectKind::DragonChaos,
        EffectKind::DragonLaw,
        EffectKind::DragonBalance,
        EffectKind::DragonShining,
        EffectKind::DragonPower,
        EffectKind::TrapDoor,
        EffectKind::TrapPit,
        EffectKind::TrapPitSpikes,
        EffectKind::TrapPitPoison,
        EffectKind::TrapRuneSummon,
        EffectKind::TrapRuneTeleport,
        EffectKind::TrapSpotFire,
        EffectKind::TrapSpotAcid,
        EffectKind::TrapDartSlow,
        EffectKind::TrapDartLoseStr,
        EffectKind::TrapDartLoseDex,
        EffectKind::TrapDartLoseCon,
        EffectKind::TrapGasBlind,
        EffectKind::TrapGasConfuse,
        EffectKind::TrapGasPoison,
        EffectKind::TrapGasSleep,
        EffectKind::Reserved,
    ];

    /// Wire id of this kind.
    #[must_use]
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Look up a kind by wire id. Ids outside `[1, MAX]` are invalid.
    #[must_use]
    pub fn from_id(id: u16) -> Option<EffectKind> {
        if id == 0 {
            return None;
        }
        Self::ALL.get(id as usize - 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_from_one() {
        for (i, kind) in EffectKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, i + 1);
        }
    }

    #[test]
    fn test_from_id_round_trips() {
        for kind in EffectKind::ALL {
            assert_eq!(EffectKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(EffectKind::from_id(0), None);
        assert_eq!(EffectKind::from_id(EffectKind::MAX + 1), None);
    }

    #[test]
    fn test_known_anchors() {
        assert_eq!(EffectKind::Poison.id(), 1);
        assert_eq!(EffectKind::Wonder.id(), 175);
        assert_eq!(EffectKind::Reserved.id(), 227);
    }
}
