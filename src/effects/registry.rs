//! Static per-effect metadata.
//!
//! The registry answers three questions about an effect id: does it need a
//! direction, how strong is it for item-pricing purposes, and what should
//! the UI say it does. It is built once at startup and read-only after.
//! Dispatch validity is a separate concern; an id can be described here and
//! still have no handler.

use rustc_hash::FxHashMap;

use super::kind::EffectKind;

/// Metadata for one effect kind.
#[derive(Clone, Copy, Debug)]
pub struct EffectInfo {
    /// Does the effect need an aim direction?
    pub aim: bool,
    /// Power rating for item pricing.
    pub power: u16,
    /// UI description.
    pub desc: &'static str,
}

/// Lookup table from effect id to metadata.
#[derive(Debug)]
pub struct EffectRegistry {
    entries: FxHashMap<u16, EffectInfo>,
}

impl EffectRegistry {
    /// The standard registry, one entry per declared kind.
    #[must_use]
    pub fn standard() -> Self {
        let mut entries = FxHashMap::default();
        for kind in EffectKind::ALL {
            entries.insert(kind.id(), info(kind));
        }
        Self { entries }
    }

    /// Metadata for an id; `None` outside `[1, MAX]`.
    #[must_use]
    pub fn lookup(&self, id: u16) -> Option<&EffectInfo> {
        self.entries.get(&id)
    }

    /// Does the effect with this id require aiming?
    #[must_use]
    pub fn aim(&self, id: u16) -> bool {
        self.lookup(id).map_or(false, |e| e.aim)
    }

    /// Power rating, 0 for invalid ids.
    #[must_use]
    pub fn power(&self, id: u16) -> u16 {
        self.lookup(id).map_or(0, |e| e.power)
    }

    /// UI description, `None` for invalid ids.
    #[must_use]
    pub fn desc(&self, id: u16) -> Option<&'static str> {
        self.lookup(id).map(|e| e.desc)
    }
}

const fn e(aim: bool, power: u16, desc: &'static str) -> EffectInfo {
    EffectInfo { aim, power, desc }
}

/// Metadata for one kind.
#[must_use]
pub fn info(kind: EffectKind) -> EffectInfo {
    use EffectKind as K;
    match kind {
        K::Poison => e(false, 0, "poisons you for 2d7+10 turns"),
        K::Blind => e(false, 0, "blinds you for 4d25+75 turns"),
        K::Scare => e(false, 0, "induces fear in you for 1d10+10 turns"),
        K::Confuse => e(false, 0, "confuses you for 4d5+10 turns"),
        K::Hallucinate => e(false, 0, "causes you to hallucinate"),
        K::Paralyze => e(false, 0, "induces paralysis for 1d5+5 turns"),
        K::Slow => e(false, 0, "slows you for 1d25+15 turns"),
        K::CurePoison => e(false, 1, "neutralizes poison"),
        K::CureBlindness => e(false, 4, "cures blindness"),
        K::CureParanoia => e(false, 2, "removes your fear"),
        K::CureConfusion => e(false, 4, "cures confusion"),
        K::CureMind => e(false, 8, "restores some mana and cures ailments of the mind"),
        K::CureBody => e(false, 7, "heals 30 hit points and cures ailments of the body"),
        K::CureLight => e(false, 3, "heals 20 hit points, some cut damage and confusion"),
        K::CureSerious => e(false, 6, "heals 40 hit points, cuts, blindness and confusion"),
        K::CureCritical => e(false, 9, "heals 60 hit points and cures most ailments"),
        K::CureFull => e(false, 12, "restores 35% of your hit points (minimum 300) and cures most ailments"),
        K::CureFull2 => e(false, 18, "heals 1200 hit points and cures most ailments"),
        K::CureTemp => e(false, 4, "cures blindness, confusion, poison, stunning and cuts"),
        K::Heal1 => e(false, 13, "heals 500 hit points and any cut damage"),
        K::Heal2 => e(false, 16, "heals 1000 hit points and any cut damage"),
        K::Heal3 => e(false, 14, "heals 500 hit points, stunning and cut damage"),
        K::GainExp => e(false, 25, "grants 100000 experience points"),
        K::LoseExp => e(false, 0, "drains a quarter of your experience"),
        K::RestoreExp => e(false, 8, "restores your experience"),
        K::RestoreMana => e(false, 20, "restores your mana"),
        K::GainStr => e(false, 22, "restores and increases your strength"),
        K::GainInt => e(false, 22, "restores and increases your intelligence"),
        K::GainWis => e(false, 22, "restores and increases your wisdom"),
        K::GainDex => e(false, 22, "restores and increases your dexterity"),
        K::GainCon => e(false, 22, "restores and increases your constitution"),
        K::GainAll => e(false, 30, "increases all your stats"),
        K::Brawn => e(false, 18, "raises your strength at the expense of a random attribute"),
        K::Intellect => e(false, 18, "raises your intelligence at the expense of a random attribute"),
        K::Contemplation => e(false, 18, "raises your wisdom at the expense of a random attribute"),
        K::Toughness => e(false, 18, "raises your constitution at the expense of a random attribute"),
        K::Nimbleness => e(false, 18, "raises your dexterity at the expense of a random attribute"),
        K::LoseStr => e(false, 0, "reduces your strength with damage 5d5"),
        K::LoseInt => e(false, 0, "reduces your intelligence with damage 5d5"),
        K::LoseWis => e(false, 0, "reduces your wisdom with damage 5d5"),
        K::LoseDex => e(false, 0, "reduces your dexterity with damage 5d5"),
        K::LoseCon => e(false, 0, "reduces your constitution with damage 5d5"),
        K::LoseCon2 => e(false, 0, "reduces your constitution with damage 10d10"),
        K::RestoreStr => e(false, 6, "restores your strength"),
        K::RestoreInt => e(false, 6, "restores your intelligence"),
        K::RestoreWis => e(false, 6, "restores your wisdom"),
        K::RestoreDex => e(false, 6, "restores your dexterity"),
        K::RestoreCon => e(false, 6, "restores your constitution"),
        K::CureNonorlybig => e(false, 30, "heals 5000 hit points, restores experience and stats and cures all maladies"),
        K::RestoreAll => e(false, 15, "restores all your stats"),
        K::RestoreStLev => e(false, 17, "restores all your stats and your experience"),
        K::TmdInfra => e(false, 5, "extends your infravision by 50 feet for 4d25+100 turns"),
        K::TmdSinvis => e(false, 7, "cures blindness and allows you to see invisible things for 2d6+12 turns"),
        K::TmdEsp => e(false, 10, "cures blindness and gives you telepathy for 9d9+24 turns"),
        K::Enlightenment => e(false, 22, "completely lights up and magically maps the level"),
        K::Enlightenment2 => e(false, 28, "increases your intelligence and wisdom, detects and maps everything in the area, and identifies all items in your pack"),
        K::Hero => e(false, 7, "restores 10 hit points, removes fear and grants you resistance to fear and +12 to-hit for 1d25+25 turns"),
        K::Shero => e(false, 9, "restores 30 hit points, removes fear and grants you resistance to fear and +24 to-hit for 1d25+25 turns"),
        K::ResistAcid => e(false, 4, "grants temporary resistance to acid for 1d10+10 turns"),
        K::ResistElec => e(false, 4, "grants temporary resistance to electricity for 1d10+10 turns"),
        K::ResistFire => e(false, 4, "grants temporary resistance to fire for 1d10+10 turns"),
        K::ResistCold => e(false, 4, "grants temporary resistance to cold for 1d10+10 turns"),
        K::ResistPois => e(false, 7, "grants temporary resistance to poison for 1d10+10 turns"),
        K::ResistAll => e(false, 15, "grants temporary resistance to acid, electricity, fire, cold and poison for 1d20+20 turns"),
        K::DetectTreasure => e(false, 6, "detects gold and objects nearby"),
        K::DetectTrap => e(false, 6, "detects traps nearby"),
        K::DetectDoorstair => e(false, 6, "detects doors and stairs nearby"),
        K::DetectInvis => e(false, 6, "detects invisible creatures nearby"),
        K::DetectEvil => e(false, 6, "detects evil creatures nearby"),
        K::DetectAll => e(false, 10, "detects treasure, traps, doors, stairs and all creatures nearby"),
        K::EnchantToHit => e(false, 4, "attempts to magically enhance a weapon's to-hit bonus"),
        K::EnchantToDam => e(false, 5, "attempts to magically enhance a weapon's to-dam bonus"),
        K::EnchantWeapon => e(false, 10, "attempts to magically enhance a weapon both to-hit and to-dam"),
        K::EnchantArmor => e(false, 4, "attempts to magically enhance a piece of armour"),
        K::EnchantArmor2 => e(false, 9, "attempts to magically enhance a piece of armour with high bonuses"),
        K::RestoreItem => e(false, 5, "restores an item to its original state"),
        K::Identify => e(false, 9, "reveals to you the extent of an item's magical powers"),
        K::RemoveCurse => e(false, 8, "removes a curse from a piece of equipment"),
        K::RemoveCurse2 => e(false, 12, "removes all curses from your equipment"),
        K::Light => e(false, 4, "lights up an area and inflicts 2d8 damage on light-sensitive creatures"),
        K::SummonMon => e(false, 0, "summons monsters at the current dungeon level"),
        K::SummonUndead => e(false, 0, "summons undead monsters at the current dungeon level"),
        K::TelePhase => e(false, 5, "teleports you randomly up to 10 squares away"),
        K::TeleLong => e(false, 6, "teleports you randomly up to 100 squares away"),
        K::TeleLevel => e(false, 15, "teleports you one level up or down"),
        K::Confusing => e(false, 8, "causes your next attack upon a monster to confuse it"),
        K::Mapping => e(false, 10, "maps the area around you"),
        K::Rune => e(false, 12, "inscribes a glyph of warding beneath you"),
        K::Acquire => e(false, 25, "creates a good object nearby"),
        K::Acquire2 => e(false, 30, "creates a few good items nearby"),
        K::AnnoyMon => e(false, 0, "awakens all nearby sleeping monsters and hastens all monsters within line of sight"),
        K::CreateTrap => e(false, 0, "creates traps surrounding you"),
        K::DestroyTdoors => e(false, 6, "destroys all traps and doors surrounding you"),
        K::Recharge => e(false, 11, "tries to recharge a wand or staff"),
        K::Banishment => e(false, 20, "removes all non-unique monsters represented by a chosen symbol from the level, dealing you damage in the process"),
        K::Darkness => e(false, 0, "darkens the nearby area and blinds you for 1d5+3 turns"),
        K::ProtEvil => e(false, 6, "grants you protection from evil for 1d25 plus 3 times your character level turns"),
        K::Satisfy => e(false, 7, "magically renders you well fed"),
        K::CurseWeapon => e(false, 0, "curses your currently wielded melee weapon"),
        K::CurseArmor => e(false, 0, "curses your currently worn body armour"),
        K::Blessing => e(false, 6, "increases your AC and to-hit bonus for 1d12+6 turns"),
        K::Blessing2 => e(false, 7, "increases your AC and to-hit bonus for 1d24+12 turns"),
        K::Blessing3 => e(false, 8, "increases your AC and to-hit bonus for 1d48+24 turns"),
        K::Recall => e(false, 15, "returns you from the dungeon or takes you to the dungeon after a short delay"),
        K::DeepDescent => e(false, 19, "teleports you up to five dungeon levels lower than the lowest point you have reached so far"),
        K::LosHaste => e(false, 0, "hastes all monsters within line of sight"),
        K::LosSleep => e(false, 8, "sleeps all monsters within line of sight"),
        K::LosSlow => e(false, 8, "slows all monsters within line of sight"),
        K::LosConf => e(false, 8, "confuses all monsters within line of sight"),
        K::LosKill => e(false, 25, "removes all non-unique monsters within 20 squares, dealing you damage in the process"),
        K::Earthquakes => e(false, 5, "causes an earthquake around you"),
        K::Destruction2 => e(false, 12, "destroys an area around you in the shape of a circle radius 15, and blinds you for 1d10+10 turns"),
        K::Illumination => e(false, 6, "lights up an area and inflicts 2d15 damage on light-sensitive creatures"),
        K::Clairvoyance => e(false, 23, "maps the entire level and detects nearby doors, stairs and traps"),
        K::Probing => e(false, 8, "gives you information on the health of all visible monsters"),
        K::StoneToMud => e(true, 6, "turns rock into mud"),
        K::Confuse2 => e(true, 5, "confuses the first monster in the spell's path"),
        K::Bizarre => e(true, 20, "does bizarre things"),
        K::StarBall => e(false, 20, "fires a ball of electricity in all directions, dealing 150 damage at its centre"),
        K::RageBlessResist => e(false, 21, "bestows upon you berserk rage, bless and resistance"),
        K::SleepII => e(false, 6, "puts to sleep the monsters around you"),
        K::RestoreLife => e(false, 8, "restores your experience to full"),
        K::Missile => e(true, 3, "fires a magic missile dealing 3d4 damage"),
        K::DispelEvil => e(false, 12, "deals five times your level's damage to all evil creatures that you can see"),
        K::DispelEvil60 => e(false, 9, "deals 60 damage to all evil creatures that you can see"),
        K::DispelUndead => e(false, 9, "deals 60 damage to all undead creatures that you can see"),
        K::DispelAll => e(false, 14, "deals 120 damage to all creatures that you can see"),
        K::Haste => e(false, 10, "hastens you for 2d10+20 turns"),
        K::Haste1 => e(false, 10, "hastens you for 1d20+20 turns"),
        K::Haste2 => e(false, 13, "hastens you for 1d75+75 turns"),
        K::FireBolt => e(true, 6, "creates a fire bolt with damage 9d8"),
        K::FireBolt2 => e(true, 7, "creates a fire bolt with damage 12d8"),
        K::FireBolt3 => e(true, 9, "creates a fire bolt with damage 16d8"),
        K::FireBolt72 => e(true, 8, "creates a fire ball with damage 72"),
        K::FireBall => e(true, 11, "creates a fire ball with damage 144"),
        K::FireBall2 => e(true, 10, "creates a large fire ball with damage 120"),
        K::FireBall200 => e(true, 13, "creates a large fire ball with damage 200"),
        K::ColdBolt => e(true, 5, "creates a frost bolt with damage 6d8"),
        K::ColdBolt2 => e(true, 7, "creates a frost bolt with damage 12d8"),
        K::ColdBall2 => e(true, 13, "creates a large frost ball with damage 200"),
        K::ColdBall50 => e(true, 7, "creates a frost ball with damage 50"),
        K::ColdBall100 => e(true, 9, "creates a frost ball with damage 100"),
        K::ColdBall160 => e(true, 12, "creates a large frost ball with damage 160"),
        K::AcidBolt => e(true, 5, "creates an acid bolt with damage 5d8"),
        K::AcidBolt2 => e(true, 7, "creates an acid bolt with damage 10d8"),
        K::AcidBolt3 => e(true, 8, "creates an acid bolt with damage 12d8"),
        K::AcidBall => e(true, 10, "creates an acid ball with damage 120"),
        K::ElecBolt => e(true, 5, "creates a lightning beam with damage 6d6"),
        K::ElecBall => e(true, 8, "creates a lightning ball with damage 64"),
        K::ElecBall2 => e(true, 14, "creates a large lightning ball with damage 250"),
        K::Arrow => e(true, 11, "fires a magical arrow dealing 150 damage"),
        K::RemFearPois => e(false, 3, "cures you of fear and poison"),
        K::StinkingCloud => e(true, 3, "fires a stinking cloud with damage 12"),
        K::DrainLife1 => e(true, 8, "drains up to 90 hit points of life from a target creature"),
        K::DrainLife2 => e(true, 10, "drains up to 120 hit points of life from a target creature"),
        K::DrainLife3 => e(true, 11, "drains up to 150 hit points of life from a target creature"),
        K::DrainLife4 => e(true, 14, "drains up to 250 hit points of life from a target creature"),
        K::Firebrand => e(false, 12, "brands bolts with fire, in an unbalanced fashion"),
        K::ManaBolt => e(true, 8, "fires a mana bolt with damage 12d8"),
        K::MonHeal => e(true, 0, "heals a single monster an amount of hit points"),
        K::MonHaste => e(true, 0, "hastes a single monster"),
        K::MonSlow => e(true, 4, "attempts to magically slow a single monster"),
        K::MonConfuse => e(true, 4, "attempts to magically confuse a single monster"),
        K::MonSleep => e(true, 4, "attempts to induce magical sleep in a single monster"),
        K::MonClone => e(true, 0, "hastes, heals and magically duplicates a single monster"),
        K::MonScare => e(true, 3, "attempts to induce magical fear in a single monster"),
        K::LightLine => e(true, 6, "lights up part of the dungeon in a straight line"),
        K::TeleOther => e(true, 11, "teleports a target monster away"),
        K::Disarming => e(true, 7, "destroys the first trap in the spell's path"),
        K::TdoorDest => e(true, 5, "destroys the first door in the spell's path"),
        K::Polymorph => e(true, 7, "polymorphs a monster into another kind of creature"),
        K::Starlight => e(false, 5, "fires a line of light in all directions, each one causing light-sensitive creatures 6d8 damage"),
        K::Starlight2 => e(false, 7, "fires a line of light in all directions, each one causing 10d8 damage"),
        K::Berserker => e(false, 10, "puts you in a berserker rage for 1d50+50 turns"),
        K::Wonder => e(true, 9, "creates random and unpredictable effects"),
        K::WandBreath => e(true, 12, "shoots a large ball of one of the base elements"),
        K::StaffMagi => e(false, 20, "restores both intelligence and mana to maximum"),
        K::StaffHoly => e(false, 25, "inflicts damage on evil creatures you can see, heals 50 hit points, cures all temporary effects and grants you protection from evil"),
        K::DrinkBreath => e(true, 8, "causes you to breathe either cold or flames for 80 damage"),
        K::DrinkGood => e(false, 0, "refreshes you"),
        K::DrinkDeath => e(false, 0, "inflicts 5000 damage"),
        K::DrinkRuin => e(false, 0, "inflicts 10d10 damage and reduces all your stats"),
        K::DrinkDetonate => e(false, 0, "inflicts 50d20 damage, severe cuts, and stuns you"),
        K::DrinkSalt => e(false, 0, "induces vomiting and paralysis for 4 turns, resulting in severe hunger but also curing poison"),
        K::FoodGood => e(false, 0, "tastes good"),
        K::FoodWaybread => e(false, 2, "restores 4d8 hit points and neutralizes poison"),
        K::FoodCrunch => e(false, 0, "is crunchy"),
        K::FoodWhisky => e(false, 0, "tastes great, but may confuse you"),
        K::FoodWine => e(false, 1, "tastes great and makes you feel bold"),
        K::ShroomEmergency => e(false, 5, "grants temporary resistance to fire and cold, cures 200 hit points, but also makes you hallucinate wildly"),
        K::ShroomTerror => e(false, 0, "speeds up you temporarily but also makes you mortally afraid"),
        K::ShroomStone => e(false, 4, "turns your skin to stone briefly, increasing your AC but slowing you down"),
        K::ShroomDebility => e(false, 3, "restores some mana but also reduces either your strength or constitution"),
        K::ShroomSprinting => e(false, 5, "hastes you for a while, but then makes you slower for a while afterward"),
        K::ShroomPurging => e(false, 4, "makes you very hungry but restores constitution and strength, and cures poison"),
        K::RingAcid => e(true, 11, "grants acid resistance for 1d20+20 turns and creates an acid ball of damage 70"),
        K::RingFlames => e(true, 11, "grants fire resistance for 1d20+20 turns and creates a fire ball of damage 80"),
        K::RingIce => e(true, 11, "grants cold resistance for 1d20+20 turns and creates a cold ball of damage 75"),
        K::RingLightning => e(true, 11, "grants electricity resistance for 1d20+20 turns and creates a lightning ball of damage 85"),
        K::DragonBlue => e(true, 18, "allows you to breathe lightning for 150 damage"),
        K::DragonGreen => e(true, 19, "allows you to breathe poison gas for 150 damage"),
        K::DragonRed => e(true, 20, "allows you to breathe fire for 200 damage"),
        K::DragonMultihued => e(true, 20, "allows you to breathe the elements for 250 damage"),
        K::DragonBronze => e(true, 19, "allows you to breathe confusion for 150 damage"),
        K::DragonGold => e(true, 19, "allows you to breathe sound for 150 damage"),
        K::DragonChaos => e(true, 23, "allows you to breathe chaos or disenchantment for 220 damage"),
        K::DragonLaw => e(true, 23, "allows you to breathe sound or shards for 230 damage"),
        K::DragonBalance => e(true, 24, "allows you to breathe balance for 250 damage"),
        K::DragonShining => e(true, 21, "allows you to breathe light or darkness for 200 damage"),
        K::DragonPower => e(true, 25, "allows you to breathe for 300 damage"),
        K::TrapDoor => e(false, 0, "a trap door which drops you down a level"),
        K::TrapPit => e(false, 0, "a pit"),
        K::TrapPitSpikes => e(false, 0, "a pit of spikes"),
        K::TrapPitPoison => e(false, 0, "a pit of poisoned spikes"),
        K::TrapRuneSummon => e(false, 0, "a rune which summons monsters"),
        K::TrapRuneTeleport => e(false, 0, "a rune which teleports"),
        K::TrapSpotFire => e(false, 0, "a magical fire trap"),
        K::TrapSpotAcid => e(false, 0, "a magical acid trap"),
        K::TrapDartSlow => e(false, 0, "a dart which slows you"),
        K::TrapDartLoseStr => e(false, 0, "a dart which drains your strength"),
        K::TrapDartLoseDex => e(false, 0, "a dart which drains your dexterity"),
        K::TrapDartLoseCon => e(false, 0, "a dart which drains your constitution"),
        K::TrapGasBlind => e(false, 0, "a gas which blinds you"),
        K::TrapGasConfuse => e(false, 0, "a gas which confuses you"),
        K::TrapGasPoison => e(false, 0, "a gas which poisons you"),
        K::TrapGasSleep => e(false, 0, "a gas which induces sleep"),
        K::Reserved => e(false, 0, "reserved"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_kind() {
        let reg = EffectRegistry::standard();
        for kind in EffectKind::ALL {
            assert!(
                reg.lookup(kind.id()).is_some(),
                "missing registry entry for {kind:?}"
            );
        }
    }

    #[test]
    fn test_lookup_rejects_out_of_range() {
        let reg = EffectRegistry::standard();
        assert!(reg.lookup(0).is_none());
        assert!(reg.lookup(EffectKind::MAX + 1).is_none());
        assert!(!reg.aim(0));
        assert_eq!(reg.power(EffectKind::MAX + 1), 0);
    }

    #[test]
    fn test_aim_flags() {
        let reg = EffectRegistry::standard();
        assert!(reg.aim(EffectKind::FireBolt.id()));
        assert!(reg.aim(EffectKind::Wonder.id()));
        assert!(!reg.aim(EffectKind::CureLight.id()));
        assert!(!reg.aim(EffectKind::StarBall.id()));
    }

    #[test]
    fn test_descriptions_present() {
        let reg = EffectRegistry::standard();
        for kind in EffectKind::ALL {
            assert!(!reg.desc(kind.id()).unwrap().is_empty());
        }
    }
}
