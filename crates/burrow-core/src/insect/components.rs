//! Per-variant state carried by ants and bees.
//!
//! [`AntState`] and [`BeeState`] hold everything that changes during a game
//! beyond health and position: doubled damage, the contained ant of a
//! container, cooldowns, shot counters and status timers.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::kinds::{AntKind, BeeKind};
use super::InsectId;

bitflags! {
    /// Capabilities of an ant variant.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AntTraits: u8 {
        /// Bees in the same place are stopped and sting this ant.
        const BLOCKS_PATH = 1;
        /// Survives being placed in water.
        const WATERPROOF = 1 << 1;
        /// May hold one non-container ant.
        const CONTAINER = 1 << 2;
    }
}

/// Temporary bee conditions, each with its own countdown.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeeStatus {
    /// Acts only on even turns while active.
    Slowed = 0,
    /// Walks back toward the hive while active.
    Scared = 1,
}

impl BeeStatus {
    /// Number of status kinds.
    pub const COUNT: usize = 2;

    /// All statuses, in timer-array order.
    pub const ALL: [Self; Self::COUNT] = [Self::Slowed, Self::Scared];

    /// Index of this status in a bee's timer array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Mutable state of a single ant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntState {
    kind: AntKind,
    pub(crate) damage: f32,
    doubled: bool,
    /// Ant held by this container. Always `None` for non-containers.
    pub(crate) contained: Option<InsectId>,
    /// Turns left before a hungry ant may chew again.
    pub(crate) cooldown: u32,
    /// Insects hit with nonzero damage by a laser ant.
    pub(crate) shots_fired: u32,
}

impl AntState {
    /// Creates fresh state for an ant of the given kind.
    #[must_use]
    pub fn new(kind: AntKind) -> Self {
        Self {
            kind,
            damage: kind.profile().damage,
            doubled: false,
            contained: None,
            cooldown: 0,
            shots_fired: 0,
        }
    }

    /// The ant's variant.
    #[must_use]
    pub const fn kind(&self) -> AntKind {
        self.kind
    }

    /// Current damage, including any doubling.
    #[must_use]
    pub const fn damage(&self) -> f32 {
        self.damage
    }

    /// Whether this ant's damage has already been doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// The ant held inside this container, if any.
    #[must_use]
    pub const fn contained(&self) -> Option<InsectId> {
        self.contained
    }

    /// Remaining chew cooldown.
    #[must_use]
    pub const fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Number of nonzero laser hits so far.
    #[must_use]
    pub const fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Capability traits of this ant's variant.
    #[must_use]
    pub const fn traits(&self) -> AntTraits {
        self.kind.profile().traits
    }

    /// Returns `true` if bees cannot walk past this ant.
    #[must_use]
    pub const fn blocks_path(&self) -> bool {
        self.traits().contains(AntTraits::BLOCKS_PATH)
    }

    /// Returns `true` if this ant can hold another ant.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.traits().contains(AntTraits::CONTAINER)
    }

    /// Returns `true` if this ant survives water.
    #[must_use]
    pub const fn is_waterproof(&self) -> bool {
        self.traits().contains(AntTraits::WATERPROOF)
    }

    /// Returns `true` if this ant may store `other` right now.
    ///
    /// Only an empty container can store, and never another container.
    #[must_use]
    pub const fn can_contain(&self, other: &AntState) -> bool {
        self.is_container() && self.contained.is_none() && !other.is_container()
    }

    /// Doubles damage the first time it is called.
    ///
    /// Returns `true` if the damage changed.
    pub fn double(&mut self) -> bool {
        if self.doubled {
            return false;
        }
        self.damage *= 2.0;
        self.doubled = true;
        true
    }
}

/// Mutable state of a single bee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeeState {
    kind: BeeKind,
    damage: f32,
    statuses: [u32; BeeStatus::COUNT],
    once_scared: bool,
}

impl BeeState {
    /// Creates fresh state for a bee of the given kind.
    #[must_use]
    pub const fn new(kind: BeeKind) -> Self {
        Self {
            kind,
            damage: kind.damage(),
            statuses: [0; BeeStatus::COUNT],
            once_scared: false,
        }
    }

    /// The bee's variant.
    #[must_use]
    pub const fn kind(&self) -> BeeKind {
        self.kind
    }

    /// Damage dealt by one sting.
    #[must_use]
    pub const fn damage(&self) -> f32 {
        self.damage
    }

    /// Remaining turns of a status.
    #[must_use]
    pub const fn status(&self, status: BeeStatus) -> u32 {
        self.statuses[status.index()]
    }

    /// Returns `true` while the slow timer is running.
    #[must_use]
    pub const fn is_slowed(&self) -> bool {
        self.status(BeeStatus::Slowed) > 0
    }

    /// Returns `true` while the scare timer is running.
    #[must_use]
    pub const fn is_scared(&self) -> bool {
        self.status(BeeStatus::Scared) > 0
    }

    /// Returns `true` once the bee has ever been scared.
    #[must_use]
    pub const fn once_scared(&self) -> bool {
        self.once_scared
    }

    /// Sets the slow timer, replacing whatever was left of it.
    pub fn slow(&mut self, turns: u32) {
        self.statuses[BeeStatus::Slowed.index()] = turns;
    }

    /// Scares the bee for `turns` turns unless it has been scared before.
    ///
    /// Returns `true` if the scare took effect.
    pub fn scare(&mut self, turns: u32) -> bool {
        if self.once_scared {
            return false;
        }
        self.once_scared = true;
        self.statuses[BeeStatus::Scared.index()] = turns;
        true
    }

    /// Applies a status through the matching rule.
    ///
    /// Returns `true` if anything changed.
    pub fn apply(&mut self, status: BeeStatus, turns: u32) -> bool {
        match status {
            BeeStatus::Slowed => {
                self.slow(turns);
                true
            }
            BeeStatus::Scared => self.scare(turns),
        }
    }

    /// Counts a status down by one turn, stopping at zero.
    pub fn decay(&mut self, status: BeeStatus) {
        let timer = &mut self.statuses[status.index()];
        *timer = timer.saturating_sub(1);
    }

    /// Limits an incoming health reduction by this bee's damage cap.
    #[must_use]
    pub fn cap(&self, amount: f32) -> f32 {
        match self.kind.damage_cap() {
            Some(cap) => amount.min(cap),
            None => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ant_state_tests {
        use super::*;

        #[test]
        fn new_takes_profile_damage() {
            assert_eq!(AntState::new(AntKind::Thrower).damage(), 1.0);
            assert_eq!(AntState::new(AntKind::Fire).damage(), 3.0);
            assert_eq!(AntState::new(AntKind::Laser).damage(), 2.0);
            assert_eq!(AntState::new(AntKind::Harvester).damage(), 0.0);
        }

        #[test]
        fn double_applies_once() {
            let mut ant = AntState::new(AntKind::Thrower);

            assert!(ant.double());
            assert_eq!(ant.damage(), 2.0);
            assert!(ant.is_doubled());

            assert!(!ant.double());
            assert_eq!(ant.damage(), 2.0);
        }

        #[test]
        fn container_can_contain_plain_ant() {
            let bodyguard = AntState::new(AntKind::Bodyguard);
            let thrower = AntState::new(AntKind::Thrower);

            assert!(bodyguard.can_contain(&thrower));
            assert!(!thrower.can_contain(&bodyguard));
        }

        #[test]
        fn container_cannot_contain_container() {
            let bodyguard = AntState::new(AntKind::Bodyguard);
            let tank = AntState::new(AntKind::Tank);

            assert!(!bodyguard.can_contain(&tank));
            assert!(!tank.can_contain(&bodyguard));
        }

        #[test]
        fn full_container_cannot_contain() {
            let mut bodyguard = AntState::new(AntKind::Bodyguard);
            bodyguard.contained = Some(InsectId::new(9));

            assert!(!bodyguard.can_contain(&AntState::new(AntKind::Harvester)));
        }

        #[test]
        fn traits_follow_kind() {
            assert!(AntState::new(AntKind::Wall).blocks_path());
            assert!(!AntState::new(AntKind::Ninja).blocks_path());
            assert!(AntState::new(AntKind::Scuba).is_waterproof());
            assert!(!AntState::new(AntKind::Thrower).is_waterproof());
            assert!(AntState::new(AntKind::Tank).is_container());
        }
    }

    mod bee_state_tests {
        use super::*;

        #[test]
        fn new_bee_has_no_status() {
            let bee = BeeState::new(BeeKind::Bee);
            for status in BeeStatus::ALL {
                assert_eq!(bee.status(status), 0);
            }
            assert!(!bee.is_slowed());
            assert!(!bee.is_scared());
            assert!(!bee.once_scared());
        }

        #[test]
        fn slow_overwrites_timer() {
            let mut bee = BeeState::new(BeeKind::Bee);
            bee.slow(5);
            bee.decay(BeeStatus::Slowed);
            bee.slow(5);
            assert_eq!(bee.status(BeeStatus::Slowed), 5);
        }

        #[test]
        fn scare_applies_only_once() {
            let mut bee = BeeState::new(BeeKind::Bee);

            assert!(bee.scare(2));
            bee.decay(BeeStatus::Scared);
            assert!(!bee.scare(2));

            assert_eq!(bee.status(BeeStatus::Scared), 1);
            assert!(bee.once_scared());
        }

        #[test]
        fn decay_stops_at_zero() {
            let mut bee = BeeState::new(BeeKind::Bee);
            bee.decay(BeeStatus::Slowed);
            assert_eq!(bee.status(BeeStatus::Slowed), 0);
        }

        #[test]
        fn boss_caps_damage() {
            let boss = BeeState::new(BeeKind::Boss);
            assert_eq!(boss.cap(20.0), 8.0);
            assert_eq!(boss.cap(3.0), 3.0);

            let bee = BeeState::new(BeeKind::Bee);
            assert_eq!(bee.cap(20.0), 20.0);
        }

        #[test]
        fn serialization_roundtrip() {
            let mut bee = BeeState::new(BeeKind::Wasp);
            bee.scare(2);
            let json = serde_json::to_string(&bee).unwrap();
            let deserialized: BeeState = serde_json::from_str(&json).unwrap();
            assert_eq!(bee, deserialized);
        }
    }
}
