//! Places of the tunnel topology.
//!
//! A [`Place`] is a node in a chain of tunnels. Each place has an optional
//! `exit` (toward the ant home base) and an optional `entrance` (toward the
//! hive). Places are owned by the [`Colony`](crate::colony::Colony) and refer to
//! each other by [`PlaceId`].
//!
//! A place holds any number of bees and at most one top-level ant. That ant
//! may itself be a container holding one more ant.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::insect::InsectId;

/// Index of a place inside its colony.
///
/// Place IDs are assigned in creation order and never reused.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaceId(usize);

impl PlaceId {
    /// Creates a `PlaceId` from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index of this place.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceId({})", self.0)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of terrain a place is.
///
/// The kind decides the placement rules applied by
/// [`Colony::add_insect`](crate::colony::Colony::add_insect).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaceKind {
    /// Dry tunnel segment. Anything may stand here.
    #[default]
    Tunnel,
    /// Flooded segment. Insects that are not waterproof drown on entry.
    Water,
    /// End of the tunnels. A bee entering it ends the game; ants may not enter.
    HomeBase,
    /// Where the bees wait before their wave is released.
    Hive,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tunnel => write!(f, "Tunnel"),
            Self::Water => write!(f, "Water"),
            Self::HomeBase => write!(f, "HomeBase"),
            Self::Hive => write!(f, "Hive"),
        }
    }
}

/// A node of the tunnel topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    id: PlaceId,
    name: String,
    kind: PlaceKind,
    /// Next place toward the home base.
    pub(crate) exit: Option<PlaceId>,
    /// Previous place toward the hive.
    pub(crate) entrance: Option<PlaceId>,
    /// Bees standing here, in arrival order.
    pub(crate) bees: Vec<InsectId>,
    /// Top-level ant slot.
    pub(crate) ant: Option<InsectId>,
}

impl Place {
    /// Creates an unlinked, empty place.
    #[must_use]
    pub fn new(id: PlaceId, name: impl Into<String>, kind: PlaceKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            exit: None,
            entrance: None,
            bees: Vec::new(),
            ant: None,
        }
    }

    /// Returns this place's ID.
    #[must_use]
    pub const fn id(&self) -> PlaceId {
        self.id
    }

    /// Returns this place's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns this place's terrain kind.
    #[must_use]
    pub const fn kind(&self) -> PlaceKind {
        self.kind
    }

    /// Returns `true` if this is the hive.
    #[must_use]
    pub const fn is_hive(&self) -> bool {
        matches!(self.kind, PlaceKind::Hive)
    }

    /// The place reached by leaving this one toward the home base.
    #[must_use]
    pub const fn exit(&self) -> Option<PlaceId> {
        self.exit
    }

    /// The place reached by leaving this one toward the hive.
    #[must_use]
    pub const fn entrance(&self) -> Option<PlaceId> {
        self.entrance
    }

    /// Bees currently standing here.
    #[must_use]
    pub fn bees(&self) -> &[InsectId] {
        &self.bees
    }

    /// The top-level ant, if any.
    #[must_use]
    pub const fn ant(&self) -> Option<InsectId> {
        self.ant
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_place_is_empty_and_unlinked() {
        let place = Place::new(PlaceId::new(3), "tunnel_0_0", PlaceKind::Tunnel);

        assert_eq!(place.id(), PlaceId::new(3));
        assert_eq!(place.name(), "tunnel_0_0");
        assert!(place.exit().is_none());
        assert!(place.entrance().is_none());
        assert!(place.bees().is_empty());
        assert!(place.ant().is_none());
    }

    #[test]
    fn only_hive_kind_is_hive() {
        assert!(Place::new(PlaceId::new(0), "Hive", PlaceKind::Hive).is_hive());
        assert!(!Place::new(PlaceId::new(1), "w", PlaceKind::Water).is_hive());
        assert!(!Place::new(PlaceId::new(2), "b", PlaceKind::HomeBase).is_hive());
    }

    #[test]
    fn display_uses_name() {
        let place = Place::new(PlaceId::new(0), "water_1_2", PlaceKind::Water);
        assert_eq!(format!("{place}"), "water_1_2");
        assert_eq!(format!("{:?}", PlaceId::new(7)), "PlaceId(7)");
    }

    #[test]
    fn serialization_roundtrip() {
        let place = Place::new(PlaceId::new(4), "tunnel_2_8", PlaceKind::Tunnel);
        let json = serde_json::to_string(&place).unwrap();
        let deserialized: Place = serde_json::from_str(&json).unwrap();
        assert_eq!(place, deserialized);
    }
}
