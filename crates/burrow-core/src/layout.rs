//! Tunnel layouts.
//!
//! A [`Layout`] creates the places of a game between the home base and the
//! hive. It hands every place it wants in play to a [`PlaceRegistrar`], which
//! registers it with the colony and, for bee entrances, links it to the hive.

use serde::{Deserialize, Serialize};

use crate::colony::Colony;
use crate::error::ColonyError;
use crate::place::{PlaceId, PlaceKind};

/// Registers places built by a layout.
#[derive(Debug)]
pub struct PlaceRegistrar<'a> {
    colony: &'a mut Colony,
    hive: PlaceId,
    entrances: Vec<PlaceId>,
}

impl<'a> PlaceRegistrar<'a> {
    /// Creates a registrar linking bee entrances to `hive`.
    #[must_use]
    pub fn new(colony: &'a mut Colony, hive: PlaceId) -> Self {
        Self {
            colony,
            hive,
            entrances: Vec::new(),
        }
    }

    /// Creates an unregistered place leading to `exit`.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::PlaceNotFound`] if `exit` does not exist.
    pub fn add_place(
        &mut self,
        name: impl Into<String>,
        kind: PlaceKind,
        exit: PlaceId,
    ) -> Result<PlaceId, ColonyError> {
        self.colony.add_place(name, kind, Some(exit))
    }

    /// Puts a place in play. Bee entrances get the hive as their entrance.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::PlaceNotFound`] if the place does not exist.
    pub fn register(&mut self, place: PlaceId, is_bee_entrance: bool) -> Result<(), ColonyError> {
        self.colony.register(place)?;
        if is_bee_entrance {
            self.colony.set_entrance(place, Some(self.hive))?;
            self.entrances.push(place);
        }
        Ok(())
    }

    /// Bee entrances registered so far.
    #[must_use]
    pub fn entrances(&self) -> &[PlaceId] {
        &self.entrances
    }

    /// Finishes registration, returning the bee entrances.
    #[must_use]
    pub fn into_entrances(self) -> Vec<PlaceId> {
        self.entrances
    }
}

/// Builds the places between the home base and the hive.
pub trait Layout {
    /// Creates and registers places leading to `base`.
    ///
    /// # Errors
    ///
    /// Returns the first colony error raised while building.
    fn build(&self, base: PlaceId, registrar: &mut PlaceRegistrar<'_>) -> Result<(), ColonyError>;
}

/// Parallel tunnels, optionally flooded at regular intervals.
///
/// Each tunnel runs from the home base to a bee entrance. Step `s` of tunnel
/// `t` is named `tunnel_{t}_{s}`, or `water_{t}_{s}` when `(s + 1)` is a
/// multiple of `moat_frequency`. A frequency of zero gives dry tunnels.
///
/// # Example
///
/// ```
/// use burrow_core::layout::TunnelLayout;
///
/// let wet = TunnelLayout::default();
/// assert_eq!((wet.tunnels, wet.length, wet.moat_frequency), (3, 9, 3));
/// assert_eq!(TunnelLayout::dry().moat_frequency, 0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelLayout {
    /// Number of tunnels.
    pub tunnels: usize,
    /// Places per tunnel.
    pub length: usize,
    /// Every this-many steps is water; zero for none.
    pub moat_frequency: usize,
}

impl TunnelLayout {
    /// Three wet tunnels of nine places.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tunnels: 3,
            length: 9,
            moat_frequency: 3,
        }
    }

    /// Three dry tunnels of nine places.
    #[must_use]
    pub const fn dry() -> Self {
        Self {
            moat_frequency: 0,
            ..Self::new()
        }
    }

    fn is_water(&self, step: usize) -> bool {
        self.moat_frequency != 0 && (step + 1) % self.moat_frequency == 0
    }
}

impl Default for TunnelLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for TunnelLayout {
    fn build(&self, base: PlaceId, registrar: &mut PlaceRegistrar<'_>) -> Result<(), ColonyError> {
        for tunnel in 0..self.tunnels {
            let mut exit = base;
            for step in 0..self.length {
                exit = if self.is_water(step) {
                    registrar.add_place(format!("water_{tunnel}_{step}"), PlaceKind::Water, exit)?
                } else {
                    registrar.add_place(
                        format!("tunnel_{tunnel}_{step}"),
                        PlaceKind::Tunnel,
                        exit,
                    )?
                };
                registrar.register(exit, step + 1 == self.length)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(layout: &TunnelLayout) -> (Colony, PlaceId, Vec<PlaceId>) {
        let mut colony = Colony::new();
        let hive = colony.add_place("Hive", PlaceKind::Hive, None).unwrap();
        colony.register(hive).unwrap();
        let base = colony
            .add_place("Ant Home Base", PlaceKind::HomeBase, None)
            .unwrap();
        let mut registrar = PlaceRegistrar::new(&mut colony, hive);
        layout.build(base, &mut registrar).unwrap();
        let entrances = registrar.into_entrances();
        (colony, hive, entrances)
    }

    #[test]
    fn wet_layout_names_and_kinds() {
        let (colony, _, _) = build(&TunnelLayout::new());

        assert_eq!(colony.places().count(), 1 + 3 * 9);
        assert_eq!(
            colony.place_named("tunnel_0_0").unwrap().kind(),
            PlaceKind::Tunnel
        );
        assert_eq!(
            colony.place_named("water_1_2").unwrap().kind(),
            PlaceKind::Water
        );
        assert!(colony.place_named("tunnel_1_2").is_none());
        assert!(colony.place_named("water_2_8").is_some());
    }

    #[test]
    fn dry_layout_has_no_water() {
        let (colony, _, _) = build(&TunnelLayout::dry());
        assert!(colony.places().all(|p| p.kind() != PlaceKind::Water));
    }

    #[test]
    fn last_step_is_bee_entrance() {
        let layout = TunnelLayout {
            tunnels: 2,
            length: 4,
            moat_frequency: 0,
        };
        let (colony, hive, entrances) = build(&layout);

        let names: Vec<_> = entrances
            .iter()
            .map(|id| colony.place(*id).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["tunnel_0_3", "tunnel_1_3"]);
        for id in entrances {
            assert_eq!(colony.place(id).unwrap().entrance(), Some(hive));
        }
    }

    #[test]
    fn tunnels_lead_to_base() {
        let (colony, _, _) = build(&TunnelLayout::dry());
        let first = colony.place_named("tunnel_2_0").unwrap();
        let base = colony.place(first.exit().unwrap()).unwrap();
        assert_eq!(base.kind(), PlaceKind::HomeBase);

        let second = colony.place_named("tunnel_2_1").unwrap();
        assert_eq!(second.exit(), Some(first.id()));
    }

    #[test]
    fn serialization_roundtrip() {
        let layout = TunnelLayout::dry();
        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: TunnelLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, deserialized);
    }
}
