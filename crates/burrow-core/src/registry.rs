//! Catalogue of deployable ant types.
//!
//! The registry is an ordered list of [`AntType`]s keyed by name. Deployment
//! commands name a type; the registry resolves it to an [`AntKind`] and its
//! food cost, and rejects types that are not available in this game.

use serde::{Deserialize, Serialize};

use crate::error::ColonyError;
use crate::insect::AntKind;

/// A deployable ant type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntType {
    /// Lookup name.
    pub name: String,
    /// Food needed to deploy one.
    pub food_cost: u32,
    /// Whether the type may be deployed.
    pub implemented: bool,
    /// Variant spawned on deployment.
    pub kind: AntKind,
}

impl AntType {
    /// The standard, deployable type of a variant.
    #[must_use]
    pub fn of(kind: AntKind) -> Self {
        let profile = kind.profile();
        Self {
            name: profile.name.to_string(),
            food_cost: profile.food_cost,
            implemented: true,
            kind,
        }
    }

    /// Marks the type as unavailable.
    #[must_use]
    pub fn unimplemented(mut self) -> Self {
        self.implemented = false;
        self
    }
}

/// Ordered set of ant types, unique by name.
///
/// # Example
///
/// ```
/// use burrow_core::registry::AntRegistry;
/// use burrow_core::insect::AntKind;
///
/// let registry = AntRegistry::standard();
/// let thrower = registry.get("Thrower").unwrap();
///
/// assert_eq!(thrower.kind, AntKind::Thrower);
/// assert_eq!(thrower.food_cost, 3);
/// assert!(registry.get("Bogus").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntRegistry {
    types: Vec<AntType>,
}

impl AntRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Every ant variant, in declaration order.
    #[must_use]
    pub fn standard() -> Self {
        AntKind::ALL.into_iter().map(AntType::of).collect()
    }

    /// Adds a type, replacing any type with the same name in place.
    pub fn insert(&mut self, ant_type: AntType) {
        match self.types.iter_mut().find(|t| t.name == ant_type.name) {
            Some(existing) => *existing = ant_type,
            None => self.types.push(ant_type),
        }
    }

    /// Looks up a type by name.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::UnknownAntType`] if no type has this name.
    pub fn get(&self, name: &str) -> Result<&AntType, ColonyError> {
        self.types
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ColonyError::UnknownAntType(name.to_string()))
    }

    /// Types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AntType> + '_ {
        self.types.iter()
    }

    /// Types that may be deployed, in registration order.
    pub fn implemented(&self) -> impl Iterator<Item = &AntType> + '_ {
        self.types.iter().filter(|t| t.implemented)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<AntType> for AntRegistry {
    fn from_iter<I: IntoIterator<Item = AntType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for ant_type in iter {
            registry.insert(ant_type);
        }
        registry
    }
}
