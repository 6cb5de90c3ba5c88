//=========================================================================
// Entity References
//=========================================================================
//
// The view of a host entity that the trigger system receives. Entities
// are classified by a closed category enum rather than a free-form tag.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::Deserialize;

//=== EntityId ============================================================

/// Opaque identifier assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity:{}", self.0)
    }
}

//=== EntityCategory ======================================================

/// Gameplay classification of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EntityCategory {
    Player,
    Enemy,
    Projectile,
    Pickup,
    /// Anything with no gameplay role (props, decoration).
    Neutral,
}

//=== EntityRef ===========================================================

/// An entity as reported by the physics host in an overlap event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub id: EntityId,
    pub category: EntityCategory,
}

impl EntityRef {
    pub fn new(id: u64, category: EntityCategory) -> Self {
        Self { id: EntityId(id), category }
    }

    pub fn player(id: u64) -> Self {
        Self::new(id, EntityCategory::Player)
    }

    pub fn is_player(&self) -> bool {
        self.category == EntityCategory::Player
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.id, self.category)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_constructor_sets_category() {
        let player = EntityRef::player(12);
        assert!(player.is_player());
        assert_eq!(player.id, EntityId(12));
        assert!(!EntityRef::new(13, EntityCategory::Enemy).is_player());
    }

    #[test]
    fn display_names_id_and_category() {
        assert_eq!(EntityRef::player(5).to_string(), "entity:5 (Player)");
    }
}
