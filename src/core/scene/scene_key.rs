//=========================================================================
// Scene Keys
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use serde::Deserialize;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Games either use [`SceneIndex`] (the integer build index stored in
/// level data) or their own enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== SceneIndex ==========================================================

/// Integer scene identifier, as placed in level data.
///
/// Deserializes from a bare integer so level files can write `target: 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SceneIndex(pub u32);

impl SceneKey for SceneIndex {}

impl Display for SceneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for SceneIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

//=========================================================================
// Tests
//=========================================================================
