//! Built-in sample taxonomy

use crate::frame::attributes;
use crate::taxonomy::{FrameDefinition, Taxonomy};

/// A small animal kingdom: two branches under `Animal`, each with two
/// leaves, and one override per branch (`floats` on Shark, `flies` on
/// Ostrich).
///
/// ```text
/// Animal
/// ├── Fish
/// │   ├── Shark
/// │   └── Salmon
/// └── Bird
///     ├── Ostrich
///     └── Canary
/// ```
pub fn animal_kingdom() -> Taxonomy {
    [
        FrameDefinition::root("Animal", attributes([("hasSkin", "Yes"), ("hasEyes", "Yes")])),
        FrameDefinition::child(
            "Fish",
            "Animal",
            attributes([("canSwim", "Yes"), ("hasScales", "Yes"), ("floats", "Yes")]),
        ),
        FrameDefinition::child(
            "Shark",
            "Fish",
            attributes([("canBite", "Yes"), ("isApex", "Yes"), ("floats", "No")]),
        ),
        FrameDefinition::child(
            "Salmon",
            "Fish",
            attributes([("isEdible", "Yes"), ("freshwater", "Yes")]),
        ),
        FrameDefinition::child("Bird", "Animal", attributes([("flies", "Yes"), ("hasBeak", "Yes")])),
        FrameDefinition::child("Ostrich", "Bird", attributes([("flies", "No"), ("runs", "Yes")])),
        FrameDefinition::child("Canary", "Bird", attributes([("small", "Yes")])),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameNetwork;

    #[test]
    fn test_animal_kingdom_builds() {
        let net = FrameNetwork::from_taxonomy(&animal_kingdom()).unwrap();
        assert_eq!(net.len(), 7);
        assert_eq!(net.roots().count(), 1);
        assert_eq!(net.edges().len(), 6);
    }
}
