//! Serializable taxonomy definitions
//!
//! A [`Taxonomy`] is a flat, ordered list of frame definitions that refer
//! to their supersets by name. Building a network from it replays the
//! definitions top-down, so a superset must be listed before any of its
//! subsets.
//!
//! ```json
//! {
//!   "frames": [
//!     { "name": "Animal", "attributes": { "hasSkin": "Yes" } },
//!     { "name": "Bird", "superset": "Animal", "attributes": { "flies": "Yes" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FrameError, Result};
use crate::frame::Attributes;
use crate::network::FrameNetwork;

/// Definition of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDefinition {
    /// The frame's name
    pub name: String,

    /// Name of the superset, or `None` for a root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset: Option<String>,

    /// Attributes declared directly on the frame
    #[serde(default)]
    pub attributes: Attributes,
}

impl FrameDefinition {
    /// Define a root frame.
    pub fn root(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            superset: None,
            attributes,
        }
    }

    /// Define a frame under `superset`.
    pub fn child(name: impl Into<String>, superset: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            superset: Some(superset.into()),
            attributes,
        }
    }
}

/// An ordered list of frame definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Definitions in construction order
    #[serde(default)]
    pub frames: Vec<FrameDefinition>,
}

impl Taxonomy {
    /// Create an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition.
    pub fn push(&mut self, definition: FrameDefinition) -> &mut Self {
        self.frames.push(definition);
        self
    }

    /// Parse a taxonomy from JSON.
    ///
    /// # Errors
    ///
    /// `Json` if the document is not a valid taxonomy.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the taxonomy as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// `Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the number of definitions.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if there are no definitions.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FromIterator<FrameDefinition> for Taxonomy {
    fn from_iter<I: IntoIterator<Item = FrameDefinition>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl FrameNetwork {
    /// Build a network by constructing each definition in order.
    ///
    /// # Errors
    ///
    /// - `UnknownSuperset` if a definition names a superset that was not
    ///   defined earlier in the list
    /// - any error from [`add_frame`](FrameNetwork::add_frame)
    ///
    /// # Example
    ///
    /// ```
    /// use frames::{attributes, FrameDefinition, FrameNetwork, Taxonomy};
    ///
    /// let taxonomy: Taxonomy = [
    ///     FrameDefinition::root("Animal", attributes([("hasSkin", "Yes")])),
    ///     FrameDefinition::child("Bird", "Animal", attributes([("flies", "Yes")])),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let net = FrameNetwork::from_taxonomy(&taxonomy).unwrap();
    /// assert_eq!(net.by_name("Bird").unwrap().resolved_attribute("hasSkin"), Some("Yes"));
    /// ```
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Result<Self> {
        let mut network = FrameNetwork::new();

        for def in &taxonomy.frames {
            let superset = match &def.superset {
                Some(parent) => Some(network.id_of(parent).ok_or_else(|| {
                    FrameError::UnknownSuperset {
                        name: def.name.clone(),
                        superset: parent.clone(),
                    }
                })?),
                None => None,
            };
            network.add_frame(def.name.clone(), superset, def.attributes.clone())?;
        }

        info!(
            frames = network.len(),
            roots = network.roots().count(),
            "built frame network"
        );
        Ok(network)
    }

    /// Parse JSON and build a network from it.
    ///
    /// # Errors
    ///
    /// `Json` for malformed JSON, otherwise as
    /// [`from_taxonomy`](FrameNetwork::from_taxonomy).
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_taxonomy(&Taxonomy::from_json(json)?)
    }

    /// Recover the definitions this network was built from.
    ///
    /// Only names, superset names and own attributes are kept; inherited
    /// views are recomputed when the taxonomy is built again.
    pub fn to_taxonomy(&self) -> Taxonomy {
        self.iter()
            .map(|frame| FrameDefinition {
                name: frame.name().to_string(),
                superset: self.superset_of(frame.id()).map(|s| s.name().to_string()),
                attributes: frame.attributes().clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::attributes;

    #[test]
    fn test_definition_defaults_from_json() {
        let taxonomy = Taxonomy::from_json(r#"{"frames": [{"name": "Thing"}]}"#).unwrap();
        assert_eq!(taxonomy.frames, vec![FrameDefinition::root("Thing", Attributes::new())]);
    }

    #[test]
    fn test_root_serializes_without_superset() {
        let json = serde_json::to_string(&FrameDefinition::root("Thing", Attributes::new())).unwrap();
        assert_eq!(json, r#"{"name":"Thing","attributes":{}}"#);
    }

    #[test]
    fn test_forward_reference_is_unknown_superset() {
        let taxonomy: Taxonomy = [
            FrameDefinition::child("Bird", "Animal", Attributes::new()),
            FrameDefinition::root("Animal", Attributes::new()),
        ]
        .into_iter()
        .collect();

        let err = FrameNetwork::from_taxonomy(&taxonomy).unwrap_err();
        assert!(matches!(
            err,
            FrameError::UnknownSuperset { ref name, ref superset } if name == "Bird" && superset == "Animal"
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = FrameNetwork::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, FrameError::Json(_)));
    }

    #[test]
    fn test_push_chains() {
        let mut taxonomy = Taxonomy::new();
        taxonomy
            .push(FrameDefinition::root("A", attributes([("x", "1")])))
            .push(FrameDefinition::child("B", "A", Attributes::new()));
        assert_eq!(taxonomy.len(), 2);
        assert!(!taxonomy.is_empty());
    }
}
