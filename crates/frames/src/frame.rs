//! A single frame and its resolved attribute views

use std::fmt;

use indexmap::IndexMap;

/// Attribute name to value mapping.
///
/// Uses IndexMap so that listings come out in declaration order. When an
/// inherited view is merged, a key keeps the position where it first
/// appeared and carries the most specific value.
pub type Attributes = IndexMap<String, String>;

/// Build an [`Attributes`] map from borrowed pairs.
///
/// # Example
///
/// ```
/// use frames::attributes;
///
/// let attrs = attributes([("flies", "Yes"), ("hasBeak", "Yes")]);
/// assert_eq!(attrs.get("flies").map(String::as_str), Some("Yes"));
/// ```
pub fn attributes<'a, I>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Handle to a frame inside a [`FrameNetwork`](crate::FrameNetwork).
///
/// Ids are only handed out by the network, in construction order, and
/// carry the identity of the network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId {
    pub(crate) network: u64,
    pub(crate) index: usize,
}

impl FrameId {
    pub(crate) fn new(network: u64, index: usize) -> Self {
        Self { network, index }
    }

    /// Position of the frame in construction order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Where a resolved attribute value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Declared directly on the frame
    Own,

    /// Taken from the frame's ancestor chain
    Inherited,
}

/// An attribute value together with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The attribute value
    pub value: &'a str,

    /// Whether the value is declared or inherited
    pub origin: Origin,
}

/// One node of a taxonomy tree.
///
/// A frame is resolved once, when the network constructs it: its inherited
/// view is a snapshot of the superset's state at that moment. Apart from
/// gaining subsets, a frame never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub(crate) id: FrameId,
    pub(crate) name: String,
    pub(crate) superset: Option<FrameId>,
    pub(crate) subsets: Vec<FrameId>,
    pub(crate) attributes: Attributes,
    pub(crate) inherited: Option<Attributes>,
}

impl Frame {
    /// This frame's id.
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// The frame's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direct parent, or `None` for a root.
    pub fn superset(&self) -> Option<FrameId> {
        self.superset
    }

    /// Direct children in construction order.
    pub fn subsets(&self) -> &[FrameId] {
        &self.subsets
    }

    /// Check if this frame has no superset.
    pub fn is_root(&self) -> bool {
        self.superset.is_none()
    }

    /// Check if this frame has no subsets.
    pub fn is_leaf(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Attributes declared directly on this frame.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Attributes resolved from the ancestor chain.
    ///
    /// `None` for a root. For any other frame this is a (possibly empty)
    /// map whose keys never overlap [`attributes`](Self::attributes).
    pub fn inherited_attributes(&self) -> Option<&Attributes> {
        self.inherited.as_ref()
    }

    /// Look up an attribute, own declarations first.
    ///
    /// # Example
    ///
    /// ```
    /// use frames::{attributes, FrameNetwork, Origin};
    ///
    /// let mut net = FrameNetwork::new();
    /// let bird = net.add_root("Bird", attributes([("flies", "Yes")])).unwrap();
    /// let ostrich = net
    ///     .add_frame("Ostrich", Some(bird), attributes([("flies", "No")]))
    ///     .unwrap();
    ///
    /// let resolved = net[ostrich].resolve("flies").unwrap();
    /// assert_eq!(resolved.value, "No");
    /// assert_eq!(resolved.origin, Origin::Own);
    /// ```
    pub fn resolve(&self, key: &str) -> Option<Resolved<'_>> {
        if let Some(value) = self.attributes.get(key) {
            return Some(Resolved {
                value,
                origin: Origin::Own,
            });
        }

        self.inherited
            .as_ref()
            .and_then(|inherited| inherited.get(key))
            .map(|value| Resolved {
                value,
                origin: Origin::Inherited,
            })
    }

    /// Look up an attribute value: own, else inherited, else `None`.
    pub fn resolved_attribute(&self, key: &str) -> Option<&str> {
        self.resolve(key).map(|r| r.value)
    }

    /// Check if the attribute resolves to anything.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// Every attribute visible on this frame, inherited ones first.
    ///
    /// Keys are unique because the two maps are disjoint.
    pub fn effective_attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inherited
            .iter()
            .flat_map(|inherited| inherited.iter())
            .chain(self.attributes.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The view a subset of this frame inherits.
    ///
    /// Own attributes overlay the inherited ones, so the most specific
    /// value wins while keys keep their first position.
    pub(crate) fn inheritable(&self) -> Attributes {
        let mut combined = self.inherited.clone().unwrap_or_default();
        for (key, value) in &self.attributes {
            combined.insert(key.clone(), value.clone());
        }
        combined
    }
}

/// Compute a new frame's inherited view from its superset.
///
/// Anything the new frame declares itself is dropped from the result.
pub(crate) fn inherit_from(superset: &Frame, own: &Attributes) -> Attributes {
    let mut inherited = superset.inheritable();
    inherited.retain(|key, _| !own.contains_key(key));
    inherited
}
