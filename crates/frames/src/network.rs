//! Arena of frames forming a single-parent taxonomy

use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{FrameError, Result};
use crate::frame::{inherit_from, Attributes, Frame, FrameId};

/// A semantic network of frames.
///
/// Frames live in a flat arena and refer to each other by [`FrameId`]:
/// the superset link is an optional id and the subset list is a vector of
/// ids, so there is no ownership cycle. Frames must be added top-down,
/// root first; each addition resolves the new frame's inherited view from
/// its already-resolved superset.
///
/// # Example
///
/// ```
/// use frames::{attributes, FrameNetwork};
///
/// let mut net = FrameNetwork::new();
/// let animal = net.add_root("Animal", attributes([("hasSkin", "Yes")])).unwrap();
/// let bird = net.add_frame("Bird", Some(animal), attributes([("flies", "Yes")])).unwrap();
/// let ostrich = net.add_frame("Ostrich", Some(bird), attributes([("flies", "No")])).unwrap();
///
/// let inherited = net[ostrich].inherited_attributes().unwrap();
/// assert_eq!(inherited.get("hasSkin").map(String::as_str), Some("Yes"));
/// assert!(!inherited.contains_key("flies"));
/// assert_eq!(net[bird].subsets(), &[ostrich]);
/// ```
///
/// Every network has its own identity, stamped into the ids it hands
/// out; an id from one network never resolves in another.
#[derive(Debug)]
pub struct FrameNetwork {
    /// Identity shared by every id this network issues
    identity: u64,

    /// All frames in construction order (index == FrameId::index)
    frames: Vec<Frame>,

    /// Name index, also in construction order
    names: IndexMap<String, FrameId>,
}

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(0);

impl Default for FrameNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameNetwork {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self {
            identity: NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed),
            frames: Vec::new(),
            names: IndexMap::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Construct a frame and link it under `superset`.
    ///
    /// The new frame's inherited view is the superset's inherited view
    /// overlaid with the superset's own attributes, minus every key the
    /// new frame declares itself. A root gets no inherited view at all.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if `name` is empty
    /// - `DuplicateName` if a frame with `name` already exists
    /// - `UnknownFrame` if `superset` is not an id from this network
    ///
    /// The network is unchanged when an error is returned.
    pub fn add_frame(
        &mut self,
        name: impl Into<String>,
        superset: Option<FrameId>,
        attributes: Attributes,
    ) -> Result<FrameId> {
        let name = name.into();

        if name.is_empty() {
            warn!("rejected frame with empty name");
            return Err(FrameError::EmptyName);
        }
        if self.names.contains_key(&name) {
            warn!(frame = %name, "rejected duplicate frame");
            return Err(FrameError::DuplicateName { name });
        }

        let inherited = match superset {
            Some(parent) => {
                let parent_frame = self.get(parent).ok_or_else(|| {
                    warn!(frame = %name, superset = %parent, "rejected unknown superset");
                    FrameError::UnknownFrame { id: parent }
                })?;
                Some(inherit_from(parent_frame, &attributes))
            }
            None => None,
        };

        let id = FrameId::new(self.identity, self.frames.len());
        let superset_name = superset.and_then(|p| self.get(p)).map(Frame::name);
        debug!(
            frame = %name,
            id = %id,
            superset = ?superset_name,
            own = attributes.len(),
            inherited = inherited.as_ref().map_or(0, |i| i.len()),
            "constructed frame"
        );

        if let Some(parent) = superset {
            self.frames[parent.index].subsets.push(id);
        }
        self.names.insert(name.clone(), id);
        self.frames.push(Frame {
            id,
            name,
            superset,
            subsets: Vec::new(),
            attributes,
            inherited,
        });

        Ok(id)
    }

    /// Construct a frame with no superset.
    pub fn add_root(&mut self, name: impl Into<String>, attributes: Attributes) -> Result<FrameId> {
        self.add_frame(name, None, attributes)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a frame by id.
    ///
    /// Returns `None` for ids issued by another network.
    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        if id.network != self.identity {
            return None;
        }
        self.frames.get(id.index)
    }

    /// Look up a frame by id, failing on ids from another network.
    ///
    /// # Errors
    ///
    /// `UnknownFrame` if the id was issued by another network or is out
    /// of range.
    pub fn frame(&self, id: FrameId) -> Result<&Frame> {
        self.get(id).ok_or(FrameError::UnknownFrame { id })
    }

    /// Find the id of the frame with the given name.
    pub fn id_of(&self, name: &str) -> Option<FrameId> {
        self.names.get(name).copied()
    }

    /// Find a frame by name.
    pub fn by_name(&self, name: &str) -> Option<&Frame> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Check if a frame with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Get the number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the network is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate over all frames in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Get all frame names in construction order.
    pub fn names(&self) -> Vec<&str> {
        self.names.keys().map(String::as_str).collect()
    }

    /// Frames without a superset, in construction order.
    pub fn roots(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.is_root())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Navigation
    // ═══════════════════════════════════════════════════════════════════

    /// The superset frame of `id`, if any.
    pub fn superset_of(&self, id: FrameId) -> Option<&Frame> {
        self.get(id)
            .and_then(|f| f.superset)
            .and_then(|parent| self.get(parent))
    }

    /// The direct subsets of `id` in construction order.
    pub fn subsets_of(&self, id: FrameId) -> impl Iterator<Item = &Frame> {
        self.get(id)
            .map(|f| f.subsets.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.get(*child))
    }

    /// Walk from the superset of `id` up to its root, nearest first.
    pub fn ancestors(&self, id: FrameId) -> Ancestors<'_> {
        Ancestors {
            network: self,
            next: self.get(id).and_then(|f| f.superset),
        }
    }

    /// Number of supersets above `id` (0 for a root).
    pub fn depth(&self, id: FrameId) -> usize {
        self.ancestors(id).count()
    }

    /// `id` and everything beneath it, in pre-order.
    ///
    /// Siblings are visited in construction order.
    pub fn descendants(&self, id: FrameId) -> Vec<&Frame> {
        let mut out = Vec::new();
        let mut stack: Vec<FrameId> = vec![id];

        while let Some(current) = stack.pop() {
            if let Some(frame) = self.get(current) {
                out.push(frame);
                stack.extend(frame.subsets.iter().rev().copied());
            }
        }

        out
    }

    /// Every (superset, subset) pair, walking each root in pre-order.
    ///
    /// This is the edge list a tree diagram is drawn from.
    pub fn edges(&self) -> Vec<(FrameId, FrameId)> {
        self.roots()
            .flat_map(|root| self.descendants(root.id))
            .flat_map(|frame| frame.subsets.iter().map(move |child| (frame.id, *child)))
            .collect()
    }
}

impl Index<FrameId> for FrameNetwork {
    type Output = Frame;

    /// # Panics
    ///
    /// Panics if the id does not belong to this network.
    fn index(&self, id: FrameId) -> &Frame {
        match self.get(id) {
            Some(frame) => frame,
            None => panic!("frame {} does not belong to this network", id),
        }
    }
}

impl<'a> IntoIterator for &'a FrameNetwork {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Iterator over a frame's supersets, nearest first.
///
/// Created by [`FrameNetwork::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    network: &'a FrameNetwork,
    next: Option<FrameId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.network.get(self.next?)?;
        self.next = frame.superset;
        Some(frame)
    }
}
