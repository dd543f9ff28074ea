//! Read-only renderings of frames for presentation layers
//!
//! Everything here borrows the network and never changes it, so calling
//! any of these twice on the same network gives the same output.
//!
//! - [`describe`] - ordered (label, value) rows, one frame
//! - [`report`] - plain-text dump of one frame
//! - [`outline`] - indented text tree of the whole network
//! - [`view`] / [`views`] - serializable snapshots for external renderers

use std::fmt;

use serde::Serialize;

use crate::frame::{Attributes, Frame, FrameId};
use crate::network::FrameNetwork;

/// Placeholder shown for missing supersets, subsets and attributes.
pub const NONE: &str = "None";

/// Which part of a frame a [`Row`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Name, superset and subsets
    Identity,

    /// Inherited attributes
    Inherited,

    /// Attributes declared on the frame
    Own,
}

/// One (label, value) line of a frame description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Section this row is listed under
    pub section: Section,

    /// Left-hand label
    pub label: String,

    /// Right-hand value
    pub value: String,
}

impl Row {
    fn new(section: Section, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            section,
            label: label.into(),
            value: value.into(),
        }
    }
}

fn superset_name<'a>(network: &'a FrameNetwork, frame: &Frame) -> Option<&'a str> {
    network.superset_of(frame.id()).map(Frame::name)
}

fn subset_names<'a>(network: &'a FrameNetwork, frame: &Frame) -> Vec<&'a str> {
    network.subsets_of(frame.id()).map(Frame::name).collect()
}

fn attribute_rows(rows: &mut Vec<Row>, section: Section, heading: &str, attrs: Option<&Attributes>) {
    match attrs.filter(|a| !a.is_empty()) {
        Some(attrs) => rows.extend(attrs.iter().map(|(k, v)| Row::new(section, k.as_str(), v.as_str()))),
        None => rows.push(Row::new(section, heading, NONE)),
    }
}

/// Describe a frame as ordered (label, value) rows.
///
/// Rows come out as: `Name`, `Superset`, `Subsets`, then one row per
/// inherited attribute, then one row per own attribute. A missing
/// superset, an empty subset list or an empty/absent attribute map shows
/// up as a single `None` row.
///
/// # Example
///
/// ```
/// use frames::{attributes, describe, FrameNetwork};
///
/// let mut net = FrameNetwork::new();
/// let id = net.add_root("Animal", attributes([("hasSkin", "Yes")])).unwrap();
///
/// let rows = describe(&net, &net[id]);
/// let pairs: Vec<(&str, &str)> = rows.iter().map(|r| (r.label.as_str(), r.value.as_str())).collect();
/// assert_eq!(
///     pairs,
///     vec![
///         ("Name", "Animal"),
///         ("Superset", "None"),
///         ("Subsets", "None"),
///         ("Inherited Attributes", "None"),
///         ("hasSkin", "Yes"),
///     ]
/// );
/// ```
pub fn describe(network: &FrameNetwork, frame: &Frame) -> Vec<Row> {
    let subsets = subset_names(network, frame);
    let mut rows = vec![
        Row::new(Section::Identity, "Name", frame.name()),
        Row::new(
            Section::Identity,
            "Superset",
            superset_name(network, frame).unwrap_or(NONE),
        ),
        Row::new(
            Section::Identity,
            "Subsets",
            if subsets.is_empty() {
                NONE.to_string()
            } else {
                subsets.join(", ")
            },
        ),
    ];

    attribute_rows(
        &mut rows,
        Section::Inherited,
        "Inherited Attributes",
        frame.inherited_attributes(),
    );
    attribute_rows(&mut rows, Section::Own, "Unique Attributes", Some(frame.attributes()));

    rows
}

// ═══════════════════════════════════════════════════════════════════════
// Plain-text report
// ═══════════════════════════════════════════════════════════════════════

/// Plain-text dump of one frame. Created by [`report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    network: &'a FrameNetwork,
    frame: &'a Frame,
}

/// Prepare a plain-text dump of `frame`.
///
/// ```
/// use frames::{attributes, report, FrameNetwork};
///
/// let mut net = FrameNetwork::new();
/// let id = net.add_root("Animal", attributes([("hasSkin", "Yes")])).unwrap();
///
/// assert_eq!(
///     report(&net, &net[id]).to_string(),
///     "Frame: Animal\n\nSuperset: None\n\nSubsets: None\n\n\
///      Inherited Attributes:\n\tNone\n\n\
///      Unique Attributes:\n\thasSkin: Yes\n\n"
/// );
/// ```
pub fn report<'a>(network: &'a FrameNetwork, frame: &'a Frame) -> Report<'a> {
    Report { network, frame }
}

fn write_attributes(f: &mut fmt::Formatter<'_>, heading: &str, attrs: Option<&Attributes>) -> fmt::Result {
    writeln!(f, "{}:", heading)?;
    match attrs.filter(|a| !a.is_empty()) {
        Some(attrs) => {
            for (key, value) in attrs {
                writeln!(f, "\t{}: {}", key, value)?;
            }
            writeln!(f)
        }
        None => write!(f, "\t{}\n\n", NONE),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subsets = subset_names(self.network, self.frame);

        write!(f, "Frame: {}\n\n", self.frame.name())?;
        write!(
            f,
            "Superset: {}\n\n",
            superset_name(self.network, self.frame).unwrap_or(NONE)
        )?;
        if subsets.is_empty() {
            write!(f, "Subsets: {}\n\n", NONE)?;
        } else {
            write!(f, "Subsets: {}\n\n", subsets.join(", "))?;
        }

        write_attributes(f, "Inherited Attributes", self.frame.inherited_attributes())?;
        write_attributes(f, "Unique Attributes", Some(self.frame.attributes()))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Outline
// ═══════════════════════════════════════════════════════════════════════

/// Text tree of every root and its descendants. Created by [`outline`].
#[derive(Debug, Clone, Copy)]
pub struct Outline<'a> {
    network: &'a FrameNetwork,
}

/// Prepare a text tree of the whole network.
///
/// ```
/// use frames::{outline, Attributes, FrameNetwork};
///
/// let mut net = FrameNetwork::new();
/// let a = net.add_root("Animal", Attributes::new()).unwrap();
/// let fish = net.add_frame("Fish", Some(a), Attributes::new()).unwrap();
/// net.add_frame("Shark", Some(fish), Attributes::new()).unwrap();
/// net.add_frame("Bird", Some(a), Attributes::new()).unwrap();
///
/// assert_eq!(
///     outline(&net).to_string(),
///     "Animal\n├── Fish\n│   └── Shark\n└── Bird\n"
/// );
/// ```
pub fn outline(network: &FrameNetwork) -> Outline<'_> {
    Outline { network }
}

/// A pending outline line: the frame, the prefix of its line, and whether
/// it is the last of its siblings.
type Pending<'a> = (&'a Frame, String, bool);

impl<'a> Outline<'a> {
    fn push_subsets(&self, stack: &mut Vec<Pending<'a>>, id: FrameId, prefix: &str) {
        let children: Vec<&'a Frame> = self.network.subsets_of(id).collect();
        let count = children.len();

        // Reversed so the first subset is popped first
        for (i, child) in children.into_iter().enumerate().rev() {
            stack.push((child, prefix.to_string(), i + 1 == count));
        }
    }
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Pending<'_>> = Vec::new();

        for root in self.network.roots() {
            writeln!(f, "{}", root.name())?;
            self.push_subsets(&mut stack, root.id(), "");

            while let Some((frame, prefix, last)) = stack.pop() {
                let (branch, indent) = if last {
                    ("└── ", "    ")
                } else {
                    ("├── ", "│   ")
                };
                writeln!(f, "{}{}{}", prefix, branch, frame.name())?;
                self.push_subsets(&mut stack, frame.id(), &format!("{}{}", prefix, indent));
            }
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Serializable views
// ═══════════════════════════════════════════════════════════════════════

/// Snapshot of one frame for external renderers.
///
/// Serializes with the field names presenters expect; a root's
/// `inheritedAttributes` is `null`, not `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView<'a> {
    /// The frame's name
    pub name: &'a str,

    /// Superset name, if any
    pub superset: Option<&'a str>,

    /// Subset names in construction order
    pub subsets: Vec<&'a str>,

    /// Own attributes
    pub attributes: &'a Attributes,

    /// Inherited attributes, absent for roots
    pub inherited_attributes: Option<&'a Attributes>,
}

/// Snapshot a single frame.
pub fn view<'a>(network: &'a FrameNetwork, frame: &'a Frame) -> FrameView<'a> {
    FrameView {
        name: frame.name(),
        superset: superset_name(network, frame),
        subsets: subset_names(network, frame),
        attributes: frame.attributes(),
        inherited_attributes: frame.inherited_attributes(),
    }
}

/// Snapshot every frame in construction order.
pub fn views(network: &FrameNetwork) -> Vec<FrameView<'_>> {
    network.iter().map(|frame| view(network, frame)).collect()
}
