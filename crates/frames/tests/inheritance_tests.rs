//! Attribute inheritance and tree integrity tests

use frames::*;
use pretty_assertions::assert_eq;

fn kingdom() -> FrameNetwork {
    FrameNetwork::from_taxonomy(&sample::animal_kingdom()).unwrap()
}

fn id(net: &FrameNetwork, name: &str) -> FrameId {
    net.id_of(name).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Roots
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_root_has_absent_inherited_view() {
    let net = kingdom();
    let animal = net.by_name("Animal").unwrap();

    assert!(animal.inherited_attributes().is_none());
    assert_eq!(
        animal.attributes(),
        &attributes([("hasSkin", "Yes"), ("hasEyes", "Yes")])
    );
}

#[test]
fn test_root_keeps_supplied_attributes_exactly() {
    let supplied = attributes([("a", "1"), ("b", "2"), ("c", "3")]);
    let mut net = FrameNetwork::new();
    let root = net.add_root("R", supplied.clone()).unwrap();

    assert_eq!(net[root].attributes(), &supplied);
}

// ═══════════════════════════════════════════════════════════════════════
// Resolution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_ostrich_scenario() {
    let mut net = FrameNetwork::new();
    let a = net.add_root("Animal", attributes([("hasSkin", "Yes")])).unwrap();
    let b = net.add_frame("Bird", Some(a), attributes([("flies", "Yes")])).unwrap();
    let d = net.add_frame("Ostrich", Some(b), attributes([("flies", "No")])).unwrap();

    assert_eq!(net[d].inherited_attributes(), Some(&attributes([("hasSkin", "Yes")])));
    assert_eq!(net[d].attributes(), &attributes([("flies", "No")]));
    assert_eq!(net[b].subsets(), &[d]);
    assert_eq!(net[a].subsets(), &[b]);
}

#[test]
fn test_transitive_inheritance_through_empty_frames() {
    let mut net = FrameNetwork::new();
    let a = net.add_root("A", attributes([("x", "1")])).unwrap();
    let b = net.add_frame("B", Some(a), Attributes::new()).unwrap();
    let c = net.add_frame("C", Some(b), Attributes::new()).unwrap();

    assert_eq!(net[c].inherited_attributes(), Some(&attributes([("x", "1")])));
    assert_eq!(net[c].resolved_attribute("x"), Some("1"));
}

#[test]
fn test_shadowing_precedence() {
    let net = kingdom();
    let shark = net.by_name("Shark").unwrap();

    let inherited = shark.inherited_attributes().unwrap();
    assert!(!inherited.contains_key("floats"));
    assert_eq!(shark.resolved_attribute("floats"), Some("No"));
    assert_eq!(
        shark.resolve("floats").map(|r| r.origin),
        Some(Origin::Own)
    );
}

#[test]
fn test_override_is_inherited_by_descendants() {
    let mut net = FrameNetwork::new();
    let bird = net.add_root("Bird", attributes([("flies", "Yes")])).unwrap();
    let ostrich = net
        .add_frame("Ostrich", Some(bird), attributes([("flies", "No")]))
        .unwrap();
    let chick = net.add_frame("OstrichChick", Some(ostrich), Attributes::new()).unwrap();

    assert_eq!(net[chick].resolved_attribute("flies"), Some("No"));
    assert_eq!(
        net[chick].resolve("flies").map(|r| r.origin),
        Some(Origin::Inherited)
    );
}

#[test]
fn test_inherited_order_follows_first_declaration() {
    let net = kingdom();
    let salmon = net.by_name("Salmon").unwrap();

    let keys: Vec<&str> = salmon
        .inherited_attributes()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec!["hasSkin", "hasEyes", "canSwim", "hasScales", "floats"]
    );
}

#[test]
fn test_siblings_do_not_leak() {
    let net = kingdom();

    let ostrich = net.by_name("Ostrich").unwrap();
    let canary = net.by_name("Canary").unwrap();
    assert!(!canary.inherited_attributes().unwrap().contains_key("runs"));
    assert!(!ostrich.inherited_attributes().unwrap().contains_key("small"));
    assert_eq!(canary.resolved_attribute("flies"), Some("Yes"));

    let fish = net.by_name("Fish").unwrap();
    assert!(!fish.has_attribute("flies"));
    assert!(!net.by_name("Shark").unwrap().has_attribute("hasBeak"));
}

// ═══════════════════════════════════════════════════════════════════════
// Invariants over the whole sample
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_inherited_keys_come_from_superset_and_are_disjoint() {
    let net = kingdom();

    for frame in &net {
        let Some(superset) = net.superset_of(frame.id()) else {
            assert!(frame.inherited_attributes().is_none());
            continue;
        };
        let inherited = frame.inherited_attributes().unwrap();

        for key in inherited.keys() {
            let from_superset = superset.attributes().contains_key(key)
                || superset
                    .inherited_attributes()
                    .is_some_and(|i| i.contains_key(key));
            assert!(from_superset, "{}: '{}' not visible on superset", frame.name(), key);
            assert!(
                !frame.attributes().contains_key(key),
                "{}: '{}' is both own and inherited",
                frame.name(),
                key
            );
        }
    }
}

#[test]
fn test_every_frame_listed_once_under_its_superset() {
    let net = kingdom();

    for frame in &net {
        let appearances: Vec<&str> = net
            .iter()
            .filter(|other| other.subsets().contains(&frame.id()))
            .map(Frame::name)
            .collect();

        match net.superset_of(frame.id()) {
            Some(superset) => assert_eq!(appearances, vec![superset.name()]),
            None => assert!(appearances.is_empty()),
        }

        if let Some(superset) = net.superset_of(frame.id()) {
            let count = superset.subsets().iter().filter(|s| **s == frame.id()).count();
            assert_eq!(count, 1);
        }
    }
}

#[test]
fn test_later_subsets_do_not_change_earlier_views() {
    let mut net = FrameNetwork::new();
    let a = net.add_root("A", attributes([("x", "1")])).unwrap();
    let b = net.add_frame("B", Some(a), attributes([("y", "2")])).unwrap();
    let before = net[b].clone();

    net.add_frame("C", Some(a), attributes([("x", "3")])).unwrap();

    assert_eq!(net[b].inherited_attributes(), before.inherited_attributes());
    assert_eq!(net[b].attributes(), before.attributes());
}

// ═══════════════════════════════════════════════════════════════════════
// Navigation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_edges_follow_preorder() {
    let net = kingdom();
    let named: Vec<(&str, &str)> = net
        .edges()
        .into_iter()
        .map(|(p, c)| (net[p].name(), net[c].name()))
        .collect();

    assert_eq!(
        named,
        vec![
            ("Animal", "Fish"),
            ("Fish", "Shark"),
            ("Fish", "Salmon"),
            ("Animal", "Bird"),
            ("Bird", "Ostrich"),
            ("Bird", "Canary"),
        ]
    );
}

#[test]
fn test_ancestors_of_leaf() {
    let net = kingdom();
    let names: Vec<&str> = net.ancestors(id(&net, "Canary")).map(Frame::name).collect();
    assert_eq!(names, vec!["Bird", "Animal"]);
    assert_eq!(net.depth(id(&net, "Canary")), 2);
}

#[test]
fn test_subsets_of_and_leaves() {
    let net = kingdom();
    let fish_children: Vec<&str> = net.subsets_of(id(&net, "Fish")).map(Frame::name).collect();
    assert_eq!(fish_children, vec!["Shark", "Salmon"]);

    let leaves: Vec<&str> = net.iter().filter(|f| f.is_leaf()).map(Frame::name).collect();
    assert_eq!(leaves, vec!["Shark", "Salmon", "Ostrich", "Canary"]);
}
