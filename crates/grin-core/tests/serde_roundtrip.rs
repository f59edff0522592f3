use grin_core::provenance::{RunProvenance, SchemaVersion};
use grin_core::{Edge, NodeId};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance::new("abc123", "brute_force").with_tool("grin-core", "0.1.0");
    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, provenance);
    assert!(!json.contains("seed"));
}

#[test]
fn schema_version_defaults_to_one() {
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}

#[test]
fn node_ids_serialize_transparently() {
    let json = serde_json::to_string(&NodeId::from_raw(42)).unwrap();
    assert_eq!(json, "42");
}

#[test]
fn edges_are_normalised() {
    let a = Edge::new(NodeId::from_raw(5), NodeId::from_raw(2));
    let b = Edge::new(NodeId::from_raw(2), NodeId::from_raw(5));
    assert_eq!(a, b);
    assert_eq!(a.u(), NodeId::from_raw(2));
    assert!(a.touches(NodeId::from_raw(5)));
    let json = serde_json::to_string(&a).unwrap();
    let decoded: Edge = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, a);
}
