use std::io::Write as _;

use quarterturn::{Algorithm, Error, PolicyEntry, PolicyTable, SearchBudget, SolvePolicy, Variant};

fn sample_policy() -> SolvePolicy {
    SolvePolicy {
        algorithm: Algorithm::Ida,
        budget: SearchBudget {
            max_depth: 12,
            max_nodes: 500,
            max_millis: Some(100),
            threshold_max: 9,
        },
        progress_every: 64,
    }
}

#[test]
fn builtin_covers_every_supported_pair() {
    let table = PolicyTable::builtin();
    for order in 2..=5u8 {
        for variant in [Variant::Normal, Variant::Mirror] {
            assert!(
                table.get(order, variant).is_some(),
                "missing policy for {order} {variant:?}"
            );
        }
    }
    assert_eq!(table.len(), 8);
}

#[test]
fn builtin_prefers_bfs_only_for_the_smallest_cube() {
    let table = PolicyTable::builtin();
    assert_eq!(
        table.get(2, Variant::Normal).expect("policy").algorithm,
        Algorithm::Bfs
    );
    for order in 3..=5u8 {
        assert_eq!(
            table.get(order, Variant::Normal).expect("policy").algorithm,
            Algorithm::Ida,
            "order {order}"
        );
    }
}

#[test]
fn entries_round_trip_through_json() {
    let entry = PolicyEntry {
        order: 3,
        variant: Variant::Mirror,
        policy: sample_policy(),
    };
    let text = serde_json::to_string(&entry).expect("serialize");
    let back: PolicyEntry = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back.order, entry.order);
    assert_eq!(back.variant, entry.variant);
    assert_eq!(back.policy, entry.policy);
}

#[test]
fn override_file_replaces_and_extends_entries() {
    let rows = vec![
        PolicyEntry {
            order: 2,
            variant: Variant::Normal,
            policy: sample_policy(),
        },
        PolicyEntry {
            order: 5,
            variant: Variant::Mirror,
            policy: SolvePolicy {
                algorithm: Algorithm::Bfs,
                ..sample_policy()
            },
        },
    ];
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(serde_json::to_string(&rows).expect("serialize").as_bytes())
        .expect("write");

    let mut table = PolicyTable::builtin();
    table.load_overrides(file.path()).expect("load overrides");
    assert_eq!(table.len(), 8, "overrides replace, they do not duplicate");
    assert_eq!(
        table.get(2, Variant::Normal).expect("policy"),
        &sample_policy(),
        "existing entry replaced"
    );
    assert_eq!(
        table.get(5, Variant::Mirror).expect("policy").algorithm,
        Algorithm::Bfs,
        "new entry merged"
    );
}

#[test]
fn malformed_override_file_is_a_format_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ not json ").expect("write");
    let mut table = PolicyTable::builtin();
    match table.load_overrides(file.path()) {
        Err(Error::PolicyFormat(_)) => {}
        other => panic!("got {other:?}"),
    }
}

#[test]
fn missing_override_file_is_an_io_error() {
    let mut table = PolicyTable::new();
    match table.load_overrides("/nonexistent/policies.json") {
        Err(Error::PolicyIo(_)) => {}
        other => panic!("got {other:?}"),
    }
}
