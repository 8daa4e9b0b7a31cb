use super::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn basic() {
    let data = r#"
        {
            "name": "Riverside Feeder",
            "nodes": [
                { "kind": "plant" },
                { "kind": "plant", "alive": false },
                { "kind": "household" },
                { "kind": "household" }
            ],
            "links": [
                { "nodes": [0, 2] },
                { "nodes": [2, 3] }
            ]
        }"#;

    let v: NetworkSpec = serde_json::from_str(data).unwrap();
    assert_eq!(v.name, "Riverside Feeder");

    assert_eq!(v.nodes.len(), 4);
    assert_eq!(v.nodes[0], NodeSpec::Plant { alive: true });
    assert_eq!(v.nodes[1], NodeSpec::Plant { alive: false });
    assert_eq!(v.nodes[2], NodeSpec::Household);
    assert_eq!(v.nodes[3], NodeSpec::Household);

    assert_eq!(v.links.len(), 2);
    assert_eq!(v.links[0].nodes.0, 0);
    assert_eq!(v.links[0].nodes.1, 2);
    assert_eq!(v.links[1].nodes.0, 2);
    assert_eq!(v.links[1].nodes.1, 3);
}

#[test]
fn build_network_from_spec() {
    let spec = NetworkSpec {
        name: "test".to_string(),
        nodes: vec![
            NodeSpec::Plant { alive: true },
            NodeSpec::Plant { alive: false },
            NodeSpec::Household,
            NodeSpec::Household,
        ],
        links: vec![
            LinkSpec {
                nodes: LinkNodes(0, 2),
            },
            LinkSpec {
                nodes: LinkNodes(1, 3),
            },
        ],
    };
    let network = spec.build().unwrap();
    assert_eq!(network.node_count(), 4);
    assert_eq!(network.plant_count(), 2);
    assert_eq!(network.household_count(), 2);
    assert_eq!(network.alive_plant_count(), 1);
    assert_eq!(network.link_count(), 2);

    let household2 = network.household(2).unwrap();
    let household3 = network.household(3).unwrap();
    assert!(network.is_energized(household2).unwrap());
    assert!(!network.is_energized(household3).unwrap());
}

#[test]
fn build_rejects_out_of_range_links() {
    let spec = NetworkSpec {
        name: "bad".to_string(),
        nodes: vec![NodeSpec::Plant { alive: true }, NodeSpec::Household],
        links: vec![LinkSpec {
            nodes: LinkNodes(0, 5),
        }],
    };
    assert!(matches!(spec.build(), Err(NetworkError::BadInput(_))));
}

#[test]
fn repeated_links_are_reported() {
    let spec = NetworkSpec {
        name: "dup".to_string(),
        nodes: vec![NodeSpec::Plant { alive: true }, NodeSpec::Household],
        links: vec![
            LinkSpec {
                nodes: LinkNodes(0, 1),
            },
            LinkSpec {
                nodes: LinkNodes(1, 0),
            },
        ],
    };
    assert_eq!(spec.repeated_links(), vec![1]);
    // Still builds; the set collapses the duplicate.
    assert_eq!(spec.build().unwrap().link_count(), 1);
}

#[test]
fn scenario_from_json() {
    let data = r#"
        {
            "name": "kill and repair",
            "network": {
                "name": "single feeder",
                "nodes": [
                    { "kind": "plant" },
                    { "kind": "household" }
                ],
                "links": []
            },
            "steps": [
                { "type": "expect", "household": 1, "energized": false },
                { "type": "connect", "a": 1, "b": 0 },
                { "type": "expect", "household": 1, "energized": true },
                { "type": "kill", "plant": 0 },
                { "type": "expect", "household": 1, "energized": false },
                { "type": "repair", "plant": 0 },
                { "type": "expect", "household": 1, "energized": true },
                { "type": "disconnect", "a": 0, "b": 1 },
                { "type": "expect", "household": 1, "energized": false }
            ]
        }"#;

    let scenario: Scenario = serde_json::from_str(data).unwrap();
    assert_eq!(scenario.steps.len(), 9);
    assert_eq!(
        scenario.steps[1],
        Step::Connect { a: 1, b: 0 },
    );

    let report = scenario.run().unwrap();
    assert_eq!(report.name, "kill and repair");
    assert_eq!(report.checks.len(), 5);
    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 0);
}

#[test]
fn scenario_records_failed_checks() {
    let scenario = Scenario {
        name: None,
        network: NetworkSpec {
            name: "single feeder".to_string(),
            nodes: vec![NodeSpec::Plant { alive: true }, NodeSpec::Household],
            links: vec![LinkSpec {
                nodes: LinkNodes(0, 1),
            }],
        },
        steps: vec![
            Step::Expect {
                household: 1,
                energized: false,
            },
            Step::Expect {
                household: 1,
                energized: true,
            },
        ],
    };
    let report = scenario.run().unwrap();
    assert_eq!(report.name, "-");
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert!(!report.checks[0].passed());
    assert_eq!(report.checks[0].step, 0);
    assert!(report.checks[1].passed());
}

#[test]
fn scenario_rejects_wrong_kind_references() {
    let scenario = Scenario {
        name: None,
        network: NetworkSpec {
            name: "single feeder".to_string(),
            nodes: vec![NodeSpec::Plant { alive: true }, NodeSpec::Household],
            links: vec![],
        },
        steps: vec![Step::Kill { plant: 1 }],
    };
    assert!(matches!(
        scenario.run(),
        Err(NetworkError::InvalidReference(_))
    ));
}

#[test]
fn network_spec_from_yaml() {
    let data = r#"
name: yaml feeder
nodes:
  - kind: plant
  - kind: household
links:
  - nodes: [0, 1]
"#;
    let spec: NetworkSpec = serde_yaml::from_str(data).unwrap();
    assert_eq!(spec.name, "yaml feeder");
    assert_eq!(spec.nodes.len(), 2);
    assert_eq!(spec.links.len(), 1);
    let network = spec.build().unwrap();
    let household = network.household(1).unwrap();
    assert!(network.is_energized(household).unwrap());
}

#[test]
fn outage_study_with_all_plants_down() {
    let spec = NetworkSpec {
        name: "two grids".to_string(),
        nodes: vec![
            NodeSpec::Plant { alive: true },
            NodeSpec::Household,
            NodeSpec::Household,
        ],
        links: vec![
            LinkSpec {
                nodes: LinkNodes(0, 1),
            },
            LinkSpec {
                nodes: LinkNodes(1, 2),
            },
        ],
    };
    let network = spec.build().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let result = network.simulate_outages(1, 16, &mut rng);
    assert_eq!(result.trials, 16);
    assert_eq!(result.plant_failures, 1);
    // The only plant dies in every trial, so nothing survives.
    assert_eq!(result.survival_p, vec![0.0, 0.0, 0.0]);
}

#[test]
fn outage_study_with_redundant_plants() {
    let spec = NetworkSpec {
        name: "redundant".to_string(),
        nodes: vec![
            NodeSpec::Plant { alive: true },
            NodeSpec::Plant { alive: true },
            NodeSpec::Household,
        ],
        links: vec![
            LinkSpec {
                nodes: LinkNodes(0, 2),
            },
            LinkSpec {
                nodes: LinkNodes(1, 2),
            },
        ],
    };
    let network = spec.build().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    // One of two plants fails per trial; the household always keeps the
    // other one.
    let result = network.simulate_outages(1, 8, &mut rng);
    assert_eq!(result.survival_p[2], 1.0);

    // Killing both plants per trial leaves the household dark.
    let result = network.simulate_outages(2, 8, &mut rng);
    assert_eq!(result.survival_p[2], 0.0);
}
