//! Input output module.
//!
//! Contains structs to serialize and deserialize networks and scenarios.

use crate::network::{NodeId, PowerNetwork};
use crate::NetworkError;

use serde::{Deserialize, Serialize};
use std::time::Instant;

pub mod fs;
mod simulation;
pub use simulation::*;

#[cfg(test)]
mod tests;

/// Tuple for the nodes that a link connects.
/// Serialized to JSON as an array of length 2.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkNodes(pub usize, pub usize);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkSpec {
    pub nodes: LinkNodes,
}

/// One node in a serialized network. Node order defines node indices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeSpec {
    Plant {
        #[serde(default = "default_alive")]
        alive: bool,
    },
    Household,
}

fn default_alive() -> bool {
    true
}

/// JSON representation of a distribution network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkSpec {
    pub name: String,
    pub nodes: Vec<NodeSpec>,
    pub links: Vec<LinkSpec>,
}

/// Summarized information about a network file, for directory listings.
#[derive(Serialize, Deserialize, Debug)]
pub struct NetworkEntry {
    pub filename: String,
    pub name: String,
    pub plants: usize,
    pub households: usize,
    pub links: usize,
}

impl NetworkSpec {
    /// Build a [`PowerNetwork`] from this representation.
    ///
    /// Nodes are created in order, so node indices in the network match
    /// positions in `self.nodes`. Links referencing nodes out of range are
    /// rejected.
    pub fn build(&self) -> Result<PowerNetwork, NetworkError> {
        let mut network = PowerNetwork::new();
        let mut ids: Vec<NodeId> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            match node {
                NodeSpec::Plant { alive } => {
                    let plant = network.add_plant();
                    if !*alive {
                        // Plants start alive; a dead plant in the file is a
                        // plant killed before the scenario begins.
                        network.kill(plant)?;
                    }
                    ids.push(NodeId::from(plant));
                }
                NodeSpec::Household => ids.push(NodeId::from(network.add_household())),
            }
        }
        for (i, link) in self.links.iter().enumerate() {
            let LinkNodes(a, b) = link.nodes;
            if a >= ids.len() || b >= ids.len() {
                return Err(NetworkError::BadInput(format!(
                    "link {} references node {} but there are only {} nodes",
                    i,
                    std::cmp::max(a, b),
                    ids.len()
                )));
            }
            network.connect(ids[a], ids[b])?;
        }
        Ok(network)
    }

    /// Indices of links that repeat an unordered pair, in either orientation.
    /// Harmless (the network stores links as a set) but usually a mistake in
    /// hand-written files.
    pub fn repeated_links(&self) -> Vec<usize> {
        let pairs: Vec<(usize, usize)> = self
            .links
            .iter()
            .map(|link| (link.nodes.0, link.nodes.1))
            .collect();
        crate::utils::repeated_link_indices(&pairs)
    }
}

/// A single scripted operation against a network.
/// All node references are indices into the owning [`NetworkSpec`]'s nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    Connect { a: usize, b: usize },
    Disconnect { a: usize, b: usize },
    Kill { plant: usize },
    Repair { plant: usize },
    Expect { household: usize, energized: bool },
}

/// A scripted sequence of operations against a network, with expected
/// energization results to check along the way.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: Option<String>,
    pub network: NetworkSpec,
    pub steps: Vec<Step>,
}

/// Outcome of a single `Expect` step in a scenario.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    /// Index of the step in the scenario.
    pub step: usize,
    /// Node index of the queried household.
    pub household: usize,
    pub expected: bool,
    pub actual: bool,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Result of running a [`Scenario`] to completion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub name: String,
    pub checks: Vec<CheckOutcome>,
    pub passed: usize,
    pub failed: usize,
    /// Execution time in seconds.
    pub runtime: f64,
}

impl Scenario {
    /// Build the network and apply all steps in order.
    ///
    /// Fails on the first step with an invalid node reference; expectation
    /// mismatches are not errors and are collected in the report instead.
    pub fn run(&self) -> Result<ScenarioReport, NetworkError> {
        let start_time = Instant::now();
        let mut network = self.network.build()?;
        let mut checks: Vec<CheckOutcome> = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            match *step {
                Step::Connect { a, b } => {
                    let (a, b) = (network.node_id(a)?, network.node_id(b)?);
                    network.connect(a, b)?;
                }
                Step::Disconnect { a, b } => {
                    let (a, b) = (network.node_id(a)?, network.node_id(b)?);
                    network.disconnect(a, b)?;
                }
                Step::Kill { plant } => {
                    let plant = network.plant(plant)?;
                    network.kill(plant)?;
                }
                Step::Repair { plant } => {
                    let plant = network.plant(plant)?;
                    network.repair(plant)?;
                }
                Step::Expect {
                    household,
                    energized,
                } => {
                    let id = network.household(household)?;
                    let actual = network.is_energized(id)?;
                    checks.push(CheckOutcome {
                        step: i,
                        household,
                        expected: energized,
                        actual,
                    });
                }
            }
        }
        let passed = checks.iter().filter(|c| c.passed()).count();
        let failed = checks.len() - passed;
        let runtime = start_time.elapsed().as_secs_f64();
        let name = self.name.clone().unwrap_or_else(|| "-".to_string());
        log::info!(
            "Scenario {}: {} checks passed, {} failed in {:.4} seconds",
            name,
            passed,
            failed,
            runtime,
        );
        Ok(ScenarioReport {
            name,
            checks,
            passed,
            failed,
            runtime,
        })
    }
}
