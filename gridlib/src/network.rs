//! Distribution network model and energization queries.
//!
//! The network is an undirected graph over two node kinds: power plants
//! (energy sources with an alive flag) and households (relays that pass
//! electricity on without generating it). Connectivity is stored as a set of
//! canonical links; energization is recomputed by traversal on every query.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use crate::types::NodeIndex;
use crate::utils::adjacency_from_links;
use crate::NetworkError;


/// A node in the distribution network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    /// Generates electricity while alive.
    Plant { alive: bool },
    /// Consumes electricity and relays it to connected nodes.
    Household,
}

/// Handle to a power plant, created by [`PowerNetwork::add_plant`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlantId(NodeIndex);

/// Handle to a household, created by [`PowerNetwork::add_household`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HouseholdId(NodeIndex);

/// Reference to any node in the network, either a plant or a household.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(NodeIndex);

impl PlantId {
    pub fn index(self) -> NodeIndex {
        self.0
    }
}

impl HouseholdId {
    pub fn index(self) -> NodeIndex {
        self.0
    }
}

impl NodeId {
    pub fn index(self) -> NodeIndex {
        self.0
    }
}

impl From<PlantId> for NodeId {
    fn from(id: PlantId) -> NodeId {
        NodeId(id.0)
    }
}

impl From<HouseholdId> for NodeId {
    fn from(id: HouseholdId) -> NodeId {
        NodeId(id.0)
    }
}

/// Undirected link between two nodes.
/// Always stores the smaller node index first, so that each unordered pair
/// has exactly one representation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Link(NodeIndex, NodeIndex);

impl Link {
    /// Canonical link between two nodes, in either order.
    pub fn new(a: NodeIndex, b: NodeIndex) -> Link {
        if a <= b {
            Link(a, b)
        } else {
            Link(b, a)
        }
    }

    pub fn endpoints(&self) -> (NodeIndex, NodeIndex) {
        (self.0, self.1)
    }
}

/// An undirected network of power plants and households.
///
/// The link set is the only persistent connectivity state; no energization
/// result is ever cached, so kill/repair and connect/disconnect cannot leave
/// stale state behind.
#[derive(Debug, Clone, Default)]
pub struct PowerNetwork {
    nodes: Vec<Node>,
    links: BTreeSet<Link>,
}

impl PowerNetwork {
    pub fn new() -> PowerNetwork {
        PowerNetwork::default()
    }

    /// Add a new power plant to the network. Plants start alive.
    pub fn add_plant(&mut self) -> PlantId {
        let index = self.nodes.len();
        self.nodes.push(Node::Plant { alive: true });
        PlantId(index)
    }

    /// Add a new household to the network.
    pub fn add_household(&mut self) -> HouseholdId {
        let index = self.nodes.len();
        self.nodes.push(Node::Household);
        HouseholdId(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn plant_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Plant { .. }))
            .count()
    }

    pub fn household_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Household))
            .count()
    }

    pub fn alive_plant_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Plant { alive: true }))
            .count()
    }

    /// Iterate over all links in canonical order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Get the node behind a reference, failing if the reference does not
    /// belong to this network.
    pub fn node(&self, id: NodeId) -> Result<&Node, NetworkError> {
        self.nodes.get(id.0).ok_or_else(|| {
            NetworkError::InvalidReference(format!(
                "node index {} out of bounds ({} nodes)",
                id.0,
                self.nodes.len()
            ))
        })
    }

    /// Get a reference to the node at the given index, of either kind.
    pub fn node_id(&self, index: NodeIndex) -> Result<NodeId, NetworkError> {
        let id = NodeId(index);
        self.node(id)?;
        Ok(id)
    }

    /// Get a plant handle by node index.
    pub fn plant(&self, index: NodeIndex) -> Result<PlantId, NetworkError> {
        match self.node(NodeId(index))? {
            Node::Plant { .. } => Ok(PlantId(index)),
            Node::Household => Err(NetworkError::InvalidReference(format!(
                "node {} is a household, not a plant",
                index
            ))),
        }
    }

    /// Get a household handle by node index.
    pub fn household(&self, index: NodeIndex) -> Result<HouseholdId, NetworkError> {
        match self.node(NodeId(index))? {
            Node::Household => Ok(HouseholdId(index)),
            Node::Plant { .. } => Err(NetworkError::InvalidReference(format!(
                "node {} is a plant, not a household",
                index
            ))),
        }
    }

    /// Record an undirected link between two nodes.
    ///
    /// Links form a set: connecting the same pair twice is idempotent.
    /// Linking a node to itself is a no-op.
    pub fn connect(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
    ) -> Result<(), NetworkError> {
        let a = a.into();
        let b = b.into();
        self.node(a)?;
        self.node(b)?;
        if a == b {
            return Ok(());
        }
        self.links.insert(Link::new(a.0, b.0));
        Ok(())
    }

    /// Remove the link between exactly the given two nodes, if present.
    ///
    /// Removing an absent link is a no-op. Other links sharing an endpoint
    /// with the removed pair are not affected.
    pub fn disconnect(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
    ) -> Result<(), NetworkError> {
        let a = a.into();
        let b = b.into();
        self.node(a)?;
        self.node(b)?;
        if a == b {
            return Ok(());
        }
        self.links.remove(&Link::new(a.0, b.0));
        Ok(())
    }

    /// Take a plant out of service. Its links are kept.
    pub fn kill(&mut self, plant: PlantId) -> Result<(), NetworkError> {
        self.set_alive(plant, false)
    }

    /// Bring a killed plant back into service.
    pub fn repair(&mut self, plant: PlantId) -> Result<(), NetworkError> {
        self.set_alive(plant, true)
    }

    pub fn is_alive(&self, plant: PlantId) -> Result<bool, NetworkError> {
        match self.node(plant.into())? {
            Node::Plant { alive } => Ok(*alive),
            Node::Household => Err(NetworkError::InvalidReference(format!(
                "node {} is a household, not a plant",
                plant.0
            ))),
        }
    }

    fn set_alive(&mut self, plant: PlantId, alive: bool) -> Result<(), NetworkError> {
        self.node(plant.into())?;
        match &mut self.nodes[plant.0] {
            Node::Plant { alive: a } => {
                *a = alive;
                Ok(())
            }
            Node::Household => Err(NetworkError::InvalidReference(format!(
                "node {} is a household, not a plant",
                plant.0
            ))),
        }
    }

    /// Check whether a household is energized: true iff some alive plant is
    /// reachable from it through the link set, passing through any number of
    /// intermediate households.
    ///
    /// Plants terminate the traversal; they generate electricity but do not
    /// relay it between their neighbors. The result is computed fresh by
    /// breadth-first search on every call.
    pub fn is_energized(&self, household: HouseholdId) -> Result<bool, NetworkError> {
        let start = self.household(household.0)?.0;
        let adjacency = self.adjacency();
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);
        while let Some(i) = queue.pop_front() {
            for &j in adjacency[i].iter() {
                if visited[j] {
                    continue;
                }
                visited[j] = true;
                match self.nodes[j] {
                    Node::Plant { alive } => {
                        if alive {
                            return Ok(true);
                        }
                    }
                    Node::Household => queue.push_back(j),
                }
            }
        }
        Ok(false)
    }

    /// All currently energized households, computed by a single traversal
    /// starting from every alive plant.
    pub fn energized_households(&self) -> Vec<HouseholdId> {
        let adjacency = self.adjacency();
        let mut visited = vec![false; self.nodes.len()];
        let mut queue: VecDeque<NodeIndex> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Plant { alive: true }))
            .map(|(i, _)| i)
            .collect();
        for &i in queue.iter() {
            visited[i] = true;
        }
        let mut energized = Vec::new();
        while let Some(i) = queue.pop_front() {
            for &j in adjacency[i].iter() {
                if visited[j] {
                    continue;
                }
                visited[j] = true;
                if let Node::Household = self.nodes[j] {
                    energized.push(HouseholdId(j));
                    queue.push_back(j);
                }
            }
        }
        energized.sort_by_key(|id| id.0);
        energized
    }

    /// Adjacency list over the current link set.
    pub fn adjacency(&self) -> Vec<Vec<NodeIndex>> {
        adjacency_from_links(self.nodes.len(), self.links.iter().map(Link::endpoints))
    }
}
