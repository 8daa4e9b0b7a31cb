//! Various utility functions.

use crate::types::NodeIndex;

/// Build an adjacency list for an undirected graph from a list of node pairs.
/// Both directions are recorded for each pair.
///
/// Panics if a pair references a node outside `node_count`.
pub fn adjacency_from_links(
    node_count: usize,
    links: impl Iterator<Item = (NodeIndex, NodeIndex)>,
) -> Vec<Vec<NodeIndex>> {
    let mut adjacency = vec![Vec::new(); node_count];
    for (a, b) in links {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    adjacency
}

/// Count the connected components of an undirected graph given as an
/// adjacency list. Isolated nodes count as components of size 1.
pub fn component_count(adjacency: &[Vec<NodeIndex>]) -> usize {
    let mut visited = vec![false; adjacency.len()];
    let mut components = 0;
    for start in 0..adjacency.len() {
        if visited[start] {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(i) = stack.pop() {
            for &j in adjacency[i].iter() {
                if !visited[j] {
                    visited[j] = true;
                    stack.push(j);
                }
            }
        }
    }
    components
}

/// Returns the indices of links that repeat an unordered pair seen earlier in
/// the list, in either orientation. The first occurrence is not reported.
pub fn repeated_link_indices(links: &[(NodeIndex, NodeIndex)]) -> Vec<usize> {
    let mut seen: Vec<(NodeIndex, NodeIndex)> = Vec::with_capacity(links.len());
    let mut out: Vec<usize> = Vec::new();
    for (i, &(a, b)) in links.iter().enumerate() {
        let pair = if a <= b { (a, b) } else { (b, a) };
        if seen.contains(&pair) {
            out.push(i);
        } else {
            seen.push(pair);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::bool_assert_comparison)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_from_links_test() {
        assert_eq!(
            adjacency_from_links(3, vec![(0, 1), (1, 2)].into_iter()),
            vec![vec![1], vec![0, 2], vec![1]],
        );
        assert_eq!(
            adjacency_from_links(2, std::iter::empty()),
            vec![Vec::<NodeIndex>::new(), Vec::new()],
        );
        assert_eq!(
            adjacency_from_links(4, vec![(0, 3)].into_iter()),
            vec![vec![3], vec![], vec![], vec![0]],
        );
    }

    #[test]
    fn component_count_test() {
        assert_eq!(component_count(&[]), 0);
        assert_eq!(component_count(&[vec![], vec![], vec![]]), 3);
        assert_eq!(component_count(&[vec![1], vec![0], vec![]]), 2);
        assert_eq!(
            component_count(&[vec![1], vec![0, 2], vec![1], vec![4], vec![3]]),
            2
        );
        assert_eq!(component_count(&[vec![1, 2], vec![0, 2], vec![0, 1]]), 1);
    }

    #[test]
    fn repeated_link_indices_test() {
        assert_eq!(repeated_link_indices(&[]), Vec::<usize>::new());
        assert_eq!(
            repeated_link_indices(&[(0, 1), (1, 2)]),
            Vec::<usize>::new()
        );
        assert_eq!(repeated_link_indices(&[(0, 1), (0, 1)]), vec![1]);
        assert_eq!(repeated_link_indices(&[(0, 1), (1, 0)]), vec![1]);
        assert_eq!(
            repeated_link_indices(&[(2, 3), (0, 1), (3, 2), (1, 0), (2, 3)]),
            vec![2, 3, 4]
        );
    }
}
