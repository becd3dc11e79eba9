use super::*;

/// The path graph on vertices `0..n` where `u` and `u + 1` are adjacent.
/// Edges are implicit; nothing besides the number of nodes is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathGraph {
    number_of_nodes: NumNodes,
}

impl PathGraph {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self { number_of_nodes }
    }

    pub fn number_of_edges(&self) -> NumNodes {
        self.number_of_nodes.saturating_sub(1)
    }

    /// Returns true iff `u` and `v` are joined by an edge.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        u < self.number_of_nodes && v < self.number_of_nodes && u.abs_diff(v) == 1
    }
}

impl GraphNodeOrder for PathGraph {
    type VertexIter<'a> = Range<Node>;

    fn number_of_nodes(&self) -> Node {
        self.number_of_nodes
    }

    fn vertices(&self) -> Self::VertexIter<'_> {
        self.vertices_range()
    }
}

impl AdjacencyList for PathGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        assert!(u < self.number_of_nodes);
        let left = u.checked_sub(1);
        let right = Some(u + 1).filter(|&v| v < self.number_of_nodes);
        left.into_iter().chain(right)
    }
}
