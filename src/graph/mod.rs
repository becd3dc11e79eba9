pub mod path;

pub type Node = u32;
pub type NumNodes = Node;

use std::ops::Range;

pub use path::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    type VertexIter<'a>: Iterator<Item = Node>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> Node;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns a range of vertices.
    /// In contrast to self.vertices(), the range returned by self.vertices_range() does
    /// not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait AdjacencyList: GraphNodeOrder {
    /// Returns an iterator over the open neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over `u` followed by its neighbors.
    /// ** Panics if `u >= n` **
    fn closed_neighborhood_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }
}
