//! Graph traversal with an explicit frontier
//!
//! Depth-first, breadth-first and best-first walks share one driver and
//! differ only in the container holding discovered-but-unvisited nodes:
//!
//! - [`depth_first`]: a stack (`Vec`), last discovered is visited first
//! - [`breadth_first`]: a queue (`VecDeque`), first discovered is visited first
//! - [`best_first`]: an [`IndexedHeap`] keyed by a cost function, cheapest
//!   first and discovery order among equal costs
//!
//! # Design
//!
//! A node is marked as seen when it is pushed onto the frontier, not when it
//! is visited, so no node is ever queued twice and each reachable node is
//! visited exactly once. Nodes not reachable from the start are never
//! visited. The walk returns the nodes in visit order.
//!
//! Traversals are instrumented with `tracing`; enable the
//! `stable_heaps::traversal` target at `trace` level to see every visit.
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::traversal::{breadth_first, depth_first, AdjacencyGraph};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_arc("a", "b");
//! graph.add_arc("a", "c");
//! graph.add_arc("b", "d");
//!
//! assert_eq!(breadth_first(&graph, &"a"), vec!["a", "b", "c", "d"]);
//! assert_eq!(depth_first(&graph, &"a"), vec!["a", "c", "b", "d"]);
//! ```

use crate::indexed_heap::IndexedHeap;
use crate::traits::PriorityQueue;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::hash::Hash;

/// Trait for graphs that can enumerate the neighbors of a node.
///
/// Implement this for your own graph representation to walk it with the
/// drivers in this module. [`AdjacencyGraph`] is a ready-made implementation.
pub trait Graph {
    /// Node identifier. Cloned into the visited set and the result.
    type Node: Clone + Eq + Hash;

    /// Returns the nodes reachable from `node` over one arc, in arc order.
    ///
    /// Unknown nodes have no neighbors.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;
}

/// A directed graph stored as adjacency lists.
///
/// Arcs keep their insertion order, which is the order in which the
/// traversal drivers discover neighbors.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N: Eq + Hash> {
    arcs: FxHashMap<N, SmallVec<[N; 4]>>,
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        AdjacencyGraph {
            arcs: FxHashMap::default(),
        }
    }

    /// Adds a node with no arcs. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.arcs.contains_key(&node) {
            return false;
        }
        self.arcs.insert(node, SmallVec::new());
        true
    }

    /// Adds a directed arc, creating either endpoint if needed.
    pub fn add_arc(&mut self, from: N, to: N) {
        self.add_node(to.clone());
        self.arcs.entry(from).or_default().push(to);
    }

    /// Adds arcs in both directions.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.add_arc(a.clone(), b.clone());
        self.add_arc(b, a);
    }

    /// Returns true if the node is part of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.arcs.contains_key(node)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.arcs.len()
    }

    /// Number of directed arcs.
    pub fn arc_count(&self) -> usize {
        self.arcs.values().map(|targets| targets.len()).sum()
    }
}

impl<N: Clone + Eq + Hash> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.arcs
            .get(node)
            .map(|targets| targets.to_vec())
            .unwrap_or_default()
    }
}

/// Container of discovered-but-unvisited nodes.
///
/// The only thing that distinguishes one traversal order from another.
pub trait Frontier<N> {
    /// Adds a newly discovered node.
    fn put(&mut self, node: N);

    /// Removes the node to visit next.
    fn take(&mut self) -> Option<N>;

    /// Returns true if no node is waiting.
    fn is_empty(&self) -> bool;

    /// Number of waiting nodes.
    fn len(&self) -> usize;
}

/// Stack frontier: depth-first order.
impl<N> Frontier<N> for Vec<N> {
    fn put(&mut self, node: N) {
        self.push(node);
    }

    fn take(&mut self) -> Option<N> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Queue frontier: breadth-first order.
impl<N> Frontier<N> for VecDeque<N> {
    fn put(&mut self, node: N) {
        self.push_back(node);
    }

    fn take(&mut self) -> Option<N> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Priority frontier: lowest cost first, discovery order among equal costs.
pub struct PriorityFrontier<N, P: Ord, F> {
    queue: IndexedHeap<N, P>,
    cost: F,
}

impl<N, P, F> PriorityFrontier<N, P, F>
where
    P: Ord + Clone,
    F: Fn(&N) -> P,
{
    /// Creates an empty frontier that ranks nodes with `cost`.
    pub fn new(cost: F) -> Self {
        PriorityFrontier {
            queue: IndexedHeap::new(),
            cost,
        }
    }
}

impl<N, P, F> Frontier<N> for PriorityFrontier<N, P, F>
where
    P: Ord + Clone,
    F: Fn(&N) -> P,
{
    fn put(&mut self, node: N) {
        let priority = (self.cost)(&node);
        self.queue.push(priority, node);
    }

    fn take(&mut self) -> Option<N> {
        self.queue.pop().ok()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Visits every node reachable from `start`, depth first.
///
/// Neighbors are pushed in arc order, so the last arc of a node is followed
/// first.
pub fn depth_first<G: Graph>(graph: &G, start: &G::Node) -> Vec<G::Node> {
    Traversal::new(graph, start.clone()).depth_first()
}

/// Visits every node reachable from `start`, breadth first.
pub fn breadth_first<G: Graph>(graph: &G, start: &G::Node) -> Vec<G::Node> {
    Traversal::new(graph, start.clone()).breadth_first()
}

/// Visits every node reachable from `start`, cheapest `cost` first.
///
/// Nodes with equal cost are visited in the order they were discovered.
pub fn best_first<G, P, F>(graph: &G, start: &G::Node, cost: F) -> Vec<G::Node>
where
    G: Graph,
    P: Ord + Clone,
    F: Fn(&G::Node) -> P,
{
    Traversal::new(graph, start.clone()).best_first(cost)
}

/// Builder for traversals with more configuration options.
///
/// # Example
///
/// ```rust
/// use stable_heaps::traversal::{AdjacencyGraph, Traversal};
///
/// let mut graph = AdjacencyGraph::new();
/// for i in 0..10u32 {
///     graph.add_arc(i, i + 1);
/// }
///
/// let visited = Traversal::new(&graph, 0).max_nodes(3).breadth_first();
/// assert_eq!(visited, vec![0, 1, 2]);
/// ```
pub struct Traversal<'g, G: Graph> {
    graph: &'g G,
    start: G::Node,
    max_nodes: Option<usize>,
}

impl<'g, G: Graph> Traversal<'g, G> {
    /// Creates a traversal of `graph` starting at `start`.
    pub fn new(graph: &'g G, start: G::Node) -> Self {
        Traversal {
            graph,
            start,
            max_nodes: None,
        }
    }

    /// Stops after visiting `count` nodes.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.max_nodes = Some(count);
        self
    }

    /// Runs the traversal with a stack frontier.
    pub fn depth_first(self) -> Vec<G::Node> {
        self.run("depth_first", Vec::new())
    }

    /// Runs the traversal with a queue frontier.
    pub fn breadth_first(self) -> Vec<G::Node> {
        self.run("breadth_first", VecDeque::new())
    }

    /// Runs the traversal with a priority frontier ranked by `cost`.
    pub fn best_first<P, F>(self, cost: F) -> Vec<G::Node>
    where
        P: Ord + Clone,
        F: Fn(&G::Node) -> P,
    {
        self.run("best_first", PriorityFrontier::new(cost))
    }

    /// Runs the traversal with any frontier.
    pub fn with_frontier<F: Frontier<G::Node>>(self, frontier: F) -> Vec<G::Node> {
        self.run("custom", frontier)
    }

    #[tracing::instrument(skip(self, frontier), fields(max_nodes = ?self.max_nodes))]
    fn run<F: Frontier<G::Node>>(self, strategy: &'static str, mut frontier: F) -> Vec<G::Node> {
        let mut seen: FxHashSet<G::Node> = FxHashSet::default();
        let mut order = Vec::new();

        seen.insert(self.start.clone());
        frontier.put(self.start);

        while let Some(node) = frontier.take() {
            if let Some(max) = self.max_nodes {
                if order.len() >= max {
                    tracing::debug!(
                        visited = order.len(),
                        pending = frontier.len() + 1,
                        "node limit reached, stopping traversal"
                    );
                    break;
                }
            }

            for neighbor in self.graph.neighbors(&node) {
                if seen.insert(neighbor.clone()) {
                    frontier.put(neighbor);
                }
            }

            order.push(node);
            tracing::trace!(
                visited = order.len(),
                pending = frontier.len(),
                "visited node"
            );
        }

        order
    }
}
