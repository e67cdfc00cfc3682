// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A generic, early terminating depth-first search.
//!
//! The search visits nodes in pre-order, records the node from which every
//! node was first reached, and asks a caller supplied predicate after every
//! visit whether it should stop.  When the predicate returns `true`, the
//! whole traversal stops, including the branches that haven't been explored
//! yet.
//!
//! The search doesn't know anything about substations.  It works on any
//! graph that implements [`SearchGraph`], and takes the neighbors of a node
//! from a navigation function.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use crate::Error;

/// A graph that can be searched with [`dfs`].
pub trait SearchGraph {
    /// The type of the node identifiers of the graph.
    type NodeId: Clone + Eq + Hash + Display;

    /// Returns true if the graph contains the given node.
    fn contains_node(&self, node: &Self::NodeId) -> bool;
}

/// Maps each visited node to the node from which it was first reached.
///
/// Start nodes don't have an entry.
pub type ParentMap<N> = HashMap<N, N>;

/// The order in which a search visits nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraversalOrder {
    /// A node is visited before its neighbors.
    #[default]
    PreOrder,
}

/// The result of a [`dfs`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Traversal<N>
where
    N: Eq + Hash,
{
    path: Vec<N>,
    parents: ParentMap<N>,
    halted: bool,
}

impl<N> Traversal<N>
where
    N: Eq + Hash,
{
    /// Returns the visited nodes, in the order they were visited.
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Returns the parent map of the traversal.
    pub fn parents(&self) -> &ParentMap<N> {
        &self.parents
    }

    /// Returns the node from which the given node was first reached.
    ///
    /// Returns `None` for start nodes and for nodes that were not visited.
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node)
    }

    /// Returns true if the stop predicate ended the traversal.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Consumes the traversal and returns the visited nodes.
    pub fn into_path(self) -> Vec<N> {
        self.path
    }
}

/// Performs a depth-first search from each of the given start nodes in turn.
///
/// - `navigation` returns the neighbors of a node, in the order they should
///   be visited.
/// - `should_stop` is called after every visit with the nodes visited so far,
///   the graph and the parent map.  When it returns `true` the traversal ends.
///
/// A start node that was already reached from an earlier start node is
/// skipped.
///
/// Returns an error before visiting anything, if any of the start nodes is
/// not in the graph.
pub fn dfs<G, Nav, I, Stop>(
    graph: &G,
    starts: impl IntoIterator<Item = G::NodeId>,
    order: TraversalOrder,
    mut navigation: Nav,
    mut should_stop: Stop,
) -> Result<Traversal<G::NodeId>, Error>
where
    G: SearchGraph + ?Sized,
    Nav: FnMut(&G, &G::NodeId) -> I,
    I: IntoIterator<Item = G::NodeId>,
    Stop: FnMut(&[G::NodeId], &G, &ParentMap<G::NodeId>) -> bool,
{
    let starts = starts.into_iter().collect::<Vec<_>>();
    if let Some(missing) = starts.iter().find(|v| !graph.contains_node(v)) {
        return Err(Error::node_not_found(format!(
            "Graph does not have node: {missing}"
        )));
    }

    let mut search = Search::new(graph, &mut should_stop);
    match order {
        TraversalOrder::PreOrder => {
            for start in starts {
                if search.pre_order(start, &mut navigation) {
                    break;
                }
            }
        }
    }

    Ok(search.finish())
}

/// The state of a single [`dfs`] call.
struct Search<'a, G, Stop>
where
    G: SearchGraph + ?Sized,
{
    graph: &'a G,
    should_stop: &'a mut Stop,
    visited: HashSet<G::NodeId>,
    parents: ParentMap<G::NodeId>,
    path: Vec<G::NodeId>,
    halted: bool,
}

impl<'a, G, Stop> Search<'a, G, Stop>
where
    G: SearchGraph + ?Sized,
    Stop: FnMut(&[G::NodeId], &G, &ParentMap<G::NodeId>) -> bool,
{
    fn new(graph: &'a G, should_stop: &'a mut Stop) -> Self {
        Self {
            graph,
            should_stop,
            visited: HashSet::new(),
            parents: ParentMap::new(),
            path: Vec::new(),
            halted: false,
        }
    }

    /// Visits every node reachable from `start` that hasn't been visited
    /// yet.  Returns true if the traversal was halted.
    ///
    /// The stack holds the neighbors still to be tried for each node on the
    /// current branch, so the visiting order is the same as that of a
    /// recursive search.
    fn pre_order<Nav, I>(&mut self, start: G::NodeId, navigation: &mut Nav) -> bool
    where
        Nav: FnMut(&G, &G::NodeId) -> I,
        I: IntoIterator<Item = G::NodeId>,
    {
        if self.visited.contains(&start) {
            return false;
        }
        if self.visit(start.clone(), None) {
            return true;
        }

        let mut stack = vec![(start.clone(), navigation(self.graph, &start).into_iter())];
        while let Some((node, neighbors)) = stack.last_mut() {
            let Some(next) = neighbors.next() else {
                stack.pop();
                continue;
            };
            if self.visited.contains(&next) {
                continue;
            }

            let parent = node.clone();
            if self.visit(next.clone(), Some(parent)) {
                return true;
            }
            let neighbors = navigation(self.graph, &next).into_iter();
            stack.push((next, neighbors));
        }

        false
    }

    /// Marks a node as visited and asks the stop predicate whether to halt.
    fn visit(&mut self, node: G::NodeId, parent: Option<G::NodeId>) -> bool {
        self.visited.insert(node.clone());
        if let Some(parent) = parent {
            self.parents.insert(node.clone(), parent);
        }
        self.path.push(node);

        self.halted = (self.should_stop)(&self.path, self.graph, &self.parents);
        if self.halted {
            tracing::debug!(
                "Search halted at {} after visiting {} nodes.",
                self.path[self.path.len() - 1],
                self.path.len()
            );
        }
        self.halted
    }

    fn finish(self) -> Traversal<G::NodeId> {
        Traversal {
            path: self.path,
            parents: self.parents,
            halted: self.halted,
        }
    }
}
