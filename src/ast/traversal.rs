//! Generic tree walks built on child enumeration alone.

use super::NodeRef;

/// Extension trait for untyped traversal
///
/// Works for any node without special-casing node kinds, so formatters,
/// validators and rewriters can share it.
pub trait NodeExt<'a> {
    /// Walk the tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    fn walk<F, E>(self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>;

    /// Walk the tree in post-order
    ///
    /// Calls visitor on children before current node. Useful for bottom-up analysis.
    fn walk_post<F, E>(self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>;

    /// Find all nodes matching a predicate, in pre-order
    fn find_nodes<F>(self, predicate: F) -> Vec<NodeRef<'a>>
    where
        F: Fn(NodeRef<'a>) -> bool;

    /// Check if any node matches a predicate
    ///
    /// Short-circuits on first match.
    fn any_node<F>(self, predicate: F) -> bool
    where
        F: Fn(NodeRef<'a>) -> bool;

    /// Check if all nodes match a predicate
    ///
    /// Short-circuits on first non-match.
    fn all_nodes<F>(self, predicate: F) -> bool
    where
        F: Fn(NodeRef<'a>) -> bool;

    /// Number of nodes in the tree, root included
    fn count_nodes(self) -> usize;
}

impl<'a> NodeExt<'a> for NodeRef<'a> {
    fn walk<F, E>(self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        visitor(self)?;
        for child in self.children() {
            child.walk(visitor)?;
        }
        Ok(())
    }

    fn walk_post<F, E>(self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        for child in self.children() {
            child.walk_post(visitor)?;
        }
        visitor(self)
    }

    fn find_nodes<F>(self, predicate: F) -> Vec<NodeRef<'a>>
    where
        F: Fn(NodeRef<'a>) -> bool,
    {
        let mut results = Vec::new();
        let _ = self.walk(&mut |node| {
            if predicate(node) {
                results.push(node);
            }
            Ok::<(), ()>(())
        });
        results
    }

    fn any_node<F>(self, predicate: F) -> bool
    where
        F: Fn(NodeRef<'a>) -> bool,
    {
        let mut found = false;
        let _ = self.walk(&mut |node| {
            if predicate(node) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }

    fn all_nodes<F>(self, predicate: F) -> bool
    where
        F: Fn(NodeRef<'a>) -> bool,
    {
        !self.any_node(|node| !predicate(node))
    }

    fn count_nodes(self) -> usize {
        let mut count = 0;
        let _ = self.walk(&mut |_| {
            count += 1;
            Ok::<(), ()>(())
        });
        count
    }
}
