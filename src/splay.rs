//! Bottom-up Sleator-Tarjan splay tree keyed on integer points.
//!
//! A self-adjusting binary search tree: every access (lookup/insert/delete)
//! first descends by key order, then splays the touched node to the root via
//! zig/zig-zig/zig-zag rotations, climbing parent links.  Amortized
//! O(log n) per operation.
//!
//! Nodes live in an index arena; `left`/`right` are owning links in the tree
//! sense and `parent` is a back-reference used only while splaying.
//!
//! Reference: Sleator & Tarjan, "Self-Adjusting Binary Search Trees",
//! JACM 32(3), 1985.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

/// A node in the splay tree.
struct Node<V> {
    key: Point,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<V> Node<V> {
    fn leaf(key: Point, value: V, parent: Option<NodeId>) -> Self {
        Node {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

enum Slot<V> {
    Occupied(Node<V>),
    /// Free slot; holds the next entry of the free list.
    Vacant(Option<NodeId>),
}

/// Node storage with slot reuse.
struct Arena<V> {
    slots: Vec<Slot<V>>,
    free: Option<NodeId>,
}

impl<V> Arena<V> {
    fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
        }
    }

    fn alloc(&mut self, node: Node<V>) -> NodeId {
        match self.free {
            Some(id) => {
                let prev = mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                self.free = match prev {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => unreachable!("free list points at a live node"),
                };
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<V> {
        match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant(_) => unreachable!("double release of node {}", id.0),
        }
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }
}

impl<V> Index<NodeId> for Arena<V> {
    type Output = Node<V>;

    fn index(&self, id: NodeId) -> &Node<V> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("dangling link to node {}", id.0),
        }
    }
}

impl<V> IndexMut<NodeId> for Arena<V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<V> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("dangling link to node {}", id.0),
        }
    }
}

/// A splay tree mapping points to values of type V.
pub struct SplayTree<V> {
    nodes: Arena<V>,
    root: Option<NodeId>,
    len: usize,
    rotations: u64,
}

impl<V> Default for SplayTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SplayTree<V> {
    pub fn new() -> Self {
        SplayTree {
            nodes: Arena::new(),
            root: None,
            len: 0,
            rotations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of rotations performed since the tree was created.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Key currently at the root, if any.
    pub fn root_key(&self) -> Option<Point> {
        self.root.map(|id| self.nodes[id].key)
    }

    /// Drop every entry.  The rotation counter is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Membership probe that leaves the tree shape untouched.
    pub fn contains_key(&self, key: Point) -> bool {
        matches!(self.descend(key), Some((_, Ordering::Equal)))
    }

    /// Find key; returns reference to value or None.
    ///
    /// Splays the found node to the root.  On a miss the last node visited
    /// (the would-be parent of `key`) is splayed instead.
    pub fn lookup(&mut self, key: Point) -> Option<&V> {
        let (id, ord) = self.descend(key)?;
        self.splay(id);
        if ord == Ordering::Equal {
            Some(&self.nodes[id].value)
        } else {
            None
        }
    }

    /// Insert key with value, overwriting any existing entry.  The new or
    /// updated node is splayed to the root.
    pub fn insert(&mut self, key: Point, value: V) {
        let (parent, ord) = match self.descend(key) {
            Some(found) => found,
            None => {
                let id = self.nodes.alloc(Node::leaf(key, value, None));
                self.root = Some(id);
                self.len += 1;
                return;
            }
        };

        let id = match ord {
            Ordering::Equal => {
                self.nodes[parent].value = value;
                parent
            }
            Ordering::Less => {
                let id = self.nodes.alloc(Node::leaf(key, value, Some(parent)));
                self.nodes[parent].left = Some(id);
                self.len += 1;
                id
            }
            Ordering::Greater => {
                let id = self.nodes.alloc(Node::leaf(key, value, Some(parent)));
                self.nodes[parent].right = Some(id);
                self.len += 1;
                id
            }
        };
        self.splay(id);
    }

    /// Remove key and return its value.
    ///
    /// The node is splayed to the root and spliced out: with two children,
    /// the right subtree is hung off the maximum of the left subtree and the
    /// left child becomes the root.  On a miss the would-be parent stays
    /// splayed at the root, as for `lookup`.
    pub fn delete(&mut self, key: Point) -> Option<V> {
        let (id, ord) = self.descend(key)?;
        self.splay(id);
        if ord != Ordering::Equal {
            return None;
        }

        let node = self.nodes.release(id);
        self.len -= 1;
        self.root = match (node.left, node.right) {
            (Some(left), Some(right)) => {
                let mut max = left;
                while let Some(next) = self.nodes[max].right {
                    max = next;
                }
                self.nodes[max].right = Some(right);
                self.nodes[right].parent = Some(max);
                self.nodes[left].parent = None;
                Some(left)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.nodes[child].parent = None;
                Some(child)
            }
            (None, None) => None,
        };
        Some(node.value)
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, V> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Values in key order, separated by single spaces.
    pub fn render(&self) -> String
    where
        V: fmt::Display,
    {
        let mut out = String::new();
        for (_, value) in self.iter() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&value.to_string());
        }
        out
    }

    /// Walk the whole tree and verify key order, parent links and the
    /// node count.  Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let root = match self.root {
            Some(root) => root,
            None if self.len == 0 => return Ok(()),
            None => return Err(format!("empty root but len = {}", self.len)),
        };
        if let Some(p) = self.nodes[root].parent {
            return Err(format!("root has parent {}", p.0));
        }

        let mut seen = 0usize;
        let mut prev: Option<Point> = None;
        let mut stack: Vec<NodeId> = Vec::new();
        let mut cur = Some(root);
        loop {
            while let Some(id) = cur {
                let node = &self.nodes[id];
                for child in [node.left, node.right].into_iter().flatten() {
                    if self.nodes[child].parent != Some(id) {
                        return Err(format!(
                            "node ({}) does not point back at parent ({})",
                            self.nodes[child].key, node.key
                        ));
                    }
                }
                if node.left.is_some() && node.left == node.right {
                    return Err(format!("node ({}) has the same child twice", node.key));
                }
                stack.push(id);
                cur = node.left;
            }
            let id = match stack.pop() {
                Some(id) => id,
                None => break,
            };
            let key = self.nodes[id].key;
            if let Some(p) = prev {
                if p >= key {
                    return Err(format!("keys out of order: ({}) before ({})", p, key));
                }
            }
            prev = Some(key);
            seen += 1;
            if seen > self.len {
                return Err(format!("more than len = {} nodes reachable", self.len));
            }
            cur = self.nodes[id].right;
        }

        if seen != self.len {
            return Err(format!("{} nodes reachable but len = {}", seen, self.len));
        }
        Ok(())
    }

    /// Plain BST descent.  Returns the matching node, or the last node
    /// visited, together with how `key` compares to it.
    fn descend(&self, key: Point) -> Option<(NodeId, Ordering)> {
        let mut cur = self.root?;
        loop {
            let ord = key.cmp(&self.nodes[cur].key);
            let next = match ord {
                Ordering::Less => self.nodes[cur].left,
                Ordering::Greater => self.nodes[cur].right,
                Ordering::Equal => None,
            };
            match next {
                Some(next) => cur = next,
                None => return Some((cur, ord)),
            }
        }
    }

    /// Bottom-up splay: rotate `x` up until it is the root.
    fn splay(&mut self, x: NodeId) {
        while let Some(p) = self.nodes[x].parent {
            let x_is_left = self.nodes[p].left == Some(x);
            let done = match self.nodes[p].parent {
                // Zig
                None => {
                    if x_is_left {
                        !self.rotate_right(x, p)
                    } else {
                        !self.rotate_left(x, p)
                    }
                }
                Some(g) => {
                    let p_is_left = self.nodes[g].left == Some(p);
                    match (x_is_left, p_is_left) {
                        // Zig-zig: grandparent edge first.
                        (true, true) => !(self.rotate_right(p, g) && self.rotate_right(x, p)),
                        (false, false) => !(self.rotate_left(p, g) && self.rotate_left(x, p)),
                        // Zig-zag
                        (true, false) => !(self.rotate_right(x, p) && self.rotate_left(x, g)),
                        (false, true) => !(self.rotate_left(x, p) && self.rotate_right(x, g)),
                    }
                }
            };
            if done {
                break;
            }
        }
        debug_assert_eq!(self.root, Some(x));
    }

    /// Rotate the edge (`parent`, `child`) right, lifting `child`, which
    /// must be the left child of `parent`.  Returns false and leaves the
    /// tree untouched if that relationship does not hold.
    fn rotate_right(&mut self, child: NodeId, parent: NodeId) -> bool {
        let linked =
            self.nodes[parent].left == Some(child) && self.nodes[child].parent == Some(parent);
        debug_assert!(linked, "rotate_right on unlinked pair");
        if !linked {
            return false;
        }

        let inner = self.nodes[child].right;
        self.nodes[parent].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(parent);
        }
        self.nodes[child].right = Some(parent);
        self.lift(child, parent);
        true
    }

    /// Mirror image of `rotate_right`: `child` must be the right child.
    fn rotate_left(&mut self, child: NodeId, parent: NodeId) -> bool {
        let linked =
            self.nodes[parent].right == Some(child) && self.nodes[child].parent == Some(parent);
        debug_assert!(linked, "rotate_left on unlinked pair");
        if !linked {
            return false;
        }

        let inner = self.nodes[child].left;
        self.nodes[parent].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(parent);
        }
        self.nodes[child].left = Some(parent);
        self.lift(child, parent);
        true
    }

    /// Second half of a rotation: put `child` into `parent`'s slot under
    /// the grandparent (or at the root) and hang `parent` below `child`.
    fn lift(&mut self, child: NodeId, parent: NodeId) {
        let grand = self.nodes[parent].parent;
        self.nodes[child].parent = grand;
        self.nodes[parent].parent = Some(child);
        match grand {
            None => self.root = Some(child),
            Some(g) => {
                if self.nodes[g].left == Some(parent) {
                    self.nodes[g].left = Some(child);
                } else {
                    self.nodes[g].right = Some(child);
                }
            }
        }
        self.rotations += 1;
    }
}

impl<V: fmt::Debug> fmt::Debug for SplayTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for SplayTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// In-order iterator over a splay tree.
///
/// Uses an explicit stack so a degenerate, not yet splayed chain cannot
/// overflow the call stack.
pub struct Iter<'a, V> {
    tree: &'a SplayTree<V>,
    stack: Vec<NodeId>,
}

impl<'a, V> Iter<'a, V> {
    fn push_left_spine(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.tree.nodes[id].left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id];
        self.push_left_spine(node.right);
        Some((node.key, &node.value))
    }
}

impl<'a, V> IntoIterator for &'a SplayTree<V> {
    type Item = (Point, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Depth of `key` below the root, without splaying.
    fn depth(tree: &SplayTree<usize>, key: Point) -> Option<usize> {
        let mut cur = tree.root?;
        let mut d = 0;
        loop {
            let node = &tree.nodes[cur];
            cur = match key.cmp(&node.key) {
                Ordering::Equal => return Some(d),
                Ordering::Less => node.left?,
                Ordering::Greater => node.right?,
            };
            d += 1;
        }
    }

    fn height(tree: &SplayTree<usize>) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = tree.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((id, d)) = stack.pop() {
            max = max.max(d);
            let node = &tree.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, d + 1));
            }
        }
        max
    }

    #[test]
    fn insert_and_lookup() {
        let mut tree = SplayTree::new();
        tree.insert(p(4, 2), 42usize);
        assert_eq!(tree.lookup(p(4, 2)), Some(&42));
        assert!(tree.lookup(p(9, 9)).is_none());
        assert_eq!(tree.len(), 1);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn insert_overwrites() {
        let mut tree = SplayTree::new();
        tree.insert(p(1, 0), 100usize);
        tree.insert(p(2, 0), 150);
        tree.insert(p(1, 0), 200);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root_key(), Some(p(1, 0)));
        assert_eq!(tree.lookup(p(1, 0)), Some(&200));
    }

    #[test]
    fn empty_tree() {
        let mut tree: SplayTree<usize> = SplayTree::new();
        assert!(tree.is_empty());
        assert!(tree.lookup(p(0, 0)).is_none());
        assert!(tree.delete(p(0, 0)).is_none());
        assert_eq!(tree.root_key(), None);
        assert_eq!(tree.render(), "");
        tree.check_invariants().unwrap();
    }

    #[test]
    fn zig() {
        let mut tree = SplayTree::new();
        tree.insert(p(0, 2), 2usize);
        tree.insert(p(0, 1), 1);
        // 1 was splayed over 2 with a single rotation.
        assert_eq!(tree.root_key(), Some(p(0, 1)));
        assert_eq!(tree.rotations(), 1);
        assert_eq!(depth(&tree, p(0, 2)), Some(1));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn zig_zig_rotates_grandparent_first() {
        // Ascending inserts leave 3 -> 2 -> 1 as a left path.
        let mut tree = SplayTree::new();
        tree.insert(p(0, 1), 1usize);
        tree.insert(p(0, 2), 2);
        tree.insert(p(0, 3), 3);
        // Root 3, left 2, left-left 1.
        assert_eq!(tree.root_key(), Some(p(0, 3)));
        assert_eq!(depth(&tree, p(0, 1)), Some(2));

        let before = tree.rotations();
        assert_eq!(tree.lookup(p(0, 1)), Some(&1));
        assert_eq!(tree.rotations() - before, 2);
        // Zig-zig leaves 1 -> 2 -> 3 as a right path; rotate-to-root would
        // have produced 1 with right child 3 and 2 below it.
        let root = tree.root.unwrap();
        let right = tree.nodes[root].right.unwrap();
        assert_eq!(tree.nodes[right].key, p(0, 2));
        assert_eq!(tree.nodes[right].right.map(|id| tree.nodes[id].key), Some(p(0, 3)));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn zig_zag() {
        let mut tree = SplayTree::new();
        tree.insert(p(0, 10), 10usize);
        tree.insert(p(0, 20), 20);
        // Root 20, left 10.  Now 15 lands as 10's right child.
        tree.insert(p(0, 15), 15);
        assert_eq!(tree.root_key(), Some(p(0, 15)));
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].left.map(|id| tree.nodes[id].key), Some(p(0, 10)));
        assert_eq!(tree.nodes[root].right.map(|id| tree.nodes[id].key), Some(p(0, 20)));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn failed_lookup_splays_would_be_parent() {
        let mut tree = SplayTree::new();
        for y in [10, 20, 30, 40, 50] {
            tree.insert(p(0, y), y as usize);
        }
        // Left path 50 -> 40 -> 30 -> 20 -> 10; the search for 25 ends at
        // 20's empty right slot, so 20 (not its neighbour 30) is splayed.
        assert!(tree.lookup(p(0, 25)).is_none());
        assert_eq!(tree.root_key(), Some(p(0, 20)));
        tree.check_invariants().unwrap();
    }

    fn chain(len: i32) -> (SplayTree<usize>, NodeId, NodeId) {
        let mut tree = SplayTree::new();
        for y in 0..len {
            tree.insert(p(0, y), y as usize);
        }
        let root = tree.root.unwrap();
        let left = tree.nodes[root].left.unwrap();
        (tree, root, left)
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unlinked pair")]
    fn rotate_left_refuses_left_child_in_debug() {
        let (mut tree, root, left) = chain(2);
        tree.rotate_left(left, root);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unlinked pair")]
    fn rotate_right_refuses_grandchild_in_debug() {
        let (mut tree, root, left) = chain(3);
        let grandchild = tree.nodes[left].left.unwrap();
        tree.rotate_right(grandchild, root);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn rotation_on_unlinked_pair_is_noop_in_release() {
        let (mut tree, root, left) = chain(3);
        let grandchild = tree.nodes[left].left.unwrap();
        let rotations = tree.rotations();

        assert!(!tree.rotate_left(left, root));
        assert!(!tree.rotate_right(grandchild, root));
        assert!(!tree.rotate_right(root, left));

        assert_eq!(tree.root, Some(root));
        assert_eq!(tree.nodes[root].left, Some(left));
        assert_eq!(tree.nodes[root].right, None);
        assert_eq!(tree.nodes[left].parent, Some(root));
        assert_eq!(tree.nodes[left].left, Some(grandchild));
        assert_eq!(tree.nodes[grandchild].parent, Some(left));
        assert_eq!(tree.rotations(), rotations);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn delete_two_children_promotes_left() {
        let mut tree = SplayTree::new();
        for y in [1, 5, 3, 7, 2, 6, 4] {
            tree.insert(p(0, y), y as usize);
        }
        assert_eq!(tree.delete(p(0, 4)), Some(4));
        // The left child of the splayed 4 holds the predecessor chain.
        assert!(tree.root_key().unwrap() < p(0, 4));
        assert_eq!(tree.len(), 6);
        assert!(tree.lookup(p(0, 4)).is_none());
        tree.check_invariants().unwrap();
    }

    #[test]
    fn delete_single_child_and_leaf() {
        let mut tree = SplayTree::new();
        tree.insert(p(0, 1), 1usize);
        tree.insert(p(0, 2), 2);
        // Root 2 with only a left child.
        assert_eq!(tree.delete(p(0, 2)), Some(2));
        assert_eq!(tree.root_key(), Some(p(0, 1)));
        assert_eq!(tree.delete(p(0, 1)), Some(1));
        assert!(tree.is_empty());
        assert_eq!(tree.root_key(), None);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn delete_missing_leaves_would_be_parent() {
        let mut tree = SplayTree::new();
        tree.insert(p(0, 1), 1usize);
        tree.insert(p(0, 3), 3);
        // Root 3 with left child 1; the search for 2 ends below 1.
        assert!(tree.delete(p(0, 2)).is_none());
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root_key(), Some(p(0, 1)));
        tree.check_invariants().unwrap();

        let mut tree = SplayTree::new();
        for y in [10, 20, 30, 40, 50] {
            tree.insert(p(0, y), y as usize);
        }
        // Path 50 -> 40 -> 30, then 30's empty right slot.
        assert!(tree.delete(p(0, 35)).is_none());
        assert_eq!(tree.root_key(), Some(p(0, 30)));
        assert_eq!(tree.len(), 5);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn slots_are_reused() {
        let mut tree = SplayTree::new();
        for x in 0..10 {
            tree.insert(p(x, 0), x as usize);
        }
        for x in 0..10 {
            assert_eq!(tree.delete(p(x, 0)), Some(x as usize));
        }
        for x in 0..10 {
            tree.insert(p(x, 1), x as usize);
        }
        assert_eq!(tree.nodes.slots.len(), 10);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn render_in_key_order() {
        let mut tree = SplayTree::new();
        tree.insert(p(3, 5), "red".to_string());
        tree.insert(p(1, 2), "blue".to_string());
        tree.insert(p(0, 5), "green".to_string());
        assert_eq!(tree.render(), "blue green red");
        assert_eq!(tree.to_string(), "blue green red");
    }

    #[test]
    fn deep_chain_iterates_without_recursion() {
        let mut tree = SplayTree::new();
        // Ascending inserts leave a left path of length n.
        for y in 0..100_000 {
            tree.insert(p(0, y), y as usize);
        }
        assert_eq!(depth(&tree, p(0, 0)), Some(99_999));
        assert_eq!(tree.iter().count(), 100_000);
        tree.check_invariants().unwrap();
        // One access to the bottom roughly halves the height of the path.
        tree.lookup(p(0, 0));
        assert_eq!(tree.root_key(), Some(p(0, 0)));
        assert!(height(&tree) <= 50_001, "height {}", height(&tree));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn many_keys() {
        let mut tree = SplayTree::new();
        for i in 0..1000i32 {
            tree.insert(p(i % 37, i / 37), i as usize);
        }
        assert_eq!(tree.len(), 1000);
        for i in 0..1000i32 {
            assert_eq!(tree.lookup(p(i % 37, i / 37)), Some(&(i as usize)));
        }
        tree.check_invariants().unwrap();
    }

    #[test]
    fn clear_keeps_rotation_count() {
        let mut tree = SplayTree::new();
        tree.insert(p(0, 0), 0usize);
        tree.insert(p(0, 1), 1);
        let rotations = tree.rotations();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.rotations(), rotations);
        tree.insert(p(5, 5), 5);
        assert_eq!(tree.lookup(p(5, 5)), Some(&5));
    }
}
