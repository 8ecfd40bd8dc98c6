use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::mem;
use std::ptr::NonNull;

pub mod iter;

use iter::{Display, IntoIter, Iter, Traversal, Traverse};

/// An ordered collection of elements implemented with an AVL tree.
///
/// Elements are kept in ascending order. Equal elements are permitted;
/// a newly inserted duplicate is placed after the existing equal elements
/// and stays there, since rotations preserve the inorder sequence.
///
/// ```
/// use balanced_tree::BalancedTree;
/// let mut tree = BalancedTree::new();
/// tree.insert(2);
/// tree.insert(0);
/// tree.insert(1);
/// assert_eq!(tree.get(&1), Some(&1));
/// tree.remove(&1);
/// assert!(tree.get(&1).is_none());
/// assert_eq!(tree.min(), Some(&0));
/// ```
pub struct BalancedTree<T> {
    root: Link<T>,
    num_nodes: usize,
}

pub(crate) struct Node<T> {
    pub(crate) element: T,
    // height(right) - height(left), in {-1, 0, 1} between operations
    balance: i8,
    pub(crate) parent: Link<T>,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

pub(crate) type NodePtr<T> = NonNull<Node<T>>;
pub(crate) type Link<T> = Option<NodePtr<T>>;
type LinkPtr<T> = NonNull<Link<T>>;

enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

impl<T: Ord> BalancedTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first element is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns a reference to the element in the tree that is equal to the
    /// given value, if any.
    ///
    /// The value may be any borrowed form of the element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value)
            .map(|node_ptr| &unsafe { &*node_ptr.as_ptr() }.element)
    }

    /// Returns true if the tree contains an element equal to the given value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Inserts an element into the tree.
    ///
    /// Elements comparing equal to an element already present are accepted
    /// and placed after the existing ones in ascending order.
    pub fn insert(&mut self, element: T) {
        let (parent, mut link_ptr) = self.find_insert_pos(&element);
        let node_ptr = Node::create(parent, element);
        unsafe {
            *link_ptr.as_mut() = Some(node_ptr);
        }
        self.num_nodes += 1;
        unsafe { self.rebalance_grown(node_ptr) };
    }

    /// Removes an element equal to the given value from the tree, dropping
    /// it. Returns whether such an element was present.
    /// If duplicates are present only one of them is removed.
    ///
    /// The value may be any borrowed form of the element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find(value) {
            Some(node_ptr) => {
                self.remove_node(node_ptr);
                true
            }
            None => false,
        }
    }

    /// Removes an element equal to the given value from the tree and
    /// returns it instead of dropping it.
    ///
    /// The value may be any borrowed form of the element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).map(|node_ptr| self.remove_node(node_ptr))
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        unsafe {
            // Check root link
            if let Some(root_node_ptr) = self.root {
                assert!(root_node_ptr.as_ref().parent.is_none());
            }

            // Check tree nodes
            let mut num_nodes = 0;
            let height = Self::check_subtree(self.root, &mut num_nodes);

            // Check number of nodes and the stored-balance height shortcut
            assert_eq!(num_nodes, self.num_nodes);
            assert_eq!(height, self.height());
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    unsafe fn check_subtree(link: Link<T>, num_nodes: &mut usize) -> usize {
        let node_ptr = match link {
            None => return 0,
            Some(node_ptr) => node_ptr,
        };
        let node = node_ptr.as_ref();

        // Check link and order for left child node.
        // Equal elements descend right on insert, so the left subtree
        // holds nothing greater and the right subtree nothing smaller.
        if let Some(left_ptr) = node.left {
            assert!(left_ptr.as_ref().parent == Some(node_ptr));
            assert!(left_ptr.as_ref().element <= node.element);
        }

        // Check link and order for right child node
        if let Some(right_ptr) = node.right {
            assert!(right_ptr.as_ref().parent == Some(node_ptr));
            assert!(right_ptr.as_ref().element >= node.element);
        }

        let left_height = Self::check_subtree(node.left, num_nodes);
        let right_height = Self::check_subtree(node.right, num_nodes);

        // Check balance factor against recomputed subtree heights
        assert_eq!(
            node.balance as isize,
            right_height as isize - left_height as isize
        );

        // Check AVL condition
        assert!(node.balance.abs() <= 1);

        *num_nodes += 1;
        1 + cmp::max(left_height, right_height)
    }

    fn find<Q>(&self, value: &Q) -> Link<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            current = unsafe {
                match value.cmp(node_ptr.as_ref().element.borrow()) {
                    Ordering::Equal => break,
                    Ordering::Less => node_ptr.as_ref().left,
                    Ordering::Greater => node_ptr.as_ref().right,
                }
            }
        }
        current
    }

    fn find_insert_pos(&mut self, element: &T) -> (Link<T>, LinkPtr<T>) {
        let mut parent: Link<T> = None;
        let mut link_ptr: LinkPtr<T> = unsafe { LinkPtr::new_unchecked(&mut self.root) };
        unsafe {
            while let Some(mut node_ptr) = *link_ptr.as_ref() {
                parent = *link_ptr.as_ref();
                // Equal elements descend to the right, keeping insertion
                // order among duplicates deterministic.
                if *element < node_ptr.as_ref().element {
                    link_ptr = LinkPtr::new_unchecked(&mut node_ptr.as_mut().left);
                } else {
                    link_ptr = LinkPtr::new_unchecked(&mut node_ptr.as_mut().right);
                }
            }
        }
        (parent, link_ptr)
    }

    /// Unlinks the node from the tree and returns its element.
    fn remove_node(&mut self, node_ptr: NodePtr<T>) -> T {
        debug_assert!(self.num_nodes >= 1);
        let boxed = unsafe { self.unlink_node(node_ptr) };
        self.num_nodes -= 1;
        boxed.element
    }

    /// Unlinks the node from the tree, restores balance and hands the
    /// physically removed node back for destruction.
    unsafe fn unlink_node(&mut self, mut node_ptr: NodePtr<T>) -> Box<Node<T>> {
        // A node with two children cannot be spliced out directly.
        // Swap its element with the inorder successor's (the leftmost node
        // of the right subtree, which has no left child) and splice the
        // successor node out instead.
        if node_ptr.as_ref().left.is_some() && node_ptr.as_ref().right.is_some() {
            let mut succ_ptr = node_ptr.as_ref().right.unwrap();
            while let Some(left_ptr) = succ_ptr.as_ref().left {
                succ_ptr = left_ptr;
            }
            mem::swap(
                &mut node_ptr.as_mut().element,
                &mut succ_ptr.as_mut().element,
            );
            node_ptr = succ_ptr;
        }

        // Node to-unlink is stem or leaf, link its parent to its only child
        debug_assert!(node_ptr.as_ref().left.is_none() || node_ptr.as_ref().right.is_none());
        let child = node_ptr.as_ref().left.or(node_ptr.as_ref().right);
        if let Some(mut child_ptr) = child {
            child_ptr.as_mut().parent = node_ptr.as_ref().parent;
        }
        match node_ptr.as_ref().parent {
            None => self.root = child,
            Some(mut parent_ptr) => {
                let from_left = parent_ptr.as_ref().left == Some(node_ptr);
                if from_left {
                    parent_ptr.as_mut().left = child;
                } else {
                    parent_ptr.as_mut().right = child;
                }
                // Parent node might be out of balance now
                self.rebalance_shrunk(parent_ptr, from_left);
            }
        }

        Box::from_raw(node_ptr.as_ptr())
    }

    /// Restores balance after the subtree below the new node grew by one.
    /// Walks from the new node's parent up toward the root, adjusting
    /// balance factors for the side that grew. A node reaching balance 0
    /// absorbed the growth and ends the walk; at most one rebalance
    /// operation is ever needed.
    unsafe fn rebalance_grown(&mut self, mut node_ptr: NodePtr<T>) {
        while let Some(mut parent_ptr) = node_ptr.as_ref().parent {
            let from_left = parent_ptr.as_ref().left == Some(node_ptr);
            let balance = parent_ptr.as_ref().balance + if from_left { -1 } else { 1 };
            parent_ptr.as_mut().balance = balance;
            match balance {
                0 => break,
                -1 | 1 => node_ptr = parent_ptr,
                _ => {
                    self.rebalance_node(parent_ptr);
                    break;
                }
            }
        }
    }

    /// Restores balance after the subtree below `parent_ptr` on the given
    /// side shrank by one. Walks up toward the root, adjusting balance
    /// factors for the side that shrank. A node reaching balance ±1 kept
    /// its height and ends the walk; a node reaching 0 or rebalancing to
    /// a 0-balance subtree root shrank further, so the walk continues and
    /// may rebalance at every level.
    unsafe fn rebalance_shrunk(&mut self, parent_ptr: NodePtr<T>, from_left: bool) {
        let mut current = Some(parent_ptr);
        let mut from_left = from_left;
        while let Some(mut node_ptr) = current {
            let balance = node_ptr.as_ref().balance + if from_left { 1 } else { -1 };
            node_ptr.as_mut().balance = balance;

            // Which side of the next ancestor this subtree hangs on,
            // captured before any rotation rewires the links.
            let parent = node_ptr.as_ref().parent;
            let was_left = match parent {
                Some(p) => p.as_ref().left == Some(node_ptr),
                None => false,
            };

            match balance {
                -1 | 1 => break,
                0 => {}
                _ => {
                    let subtree_ptr = self.rebalance_node(node_ptr);
                    if subtree_ptr.as_ref().balance != 0 {
                        // The rotation left the subtree at its old height
                        break;
                    }
                }
            }
            current = parent;
            from_left = was_left;
        }
    }

    /// Restores the AVL condition at a node whose balance reached ±2.
    /// Picks the single or double rotation from the node's and the heavy
    /// child's balance factors and returns the new subtree root.
    unsafe fn rebalance_node(&mut self, node_ptr: NodePtr<T>) -> NodePtr<T> {
        let balance = node_ptr.as_ref().balance;
        debug_assert!(balance == -2 || balance == 2);
        if balance < 0 {
            // Left heavy; a right-leaning left child needs a double rotation
            let left_ptr = node_ptr.as_ref().left.unwrap();
            if left_ptr.as_ref().balance > 0 {
                self.rotate_left(left_ptr);
            }
            self.rotate_right(node_ptr)
        } else {
            // Right heavy; a left-leaning right child needs a double rotation
            let right_ptr = node_ptr.as_ref().right.unwrap();
            if right_ptr.as_ref().balance < 0 {
                self.rotate_right(right_ptr);
            }
            self.rotate_left(node_ptr)
        }
    }

    unsafe fn rotate_left(&mut self, mut node_ptr: NodePtr<T>) -> NodePtr<T> {
        let mut right_ptr = node_ptr.as_ref().right.unwrap();

        node_ptr.as_mut().right = right_ptr.as_ref().left;
        if let Some(mut right_left_ptr) = right_ptr.as_ref().left {
            right_left_ptr.as_mut().parent = Some(node_ptr);
        }

        right_ptr.as_mut().parent = node_ptr.as_ref().parent;
        match node_ptr.as_ref().parent {
            None => self.root = Some(right_ptr),
            Some(mut parent_ptr) => {
                if parent_ptr.as_ref().left == Some(node_ptr) {
                    parent_ptr.as_mut().left = Some(right_ptr);
                } else {
                    parent_ptr.as_mut().right = Some(right_ptr);
                }
            }
        }

        right_ptr.as_mut().left = Some(node_ptr);
        node_ptr.as_mut().parent = Some(right_ptr);

        // Covers both the grown (child at +1) and shrunk (child at 0) cases
        let right_balance = right_ptr.as_ref().balance;
        let node_balance = node_ptr.as_ref().balance - 1 - cmp::max(right_balance, 0);
        node_ptr.as_mut().balance = node_balance;
        right_ptr.as_mut().balance = right_balance - 1 + cmp::min(node_balance, 0);

        right_ptr
    }

    unsafe fn rotate_right(&mut self, mut node_ptr: NodePtr<T>) -> NodePtr<T> {
        let mut left_ptr = node_ptr.as_ref().left.unwrap();

        node_ptr.as_mut().left = left_ptr.as_ref().right;
        if let Some(mut left_right_ptr) = left_ptr.as_ref().right {
            left_right_ptr.as_mut().parent = Some(node_ptr);
        }

        left_ptr.as_mut().parent = node_ptr.as_ref().parent;
        match node_ptr.as_ref().parent {
            None => self.root = Some(left_ptr),
            Some(mut parent_ptr) => {
                if parent_ptr.as_ref().left == Some(node_ptr) {
                    parent_ptr.as_mut().left = Some(left_ptr);
                } else {
                    parent_ptr.as_mut().right = Some(left_ptr);
                }
            }
        }

        left_ptr.as_mut().right = Some(node_ptr);
        node_ptr.as_mut().parent = Some(left_ptr);

        let left_balance = left_ptr.as_ref().balance;
        let node_balance = node_ptr.as_ref().balance + 1 - cmp::min(left_balance, 0);
        node_ptr.as_mut().balance = node_balance;
        left_ptr.as_mut().balance = left_balance + 1 + cmp::max(node_balance, 0);

        left_ptr
    }
}

impl<T> BalancedTree<T> {
    /// Returns true if the tree contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single node.
    ///
    /// Descends the taller side per the stored balance factors,
    /// so this is O(log n) rather than a full subtree walk.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(node_ptr) = current {
            height += 1;
            current = unsafe {
                if node_ptr.as_ref().balance <= 0 {
                    node_ptr.as_ref().left
                } else {
                    node_ptr.as_ref().right
                }
            };
        }
        height
    }

    /// Returns a reference to the smallest element, or `None` if the tree
    /// is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node_ptr = self.root?;
        unsafe {
            while let Some(left_ptr) = node_ptr.as_ref().left {
                node_ptr = left_ptr;
            }
            Some(&(*node_ptr.as_ptr()).element)
        }
    }

    /// Returns a reference to the largest element, or `None` if the tree
    /// is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node_ptr = self.root?;
        unsafe {
            while let Some(right_ptr) = node_ptr.as_ref().right {
                node_ptr = right_ptr;
            }
            Some(&(*node_ptr.as_ptr()).element)
        }
    }

    /// Returns a reference to the first element for which `compare`
    /// reports `Equal`, searching along the unique comparison path.
    ///
    /// `compare` receives the probed element and reports its ordering
    /// relative to the value searched for: on `Less` the search descends
    /// right, on `Greater` left. This allows searching by a partial key,
    /// but the reported ordering *must* be consistent with the order the
    /// elements were inserted under.
    pub fn find_by<F>(&self, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            let node = unsafe { &*node_ptr.as_ptr() };
            current = match compare(&node.element) {
                Ordering::Equal => return Some(&node.element),
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
            };
        }
        None
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        // Iterative postorder walk, so children are destroyed strictly
        // before their parents and recursion depth stays zero.
        if let Some(mut node_ptr) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                            node_ptr = left_ptr;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                            node_ptr = right_ptr;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        // Make sure not to use the node pointer after destruction
                        if let Some(parent_ptr) = unsafe { node_ptr.as_ref().parent } {
                            if Some(node_ptr) == unsafe { parent_ptr.as_ref().left } {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            unsafe { Node::destroy(node_ptr) };
                            node_ptr = parent_ptr;
                        } else {
                            unsafe { Node::destroy(node_ptr) };
                            break;
                        }
                    }
                }
            }
        }
        self.root = None;
        self.num_nodes = 0;
    }

    /// Gets an iterator over the elements of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root, self.num_nodes)
    }

    /// Gets an iterator over the elements of the tree in the given
    /// traversal order.
    ///
    /// Each call starts a fresh traversal. Applying a visitor to every
    /// element is `tree.traverse(order).for_each(..)`.
    pub fn traverse(&self, order: Traversal) -> Traverse<'_, T> {
        Traverse::new(self.root, order)
    }

    /// Returns an adapter that implements [`std::fmt::Display`], rendering
    /// the elements in the given traversal order separated by single
    /// spaces. An empty tree renders as the empty string.
    pub fn display(&self, order: Traversal) -> Display<'_, T> {
        Display::new(self, order)
    }

    /// Unlinks the leftmost node and returns its element without
    /// rebalancing. Only valid for tearing the tree down: balance factors
    /// of the remaining ancestors become stale.
    pub(crate) fn unlink_leftmost(&mut self) -> Option<T> {
        let mut node_ptr = self.root?;
        unsafe {
            while let Some(left_ptr) = node_ptr.as_ref().left {
                node_ptr = left_ptr;
            }
            let right = node_ptr.as_ref().right;
            if let Some(mut right_ptr) = right {
                right_ptr.as_mut().parent = node_ptr.as_ref().parent;
            }
            match node_ptr.as_ref().parent {
                None => self.root = right,
                Some(mut parent_ptr) => parent_ptr.as_mut().left = right,
            }
            self.num_nodes -= 1;
            let boxed = Box::from_raw(node_ptr.as_ptr());
            Some(boxed.element)
        }
    }

    /// Mirror of [`unlink_leftmost`](Self::unlink_leftmost).
    pub(crate) fn unlink_rightmost(&mut self) -> Option<T> {
        let mut node_ptr = self.root?;
        unsafe {
            while let Some(right_ptr) = node_ptr.as_ref().right {
                node_ptr = right_ptr;
            }
            let left = node_ptr.as_ref().left;
            if let Some(mut left_ptr) = left {
                left_ptr.as_mut().parent = node_ptr.as_ref().parent;
            }
            match node_ptr.as_ref().parent {
                None => self.root = left,
                Some(mut parent_ptr) => parent_ptr.as_mut().right = left,
            }
            self.num_nodes -= 1;
            let boxed = Box::from_raw(node_ptr.as_ptr());
            Some(boxed.element)
        }
    }
}

impl<T> Drop for BalancedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Default for BalancedTree<T> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BalancedTree<T> {
    /// Structural copy: the clone has the same shape and balance factors
    /// as the original, not just the same elements.
    fn clone(&self) -> Self {
        unsafe fn clone_subtree<T: Clone>(link: Link<T>, parent: Link<T>) -> Link<T> {
            link.map(|node_ptr| {
                let node = &*node_ptr.as_ptr();
                let mut new_ptr = Node::create(parent, node.element.clone());
                new_ptr.as_mut().balance = node.balance;
                new_ptr.as_mut().left = clone_subtree(node.left, Some(new_ptr));
                new_ptr.as_mut().right = clone_subtree(node.right, Some(new_ptr));
                new_ptr
            })
        }
        Self {
            root: unsafe { clone_subtree(self.root, None) },
            num_nodes: self.num_nodes,
        }
    }
}

impl<T: Ord> FromIterator<T> for BalancedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for element in iter {
            tree.insert(element);
        }
        tree
    }
}

impl<T: Ord> Extend<T> for BalancedTree<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(move |element| {
            self.insert(element);
        });
    }
}

impl<'a, T> Extend<&'a T> for BalancedTree<T>
where
    T: Ord + Copy,
    T: 'a,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a BalancedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BalancedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    /// Gets an owning iterator over the elements in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: PartialEq> PartialEq for BalancedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BalancedTree<T> {}

// No whole-tree PartialOrd/Ord: Ord::min and Ord::max take self by value
// and would shadow the inherent min/max accessors on owned trees.

impl<T: fmt::Debug> fmt::Debug for BalancedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BalancedTree<T> {
    /// Renders the elements in ascending order separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display(Traversal::Inorder), f)
    }
}

// The tree exclusively owns its nodes, so it is as thread-compatible as
// its element type. Mutating it from multiple threads still requires
// external synchronization, as with any std collection.
unsafe impl<T: Send> Send for BalancedTree<T> {}
unsafe impl<T: Sync> Sync for BalancedTree<T> {}

impl<T> Node<T> {
    fn create(parent: Link<T>, element: T) -> NodePtr<T> {
        let boxed = Box::new(Node {
            element,
            balance: 0,
            parent,
            left: None,
            right: None,
        });
        unsafe { NodePtr::new_unchecked(Box::into_raw(boxed)) }
    }

    /// Frees the node, dropping its element.
    unsafe fn destroy(node_ptr: NodePtr<T>) {
        drop(Box::from_raw(node_ptr.as_ptr()));
    }
}
