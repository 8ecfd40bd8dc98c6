//! Iterators and rendering adapters over a tree.
//!
//! Depth-first orders walk the parent links in O(1) space; level-order
//! drives a FIFO queue of borrowed node pointers that lives and dies with
//! the iterator and never owns an element.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{BalancedTree, Link, Node, NodePtr};

/// The order in which a traversal visits the elements of a tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Traversal {
    /// Node first, then its left subtree, then its right subtree.
    Preorder,
    /// Left subtree, node, right subtree: ascending order.
    Inorder,
    /// Left subtree, right subtree, then the node itself.
    Postorder,
    /// Breadth-first, by depth, left to right within a depth.
    LevelOrder,
}

/// An iterator over the elements of a tree in ascending order.
pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

/// An iterator over the elements of a tree in a chosen traversal order.
///
/// Created by [`traverse`](BalancedTree::traverse). Each instance runs one
/// full traversal and is exhausted afterwards.
pub struct Traverse<'a, T> {
    state: State<T>,
    marker: PhantomData<&'a Node<T>>,
}

enum State<T> {
    Preorder(Link<T>),
    Inorder(Link<T>),
    Postorder(Link<T>),
    LevelOrder(VecDeque<NodePtr<T>>),
}

/// An owning iterator over the elements of a tree in ascending order.
pub struct IntoIter<T> {
    tree: BalancedTree<T>,
}

/// Renders the elements of a borrowed tree in a chosen traversal order,
/// separated by single spaces.
///
/// Created by [`display`](BalancedTree::display).
pub struct Display<'a, T> {
    tree: &'a BalancedTree<T>,
    order: Traversal,
}

unsafe fn leftmost<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    while let Some(left_ptr) = node_ptr.as_ref().left {
        node_ptr = left_ptr;
    }
    node_ptr
}

unsafe fn rightmost<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    while let Some(right_ptr) = node_ptr.as_ref().right {
        node_ptr = right_ptr;
    }
    node_ptr
}

/// Next node in ascending order.
unsafe fn successor<T>(node_ptr: NodePtr<T>) -> Link<T> {
    if let Some(right_ptr) = node_ptr.as_ref().right {
        return Some(leftmost(right_ptr));
    }
    let mut current = node_ptr;
    while let Some(parent_ptr) = current.as_ref().parent {
        if parent_ptr.as_ref().left == Some(current) {
            return Some(parent_ptr);
        }
        current = parent_ptr;
    }
    None
}

/// Next node in descending order.
unsafe fn predecessor<T>(node_ptr: NodePtr<T>) -> Link<T> {
    if let Some(left_ptr) = node_ptr.as_ref().left {
        return Some(rightmost(left_ptr));
    }
    let mut current = node_ptr;
    while let Some(parent_ptr) = current.as_ref().parent {
        if parent_ptr.as_ref().right == Some(current) {
            return Some(parent_ptr);
        }
        current = parent_ptr;
    }
    None
}

unsafe fn preorder_next<T>(node_ptr: NodePtr<T>) -> Link<T> {
    if let Some(left_ptr) = node_ptr.as_ref().left {
        return Some(left_ptr);
    }
    if let Some(right_ptr) = node_ptr.as_ref().right {
        return Some(right_ptr);
    }
    // Climb until an ancestor still has an unvisited right subtree
    let mut current = node_ptr;
    while let Some(parent_ptr) = current.as_ref().parent {
        if parent_ptr.as_ref().left == Some(current) {
            if let Some(right_ptr) = parent_ptr.as_ref().right {
                return Some(right_ptr);
            }
        }
        current = parent_ptr;
    }
    None
}

/// First node of a postorder walk: the deepest leaf reached by always
/// preferring the left child.
unsafe fn postorder_first<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    loop {
        if let Some(left_ptr) = node_ptr.as_ref().left {
            node_ptr = left_ptr;
        } else if let Some(right_ptr) = node_ptr.as_ref().right {
            node_ptr = right_ptr;
        } else {
            return node_ptr;
        }
    }
}

unsafe fn postorder_next<T>(node_ptr: NodePtr<T>) -> Link<T> {
    let parent_ptr = node_ptr.as_ref().parent?;
    if parent_ptr.as_ref().left == Some(node_ptr) {
        if let Some(right_ptr) = parent_ptr.as_ref().right {
            return Some(postorder_first(right_ptr));
        }
    }
    Some(parent_ptr)
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(root: Link<T>, len: usize) -> Self {
        let (front, back) = match root {
            None => (None, None),
            Some(root_ptr) => unsafe { (Some(leftmost(root_ptr)), Some(rightmost(root_ptr))) },
        };
        Self {
            front,
            back,
            remaining: len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node_ptr = self.front?;
        self.front = unsafe { successor(node_ptr) };
        self.remaining -= 1;
        Some(&unsafe { &*node_ptr.as_ptr() }.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node_ptr = self.back?;
        self.back = unsafe { predecessor(node_ptr) };
        self.remaining -= 1;
        Some(&unsafe { &*node_ptr.as_ptr() }.element)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// Auto derived clone would add an unnecessary type bound of T: Clone
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Traverse<'a, T> {
    pub(super) fn new(root: Link<T>, order: Traversal) -> Self {
        let state = match order {
            Traversal::Preorder => State::Preorder(root),
            Traversal::Inorder => {
                State::Inorder(root.map(|root_ptr| unsafe { leftmost(root_ptr) }))
            }
            Traversal::Postorder => {
                State::Postorder(root.map(|root_ptr| unsafe { postorder_first(root_ptr) }))
            }
            Traversal::LevelOrder => State::LevelOrder(root.into_iter().collect()),
        };
        Self {
            state,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node_ptr = match &mut self.state {
            State::Preorder(next) => {
                let node_ptr = (*next)?;
                *next = unsafe { preorder_next(node_ptr) };
                node_ptr
            }
            State::Inorder(next) => {
                let node_ptr = (*next)?;
                *next = unsafe { successor(node_ptr) };
                node_ptr
            }
            State::Postorder(next) => {
                let node_ptr = (*next)?;
                *next = unsafe { postorder_next(node_ptr) };
                node_ptr
            }
            State::LevelOrder(queue) => {
                let node_ptr = queue.pop_front()?;
                unsafe {
                    if let Some(left_ptr) = node_ptr.as_ref().left {
                        queue.push_back(left_ptr);
                    }
                    if let Some(right_ptr) = node_ptr.as_ref().right {
                        queue.push_back(right_ptr);
                    }
                }
                node_ptr
            }
        };
        Some(&unsafe { &*node_ptr.as_ptr() }.element)
    }
}

impl<'a, T> FusedIterator for Traverse<'a, T> {}

impl<T> IntoIter<T> {
    pub(super) fn new(tree: BalancedTree<T>) -> Self {
        Self { tree }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.unlink_leftmost()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.unlink_rightmost()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> Display<'a, T> {
    pub(super) fn new(tree: &'a BalancedTree<T>, order: Traversal) -> Self {
        Self { tree, order }
    }
}

impl<T: fmt::Display> fmt::Display for Display<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, element) in self.tree.traverse(self.order).enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        Ok(())
    }
}
