//! A doubly-linked list with owned nodes and detached position cursors.
//!
//! `LinkedList` allows pushing and popping elements at either end in constant
//! time, and inserting or erasing in the middle in constant time once a
//! [`Cursor`] to the position is known.
//!
//! A cursor is a plain handle to a node. It carries no lifetime, so it can be
//! kept around while the list is mutated: every insertion, and every erasure
//! of *another* node, leaves it valid. Only erasing the node it references
//! (directly, through `clear`, or by dropping the list) invalidates it. The
//! compiler cannot track that, so the operations that follow a cursor are
//! `unsafe fn`s; in debug builds they assert that the cursor still belongs to
//! the list they are called on.
//!
//! Element accessors by offset (`at`, `front`, `back`) return `Option`, and
//! `list[i]` panics on an out-of-range index like slice indexing does.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Add, AddAssign, Index, IndexMut};
use core::ptr::{self, NonNull};

/// A doubly-linked list with owned nodes.
///
/// See the [module documentation](self) for the cursor contract.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    prev: Option<NonNull<Node<T>>>,
    element: T,
}

/// A handle to an element of a [`LinkedList`], or to the end position.
///
/// This flavour may be used to mutate the element it refers to and to insert
/// or erase at its position. It converts into a [`ConstCursor`].
pub struct Cursor<T> {
    node: Option<NonNull<Node<T>>>,
}

/// A read-only handle to an element of a [`LinkedList`], or to the end
/// position.
pub struct ConstCursor<T> {
    node: Option<NonNull<Node<T>>>,
}

/// An iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter()`].
pub struct Iter<'a, T: 'a> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// A mutable iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter_mut()`].
pub struct IterMut<'a, T: 'a> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

/// An owning iterator over the elements of a `LinkedList`.
#[derive(Clone)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Node {
            next: None,
            prev: None,
            element,
        }
    }

    fn boxed(element: T) -> Box<Self> {
        Box::new(Node::new(element))
    }

    fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Cursor<T> {
    fn new(node: NonNull<Node<T>>) -> Self {
        Cursor { node: Some(node) }
    }

    /// The past-the-end cursor.
    pub const fn end() -> Self {
        Cursor { node: None }
    }

    /// Returns `true` if this is the end cursor.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns `true` if this cursor references an element.
    pub fn is_node(&self) -> bool {
        self.node.is_some()
    }

    /// Moves to the following element, or to the end. The end cursor stays
    /// at the end.
    ///
    /// # Safety
    ///
    /// The cursor must be the end cursor or reference a live node.
    pub unsafe fn move_next(&mut self) {
        if let Some(node) = self.node {
            self.node = unsafe { (*node.as_ptr()).next };
        }
    }

    /// Returns the cursor `steps` elements further on, stopping at the end.
    ///
    /// # Safety
    ///
    /// Same as [`Cursor::move_next`].
    pub unsafe fn advance(mut self, steps: usize) -> Self {
        for _ in 0..steps {
            if self.is_end() {
                break;
            }
            unsafe { self.move_next() };
        }
        self
    }
}

impl<T> ConstCursor<T> {
    /// The past-the-end cursor.
    pub const fn end() -> Self {
        ConstCursor { node: None }
    }

    /// Returns `true` if this is the end cursor.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns `true` if this cursor references an element.
    pub fn is_node(&self) -> bool {
        self.node.is_some()
    }

    /// Read-only counterpart of [`Cursor::move_next`].
    ///
    /// # Safety
    ///
    /// The cursor must be the end cursor or reference a live node.
    pub unsafe fn move_next(&mut self) {
        if let Some(node) = self.node {
            self.node = unsafe { (*node.as_ptr()).next };
        }
    }

    /// Returns the cursor `steps` elements further on, stopping at the end.
    ///
    /// # Safety
    ///
    /// Same as [`ConstCursor::move_next`].
    pub unsafe fn advance(mut self, steps: usize) -> Self {
        for _ in 0..steps {
            if self.is_end() {
                break;
            }
            unsafe { self.move_next() };
        }
        self
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Clone for ConstCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstCursor<T> {}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Cursor::end()
    }
}

impl<T> Default for ConstCursor<T> {
    fn default() -> Self {
        ConstCursor::end()
    }
}

impl<T> From<Cursor<T>> for ConstCursor<T> {
    fn from(cursor: Cursor<T>) -> Self {
        ConstCursor { node: cursor.node }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialEq for ConstCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for ConstCursor<T> {}

impl<T> PartialEq<ConstCursor<T>> for Cursor<T> {
    fn eq(&self, other: &ConstCursor<T>) -> bool {
        self.node == other.node
    }
}

impl<T> PartialEq<Cursor<T>> for ConstCursor<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.node == other.node
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.node.map(NonNull::as_ptr))
            .finish()
    }
}

impl<T> fmt::Debug for ConstCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstCursor")
            .field(&self.node.map(NonNull::as_ptr))
            .finish()
    }
}

// private methods
impl<T> LinkedList<T> {
    /// Adds the given node to the front of the list.
    #[inline]
    fn push_front_node(&mut self, mut node: Box<Node<T>>) -> NonNull<Node<T>> {
        node.next = self.head;
        node.prev = None;
        let node = NonNull::from(Box::leak(node));

        match self.head {
            None => self.tail = Some(node),
            // Not creating new mutable (unique!) references overlapping `element`.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
        }

        self.head = Some(node);
        self.len += 1;
        node
    }

    /// Removes and returns the node at the front of the list.
    #[inline]
    fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        self.head.map(|node| unsafe {
            let node = Box::from_raw(node.as_ptr());
            self.head = node.next;

            match self.head {
                None => self.tail = None,
                Some(head) => (*head.as_ptr()).prev = None,
            }

            self.len -= 1;
            node
        })
    }

    /// Adds the given node to the back of the list.
    #[inline]
    fn push_back_node(&mut self, mut node: Box<Node<T>>) -> NonNull<Node<T>> {
        node.next = None;
        node.prev = self.tail;
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            None => self.head = Some(node),
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }

        self.tail = Some(node);
        self.len += 1;
        node
    }

    /// Removes and returns the node at the back of the list.
    #[inline]
    fn pop_back_node(&mut self) -> Option<Box<Node<T>>> {
        self.tail.map(|node| unsafe {
            let node = Box::from_raw(node.as_ptr());
            self.tail = node.prev;

            match self.tail {
                None => self.head = None,
                Some(tail) => (*tail.as_ptr()).next = None,
            }

            self.len -= 1;
            node
        })
    }

    /// Unlinks the specified node from the current list and takes ownership
    /// of it back.
    ///
    /// Warning: this will not check that the provided node belongs to the current list.
    #[inline]
    unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let mut node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            Some(prev) => unsafe { (*prev.as_ptr()).next = node.next },
            // this node is the head node
            None => self.head = node.next,
        };

        match node.next {
            Some(next) => unsafe { (*next.as_ptr()).prev = node.prev },
            // this node is the tail node
            None => self.tail = node.prev,
        };

        node.next = None;
        node.prev = None;
        self.len -= 1;
        node
    }

    /// Splices a series of nodes between two existing nodes.
    ///
    /// Warning: this will not check that the provided nodes belong to the
    /// current list, or that `existing_prev` and `existing_next` are adjacent.
    #[inline]
    unsafe fn splice_nodes(
        &mut self,
        existing_prev: Option<NonNull<Node<T>>>,
        existing_next: Option<NonNull<Node<T>>>,
        splice_start: NonNull<Node<T>>,
        splice_end: NonNull<Node<T>>,
        splice_length: usize,
    ) {
        match existing_prev {
            Some(prev) => unsafe { (*prev.as_ptr()).next = Some(splice_start) },
            None => self.head = Some(splice_start),
        }
        match existing_next {
            Some(next) => unsafe { (*next.as_ptr()).prev = Some(splice_end) },
            None => self.tail = Some(splice_end),
        }
        unsafe {
            (*splice_start.as_ptr()).prev = existing_prev;
            (*splice_end.as_ptr()).next = existing_next;
        }

        self.len += splice_length;
    }

    /// Detaches all nodes from a linked list as a series of nodes.
    #[inline]
    fn detach_all_nodes(mut self) -> Option<(NonNull<Node<T>>, NonNull<Node<T>>, usize)> {
        let head = self.head.take()?;
        let tail = self.tail.take()?;
        let len = mem::replace(&mut self.len, 0);
        Some((head, tail, len))
    }

    /// Allocates a node for `element` and links it in front of `existing`.
    #[inline]
    unsafe fn link_before(&mut self, existing: NonNull<Node<T>>, element: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Node::boxed(element)));
        unsafe {
            let prev = (*existing.as_ptr()).prev;
            self.splice_nodes(prev, Some(existing), node, node, 1);
        }
        node
    }

    /// Finds the node at `offset`, walking from whichever end is closer.
    fn node_at(&self, offset: usize) -> Option<NonNull<Node<T>>> {
        if offset >= self.len {
            return None;
        }
        let from_back = self.len - offset - 1;
        unsafe {
            if offset <= from_back {
                let mut node = self.head;
                for _ in 0..offset {
                    node = node.and_then(|n| (*n.as_ptr()).next);
                }
                node
            } else {
                let mut node = self.tail;
                for _ in 0..from_back {
                    node = node.and_then(|n| (*n.as_ptr()).prev);
                }
                node
            }
        }
    }

    fn owns_node(&self, target: NonNull<Node<T>>) -> bool {
        let mut node = self.head;
        while let Some(n) = node {
            if n == target {
                return true;
            }
            node = unsafe { (*n.as_ptr()).next };
        }
        false
    }

    #[inline]
    fn debug_assert_owns(&self, node: Option<NonNull<Node<T>>>) {
        debug_assert!(
            node.map_or(true, |n| self.owns_node(n)),
            "cursor does not reference a live node of this list"
        );
    }
}

impl<T> Default for LinkedList<T> {
    /// Creates an empty `LinkedList<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty `LinkedList`.
    #[inline]
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements. *O*(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Cursor to the first element, or the end cursor if the list is empty.
    #[inline]
    pub fn begin(&self) -> Cursor<T> {
        Cursor { node: self.head }
    }

    /// The past-the-end cursor.
    #[inline]
    pub fn end(&self) -> Cursor<T> {
        Cursor::end()
    }

    /// Appends an element and returns a cursor to it. *O*(1).
    pub fn push_back(&mut self, element: T) -> Cursor<T> {
        Cursor::new(self.push_back_node(Node::boxed(element)))
    }

    /// Prepends an element and returns a cursor to it. *O*(1).
    pub fn push_front(&mut self, element: T) -> Cursor<T> {
        Cursor::new(self.push_front_node(Node::boxed(element)))
    }

    /// Like [`push_back`](Self::push_back), building the element with `make`.
    pub fn emplace_back<F>(&mut self, make: F) -> Cursor<T>
    where
        F: FnOnce() -> T,
    {
        self.push_back(make())
    }

    /// Like [`push_front`](Self::push_front), building the element with `make`.
    pub fn emplace_front<F>(&mut self, make: F) -> Cursor<T>
    where
        F: FnOnce() -> T,
    {
        self.push_front(make())
    }

    /// Like [`insert_at`](Self::insert_at), building the element with `make`.
    pub fn emplace_at<F>(&mut self, offset: usize, make: F) -> Cursor<T>
    where
        F: FnOnce() -> T,
    {
        self.insert_at(offset, make())
    }

    /// Inserts `element` so that it ends up at `offset`.
    ///
    /// An offset of 0 prepends; an offset at or past the length appends.
    /// Otherwise the element is linked in front of the element currently at
    /// `offset`, which takes *O*(*n*) time to find.
    pub fn insert_at(&mut self, offset: usize, element: T) -> Cursor<T> {
        if offset == 0 {
            return self.push_front(element);
        }
        match self.node_at(offset) {
            None => self.push_back(element),
            Some(existing) => Cursor::new(unsafe { self.link_before(existing, element) }),
        }
    }

    /// Inserts `element` in front of the element referenced by `cursor`, or
    /// at the back if `cursor` is the end cursor. *O*(1).
    ///
    /// # Safety
    ///
    /// `cursor` must be the end cursor or reference a live node of this list.
    pub unsafe fn insert_before(&mut self, cursor: Cursor<T>, element: T) -> Cursor<T> {
        self.debug_assert_owns(cursor.node);
        match cursor.node {
            None => self.push_back(element),
            Some(existing) => Cursor::new(unsafe { self.link_before(existing, element) }),
        }
    }

    /// Like [`insert_before`](Self::insert_before), building the element with
    /// `make`.
    ///
    /// # Safety
    ///
    /// Same as [`insert_before`](Self::insert_before).
    pub unsafe fn emplace_before<F>(&mut self, cursor: Cursor<T>, make: F) -> Cursor<T>
    where
        F: FnOnce() -> T,
    {
        unsafe { self.insert_before(cursor, make()) }
    }

    /// Erases the element referenced by `cursor` and returns a cursor to the
    /// element that followed it. Erasing the end cursor does nothing and
    /// returns the end cursor. *O*(1).
    ///
    /// Every other cursor into the list stays valid.
    ///
    /// # Safety
    ///
    /// `cursor` must be the end cursor or reference a live node of this list.
    pub unsafe fn erase(&mut self, cursor: Cursor<T>) -> Cursor<T> {
        self.debug_assert_owns(cursor.node);
        match cursor.node {
            None => Cursor::end(),
            Some(node) => {
                let next = Cursor {
                    node: unsafe { (*node.as_ptr()).next },
                };
                // The list is consistent again before the element's destructor runs.
                drop(unsafe { self.unlink_node(node) });
                next
            }
        }
    }

    /// Erases `[from, to)` and returns `to`.
    ///
    /// # Safety
    ///
    /// Both cursors must be the end cursor or reference live nodes of this
    /// list, and `to` must be reachable from `from`.
    pub unsafe fn erase_range(&mut self, from: Cursor<T>, to: Cursor<T>) -> Cursor<T> {
        self.debug_assert_owns(to.node);
        let mut cursor = from;
        while cursor != to && cursor.is_node() {
            cursor = unsafe { self.erase(cursor) };
        }
        to
    }

    /// Removes the element referenced by `cursor` and returns it, or `None`
    /// for the end cursor.
    ///
    /// # Safety
    ///
    /// `cursor` must be the end cursor or reference a live node of this list.
    pub unsafe fn remove(&mut self, cursor: Cursor<T>) -> Option<T> {
        self.debug_assert_owns(cursor.node);
        let node = cursor.node?;
        Some(unsafe { self.unlink_node(node) }.into_element())
    }

    /// Erases the element at `offset`. Out-of-range offsets do nothing and
    /// return the end cursor.
    pub fn erase_at(&mut self, offset: usize) -> Cursor<T> {
        let cursor = self.cursor_at(offset);
        unsafe { self.erase(cursor) }
    }

    /// Erases the element stored at address `element`, if it lives in this
    /// list. A `&T` into the list coerces to the pointer.
    pub fn erase_ptr(&mut self, element: *const T) -> Cursor<T> {
        let cursor = self.cursor_of_ptr(element);
        unsafe { self.erase(cursor) }
    }

    /// Removes all elements. *O*(*n*).
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Removes all elements, handing each one to `on_destroy` right before it
    /// is dropped.
    pub fn clear_with<F>(&mut self, mut on_destroy: F)
    where
        F: FnMut(&mut T),
    {
        while let Some(mut node) = self.pop_front_node() {
            on_destroy(&mut node.element);
        }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_front_node().map(Node::into_element)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop_back_node().map(Node::into_element)
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.as_ref().map(|node| &node.as_ref().element) }
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.as_mut().map(|node| &mut node.as_mut().element) }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.as_ref().map(|node| &node.as_ref().element) }
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.as_mut().map(|node| &mut node.as_mut().element) }
    }

    /// Returns the element at `offset`, or `None` if out of range. *O*(*n*).
    pub fn at(&self, offset: usize) -> Option<&T> {
        self.node_at(offset)
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.node_at(offset)
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Cursor to the element at `offset`, or the end cursor if out of range.
    pub fn cursor_at(&self, offset: usize) -> Cursor<T> {
        Cursor {
            node: self.node_at(offset),
        }
    }

    /// Cursor to the element stored at the address of `element`, or the end
    /// cursor if no element of this list lives there.
    pub fn cursor_of(&self, element: &T) -> Cursor<T> {
        self.cursor_of_ptr(element)
    }

    /// Cursor to the element stored at address `element`, or the end cursor.
    pub fn cursor_of_ptr(&self, element: *const T) -> Cursor<T> {
        let mut node = self.head;
        while let Some(n) = node {
            unsafe {
                if ptr::addr_of!((*n.as_ptr()).element) == element {
                    return Cursor::new(n);
                }
                node = (*n.as_ptr()).next;
            }
        }
        Cursor::end()
    }

    /// Returns `true` if `cursor` is the end cursor or references an element
    /// of this list. *O*(*n*).
    ///
    /// This is the checked way to validate a cursor before handing it to one
    /// of the `unsafe` cursor operations.
    pub fn contains_cursor<C>(&self, cursor: C) -> bool
    where
        C: Into<ConstCursor<T>>,
    {
        cursor.into().node.map_or(true, |n| self.owns_node(n))
    }

    /// Returns the element `cursor` references, or `None` for the end
    /// cursor.
    ///
    /// # Safety
    ///
    /// `cursor` must be the end cursor or reference a live node of this list.
    pub unsafe fn get<C>(&self, cursor: C) -> Option<&T>
    where
        C: Into<ConstCursor<T>>,
    {
        let node = cursor.into().node;
        self.debug_assert_owns(node);
        node.map(|n| unsafe { &(*n.as_ptr()).element })
    }

    /// Mutable counterpart of [`get`](Self::get). Only the mutable cursor
    /// flavour is accepted.
    ///
    /// # Safety
    ///
    /// `cursor` must be the end cursor or reference a live node of this list.
    pub unsafe fn get_mut(&mut self, cursor: Cursor<T>) -> Option<&mut T> {
        self.debug_assert_owns(cursor.node);
        cursor.node.map(|n| unsafe { &mut (*n.as_ptr()).element })
    }

    /// Returns `true` if the list contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty. *O*(1).
    pub fn append(&mut self, other: &mut Self) {
        if let Some((head, tail, len)) = mem::take(other).detach_all_nodes() {
            let existing_tail = self.tail;
            unsafe { self.splice_nodes(existing_tail, None, head, tail, len) };
        }
    }

    /// Moves all elements from `other` to the beginning of the list. *O*(1).
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some((head, tail, len)) = mem::take(other).detach_all_nodes() {
            let existing_head = self.head;
            unsafe { self.splice_nodes(None, existing_head, head, tail, len) };
        }
    }

    /// Appends a clone of every element of `other`, in order. `other` is left
    /// untouched. *O*(`other.len()`).
    pub fn extend_from_list(&mut self, other: &Self)
    where
        T: Clone,
    {
        for element in other {
            self.push_back(element.clone());
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        struct DropGuard<'a, T>(&'a mut LinkedList<T>);

        impl<'a, T> Drop for DropGuard<'a, T> {
            fn drop(&mut self) {
                // Continue the same loop we do below. This only runs when a destructor has
                // panicked. If another one panics this will abort.
                while self.0.pop_front_node().is_some() {}
            }
        }

        while let Some(node) = self.pop_front_node() {
            let guard = DropGuard(self);
            drop(node);
            mem::forget(guard);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            None
        } else {
            self.head.map(|node| unsafe {
                // Need an unbound lifetime to get 'a
                let node = &*node.as_ptr();
                self.len -= 1;
                self.head = node.next;
                &node.element
            })
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            None
        } else {
            self.tail.map(|node| unsafe {
                let node = &*node.as_ptr();
                self.len -= 1;
                self.tail = node.prev;
                &node.element
            })
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            None
        } else {
            self.head.map(|node| unsafe {
                let node = &mut *node.as_ptr();
                self.len -= 1;
                self.head = node.next;
                &mut node.element
            })
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            None
        } else {
            self.tail.map(|node| unsafe {
                let node = &mut *node.as_ptr();
                self.len -= 1;
                self.tail = node.prev;
                &mut node.element
            })
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |elt| {
            self.push_back(elt);
        });
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.at(index).unwrap_or_else(|| {
            panic!("index out of bounds: the len is {} but the index is {}", len, index)
        })
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.at_mut(index).unwrap_or_else(|| {
            panic!("index out of bounds: the len is {} but the index is {}", len, index)
        })
    }
}

/// Copy-append: `list += &other` clones every element of `other`.
impl<T: Clone> AddAssign<&LinkedList<T>> for LinkedList<T> {
    fn add_assign(&mut self, other: &LinkedList<T>) {
        self.extend_from_list(other);
    }
}

/// Splice: `list += other` takes over the nodes of `other` in *O*(1).
impl<T> AddAssign<LinkedList<T>> for LinkedList<T> {
    fn add_assign(&mut self, mut other: LinkedList<T>) {
        self.append(&mut other);
    }
}

impl<T: Clone> Add<&LinkedList<T>> for &LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(self, other: &LinkedList<T>) -> LinkedList<T> {
        let mut list = self.clone();
        list += other;
        list
    }
}

impl<T: Clone> Add<LinkedList<T>> for &LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(self, other: LinkedList<T>) -> LinkedList<T> {
        let mut list = self.clone();
        list += other;
        list
    }
}

impl<T: Clone> Add<&LinkedList<T>> for LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(mut self, other: &LinkedList<T>) -> LinkedList<T> {
        self += other;
        self
    }
}

impl<T> Add<LinkedList<T>> for LinkedList<T> {
    type Output = LinkedList<T>;

    fn add(mut self, other: LinkedList<T>) -> LinkedList<T> {
        self += other;
        self
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Drops every element of `self` first, then copies `source` in order.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_list(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}

unsafe impl<T: Sync> Sync for LinkedList<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Walks the chain both ways and checks it against `len`.
    fn check_links<T>(list: &LinkedList<T>) {
        assert_eq!(list.head.is_none(), list.tail.is_none());
        assert_eq!(list.head.is_none(), list.len == 0);

        let mut forward = 0;
        let mut last = None;
        let mut node = list.head;
        unsafe {
            while let Some(n) = node {
                assert_eq!((*n.as_ptr()).prev, last);
                last = Some(n);
                node = (*n.as_ptr()).next;
                forward += 1;
            }
        }
        assert_eq!(last, list.tail);
        assert_eq!(forward, list.len);

        let mut backward = 0;
        let mut node = list.tail;
        unsafe {
            while let Some(n) = node {
                node = (*n.as_ptr()).prev;
                backward += 1;
            }
        }
        assert_eq!(backward, list.len);
    }

    fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn push_and_erase_scenario() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        assert_eq!(contents(&list), vec![0, 1, 2]);
        assert_eq!(list.len(), 3);

        list.erase_at(1);
        assert_eq!(contents(&list), vec![0, 2]);
        assert_eq!(list.len(), 2);
        check_links(&list);

        let mut other: LinkedList<i32> = vec![5, 6].into_iter().collect();
        list += mem::take(&mut other);
        assert_eq!(contents(&list), vec![0, 2, 5, 6]);
        assert!(other.is_empty());
        check_links(&list);
        check_links(&other);
    }

    #[test]
    fn missing_value_gives_end_and_erasing_end_is_noop() {
        let mut list: LinkedList<i32> = (0..4).collect();
        let stranger = 2;
        let cursor = list.cursor_of(&stranger);
        assert!(cursor.is_end());
        assert_eq!(cursor, list.end());

        let next = unsafe { list.erase(cursor) };
        assert!(next.is_end());
        assert_eq!(list.len(), 4);
        assert!(list.erase_ptr(&stranger).is_end());
        assert_eq!(list.len(), 4);
        assert!(list.erase_at(10).is_end());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn insert_at_boundaries_match_push() {
        let mut a: LinkedList<i32> = (1..4).collect();
        let mut b = a.clone();
        a.insert_at(0, 9);
        b.push_front(9);
        assert_eq!(a, b);

        a.insert_at(a.len(), 7);
        b.push_back(7);
        a.insert_at(100, 8);
        b.push_back(8);
        assert_eq!(a, b);
        check_links(&a);
    }

    #[test]
    fn insert_at_middle_goes_before_current_element() {
        let mut list: LinkedList<i32> = vec![0, 1, 2, 3, 4].into_iter().collect();
        let cursor = list.insert_at(1, 10);
        assert_eq!(unsafe { list.get(cursor) }, Some(&10));
        list.insert_at(5, 20);
        assert_eq!(contents(&list), vec![0, 10, 1, 2, 3, 20, 4]);
        check_links(&list);
    }

    #[test]
    fn insert_before_cursor_and_end() {
        let mut list = LinkedList::new();
        let two = list.push_back(2);
        unsafe {
            list.insert_before(two, 1);
            list.insert_before(list.end(), 3);
            list.emplace_before(list.begin(), || 0);
        }
        assert_eq!(contents(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&3));
        check_links(&list);
    }

    #[test]
    fn emplace_variants_place_like_push() {
        let mut list: LinkedList<String> = LinkedList::new();
        list.emplace_back(|| "b".to_string());
        list.emplace_front(|| "a".to_string());
        list.emplace_at(1, || "between".to_string());
        assert_eq!(contents(&list), vec!["a", "between", "b"]);
    }

    #[test]
    fn cursors_survive_unrelated_mutation() {
        let mut list = LinkedList::new();
        let a = list.push_back('a');
        let b = list.push_back('b');
        let c = list.push_back('c');

        list.push_front('x');
        list.insert_at(2, 'y');
        let next = unsafe { list.erase(b) };
        assert_eq!(next, c);
        list.push_back('z');

        unsafe {
            assert_eq!(list.get(a), Some(&'a'));
            assert_eq!(list.get(c), Some(&'c'));
            *list.get_mut(a).unwrap() = 'A';
        }
        assert_eq!(contents(&list), vec!['x', 'A', 'y', 'c', 'z']);
        assert!(list.contains_cursor(a));
        assert!(list.contains_cursor(list.end()));
        check_links(&list);
    }

    #[test]
    fn const_cursor_widens_from_cursor() {
        let mut list: LinkedList<i32> = (0..3).collect();
        let cursor = list.cursor_at(1);
        let read_only: ConstCursor<i32> = cursor.into();
        assert_eq!(read_only, cursor);
        assert_eq!(unsafe { list.get(read_only) }, Some(&1));

        let mut walk = ConstCursor::from(list.begin());
        let mut seen = Vec::new();
        while walk.is_node() {
            seen.push(*unsafe { list.get(walk) }.unwrap());
            unsafe { walk.move_next() };
        }
        assert_eq!(seen, vec![0, 1, 2]);

        let last = unsafe { list.begin().advance(2) };
        assert_eq!(last, list.cursor_at(2));
        assert!(unsafe { last.advance(5) }.is_end());

        let middle = unsafe { ConstCursor::from(list.begin()).advance(1) };
        assert!(middle.is_node() && !middle.is_end());
        assert_eq!(unsafe { list.get(middle) }, Some(&1));
        let past = unsafe { middle.advance(7) };
        assert!(past.is_end() && !past.is_node());
        assert_eq!(past, ConstCursor::end());
        assert!(unsafe { ConstCursor::<i32>::end().advance(3) }.is_end());
        list.clear();
        assert!(list.begin().is_end());
    }

    #[test]
    fn erase_updates_endpoints() {
        let mut list: LinkedList<i32> = (0..3).collect();
        let head = list.begin();
        let next = unsafe { list.erase(head) };
        assert_eq!(unsafe { list.get(next) }, Some(&1));
        assert_eq!(list.front(), Some(&1));

        let tail = list.cursor_at(1);
        assert!(unsafe { list.erase(tail) }.is_end());
        assert_eq!(list.back(), Some(&1));

        let only = list.begin();
        unsafe { list.erase(only) };
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        check_links(&list);
    }

    #[test]
    fn erase_range_is_half_open() {
        let mut list: LinkedList<i32> = (0..6).collect();
        let from = list.cursor_at(1);
        let to = list.cursor_at(4);
        let returned = unsafe { list.erase_range(from, to) };
        assert_eq!(returned, to);
        assert_eq!(contents(&list), vec![0, 4, 5]);

        let from = list.begin();
        unsafe { list.erase_range(from, list.end()) };
        assert!(list.is_empty());
        check_links(&list);
    }

    #[test]
    fn erase_by_address() {
        let mut list: LinkedList<i32> = vec![3, 3, 3].into_iter().collect();
        let second: *const i32 = &list[1];
        let cursor = list.cursor_of_ptr(second);
        assert_eq!(cursor, list.cursor_at(1));

        let next = list.erase_ptr(second);
        assert_eq!(next, list.cursor_at(1));
        assert_eq!(list.len(), 2);
        check_links(&list);
    }

    #[test]
    fn remove_returns_element() {
        let mut list: LinkedList<String> = vec!["a".to_string(), "b".to_string()]
            .into_iter()
            .collect();
        let cursor = list.cursor_at(1);
        assert_eq!(unsafe { list.remove(cursor) }, Some("b".to_string()));
        assert_eq!(unsafe { list.remove(list.end()) }, None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn accessors_are_checked() {
        let mut list: LinkedList<i32> = (10..13).collect();
        assert_eq!(list.at(2), Some(&12));
        assert_eq!(list.at(3), None);
        *list.at_mut(0).unwrap() += 5;
        list[1] = 0;
        assert_eq!(list[0], 15);
        assert_eq!(contents(&list), vec![15, 0, 12]);
        *list.front_mut().unwrap() = 1;
        *list.back_mut().unwrap() = 2;
        assert_eq!(contents(&list), vec![1, 0, 2]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_end_panics() {
        let list: LinkedList<i32> = (0..2).collect();
        let _ = list[2];
    }

    #[test]
    fn clear_with_visits_every_element() {
        let mut list: LinkedList<i32> = (1..=4).collect();
        let mut visited = Vec::new();
        list.clear_with(|e| visited.push(*e));
        assert_eq!(visited, vec![1, 2, 3, 4]);
        assert!(list.is_empty());
        check_links(&list);

        list.push_back(7);
        assert_eq!(contents(&list), vec![7]);
    }

    #[test]
    fn clone_is_independent() {
        let original: LinkedList<i32> = (0..5).collect();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_back(5);
        copy[0] = 100;
        copy.erase_at(2);
        assert_eq!(contents(&original), vec![0, 1, 2, 3, 4]);
        check_links(&copy);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let drops = Rc::new(Cell::new(0));
        struct Tracked(Rc<Cell<usize>>);
        impl Clone for Tracked {
            fn clone(&self) -> Self {
                Tracked(self.0.clone())
            }
        }
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut target: LinkedList<Tracked> = (0..3).map(|_| Tracked(drops.clone())).collect();
        let source: LinkedList<Tracked> = (0..2).map(|_| Tracked(drops.clone())).collect();
        target.clone_from(&source);
        assert_eq!(drops.get(), 3);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn move_leaves_source_empty() {
        let mut source: LinkedList<i32> = (0..3).collect();
        let moved = mem::take(&mut source);
        assert!(source.is_empty());
        check_links(&source);
        assert_eq!(contents(&moved), vec![0, 1, 2]);

        let mut destination: LinkedList<i32> = (7..9).collect();
        assert_eq!(destination.len(), 2);
        destination = moved;
        assert_eq!(contents(&destination), vec![0, 1, 2]);
    }

    #[test]
    fn splice_keeps_order_and_moves_nodes() {
        let mut a: LinkedList<i32> = (0..3).collect();
        let mut b: LinkedList<i32> = (3..6).collect();
        let b_head = b.begin();

        a.append(&mut b);
        assert_eq!(a.len(), 6);
        assert!(b.is_empty());
        assert_eq!(contents(&a), vec![0, 1, 2, 3, 4, 5]);
        // The node itself moved; the cursor now belongs to `a`.
        assert!(a.contains_cursor(b_head));
        assert_eq!(unsafe { a.get(b_head) }, Some(&3));
        check_links(&a);
        check_links(&b);

        let mut front: LinkedList<i32> = vec![-2, -1].into_iter().collect();
        a.prepend(&mut front);
        assert_eq!(a.front(), Some(&-2));
        assert!(front.is_empty());
        check_links(&a);
    }

    #[test]
    fn splice_into_and_from_empty() {
        let mut empty = LinkedList::new();
        let mut full: LinkedList<i32> = (0..2).collect();
        empty += mem::take(&mut full);
        assert_eq!(contents(&empty), vec![0, 1]);
        check_links(&empty);

        empty += LinkedList::new();
        assert_eq!(empty.len(), 2);
        check_links(&empty);
    }

    #[test]
    fn copy_append_leaves_operand() {
        let mut a: LinkedList<i32> = (0..2).collect();
        let b: LinkedList<i32> = (2..4).collect();
        a += &b;
        assert_eq!(contents(&a), vec![0, 1, 2, 3]);
        assert_eq!(contents(&b), vec![2, 3]);

        let sum = &a + &b;
        assert_eq!(contents(&sum), vec![0, 1, 2, 3, 2, 3]);
        assert_eq!(a.len(), 4);

        let spliced = &b + (10..12).collect::<LinkedList<i32>>();
        assert_eq!(contents(&spliced), vec![2, 3, 10, 11]);

        let owned = b + &a;
        assert_eq!(owned.len(), 6);
        check_links(&owned);
    }

    #[test]
    fn drain_then_refill_matches_fresh_list() {
        let mut list: LinkedList<i32> = (0..10).collect();
        while !list.is_empty() {
            list.erase_at(list.len() / 2);
        }
        check_links(&list);
        for i in 0..4 {
            list.push_back(i);
        }
        let fresh: LinkedList<i32> = (0..4).collect();
        assert_eq!(list, fresh);
        check_links(&list);
    }

    #[test]
    fn iterators_both_directions() {
        let mut list: LinkedList<i32> = (0..5).collect();
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
        assert_eq!(list.iter().len(), 5);
        for e in list.iter_mut() {
            *e *= 2;
        }
        assert_eq!(list.iter_mut().next_back().map(|e| *e), Some(8));
        assert_eq!(list.clone().into_iter().rev().collect::<Vec<_>>(), vec![8, 6, 4, 2, 0]);
        assert!(list.contains(&6));
        assert!(!list.contains(&5));
        assert_eq!(format!("{:?}", list), "[0, 2, 4, 6, 8]");
    }

    #[test]
    fn long_list_drops_without_recursion() {
        let mut list = LinkedList::new();
        for i in 0..1_000_000u32 {
            list.push_back(i);
        }
        drop(list);
    }

    #[test]
    fn random_operations_match_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut list = LinkedList::new();
        let mut model: VecDeque<u32> = VecDeque::new();
        let mut inserted = 0usize;
        let mut erased = 0usize;

        for step in 0..5_000u32 {
            match rng.gen_range(0..6) {
                0 => {
                    list.push_back(step);
                    model.push_back(step);
                    inserted += 1;
                }
                1 => {
                    list.push_front(step);
                    model.push_front(step);
                    inserted += 1;
                }
                2 => {
                    let offset = rng.gen_range(0..model.len() + 2);
                    list.insert_at(offset, step);
                    model.insert(offset.min(model.len()), step);
                    inserted += 1;
                }
                3 => {
                    let offset = rng.gen_range(0..model.len() + 2);
                    let cursor = list.cursor_at(offset);
                    unsafe { list.insert_before(cursor, step) };
                    model.insert(offset.min(model.len()), step);
                    inserted += 1;
                }
                4 => {
                    let offset = rng.gen_range(0..model.len() + 2);
                    let before = list.len();
                    list.erase_at(offset);
                    if offset < model.len() {
                        model.remove(offset);
                        erased += 1;
                    } else {
                        assert_eq!(list.len(), before);
                    }
                }
                _ => {
                    let popped = if rng.gen_bool(0.5) {
                        let popped = list.pop_front();
                        assert_eq!(popped, model.pop_front());
                        popped
                    } else {
                        let popped = list.pop_back();
                        assert_eq!(popped, model.pop_back());
                        popped
                    };
                    if popped.is_some() {
                        erased += 1;
                    }
                }
            }
        }

        check_links(&list);
        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
        assert_eq!(list.len(), inserted - erased);
    }
}
