use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Add, AddAssign};
use std::ptr;
use std::rc::{Rc, Weak};

use crate::list::cursor::{Cursor, CursorMut};
use crate::list::error::ListError;
use crate::{Iter, IterMut};

pub mod cursor;
pub mod error;
pub mod iterator;

pub(crate) type NodeRef<T> = Rc<RefCell<Node<T>>>;
pub(crate) type WeakRef<T> = Weak<RefCell<Node<T>>>;

/// The `List` is a doubly-linked list with owned nodes and dangling-checked
/// cursors. It allows inserting and removing elements at both ends and at any
/// cursor position in constant time.
///
/// The `List` contains:
/// - an owning reference `head` to the first node (absent when empty);
/// - a non-owning reference `tail` to the last node;
/// - a non-owning reference `terminator` to the sentinel node one past the
///   last element;
/// - a length field `len`.
///
/// Only the forward links own nodes: `head` owns the first node, each node
/// owns its successor, and the current tail owns the terminator. Backward
/// links and the `tail`/`terminator` fields never keep a node alive, which is
/// what lets [`Cursor`] and [`CursorMut`] observe a node's destruction
/// instead of prolonging its life.
pub struct List<T> {
    head: Option<NodeRef<T>>,
    tail: WeakRef<T>,
    terminator: WeakRef<T>,
    len: usize,
}

pub(crate) struct Node<T> {
    /// `None` only for the terminator.
    pub(crate) value: Option<T>,
    pub(crate) next: Option<NodeRef<T>>,
    pub(crate) prev: WeakRef<T>,
}

impl<T> Node<T> {
    /// Create an unlinked node holding `value`.
    pub(crate) fn with_value(value: T) -> NodeRef<T> {
        Rc::new(RefCell::new(Node {
            value: Some(value),
            next: None,
            prev: Weak::new(),
        }))
    }

    /// Create an unlinked terminator node, which holds no value.
    pub(crate) fn terminator() -> NodeRef<T> {
        Rc::new(RefCell::new(Node {
            value: None,
            next: None,
            prev: Weak::new(),
        }))
    }
}

/// A size-only view of a list, for code that handles lists of different
/// element types through one handle.
///
/// # Examples
///
/// ```
/// use checked_list::{Len, List};
///
/// let lists: Vec<Box<dyn Len>> = vec![
///     Box::new(List::from([1, 2, 3])),
///     Box::new(List::from(["a", "b"])),
/// ];
/// let total: usize = lists.iter().map(|list| list.len()).sum();
/// assert_eq!(total, 5);
/// assert!(lists.iter().all(|list| !list.is_empty()));
/// ```
pub trait Len {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Len for List<T> {
    fn len(&self) -> usize {
        self.len
    }
}

// private methods
impl<T> List<T> {
    fn is_head(&self, node: &NodeRef<T>) -> bool {
        self.head.as_ref().map_or(false, |head| Rc::ptr_eq(head, node))
    }

    fn is_terminator(&self, node: &NodeRef<T>) -> bool {
        self.terminator
            .upgrade()
            .map_or(false, |terminator| Rc::ptr_eq(&terminator, node))
    }

    /// Link the first node into an empty list, materializing a fresh
    /// terminator behind it.
    fn link_first(&mut self, node: NodeRef<T>) {
        debug_assert!(self.head.is_none());
        let sentinel = Node::terminator();
        sentinel.borrow_mut().prev = Rc::downgrade(&node);
        self.terminator = Rc::downgrade(&sentinel);
        self.tail = Rc::downgrade(&node);
        node.borrow_mut().next = Some(sentinel);
        self.head = Some(node);
    }

    fn push_head_node(&mut self, node: NodeRef<T>) {
        match self.head.take() {
            None => self.link_first(node),
            Some(old_head) => {
                old_head.borrow_mut().prev = Rc::downgrade(&node);
                node.borrow_mut().next = Some(old_head);
                self.head = Some(node);
            }
        }
        self.len += 1;
    }

    fn push_tail_node(&mut self, node: NodeRef<T>) {
        match self.tail.upgrade() {
            None => self.link_first(node),
            Some(old_tail) => {
                let sentinel = old_tail
                    .borrow_mut()
                    .next
                    .take()
                    .expect("the tail node is always followed by the terminator");
                node.borrow_mut().prev = Rc::downgrade(&old_tail);
                sentinel.borrow_mut().prev = Rc::downgrade(&node);
                node.borrow_mut().next = Some(sentinel);
                self.tail = Rc::downgrade(&node);
                old_tail.borrow_mut().next = Some(node);
            }
        }
        self.len += 1;
    }

    /// Insert `node` immediately before the node referenced by `position`.
    ///
    /// The head and end positions delegate to the end pushes so that `head`,
    /// `tail` and the terminator are re-anchored consistently.
    fn insert_node_before(
        &mut self,
        position: &Cursor<T>,
        node: NodeRef<T>,
    ) -> Result<(), ListError> {
        let target = position.upgrade().ok_or(ListError::DanglingCursor)?;
        if self.is_head(&target) {
            self.push_head_node(node);
        } else if self.is_terminator(&target) {
            self.push_tail_node(node);
        } else {
            let prev = target
                .borrow()
                .prev
                .upgrade()
                .expect("an interior node always has a live predecessor");
            {
                let mut new = node.borrow_mut();
                new.prev = Rc::downgrade(&prev);
                new.next = prev.borrow_mut().next.take();
            }
            target.borrow_mut().prev = Rc::downgrade(&node);
            prev.borrow_mut().next = Some(node);
            self.len += 1;
        }
        Ok(())
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use checked_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: Weak::new(),
            terminator: Weak::new(),
            len: 0,
        }
    }

    /// Create a `List` of `count` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let list = List::repeat(7, 3);
    /// assert_eq!(list.to_vec(), vec![7, 7, 7]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        for _ in 0..count {
            list.push_tail(value.clone());
        }
        list
    }

    /// Create a `List` of `count` default-constructed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let list: List<i32> = List::repeat_default(2);
    /// assert_eq!(list.to_vec(), vec![0, 0]);
    /// ```
    pub fn repeat_default(count: usize) -> Self
    where
        T: Default,
    {
        let mut list = Self::new();
        for _ in 0..count {
            list.push_tail(T::default());
        }
        list
    }

    /// Create a `List` by cloning the elements of the cursor range
    /// `start..end` (left inclusive, right exclusive).
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::DanglingCursor`] if any position in the range
    /// has expired, and with [`ListError::OutOfRange`] if the walk reaches a
    /// valueless position other than `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let letters = List::from(['a', 'b', 'c', 'd']);
    /// let mut start = letters.cursor_head();
    /// start.move_next().unwrap();
    ///
    /// let rest = List::from_range(&start, &letters.cursor_end()).unwrap();
    /// assert_eq!(rest.to_vec(), vec!['b', 'c', 'd']);
    /// ```
    pub fn from_range(start: &Cursor<T>, end: &Cursor<T>) -> Result<Self, ListError>
    where
        T: Clone,
    {
        let mut list = Self::new();
        list.append_range(start, end)?;
        Ok(list)
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_head("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_head(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_tail(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// The owning chain is released front to back without recursing, so
    /// clearing (or dropping) an arbitrarily long list cannot overflow the
    /// stack. Never fails.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let cursor = list.cursor_head();
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert!(cursor.is_dangling());
    /// ```
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            next = node.borrow_mut().next.take();
        }
        self.tail = Weak::new();
        self.terminator = Weak::new();
        self.len = 0;
    }

    /// Provides a reference to the first element.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::OutOfRange`] when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{List, ListError};
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(*list.peek_head().unwrap(), 1);
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.peek_head().unwrap_err(), ListError::OutOfRange);
    /// ```
    pub fn peek_head(&self) -> Result<Ref<'_, T>, ListError> {
        let head = self.head.as_ref().ok_or(ListError::OutOfRange)?;
        Ok(Ref::map(head.borrow(), |node| {
            node.value.as_ref().expect("a linked node always holds a value")
        }))
    }

    /// Provides a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::OutOfRange`] when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// *list.peek_head_mut().unwrap() = 5;
    /// assert_eq!(*list.peek_head().unwrap(), 5);
    /// ```
    pub fn peek_head_mut(&mut self) -> Result<RefMut<'_, T>, ListError> {
        let head = self.head.as_ref().ok_or(ListError::OutOfRange)?;
        Ok(RefMut::map(head.borrow_mut(), |node| {
            node.value.as_mut().expect("a linked node always holds a value")
        }))
    }

    /// Provides a reference to the last element.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::OutOfRange`] when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(*list.peek_tail().unwrap(), 2);
    /// ```
    pub fn peek_tail(&self) -> Result<Ref<'_, T>, ListError> {
        let tail = self.tail.upgrade().ok_or(ListError::OutOfRange)?;
        // SAFETY: the tail node is owned by the forward chain rooted at
        // `self.head`, and every operation that unlinks nodes takes
        // `&mut self`, so the allocation outlives this shared borrow.
        let cell = unsafe { &*Rc::as_ptr(&tail) };
        Ok(Ref::map(cell.borrow(), |node| {
            node.value.as_ref().expect("a linked node always holds a value")
        }))
    }

    /// Provides a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::OutOfRange`] when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// *list.peek_tail_mut().unwrap() = 5;
    /// assert_eq!(*list.peek_tail().unwrap(), 5);
    /// ```
    pub fn peek_tail_mut(&mut self) -> Result<RefMut<'_, T>, ListError> {
        let tail = self.tail.upgrade().ok_or(ListError::OutOfRange)?;
        // SAFETY: as in `peek_tail`; the exclusive borrow of `self` also
        // keeps the chain from being relinked underneath the reference.
        let cell = unsafe { &*Rc::as_ptr(&tail) };
        Ok(RefMut::map(cell.borrow_mut(), |node| {
            node.value.as_mut().expect("a linked node always holds a value")
        }))
    }

    /// Adds an element first in the list.
    ///
    /// The first insertion into an empty list also materializes the
    /// terminator node behind the new element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_head(2);
    /// assert_eq!(*list.peek_head().unwrap(), 2);
    ///
    /// list.push_head(1);
    /// assert_eq!(*list.peek_head().unwrap(), 1);
    /// ```
    pub fn push_head(&mut self, value: T) {
        self.push_head_node(Node::with_value(value));
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_tail(1);
    /// list.push_tail(3);
    /// assert_eq!(*list.peek_tail().unwrap(), 3);
    /// ```
    pub fn push_tail(&mut self, value: T) {
        self.push_tail_node(Node::with_value(value));
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. Exhaustion is an expected terminal condition, not an error.
    ///
    /// Removing the last element also destroys the terminator, so cursors at
    /// the end position expire together with the list contents.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_head(), None);
    ///
    /// list.push_head(1);
    /// list.push_head(3);
    /// assert_eq!(list.pop_head(), Some(3));
    /// assert_eq!(list.pop_head(), Some(1));
    /// assert_eq!(list.pop_head(), None);
    /// ```
    pub fn pop_head(&mut self) -> Option<T> {
        let head = self.head.take()?;
        let (value, next) = {
            let mut node = head.borrow_mut();
            let value = node
                .value
                .take()
                .expect("a linked node always holds a value");
            (value, node.next.take())
        };
        self.len -= 1;
        if self.len == 0 {
            // `next` is the terminator; dropping it here restores the fully
            // empty state.
            self.tail = Weak::new();
            self.terminator = Weak::new();
        } else {
            let next = next.expect("a linked node is always followed by another node");
            next.borrow_mut().prev = Weak::new();
            self.head = Some(next);
        }
        Some(value)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_tail(), None);
    /// list.push_tail(1);
    /// list.push_tail(3);
    /// assert_eq!(list.pop_tail(), Some(3));
    /// ```
    pub fn pop_tail(&mut self) -> Option<T> {
        let tail = self.tail.upgrade()?;
        let (value, sentinel, prev) = {
            let mut node = tail.borrow_mut();
            let value = node
                .value
                .take()
                .expect("a linked node always holds a value");
            let sentinel = node
                .next
                .take()
                .expect("the tail node is always followed by the terminator");
            (value, sentinel, node.prev.upgrade())
        };
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
            self.tail = Weak::new();
            self.terminator = Weak::new();
        } else {
            let new_tail = prev.expect("an interior node always has a live predecessor");
            self.tail = Rc::downgrade(&new_tail);
            sentinel.borrow_mut().prev = Rc::downgrade(&new_tail);
            // Overwriting `next` releases the removed node.
            new_tail.borrow_mut().next = Some(sentinel);
        }
        Some(value)
    }

    /// Adds an element first in the list and returns a mutable reference
    /// to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from(["world".to_string()]);
    /// list.emplace_head("hello".to_string()).push_str("!");
    /// assert_eq!(*list.peek_head().unwrap(), "hello!");
    /// ```
    pub fn emplace_head(&mut self, value: T) -> RefMut<'_, T> {
        self.push_head(value);
        self.peek_head_mut()
            .expect("the list cannot be empty right after a push")
    }

    /// Appends an element to the back of the list and returns a mutable
    /// reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1]);
    /// *list.emplace_tail(2) += 10;
    /// assert_eq!(*list.peek_tail().unwrap(), 12);
    /// ```
    pub fn emplace_tail(&mut self, value: T) -> RefMut<'_, T> {
        self.push_tail(value);
        self.peek_tail_mut()
            .expect("the list cannot be empty right after a push")
    }

    /// Inserts an element immediately before `position`.
    ///
    /// Inserting before the head position behaves as [`push_head`], and
    /// inserting before the end position behaves as [`push_tail`].
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::DanglingCursor`] if `position` no longer
    /// references a live node. On an empty list every position is absent, so
    /// the insertion fails.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut position = list.cursor_head();
    /// position.move_next().unwrap();
    ///
    /// list.insert_before(&position, 2).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    ///
    /// [`push_head`]: List::push_head
    /// [`push_tail`]: List::push_tail
    pub fn insert_before(&mut self, position: &Cursor<T>, value: T) -> Result<(), ListError> {
        self.insert_node_before(position, Node::with_value(value))
    }

    /// Inserts an element immediately after `position`.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::OutOfRange`] if `position` is the end
    /// position, since there is nothing after the end, and with
    /// [`ListError::DanglingCursor`] if `position` has expired.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{List, ListError};
    ///
    /// let mut list = List::from([1, 3]);
    /// list.insert_after(&list.cursor_head(), 2).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    ///
    /// let end = list.cursor_end();
    /// assert_eq!(list.insert_after(&end, 4).unwrap_err(), ListError::OutOfRange);
    /// ```
    pub fn insert_after(&mut self, position: &Cursor<T>, value: T) -> Result<(), ListError> {
        self.emplace_after(position, value).map(drop)
    }

    /// Inserts an element immediately before `position` and returns a
    /// mutable cursor at the new element.
    ///
    /// Same failure conditions as [`insert_before`].
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let end = list.cursor_end();
    ///
    /// let inserted = list.emplace_before(&end, 2).unwrap();
    /// assert_eq!(*inserted.value().unwrap(), 2);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    ///
    /// [`insert_before`]: List::insert_before
    pub fn emplace_before(
        &mut self,
        position: &Cursor<T>,
        value: T,
    ) -> Result<CursorMut<T>, ListError> {
        let node = Node::with_value(value);
        let inserted = Rc::downgrade(&node);
        self.insert_node_before(position, node)?;
        Ok(CursorMut::from_weak(inserted))
    }

    /// Inserts an element immediately after `position` and returns a mutable
    /// cursor at the new element.
    ///
    /// Same failure conditions as [`insert_after`].
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    ///
    /// let inserted = list.emplace_after(&list.cursor_head(), 2).unwrap();
    /// assert_eq!(*inserted.value().unwrap(), 2);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    ///
    /// [`insert_after`]: List::insert_after
    pub fn emplace_after(
        &mut self,
        position: &Cursor<T>,
        value: T,
    ) -> Result<CursorMut<T>, ListError> {
        if *position == self.cursor_end() {
            return Err(ListError::OutOfRange);
        }
        let mut next = position.clone();
        next.move_next()?;
        self.emplace_before(&next, value)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other`: the old terminator of `self`
    /// is dropped, `other`'s chain is relinked after the old tail, and
    /// `other` is left empty. No element is copied or cloned.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::SelfAppend`] if `self` and `other` are the
    /// same list; splicing a chain into itself would corrupt it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from(['a']);
    /// let mut other = List::from(['b', 'c']);
    ///
    /// list.append(&mut other).unwrap();
    ///
    /// assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) -> Result<(), ListError> {
        if ptr::eq(self, other) {
            return Err(ListError::SelfAppend);
        }
        if self.is_empty() {
            mem::swap(self, other);
            return Ok(());
        }
        if other.is_empty() {
            return Ok(());
        }
        let tail = self
            .tail
            .upgrade()
            .expect("a non-empty list always has a live tail");
        // The old terminator of `self` dies here; `other`'s terminator takes
        // over as the end position of the combined list.
        tail.borrow_mut().next = None;
        let other_head = other
            .head
            .take()
            .expect("a non-empty list always has a head");
        other_head.borrow_mut().prev = Rc::downgrade(&tail);
        tail.borrow_mut().next = Some(other_head);
        self.tail = mem::replace(&mut other.tail, Weak::new());
        self.terminator = mem::replace(&mut other.terminator, Weak::new());
        self.len += mem::replace(&mut other.len, 0);
        Ok(())
    }

    /// Appends a clone of every element of `other` to the end of the list,
    /// leaving `other` untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time in the size of
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1]);
    /// let other = List::from([2, 3]);
    ///
    /// list.append_copy(&other);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(other.len(), 2);
    /// ```
    pub fn append_copy(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.extend(other.iter().map(|value| (*value).clone()));
    }

    /// Appends clones of the elements of the cursor range `start..end`
    /// (left inclusive, right exclusive) to the end of the list.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::DanglingCursor`] if any position in the range
    /// has expired, and with [`ListError::OutOfRange`] if the walk reaches a
    /// valueless position other than `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let source = List::from([1, 2, 3]);
    /// let mut list = List::from([0]);
    ///
    /// list.append_range(&source.cursor_head(), &source.cursor_end())
    ///     .unwrap();
    /// assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
    /// ```
    pub fn append_range(&mut self, start: &Cursor<T>, end: &Cursor<T>) -> Result<(), ListError>
    where
        T: Clone,
    {
        let mut position = start.clone();
        while position != *end {
            let value = (*position.value()?).clone();
            self.push_tail(value);
            position.move_next()?;
        }
        Ok(())
    }

    /// Exchanges the contents of two lists in *O*(1) time.
    ///
    /// No node is touched: cursors captured before the swap remain valid and
    /// keep referencing the same elements, now reachable through the other
    /// handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut first = List::from([1, 2]);
    /// let mut second = List::from([3]);
    /// let cursor = first.cursor_head();
    ///
    /// first.swap(&mut second);
    ///
    /// assert_eq!(first.to_vec(), vec![3]);
    /// assert_eq!(second.to_vec(), vec![1, 2]);
    /// assert_eq!(*cursor.value().unwrap(), 1);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Provides a read-only cursor at the first element, or an absent cursor
    /// equal to [`cursor_end`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_head();
    /// assert_eq!(*cursor.value().unwrap(), 1);
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.cursor_head(), empty.cursor_end());
    /// ```
    ///
    /// [`cursor_end`]: List::cursor_end
    pub fn cursor_head(&self) -> Cursor<T> {
        Cursor::from_weak(self.head.as_ref().map(Rc::downgrade).unwrap_or_default())
    }

    /// Provides a read-only cursor at the end position, one past the last
    /// element.
    ///
    /// The end position references the terminator node, which holds no
    /// value; retreating from it reaches the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{List, ListError};
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end();
    /// assert_eq!(cursor.value().unwrap_err(), ListError::OutOfRange);
    ///
    /// cursor.move_prev().unwrap();
    /// assert_eq!(*cursor.value().unwrap(), 3);
    /// ```
    pub fn cursor_end(&self) -> Cursor<T> {
        Cursor::from_weak(self.terminator.clone())
    }

    /// Provides a mutable cursor at the first element, or an absent cursor
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_head_mut();
    ///
    /// *cursor.value_mut().unwrap() *= 5;
    /// assert_eq!(*list.peek_head().unwrap(), 5);
    /// ```
    pub fn cursor_head_mut(&mut self) -> CursorMut<T> {
        CursorMut::from_weak(self.head.as_ref().map(Rc::downgrade).unwrap_or_default())
    }

    /// Provides a mutable cursor at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.move_prev().unwrap();
    /// *cursor.value_mut().unwrap() *= 5;
    /// assert_eq!(*list.peek_tail().unwrap(), 15);
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<T> {
        CursorMut::from_weak(self.terminator.clone())
    }

    /// Provides a forward iterator.
    ///
    /// The iterator is double-ended, so reverse iteration is `iter().rev()`.
    /// Each yielded item is a borrow guard that dereferences to the element.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(*iter.next().unwrap(), 0);
    /// assert_eq!(*iter.next().unwrap(), 1);
    /// assert_eq!(*iter.next().unwrap(), 2);
    /// assert!(iter.next().is_none());
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable borrow guards.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for mut element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Clones the elements into a `Vec` in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().map(|value| (*value).clone()).collect()
    }

    /// Consumes the list and collects the elements into a `Vec` in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[e1, e2, ..., en]`, or `[]` when empty.
///
/// # Examples
///
/// ```
/// use checked_list::List;
///
/// assert_eq!(List::from([1, 2, 3]).to_string(), "[1, 2, 3]");
/// assert_eq!(List::<i32>::new().to_string(), "[]");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut separator = "";
        for value in self.iter() {
            write!(f, "{}{}", separator, *value)?;
            separator = ", ";
        }
        f.write_str("]")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().map(|value| (*value).clone()).collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| *a == *b)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Concatenation into a new list; neither operand is modified.
///
/// # Examples
///
/// ```
/// use checked_list::List;
///
/// let odds = List::from([1, 3]);
/// let evens = List::from([2, 4]);
///
/// let cat = &odds + &evens;
/// assert_eq!(cat.to_vec(), vec![1, 3, 2, 4]);
/// assert_eq!(odds.len(), 2);
/// assert_eq!(evens.len(), 2);
/// ```
impl<T: Clone> Add for &List<T> {
    type Output = List<T>;

    fn add(self, other: &List<T>) -> List<T> {
        let mut cat = self.clone();
        cat.append_copy(other);
        cat
    }
}

impl<T: Clone> AddAssign<&List<T>> for List<T> {
    fn add_assign(&mut self, other: &List<T>) {
        self.append_copy(other);
    }
}

impl<T> AddAssign<List<T>> for List<T> {
    fn add_assign(&mut self, mut other: List<T>) {
        self.append(&mut other)
            .expect("an owned operand cannot alias the destination");
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
