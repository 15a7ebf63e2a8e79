use std::cell::{Ref, RefMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::list::error::ListError;
use crate::list::{NodeRef, WeakRef};

/// A read-only cursor into a [`List`].
///
/// A cursor references a single node without owning it and can move freely
/// back and forth over the list. Unlike a plain reference, a cursor is
/// allowed to outlive the node it references: every access re-checks that
/// the node still exists and reports [`ListError::DanglingCursor`] once it
/// does not, instead of touching freed memory. Expiry is permanent; a
/// cursor that went dangling never becomes valid again.
///
/// In a list with length *n* there are *n* + 1 positions: one per element,
/// plus the end position at the terminator node. Stepping forward off the
/// end position, or backward off the first element, leaves the cursor
/// referencing nothing.
///
/// # Examples
///
/// ```
/// use checked_list::{List, ListError};
///
/// let mut list = List::from([1, 2]);
/// let cursor = list.cursor_head();
/// assert_eq!(*cursor.value().unwrap(), 1);
///
/// // The first node is destroyed while the cursor still references it.
/// list.pop_head();
/// assert!(cursor.is_dangling());
/// assert_eq!(cursor.value().unwrap_err(), ListError::DanglingCursor);
/// ```
///
/// [`List`]: crate::List
pub struct Cursor<T> {
    node: WeakRef<T>,
}

/// A cursor into a [`List`] that can also mutate the elements it visits.
///
/// `CursorMut` tracks liveness exactly like [`Cursor`] and adds
/// [`value_mut`]. It converts into a read-only [`Cursor`] with
/// [`as_cursor`] (or `From`); there is no conversion in the other
/// direction.
///
/// # Examples
///
/// ```
/// use checked_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_head_mut();
///
/// cursor.move_next().unwrap();
/// *cursor.value_mut().unwrap() *= 10;
/// assert_eq!(list.to_vec(), vec![1, 20, 3]);
/// ```
///
/// [`List`]: crate::List
/// [`value_mut`]: CursorMut::value_mut
/// [`as_cursor`]: CursorMut::as_cursor
pub struct CursorMut<T> {
    node: WeakRef<T>,
}

/// A borrow of a list element obtained through a cursor or an iterator.
///
/// The guard keeps the node alive for the duration of the borrow, the way a
/// locked weak reference would, and dereferences to the element. The borrow
/// is tracked dynamically: destroying the element while a guard is
/// outstanding panics instead of freeing borrowed memory.
pub struct ValueRef<'a, T> {
    value: Ref<'a, T>,
    _node: NodeRef<T>,
}

/// A mutable borrow of a list element obtained through a [`CursorMut`] or a
/// mutable iterator. See [`ValueRef`].
pub struct ValueMut<'a, T> {
    value: RefMut<'a, T>,
    _node: NodeRef<T>,
}

impl<'a, T> ValueRef<'a, T> {
    /// Borrow the value of `node`, or `None` if `node` is the terminator.
    pub(crate) fn try_new(node: NodeRef<T>) -> Option<Self> {
        // SAFETY: `value` borrows the cell inside the allocation kept alive
        // by `_node`, which is stored alongside it and dropped after it.
        let cell = unsafe { &*Rc::as_ptr(&node) };
        let value = Ref::filter_map(cell.borrow(), |node| node.value.as_ref()).ok()?;
        Some(Self { value, _node: node })
    }

    pub(crate) fn new(node: NodeRef<T>) -> Self {
        Self::try_new(node).expect("a linked node always holds a value")
    }
}

impl<'a, T> ValueMut<'a, T> {
    /// Mutably borrow the value of `node`, or `None` if `node` is the
    /// terminator.
    pub(crate) fn try_new(node: NodeRef<T>) -> Option<Self> {
        // SAFETY: as in `ValueRef::try_new`.
        let cell = unsafe { &*Rc::as_ptr(&node) };
        let value = RefMut::filter_map(cell.borrow_mut(), |node| node.value.as_mut()).ok()?;
        Some(Self { value, _node: node })
    }

    pub(crate) fn new(node: NodeRef<T>) -> Self {
        Self::try_new(node).expect("a linked node always holds a value")
    }
}

impl<T> Deref for ValueRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for ValueMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for ValueMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Debug> Debug for ValueRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

impl<T: Debug> Debug for ValueMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

impl<T: Display> Display for ValueRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}

impl<T: Display> Display for ValueMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}

fn same_target<T>(a: &WeakRef<T>, b: &WeakRef<T>) -> bool {
    match (a.upgrade(), b.upgrade()) {
        (Some(a), Some(b)) => Rc::ptr_eq(&a, &b),
        (None, None) => true,
        _ => false,
    }
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<T> $CURSOR<T> {
            pub(crate) fn from_weak(node: WeakRef<T>) -> Self {
                Self { node }
            }

            /// Returns `true` if the referenced node no longer exists.
            ///
            /// A default-constructed cursor references nothing and is always
            /// dangling.
            pub fn is_dangling(&self) -> bool {
                self.node.strong_count() == 0
            }

            /// Moves the cursor to the next position.
            ///
            /// Moving forward from the end position succeeds but leaves the
            /// cursor referencing nothing.
            ///
            /// # Errors
            ///
            /// Fails with [`ListError::DanglingCursor`] if the currently
            /// referenced node has been destroyed; the cursor stays in its
            /// expired state.
            pub fn move_next(&mut self) -> Result<(), ListError> {
                let node = self.node.upgrade().ok_or(ListError::DanglingCursor)?;
                self.node = node
                    .borrow()
                    .next
                    .as_ref()
                    .map(Rc::downgrade)
                    .unwrap_or_default();
                Ok(())
            }

            /// Moves the cursor to the previous position.
            ///
            /// Moving backward from the first element succeeds but leaves
            /// the cursor referencing nothing.
            ///
            /// # Errors
            ///
            /// Fails with [`ListError::DanglingCursor`] if the currently
            /// referenced node has been destroyed; the cursor stays in its
            /// expired state.
            pub fn move_prev(&mut self) -> Result<(), ListError> {
                let node = self.node.upgrade().ok_or(ListError::DanglingCursor)?;
                let prev = node.borrow().prev.clone();
                self.node = prev;
                Ok(())
            }

            /// Borrows the referenced element.
            ///
            /// # Errors
            ///
            /// Fails with [`ListError::DanglingCursor`] if the referenced
            /// node has been destroyed, and with [`ListError::OutOfRange`]
            /// at the end position, which holds no value.
            pub fn value(&self) -> Result<ValueRef<'_, T>, ListError> {
                let node = self.node.upgrade().ok_or(ListError::DanglingCursor)?;
                ValueRef::try_new(node).ok_or(ListError::OutOfRange)
            }
        }

        impl<T> Clone for $CURSOR<T> {
            fn clone(&self) -> Self {
                Self {
                    node: self.node.clone(),
                }
            }
        }

        /// A cursor referencing nothing; always dangling.
        impl<T> Default for $CURSOR<T> {
            fn default() -> Self {
                Self {
                    node: WeakRef::new(),
                }
            }
        }

        /// Cursors compare by node identity, not element value.
        ///
        /// Two cursors are equal when they reference the same live node, or
        /// when both reference nothing. A live cursor never equals an
        /// expired one.
        impl<T> PartialEq for $CURSOR<T> {
            fn eq(&self, other: &Self) -> bool {
                same_target(&self.node, &other.node)
            }
        }

        impl<T> Eq for $CURSOR<T> {}

        impl<T> Debug for $CURSOR<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("dangling", &self.is_dangling())
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<T> Cursor<T> {
    pub(crate) fn upgrade(&self) -> Option<NodeRef<T>> {
        self.node.upgrade()
    }
}

impl<T> CursorMut<T> {
    /// Mutably borrows the referenced element.
    ///
    /// # Errors
    ///
    /// Same conditions as [`value`].
    ///
    /// [`value`]: CursorMut::value
    pub fn value_mut(&mut self) -> Result<ValueMut<'_, T>, ListError> {
        let node = self.node.upgrade().ok_or(ListError::DanglingCursor)?;
        ValueMut::try_new(node).ok_or(ListError::OutOfRange)
    }

    /// Returns a read-only cursor at the same position.
    ///
    /// This is the only direction the conversion exists in.
    pub fn as_cursor(&self) -> Cursor<T> {
        Cursor {
            node: self.node.clone(),
        }
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(cursor: CursorMut<T>) -> Self {
        cursor.as_cursor()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::cursor::{Cursor, CursorMut};
    use crate::list::error::ListError;
    use crate::list::List;

    #[test]
    fn default_cursors_reference_nothing() {
        let cursor = Cursor::<i32>::default();
        assert!(cursor.is_dangling());
        assert_eq!(cursor, Cursor::default());

        let cursor_mut = CursorMut::<i32>::default();
        assert!(cursor_mut.is_dangling());
    }

    #[test]
    fn walking_forward_to_the_end() {
        let list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_head();
        let mut collected = Vec::new();
        while cursor != list.cursor_end() {
            collected.push(*cursor.value().unwrap());
            cursor.move_next().unwrap();
        }
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(cursor.value().unwrap_err(), ListError::OutOfRange);
    }

    #[test]
    fn walking_backward_from_the_end() {
        let list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_end();
        let mut collected = Vec::new();
        loop {
            cursor.move_prev().unwrap();
            collected.push(*cursor.value().unwrap());
            if cursor == list.cursor_head() {
                break;
            }
        }
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn advancing_past_the_end_loses_the_position() {
        let list = List::from([1]);
        let mut cursor = list.cursor_end();
        cursor.move_next().unwrap();
        assert!(cursor.is_dangling());
        assert_eq!(cursor.value().unwrap_err(), ListError::DanglingCursor);
        assert_eq!(cursor.move_next().unwrap_err(), ListError::DanglingCursor);
    }

    #[test]
    fn retreating_before_the_head_loses_the_position() {
        let list = List::from([1, 2]);
        let mut cursor = list.cursor_head();
        cursor.move_prev().unwrap();
        assert!(cursor.is_dangling());
        assert_eq!(cursor.move_prev().unwrap_err(), ListError::DanglingCursor);
    }

    #[test]
    fn cursor_outliving_its_list_dangles() {
        let cursor;
        {
            let list = List::from([1, 2]);
            cursor = list.cursor_head();
            assert!(!cursor.is_dangling());
            assert_eq!(*cursor.value().unwrap(), 1);
        }
        assert!(cursor.is_dangling());
        assert_eq!(cursor.value().unwrap_err(), ListError::DanglingCursor);

        let mut cursor = cursor;
        assert_eq!(cursor.move_next().unwrap_err(), ListError::DanglingCursor);
        assert_eq!(cursor.move_prev().unwrap_err(), ListError::DanglingCursor);
    }

    #[test]
    fn expiry_happens_exactly_at_destruction() {
        let mut list = List::from([1, 2]);
        let tail = {
            let mut cursor = list.cursor_head();
            cursor.move_next().unwrap();
            cursor
        };

        assert!(!tail.is_dangling());
        *list.peek_tail_mut().unwrap() = 20;
        assert!(!tail.is_dangling());

        assert_eq!(list.pop_tail(), Some(20));
        assert!(tail.is_dangling());
    }

    #[test]
    fn cursors_to_untouched_nodes_survive_mutation() {
        let mut list = List::from([1, 2, 3, 4]);
        let mut middle = list.cursor_head();
        middle.move_next().unwrap();

        list.pop_head();
        list.pop_tail();
        list.push_tail(9);

        assert!(!middle.is_dangling());
        assert_eq!(*middle.value().unwrap(), 2);
    }

    #[test]
    fn cursor_equality_is_node_identity() {
        // Equal values in distinct nodes.
        let list = List::from([1, 1]);
        let first = list.cursor_head();
        let mut second = list.cursor_head();
        assert_eq!(first, second);

        second.move_next().unwrap();
        assert_ne!(first, second);
        assert_ne!(first, list.cursor_end());
    }

    #[test]
    fn expired_cursor_never_equals_a_live_one() {
        let mut list = List::from([1, 2]);
        let stale = list.cursor_head();
        list.pop_head();
        assert_ne!(stale, list.cursor_head());
        assert_eq!(stale, Cursor::default());
    }

    #[test]
    fn cursor_mut_writes_through() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_head_mut();
        cursor.move_next().unwrap();
        *cursor.value_mut().unwrap() = 20;
        assert_eq!(list.to_vec(), vec![1, 20, 3]);
    }

    #[test]
    fn cursor_mut_conversion_is_one_way() {
        let mut list = List::from([1, 2]);
        let cursor_mut = list.cursor_head_mut();
        let cursor = cursor_mut.as_cursor();
        assert_eq!(*cursor.value().unwrap(), 1);

        let converted: Cursor<i32> = list.cursor_head_mut().into();
        assert_eq!(converted, cursor);
    }

    #[test]
    fn value_guard_keeps_the_node_alive_for_the_borrow() {
        let mut list = List::from([1]);
        let cursor = list.cursor_head();
        {
            let value = cursor.value().unwrap();
            assert_eq!(*value, 1);
            assert_eq!(format!("{}", value), "1");
            assert_eq!(format!("{:?}", value), "1");
        }
        list.pop_head();
        assert!(cursor.is_dangling());
    }

    #[test]
    #[should_panic]
    fn removing_a_borrowed_element_panics() {
        let mut list = List::from([1]);
        let cursor = list.cursor_head();
        let _value = cursor.value().unwrap();
        list.pop_head();
    }

    #[test]
    fn end_cursor_of_an_empty_list_is_absent() {
        let list = List::<i32>::new();
        let end = list.cursor_end();
        assert!(end.is_dangling());
        assert_eq!(end, list.cursor_head());
    }
}
