//! This crate provides a doubly-linked list with owned nodes and
//! dangling-checked cursors.
//!
//! The [`List`] allows inserting and removing elements at both ends and at
//! any cursor position in constant time, and supports *O*(1) splicing of one
//! list onto another. Its distinguishing feature is that a [`Cursor`] whose
//! node has been removed does not become undefined behavior waiting to
//! happen: every access re-checks that the node still exists and reports
//! [`ListError::DanglingCursor`] once it does not.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use checked_list::{List, ListError};
//!
//! let mut list = List::from([1, 2, 3]);
//!
//! let cursor = list.cursor_head();
//! assert_eq!(*cursor.value().unwrap(), 1);
//!
//! // The first node is destroyed while the cursor still references it.
//! assert_eq!(list.pop_head(), Some(1));
//!
//! // The cursor notices, instead of touching freed memory.
//! assert!(cursor.is_dangling());
//! assert_eq!(cursor.value().unwrap_err(), ListError::DanglingCursor);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph, where solid
//! arrows are owning references and dashed arrows are weak ones:
//!
//! ```text
//!     List                Node 0          Node 1        terminator
//! ╔═══════════╗ owns  ┌───────────┐   ┌───────────┐   ┌───────────┐
//! ║   head    ║ ────→ │   next    │ ─→│   next    │ ─→│  (none)   │
//! ╟───────────╢       ├───────────┤   ├───────────┤   ├───────────┤
//! ║   tail    ║ ┄┄┐ ┌┄│   prev    │←┄┄│   prev    │←┄┄│   prev    │
//! ╟───────────╢   ┆ ↓ ├───────────┤   ├───────────┤   ├───────────┤
//! ║terminator ║ ┄┐└┄→ │ value: T  │   │ value: T  │   ┊ no value  ┊
//! ╟───────────╢  ┆    └───────────┘   └───────────┘   └───────────┘
//! ║    len    ║  └┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄↑
//! ╚═══════════╝
//! ```
//!
//! Only the forward links own nodes: `head` owns the first node, each node
//! owns its successor, and the current tail owns the terminator, a node
//! with no value marking the position one past the last element. Backward
//! links are weak, so the graph has no reference cycles and releasing `head`
//! releases the whole chain. An empty list owns nothing at all: the
//! terminator only exists while there is at least one element.
//!
//! Because everything a cursor holds is a weak reference, destroying a node
//! (by popping, clearing, or dropping the list) is immediately observable by
//! every cursor that referenced it, at the cost of an upgrade check per
//! access.
//!
//! # Iteration
//!
//! Iterating over a list is done by the [`Iter`] and [`IterMut`] iterators,
//! created by [`iter`] and [`iter_mut`]. Both are double-ended, fused and
//! exact-size, and yield borrow guards that dereference to the element.
//!
//! ```
//! use checked_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//!
//! let doubled: Vec<i32> = list.iter().map(|value| *value * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! list.iter_mut().for_each(|mut value| *value *= 10);
//! assert_eq!(list.to_vec(), vec![10, 20, 30]);
//!
//! let backwards: Vec<i32> = list.iter().rev().map(|value| *value).collect();
//! assert_eq!(backwards, vec![30, 20, 10]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide a
//! position-oriented view of a list. A cursor can move forward and backward
//! over the *n* + 1 positions of a list with *n* elements (the extra one is
//! the end position), it addresses insertions via [`insert_before`],
//! [`insert_after`] and the emplace operations, and it survives any
//! mutation of the list, including the destruction of its own node.
//!
//! ```
//! use checked_list::List;
//!
//! let mut list = List::from([1, 4]);
//!
//! let mut position = list.cursor_head();
//! position.move_next().unwrap();
//!
//! list.insert_before(&position, 2).unwrap();
//! let inserted = list.emplace_before(&position, 3).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
//! assert_eq!(*inserted.value().unwrap(), 3);
//! ```
//!
//! # Errors
//!
//! All failures are synchronous and checked: [`ListError`] covers
//! out-of-range access, dangling-cursor access and self-append. Popping from
//! an empty list is *not* an error: it returns `None`, since exhaustion is
//! the expected way for a draining loop to end.
//!
//! [`iter`]: List::iter
//! [`iter_mut`]: List::iter_mut
//! [`insert_before`]: List::insert_before
//! [`insert_after`]: List::insert_after

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, ValueMut, ValueRef};
#[doc(inline)]
pub use list::error::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Len, List};

pub mod list;

mod experiments;

/// Creates a [`List`] containing the given elements.
///
/// `list!` mirrors the `vec!` forms: a comma-separated element list, or a
/// `value; count` repetition.
///
/// # Examples
///
/// ```
/// use checked_list::list;
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.to_string(), "[1, 2, 3]");
///
/// let same = list![0; 4];
/// assert_eq!(same.to_vec(), vec![0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($value:expr; $count:expr) => {
        $crate::List::repeat($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::from([$($value),+])
    };
}
