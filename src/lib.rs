//! This crate provides a singly-linked list with owned nodes, edited
//! exclusively through a capability-restricted cursor.
//!
//! The [`List`] allows reading, inserting and removing elements at any
//! given position. Every positional operation walks a cursor from the head
//! of the list, so it takes *O*(*n*) time to reach the position and *O*(1)
//! time to edit there.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list: List<i32> = (1..5).collect();      // [1, 2, 3, 4]
//!
//! list.push_front(0);                              // [0, 1, 2, 3, 4]
//! list.insert_before(3, 7);                        // [0, 1, 2, 7, 3, 4]
//! assert_eq!(*list.at(3), 7);
//!
//! assert_eq!(list.remove(3), 7);                   // [0, 1, 2, 3, 4]
//! assert_eq!(list.pop_back(), 4);                  // [0, 1, 2, 3]
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗          ╔═══════════╗          ╔═══════════╗
//!    ║   next    ║ ───────→ ║   next    ║ ─ ┄┄ ──→ ║   next    ║ ───→ ∅
//!    ╟───────────╢          ╟───────────╢          ╟───────────╢
//!    ┊No payload ┊          ║ payload T ║          ║ payload T ║
//!    └╌╌╌╌╌╌╌╌╌╌╌┘          ╚═══════════╝          ╚═══════════╝
//!      Sentinel                 Node 0               Node n - 1
//!          ↑
//!    ╔═══════════╗
//!    ║   head    ║
//!    ╟───────────╢
//!    ║    len    ║
//!    ╚═══════════╝
//!        List
//! ```
//! The `List` contains:
//! - a sentinel node `head` that carries *no* payload; its `next` link is
//!   the first element of the list, or nothing if the list is empty;
//! - a length field `len` counting the payload nodes.
//!
//! Each payload node of the list `List<T>` is allocated on the heap and
//! owns the remainder of the chain through its `next` link: unlinking a
//! node hands its successor over to its predecessor, and dropping the list
//! reclaims the nodes one at a time from the sentinel — never by a cascade
//! of nested node destructors, so arbitrarily long lists are dropped in
//! constant stack space.
//!
//! The sentinel is what makes position 0 uniform: inserting or removing at
//! the front is a plain "edit after this node" on the sentinel, the same
//! operation used at every other position.
//!
//! # Cursors
//!
//! Nodes are opaque: the only way to reach a node's payload, or to change
//! the chain structure next to it, is through a cursor. [`Cursor`] is the
//! public, read-only face of that protocol — an opaque, comparable
//! reference to one node that can [`advance`] and [`read`]. The editing
//! half of the protocol is crate-private and is what the positional
//! methods of [`List`] are built on.
//!
//! A cursor borrows its list, so the borrow checker rules out using a
//! cursor across a structural edit — a cursor can never dangle into a
//! removed node.
//!
//! ```
//! use forward_list::List;
//!
//! let list: List<i32> = (1..4).collect();
//!
//! let mut cursor = list.cursor_front();
//! assert_eq!(cursor.read(), &1);
//!
//! cursor.advance();
//! assert_eq!(cursor.read(), &2);
//! assert_eq!(cursor, list.cursor(1));
//!
//! // Advancing off the last element leaves the cursor unbound.
//! cursor.advance();
//! cursor.advance();
//! assert!(cursor.is_end());
//! ```
//!
//! # Front Insertion
//!
//! A singly-linked node cannot reach its predecessor, so
//! [`List::insert_before`] splices the new node *after* the addressed
//! position and swaps the payloads: the physical node at the position keeps
//! its identity but ends up holding the inserted element, while a fresh
//! successor holds the old one. The logical sequence is exactly a front
//! insertion; only node identity (as observed through cursor equality) is
//! rearranged.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators,
//! built directly on the cursor. They are fused, exact-size and forward
//! only — the list has no backward links to traverse. [`IterMut`] provides
//! mutability of the elements, but not of the linked structure of the
//! list.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list: List<i32> = (1..4).collect();
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! [`advance`]: crate::Cursor::advance
//! [`read`]: crate::Cursor::read

#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
