use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is a non-owning reference to one node of a list (or to the
/// unbound past-the-end state). It is the only handle through which a
/// node's payload can be read: nodes themselves are opaque outside the
/// list's module tree.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the unbound state.
/// Cursors only ever move forward; there is no backward traversal.
///
/// Holding a cursor borrows the list, so the chain cannot be structurally
/// edited while any cursor into it is alive — a cursor can never observe
/// the node it references being unlinked.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// // Create a list: [ A B C ]
/// let list: List<char> = vec!['A', 'B', 'C'].into_iter().collect();
///
/// // Create a cursor at the front: [|A B C ] (index = 0)
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.read(), &'A');
///
/// // Move the cursor forward: [ A|B C ] (index = 1)
/// cursor.advance();
/// assert_eq!(cursor.read(), &'B');
///
/// // Two more steps leave the cursor unbound: [ A B C|] (index = 3)
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    _marker: PhantomData<&'a List<T>>,
}

/// Compare cursors by the identity of the referenced node.
///
/// Two cursors are equal iff they reference the same node, or both are
/// unbound. Note that after [`List::insert_before`], the node at a position
/// keeps its identity but holds the newly inserted element.
///
/// # Examples
/// ```
/// use forward_list::List;
///
/// let list: List<i32> = (1..4).collect();
/// let cursor1 = list.cursor_front();
/// let mut cursor2 = cursor1.clone();
/// // The same node.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.advance();
/// // Different nodes.
/// assert_ne!(cursor1, cursor2);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor::new(self.current)
    }
}

/// The unbound cursor.
///
/// A default-constructed cursor is usable as a placeholder or pass-through
/// value and compares equal to any past-the-end cursor, but it is not
/// dereferenceable.
///
/// # Examples
///
/// ```
/// use forward_list::Cursor;
///
/// let cursor: Cursor<'_, i32> = Cursor::default();
/// assert!(cursor.is_end());
/// ```
impl<'a, T: 'a> Default for Cursor<'a, T> {
    fn default() -> Self {
        Cursor::new(None)
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(current: Option<NonNull<Node<T>>>) -> Self {
        Self {
            current,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the cursor is unbound (past the end of the list).
    #[inline]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Move the cursor to the successor of the referenced node.
    ///
    /// Advancing off the last element leaves the cursor unbound.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already unbound.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list: List<i32> = (1..3).collect();
    /// let mut cursor = list.cursor_front();
    ///
    /// cursor.advance();
    /// assert_eq!(cursor.read(), &2);
    ///
    /// cursor.advance();
    /// assert!(cursor.is_end());
    /// ```
    pub fn advance(&mut self) {
        let node = self.current.expect("Out-of-bounds cursor advance");
        // SAFETY: a bound cursor references a live node of the chain for as
        // long as the list borrow lasts.
        self.current = unsafe { node.as_ref().next };
    }

    /// Return a reference to the payload of the referenced node.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is unbound.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list: List<i32> = (1..4).collect();
    /// assert_eq!(list.cursor(2).read(), &3);
    /// ```
    pub fn read(&self) -> &'a T {
        let node = self.current.expect("Invalid cursor dereference");
        // SAFETY: bound cursors handed out by the list accessors reference
        // payload nodes only; the sentinel cursor is crate-internal and is
        // always advanced onto a payload node before reading.
        unsafe { &node.as_ref().element }
    }

    /// Move the cursor forward by the given number of steps.
    pub(crate) fn seek(&mut self, steps: usize) {
        (0..steps).for_each(|_| self.advance());
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Cursor");
        match self.current {
            // SAFETY: cursors visible to `Debug` callers reference payload
            // nodes only.
            Some(node) => f.field("current", unsafe { &node.as_ref().element }),
            None => f.field("current", &"<end>"),
        }
        .finish()
    }
}

/// A cursor over a `List` with structural edit operations.
///
/// This is the privileged half of the cursor protocol: all link and unlink
/// operations of [`Node`] are reachable only through it, and the type is
/// crate-private, so the chain topology can only be changed by the list
/// itself. Each editing method keeps the list's length in sync with the
/// chain.
///
/// The cursor may be bound to the sentinel; editing there implements the
/// position-0 cases. Only [`CursorMut::insert_before`] requires a payload
/// node, because it swaps the referenced node's element.
pub(crate) struct CursorMut<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    list: &'a mut List<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Option<NonNull<Node<T>>>) -> Self {
        Self { current, list }
    }

    pub(crate) fn current_node(&self) -> Option<NonNull<Node<T>>> {
        self.current
    }

    /// Move the cursor to the successor of the referenced node.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is unbound.
    pub(crate) fn advance(&mut self) {
        let node = self.current.expect("Out-of-bounds cursor advance");
        // SAFETY: a bound cursor references a live node of its list's chain.
        self.current = unsafe { node.as_ref().next };
    }

    /// Move the cursor forward by the given number of steps.
    pub(crate) fn seek(&mut self, steps: usize) {
        (0..steps).for_each(|_| self.advance());
    }

    /// Returns `true` if the referenced node has a successor to edit.
    pub(crate) fn has_successor(&self) -> bool {
        // SAFETY: as in `advance`.
        self.current
            .map_or(false, |node| unsafe { node.as_ref().next.is_some() })
    }

    /// Return a mutable reference to the payload of the referenced node.
    ///
    /// The reference borrows the list, not the cursor; callers must not
    /// take it twice for the same node.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is unbound.
    pub(crate) fn read_mut(&mut self) -> &'a mut T {
        let mut node = self.current.expect("Invalid cursor dereference");
        // SAFETY: the cursor holds the list mutably borrowed for 'a, and is
        // only ever bound to payload nodes when payloads are read.
        unsafe { &mut node.as_mut().element }
    }

    /// Insert `element` right after the referenced node (which may be the
    /// sentinel).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is unbound.
    pub(crate) fn insert_after(&mut self, element: T) {
        let node = self.current.expect("Cannot insert past the end of the chain");
        // SAFETY: a bound cursor references a live node of its list's chain.
        unsafe { Node::splice_after(node, element) };
        self.list.len += 1;
    }

    /// Logically insert `element` right before the referenced node, by the
    /// splice-and-swap of [`Node::splice_before`].
    ///
    /// # Panics
    ///
    /// Panics if the cursor is unbound.
    pub(crate) fn insert_before(&mut self, element: T) {
        let node = self.current.expect("Cannot insert past the end of the chain");
        // SAFETY: the list only seeks this cursor to payload nodes before
        // front insertions, so the element swap never touches the sentinel.
        unsafe { Node::splice_before(node, element) };
        self.list.len += 1;
    }

    /// Unlink the successor of the referenced node and return its element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is unbound or the referenced node has no
    /// successor.
    pub(crate) fn remove_after(&mut self) -> T {
        let node = self.current.expect("Cannot remove past the end of the chain");
        // SAFETY: a bound cursor references a live node of its list's chain.
        let element = unsafe { Node::unlink_after(node) };
        self.list.len -= 1;
        element
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Cursor;

    #[test]
    fn cursor_walks_the_list() {
        let list: List<i32> = (1..4).collect();
        let mut cursor = list.cursor_front();
        assert_eq!(cursor.read(), &1);
        cursor.advance();
        assert_eq!(cursor.read(), &2);
        cursor.advance();
        assert_eq!(cursor.read(), &3);
        cursor.advance();
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_equality_is_node_identity() {
        let list: List<i32> = (1..4).collect();
        let first = list.cursor_front();
        let mut other = list.cursor_front();
        assert_eq!(first, other);

        other.advance();
        assert_ne!(first, other);
        assert_eq!(other, list.cursor(1));
    }

    #[test]
    fn unbound_cursors_compare_equal() {
        let list: List<i32> = (1..4).collect();
        let unbound = Cursor::<i32>::default();
        assert!(unbound.is_end());
        assert_eq!(list.cursor(3), unbound);
        assert_ne!(list.cursor_front(), unbound);
    }

    #[test]
    fn cursor_front_of_empty_list_is_unbound() {
        let list = List::<i32>::new();
        assert!(list.cursor_front().is_end());
        assert_eq!(list.cursor(0), Cursor::default());
    }

    #[test]
    #[should_panic(expected = "Out-of-bounds cursor advance")]
    fn advance_past_the_end() {
        let list: List<i32> = (0..1).collect();
        let mut cursor = list.cursor_front();
        cursor.advance();
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "Invalid cursor dereference")]
    fn read_unbound_cursor() {
        let cursor = Cursor::<i32>::default();
        cursor.read();
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent index")]
    fn cursor_at_nonexistent_index() {
        let list: List<i32> = (0..3).collect();
        list.cursor(4);
    }
}
