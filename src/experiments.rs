//! A fully-safe prototype of the owned chain: `static-rc` splits each node
//! into a chain half and a co-owning half kept by the container, and
//! `ghost-cell` mediates element access through the shared halves.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;
type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

struct Node<'id, T> {
    next: Option<NodePtr<'id, T>>,
    elem: T,
}

pub struct Chain<'id, T> {
    head: Option<NodePtr<'id, T>>,
    // Co-owners of every node, pushed and popped in lock step with the
    // chain: the co-half of the current head is always on top.
    spares: Vec<NodePtr<'id, T>>,
}

impl<'id, T> Default for Chain<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            spares: Vec::new(),
        }
    }
}

impl<'id, T> Chain<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.spares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, elem: T) {
        let node = Node {
            next: self.head.take(),
            elem,
        };
        let (chain, spare) = Full::split(Full::new(GhostCell::new(node)));
        self.head = Some(chain);
        self.spares.push(spare);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let chain = self.head.take()?;
        let spare = self.spares.pop().unwrap();
        let node = Full::into_box(Full::join(chain, spare)).into_inner();
        self.head = node.next;
        Some(node.elem)
    }

    pub fn front<'t>(&'t self, token: &'t GhostToken<'id>) -> Option<&'t T> {
        self.head.as_ref().map(|node| &node.deref().borrow(token).elem)
    }

    pub fn iter<'t>(&'t self, token: &'t GhostToken<'id>) -> Iter<'t, 'id, T> {
        Iter {
            next: self.head.as_ref(),
            token,
        }
    }

    pub fn for_each_mut<F>(&self, token: &mut GhostToken<'id>, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for node in self.spares.iter().rev() {
            f(&mut node.deref().borrow_mut(token).elem);
        }
    }
}

pub struct Iter<'t, 'id, T> {
    next: Option<&'t NodePtr<'id, T>>,
    token: &'t GhostToken<'id>,
}

impl<'t, 'id, T> Iterator for Iter<'t, 'id, T> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?.deref().borrow(self.token);
        self.next = node.next.as_ref();
        Some(&node.elem)
    }
}

impl<'id, T> Drop for Chain<'id, T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(chain) = next {
            let spare = self.spares.pop().unwrap();
            let node = Full::into_box(Full::join(chain, spare)).into_inner();
            next = node.next;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Chain;
    use ghost_cell::GhostToken;
    use std::iter::FromIterator;

    #[test]
    fn chain_push_pop() {
        GhostToken::new(|mut token| {
            let mut chain = Chain::new();
            assert!(chain.is_empty());

            chain.push_front(1);
            chain.push_front(2);
            assert_eq!(chain.len(), 2);
            assert_eq!(chain.front(&token), Some(&2));

            chain.for_each_mut(&mut token, |elem| *elem *= 10);
            assert_eq!(Vec::from_iter(chain.iter(&token)), vec![&20, &10]);

            assert_eq!(chain.pop_front(), Some(20));
            assert_eq!(chain.pop_front(), Some(10));
            assert_eq!(chain.pop_front(), None);
            assert!(chain.is_empty());
        })
    }

    #[test]
    fn chain_drops_unpopped_nodes() {
        GhostToken::new(|_token| {
            let mut chain = Chain::new();
            for i in 0..100 {
                chain.push_front(i);
            }
        })
    }
}
