//! Arena-resident heap nodes.
//!
//! Nodes live in a [`SlotMap`] owned by the heap and refer to each other
//! through [`NodeKey`] handles. The parent handle is a plain back-reference:
//! it never keeps anything alive, and the arena is the only owner.

use crate::rank::Rank;
use crate::sibling_list::SiblingList;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a node in the heap's arena.
    pub struct NodeKey;
}

/// Node storage shared by every list in one heap.
pub(crate) type Arena<E, K> = SlotMap<NodeKey, Node<E, K>>;

/// One inserted element together with its tree and ring links.
#[derive(Debug, Clone)]
pub(crate) struct Node<E, K> {
    pub(crate) element: E,
    pub(crate) key: K,
    /// Owning node if this node is a child, `None` for roots.
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: SiblingList,
    /// Ring neighbours. An unlinked node points at itself.
    pub(crate) prev: NodeKey,
    pub(crate) next: NodeKey,
    pub(crate) rank: Rank,
    pub(crate) marked: bool,
}

impl<E, K> Node<E, K> {
    /// Creates an isolated node. `this` must be the key the node is stored under.
    pub(crate) fn new(this: NodeKey, element: E, key: K) -> Self {
        Node {
            element,
            key,
            parent: None,
            children: SiblingList::new(),
            prev: this,
            next: this,
            rank: 0,
            marked: false,
        }
    }

    #[inline]
    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
