use alloc::boxed::Box;

/// An owning, possibly empty, child slot.
///
/// Every mutating descent takes `&mut Link<T>` so the recursion can
/// replace the subtree root in its parent's slot (after a rotation, a
/// splice, or a fresh insert) without the parent taking a second pass.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Cached height: a leaf is 0, see [`height`] for empty slots.
    pub(crate) height: i32,
}

impl<T> Node<T> {
    /// A new leaf holding `element`.
    pub(crate) fn leaf(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
            height: 0,
        })
    }

    #[inline]
    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Recompute the cached height from the children's cached heights.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Height of a slot: `-1` when empty, otherwise the node's cached height.
#[inline]
pub(crate) fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_has_height_minus_one() {
        let link: Link<u32> = None;
        assert_eq!(height(&link), -1);
    }

    #[test]
    fn leaf_has_height_zero() {
        let leaf = Node::leaf(1u32);
        assert_eq!(leaf.height, 0);
        assert_eq!(leaf.balance_factor(), 0);
        assert!(!leaf.has_two_children());
    }

    #[test]
    fn update_height_uses_taller_child() {
        let mut root = Node::leaf(2u32);
        let mut left = Node::leaf(1u32);
        left.left = Some(Node::leaf(0u32));
        left.update_height();
        root.left = Some(left);
        root.right = Some(Node::leaf(3u32));
        root.update_height();

        assert_eq!(root.height, 2);
        assert_eq!(root.balance_factor(), 1);
        assert!(root.has_two_children());
    }
}
