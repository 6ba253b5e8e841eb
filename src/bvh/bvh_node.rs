use std::ops::Range;

use crate::aabb::Aabb;

/// The [`BvhNode`] enum that describes a node in a [`Bvh`].
/// It's either a leaf node and references a contiguous run of the permuted primitive list,
/// or a regular node that has two child nodes stored next to each other.
/// Both variants store the joint [`Aabb`] of everything below them.
///
/// The flat GPU layout merges both variants into one record, see [`FlatNode`].
///
/// [`Aabb`]: ../aabb/struct.Aabb.html
/// [`Bvh`]: struct.Bvh.html
/// [`FlatNode`]: ../flat_bvh/struct.FlatNode.html
///
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BvhNode {
    /// Leaf node.
    Leaf {
        /// The convex hull of the primitives' [`Aabb`]s in this leaf.
        aabb: Aabb,

        /// Offset of the first primitive in the permuted primitive list.
        first: usize,

        /// Number of primitives in this leaf, never zero.
        count: usize,
    },
    /// Inner node.
    Node {
        /// The convex hull of both subtrees.
        aabb: Aabb,

        /// Index of the left subtree's root node.
        child_l_index: usize,

        /// Index of the right subtree's root node, always `child_l_index + 1`.
        child_r_index: usize,
    },
}

impl BvhNode {
    /// The build function allocates node slots before their contents are known.
    /// A dummy created by this function serves the purpose of being changed later on.
    pub(crate) fn create_dummy() -> BvhNode {
        BvhNode::Leaf {
            aabb: Aabb::empty(),
            first: 0,
            count: 0,
        }
    }

    /// Returns the [`Aabb`] of this node.
    pub fn aabb(&self) -> Aabb {
        match *self {
            BvhNode::Leaf { aabb, .. } | BvhNode::Node { aabb, .. } => aabb,
        }
    }

    /// Returns true for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }

    /// Returns the index of the left child node.
    pub fn child_l(&self) -> usize {
        match *self {
            BvhNode::Node { child_l_index, .. } => child_l_index,
            _ => panic!("Tried to get the left child of a leaf node."),
        }
    }

    /// Returns the index of the right child node.
    pub fn child_r(&self) -> usize {
        match *self {
            BvhNode::Node { child_r_index, .. } => child_r_index,
            _ => panic!("Tried to get the right child of a leaf node."),
        }
    }

    /// Returns the positions in the permuted primitive list covered by a leaf,
    /// or [`None`] if it is an interior node.
    pub fn primitive_range(&self) -> Option<Range<usize>> {
        match *self {
            BvhNode::Leaf { first, count, .. } => Some(first..first + count),
            BvhNode::Node { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aabb::Aabb;
    use crate::bvh::BvhNode;
    use crate::Point3;

    #[test]
    fn test_node_accessors() {
        let aabb = Aabb::with_bounds(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let leaf = BvhNode::Leaf {
            aabb,
            first: 4,
            count: 3,
        };
        let node = BvhNode::Node {
            aabb,
            child_l_index: 1,
            child_r_index: 2,
        };

        assert!(leaf.is_leaf());
        assert_eq!(leaf.primitive_range(), Some(4..7));
        assert_eq!(leaf.aabb(), aabb);
        assert!(!node.is_leaf());
        assert_eq!(node.primitive_range(), None);
        assert_eq!((node.child_l(), node.child_r()), (1, 2));
    }

    #[test]
    #[should_panic]
    fn test_leaf_has_no_children() {
        BvhNode::create_dummy().child_l();
    }
}
