use std::fmt;

use crate::Real;

/// Diagnostics of one build, used for tuning and for deciding at the call site whether the
/// hierarchy or a linear scan should be traversed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStats {
    /// Number of primitives the build was given.
    pub primitive_count: usize,

    /// Number of nodes in the hierarchy, `0` on auto-fallback.
    pub node_count: usize,

    /// Number of leaves in the hierarchy.
    pub leaf_count: usize,

    /// Mean number of primitives per leaf.
    pub avg_leaf_size: Real,

    /// Largest number of primitives in a single leaf.
    pub max_leaf_size: usize,

    /// Deepest leaf, the root has depth `0`.
    pub max_depth: usize,

    /// SAH cost of the best split of the root, [`None`] if the root cannot be split.
    pub root_best_cost: Option<Real>,

    /// Cost of testing every primitive, the primitive count.
    pub root_direct_cost: Real,

    /// `max(0, (direct - best) / direct)`, `0` if the root cannot be split.
    pub improvement_ratio: Real,

    /// The hierarchy was skipped, callers must scan all primitives.
    pub auto_fallback: bool,
}

/// Tally of the leaves written during a build.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LeafTally {
    pub leaves: usize,
    pub primitives: usize,
    pub max_size: usize,
    pub max_depth: usize,
}

impl LeafTally {
    pub fn add_leaf(&mut self, count: usize, depth: usize) {
        self.leaves += 1;
        self.primitives += count;
        self.max_size = self.max_size.max(count);
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn avg_size(&self) -> Real {
        if self.leaves == 0 {
            0.0
        } else {
            self.primitives as Real / self.leaves as Real
        }
    }
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.auto_fallback {
            return write!(
                f,
                "{} primitives, linear scan (improvement {:.1}%)",
                self.primitive_count,
                self.improvement_ratio * 100.0
            );
        }
        write!(
            f,
            "{} primitives, {} nodes, {} leaves (avg {:.2}, max {}), depth {}, improvement {:.1}%",
            self.primitive_count,
            self.node_count,
            self.leaf_count,
            self.avg_leaf_size,
            self.max_leaf_size,
            self.max_depth,
            self.improvement_ratio * 100.0
        )
    }
}
