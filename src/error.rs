//! Error types.
//!
//! Building a hierarchy never fails. Errors only come from rejecting a [`BuildConfig`],
//! from encoding a result for the GPU, and from [`Bvh::validate`].
//!
//! [`BuildConfig`]: ../config/struct.BuildConfig.html
//! [`Bvh::validate`]: ../bvh/struct.Bvh.html#method.validate

use thiserror::Error;

/// A [`BuildConfig`](crate::config::BuildConfig) that cannot drive a build.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Leaves must be allowed to hold at least one primitive.
    #[error("max_leaf_size must be at least 1")]
    ZeroMaxLeafSize,

    /// The depth cap must allow at least a root split.
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,

    /// A binned search needs at least one bin boundary.
    #[error("bin range {min}..={max} is invalid, need 2 <= min_bins <= max_bins")]
    InvalidBinRange { min: usize, max: usize },

    /// Forced splits below the leaf size would contradict the leaf rule.
    #[error("forced_split_threshold ({forced}) must not be below max_leaf_size ({max_leaf})")]
    ForcedSplitBelowLeafSize { forced: usize, max_leaf: usize },

    /// A cost or ratio tunable outside of its domain.
    #[error("{name} = {value} is out of range")]
    OutOfRange { name: &'static str, value: f32 },
}

/// A built hierarchy that cannot be encoded into the GPU buffer layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// An index or count does not fit into a `u32` slot.
    #[error("{what} {value} does not fit into a u32")]
    IndexOverflow { what: &'static str, value: usize },

    /// An index or count would lose precision when written as an `f32` scalar.
    #[error("{what} {value} is not exactly representable as f32")]
    NotRepresentable { what: &'static str, value: usize },
}

/// A violated structural invariant, as reported by
/// [`Bvh::validate`](crate::bvh::Bvh::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// More nodes than a full binary tree over the primitives can have.
    #[error("{nodes} nodes exceed the capacity bound for {primitives} primitives")]
    CapacityExceeded { nodes: usize, primitives: usize },

    /// The permutation or info arrays have the wrong length.
    #[error("expected {expected} primitive entries, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A child index points backwards or out of the node array.
    #[error("node {node} references invalid child {child}")]
    InvalidChild { node: usize, child: usize },

    /// A leaf range runs outside of the permutation.
    #[error("leaf {node} covers {first}..{end} outside of the primitive list")]
    InvalidLeafRange { node: usize, first: usize, end: usize },

    /// A primitive is referenced by no leaf, or by more than one.
    #[error("primitive {primitive} is referenced {count} times")]
    NotABijection { primitive: usize, count: usize },

    /// A node's box is not the merge of its children, or misses one of its primitives.
    #[error("bounds of node {node} are inconsistent with its contents")]
    BoundsMismatch { node: usize },

    /// The root box is not the merge of every primitive box.
    #[error("root bounds do not cover the scene")]
    RootIncomplete,

    /// Some nodes cannot be reached from the root.
    #[error("only {reachable} of {nodes} nodes are reachable from the root")]
    Unreachable { reachable: usize, nodes: usize },

    /// `primitive_infos` disagrees with the proxy at the same permuted position.
    #[error("primitive info at position {position} does not match its proxy")]
    InfoMismatch { position: usize },
}
