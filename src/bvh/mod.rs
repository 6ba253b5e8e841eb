//! This module defines a [`Bvh`] and the [`BvhBuilder`] that creates it.
//!
//! [`Bvh`]: struct.Bvh.html
//! [`BvhBuilder`]: struct.BvhBuilder.html
//!

mod bucket;
mod bvh_impl;
mod bvh_node;
mod partition;
mod stats;

pub use self::bvh_impl::*;
pub use self::bvh_node::*;
pub use self::stats::BuildStats;
