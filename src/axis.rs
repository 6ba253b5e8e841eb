//! Axis enum for indexing three-dimensional structures.

use crate::{Point3, Real, Vector3};
use std::fmt::{Display, Formatter, Result};
use std::ops::{Index, IndexMut};

/// An `Axis` in a three-dimensional coordinate system.
/// Used to access [`Point3`]/[`Vector3`] structs via index.
///
/// # Examples
/// ```
/// use shape_bvh::axis::Axis;
/// use shape_bvh::Point3;
///
/// let mut position = Point3::new(1.0, 0.5, 42.0);
/// position[Axis::Y] *= 4.0;
///
/// assert_eq!(position[Axis::Y], 2.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Index of the X axis.
    X = 0,

    /// Index of the Y axis.
    Y = 1,

    /// Index of the Z axis.
    Z = 2,
}

impl Axis {
    /// All three axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Display implementation for `Axis`.
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

/// Make `Point3` indexable by `Axis`.
impl Index<Axis> for Point3 {
    type Output = Real;

    fn index(&self, axis: Axis) -> &Real {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

/// Make `Point3` mutably accessible by `Axis`.
impl IndexMut<Axis> for Point3 {
    fn index_mut(&mut self, axis: Axis) -> &mut Real {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Make `Vector3` indexable by `Axis`.
impl Index<Axis> for Vector3 {
    type Output = Real;

    fn index(&self, axis: Axis) -> &Real {
        &self[axis as usize]
    }
}
