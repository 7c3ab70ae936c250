use euclid::Vector3D;

use crate::math::{Face6, FreeVector};

/// One of the three coordinate axes of the grid.
///
/// Boxes and grid walls are described per axis, so an [`Axis`] can index any
/// 3-component array or [`euclid`] point, vector, or size directly.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The two faces perpendicular to this axis, low side first.
    ///
    /// ```
    /// # extern crate boxsculpt_base as boxsculpt;
    /// use boxsculpt::math::{Axis, Face6};
    ///
    /// assert_eq!(Axis::Y.faces(), [Face6::NY, Face6::PY]);
    /// ```
    #[inline]
    pub const fn faces(self) -> [Face6; 2] {
        [Face6::from_axis(self, false), Face6::from_axis(self, true)]
    }

    /// The two axes that span the plane perpendicular to this one, in cyclic order
    /// (X gives [Y, Z], Y gives [Z, X], Z gives [X, Y]).
    #[inline]
    pub const fn others(self) -> [Self; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Unit vector pointing in the positive direction along this axis.
    #[inline]
    pub fn unit_vector(self) -> FreeVector {
        let mut v = Vector3D::zero();
        v[self] = 1.0;
        v
    }
}

mod impl_index_axis {
    use super::Axis;
    use core::ops;

    impl<T> ops::Index<Axis> for [T; 3] {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            &self[index as usize]
        }
    }
    impl<T> ops::IndexMut<Axis> for [T; 3] {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            &mut self[index as usize]
        }
    }

    macro_rules! impl_xyz_e {
        ($x:ident $y:ident $z:ident, $($type:tt)*) => {
            impl<T, U> ops::Index<Axis> for $($type)*<T, U> {
                type Output = T;

                #[inline]
                fn index(&self, index: Axis) -> &Self::Output {
                    match index {
                        Axis::X => &self.$x,
                        Axis::Y => &self.$y,
                        Axis::Z => &self.$z,
                    }
                }
            }
            impl<T, U> ops::IndexMut<Axis> for $($type)*<T, U> {
                #[inline]
                fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
                    match index {
                        Axis::X => &mut self.$x,
                        Axis::Y => &mut self.$y,
                        Axis::Z => &mut self.$z,
                    }
                }
            }
        };
    }
    impl_xyz_e!(x y z, euclid::Vector3D);
    impl_xyz_e!(x y z, euclid::Point3D);
    impl_xyz_e!(width height depth, euclid::Size3D);
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point3, size3, vec3};
    use pretty_assertions::assert_eq;

    #[test]
    fn others_span_the_perpendicular_plane() {
        for axis in Axis::ALL {
            let [a, b] = axis.others();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert_ne!(a, b);
            assert_eq!(axis.unit_vector().dot(a.unit_vector()), 0.0);
            assert_eq!(axis.unit_vector().dot(b.unit_vector()), 0.0);
        }
    }

    #[test]
    fn faces_are_on_this_axis() {
        for axis in Axis::ALL {
            let [low, high] = axis.faces();
            assert_eq!((low.axis(), high.axis()), (axis, axis));
            assert!(low.is_negative());
            assert_eq!(low.opposite(), high);
            assert_eq!(high.normal_vector(), axis.unit_vector());
        }
    }

    #[test]
    fn index_euclid_types() {
        let p = point3::<_, ()>(1, 2, 3);
        let v = vec3::<_, ()>(4, 5, 6);
        let s = size3::<_, ()>(7, 8, 9);
        assert_eq!([p[Axis::X], p[Axis::Y], p[Axis::Z]], [1, 2, 3]);
        assert_eq!([v[Axis::X], v[Axis::Y], v[Axis::Z]], [4, 5, 6]);
        assert_eq!([s[Axis::X], s[Axis::Y], s[Axis::Z]], [7, 8, 9]);
    }
}
