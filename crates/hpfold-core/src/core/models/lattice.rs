use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A bead position on the cubic integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LatticePoint {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn manhattan_distance(&self, other: &LatticePoint) -> u64 {
        u64::from(self.x.abs_diff(other.x))
            + u64::from(self.y.abs_diff(other.y))
            + u64::from(self.z.abs_diff(other.z))
    }

    /// True when `other` is one of the six face neighbours of this point.
    #[inline]
    pub fn is_adjacent(&self, other: &LatticePoint) -> bool {
        self.manhattan_distance(other) == 1u64
    }

    pub fn checked_add(&self, rhs: &LatticePoint) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }

    pub fn checked_sub(&self, rhs: &LatticePoint) -> Option<Self> {
        Some(Self::new(
            self.x.checked_sub(rhs.x)?,
            self.y.checked_sub(rhs.y)?,
            self.z.checked_sub(rhs.z)?,
        ))
    }

    #[inline]
    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    #[inline]
    pub fn squared_distance_to(&self, centroid: &Centroid) -> f64 {
        (self.to_point() - centroid.position).norm_squared()
    }
}

impl From<[i32; 3]> for LatticePoint {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Componentwise, wrapping at the `i32` bounds. Use [`LatticePoint::checked_add`] to detect overflow.
impl Add for LatticePoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x.wrapping_add(rhs.x),
            self.y.wrapping_add(rhs.y),
            self.z.wrapping_add(rhs.z),
        )
    }
}

/// Componentwise, wrapping at the `i32` bounds. Use [`LatticePoint::checked_sub`] to detect overflow.
impl Sub for LatticePoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x.wrapping_sub(rhs.x),
            self.y.wrapping_sub(rhs.y),
            self.z.wrapping_sub(rhs.z),
        )
    }
}

/// Baricenter of a bead set. Supplied by the caller to the gyration routines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub position: Point3<f64>,
}

impl Centroid {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// Mean position of `points`, or `None` for an empty set.
    pub fn of(points: &[LatticePoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let sum: Vector3<f64> = points.iter().map(|p| p.to_point().coords).sum();
        Some(Self {
            position: Point3::from(sum / points.len() as f64),
        })
    }

    pub fn translated(&self, offset: &LatticePoint) -> Self {
        Self {
            position: self.position + offset.to_point().coords,
        }
    }
}

impl From<LatticePoint> for Centroid {
    fn from(point: LatticePoint) -> Self {
        Self {
            position: point.to_point(),
        }
    }
}
