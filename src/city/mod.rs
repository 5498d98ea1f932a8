//! # City
//!
//! A `City` is a fixed point on an integer grid plus a stable index. The city with
//! index `0` is the depot: every tour starts and ends there, so it never appears in
//! a tour's stored sequence.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::city::City;
//!
//! let a = City::new(0, 0, 0);
//! let b = City::new(3, 4, 1);
//!
//! assert_eq!(a.distance(&b), 5);
//! assert!(a.is_start_city());
//! ```

pub mod layout;

pub use layout::{generate_cities, CityLayout, CitySetup};

/// A city on the map.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct City {
    x: i32,
    y: i32,
    index: usize,
}

impl City {
    pub fn new(x: i32, y: i32, index: usize) -> Self {
        Self { x, y, index }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` for the depot every tour starts from.
    pub fn is_start_city(&self) -> bool {
        self.index == 0
    }

    /// Euclidean distance to `other`, truncated to an integer.
    pub fn distance(&self, other: &City) -> u64 {
        distance(self, other)
    }
}

/// Euclidean distance between two cities, truncated to an integer.
///
/// Squares are summed in `i128`, which holds any pair of `i32` coordinates.
pub fn distance(a: &City, b: &City) -> u64 {
    let dx = i128::from(a.x) - i128::from(b.x);
    let dy = i128::from(a.y) - i128::from(b.y);
    ((dx * dx + dy * dy) as f64).sqrt() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_truncated() {
        let a = City::new(0, 0, 0);
        let b = City::new(1, 1, 1);
        // sqrt(2) = 1.414...
        assert_eq!(distance(&a, &b), 1);

        let c = City::new(2, 3, 2);
        // sqrt(13) = 3.605...
        assert_eq!(distance(&a, &c), 3);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = City::new(-17, 42, 0);
        let b = City::new(90, -3, 1);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::new(12, 7, 4);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_large_coordinates() {
        let a = City::new(-1_000_000_000, 0, 0);
        let b = City::new(1_000_000_000, 0, 1);
        assert_eq!(a.distance(&b), 2_000_000_000);
    }

    #[test]
    fn test_distance_across_full_coordinate_range() {
        let a = City::new(i32::MIN, i32::MIN, 0);
        let b = City::new(i32::MAX, i32::MAX, 1);
        // sqrt(2) * (2^32 - 1) = 6074000998.53...
        assert_eq!(a.distance(&b), 6_074_000_998);
        assert_eq!(b.distance(&a), 6_074_000_998);
    }

    #[test]
    fn test_start_city() {
        assert!(City::new(5, 5, 0).is_start_city());
        assert!(!City::new(5, 5, 1).is_start_city());
    }
}
