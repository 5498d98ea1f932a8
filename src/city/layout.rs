//! # City layouts
//!
//! `CitySetup` describes how many cities to place and where. Cities are placed
//! either uniformly at random inside the padded region, or evenly spaced on a
//! circle centered in it.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::city::{generate_cities, CityLayout, CitySetup};
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! let setup = CitySetup::new(12, 400, 300).with_layout(CityLayout::Circular);
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let cities = generate_cities(&setup, &mut rng).unwrap();
//!
//! assert_eq!(cities.len(), 12);
//! assert_eq!(cities[0].index(), 0);
//! ```

use std::f64::consts::PI;

use super::City;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// How cities are arranged inside the region.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CityLayout {
    /// Uniformly random positions within the padded region.
    #[default]
    Random,
    /// Evenly spaced on a circle with radius `min(width, height) / 2.5`.
    Circular,
}

/// Describes the city set to generate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CitySetup {
    pub count: usize,
    pub width: i32,
    pub height: i32,
    pub padding: i32,
    pub layout: CityLayout,
}

impl CitySetup {
    pub fn new(count: usize, width: i32, height: i32) -> Self {
        Self {
            count,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_layout(mut self, layout: CityLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Checks that the setup can produce a tour.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if fewer than two cities are requested, the
    /// region is empty, the padding is negative, or the padded region does not fit
    /// in `i32` coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.count < 2 {
            return Err(GeneticError::Configuration(format!(
                "At least 2 cities are required, got {}",
                self.count
            )));
        }

        if self.width <= 0 || self.height <= 0 {
            return Err(GeneticError::Configuration(format!(
                "Region must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }

        if self.padding < 0 {
            return Err(GeneticError::Configuration(format!(
                "Padding cannot be negative, got {}",
                self.padding
            )));
        }

        if self.padding.checked_add(self.width).is_none()
            || self.padding.checked_add(self.height).is_none()
        {
            return Err(GeneticError::Configuration(format!(
                "Padded region exceeds the coordinate range, got {}x{} with padding {}",
                self.width, self.height, self.padding
            )));
        }

        Ok(())
    }
}

impl Default for CitySetup {
    fn default() -> Self {
        Self {
            count: 5,
            width: 700,
            height: 500,
            padding: 50,
            layout: CityLayout::Random,
        }
    }
}

/// Generates `setup.count` cities indexed `0..count`.
///
/// # Errors
///
/// Returns a `Configuration` error if `setup` fails validation.
pub fn generate_cities(setup: &CitySetup, rng: &mut RandomNumberGenerator) -> Result<Vec<City>> {
    setup.validate()?;

    let cities = match setup.layout {
        CityLayout::Random => random_layout(setup, rng),
        CityLayout::Circular => circular_layout(setup),
    };

    tracing::debug!(
        count = cities.len(),
        layout = ?setup.layout,
        "generated cities"
    );

    Ok(cities)
}

fn random_layout(setup: &CitySetup, rng: &mut RandomNumberGenerator) -> Vec<City> {
    let x_range = setup.padding..setup.padding + setup.width;
    let y_range = setup.padding..setup.padding + setup.height;

    (0..setup.count)
        .map(|index| {
            let x = rng.gen_range(x_range.clone());
            let y = rng.gen_range(y_range.clone());
            City::new(x, y, index)
        })
        .collect()
}

fn circular_layout(setup: &CitySetup) -> Vec<City> {
    let radius = f64::from(setup.width.min(setup.height)) / 2.5;
    // Integer halving keeps the center on the grid.
    let center_x = f64::from(setup.padding + setup.width / 2);
    let center_y = f64::from(setup.padding + setup.height / 2);

    (0..setup.count)
        .map(|index| {
            let angle = 2.0 * PI * index as f64 / setup.count as f64;
            let x = (center_x + radius * angle.cos()) as i32;
            let y = (center_y + radius * angle.sin()) as i32;
            City::new(x, y, index)
        })
        .collect()
}
