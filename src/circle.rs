use std::f32::consts::TAU;

use anyhow::{ensure, Result};
use glam::{ivec2, IVec2};

use crate::HashSet;

/// 8 neighbor directions, counterclockwise from east.
///
/// Which way "north" points on screen is up to the caller's axis convention.
pub const DIR_8: [IVec2; 8] = [
    IVec2::from_array([1, 0]),
    IVec2::from_array([1, -1]),
    IVec2::from_array([0, -1]),
    IVec2::from_array([-1, -1]),
    IVec2::from_array([-1, 0]),
    IVec2::from_array([-1, 1]),
    IVec2::from_array([0, 1]),
    IVec2::from_array([1, 1]),
];

/// Iterate the 8 cells adjacent to `origin`, in [`DIR_8`] order.
pub fn adjacent(origin: impl Into<IVec2>) -> impl Iterator<Item = IVec2> {
    let origin = origin.into();
    DIR_8.iter().map(move |&d| origin + d)
}

/// Iterate cells on a circle of `radius` around `origin` by rotating an
/// angle in increments of `step` radians from 0 up to a full turn.
///
/// Cells are snapped to the grid with `origin + floor((radius + 0.5) · (cos
/// θ, sin θ))` and deduplicated, so a fine `step` yields each rim cell once.
/// The sign of `step` is ignored.
///
/// Errors on a non-positive radius and on a zero step, which would never
/// complete the turn.
pub fn scan_circle(
    origin: impl Into<IVec2>,
    radius: i32,
    step: f32,
) -> Result<impl Iterator<Item = IVec2>> {
    ensure!(radius > 0, "scan_circle: radius {radius} must be positive");
    let step = step.abs();
    ensure!(step > 0.0, "scan_circle: rotation step must be nonzero");

    let origin = origin.into();
    let r = radius as f32 + 0.5;
    let mut seen = HashSet::default();
    let mut angle = 0.0f32;

    Ok(std::iter::from_fn(move || {
        while angle < TAU {
            let (sin, cos) = angle.sin_cos();
            angle += step;

            let p = origin
                + ivec2((r * cos).floor() as i32, (r * sin).floor() as i32);
            if seen.insert(p) {
                return Some(p);
            }
        }
        None
    }))
}
