//! Visibility primitives for unbounded 2D grids.
//!
//! The crate never owns a map. Callers inject grid semantics as closures
//! ("does this cell block sight", "is this offset still in range") and get
//! results back through callbacks or lazy iterators, so it composes with any
//! map representation.
//!
//! ```
//! use glam::ivec2;
//! use sightline::{shadowcast, within_euclidean};
//!
//! let walls = [ivec2(1, 0)];
//! let mut lit = Vec::new();
//! shadowcast(
//!     ivec2(0, 0),
//!     4,
//!     |p| walls.contains(&p),
//!     |p, _| lit.push(p),
//!     within_euclidean(4),
//! );
//!
//! // The wall itself is visible, the cell in its shadow is not.
//! assert!(lit.contains(&ivec2(1, 0)));
//! assert!(!lit.contains(&ivec2(2, 0)));
//! ```

mod circle;
pub use circle::{adjacent, scan_circle, DIR_8};

mod line;
pub use line::{plot_line, walk_line};

mod raycast;
pub use raycast::{line_of_sight, raycast};

mod shadowcast;
pub use shadowcast::{
    shadowcast, shadowcast_set, within_chebyshev, within_euclidean,
};

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;
