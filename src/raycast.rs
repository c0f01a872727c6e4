use glam::IVec2;

use crate::{plot_line, walk_line};

/// Cast a ray from `origin` to every endpoint, feeding each cell along each
/// ray to `on_cell`.
///
/// Endpoints come from any iterator, typically [`crate::adjacent`] or
/// [`crate::scan_circle`]. Returning `false` from `on_cell` ends the current
/// ray only; the next ray starts over from `origin`. Cells shared between
/// rays are visited once per ray.
pub fn raycast(
    endpoints: impl IntoIterator<Item = IVec2>,
    origin: impl Into<IVec2>,
    mut on_cell: impl FnMut(IVec2) -> bool,
) {
    let origin = origin.into();
    for end in endpoints {
        walk_line(origin, end, &mut on_cell);
    }
}

/// Whether sight from `a` reaches `b`.
///
/// Only cells strictly between the two block: either endpoint may itself be
/// a sight-blocker and still be seen from the other.
pub fn line_of_sight(
    a: impl Into<IVec2>,
    b: impl Into<IVec2>,
    blocks_sight: impl Fn(IVec2) -> bool,
) -> bool {
    let (a, b): (IVec2, IVec2) = (a.into(), b.into());
    plot_line(a, b).all(|p| p == a || p == b || !blocks_sight(p))
}
