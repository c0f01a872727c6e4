use glam::{ivec2, IVec2};

/// Plot the Bresenham line from `a` to `b`, inclusive of both endpoints.
///
/// Cells are yielded in order from `a` to `b`. Consecutive cells are always
/// 8-adjacent and the line contains exactly `max(|dx|, |dy|) + 1` cells, one
/// per major-axis step. `a == b` yields a single cell.
pub fn plot_line(
    a: impl Into<IVec2>,
    b: impl Into<IVec2>,
) -> impl Iterator<Item = IVec2> {
    let (a, b): (IVec2, IVec2) = (a.into(), b.into());

    let step = (b - a).signum();
    let d = (b - a).abs() * ivec2(1, -1);
    let mut p = a;
    let mut err = d.x + d.y;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }

        let ret = p;
        if p == b {
            done = true;
        } else {
            let e2 = 2 * err;
            if e2 >= d.y {
                err += d.y;
                p.x += step.x;
            }
            if e2 <= d.x {
                err += d.x;
                p.y += step.y;
            }
        }
        Some(ret)
    })
}

/// Walk the line from `a` to `b`, feeding each cell to `step`.
///
/// Returning `false` from `step` aborts the walk, the refusing cell is the
/// last one visited. Otherwise the walk ends after `b`.
pub fn walk_line(
    a: impl Into<IVec2>,
    b: impl Into<IVec2>,
    mut step: impl FnMut(IVec2) -> bool,
) {
    let _ = plot_line(a, b).all(&mut step);
}
