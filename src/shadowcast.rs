//! Symmetric recursive-shadowcasting field of view.

use glam::{ivec2, IVec2};
use log::trace;

use crate::HashSet;

/// `(xx, xy, yx, yy)` multipliers mapping the canonical first octant onto
/// each of the eight real octants.
const OCTANTS: [[i32; 4]; 8] = [
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, -1, 1, 0],
    [-1, 0, 0, 1],
    [-1, 0, 0, -1],
    [0, -1, -1, 0],
    [0, 1, -1, 0],
    [1, 0, 0, -1],
];

/// An angular wedge still open at `row`, bounded by slopes `start >= end`.
struct Wedge {
    row: i32,
    start: f64,
    end: f64,
}

/// Compute field of view from `origin` out to `radius` cells.
///
/// Calls `reveal(cell, offset)` for every visible cell, origin first with a
/// zero offset. `offset` is the cell's canonical-octant offset from the
/// origin, ready for distance checks. A cell that blocks sight is itself
/// revealed; only cells beyond it fall in its shadow. `in_range` decides the
/// shape of the visible area (see [`within_euclidean`],
/// [`within_chebyshev`]) independently of the angular sweep, and is the only
/// thing gating `reveal` besides the sweep itself.
///
/// A radius of 0 (or less) reveals the origin only.
///
/// Visibility is scanned octant by octant. Each octant starts with the full
/// wedge between slopes 1.0 and 0.0; every obstruction run either narrows
/// the wedge or splits it, and split-off wedges go on a work list rather
/// than into native recursion, so stack depth stays flat no matter how
/// large the radius or how pathological the blocker pattern.
pub fn shadowcast(
    origin: impl Into<IVec2>,
    radius: i32,
    blocks_sight: impl Fn(IVec2) -> bool,
    mut reveal: impl FnMut(IVec2, IVec2),
    in_range: impl Fn(IVec2) -> bool,
) {
    let origin = origin.into();
    trace!("shadowcast from {origin}, radius {radius}");

    reveal(origin, IVec2::ZERO);

    for &[xx, xy, yx, yy] in &OCTANTS {
        let mut work = vec![Wedge {
            row: 1,
            start: 1.0,
            end: 0.0,
        }];

        while let Some(Wedge {
            row,
            mut start,
            end,
        }) = work.pop()
        {
            for j in row..=radius {
                let dy = -j;
                let mut blocked = false;
                let mut new_start = start;

                for dx in -j..=0 {
                    // Slopes bounding this cell's angular extent. The
                    // half-cell offsets keep the denominators away from
                    // zero and define the tie-breaks; do not simplify.
                    let l = (dx as f64 - 0.5) / (dy as f64 + 0.5);
                    let r = (dx as f64 + 0.5) / (dy as f64 - 0.5);

                    if start < r {
                        continue;
                    }
                    if end > l {
                        break;
                    }

                    let offset = ivec2(dx, dy);
                    let pos = origin
                        + ivec2(dx * xx + dy * xy, dx * yx + dy * yy);

                    if in_range(offset) {
                        reveal(pos, offset);
                    }

                    if blocked {
                        if blocks_sight(pos) {
                            new_start = r;
                        } else {
                            blocked = false;
                            start = new_start;
                        }
                    } else if blocks_sight(pos) && j < radius {
                        // An obstruction splits the wedge. The part still
                        // open above this column continues on farther rows
                        // as its own work item, unless it is already empty.
                        blocked = true;
                        if start >= l {
                            work.push(Wedge {
                                row: j + 1,
                                start,
                                end: l,
                            });
                        }
                        new_start = r;
                    }
                }

                // A row that ends inside an obstruction closes this wedge;
                // anything still visible farther out was split off above.
                if blocked {
                    break;
                }
            }
        }
    }
}

/// Disc-shaped range predicate, `dx² + dy² ≤ radius²`.
pub fn within_euclidean(radius: i32) -> impl Fn(IVec2) -> bool {
    let r2 = radius as i64 * radius as i64;
    move |v| {
        let (x, y) = (v.x as i64, v.y as i64);
        x * x + y * y <= r2
    }
}

/// Square-shaped range predicate, `max(|dx|, |dy|) ≤ radius`.
pub fn within_chebyshev(radius: i32) -> impl Fn(IVec2) -> bool {
    move |v| v.abs().max_element() <= radius
}

/// Run [`shadowcast`] with a Euclidean disc range and collect the visible
/// cells into a set.
pub fn shadowcast_set(
    origin: impl Into<IVec2>,
    radius: i32,
    blocks_sight: impl Fn(IVec2) -> bool,
) -> HashSet<IVec2> {
    let mut lit = HashSet::default();
    shadowcast(
        origin,
        radius,
        blocks_sight,
        |pos, _| {
            lit.insert(pos);
        },
        within_euclidean(radius),
    );
    lit
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    /// Wall set and origin from rows of `#`, `.` and `@`.
    fn parse(map: &str) -> (IVec2, HashSet<IVec2>) {
        let mut origin = IVec2::ZERO;
        let mut walls = HashSet::default();

        for (y, line) in map.trim().lines().enumerate() {
            for (x, c) in line.trim().chars().enumerate() {
                let p = ivec2(x as i32, y as i32);
                match c {
                    '#' => {
                        walls.insert(p);
                    }
                    '@' => origin = p,
                    _ => {}
                }
            }
        }
        (origin, walls)
    }

    fn fov(origin: IVec2, radius: i32, walls: &HashSet<IVec2>) -> HashSet<IVec2> {
        let mut lit = HashSet::default();
        shadowcast(
            origin,
            radius,
            |p| walls.contains(&p),
            |p, _| {
                lit.insert(p);
            },
            within_chebyshev(radius),
        );
        lit
    }

    #[test]
    fn origin_revealed_first_and_once() {
        let origin = ivec2(7, 7);
        let mut reveals = Vec::new();

        // Walled in completely.
        shadowcast(
            origin,
            4,
            |p| p != origin,
            |p, off| reveals.push((p, off)),
            within_chebyshev(4),
        );

        assert_eq!(reveals[0], (origin, IVec2::ZERO));
        assert_eq!(reveals.iter().filter(|(p, _)| *p == origin).count(), 1);
    }

    #[test]
    fn radius_zero_is_origin_only() {
        let origin = ivec2(-2, 9);
        let mut reveals = Vec::new();
        shadowcast(
            origin,
            0,
            |_| false,
            |p, _| reveals.push(p),
            |_| true,
        );
        assert_eq!(reveals, vec![origin]);
    }

    #[test]
    fn open_grid_euclidean_disc() {
        let lit = shadowcast_set(ivec2(0, 0), 3, |_| false);

        let mut disc = HashSet::default();
        for x in -3..=3 {
            for y in -3..=3 {
                if x * x + y * y <= 9 {
                    disc.insert(ivec2(x, y));
                }
            }
        }

        assert_eq!(disc.len(), 29);
        assert_eq!(lit, disc);
    }

    #[quickcheck]
    fn open_grid_is_symmetric(radius: u8) -> bool {
        let radius = (radius % 12) as i32;
        let lit = shadowcast_set(ivec2(0, 0), radius, |_| false);

        lit.iter().all(|p| {
            [
                ivec2(p.x, -p.y),
                ivec2(-p.x, p.y),
                ivec2(-p.x, -p.y),
                ivec2(p.y, p.x),
                ivec2(-p.y, p.x),
                ivec2(p.y, -p.x),
                ivec2(-p.y, -p.x),
            ]
            .iter()
            .all(|q| lit.contains(q))
        })
    }

    #[quickcheck]
    fn range_predicate_gates_reveal(
        blockers: Vec<(i8, i8)>,
        radius: u8,
    ) -> bool {
        let radius = (radius % 8) as i32;
        let walls: HashSet<IVec2> = blockers
            .iter()
            .map(|&(x, y)| ivec2(x as i32, y as i32))
            .collect();
        let in_range = within_euclidean(radius);

        let mut ok = true;
        shadowcast(
            ivec2(0, 0),
            radius,
            |p| walls.contains(&p),
            |_, off| ok &= within_euclidean(radius)(off),
            in_range,
        );
        ok
    }

    #[test]
    fn single_blocker_casts_shadow() {
        let mut walls = HashSet::default();
        walls.insert(ivec2(1, 0));
        let lit = fov(ivec2(0, 0), 5, &walls);

        // The blocker is seen, the cells behind it are not.
        assert!(lit.contains(&ivec2(1, 0)));
        assert!(!lit.contains(&ivec2(2, 0)));
        assert!(!lit.contains(&ivec2(3, 0)));

        // Sight spreads past the blocker on both sides.
        assert!(lit.contains(&ivec2(1, 1)));
        assert!(lit.contains(&ivec2(1, -1)));
        assert!(lit.contains(&ivec2(2, 1)));
        assert!(lit.contains(&ivec2(2, -1)));
    }

    #[test]
    fn closed_room() {
        let (origin, walls) = parse(
            "#######
             #.....#
             #..@..#
             #.....#
             #######",
        );
        let lit = fov(origin, 10, &walls);

        // The whole room is visible, walls included.
        for x in 0..7 {
            for y in 0..5 {
                assert!(lit.contains(&ivec2(x, y)), "({x}, {y}) is dark");
            }
        }

        // Nothing leaks past the walls.
        assert_eq!(lit.len(), 7 * 5);
    }

    #[test]
    fn doorway() {
        let (origin, walls) = parse(
            ".....#....
             .....#....
             .@...+....
             .....#....
             .....#....",
        );
        let lit = fov(origin, 9, &walls);

        // Sight passes through the door gap along the origin row.
        assert!(lit.contains(&ivec2(5, 2)));
        assert!(lit.contains(&ivec2(6, 2)));
        assert!(lit.contains(&ivec2(9, 2)));

        // The wall shadows the far side away from the gap's wedge.
        assert!(!lit.contains(&ivec2(6, 0)));
        assert!(!lit.contains(&ivec2(6, 4)));
    }
}
