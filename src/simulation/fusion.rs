//! Fusion of close bodies
//!
//! Scans all body pairs once per tick and merges any pair closer than the
//! configured threshold, conserving mass and momentum. The merged result
//! lands in the higher-indexed body; the lower-indexed one is flagged dead
//! and the live set is compacted afterwards, preserving survivor order.

use super::states::System;
use super::params::Parameters;

/// Merge every pair of live bodies closer than `params.merge_dist`.
///
/// Scan order is i ascending, j ascending from i + 1; the first qualifying
/// partner absorbs body i and the scan for i stops, so a body is absorbed at
/// most once per pass. The enlarged body j stays scannable and may absorb
/// further bodies in the same pass, which makes 3-way coincidences resolve as
/// two sequential pairwise merges in this scan order.
///
/// Returns the number of merges performed.
pub fn fuse_bodies(sys: &mut System, params: &Parameters) -> usize {
    let n = sys.bodies.len();
    let mut dead = vec![false; n];

    for i in 0..n {
        if dead[i] {
            continue;
        }
        for j in (i + 1)..n {
            if dead[j] {
                continue;
            }

            let dist = (sys.bodies[j].x - sys.bodies[i].x).norm();
            if dist >= params.merge_dist {
                continue;
            }

            let (mi, xi, vi) = {
                let bi = &sys.bodies[i];
                (bi.m, bi.x, bi.v)
            };
            let total = mi + sys.bodies[j].m;

            // Merged position is the midpoint, velocity follows from
            // conservation of momentum, masses add
            let bj = &mut sys.bodies[j];
            bj.x = (xi + bj.x) / 2.0;
            bj.v = (mi * vi + bj.m * bj.v) / total;
            bj.m = total;

            dead[i] = true;
            break;
        }
    }

    sys.compact(&dead)
}
