//! Winding-number containment test against a fitted curve set.
//!
//! Each segment is flattened into short chords and the classic
//! crossing-with-orientation count is run over all of them. The
//! result is exact for the flattened polygon of a closed stroke. Open
//! strokes get the same treatment and the same answer shape, but
//! "inside" has no strict meaning there.

use kurbo::Point;
use tracing::debug;

use crate::eval::{flatten, FLATTEN_STEPS};
use crate::fit::CurveSet;

/// Inside/outside under the nonzero fill rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
}

impl Containment {
    pub fn from_winding(winding: i32) -> Self {
        if winding != 0 {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }
}

/// Signed winding number of `curves` around `query`; `0` means outside.
pub fn classify(query: Point, curves: &CurveSet) -> i32 {
    if curves.is_empty() {
        return 0;
    }
    let winding = curves
        .iter()
        .flat_map(|segment| flatten(segment, FLATTEN_STEPS))
        .map(|(start, end)| crossing(query, start, end))
        .sum();
    debug!(x = query.x, y = query.y, winding, "classified point");
    winding
}

/// Contribution of the directed edge `start → end` to the winding number.
fn crossing(query: Point, start: Point, end: Point) -> i32 {
    if start.y <= query.y {
        if end.y > query.y && is_left(query, start, end) {
            return 1;
        }
    } else if end.y <= query.y && !is_left(query, start, end) {
        return -1;
    }
    0
}

/// Whether `p` lies strictly left of the directed line `start → end`.
fn is_left(p: Point, start: Point, end: Point) -> bool {
    (end.x - start.x) * (p.y - start.y) > (end.y - start.y) * (p.x - start.x)
}
