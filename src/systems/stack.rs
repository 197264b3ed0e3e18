//! Stack height analysis
//!
//! Greedy single pass: boxes are ordered lowest-first, and each starting box
//! climbs through the remaining boxes once, taking the first box that sits
//! clearly above the current one and overlaps it horizontally. There is no
//! backtracking, so an unusual arrangement can report less than its true
//! tallest column.

use std::cmp::Ordering;

use crate::domain::{BoxId, CargoBox, StackConfig};

/// Height of the tallest column of non-held boxes (0 if there are none).
pub fn stack_height(boxes: &[CargoBox], held: Option<BoxId>, config: &StackConfig) -> u32 {
    let mut sorted: Vec<&CargoBox> = boxes.iter().filter(|b| Some(b.id) != held).collect();
    // Lowest on screen (largest y) first.
    sorted.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal));

    let mut best = 0;
    for (i, start) in sorted.iter().enumerate() {
        let mut height = 1;
        let mut cur = *start;
        for (j, other) in sorted.iter().enumerate() {
            if i == j {
                continue;
            }
            if other.y < cur.y - config.min_rise && (other.x - cur.x).abs() < cur.size {
                height += 1;
                cur = *other;
            }
        }
        best = best.max(height);
    }
    best
}
