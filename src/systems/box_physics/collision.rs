use crate::domain::{BoxId, CargoBox, PhysicsConfig};

/// Resolve every overlapping pair once, in index order.
///
/// Pairs involving `held` are skipped; the carried box passes through others.
pub(super) fn resolve_box_collisions(boxes: &mut [CargoBox], held: Option<BoxId>, physics: &PhysicsConfig) {
    let n = boxes.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = boxes.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if Some(a.id) == held || Some(b.id) == held {
                continue;
            }
            resolve_pair(a, b, physics);
        }
    }
}

/// Push one overlapping pair apart along the axis of smaller overlap.
pub(super) fn resolve_pair(a: &mut CargoBox, b: &mut CargoBox, physics: &PhysicsConfig) -> bool {
    let reach = a.half() + b.half();
    let ox = reach - (a.x - b.x).abs();
    let oy = reach - (a.y - b.y).abs();

    if ox <= 0.0 || oy <= 0.0 {
        return false;
    }

    if ox < oy {
        let px = ox * 0.5;
        if a.x < b.x {
            a.x -= px;
            b.x += px;
        } else {
            a.x += px;
            b.x -= px;
        }
        let va = a.vx;
        a.vx = b.vx * physics.bounce;
        b.vx = va * physics.bounce;
    } else {
        let py = oy * 0.5;
        let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
        top.y -= py;
        bottom.y += py;
        // Top box may not sink into the one below; the lower one may not rise.
        top.vy = top.vy.min(0.0);
        bottom.vy = (bottom.vy * physics.bounce).max(0.0);
        top.vx *= physics.friction;
        bottom.vx *= physics.friction;
    }
    true
}
