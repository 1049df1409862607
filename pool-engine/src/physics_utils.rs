use glam::DVec2;

use crate::{ DRAG, VEL_EPSILON };

pub fn sub(a: DVec2, b: DVec2) -> DVec2 {
    a - b
}

/// Euclidean norm, never negative
pub fn length(v: DVec2) -> f64 {
    v.length()
}

pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.dot(b)
}

/// Deceleration of magnitude [`DRAG`] opposing `vel`, or `None` when the
/// ball is too slow for a direction to be meaningful
pub fn drag_acceleration(vel: DVec2) -> Option<DVec2> {
    let speed = length(vel);
    if speed > VEL_EPSILON {
        Some(-vel / speed * DRAG)
    }
    else {
        None
    }
}

/// Instantaneous frictionless impact between two balls of equal mass.
/// The velocity component along the line of centres is exchanged, the
/// tangential components are left untouched.
pub(crate) fn resolve_ball_collision(
    pos1: DVec2,
    vel1: DVec2,
    pos2: DVec2,
    vel2: DVec2,
) -> (DVec2, DVec2) {
    let r_ab = pos1 - pos2;
    let v_rel = vel1 - vel2;

    let dist = r_ab.length();
    // Contact is detected one diameter apart so centres never coincide
    debug_assert!(dist > 0., "colliding balls share the same centre");
    let n = r_ab / dist;

    let v_rel_n = v_rel.dot(n);

    (vel1 - v_rel_n * n, vel2 + v_rel_n * n)
}
