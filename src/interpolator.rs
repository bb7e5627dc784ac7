use crate::TrackKey;

/// Value between `begin` and its successor `end` at `position`.
///
/// `begin.policy` picks the rule. `position` is expected to lie in
/// `[begin.position, end.position)`.
pub fn interpolate(begin: &TrackKey, end: &TrackKey, position: f64) -> i32 {
    let lane_bits = match begin.policy.lane_bits() {
        None => return begin.value,
        Some(bits) => bits,
    };

    let t = (position - f64::from(begin.position))
        / (f64::from(end.position) - f64::from(begin.position));

    lerp_lanes(begin.value, end.value, t, lane_bits)
}

/// Blends `a` towards `b` lane by lane, `lane_bits` wide each.
///
/// The top lane is extracted with an arithmetic shift and so keeps the sign
/// of the 32-bit value; lower lanes are masked. Each blend truncates toward
/// zero and is masked back to the lane width, so nothing carries between
/// lanes.
pub(crate) fn lerp_lanes(a: i32, b: i32, t: f64, lane_bits: u32) -> i32 {
    debug_assert!(lane_bits > 0 && lane_bits <= 32 && 32 % lane_bits == 0);

    let mask = u32::MAX >> (32 - lane_bits);
    let mut result = 0u32;

    for shift in (0..32).step_by(lane_bits as usize) {
        let from = lane(a, shift, lane_bits, mask);
        let to = lane(b, shift, lane_bits, mask);

        let blended = lerp(from, to, t);
        result |= (blended as u32 & mask) << shift;
    }

    result as i32
}

fn lane(value: i32, shift: u32, lane_bits: u32, mask: u32) -> i32 {
    if shift + lane_bits == 32 {
        value >> shift
    } else {
        (value >> shift) & mask as i32
    }
}

fn lerp(from: i32, to: i32, t: f64) -> i32 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t) as i32
}
