/// Distance to the snap target below which the snap animation stops.
pub(crate) const SNAP_EPSILON: f64 = 0.001;

pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = clamp01(t);
    a + (b - a) * t
}
