use crate::foundation::core::Vec3;

#[inline]
pub(crate) fn deg(d: f64) -> f64 {
    d.to_radians()
}

#[inline]
pub(crate) fn deg3(v: [f64; 3]) -> Vec3 {
    Vec3::new(deg(v[0]), deg(v[1]), deg(v[2]))
}

/// Closed form of repeatedly lerping `from` toward `to` by `rate` once per tick.
///
/// After `ticks` (fractional allowed) the remaining distance is `(1 - rate)^ticks`.
pub(crate) fn approach(from: Vec3, to: Vec3, rate: f64, ticks: f64) -> Vec3 {
    let rate = rate.clamp(0.0, 1.0);
    let remaining = (1.0 - rate).powf(ticks.max(0.0));
    to + (from - to) * remaining
}

/// Map non-finite or negative time to zero.
#[inline]
pub(crate) fn sanitize_secs(t: f64) -> f64 {
    if t.is_finite() { t.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
