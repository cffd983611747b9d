/// Returns the number of decimal places needed to print `epsilon`.
///
/// Result rendering uses this to match the caller's tolerance, so a
/// tolerance of `0.001` renders roots with three decimals and `1e-5` with
/// five. Whole-number or non-finite tolerances give zero.
#[must_use]
pub fn decimal_places_for(epsilon: f64) -> usize {
    if !epsilon.is_finite() {
        return 0;
    }

    // `f64`'s `Display` never switches to exponent notation.
    epsilon
        .abs()
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}
