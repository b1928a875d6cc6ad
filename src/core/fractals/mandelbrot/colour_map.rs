use crate::core::data::colour::Hsl;

const SATURATION: f64 = 100.0;
const ESCAPED_LIGHTNESS: f64 = 50.0;
const INTERIOR_LIGHTNESS: f64 = 0.0;

/// Maps an escape count to a hue around the colour wheel. Points that used
/// the whole budget are drawn black with hue 0.
#[must_use]
pub fn colour_for(iterations: u32, max_iterations: u32) -> Hsl {
    if iterations >= max_iterations {
        return Hsl::new(0.0, SATURATION, INTERIOR_LIGHTNESS);
    }

    let hue = f64::from(iterations) / f64::from(max_iterations) * 360.0;

    Hsl::new(hue, SATURATION, ESCAPED_LIGHTNESS)
}
