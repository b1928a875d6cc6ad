use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTime {
    pub iterations: u32,
    pub escaped: bool,
}

/// Runs z ← z² + c from z = 0 for at most `max_iterations` steps.
///
/// The escape test uses the squares of z taken *before* the step that
/// produced the new z, so a point is reported one iteration after its
/// orbit first leaves the radius-2 disc. A NaN orbit never compares greater
/// than the threshold and so never escapes.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeTime {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations {
        let previous_magnitude_squared = z.magnitude_squared();

        z = z * z + c;

        if previous_magnitude_squared > ESCAPE_RADIUS_SQUARED {
            break;
        }

        iterations += 1;
    }

    EscapeTime {
        iterations,
        escaped: iterations < max_iterations,
    }
}
