use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_MAX_SLOPPINESS: u32 = 8;
pub const DEFAULT_ZOOM: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotConfigError {
    ZeroMaxIterations,
    ZeroMaxSloppiness,
    NonPositiveZoom { zoom: f64 },
}

impl fmt::Display for MandelbrotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::ZeroMaxSloppiness => write!(f, "maximum sloppiness must be greater than zero"),
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be a positive finite number, got {}", zoom)
            }
        }
    }
}

impl Error for MandelbrotConfigError {}

/// Session-wide settings. The iteration budget and sloppiness are fixed for
/// the life of a session; the view fields are the initial view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub max_sloppiness: u32,
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_sloppiness: DEFAULT_MAX_SLOPPINESS,
            zoom: DEFAULT_ZOOM,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotConfigError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotConfigError::ZeroMaxIterations);
        }

        if self.max_sloppiness == 0 {
            return Err(MandelbrotConfigError::ZeroMaxSloppiness);
        }

        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(MandelbrotConfigError::NonPositiveZoom { zoom: self.zoom });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.max_sloppiness, 8);
        assert_eq!(config.zoom, 200.0);
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.validate(), Err(MandelbrotConfigError::ZeroMaxIterations));
    }

    #[test]
    fn zero_sloppiness_is_rejected() {
        let config = MandelbrotConfig {
            max_sloppiness: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.validate(), Err(MandelbrotConfigError::ZeroMaxSloppiness));
    }

    #[test]
    fn non_positive_zoom_is_rejected() {
        for zoom in [0.0, -1.0, f64::INFINITY] {
            let config = MandelbrotConfig {
                zoom,
                ..MandelbrotConfig::default()
            };

            assert_eq!(
                config.validate(),
                Err(MandelbrotConfigError::NonPositiveZoom { zoom })
            );
        }
    }
}
