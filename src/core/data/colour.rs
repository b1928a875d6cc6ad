#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> Colour {
        let h = self.hue.rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Colour {
            r: channel(r + m),
            g: channel(g + m),
            b: channel(b + m),
        }
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_at_half_lightness() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn zero_lightness_is_black_for_any_hue() {
        for hue in [0.0, 90.0, 180.0, 359.0, 360.0] {
            assert_eq!(Hsl::new(hue, 100.0, 0.0).to_rgb(), Colour::default());
        }
    }

    #[test]
    fn full_turn_wraps_to_red() {
        assert_eq!(
            Hsl::new(360.0, 100.0, 50.0).to_rgb(),
            Hsl::new(0.0, 100.0, 50.0).to_rgb()
        );
    }

    #[test]
    fn zero_saturation_is_grey() {
        let colour = Hsl::new(200.0, 0.0, 50.0).to_rgb();

        assert_eq!(colour.r, colour.g);
        assert_eq!(colour.g, colour.b);
        assert_eq!(colour.r, 128);
    }
}
