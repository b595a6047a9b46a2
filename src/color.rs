/*
 * Color Module
 *
 * Maps a wavelength in nanometers to an approximate RGB color, piecewise
 * linear over six visible-spectrum bands. Wavelengths outside 380-780 nm
 * render white.
 */

use nannou::prelude::*;

// RGB components on a 0-255 scale, kept in f32 for exact band arithmetic
pub fn wavelength_to_rgb(nm: f32) -> [f32; 3] {
    let (r, g, b) = if (380.0..440.0).contains(&nm) {
        (-(nm - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if (440.0..490.0).contains(&nm) {
        (0.0, (nm - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..510.0).contains(&nm) {
        (0.0, 1.0, -(nm - 510.0) / (510.0 - 490.0))
    } else if (510.0..580.0).contains(&nm) {
        ((nm - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..645.0).contains(&nm) {
        (1.0, -(nm - 645.0) / (645.0 - 580.0), 0.0)
    } else if (645.0..=780.0).contains(&nm) {
        (1.0, 0.0, 0.0)
    } else {
        // Outside the visible band (and non-finite input): white
        (1.0, 1.0, 1.0)
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

// Convenience wrapper for drawing
pub fn wavelength_to_color(nm: f32) -> Rgb<u8> {
    let [r, g, b] = wavelength_to_rgb(nm);
    rgb(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND_EDGES: [f32; 5] = [440.0, 490.0, 510.0, 580.0, 645.0];

    #[test]
    fn continuous_at_band_boundaries() {
        for edge in BAND_EDGES {
            let below = wavelength_to_rgb(edge - 1e-3);
            let at = wavelength_to_rgb(edge);
            for channel in 0..3 {
                let diff = (below[channel] - at[channel]).abs();
                assert!(
                    diff < 0.5,
                    "channel {} jumps by {} at {} nm",
                    channel,
                    diff,
                    edge
                );
            }
        }
    }

    #[test]
    fn outside_visible_band_is_white() {
        for nm in [100.0, 379.9, 780.1, 1000.0, f32::NAN] {
            assert_eq!(wavelength_to_rgb(nm), [255.0, 255.0, 255.0]);
        }
    }

    #[test]
    fn known_anchor_colors() {
        // Deep red end of the band
        assert_eq!(wavelength_to_rgb(700.0), [255.0, 0.0, 0.0]);
        // Pure green at the 490-510 / 510-580 junction
        assert_eq!(wavelength_to_rgb(510.0), [0.0, 255.0, 0.0]);
        // Violet edge: the red ramp starts at full strength
        let [r, g, b] = wavelength_to_rgb(380.0);
        assert_eq!((g, b), (0.0, 255.0));
        assert!((r - 255.0).abs() < 1e-3);
    }

    #[test]
    fn default_wavelength_is_yellow_green() {
        let [r, g, b] = wavelength_to_rgb(550.0);
        assert!((r - 255.0 * 40.0 / 70.0).abs() < 1e-3);
        assert_eq!(g, 255.0);
        assert_eq!(b, 0.0);
        assert_eq!(wavelength_to_color(550.0).green, 255);
    }
}
