use crate::core::data::complex::Complex;
use crate::core::data::surface::Surface;
use crate::core::data::viewport::{ViewportError, ViewportState};

/// Span of the complex plane across the shorter surface side at zoom 1.0.
pub const BASE_SPAN: f64 = 4.0;

/// Complex-plane distance covered by one pixel.
#[must_use]
pub fn scale(viewport: &ViewportState, surface: Surface) -> f64 {
    BASE_SPAN / (viewport.zoom() * surface.min_side() as f64)
}

#[must_use]
pub fn pixel_to_complex(x: f64, y: f64, viewport: &ViewportState, surface: Surface) -> Complex {
    let scale = scale(viewport, surface);
    let (centre_x, centre_y) = surface.centre();
    let centre = viewport.centre();

    Complex {
        real: (x - centre_x) * scale + centre.real,
        imag: (y - centre_y) * scale + centre.imag,
    }
}

/// Inverse of [`pixel_to_complex`] for the same viewport and surface.
#[must_use]
pub fn complex_to_pixel(point: Complex, viewport: &ViewportState, surface: Surface) -> (f64, f64) {
    let scale = scale(viewport, surface);
    let (centre_x, centre_y) = surface.centre();
    let centre = viewport.centre();

    (
        (point.real - centre.real) / scale + centre_x,
        (point.imag - centre.imag) / scale + centre_y,
    )
}

/// Zooms by `factor` while keeping the complex point under pixel `(x, y)`
/// at that same pixel.
pub fn zoom_about_pixel(
    viewport: &ViewportState,
    surface: Surface,
    x: f64,
    y: f64,
    factor: f64,
) -> Result<ViewportState, ViewportError> {
    let target = pixel_to_complex(x, y, viewport, surface);

    let mut zoomed = *viewport;
    zoomed.scale_by(factor)?;

    let new_scale = scale(&zoomed, surface);
    let (centre_x, centre_y) = surface.centre();

    zoomed.set_centre(Complex {
        real: target.real - (x - centre_x) * new_scale,
        imag: target.imag - (y - centre_y) * new_scale,
    })?;

    Ok(zoomed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < TOLERANCE && (a.imag - b.imag).abs() < TOLERANCE,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_scale_uses_shorter_side() {
        let surface = Surface::new(800, 600).unwrap();
        let viewport = ViewportState::default();

        assert_eq!(scale(&viewport, surface), 4.0 / 600.0);

        let zoomed = ViewportState::new(2.0, Complex::ZERO).unwrap();
        assert_eq!(scale(&zoomed, surface), 4.0 / 1200.0);
    }

    #[test]
    fn test_centre_pixel_maps_to_viewport_centre() {
        let surface = Surface::new(800, 600).unwrap();
        let viewport = ViewportState::default();

        let c = pixel_to_complex(400.0, 300.0, &viewport, surface);

        assert_eq!(c, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_top_left_pixel_of_default_view() {
        let surface = Surface::new(800, 600).unwrap();
        let viewport = ViewportState::default();

        let c = pixel_to_complex(0.0, 0.0, &viewport, surface);

        assert_close(c, Complex::new(-0.5 - 400.0 * 4.0 / 600.0, -2.0));
    }

    #[test]
    fn test_round_trip_is_identity_for_every_pixel() {
        let surface = Surface::new(64, 48).unwrap();
        let viewport = ViewportState::new(37.5, Complex::new(-0.743643, 0.131825)).unwrap();

        for y in 0..surface.height() {
            for x in 0..surface.width() {
                let c = pixel_to_complex(x as f64, y as f64, &viewport, surface);
                let (px, py) = complex_to_pixel(c, &viewport, surface);

                assert!((px - x as f64).abs() < 1e-6, "x {} -> {}", x, px);
                assert!((py - y as f64).abs() < 1e-6, "y {} -> {}", y, py);
            }
        }
    }

    #[test]
    fn test_zoom_about_pixel_keeps_point_under_cursor() {
        let surface = Surface::new(800, 600).unwrap();
        let viewport = ViewportState::default();

        for &(x, y) in &[(0.0, 0.0), (123.0, 456.0), (799.0, 599.0), (400.0, 300.0)] {
            for &factor in &[1.2, 1.0 / 1.2] {
                let before = pixel_to_complex(x, y, &viewport, surface);
                let zoomed = zoom_about_pixel(&viewport, surface, x, y, factor).unwrap();
                let after = pixel_to_complex(x, y, &zoomed, surface);

                assert_close(before, after);
                assert!((zoomed.zoom() - viewport.zoom() * factor).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_repeated_zoom_about_pixel_stays_anchored() {
        let surface = Surface::new(800, 600).unwrap();
        let mut viewport = ViewportState::default();
        let anchor = pixel_to_complex(250.0, 180.0, &viewport, surface);

        for _ in 0..20 {
            viewport = zoom_about_pixel(&viewport, surface, 250.0, 180.0, 1.2).unwrap();
        }

        assert_close(pixel_to_complex(250.0, 180.0, &viewport, surface), anchor);
    }

    #[test]
    fn test_zoom_about_centre_pixel_keeps_centre() {
        let surface = Surface::new(800, 600).unwrap();
        let viewport = ViewportState::default();

        let zoomed = zoom_about_pixel(&viewport, surface, 400.0, 300.0, 1.2).unwrap();

        assert_close(zoomed.centre(), viewport.centre());
    }

    #[test]
    fn test_zoom_about_pixel_rejects_bad_factor() {
        let surface = Surface::new(800, 600).unwrap();
        let viewport = ViewportState::default();

        assert!(zoom_about_pixel(&viewport, surface, 10.0, 10.0, -1.2).is_err());
    }
}
