//! Diagram rasterization: nearest-site assignment, site markers, caption.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::{metric::Metric, site::SiteField, DiagramError, Result};

/// Caption font size in pixels.
const FONT_SIZE: i32 = 15;

/// Knobs for one diagram generation.
#[derive(Debug, Clone, Copy)]
pub struct DiagramOptions {
    pub width: u32,
    pub height: u32,
    pub site_count: usize,
    /// Draw a black dot at every site position.
    pub draw_sites: bool,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            site_count: 20,
            draw_sites: true,
        }
    }
}

impl DiagramOptions {
    /// Reject configurations no diagram can be generated from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DiagramError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.site_count == 0 {
            return Err(DiagramError::NoSites);
        }
        Ok(())
    }
}

/// Assign every pixel the color of its metric-nearest site.
///
/// Pixels are visited in raster order (y outer, x inner) with the site
/// loop innermost, so a stateful metric consumes its random draws in a
/// fixed order. Both pixel and site coordinates are shifted by half the
/// image dimensions (truncating division) before the metric sees them;
/// ties go to the lowest site index.
pub fn rasterize(field: &SiteField, metric: &mut dyn Metric) -> RgbaImage {
    let mut image = RgbaImage::new(field.width, field.height);
    let half_w = field.width as i32 / 2;
    let half_h = field.height as i32 / 2;

    for y in 0..field.height {
        let pixel_y = y as i32 + half_h;
        for x in 0..field.width {
            let pixel_x = x as i32 + half_w;

            let mut smallest = f64::MAX;
            let mut closest = 0;
            for (i, site) in field.sites.iter().enumerate() {
                let site_x = site.x + half_w;
                let site_y = site.y + half_h;
                let distance = metric.distance(pixel_x, pixel_y, site_x, site_y);
                if distance < smallest {
                    smallest = distance;
                    closest = i;
                }
            }

            let [r, g, b] = field.colors[closest];
            image.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    image
}

/// Marker half-width. Bigger images get bigger dots, so sites stay visible
/// while zoomed out.
fn dot_radius(width: u32, height: u32) -> i32 {
    ((width as f64 * height as f64).sqrt() / 300.0).ceil() as i32
}

/// Stamp a black square over every site, at the raw (unshifted) site
/// coordinates, overwriting the cell colors underneath. The clip keeps
/// markers strictly inside the image; pixels on row or column zero are
/// skipped.
pub fn draw_site_markers(image: &mut RgbaImage, field: &SiteField) {
    let width = field.width as i32;
    let height = field.height as i32;
    let radius = dot_radius(field.width, field.height);

    for site in &field.sites {
        for x in site.x - radius..=site.x + radius {
            for y in site.y - radius..=site.y + radius {
                if x > 0 && x < width && y > 0 && y < height {
                    image.put_pixel(x as u32, y as u32, Rgba([0, 0, 0, 255]));
                }
            }
        }
    }
}

/// Write the three-line caption into the bottom-left corner.
pub fn draw_caption(image: &mut RgbaImage, site_count: usize, metric_name: &str, font: &FontVec) {
    let lines = [
        format!("Sites: {}", site_count),
        format!("Resolution: {}, {}", image.width(), image.height()),
        format!("Metric: {}", metric_name),
    ];

    let text_height = FONT_SIZE * lines.len() as i32;
    let top = image.height() as i32 - text_height;
    let scale = PxScale::from(FONT_SIZE as f32);

    for (i, line) in lines.iter().enumerate() {
        draw_text_mut(
            image,
            Rgba([0, 0, 0, 255]),
            0,
            top + i as i32 * FONT_SIZE,
            scale,
            font,
            line,
        );
    }
}

/// Generate one diagram and save it as a PNG at `path`.
///
/// Site placement is reseeded from `seed` on every call, so the same seed
/// lays out the same cells under every metric.
pub fn render(
    path: &Path,
    metric: &mut dyn Metric,
    seed: u64,
    font: &FontVec,
    options: &DiagramOptions,
) -> Result<()> {
    options.validate()?;
    let field = SiteField::random(options.site_count, options.width, options.height, seed)?;

    let mut image = rasterize(&field, metric);
    if options.draw_sites {
        draw_site_markers(&mut image, &field);
    }
    draw_caption(&mut image, field.len(), metric.name(), font);

    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{Euclidian, FuzzyEuclidian, Manhattan};
    use crate::site::Site;
    use crate::Rgb;

    fn field(width: u32, height: u32, sites: Vec<Site>, colors: Vec<Rgb>) -> SiteField {
        SiteField {
            width,
            height,
            sites,
            colors,
        }
    }

    #[test]
    fn manhattan_assignment_on_small_grid() {
        // 4x4 grid, half offsets (2, 2). Sites at (0, 0) and (3, 3) shift
        // to (2, 2) and (5, 5); a pixel (x, y) shifts to (x + 2, y + 2), so
        // its Manhattan distances are x + y and |x - 3| + |y - 3|.
        let red = [255, 0, 0];
        let blue = [0, 0, 255];
        let field = field(
            4,
            4,
            vec![Site { x: 0, y: 0 }, Site { x: 3, y: 3 }],
            vec![red, blue],
        );

        let image = rasterize(&field, &mut Manhattan);

        for y in 0..4i32 {
            for x in 0..4i32 {
                let to_first = x + y;
                let to_second = (x - 3).abs() + (y - 3).abs();
                let expected = if to_second < to_first { blue } else { red };
                let pixel = image.get_pixel(x as u32, y as u32);
                assert_eq!(
                    [pixel[0], pixel[1], pixel[2]],
                    expected,
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        // two sites at the same position: every pixel keeps the first color
        let field = field(
            3,
            3,
            vec![Site { x: 1, y: 1 }, Site { x: 1, y: 1 }],
            vec![[200, 200, 200], [130, 130, 130]],
        );

        let image = rasterize(&field, &mut Euclidian);

        for pixel in image.pixels() {
            assert_eq!([pixel[0], pixel[1], pixel[2]], [200, 200, 200]);
        }
    }

    #[test]
    fn dot_radius_scales_with_resolution() {
        assert_eq!(dot_radius(300, 300), 1);
        assert_eq!(dot_radius(500, 500), 2);
        assert_eq!(dot_radius(1, 1), 1);
    }

    #[test]
    fn markers_clip_at_the_zero_boundary() {
        // 300x300 gives radius 1, so a site at (1, 1) wants a 3x3 block;
        // the pixels on row 0 and column 0 stay untouched.
        let field = field(300, 300, vec![Site { x: 1, y: 1 }], vec![[255, 255, 255]]);

        let mut image = rasterize(&field, &mut Euclidian);
        draw_site_markers(&mut image, &field);

        for y in 0..3u32 {
            for x in 0..3u32 {
                let pixel = image.get_pixel(x, y);
                let expected = if x > 0 && y > 0 {
                    [0, 0, 0]
                } else {
                    [255, 255, 255]
                };
                assert_eq!(
                    [pixel[0], pixel[1], pixel[2]],
                    expected,
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn deterministic_metric_rasterizes_identically() {
        let field = SiteField::random(8, 64, 64, 99).unwrap();
        let a = rasterize(&field, &mut Manhattan);
        let b = rasterize(&field, &mut Manhattan);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn fuzzy_metric_rasterizes_differently() {
        let field = SiteField::random(8, 64, 64, 99).unwrap();
        let mut fuzzy = FuzzyEuclidian::with_seed(5);
        let a = rasterize(&field, &mut fuzzy);
        let b = rasterize(&field, &mut fuzzy);
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn validate_rejects_degenerate_options() {
        let zero_wide = DiagramOptions {
            width: 0,
            ..Default::default()
        };
        assert!(zero_wide.validate().is_err());

        let no_sites = DiagramOptions {
            site_count: 0,
            ..Default::default()
        };
        assert!(no_sites.validate().is_err());

        assert!(DiagramOptions::default().validate().is_ok());
    }
}
