//! Site placement and per-site cell colors.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{DiagramError, Result, Rgb};

/// A reference point owning one cell of the diagram, in image-pixel
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub x: i32,
    pub y: i32,
}

/// The sites and cell colors for one diagram, tagged with the resolution
/// they were placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteField {
    pub width: u32,
    pub height: u32,
    pub sites: Vec<Site>,
    pub colors: Vec<Rgb>,
}

impl SiteField {
    /// Place `site_count` sites uniformly in `width x height`, pairing each
    /// with a color whose channels fall in `[128, 256)`.
    ///
    /// All draws come from a single ChaCha8 stream seeded by `seed`, in the
    /// order x, y, r, g, b per site, so a fixed seed reproduces the field
    /// bit-for-bit. Reproducibility holds within this implementation only;
    /// a different PRNG lays out different sites for the same seed.
    pub fn random(site_count: usize, width: u32, height: u32, seed: u64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DiagramError::InvalidResolution { width, height });
        }
        if site_count == 0 {
            return Err(DiagramError::NoSites);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut sites = Vec::with_capacity(site_count);
        let mut colors = Vec::with_capacity(site_count);

        for _ in 0..site_count {
            let x = rng.gen_range(0..width) as i32;
            let y = rng.gen_range(0..height) as i32;
            sites.push(Site { x, y });

            // brighter colors look nicer, so channels stay in the top half
            let r = rng.gen_range(128..256) as u8;
            let g = rng.gen_range(128..256) as u8;
            let b = rng.gen_range(128..256) as u8;
            colors.push([r, g, b]);
        }

        Ok(SiteField {
            width,
            height,
            sites,
            colors,
        })
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
