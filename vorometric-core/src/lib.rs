//! Voronoi diagram generation under interchangeable distance metrics.
//!
//! Sites and cell colors come from a single seeded random stream; every
//! pixel is then assigned to its nearest site by brute force, with the
//! notion of "nearest" supplied as a [`Metric`] trait object.

mod diagram;
mod metric;
mod site;

pub use diagram::{draw_caption, draw_site_markers, rasterize, render, DiagramOptions};
pub use metric::{
    standard_metrics, Canberra, Euclidian, FuzzyEuclidian, Manhattan, Metric, Minkowski,
};
pub use site::{Site, SiteField};

/// RGB color tuple
pub type Rgb = [u8; 3];

/// Error type for diagram generation
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("site count must be at least 1")]
    NoSites,
}

pub type Result<T> = std::result::Result<T, DiagramError>;
