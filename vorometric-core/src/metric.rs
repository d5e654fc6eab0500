//! Distance metrics for nearest-site assignment.
//!
//! Each metric pairs a display name (used in captions and output file
//! names) with a distance function over two integer points. The four
//! classic metrics are stateless; [`FuzzyEuclidian`] owns an independent
//! random source so its noise is decoupled from site placement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A distance function over two points in image-pixel space.
///
/// `distance` must be total over all integer inputs. It takes `&mut self`
/// so implementations may carry state (see [`FuzzyEuclidian`]); the pure
/// metrics ignore the mutability.
pub trait Metric {
    /// Display name, used for the caption and the output file name.
    fn name(&self) -> &'static str;

    /// Distance from `(x1, y1)` to `(x2, y2)`.
    fn distance(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> f64;
}

/// Straight-line distance.
pub struct Euclidian;

fn euclidian(x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
    let dx = (x2 - x1) as f64;
    let dy = (y2 - y1) as f64;
    (dx * dx + dy * dy).sqrt()
}

impl Metric for Euclidian {
    fn name(&self) -> &'static str {
        "Euclidian"
    }

    fn distance(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
        euclidian(x1, y1, x2, y2)
    }
}

/// Taxicab distance.
pub struct Manhattan;

impl Metric for Manhattan {
    fn name(&self) -> &'static str {
        "Manhattan"
    }

    fn distance(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
        ((x2 - x1).abs() + (y2 - y1).abs()) as f64
    }
}

/// Minkowski distance with p = 3.
pub struct Minkowski;

impl Minkowski {
    const P: f64 = 3.0;
}

impl Metric for Minkowski {
    fn name(&self) -> &'static str {
        "Minkowski"
    }

    fn distance(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
        let dx = ((x2 - x1).abs() as f64).powf(Self::P);
        let dy = ((y2 - y1).abs() as f64).powf(Self::P);
        (dx + dy).powf(1.0 / Self::P)
    }
}

/// Canberra distance.
///
/// Either endpoint sitting exactly on the origin short-circuits to 1.0. A
/// single axis summing to zero off-origin still divides by zero and the
/// non-finite result propagates as-is.
pub struct Canberra;

impl Metric for Canberra {
    fn name(&self) -> &'static str {
        "Canberra"
    }

    fn distance(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
        if (x1 == 0 && y1 == 0) || (x2 == 0 && y2 == 0) {
            return 1.0;
        }
        let x_term = (x1 - x2).abs() as f64 / (x1.abs() + x2.abs()) as f64;
        let y_term = (y1 - y2).abs() as f64 / (y1.abs() + y2.abs()) as f64;
        x_term + y_term
    }
}

/// Pixel width of the fuzziness band. Exceeded where two sites are very
/// close to each other.
const FUZZINESS: f64 = 10.0;

/// Euclidian distance offset by uniform noise in `[0, FUZZINESS)`.
///
/// The noise source is seeded independently of site placement and never
/// reseeded, so two renders with the same site seed share a layout but not
/// a noise pattern.
pub struct FuzzyEuclidian {
    rng: ChaCha8Rng,
}

impl FuzzyEuclidian {
    /// Noise source drawn from OS entropy; what the driver uses.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Noise source with a fixed seed, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Metric for FuzzyEuclidian {
    fn name(&self) -> &'static str {
        "FuzzyEuclidian"
    }

    fn distance(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
        euclidian(x1, y1, x2, y2) + self.rng.gen::<f64>() * FUZZINESS
    }
}

/// The five metrics, in the order the driver renders them.
pub fn standard_metrics(fuzzy: FuzzyEuclidian) -> Vec<Box<dyn Metric>> {
    vec![
        Box::new(fuzzy),
        Box::new(Euclidian),
        Box::new(Minkowski),
        Box::new(Manhattan),
        Box::new(Canberra),
    ]
}
