//! Voronoi diagram driver
//!
//! Renders one diagram per distance metric, all sharing a single session
//! seed, into the configured output directory.
//!
//! ## Configuration
//!
//! Reads `vorometric.yaml` from the working directory (or the file named
//! by `VOROMETRIC_CONFIG`):
//!
//! ```yaml
//! output_dir: /tmp/voronoi/
//! font_path: /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
//! seed: 42          # optional; omitted -> random per run
//! width: 500        # optional
//! height: 500       # optional
//! site_count: 20    # optional
//! show_sites: true  # optional
//! ```
//!
//! There are no command-line arguments.

mod config;

use ab_glyph::FontVec;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use vorometric_core::{render, standard_metrics, DiagramOptions, FuzzyEuclidian};

use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    anyhow::ensure!(
        config.output_dir.is_dir(),
        "output directory {:?} does not exist",
        config.output_dir
    );

    let font_bytes = std::fs::read(&config.font_path)
        .with_context(|| format!("failed to read font file: {:?}", config.font_path))?;
    let font = FontVec::try_from_vec(font_bytes)
        .with_context(|| format!("failed to parse font file: {:?}", config.font_path))?;

    let options = DiagramOptions {
        width: config.width,
        height: config.height,
        site_count: config.site_count,
        draw_sites: config.show_sites,
    };
    options.validate()?;

    // one seed for the whole session: every metric gets the same site layout
    let seed = config.seed.unwrap_or_else(|| rand::random::<u32>() as u64);
    println!("Using seed: {}", seed);

    // the fuzziness source lives here for the whole run and is never
    // reseeded between renders
    let mut metrics = standard_metrics(FuzzyEuclidian::from_entropy());

    let progress = ProgressBar::new(metrics.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    for metric in &mut metrics {
        progress.set_message(metric.name());
        let path = config
            .output_dir
            .join(format!("{}_{}.png", seed, metric.name()));

        render(&path, metric.as_mut(), seed, &font, &options)
            .with_context(|| format!("failed to render {:?}", path))?;

        progress.println(format!("Saved an image to {:?}.", path));
        progress.inc(1);
    }
    progress.finish_with_message("done");

    Ok(())
}
