//! Print the samples of one colormap as lines of source code, e.g.
//! for `rainbow`:
//!
//! ```text
//! Color.makeRGB(127, 0, 255),  // Position 0.00
//! ```

use std::io::{Read, Write};
use rgb::RGB8;
use serde::Deserialize;
use crate::{export::SAMPLE_COUNT, sample, Channels, ColorRange, Error, Registry};

/// Colormap sampled when the configuration does not name one.
pub const DEFAULT_COLORMAP: &str = "magma";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    /// Which colormap to sample.
    pub colormap_name: String,
    /// Number of lines, at least 2.
    pub samples: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        SnippetConfig { colormap_name: DEFAULT_COLORMAP.to_string(),
                        samples: SAMPLE_COUNT }
    }
}

impl SnippetConfig {
    /// Read the configuration from JSON, e.g. `{"colormap_name":
    /// "viridis"}`.  Missing fields take their default value.
    pub fn from_reader(r: impl Read) -> Result<Self, Error> {
        let config: SnippetConfig = serde_json::from_reader(r)?;
        if config.samples < 2 {
            return Err(Error::Config(format!(
                "samples = {} but at least 2 are needed", config.samples)))
        }
        Ok(config)
    }
}

/// Format a sample as a line of code.
///
/// ```
/// use rgb::RGB8;
/// use colormap_sampler::snippet::format_line;
/// assert_eq!(format_line(RGB8::new(0, 255, 127), 0.),
///            "Color.makeRGB(0, 255, 127),  // Position 0.00");
/// ```
pub fn format_line(rgb: RGB8, position: f64) -> String {
    format!("Color.makeRGB({}, {}, {}),  // Position {:.2}",
            rgb.r, rgb.g, rgb.b, position)
}

/// Sample `colormap` and write one line per sample to `out`, each
/// line as soon as it is formatted.  Returns the lines.
pub fn write_snippet<R, W>(colormap: &R, samples: usize, out: &mut W)
                           -> Result<Vec<String>, Error>
where R: ColorRange<Channels> + ?Sized, W: Write + ?Sized {
    let set = sample(colormap, samples)?;
    let mut lines = Vec::with_capacity(set.len());
    for s in &set {
        let line = format_line(s.rgb, s.position);
        writeln!(out, "{line}")?;
        lines.push(line);
    }
    out.flush()?;
    Ok(lines)
}

/// Look up `config.colormap_name` in `registry` and write its lines
/// to `out`.  Every error is fatal: nothing is written if the
/// colormap is unknown or cannot be sampled.
pub fn export_snippet<R, W>(registry: &R, config: &SnippetConfig, out: &mut W)
                            -> Result<Vec<String>, Error>
where R: Registry + ?Sized, W: Write + ?Sized {
    let colormap = registry.get(&config.colormap_name)?;
    write_snippet(&colormap, config.samples, out)
}
