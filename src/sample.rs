//! Evaluation of a colormap at evenly spaced positions.

use rgb::RGB8;
use crate::{Channels, ColorRange, Error};

/// One evaluation of a colormap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Normalized position `i / (n - 1)` the colormap was evaluated at.
    pub position: f64,
    pub rgb: RGB8,
}

/// The samples of a colormap, ordered by increasing position from
/// `0.` to `1.` (both included).
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }

    /// The colors alone, in position order.
    pub fn colors(&self) -> Vec<RGB8> {
        self.samples.iter().map(|s| s.rgb).collect()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

/// Convert channels in \[0, 1\] to 8 bits by multiplying by 255 and
/// truncating toward zero (`0.5` gives `127`).  Alpha is dropped.
///
/// # Example
///
/// ```
/// use rgb::{RGBA, RGB8};
/// use colormap_sampler::quantize;
/// assert_eq!(quantize(RGBA::new(1., 0.5, 1. / 3., 0.2)),
///            RGB8::new(255, 127, 85));
/// ```
#[inline]
pub fn quantize(c: Channels) -> RGB8 {
    RGB8 { r: (c.r * 255.) as u8,  g: (c.g * 255.) as u8,  b: (c.b * 255.) as u8 }
}

fn check(position: f64, c: Channels) -> Result<Channels, Error> {
    for value in [c.r, c.g, c.b] {
        if !(0. ..= 1.).contains(&value) {
            return Err(Error::OutOfGamut { position, value })
        }
    }
    Ok(c)
}

/// Evaluate `colormap` at the `n` positions `i / (n - 1)`,
/// `i = 0, …, n - 1`, and convert each color to 8 bits with
/// [`quantize`].
///
/// A color channel outside \[0, 1\] (or NaN) breaks the colormap
/// contract and is reported as [`Error::OutOfGamut`].
///
/// # Panics
///
/// If `n < 2`: the positions are not defined.
///
/// # Example
///
/// ```
/// use rgb::{RGBA, RGB8};
/// use colormap_sampler::{from_fn, sample};
/// let gray = from_fn(|t| RGBA::new(t, t, t, 1.));
/// let s = sample(&gray, 4).unwrap();
/// assert_eq!(s.colors(), [RGB8::new(0, 0, 0), RGB8::new(85, 85, 85),
///                         RGB8::new(170, 170, 170), RGB8::new(255, 255, 255)]);
/// ```
pub fn sample<R>(colormap: &R, n: usize) -> Result<SampleSet, Error>
where R: ColorRange<Channels> + ?Sized {
    assert!(n >= 2, "colormap_sampler::sample: n = {n} < 2");
    let samples = colormap.range(0., 1., n)
        .map(|(position, c)| {
            let rgb = quantize(check(position, c)?);
            Ok(Sample { position, rgb })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(SampleSet { samples })
}
