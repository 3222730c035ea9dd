// Colormaps defined by a short list of colors.  The segment palettes
// follow matplotlib's `_cm.py` definitions, the qualitative ones are
// the Brewer and Tableau sets.  Segments are evaluated exactly at `t`,
// without matplotlib's 256-entry lookup table.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;
use crate::{Channels, ColorRange};

fn hex(c: u32) -> RGBA<f64> {
    let r = (c >> 16) & 0xff;
    let g = (c >> 8) & 0xff;
    let b = c & 0xff;
    RGBA{ r: r as f64 / 255., g: g as f64 / 255., b: b as f64 / 255., a: 1. }
}

fn segments(name: &'static str, typ: PaletteType,
            stops: &[[f64; 3]]) -> PaletteData {
    PaletteData {
        name, typ,
        rgb: stops.iter().map(|&[r, g, b]| RGBA{ r, g, b, a: 1. }).collect(),
    }
}

fn listed(name: &'static str, colors: &[u32]) -> PaletteData {
    PaletteData { name, typ: PaletteType::Qual,
                  rgb: colors.iter().map(|&c| hex(c)).collect() }
}

lazy_static! {
    pub(crate) static ref SEGMENT_PALETTES: Vec<PaletteData> = {
        use PaletteType::*;
        vec![
            segments("gray", Seq, &[[0., 0., 0.], [1., 1., 1.]]),
            segments("binary", Seq, &[[1., 1., 1.], [0., 0., 0.]]),
            segments("bwr", Div, &[[0., 0., 1.], [1., 1., 1.], [1., 0., 0.]]),
            segments("seismic", Div, &[[0., 0., 0.3], [0., 0., 1.],
                                       [1., 1., 1.], [1., 0., 0.],
                                       [0.5, 0., 0.]]),
            segments("spring", Seq, &[[1., 0., 1.], [1., 1., 0.]]),
            segments("summer", Seq, &[[0., 0.5, 0.4], [1., 1., 0.4]]),
            segments("autumn", Seq, &[[1., 0., 0.], [1., 1., 0.]]),
            segments("winter", Seq, &[[0., 0., 1.], [0., 1., 0.5]]),
            segments("cool", Seq, &[[0., 1., 1.], [1., 0., 1.]]),
        ]
    };

    pub(crate) static ref LISTED_PALETTES: Vec<PaletteData> = vec![
        listed("Pastel1", &[0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6,
                            0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2]),
        listed("Pastel2", &[0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9,
                            0xfff2ae, 0xf1e2cc, 0xcccccc]),
        listed("Paired", &[0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99,
                           0xe31a1c, 0xfdbf6f, 0xff7f00, 0xcab2d6, 0x6a3d9a,
                           0xffff99, 0xb15928]),
        listed("Accent", &[0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0,
                           0xf0027f, 0xbf5b17, 0x666666]),
        listed("Dark2", &[0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e,
                          0xe6ab02, 0xa6761d, 0x666666]),
        listed("Set1", &[0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00,
                         0xffff33, 0xa65628, 0xf781bf, 0x999999]),
        listed("Set2", &[0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854,
                         0xffd92f, 0xe5c494, 0xb3b3b3]),
        listed("Set3", &[0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3,
                         0xfdb462, 0xb3de69, 0xfccde5, 0xd9d9d9, 0xbc80bd,
                         0xccebc5, 0xffed6f]),
        listed("tab10", &[0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
                          0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf]),
    ];
}

/// A colormap backed by a list of colors.
///
/// Sequential and diverging palettes interpolate linearly (in RGB)
/// between evenly spaced colors; qualitative palettes pick the color
/// of the bin `t` falls in.
#[derive(Clone, Copy)]
pub struct Palette {
    palette: &'static PaletteData,
}

impl Palette {
    pub(crate) fn new(palette: &'static PaletteData) -> Self {
        Self { palette }
    }

    /// The name the palette is registered under.
    pub fn name(&self) -> &'static str { self.palette.name }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Says whether the palette is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &'static [Channels] { &self.palette.rgb }
}

fn lerp(c0: f64, c1: f64, s: f64) -> f64 { (c0 + (c1 - c0) * s).clamp(0., 1.) }

impl ColorRange<Channels> for Palette {
    fn rgb(&self, t: f64) -> Channels {
        let rgb = &self.palette.rgb;
        let n = rgb.len();
        let t = t.clamp(0., 1.);
        match self.palette.typ {
            PaletteType::Qual => {
                let i = ((t * n as f64) as usize).min(n - 1);
                rgb[i]
            }
            PaletteType::Seq | PaletteType::Div => {
                let segments = n - 1;
                let tn = t * segments as f64;
                let i = tn.trunc() as usize;
                if i < segments {
                    let (c0, c1, s) = (rgb[i], rgb[i + 1], tn.fract());
                    RGBA{ r: lerp(c0.r, c1.r, s), g: lerp(c0.g, c1.g, s),
                          b: lerp(c0.b, c1.b, s), a: lerp(c0.a, c1.a, s) }
                } else {
                    rgb[segments]
                }
            }
        }
    }
}

/// Matplotlib's `rainbow`, from violet to red, given by the functions
/// `r = |2t - 1/2|`, `g = sin(πt)`, `b = cos(πt/2)` (clamped to
/// \[0, 1\]).
#[derive(Clone, Copy, Debug)]
pub struct Rainbow;

impl ColorRange<Channels> for Rainbow {
    fn rgb(&self, t: f64) -> Channels {
        use std::f64::consts::PI;
        let t = t.clamp(0., 1.);
        let unit = |x: f64| x.clamp(0., 1.);
        RGBA{ r: unit((2. * t - 0.5).abs()), g: unit((PI * t).sin()),
              b: unit((PI * t / 2.).cos()), a: 1. }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> Palette {
        SEGMENT_PALETTES.iter().chain(LISTED_PALETTES.iter())
            .find(|p| p.name == name).map(Palette::new).unwrap()
    }

    #[test]
    fn hex_colors() {
        assert_eq!(hex(0xff0000), RGBA::new(1., 0., 0., 1.));
        assert_eq!(hex(0x000000), RGBA::new(0., 0., 0., 1.));
    }

    #[test]
    fn gray_is_identity() {
        let gray = find("gray");
        for t in [0., 0.25, 1. / 3., 0.5, 1.] {
            assert_eq!(gray.rgb(t), RGBA::new(t, t, t, 1.));
        }
    }

    #[test]
    fn diverging_midpoint() {
        let bwr = find("bwr");
        assert_eq!(bwr.typ(), PaletteType::Div);
        assert_eq!(bwr.rgb(0.), RGBA::new(0., 0., 1., 1.));
        assert_eq!(bwr.rgb(0.5), RGBA::new(1., 1., 1., 1.));
        assert_eq!(bwr.rgb(1.), RGBA::new(1., 0., 0., 1.));
    }

    #[test]
    fn qualitative_bins() {
        let set1 = find("Set1");
        assert_eq!(set1.len(), 9);
        assert_eq!(set1.rgb(0.), hex(0xe41a1c));
        assert_eq!(set1.rgb(0.1), hex(0xe41a1c));
        assert_eq!(set1.rgb(0.2), set1.colors()[1]);
        assert_eq!(set1.rgb(0.5), hex(0xff7f00));
        assert_eq!(set1.rgb(1.), hex(0x999999));
    }

    #[test]
    fn rainbow_ends() {
        assert_eq!(Rainbow.rgb(0.), RGBA::new(0.5, 0., 1., 1.));
        let c = Rainbow.rgb(1.);
        assert_eq!(c.r, 1.);
        assert!(c.g.abs() < 1e-15 && c.b.abs() < 1e-15);
        let c = Rainbow.rgb(0.5);
        assert_eq!((c.r, c.g), (0.5, 1.));
    }

    #[test]
    fn segments_interpolate_exactly() {
        // No 256-entry lookup table: 32/63 gives 0.5079…, not 130/255.
        let gray = find("gray");
        let c = gray.rgb(32. / 63.);
        assert_eq!(c.r, 32. / 63.);
        assert_eq!((c.r * 255.) as u8, 129);
    }

    #[test]
    fn palettes_have_two_colors() {
        for p in SEGMENT_PALETTES.iter().chain(LISTED_PALETTES.iter()) {
            assert!(p.rgb.len() >= 2, "{}", p.name);
        }
    }
}
