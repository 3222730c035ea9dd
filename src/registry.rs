//! Colormaps looked up by name.

use colorgrad::Gradient;
use lazy_static::lazy_static;
use rgb::RGBA;
use crate::{Channels, ColorRange, Error, Hue, Reversed};
use crate::palettes::{self, Palette, Rainbow};

/// A colormap as returned by a [`Registry`].
pub type BoxedColormap<'a> = Box<dyn ColorRange<Channels> + 'a>;

/// A collection of named colormaps.
pub trait Registry {
    /// All the names that can be looked up, in enumeration order.
    fn names(&self) -> Vec<String>;

    /// Return the colormap registered under `name`.
    fn get(&self, name: &str) -> Result<BoxedColormap<'_>, Error>;
}

/// Gradient presets of the `colorgrad` crate, under their matplotlib
/// names.
const PRESETS: [&str; 35] = [
    "viridis", "plasma", "inferno", "magma", "cividis", "turbo",
    "Greys", "Purples", "Blues", "Greens", "Oranges", "Reds",
    "YlOrBr", "YlOrRd", "OrRd", "PuRd", "RdPu", "BuPu",
    "GnBu", "PuBu", "YlGnBu", "PuBuGn", "BuGn", "YlGn",
    "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu",
    "RdYlBu", "RdYlGn", "Spectral",
    "sinebow", "cubehelix",
];

fn preset(name: &str) -> Option<Box<dyn Gradient>> {
    use colorgrad::preset::*;
    let g: Box<dyn Gradient> = match name {
        "viridis" => Box::new(viridis()),
        "plasma" => Box::new(plasma()),
        "inferno" => Box::new(inferno()),
        "magma" => Box::new(magma()),
        "cividis" => Box::new(cividis()),
        "turbo" => Box::new(turbo()),
        "Greys" => Box::new(greys()),
        "Purples" => Box::new(purples()),
        "Blues" => Box::new(blues()),
        "Greens" => Box::new(greens()),
        "Oranges" => Box::new(oranges()),
        "Reds" => Box::new(reds()),
        "YlOrBr" => Box::new(yl_or_br()),
        "YlOrRd" => Box::new(yl_or_rd()),
        "OrRd" => Box::new(or_rd()),
        "PuRd" => Box::new(pu_rd()),
        "RdPu" => Box::new(rd_pu()),
        "BuPu" => Box::new(bu_pu()),
        "GnBu" => Box::new(gn_bu()),
        "PuBu" => Box::new(pu_bu()),
        "YlGnBu" => Box::new(yl_gn_bu()),
        "PuBuGn" => Box::new(pu_bu_gn()),
        "BuGn" => Box::new(bu_gn()),
        "YlGn" => Box::new(yl_gn()),
        "PiYG" => Box::new(pi_yg()),
        "PRGn" => Box::new(pr_gn()),
        "BrBG" => Box::new(br_bg()),
        "PuOr" => Box::new(pu_or()),
        "RdGy" => Box::new(rd_gy()),
        "RdBu" => Box::new(rd_bu()),
        "RdYlBu" => Box::new(rd_yl_bu()),
        "RdYlGn" => Box::new(rd_yl_gn()),
        "Spectral" => Box::new(spectral()),
        "sinebow" => Box::new(sinebow()),
        "cubehelix" => Box::new(cubehelix_default()),
        _ => return None,
    };
    Some(g)
}

/// A `colorgrad` gradient seen as a colormap.  Its channels are
/// clamped to \[0, 1\].
struct Preset(Box<dyn Gradient>);

impl ColorRange<Channels> for Preset {
    fn rgb(&self, t: f64) -> Channels {
        let c = self.0.at(t as f32);
        let unit = |x: f32| (x as f64).clamp(0., 1.);
        RGBA{ r: unit(c.r), g: unit(c.g), b: unit(c.b), a: unit(c.a) }
    }
}

lazy_static! {
    /// Names of the base colormaps (no reversed variant), in
    /// enumeration order.
    static ref BASE_NAMES: Vec<&'static str> = {
        PRESETS.iter().copied()
            .chain(palettes::SEGMENT_PALETTES.iter().map(|p| p.name))
            .chain(palettes::LISTED_PALETTES.iter().map(|p| p.name))
            .chain(["rainbow", "hsv"])
            .collect()
    };
}

const REVERSED: &str = "_r";

/// The colormaps shipped with this crate: the `colorgrad` presets,
/// matplotlib's segment colormaps (`gray`, `bwr`, `seismic`, …), the
/// Brewer and Tableau qualitative sets, `rainbow` and `hsv`.  Every
/// colormap `name` also exists reversed as `name_r`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use colormap_sampler::{Builtin, Registry, sample};
/// let gray = Builtin.get("gray_r").unwrap();
/// let s = sample(&gray, 2).unwrap();
/// assert_eq!(s.colors(), [RGB8::new(255, 255, 255), RGB8::new(0, 0, 0)]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Builtin;

impl Builtin {
    /// Return the list-of-colors palette called `name`, if any.
    pub fn palette(&self, name: &str) -> Option<Palette> {
        palettes::SEGMENT_PALETTES.iter()
            .chain(palettes::LISTED_PALETTES.iter())
            .find(|p| p.name == name)
            .map(Palette::new)
    }

    fn base(&self, name: &str) -> Option<BoxedColormap<'static>> {
        match name {
            "hsv" => return Some(Box::new(Hue)),
            "rainbow" => return Some(Box::new(Rainbow)),
            _ => (),
        }
        if let Some(p) = self.palette(name) {
            return Some(Box::new(p))
        }
        preset(name).map(|g| Box::new(Preset(g)) as BoxedColormap<'static>)
    }
}

impl Registry for Builtin {
    fn names(&self) -> Vec<String> {
        let base = BASE_NAMES.iter().map(|n| n.to_string());
        let reversed = BASE_NAMES.iter().map(|n| format!("{n}{REVERSED}"));
        base.chain(reversed).collect()
    }

    fn get(&self, name: &str) -> Result<BoxedColormap<'_>, Error> {
        let found = match self.base(name) {
            Some(c) => Some(c),
            None => name.strip_suffix(REVERSED)
                .and_then(|base| self.base(base))
                .map(|c| Box::new(Reversed(c)) as BoxedColormap<'static>),
        };
        found.ok_or_else(|| Error::UnknownColormap(name.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::sample;

    #[test]
    fn every_name_resolves() {
        let names = Builtin.names();
        assert_eq!(names.len(), 2 * BASE_NAMES.len());
        for name in &names {
            let c = Builtin.get(name)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            sample(&c, 64).unwrap_or_else(|e| panic!("{name}: {e}"));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names = Builtin.names();
        let n = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), n);
    }

    #[test]
    fn reversed_variants_follow_bases() {
        let names = Builtin.names();
        let half = names.len() / 2;
        assert_eq!(names[0], "viridis");
        assert_eq!(names[half], "viridis_r");
        assert_eq!(names[half - 1], "hsv");
    }

    #[test]
    fn unknown_names() {
        for name in ["nope", "nope_r", "gray_r_r", ""] {
            match Builtin.get(name) {
                Err(Error::UnknownColormap(n)) => assert_eq!(n, name),
                Err(e) => panic!("{name}: unexpected error {e}"),
                Ok(_) => panic!("{name} should not exist"),
            }
        }
    }

    #[test]
    fn gray_matches_truncation() {
        let gray = Builtin.get("gray").unwrap();
        let s = sample(&gray, 4).unwrap();
        assert_eq!(s.colors(), [RGB8::new(0, 0, 0), RGB8::new(85, 85, 85),
                                RGB8::new(170, 170, 170),
                                RGB8::new(255, 255, 255)]);
    }

    #[test]
    fn rainbow_runs_violet_to_red() {
        let rainbow = Builtin.get("rainbow").unwrap();
        let s = sample(&rainbow, 64).unwrap().colors();
        assert_eq!(s[0], RGB8::new(127, 0, 255));
        assert_eq!(s[63], RGB8::new(255, 0, 0));
        let reversed = sample(&Builtin.get("rainbow_r").unwrap(), 64).unwrap();
        assert_eq!(reversed.colors()[0], RGB8::new(255, 0, 0));
    }

    #[test]
    fn preset_channels_in_unit_interval() {
        let viridis = Builtin.get("viridis").unwrap();
        for i in 0 ..= 100 {
            let c = viridis.rgb(i as f64 / 100.);
            for x in [c.r, c.g, c.b, c.a] {
                assert!((0. ..= 1.).contains(&x));
            }
        }
    }
}
