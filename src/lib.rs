//! Sample named colormaps at evenly spaced positions and export the
//! colors.
//!
//! - [`ColorRange`]: a “continuous” colormap parametrized by reals
//!   in \[0, 1\].
//! - [`Registry`]: where colormaps are found by name, [`Builtin`]
//!   being the default one.
//! - [`sample`]: evaluate a colormap at `n` positions and convert the
//!   channels to 8 bits.
//! - [`export`] writes every registered colormap to a JSON file and
//!   [`snippet`] prints one colormap as lines of source code.

use std::marker::PhantomData;
use rgb::RGBA;

mod palettes;
pub mod collection;
pub mod error;
pub mod export;
pub mod registry;
pub mod sample;
pub mod snippet;

pub use collection::PaletteCollection;
pub use error::Error;
pub use palettes::Palette;
pub use palettes::ty::PaletteType;
pub use registry::{Builtin, Registry};
pub use sample::{quantize, sample, Sample, SampleSet};

/// Color channels (red, green, blue, alpha) of a colormap evaluation,
/// each in \[0, 1\].
pub type Channels = RGBA<f64>;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b` but both must be finite.  The colors at the
    /// bounds are the ones at exactly `t = 0.` and `t = 1.`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGBA;
    /// use colormap_sampler::{ColorRange, from_fn};
    /// let gray = from_fn(|t| RGBA::new(t, t, t, 1.));
    /// let xs: Vec<f64> = gray.range(0., 1., 5).map(|(x, _)| x).collect();
    /// assert_eq!(xs, [0., 0.25, 0.5, 0.75, 1.]);
    /// ```
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<R, Color> ColorRange<Color> for &R
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { (**self).rgb(t) }
}

impl<R, Color> ColorRange<Color> for Box<R>
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { (**self).rgb(t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` (assuming it
    /// is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let x = (alpha * self.a + beta * self.b) / self.flast;
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// A colormap defined by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> { f: F }

/// Turn a closure `t ↦ color` into a [`ColorRange`].
pub fn from_fn<F, Color>(f: F) -> FromFn<F>
where F: Fn(f64) -> Color {
    FromFn { f }
}

impl<F, Color> ColorRange<Color> for FromFn<F>
where F: Fn(f64) -> Color {
    #[inline]
    fn rgb(&self, t: f64) -> Color { (self.f)(t) }
}

/// A colormap traversed from `t = 1.` down to `t = 0.`.
#[derive(Clone, Copy)]
pub struct Reversed<R>(pub R);

impl<R, Color> ColorRange<Color> for Reversed<R>
where R: ColorRange<Color> {
    #[inline]
    fn rgb(&self, t: f64) -> Color { self.0.rgb(1. - t) }
}

/// Hue wheel, going from red through yellow, green, cyan, blue and
/// magenta back to red.
#[derive(Clone, Copy, Debug)]
pub struct Hue;

impl ColorRange<Channels> for Hue {
    fn rgb(&self, t: f64) -> Channels {
        let t = 6. * t;
        let f = t.fract();
        let ti = t.trunc().rem_euclid(6.);
        if ti == 0.      { RGBA{ r: 1.,      g: f,      b: 0.,      a: 1. } }
        else if ti == 1. { RGBA{ r: 1. - f,  g: 1.,     b: 0.,      a: 1. } }
        else if ti == 2. { RGBA{ r: 0.,      g: 1.,     b: f,       a: 1. } }
        else if ti == 3. { RGBA{ r: 0.,      g: 1. - f, b: 1.,      a: 1. } }
        else if ti == 4. { RGBA{ r: f,       g: 0.,     b: 1.,      a: 1. } }
        else             { RGBA{ r: 1.,      g: 0.,     b: 1. - f,  a: 1. } }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_range() {
        for (i, (x, c)) in Hue.range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(Hue.rgb(x), c);
        }
    }

    #[test]
    fn hue_wraps_to_red() {
        assert_eq!(Hue.rgb(0.), RGBA::new(1., 0., 0., 1.));
        assert_eq!(Hue.rgb(1.), RGBA::new(1., 0., 0., 1.));
        assert_eq!(Hue.rgb(0.5), RGBA::new(0., 1., 1., 1.));
    }

    #[test]
    fn range_endpoints_are_exact() {
        let f = from_fn(|t| t);
        let v: Vec<_> = f.range(0., 1., 7).collect();
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], (0., 0.));
        assert_eq!(v[6], (1., 1.));
        assert!(v.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn range_with_other_bounds() {
        let v: Vec<_> = from_fn(|t| t).range(10., 20., 3).collect();
        assert_eq!(v, [(10., 0.), (15., 0.5), (20., 1.)]);
        let v: Vec<_> = from_fn(|t| t).range(1., -1., 5).collect();
        assert_eq!(v, [(1., 0.), (0.5, 0.25), (0., 0.5), (-0.5, 0.75), (-1., 1.)]);
    }

    #[test]
    fn range_len_and_back() {
        let mut r = from_fn(|t| t).range(0., 1., 4);
        assert_eq!(r.len(), 4);
        assert_eq!(r.next_back(), Some((1., 1.)));
        assert_eq!(r.next(), Some((0., 0.)));
        assert_eq!(r.len(), 2);
        assert_eq!(from_fn(|t| t).range(0., 1., 0).len(), 0);
    }

    #[test]
    fn reversed() {
        let r = Reversed(from_fn(|t| t));
        assert_eq!(r.rgb(0.), 1.);
        assert_eq!(r.rgb(1.), 0.);
        assert_eq!(r.rgb(0.25), 0.75);
    }
}
