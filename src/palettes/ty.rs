pub(crate) use rgb::RGBA;

/// A colormap given by its list of colors.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2, channels in [0, 1]
    pub(crate) typ: PaletteType,
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Colors are linearly interpolated between
    /// evenly spaced stops.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range.
    /// Interpolated like [`PaletteType::Seq`].
    Div,
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between legend classes.  The colors are not
    /// interpolated: \[0, 1\] is split into as many equal bins as
    /// there are colors.
    Qual
}
