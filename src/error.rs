use std::io;

/// Errors raised while looking up, sampling or exporting colormaps.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown colormap `{0}`")]
    UnknownColormap(String),
    #[error("channel value {value} at position {position} is outside [0, 1]")]
    OutOfGamut { position: f64, value: f64 },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
