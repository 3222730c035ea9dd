//! Sample every colormap of a registry and write them to a JSON file.
//!
//! A colormap that cannot be looked up or sampled is skipped; it never
//! prevents the others from being exported.

use std::{fs::File,
          io::{BufWriter, Write},
          path::{Path, PathBuf}};
use log::{info, warn};
use crate::{sample, Error, PaletteCollection, Registry};

/// Number of samples taken from each colormap.
pub const SAMPLE_COUNT: usize = 64;

/// File written when none is specified.
pub const DEFAULT_OUTPUT: &str = "colormaps.json";

#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// File the collection is written to.  It is overwritten.
    pub output: PathBuf,
    /// Samples per colormap, at least 2.
    pub samples: usize,
    /// Write the colormaps in alphabetical order instead of the
    /// registry order.
    pub sort: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions { output: PathBuf::from(DEFAULT_OUTPUT),
                        samples: SAMPLE_COUNT,
                        sort: false }
    }
}

/// Outcome of sampling a whole registry.
#[derive(Debug)]
pub struct BatchReport {
    pub collection: PaletteCollection,
    /// Colormaps left out, with the reason.
    pub skipped: Vec<(String, Error)>,
    /// Number of names the registry enumerated.
    pub registered: usize,
}

impl BatchReport {
    /// Number of colormaps in the collection.
    pub fn saved(&self) -> usize { self.collection.len() }
}

/// Sample, with `samples` points, every colormap `registry` lists.
///
/// # Panics
///
/// If `samples < 2`.
pub fn collect_all<R>(registry: &R, samples: usize) -> BatchReport
where R: Registry + ?Sized {
    let names = registry.names();
    let registered = names.len();
    let mut collection = PaletteCollection::new();
    let mut skipped = Vec::new();
    for name in names {
        match registry.get(&name).and_then(|c| sample(&c, samples)) {
            Ok(set) => {
                info!("Added {name}");
                collection.insert(name, set.colors());
            }
            Err(e) => {
                warn!("Skipped {name}: {e}");
                skipped.push((name, e));
            }
        }
    }
    BatchReport { collection, skipped, registered }
}

/// Write `collection` to the file `path` (created or truncated).
pub fn write_collection(path: &Path, collection: &PaletteCollection)
                        -> Result<(), Error> {
    let mut fh = BufWriter::new(File::create(path)?);
    collection.to_writer(&mut fh)?;
    fh.flush()?;
    Ok(())
}

/// Sample every colormap of `registry` and write the result to
/// `options.output`.  Only a failure to write the file is an error.
/// Reporting how many colormaps were saved is left to the caller.
pub fn export_all<R>(registry: &R, options: &ExportOptions)
                     -> Result<BatchReport, Error>
where R: Registry + ?Sized {
    let mut report = collect_all(registry, options.samples);
    if options.sort {
        report.collection.sort_by_name();
    }
    write_collection(&options.output, &report.collection)?;
    Ok(report)
}
