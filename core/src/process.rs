use std::io::Read;
use std::path::Path;

use crate::config::TrackConfig;
use crate::error::{Result, TrackError};
use crate::gpx_reader::{open_fixes, read_fixes};
use crate::ingest::ingest;
use crate::metrics;
use crate::models::{Fix, Track};
use crate::smoothing::smooth_track;

/// Cleans and smooths a sequence of fixes into an exportable track.
///
/// A decode error anywhere aborts the whole track; an empty result is an error
/// since there is nothing to key or draw.
pub fn clean_track<I>(fixes: I, cfg: &TrackConfig) -> Result<Track>
where
    I: IntoIterator<Item = Result<Fix>>,
{
    let mut track = ingest(fixes, cfg)?;
    if track.is_empty() {
        return Err(TrackError::EmptyTrack);
    }
    smooth_track(&mut track, cfg);
    metrics::record_track();
    Ok(track)
}

pub fn process_reader<R: Read>(reader: R, cfg: &TrackConfig) -> Result<Track> {
    clean_track(read_fixes(reader)?, cfg)
}

pub fn process_file(path: impl AsRef<Path>, cfg: &TrackConfig) -> Result<Track> {
    let path = path.as_ref();
    let track = clean_track(open_fixes(path)?, cfg)?;
    log::debug!("{}: {} points after cleaning", path.display(), track.len());
    Ok(track)
}
