use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use gpx::Waypoint;

use crate::error::{Result, TrackError};
use crate::models::Fix;

/// Parses a GPX document and yields its track points as fixes, in document
/// order across all tracks and segments.
///
/// Structural problems (bad XML, missing coordinates, malformed timestamps)
/// fail here; a point without a timestamp fails when it is reached.
pub fn read_fixes<R: Read>(reader: R) -> Result<impl Iterator<Item = Result<Fix>>> {
    let doc = gpx::read(reader)?;
    let fixes = doc
        .tracks
        .into_iter()
        .flat_map(|track| track.segments)
        .flat_map(|segment| segment.points)
        .enumerate()
        .map(|(idx, wpt)| waypoint_to_fix(idx, wpt));
    Ok(fixes)
}

pub fn open_fixes(path: impl AsRef<Path>) -> Result<impl Iterator<Item = Result<Fix>>> {
    let file = File::open(path.as_ref())?;
    read_fixes(BufReader::new(file))
}

fn waypoint_to_fix(idx: usize, wpt: Waypoint) -> Result<Fix> {
    let pos = wpt.point();
    let stamp = wpt
        .time
        .ok_or_else(|| TrackError::Decode(format!("track point #{idx} has no time")))?;
    let stamp = to_utc(stamp.into()).ok_or_else(|| {
        TrackError::Decode(format!("track point #{idx} has an out of range time"))
    })?;
    Ok(Fix::new(pos.y(), pos.x(), stamp))
}

fn to_utc(t: time::OffsetDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(t.unix_timestamp(), t.nanosecond())
}
