use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackError};
use crate::models::{seconds_between, Track};

/// Key the viewer page uses for a track: Unix seconds of its first point.
pub fn track_key(track: &Track) -> Result<i64> {
    track
        .start_time()
        .map(|t| t.timestamp())
        .ok_or(TrackError::EmptyTrack)
}

pub fn output_file_name(track: &Track) -> Result<String> {
    Ok(format!("{}.js", track_key(track)?))
}

/// Writes the track as a script assignment consumed by the map viewer:
///
/// `tracks['<unix>']={"ll":[[lat,lon],..],"dt":[secs,..],"dd":[meters,..]}`
///
/// Coordinates carry 6 decimals, `dt` is whole seconds since the previous
/// point (0 for the first), `dd` the smoothed distance with 2 decimals.
pub fn write_track<W: Write>(w: &mut W, track: &Track) -> Result<()> {
    let key = track_key(track)?;
    let points = &track.points;

    write!(w, "tracks['{key}']={{")?;

    write!(w, "\"ll\":[")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        write!(w, "[{:.6},{:.6}]", p.lat, p.lon)?;
    }
    write!(w, "],")?;

    write!(w, "\"dt\":[")?;
    for (i, p) in points.iter().enumerate() {
        let dt = if i > 0 { seconds_between(points[i - 1].time, p.time) } else { 0.0 };
        if i > 0 {
            write!(w, ",")?;
        }
        write!(w, "{dt:.0}")?;
    }
    write!(w, "],")?;

    write!(w, "\"dd\":[")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        write!(w, "{:.2}", p.dist)?;
    }
    write!(w, "]}}")?;
    Ok(())
}

pub fn track_script(track: &Track) -> Result<String> {
    let mut buf = Vec::new();
    write_track(&mut buf, track)?;
    // only ASCII digits, punctuation and the key are ever written
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Creates `<dir>/<unix>.js` holding the track script and returns its path.
pub fn export_track(track: &Track, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(output_file_name(track)?);
    let mut w = BufWriter::new(File::create(&path)?);
    write_track(&mut w, track)?;
    w.flush()?;
    log::debug!("wrote {} points to {}", track.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_track_is_refused() {
        let mut buf = Vec::new();
        assert!(matches!(
            write_track(&mut buf, &Track::default()),
            Err(TrackError::EmptyTrack)
        ));
        assert!(buf.is_empty());
    }
}
