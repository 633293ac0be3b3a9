use crate::config::TrackConfig;
use crate::geodesy::distance;
use crate::metrics;
use crate::models::{seconds_between, Fix, Point, Track};

/// What happened to a fix offered to [`IngestFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    /// Same timestamp as the last kept point; the old point was dropped and
    /// the new fix kept in its slot.
    Replaced,
    /// Same position as the last kept point.
    Duplicate,
    /// Implied speed above the ceiling.
    Outlier,
    /// Earlier than the last kept point.
    OutOfOrder,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Accepted => "accepted",
            Outcome::Replaced => "replaced",
            Outcome::Duplicate => "duplicate",
            Outcome::Outlier => "outlier",
            Outcome::OutOfOrder => "out_of_order",
        }
    }

    pub fn is_kept(self) -> bool {
        matches!(self, Outcome::Accepted | Outcome::Replaced)
    }
}

/// Single-pass cleaner over raw fixes.
///
/// The only state consulted is the last accepted point (`points.last()`),
/// so a discarded fix never influences later decisions.
#[derive(Debug, Clone)]
pub struct IngestFilter {
    max_speed_ms: f64,
    points: Vec<Point>,
}

impl IngestFilter {
    pub fn new(cfg: &TrackConfig) -> Self {
        Self {
            max_speed_ms: cfg.max_speed_ms,
            points: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn offer(&mut self, fix: Fix) -> Outcome {
        let same_instant = self.points.last().map_or(false, |prev| prev.time == fix.time);
        let outcome = if same_instant {
            // last one wins; the new fix is then checked against what is left
            self.points.pop();
            match self.check(fix) {
                Outcome::Accepted => Outcome::Replaced,
                other => other,
            }
        } else {
            self.check(fix)
        };
        metrics::record_outcome(outcome);
        outcome
    }

    fn check(&mut self, fix: Fix) -> Outcome {
        let Some(prev) = self.points.last() else {
            self.points.push(Point::from_fix(fix, 0.0));
            return Outcome::Accepted;
        };

        let dt = seconds_between(prev.time, fix.time);
        if dt < 0.0 {
            return Outcome::OutOfOrder;
        }

        let d = distance(prev.lat, prev.lon, fix.lat, fix.lon);
        if d <= 0.0 {
            return Outcome::Duplicate;
        }
        if d / dt > self.max_speed_ms {
            return Outcome::Outlier;
        }

        self.points.push(Point::from_fix(fix, d));
        Outcome::Accepted
    }

    pub fn finish(self) -> Track {
        Track::new(self.points)
    }
}

/// Runs every fix through an [`IngestFilter`].
///
/// Stops at the first decode error; nothing accepted so far is returned then.
pub fn ingest<I, E>(fixes: I, cfg: &TrackConfig) -> std::result::Result<Track, E>
where
    I: IntoIterator<Item = std::result::Result<Fix, E>>,
{
    let mut filter = IngestFilter::new(cfg);
    let mut dropped = 0usize;
    for fix in fixes {
        if !filter.offer(fix?).is_kept() {
            dropped += 1;
        }
    }
    log::debug!("ingest: kept {} points, dropped {}", filter.len(), dropped);
    Ok(filter.finish())
}

/// Infallible convenience over [`ingest`] for in-memory fixes.
pub fn ingest_fixes(fixes: &[Fix], cfg: &TrackConfig) -> Track {
    let mut filter = IngestFilter::new(cfg);
    for fix in fixes {
        filter.offer(*fix);
    }
    filter.finish()
}
