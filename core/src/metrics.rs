use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{Result, TrackError};
use crate::ingest::Outcome;

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static FIXES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("cyclegpx_fixes_total", "GPS fixes seen by ingestion, by outcome"),
        &["outcome"],
    )
    .expect("valid fixes_total metric");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("fixes_total registered once");
    c
});

static TRACKS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new("cyclegpx_tracks_total", "Tracks cleaned and exported")
        .expect("valid tracks_total metric");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("tracks_total registered once");
    c
});

pub fn record_outcome(outcome: Outcome) {
    FIXES_TOTAL.with_label_values(&[outcome.as_str()]).inc();
}

pub fn fixes_with_outcome(outcome: Outcome) -> u64 {
    FIXES_TOTAL.with_label_values(&[outcome.as_str()]).get()
}

pub fn record_track() {
    TRACKS_TOTAL.inc();
}

pub fn tracks_total() -> u64 {
    TRACKS_TOTAL.get()
}

/// Prometheus text exposition of everything recorded so far.
pub fn gather_text() -> Result<String> {
    // touch the lazies so the families show up even when still zero
    Lazy::force(&FIXES_TOTAL);
    Lazy::force(&TRACKS_TOTAL);

    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buf)
        .map_err(|e| TrackError::Metrics(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| TrackError::Metrics(e.to_string()))
}
