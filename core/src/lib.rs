//! Cleaning and speed smoothing of GPS tracks for map overlays.
//!
//! Pipeline per file: [`gpx_reader`] decodes fixes, [`ingest`] drops
//! duplicates, jumps and out-of-order fixes, [`smoothing`] replaces each
//! point's step distance with a windowed average, and [`export`] writes the
//! script the viewer page loads.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod geodesy;
pub mod gpx_reader;
pub mod html;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod process;
pub mod smoothing;
pub mod summary;

pub use config::{load_config, save_config, TrackConfig};
pub use error::{Result, TrackError};
pub use export::{export_track, track_script, write_track};
pub use geodesy::distance;
pub use ingest::{ingest, ingest_fixes, IngestFilter, Outcome};
pub use models::{Fix, Point, Track};
pub use process::{clean_track, process_file, process_reader};
pub use smoothing::{smooth_track, smoothed_distances};
pub use summary::{summarize, TrackSummary};
