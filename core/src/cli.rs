use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueHint};

use crate::config::{load_config, TrackConfig};
use crate::error::TrackError;
use crate::export::{export_track, write_track};
use crate::html::splice_html;
use crate::process::process_file;
use crate::summary::summarize;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gpx2js",
    version,
    about = "Clean GPX tracks and export them as map viewer scripts",
    long_about = None
)]
pub struct Cli {
    /// Input GPX file or file pattern (e.g. `rides/*.gpx`)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: String,

    /// Directory for the generated `<unix>.js` files (`-` for stdout)
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub output: PathBuf,

    /// Viewer page whose route block should link every script in the output directory
    #[arg(short = 's', long = "site", value_hint = ValueHint::FilePath)]
    pub html: Option<PathBuf>,

    /// JSON file with filter/smoothing parameters
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print ingestion counters (Prometheus text format) to stderr when done
    #[arg(long, action = ArgAction::SetTrue)]
    pub metrics: bool,

    /// Verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

/// Files matching `pattern`, in the order the pattern expands them.
pub fn expand_inputs(pattern: &str) -> Result<Vec<PathBuf>, TrackError> {
    if pattern.trim().is_empty() {
        return Err(TrackError::Pattern("no input file given".to_string()));
    }
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        files.push(entry?);
    }
    Ok(files)
}

pub fn check_output_dir(dir: &Path) -> Result<(), TrackError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(TrackError::OutputNotDirectory(dir.to_path_buf()))
    }
}

/// Runs the whole conversion; progress lines go to `out`.
/// Returns the paths of the written scripts.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Vec<PathBuf>> {
    let files = expand_inputs(&cli.input).context("invalid input")?;
    if !cli.to_stdout() {
        check_output_dir(&cli.output).context("invalid output")?;
    }
    if files.is_empty() {
        log::warn!("pattern '{}' matched no files", cli.input);
    }

    let cfg = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TrackConfig::default(),
    };

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        write!(out, "{}", file.display())?;
        let track = process_file(file, &cfg)
            .with_context(|| format!("processing {}", file.display()))?;

        let s = summarize(&track);
        log::info!(
            "{}: {} points, {:.1} km, {:.0} s, {:.2} km/h",
            file.display(),
            s.points,
            s.distance_m * 0.001,
            s.duration_s,
            s.avg_speed_kmh
        );

        if cli.to_stdout() {
            writeln!(out)?;
            write_track(out, &track)?;
            writeln!(out)?;
        } else {
            let path = export_track(&track, &cli.output)
                .with_context(|| format!("exporting {}", file.display()))?;
            writeln!(out, " -> {}", path.display())?;
            written.push(path);
        }
    }

    if let Some(html) = &cli.html {
        if cli.to_stdout() {
            bail!("cannot update {} when writing tracks to stdout", html.display());
        }
        splice_html(html, &cli.output)
            .with_context(|| format!("updating {}", html.display()))?;
    }

    Ok(written)
}
