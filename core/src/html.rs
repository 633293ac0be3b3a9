use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, TrackError};

pub const BEGIN_MARKER: &str = "<!-- begin of routers -->";
pub const END_MARKER: &str = "<!-- end of routers -->";

/// Splits a viewer page around its route block.
///
/// The first part runs up to and including the begin marker line, the second
/// starts at the end marker line. Whatever sat between them is dropped.
pub fn read_html(path: impl AsRef<Path>) -> Result<(Vec<String>, Vec<String>)> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut prev_lines = Vec::new();
    let mut post_lines = Vec::new();
    let mut in_block = false;
    let mut closed = false;

    for line in reader.lines() {
        let line = line?;
        if closed {
            post_lines.push(line);
        } else if in_block {
            if line.contains(END_MARKER) {
                post_lines.push(line);
                closed = true;
            }
        } else {
            in_block = line.contains(BEGIN_MARKER);
            prev_lines.push(line);
        }
    }

    if !closed {
        return Err(TrackError::HtmlMarkup(path.to_path_buf()));
    }
    Ok((prev_lines, post_lines))
}

/// Track scripts (`*.js`) in `dest`, sorted by name.
pub fn track_scripts(dest: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dest.as_ref())? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |e| e == "js") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Writes the page back with one script tag per track script in `dest`,
/// each referenced relative to `html_dir`.
pub fn write_html<W: Write>(
    w: &mut W,
    html_dir: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    prev_lines: &[String],
    post_lines: &[String],
) -> Result<usize> {
    let dest = dest.as_ref();
    let files = track_scripts(dest)?;
    if files.is_empty() {
        return Err(TrackError::NoTrackFiles(dest.to_path_buf()));
    }

    let base = fs::canonicalize(html_dir.as_ref())?;
    for line in prev_lines {
        writeln!(w, "{line}")?;
    }
    for file in &files {
        let rel = relative_url(&base, &fs::canonicalize(file)?);
        writeln!(w, "    <script src=\"{rel}\"></script>")?;
    }
    for line in post_lines {
        writeln!(w, "{line}")?;
    }
    Ok(files.len())
}

/// Rewrites `html` in place so its route block lists every script in `dest`.
/// The page is only overwritten once the new content is complete.
pub fn splice_html(html: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<usize> {
    let html = html.as_ref();
    let (prev_lines, post_lines) = read_html(html)?;
    let html_dir = match html.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut buf = Vec::new();
    let count = write_html(&mut buf, &html_dir, dest, &prev_lines, &post_lines)?;
    fs::write(html, buf)?;
    log::info!("{} now links {} track(s)", html.display(), count);
    Ok(count)
}

/// `target` relative to directory `base`, both absolute, joined with `/`.
fn relative_url(base: &Path, target: &Path) -> String {
    let base: Vec<Component> = base.components().collect();
    let target: Vec<Component> = target.components().collect();
    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..base.len() {
        parts.push("..".to_string());
    }
    for c in &target[common..] {
        parts.push(c.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_url_walks_up_and_down() {
        assert_eq!(
            relative_url(Path::new("/site/www"), Path::new("/site/www/1622728859.js")),
            "1622728859.js"
        );
        assert_eq!(
            relative_url(Path::new("/site/www"), Path::new("/site/data/1.js")),
            "../data/1.js"
        );
    }
}
