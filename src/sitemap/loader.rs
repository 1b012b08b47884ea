use crate::sitemap::error::SitemapError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load URLs from a file, one per line
///
/// Blank lines and lines starting with '#' are skipped. Order is preserved
/// and the strings are passed through without validation.
pub fn load_urls(path: &Path) -> Result<Vec<String>, SitemapError> {
    let file = File::open(path).map_err(|e| {
        SitemapError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("URL file not found: {} - {}", path.display(), e),
        ))
    })?;

    let reader = BufReader::new(file);
    let mut urls = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(SitemapError::Io)?;
        let trimmed = line.trim();

        // Skip empty lines and comments
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            urls.push(trimmed.to_string());
        }
    }

    Ok(urls)
}
