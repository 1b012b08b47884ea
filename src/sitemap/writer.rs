use crate::sitemap::builder::SitemapIndex;
use crate::sitemap::config::SitemapConfig;
use crate::sitemap::error::SitemapError;
use chrono::SecondsFormat;
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

/// Serializes sitemap indexes to XML and persists them to disk
pub struct SitemapWriter {
    /// Sitemap configuration
    config: SitemapConfig,
}

impl SitemapWriter {
    /// Create a new writer with the given configuration
    pub fn new(config: SitemapConfig) -> Self {
        Self { config }
    }

    /// Serialize the index into a pretty-printed XML document
    ///
    /// The output starts with an XML declaration, the root element carries
    /// the configured namespace, and every entry becomes a `<sitemap>`
    /// element with `<loc>` before `<lastmod>`. Output is deterministic for
    /// a given index.
    pub fn to_xml(&self, index: &SitemapIndex) -> Result<String, SitemapError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("sitemapindex");
        root.push_attribute(("xmlns", self.config.xmlns.as_str()));
        writer.write_event(Event::Start(root))?;

        for entry in &index.entries {
            writer.write_event(Event::Start(BytesStart::new("sitemap")))?;

            writer.write_event(Event::Start(BytesStart::new("loc")))?;
            writer.write_event(Event::Text(BytesText::new(&entry.loc)))?;
            writer.write_event(Event::End(BytesEnd::new("loc")))?;

            let lastmod = entry.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true);
            writer.write_event(Event::Start(BytesStart::new("lastmod")))?;
            writer.write_event(Event::Text(BytesText::new(&lastmod)))?;
            writer.write_event(Event::End(BytesEnd::new("lastmod")))?;

            writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;

        String::from_utf8(writer.into_inner())
            .map_err(|e| SitemapError::Serialize(format!("Output is not valid UTF-8: {}", e)))
    }

    /// Serialize and write the index to the given path
    ///
    /// Creates the file if absent and truncates it otherwise. On Unix the
    /// file ends up world-readable and owner-writable.
    pub fn save(&self, index: &SitemapIndex, path: &Path) -> Result<(), SitemapError> {
        let xml = self.to_xml(index)?;

        fs::write(path, xml)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o644))?;
        }

        info!(
            "Saved sitemap with {} entries to {}",
            index.len(),
            path.display()
        );

        Ok(())
    }

    /// Serialize and write the index to the configured default output path
    pub fn save_default(&self, index: &SitemapIndex) -> Result<(), SitemapError> {
        self.save(index, Path::new(&self.config.output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::builder::build_at;
    use crate::sitemap::config::defaults;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn writer() -> SitemapWriter {
        SitemapWriter::new(SitemapConfig::default())
    }

    fn three_page_index() -> SitemapIndex {
        build_at(
            vec![
                "https://example.com/page1",
                "https://example.com/page2",
                "https://example.com/page3",
            ],
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_to_xml_three_pages() {
        let xml = writer().to_xml(&three_page_index()).unwrap();

        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">
  <sitemap>
    <loc>https://example.com/page1</loc>
    <lastmod>2024-01-01T12:00:00Z</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://example.com/page2</loc>
    <lastmod>2024-01-01T12:00:00Z</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://example.com/page3</loc>
    <lastmod>2024-01-01T12:00:00Z</lastmod>
  </sitemap>
</sitemapindex>";

        assert_eq!(xml, expected);
    }

    #[test]
    fn test_to_xml_empty_index() {
        let xml = writer().to_xml(&SitemapIndex { entries: vec![] }).unwrap();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<sitemapindex xmlns="{}">"#, defaults::XMLNS)));
        assert!(xml.contains("</sitemapindex>"));
        assert!(!xml.contains("<sitemap>"));
    }

    #[test]
    fn test_to_xml_declaration_first_line() {
        let xml = writer().to_xml(&three_page_index()).unwrap();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<sitemapindex"));
        assert_eq!(*lines.last().unwrap(), "</sitemapindex>");
    }

    #[test]
    fn test_to_xml_loc_before_lastmod() {
        let xml = writer().to_xml(&three_page_index()).unwrap();

        let loc = xml.find("<loc>").unwrap();
        let lastmod = xml.find("<lastmod>").unwrap();
        assert!(loc < lastmod);
    }

    #[test]
    fn test_to_xml_escapes_special_chars() {
        let index = build_at(
            vec!["https://example.com/search?q=a&b=c"],
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        );
        let xml = writer().to_xml(&index).unwrap();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_to_xml_empty_namespace() {
        let config = SitemapConfig::builder().xmlns("").build();
        let xml = SitemapWriter::new(config)
            .to_xml(&SitemapIndex { entries: vec![] })
            .unwrap();

        assert!(xml.contains(r#"<sitemapindex xmlns="">"#));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.xml");

        writer().save(&three_page_index(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert_eq!(content.matches("<sitemap>").count(), 3);
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.xml");
        std::fs::write(&path, "stale content that must disappear").unwrap();

        writer().save(&three_page_index(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
        assert!(content.starts_with("<?xml"));
    }

    #[test]
    fn test_save_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("sitemap.xml");

        let result = writer().save(&three_page_index(), &path);

        assert!(matches!(result, Err(SitemapError::Io(_))));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_world_readable_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.xml");

        writer().save(&three_page_index(), &path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_save_default_uses_configured_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.xml");
        let config = SitemapConfig::builder()
            .output_path(path.to_str().unwrap())
            .build();

        SitemapWriter::new(config)
            .save_default(&three_page_index())
            .unwrap();

        assert!(path.exists());
    }
}
