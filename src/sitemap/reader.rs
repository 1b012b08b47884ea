use crate::sitemap::builder::{SitemapEntry, SitemapIndex};
use crate::sitemap::error::SitemapError;
use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Which entry field is currently open
enum EntryField {
    Loc,
    Lastmod,
}

/// Parse sitemap-index XML back into an in-memory index
///
/// Walks `<sitemap>` elements and collects their `<loc>` and `<lastmod>`
/// children. `loc` text is captured verbatim, including empty and
/// whitespace-padded values. An entry without a `loc` or `lastmod`, or a
/// `lastmod` that is not RFC 3339, is an error.
pub fn parse(xml: &str) -> Result<SitemapIndex, SitemapError> {
    let mut reader = Reader::from_str(xml);

    let mut entries = Vec::new();
    let mut current_loc: Option<String> = None;
    let mut current_lastmod: Option<String> = None;
    let mut open_field: Option<EntryField> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"sitemap" => {
                    current_loc = None;
                    current_lastmod = None;
                }
                // An opened field starts out empty so <loc></loc> reads as ""
                b"loc" => {
                    current_loc = Some(String::new());
                    open_field = Some(EntryField::Loc);
                }
                b"lastmod" => {
                    current_lastmod = Some(String::new());
                    open_field = Some(EntryField::Lastmod);
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                // A childless entry has no loc at all
                b"sitemap" => {
                    entries.push(finish_entry(None, None)?);
                }
                b"loc" => current_loc = Some(String::new()),
                b"lastmod" => current_lastmod = Some(String::new()),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                let value = text.unescape()?;
                match open_field {
                    Some(EntryField::Loc) => {
                        if let Some(loc) = current_loc.as_mut() {
                            loc.push_str(&value);
                        }
                    }
                    Some(EntryField::Lastmod) => {
                        if let Some(lastmod) = current_lastmod.as_mut() {
                            lastmod.push_str(&value);
                        }
                    }
                    None => {}
                }
            }
            Ok(Event::End(ref e)) => {
                open_field = None;
                if e.name().as_ref() == b"sitemap" {
                    entries.push(finish_entry(current_loc.take(), current_lastmod.take())?);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(SitemapError::Xml(e)),
        }

        buf.clear();
    }

    Ok(SitemapIndex { entries })
}

fn finish_entry(
    loc: Option<String>,
    lastmod: Option<String>,
) -> Result<SitemapEntry, SitemapError> {
    let loc = loc.ok_or_else(|| SitemapError::MissingField("loc".to_string()))?;
    let lastmod = lastmod.ok_or_else(|| SitemapError::MissingField("lastmod".to_string()))?;

    // Only the timestamp is trimmed; loc stays verbatim
    let lastmod = lastmod.trim();
    let lastmod = DateTime::parse_from_rfc3339(lastmod)
        .map_err(|e| SitemapError::InvalidTimestamp(format!("{}: {}", lastmod, e)))?
        .with_timezone(&Utc);

    Ok(SitemapEntry { loc, lastmod })
}
