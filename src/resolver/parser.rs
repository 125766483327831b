//! Sitemap document parser
//!
//! Parses raw sitemap XML into a `SitemapDocument`. Index documents and
//! url-set documents are not distinguished by a type tag: every parse
//! result carries both an entry list and a child-sitemap list, and mixed or
//! malformed input yields the union of whatever was recognizable.

use crate::record::{SitemapDocument, UrlRecord};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Optional metadata fields recognized inside a `<url>` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Loc,
    LastMod,
    ChangeFreq,
    Priority,
    ImageLoc,
}

/// Accumulator for the `<url>` entry currently being read
#[derive(Default)]
struct PendingEntry {
    loc: Option<String>,
    lastmod: Option<String>,
    changefreq: Option<String>,
    priority: Option<f32>,
}

/// Parses raw XML text into a sitemap document
///
/// Extraction rules:
/// - `<sitemap><loc>` references are collected into `child_sitemaps`
/// - `<url>` entries require a non-empty `<loc>`; entries without one are
///   dropped. `<lastmod>` and `<changefreq>` are passed through verbatim;
///   a `<priority>` that fails numeric parsing or is non-finite is treated
///   as absent
/// - `<image:image><image:loc>` entries become `Image` records with no
///   priority/changefreq metadata
///
/// Malformed XML yields a document with `error` set and empty collections;
/// the resolution engine treats that identically to a fetch failure.
///
/// # Arguments
///
/// * `raw` - The raw document text
/// * `source_url` - The document's own address, recorded as provenance on
///   every extracted record
pub fn parse_document(raw: &str, source_url: &str) -> SitemapDocument {
    let mut reader = Reader::from_str(raw);
    reader.trim_text(true);

    let mut doc = SitemapDocument::new(source_url);
    let mut saw_sitemap_element = false;
    let mut in_sitemap_ref = false;
    let mut in_url = false;
    let mut in_image = false;
    let mut field: Option<Field> = None;
    let mut pending = PendingEntry::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"sitemapindex" | b"urlset" => saw_sitemap_element = true,
                b"sitemap" => {
                    saw_sitemap_element = true;
                    in_sitemap_ref = true;
                }
                b"url" => {
                    saw_sitemap_element = true;
                    in_url = true;
                    pending = PendingEntry::default();
                }
                b"image:image" => in_image = true,
                b"loc" => field = Some(Field::Loc),
                b"lastmod" => field = Some(Field::LastMod),
                b"changefreq" => field = Some(Field::ChangeFreq),
                b"priority" => field = Some(Field::Priority),
                b"image:loc" => field = Some(Field::ImageLoc),
                _ => {}
            },
            // Self-closing elements open and close in one event; they carry
            // no text and must not leave field or container context behind
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"sitemapindex" | b"urlset" | b"sitemap" | b"url" => saw_sitemap_element = true,
                _ => {}
            },
            Ok(Event::Text(ref t)) => {
                let text = match t.unescape() {
                    Ok(cow) => cow.trim().to_string(),
                    Err(e) => {
                        return SitemapDocument::failed(
                            source_url,
                            format!("XML parse error: {}", e),
                        )
                    }
                };
                record_text(
                    &mut doc,
                    &mut pending,
                    field,
                    in_sitemap_ref,
                    in_url,
                    in_image,
                    text,
                    source_url,
                );
            }
            Ok(Event::CData(ref t)) => {
                let text = String::from_utf8_lossy(t.as_ref()).trim().to_string();
                record_text(
                    &mut doc,
                    &mut pending,
                    field,
                    in_sitemap_ref,
                    in_url,
                    in_image,
                    text,
                    source_url,
                );
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"sitemap" => in_sitemap_ref = false,
                b"url" => {
                    if in_url {
                        if let Some(loc) = pending.loc.take().filter(|l| !l.is_empty()) {
                            doc.entries.push(UrlRecord {
                                url: loc,
                                last_modified: pending.lastmod.take(),
                                change_frequency: pending.changefreq.take(),
                                priority_hint: pending.priority.take(),
                                kind: crate::record::ResourceKind::Page,
                                source_sitemap: source_url.to_string(),
                            });
                        }
                    }
                    in_url = false;
                }
                b"image:image" => in_image = false,
                b"loc" | b"lastmod" | b"changefreq" | b"priority" | b"image:loc" => {
                    field = None;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return SitemapDocument::failed(source_url, format!("XML parse error: {}", e));
            }
        }
    }

    if !saw_sitemap_element && doc.entries.is_empty() && doc.child_sitemaps.is_empty() {
        return SitemapDocument::failed(source_url, "no recognizable sitemap elements");
    }

    doc
}

/// Routes one text value to the collection the current context selects
#[allow(clippy::too_many_arguments)]
fn record_text(
    doc: &mut SitemapDocument,
    pending: &mut PendingEntry,
    field: Option<Field>,
    in_sitemap_ref: bool,
    in_url: bool,
    in_image: bool,
    text: String,
    source_url: &str,
) {
    if text.is_empty() {
        return;
    }

    match field {
        Some(Field::Loc) if in_sitemap_ref => doc.child_sitemaps.push(text),
        Some(Field::Loc) if in_url => pending.loc = Some(text),
        Some(Field::LastMod) if in_url => pending.lastmod = Some(text),
        Some(Field::ChangeFreq) if in_url => pending.changefreq = Some(text),
        Some(Field::Priority) if in_url => {
            // "NaN" and "inf" parse as f32 but are not usable hints
            pending.priority = text.parse::<f32>().ok().filter(|p| p.is_finite());
        }
        Some(Field::ImageLoc) if in_image => {
            doc.entries.push(UrlRecord::image(text, source_url));
        }
        _ => {}
    }
}
