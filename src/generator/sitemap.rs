//! Streaming sitemap serialization.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>blog/post.php</loc>
//!     <lastmod>2024-02-02T00:00:00+00:00</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! Entries are written as they arrive; only the entry in flight is held
//! in memory.

use crate::scan::MatchedFile;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{self, Write};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const CHANGEFREQ: &str = "daily";
pub const PRIORITY: &str = "0.5";

pub struct SitemapWriter<W: Write> {
    writer: Writer<W>,
    urls: usize,
}

impl<W: Write> SitemapWriter<W> {
    /// Write the XML declaration and open `<urlset>`.
    pub fn new(inner: W) -> io::Result<Self> {
        let mut writer = Writer::new_with_indent(inner, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
        ))?;
        Ok(Self { writer, urls: 0 })
    }

    /// Append one `<url>` entry.
    pub fn write_url(&mut self, file: &MatchedFile) -> io::Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new("url")))?;
        self.text_element("loc", &file.relative_path)?;
        self.text_element("lastmod", &file.last_modified)?;
        self.text_element("changefreq", CHANGEFREQ)?;
        self.text_element("priority", PRIORITY)?;
        self.writer.write_event(Event::End(BytesEnd::new("url")))?;
        self.urls += 1;
        Ok(())
    }

    fn text_element(&mut self, name: &str, text: &str) -> io::Result<()> {
        self.writer
            .create_element(name)
            .write_text_content(BytesText::new(text))?;
        Ok(())
    }

    /// Close `<urlset>` and hand back the sink.
    pub fn finish(mut self) -> io::Result<(W, usize)> {
        self.writer.write_event(Event::End(BytesEnd::new("urlset")))?;
        let mut inner = self.writer.into_inner();
        inner.write_all(b"\n")?;
        Ok((inner, self.urls))
    }
}
