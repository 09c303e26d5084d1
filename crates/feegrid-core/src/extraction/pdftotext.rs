use std::io::Write;
use std::process::Command;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeegridError;
use crate::extraction::{PageFragments, PdfExtractor, TextFragment, VerticalAxis};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// `pdftotext -bbox` emits one XHTML `<word>` element per word of the
/// text layer with its bounding box, which maps directly onto positioned
/// text fragments.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_fragments(&self, pdf_bytes: &[u8]) -> Result<Vec<PageFragments>, FeegridError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| FeegridError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| FeegridError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FeegridError::PdftotextNotFound
                } else {
                    FeegridError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FeegridError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_pages(&xml)?;
        log::debug!(
            "pdftotext: {} page(s), {} fragment(s)",
            pages.len(),
            pages.iter().map(|p| p.fragments.len()).sum::<usize>()
        );
        Ok(pages)
    }

    fn vertical_axis(&self) -> VerticalAxis {
        // poppler bbox coordinates grow downward from the top-left corner
        VerticalAxis::TopDown
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox` XHTML into per-page fragments.
///
/// Pages are numbered by order of appearance (the bbox output carries no
/// page numbers). Words with missing or unparsable coordinates are
/// skipped.
fn parse_bbox_pages(xml: &str) -> Result<Vec<PageFragments>, FeegridError> {
    let mut reader = Reader::from_str(xml);
    let mut pages: Vec<PageFragments> = Vec::new();
    let mut word_pos: Option<(f32, f32)> = None;
    let mut word_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"page" => {
                    pages.push(PageFragments {
                        page_number: pages.len() + 1,
                        fragments: Vec::new(),
                    });
                    word_pos = None;
                }
                b"word" => {
                    let mut x = None;
                    let mut y = None;
                    for attr in e.attributes().flatten() {
                        let value = attr
                            .unescape_value()
                            .map_err(|e| malformed(&e.to_string()))?;
                        match attr.key.as_ref() {
                            b"xMin" => x = value.parse::<f32>().ok(),
                            b"yMin" => y = value.parse::<f32>().ok(),
                            _ => {}
                        }
                    }
                    word_pos = x.zip(y);
                    word_text.clear();
                }
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if word_pos.is_some() {
                    let text = t.unescape().map_err(|e| malformed(&e.to_string()))?;
                    word_text.push_str(&text);
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"word" {
                    if let (Some((x, y)), Some(page)) = (word_pos.take(), pages.last_mut()) {
                        let text = word_text.trim();
                        if !text.is_empty() {
                            page.fragments.push(TextFragment {
                                text: text.to_string(),
                                x,
                                y,
                            });
                        }
                    }
                    word_text.clear();
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(&e.to_string())),
        }
    }

    Ok(pages)
}

fn malformed(detail: &str) -> FeegridError {
    FeegridError::Extraction(format!("malformed bbox output: {detail}"))
}
