// src/pdf/mod.rs
use lopdf::Document;

use crate::utils::error::PdfError;

/// Extracts plain text from at most the first `page_limit` pages of a PDF
/// supplied as raw bytes. Each contributing page's text is followed by a
/// newline; pages with no extractable text contribute nothing.
///
/// Only document decoding can fail. A page whose content stream resists
/// text extraction is treated like a page with no text.
pub fn extract_document_text(bytes: &[u8], page_limit: usize) -> Result<String, PdfError> {
    let doc = Document::load_mem(bytes).map_err(|e| PdfError::MalformedInput(e.to_string()))?;

    let pages = doc.get_pages();
    let page_count = pages.len();
    tracing::debug!("Loaded PDF with {} pages (limit {})", page_count, page_limit);

    let mut text = String::new();
    for (page_no, _page_id) in pages.into_iter().take(page_limit) {
        let page_text = match doc.extract_text(&[page_no]) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("Text extraction failed on page {}: {}", page_no, e);
                continue;
            }
        };
        if page_text.trim().is_empty() {
            tracing::trace!("Page {} has no extractable text", page_no);
            continue;
        }
        text.push_str(&page_text);
        text.push('\n');
    }

    tracing::info!(
        "Extracted {} bytes of text from first {} of {} pages",
        text.len(),
        page_count.min(page_limit),
        page_count
    );
    Ok(text)
}

#[cfg(test)]
pub(crate) mod test_pdf {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds an in-memory PDF with one page of Helvetica text per entry.
    pub(crate) fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("Failed to encode page content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("Failed to save test PDF");
        bytes
    }
}
