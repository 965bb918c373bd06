//! Inspection report PDF
//!
//! The report carries a title, a "Business Information" section and a
//! numbered "Checklist Results" section, followed by a footer on every page.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use shared_types::{BusinessInfo, ChecklistResult};
use tracing::info;

use crate::error::ReportError;
use crate::fonts;
use crate::layout::{paginate, Block, PlacedLine, TextStyle, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Report for one submitted inspection
#[derive(Debug, Clone)]
pub struct InspectionReport<'a> {
    business: &'a BusinessInfo,
    result: &'a ChecklistResult,
    generated_at: DateTime<Utc>,
}

impl<'a> InspectionReport<'a> {
    pub fn new(business: &'a BusinessInfo, result: &'a ChecklistResult) -> Self {
        Self {
            business,
            result,
            generated_at: Utc::now(),
        }
    }

    /// Override the timestamp printed in the footer
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn title(&self) -> String {
        format!("Inspection Report - {}", self.business.name)
    }

    /// Document content in reading order
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = vec![
            Block::text(TextStyle::Title, self.title()),
            Block::Spacer(20.0),
            Block::text(TextStyle::Heading, "Business Information:"),
            Block::text(
                TextStyle::Body,
                format!("Category: {}", self.business.category),
            ),
            Block::text(
                TextStyle::Body,
                format!("Description: {}", self.business.description),
            ),
            Block::Spacer(20.0),
            Block::text(TextStyle::Heading, "Checklist Results:"),
        ];

        blocks.extend(self.result.iter().map(|entry| {
            Block::text(
                TextStyle::Body,
                format!("{}. {}: {}", entry.position, entry.item, entry.status),
            )
        }));

        blocks
    }

    /// Render the report to PDF bytes
    pub fn to_pdf(&self) -> Result<Vec<u8>, ReportError> {
        let pages = paginate(&self.blocks());
        let page_count = pages.len();
        let footer_text = format!(
            "Generated {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources = font_resources(&mut doc);
        let resources_id = doc.add_object(resources);

        let mut page_ids = Vec::with_capacity(page_count);
        for (index, lines) in pages.iter().enumerate() {
            let mut operations = Vec::new();
            for line in lines {
                operations.extend(text_operations(line));
            }
            operations.extend(footer_operations(
                &footer_text,
                &format!("Page {} of {}", index + 1, page_count),
            ));

            let content = Content { operations };
            let encoded = content.encode().map_err(|e| {
                ReportError::Render(format!("Failed to encode page {}: {}", index + 1, e))
            })?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        points(PAGE_WIDTH),
                        points(PAGE_HEIGHT),
                    ]),
                ),
                ("Resources", Object::Reference(resources_id)),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(page_count as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let info_id = doc.add_object(Dictionary::from_iter(vec![
            ("Title", pdf_string(&self.title())),
            ("Producer", pdf_string("inspector")),
        ]));
        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc.trailer.set("Info", Object::Reference(info_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ReportError::Render(format!("Failed to save PDF: {}", e)))?;

        Ok(buffer)
    }

    /// Render and write the report to `path`. The write is not atomic.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let bytes = self.to_pdf()?;
        fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote inspection report");
        Ok(())
    }
}

/// Render a report with the current time in the footer
pub fn render_report(
    business: &BusinessInfo,
    result: &ChecklistResult,
) -> Result<Vec<u8>, ReportError> {
    InspectionReport::new(business, result).to_pdf()
}

/// Render a report and write it to `path`
pub fn write_report(
    path: impl AsRef<Path>,
    business: &BusinessInfo,
    result: &ChecklistResult,
) -> Result<(), ReportError> {
    InspectionReport::new(business, result).write_to(path)
}

fn font_resources(doc: &mut Document) -> Dictionary {
    let regular = doc.add_object(standard_font("Helvetica"));
    let bold = doc.add_object(standard_font("Helvetica-Bold"));

    let fonts = Dictionary::from_iter(vec![
        (REGULAR_FONT, Object::Reference(regular)),
        (BOLD_FONT, Object::Reference(bold)),
    ]);
    Dictionary::from_iter(vec![("Font", Object::Dictionary(fonts))])
}

fn standard_font(base_font: &str) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(base_font.as_bytes().to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ])
}

fn text_operations(line: &PlacedLine) -> Vec<Operation> {
    place_text(line.style, line.x, line.y, &line.text)
}

fn footer_operations(left: &str, right: &str) -> Vec<Operation> {
    let style = TextStyle::Footer;
    let y = MARGIN / 2.0;
    let right_width = style.text_width(right);

    let mut operations = place_text(style, MARGIN, y, left);
    operations.extend(place_text(style, PAGE_WIDTH - MARGIN - right_width, y, right));
    operations
}

fn place_text(style: TextStyle, x: f32, y: f32, text: &str) -> Vec<Operation> {
    let font = if style.is_bold() { BOLD_FONT } else { REGULAR_FONT };
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(font.as_bytes().to_vec()),
                points(style.font_size()),
            ],
        ),
        Operation::new("Td", vec![points(x), points(y)]),
        Operation::new("Tj", vec![pdf_string(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Whole-point PDF number
fn points(value: f32) -> Object {
    Object::Integer(value.round() as i64)
}

fn pdf_string(text: &str) -> Object {
    Object::String(fonts::encode(text), StringFormat::Literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use shared_types::{AgreementType, ChecklistEntry, ChecklistItem, ComplianceStatus};

    fn sample_result(count: usize) -> ChecklistResult {
        let entries = (1..=count)
            .map(|position| ChecklistEntry {
                position,
                item: ChecklistItem {
                    question: "Is the agreement in writing?",
                    agreement: AgreementType::Direct,
                },
                status: ComplianceStatus::Compliant,
            })
            .collect();
        ChecklistResult::new(entries)
    }

    #[test]
    fn test_blocks_follow_report_outline() {
        let business = BusinessInfo::sample();
        let result = sample_result(2);
        let report = InspectionReport::new(&business, &result);

        let texts: Vec<String> = report
            .blocks()
            .into_iter()
            .filter_map(|block| match block {
                Block::Text { text, .. } => Some(text),
                Block::Spacer(_) => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                "Inspection Report - Castlebury Contracting",
                "Business Information:",
                "Category: Renovation Services",
                "Description: Providing renovation and remodeling services.",
                "Checklist Results:",
                "1. Is the agreement in writing?: Compliant",
                "2. Is the agreement in writing?: Compliant",
            ]
        );
    }

    #[test]
    fn test_pdf_starts_with_header() {
        let business = BusinessInfo::sample();
        let result = sample_result(3);
        let bytes = render_report(&business, &result).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn test_pdf_string_uses_win_ansi_bytes() {
        match pdf_string("Caf\u{e9} \u{2019}ok\u{2019} \u{1F600}") {
            Object::String(bytes, _) => assert_eq!(bytes, b"Caf\xe9 \x92ok\x92 ?".to_vec()),
            other => panic!("expected string object, got {:?}", other),
        }
    }

    #[test]
    fn test_footer_uses_supplied_timestamp() {
        let business = BusinessInfo::sample();
        let result = sample_result(1);
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let report = InspectionReport::new(&business, &result).with_timestamp(timestamp);

        let bytes = report.to_pdf().unwrap();
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(haystack.contains("Generated 2024-03-01 09:30 UTC"));
    }
}
