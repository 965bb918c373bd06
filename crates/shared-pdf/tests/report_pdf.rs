//! Round-trip tests: render a report, parse it back with lopdf, inspect text

use lopdf::content::Content;
use lopdf::Document;
use shared_pdf::{write_report, InspectionReport, ReportError};
use shared_types::{
    AgreementType, BusinessInfo, ChecklistEntry, ChecklistItem, ChecklistResult,
    ComplianceStatus,
};

fn result_with(questions: &[(&'static str, ComplianceStatus)]) -> ChecklistResult {
    ChecklistResult::new(
        questions
            .iter()
            .enumerate()
            .map(|(i, (question, status))| ChecklistEntry {
                position: i + 1,
                item: ChecklistItem {
                    question: *question,
                    agreement: AgreementType::Direct,
                },
                status: *status,
            })
            .collect(),
    )
}

/// Text shown on each page, one string per `Tj` operation
fn page_texts(bytes: &[u8]) -> Vec<Vec<String>> {
    let doc = Document::load_mem(bytes).expect("report should parse");
    doc.get_pages()
        .values()
        .map(|page_id| {
            let data = doc.get_page_content(*page_id).expect("page content");
            let content = Content::decode(&data).expect("content stream");
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| op.operands.first())
                .filter_map(|operand| operand.as_str().ok())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .collect()
        })
        .collect()
}

#[test]
fn report_contains_outline_and_numbered_results() {
    let business = BusinessInfo::sample();
    let result = result_with(&[
        ("Is the agreement in writing?", ComplianceStatus::Compliant),
        (
            "Are all payment terms clear and included?",
            ComplianceStatus::NonCompliant,
        ),
        (
            "Is a refund policy included for non-performance?",
            ComplianceStatus::NotApplicable,
        ),
    ]);

    let bytes = InspectionReport::new(&business, &result).to_pdf().unwrap();
    let pages = page_texts(&bytes);
    assert_eq!(pages.len(), 1);

    let text = &pages[0];
    for expected in [
        "Inspection Report - Castlebury Contracting",
        "Business Information:",
        "Category: Renovation Services",
        "Description: Providing renovation and remodeling services.",
        "Checklist Results:",
        "1. Is the agreement in writing?: Compliant",
        "2. Are all payment terms clear and included?: Non-Compliant",
        "3. Is a refund policy included for non-performance?: N/A",
        "Page 1 of 1",
    ] {
        assert!(
            text.iter().any(|line| line == expected),
            "missing line {:?} in {:?}",
            expected,
            text
        );
    }
}

#[test]
fn empty_result_still_renders_sections() {
    let business = BusinessInfo::new("Corner Shop", "", "");
    let bytes = InspectionReport::new(&business, &ChecklistResult::default())
        .to_pdf()
        .unwrap();
    let pages = page_texts(&bytes);

    assert_eq!(pages.len(), 1);
    assert!(pages[0].iter().any(|line| line == "Checklist Results:"));
    assert!(pages[0].iter().any(|line| line == "Category:"));
}

#[test]
fn long_checklist_paginates_with_footers() {
    let business = BusinessInfo::sample();
    let questions: Vec<(&'static str, ComplianceStatus)> = (0..90)
        .map(|_| ("Are cancellation terms clearly stated?", ComplianceStatus::Compliant))
        .collect();
    let result = result_with(&questions);

    let bytes = InspectionReport::new(&business, &result).to_pdf().unwrap();
    let pages = page_texts(&bytes);
    let page_count = pages.len();
    assert!(page_count >= 2, "expected pagination, got {page_count} page(s)");

    for (index, page) in pages.iter().enumerate() {
        let footer = format!("Page {} of {}", index + 1, page_count);
        assert!(page.iter().any(|line| *line == footer), "missing {footer}");
    }

    let numbered = pages
        .iter()
        .flatten()
        .filter(|line| line.ends_with(": Compliant"))
        .count();
    assert_eq!(numbered, 90);
    assert!(pages
        .last()
        .unwrap()
        .iter()
        .any(|line| line == "90. Are cancellation terms clearly stated?: Compliant"));
}

#[test]
fn long_description_wraps_instead_of_overflowing() {
    let description = "Providing renovation and remodeling services ".repeat(8);
    let business = BusinessInfo::new("Castlebury Contracting", "Renovation Services", description);
    let bytes = InspectionReport::new(&business, &ChecklistResult::default())
        .to_pdf()
        .unwrap();
    let pages = page_texts(&bytes);

    let description_lines: Vec<&String> = pages[0]
        .iter()
        .skip_while(|line| !line.starts_with("Description:"))
        .take_while(|line| *line != "Checklist Results:")
        .collect();
    assert!(description_lines.len() > 1);
}

#[test]
fn wide_business_name_wraps_the_title() {
    let name = "W".repeat(26);
    let business = BusinessInfo::new(name.clone(), "Renovation Services", "Bathrooms");
    let bytes = InspectionReport::new(&business, &ChecklistResult::default())
        .to_pdf()
        .unwrap();
    let pages = page_texts(&bytes);

    assert_eq!(pages[0][0], "Inspection Report -");
    let title_glyphs: usize = pages[0]
        .iter()
        .take_while(|line| *line != "Business Information:")
        .map(|line| line.matches('W').count())
        .sum();
    assert_eq!(title_glyphs, name.len());
    assert!(!pages[0].iter().any(|line| line.contains(&format!("- {}", name))));
}

#[test]
fn write_report_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combined_inspection_report.pdf");
    let business = BusinessInfo::sample();
    let result = result_with(&[("Is the agreement in writing?", ComplianceStatus::Compliant)]);

    write_report(&path, &business, &result).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(page_texts(&bytes).len(), 1);
}

#[test]
fn write_report_surfaces_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.pdf");
    let business = BusinessInfo::sample();

    let err = write_report(&path, &business, &ChecklistResult::default()).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}
