use anote_intake::application::ports::{TextExtractionError, TextExtractor};
use anote_intake::infrastructure::text_processing::PdfAdapter;

use crate::helpers::{build_pdf, pdf_text_stream};

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_joins_page_text_in_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.pdf");
    let first = pdf_text_stream("Revenue");
    let second = pdf_text_stream("Costs");
    tokio::fs::write(&path, build_pdf(&[&first, &second])).await.unwrap();

    let text = PdfAdapter::new().extract_text(&path).await.unwrap();

    let revenue = text.find("Revenue").expect("first page text");
    let costs = text.find("Costs").expect("second page text");
    assert!(revenue < costs);
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_empty_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("scan.pdf");
    tokio::fs::write(&path, build_pdf(&[""])).await.unwrap();

    let text = PdfAdapter::new().extract_text(&path).await.unwrap();

    assert_eq!(text, "");
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_returns_extraction_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    tokio::fs::write(&path, b"not a pdf at all").await.unwrap();

    let result = PdfAdapter::new().extract_text(&path).await;

    assert!(matches!(result, Err(TextExtractionError::ExtractionFailed(_))));
}
