use rabbittrail::services::url_rules::*;
use rabbittrail::types::content::ContentType;
use rabbittrail::types::errors::InjectorError;
use rstest::rstest;

const VIEWER_BASE: &str = "chrome-extension://abcdefghijklmnop/pdfjs/web/viewer.html";

// === URL classification ===

#[rstest]
#[case("file:///home/user/report.pdf", true)]
#[case("file:///C:/docs/notes.txt", true)]
#[case("https://example.com/report.pdf", false)]
#[case("ftp://example.com/report.pdf", false)]
fn file_url_detection(#[case] url: &str, #[case] expected: bool) {
    assert_eq!(is_file_url(url), expected);
}

#[rstest]
#[case("http://example.com/", true)]
#[case("https://example.com/article", true)]
#[case("ftp://example.com/pub/file.txt", true)]
#[case("file:///home/user/page.html", false)]
#[case("chrome://settings", false)]
#[case("chrome-extension://abcdef/page.html", false)]
#[case("about:blank", false)]
#[case("not a url", false)]
fn supported_url_allow_list(#[case] url: &str, #[case] expected: bool) {
    assert_eq!(is_supported_url(url), expected);
}

#[rstest]
#[case("chrome://settings", "chrome")]
#[case("about:blank", "about")]
#[case("https://example.com/", "https")]
fn protocol_extraction(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(url_protocol(url), expected);
}

#[test]
fn viewer_url_prefix_match() {
    let viewer = format!("{}?file=https%3A%2F%2Fexample.com%2Fa.pdf", VIEWER_BASE);
    assert!(is_pdf_viewer_url(&viewer, VIEWER_BASE));
    assert!(is_pdf_viewer_url(VIEWER_BASE, VIEWER_BASE));
    assert!(!is_pdf_viewer_url("https://example.com/a.pdf", VIEWER_BASE));
    // A different extension's viewer does not count as ours.
    assert!(!is_pdf_viewer_url(
        "chrome-extension://otherextension/pdfjs/web/viewer.html?file=x",
        VIEWER_BASE
    ));
}

// === Content type guess ===

#[rstest]
#[case("https://example.com/paper.pdf", ContentType::Pdf)]
#[case("https://example.com/docs/paper.pdf?download=1", ContentType::Pdf)]
#[case("file:///home/user/thesis.pdf", ContentType::Pdf)]
#[case("https://example.com/article", ContentType::Html)]
#[case("https://example.com/", ContentType::Html)]
// Only the path counts; a `.pdf` in the query string is not a PDF path.
#[case("https://example.com/view?name=paper.pdf", ContentType::Html)]
fn content_type_guess_from_url(#[case] url: &str, #[case] expected: ContentType) {
    assert_eq!(guess_content_type_from_url(url), expected);
}

// === Viewer URL construction ===

#[test]
fn viewer_url_encodes_original_as_file_param() {
    let viewer = pdf_viewer_url(VIEWER_BASE, "https://example.com/a.pdf").unwrap();
    assert_eq!(
        viewer,
        format!("{}?file=https%3A%2F%2Fexample.com%2Fa.pdf", VIEWER_BASE)
    );
}

#[test]
fn viewer_url_preserves_fragment_outside_file_param() {
    let viewer = pdf_viewer_url(VIEWER_BASE, "https://example.com/a.pdf#page=2").unwrap();
    assert_eq!(
        viewer,
        format!("{}?file=https%3A%2F%2Fexample.com%2Fa.pdf#page=2", VIEWER_BASE)
    );
}

#[test]
fn viewer_url_encodes_query_of_original() {
    let viewer = pdf_viewer_url(VIEWER_BASE, "https://example.com/a.pdf?x=1&y=2").unwrap();
    assert_eq!(
        viewer,
        format!(
            "{}?file=https%3A%2F%2Fexample.com%2Fa.pdf%3Fx%3D1%26y%3D2",
            VIEWER_BASE
        )
    );
}

#[test]
fn viewer_url_rejects_unparseable_original() {
    let result = pdf_viewer_url(VIEWER_BASE, "not a url");
    assert!(matches!(result, Err(InjectorError::InvalidUrl(_))));
}

// === Original URL extraction ===

#[test]
fn extraction_recovers_original_url() {
    let viewer = pdf_viewer_url(VIEWER_BASE, "https://example.com/a.pdf?x=1").unwrap();
    let original = original_url_from_viewer(&viewer).unwrap();
    assert_eq!(original, "https://example.com/a.pdf?x=1");
}

#[test]
fn extraction_drops_direct_link_fragment() {
    let viewer = pdf_viewer_url(VIEWER_BASE, "https://example.com/a.pdf#annotations:42").unwrap();
    let original = original_url_from_viewer(&viewer).unwrap();
    assert_eq!(original, "https://example.com/a.pdf");
}

#[test]
fn extraction_preserves_ordinary_fragment() {
    let viewer = pdf_viewer_url(VIEWER_BASE, "https://example.com/a.pdf#section-2").unwrap();
    let original = original_url_from_viewer(&viewer).unwrap();
    assert_eq!(original, "https://example.com/a.pdf#section-2");
}

#[test]
fn extraction_fails_without_file_param() {
    let result = original_url_from_viewer(VIEWER_BASE);
    assert!(matches!(result, Err(InjectorError::OriginalUrlMissing(_))));
}

#[test]
fn extraction_fails_on_unparseable_viewer_url() {
    let result = original_url_from_viewer("definitely not a url");
    assert!(matches!(result, Err(InjectorError::InvalidUrl(_))));
}
