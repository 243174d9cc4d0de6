use super::*;

#[test]
fn validate_job_file_requires_a_named_file() {
    assert_eq!(validate_job_file(Some("cat.png")), Ok(()));
    assert_eq!(validate_job_file(None), Err("No file is received."));
    assert_eq!(validate_job_file(Some("  ")), Err("No file is received."));
}

#[test]
fn select_job_kind_parses_wire_values() {
    assert_eq!(select_job_kind("all_three", JobKind::Original), JobKind::AllThree);
    assert_eq!(select_job_kind("square_original", JobKind::Original), JobKind::SquareOriginal);
}

#[test]
fn select_job_kind_keeps_current_on_unknown_value() {
    assert_eq!(select_job_kind("thumbnail", JobKind::SquareSmall), JobKind::SquareSmall);
    assert_eq!(select_job_kind("", JobKind::Original), JobKind::Original);
}

// =============================================================
// Job results
// =============================================================

fn status(images: &[&str]) -> JobStatus {
    let images = images.iter().map(|pk| format!(r#"{{"pk":"{pk}"}}"#)).collect::<Vec<_>>().join(",");
    serde_json::from_str(&format!(r#"{{"ok":true,"pk":"job-1","images":[{images}]}}"#)).unwrap()
}

#[test]
fn results_summary_counts_images() {
    assert_eq!(results_summary(&status(&[])), "No images yet.");
    assert_eq!(results_summary(&status(&["a"])), "1 image ready.");
    assert_eq!(results_summary(&status(&["a", "b", "c"])), "3 images ready.");
}

#[test]
fn preview_url_matches_by_image_id() {
    let previews = vec![
        Preview { image: "a".to_owned(), url: "blob:http://localhost/1".to_owned() },
        Preview { image: "b".to_owned(), url: "blob:http://localhost/2".to_owned() },
    ];
    assert_eq!(preview_url(&previews, "b").as_deref(), Some("blob:http://localhost/2"));
    assert_eq!(preview_url(&previews, "c"), None);
    assert_eq!(preview_url(&[], "a"), None);
}
