use super::*;

fn req() -> CompositionRequest {
    CompositionRequest::new("bg.png", "example.com", "Hello", "out.png")
}

#[test]
fn new_uses_reference_geometry() {
    let r = req();
    assert_eq!((r.canvas_width, r.canvas_height), (1200, 628));
    assert_eq!(r.domain_font_size, 80.0);
    assert_eq!(r.title_font_size, 90.0);
    assert_eq!(r.fonts, FontPaths::default());
    assert_eq!(r.validate().unwrap(), Canvas::new(1200, 628).unwrap());
}

#[test]
fn zero_sizes_are_invalid() {
    let mut r = req();
    r.canvas_width = 0;
    assert!(matches!(r.validate(), Err(CardError::InvalidParameter(_))));

    let mut r = req();
    r.canvas_height = 0;
    assert!(matches!(r.validate(), Err(CardError::InvalidParameter(_))));
}

#[test]
fn non_positive_font_sizes_are_invalid() {
    for bad in [0.0, -12.0, f32::NAN, f32::INFINITY] {
        let mut r = req();
        r.domain_font_size = bad;
        assert!(matches!(r.validate(), Err(CardError::InvalidParameter(_))));

        let mut r = req();
        r.title_font_size = bad;
        assert!(matches!(r.validate(), Err(CardError::InvalidParameter(_))));
    }
}

#[test]
fn empty_paths_are_invalid() {
    let mut r = req();
    r.background_path = PathBuf::new();
    assert!(matches!(r.validate(), Err(CardError::InvalidParameter(_))));

    let mut r = req();
    r.output_path = PathBuf::new();
    assert!(matches!(r.validate(), Err(CardError::InvalidParameter(_))));
}

#[test]
fn empty_labels_are_allowed() {
    let r = CompositionRequest::new("bg.png", "", "", "out.png");
    r.validate().unwrap();
}
