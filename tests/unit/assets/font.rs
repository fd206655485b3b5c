use super::*;

#[test]
fn missing_font_is_image_load_error() {
    let err = load_font(Path::new("target/fonts/NoSuchFont-Regular.ttf")).unwrap_err();
    assert!(matches!(err, CardError::ImageLoad(_)));
    assert!(err.to_string().contains("NoSuchFont-Regular.ttf"));
}

#[test]
fn empty_font_is_image_load_error() {
    let dir = std::path::PathBuf::from("target").join("unit_font");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.ttf");
    std::fs::write(&path, b"").unwrap();

    let err = load_font(&path).unwrap_err();
    assert!(matches!(err, CardError::ImageLoad(_)));
    assert!(matches!(
        FontAsset::from_bytes(Vec::new()),
        Err(CardError::ImageLoad(_))
    ));
}

#[test]
fn debug_does_not_dump_bytes() {
    let f = FontAsset::from_bytes(vec![1, 2, 3]).unwrap();
    assert_eq!(format!("{f:?}"), "FontAsset { bytes_len: 3 }");
}
