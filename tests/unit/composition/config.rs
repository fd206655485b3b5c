use std::io::Cursor;

use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = ComposeConfig::from_reader(Cursor::new("{}")).unwrap();
    assert_eq!(cfg, ComposeConfig::default());
    assert_eq!(cfg.background_dir, PathBuf::from("backgroundImages"));
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let json = r#"{ "canvas_width": 800, "fonts": { "bold": "custom/Bold.ttf" } }"#;
    let cfg = ComposeConfig::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(cfg.canvas_width, 800);
    assert_eq!(cfg.canvas_height, 628);
    assert_eq!(cfg.fonts.bold, PathBuf::from("custom/Bold.ttf"));
    assert_eq!(cfg.fonts.regular, FontPaths::default().regular);
}

#[test]
fn unknown_option_is_rejected() {
    let err = ComposeConfig::from_reader(Cursor::new(r#"{ "canvas_widht": 800 }"#)).unwrap_err();
    assert!(matches!(err, CardError::InvalidParameter(_)));
    assert!(err.to_string().contains("canvas_widht"));
}

#[test]
fn non_positive_values_are_rejected() {
    let err = ComposeConfig::from_reader(Cursor::new(r#"{ "canvas_height": 0 }"#)).unwrap_err();
    assert!(matches!(err, CardError::InvalidParameter(_)));

    let err =
        ComposeConfig::from_reader(Cursor::new(r#"{ "title_font_size": -4.0 }"#)).unwrap_err();
    assert!(matches!(err, CardError::InvalidParameter(_)));

    // Negative integers do not fit the u32 field and fail at parse time.
    let err = ComposeConfig::from_reader(Cursor::new(r#"{ "canvas_width": -5 }"#)).unwrap_err();
    assert!(matches!(err, CardError::InvalidParameter(_)));
}

#[test]
fn request_carries_config_defaults() {
    let cfg = ComposeConfig {
        canvas_width: 640,
        canvas_height: 320,
        domain_font_size: 20.0,
        title_font_size: 30.0,
        ..ComposeConfig::default()
    };
    let r = cfg.request("bg.jpg", "example.com", "Title", "out.png");
    assert_eq!((r.canvas_width, r.canvas_height), (640, 320));
    assert_eq!(r.domain_font_size, 20.0);
    assert_eq!(r.title_font_size, 30.0);
    assert_eq!(r.fonts, cfg.fonts);
    assert_eq!(r.output_path, PathBuf::from("out.png"));
}

#[test]
fn resolve_background_uses_dir_for_bare_names() {
    let cfg = ComposeConfig::default();
    assert_eq!(
        cfg.resolve_background("definitely-missing-bg.png"),
        PathBuf::from("backgroundImages").join("definitely-missing-bg.png")
    );
    // Existing paths outside the dir are used verbatim.
    assert_eq!(
        cfg.resolve_background("Cargo.toml"),
        PathBuf::from("Cargo.toml")
    );
}

#[test]
fn resolve_background_prefers_dir_over_working_directory() {
    let dir = PathBuf::from("target").join("unit").join("bg-dir-shadow");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("Cargo.toml"), b"not an image").unwrap();

    let cfg = ComposeConfig {
        background_dir: dir.clone(),
        ..ComposeConfig::default()
    };
    assert_eq!(cfg.resolve_background("Cargo.toml"), dir.join("Cargo.toml"));

    let abs = std::env::current_dir().unwrap().join("Cargo.toml");
    assert_eq!(cfg.resolve_background(abs.to_str().unwrap()), abs);
}

#[test]
fn missing_config_file_is_invalid_parameter() {
    let err = ComposeConfig::from_path(Path::new("target/no-such-config.json")).unwrap_err();
    assert!(matches!(err, CardError::InvalidParameter(_)));
}
