use std::io::Cursor;

use super::*;

#[test]
fn positive_u32_accepts_trimmed_digits() {
    assert_eq!(parse_positive_u32("width", " 1200 ").unwrap(), 1200);
}

#[test]
fn positive_u32_rejects_zero_negative_and_text() {
    for bad in ["0", "-628", "wide", "", "12.5", "99999999999"] {
        let err = parse_positive_u32("height", bad).unwrap_err();
        assert!(matches!(err, CardError::InvalidParameter(_)), "{bad}");
        assert!(err.to_string().contains("height"));
    }
}

#[test]
fn font_size_accepts_fractions_and_rejects_non_positive() {
    assert_eq!(parse_font_size("title font size", "90").unwrap(), 90.0);
    assert_eq!(parse_font_size("title font size", "12.5").unwrap(), 12.5);
    for bad in ["0", "-1", "big", "inf", "NaN"] {
        assert!(matches!(
            parse_font_size("title font size", bad),
            Err(CardError::InvalidParameter(_))
        ));
    }
}

#[test]
fn prompter_reads_answers_and_falls_back_to_defaults() {
    let input = Cursor::new("bg.png\n\r\n\nlast\r\n");
    let mut out = Vec::new();
    let mut p = Prompter::new(input, &mut out);

    assert_eq!(p.ask("background?", None).unwrap(), "bg.png");
    assert_eq!(p.ask("width?", Some("1200")).unwrap(), "1200");
    assert_eq!(p.ask("domain?", None).unwrap(), "");
    assert_eq!(p.ask("title?", Some("x")).unwrap(), "last");
    drop(p);

    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("width?\n[1200] >> "));
    assert!(shown.contains("background?\n>> "));
}

#[test]
fn prompter_errors_on_eof_without_default() {
    let mut out = Vec::new();
    let mut p = Prompter::new(Cursor::new(""), &mut out);
    assert!(p.ask("title?", None).is_err());
    assert_eq!(p.ask("size?", Some("90")).unwrap(), "90");
}
