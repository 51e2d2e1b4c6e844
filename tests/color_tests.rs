use swatchboard::color::{ANSI_16, Argb, DefaultColors, PALETTE_SIZE, Palette, Scope};

#[test]
fn test_parse_six_digit_hex_is_opaque() {
    let color = Argb::parse("#cc0000").unwrap();
    assert_eq!(color, Argb(0xFFCC0000));
    assert_eq!(color.alpha(), 0xFF);
}

#[test]
fn test_parse_eight_digit_hex_keeps_alpha() {
    let color = Argb::parse("#80112233").unwrap();
    assert_eq!(color.alpha(), 0x80);
    assert_eq!(color.rgb(), (0x11, 0x22, 0x33));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(Argb::parse("#12345").is_err());
    assert!(Argb::parse("#gg0000").is_err());
    assert!(Argb::parse("").is_err());
}

#[test]
fn test_display_roundtrip() {
    let color = Argb(0xFF34E2E2);
    assert_eq!(color.to_string(), "#ff34e2e2");
    assert_eq!(Argb::parse(&color.to_string()).unwrap(), color);
}

#[test]
fn test_channels() {
    let color = Argb::from_channels(0x12, 0x34, 0x56, 0x78);
    assert_eq!(color.0, 0x12345678);
    assert_eq!(color.alpha(), 0x12);
    assert_eq!(color.red(), 0x34);
    assert_eq!(color.green(), 0x56);
    assert_eq!(color.blue(), 0x78);
}

#[test]
fn test_luminance_extremes() {
    assert_eq!(Argb::OPAQUE_BLACK.luminance(), 0.0);
    assert!((Argb::OPAQUE_WHITE.luminance() - 255.0).abs() < 0.01);
}

#[test]
fn test_stock_palette_shape() {
    assert_eq!(ANSI_16.len(), PALETTE_SIZE);
    // slot 7 is the stock foreground, slot 0 the stock background
    assert_eq!(ANSI_16[0], Argb(0xFF000000));
    assert_eq!(ANSI_16[7], Argb(0xFFD3D7CF));
}

#[test]
fn test_palette_get_set_in_range() {
    let mut palette = Palette::default();
    palette.set(4, Argb(0xFF123456)).unwrap();
    assert_eq!(palette.get(4).unwrap(), Argb(0xFF123456));
}

#[test]
fn test_palette_rejects_out_of_range() {
    let mut palette = Palette::default();
    assert!(palette.get(16).is_err());
    assert!(palette.set(16, Argb(0xFF123456)).is_err());
}

#[test]
fn test_palette_try_from_enforces_length() {
    let short = vec![Argb(0xFF000000); 3];
    assert!(Palette::try_from(short.as_slice()).is_err());

    let exact = vec![Argb(0xFF000000); PALETTE_SIZE];
    assert!(Palette::try_from(exact.as_slice()).is_ok());
}

#[test]
fn test_default_colors_validates_indices() {
    assert!(DefaultColors::new(15, 0).is_ok());
    assert!(DefaultColors::new(16, 0).is_err());
    assert!(DefaultColors::new(0, 16).is_err());
    // nothing requires the pair to differ
    assert!(DefaultColors::new(3, 3).is_ok());
}

#[test]
fn test_stock_defaults() {
    let defaults = DefaultColors::default();
    assert_eq!(defaults.foreground(), 7);
    assert_eq!(defaults.background(), 0);
}

#[test]
fn test_scope_display() {
    assert_eq!(Scope::global().to_string(), "global");
    assert_eq!(Scope::host("rack-1").to_string(), "rack-1");
    assert!(Scope::global().is_global());
    assert!(!Scope::host("rack-1").is_global());
}
