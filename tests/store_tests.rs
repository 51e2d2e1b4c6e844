use std::path::PathBuf;

use swatchboard::color::{Argb, DefaultColors, Palette, Scope};
use swatchboard::store::{PaletteStore, StoreDocument, StoreError, TomlStore};

fn temp_store_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("swatchboard-{}-{}.toml", name, std::process::id()))
}

fn sixteen_colors() -> String {
    let entries: Vec<String> = (0..16).map(|i| format!("\"#ff0000{i:02x}\"")).collect();
    format!("[{}]", entries.join(", "))
}

#[test]
fn test_empty_document_yields_stock_state() {
    let doc: StoreDocument = toml::from_str("").unwrap();
    let section = doc.section(&Scope::global()).unwrap();
    assert_eq!(section.palette().unwrap(), Palette::default());
    assert_eq!(section.defaults().unwrap(), DefaultColors::default());
}

#[test]
fn test_parse_scope_sections() {
    let toml_str = format!(
        r#"
[global]
colors = {}
foreground = 7
background = 0

[hosts."rack-1"]
foreground = 15
background = 8
"#,
        sixteen_colors()
    );

    let doc: StoreDocument = toml::from_str(&toml_str).unwrap();

    let global = doc.section(&Scope::global()).unwrap();
    let palette = global.palette().unwrap();
    assert_eq!(palette.get(5).unwrap(), Argb(0xFF000005));

    let host = doc.section(&Scope::host("rack-1")).unwrap();
    // the host never stored colors, so it falls back to stock
    assert_eq!(host.palette().unwrap(), Palette::default());
    assert_eq!(host.defaults().unwrap(), DefaultColors::new(15, 8).unwrap());
}

#[test]
fn test_wrong_color_count_is_corrupt() {
    let doc: StoreDocument =
        toml::from_str("[global]\ncolors = [\"#ff000000\", \"#ff000001\"]\n").unwrap();
    let err = doc.section(&Scope::global()).unwrap().palette();
    assert!(matches!(err, Err(StoreError::Corrupt(_))));
}

#[test]
fn test_bad_hex_is_invalid_color() {
    let mut colors: Vec<String> = (0..16).map(|i| format!("#ff0000{i:02x}")).collect();
    colors[3] = "#not-a-color".to_string();
    let entries: Vec<String> = colors.iter().map(|c| format!("\"{c}\"")).collect();
    let toml_str = format!("[global]\ncolors = [{}]\n", entries.join(", "));

    let doc: StoreDocument = toml::from_str(&toml_str).unwrap();
    let err = doc.section(&Scope::global()).unwrap().palette();
    assert!(matches!(err, Err(StoreError::InvalidColor(_))));
}

#[test]
fn test_out_of_range_default_is_corrupt() {
    let doc: StoreDocument = toml::from_str("[global]\nforeground = 16\n").unwrap();
    let err = doc.section(&Scope::global()).unwrap().defaults();
    assert!(matches!(err, Err(StoreError::Corrupt(_))));
}

#[test]
fn test_open_missing_file_yields_stock_state() {
    let path = temp_store_path("missing");
    let _ = std::fs::remove_file(&path);

    let store = TomlStore::open(&path).unwrap();
    assert_eq!(store.colors(&Scope::global()).unwrap(), Palette::default());
    assert_eq!(
        store.default_colors(&Scope::global()).unwrap(),
        DefaultColors::default()
    );
}

#[test]
fn test_set_color_roundtrips_through_file() {
    let path = temp_store_path("set-color");
    let _ = std::fs::remove_file(&path);

    {
        let mut store = TomlStore::open(&path).unwrap();
        store
            .set_color(&Scope::global(), 3, Argb(0xFF112233))
            .unwrap();
    }

    let reopened = TomlStore::open(&path).unwrap();
    let palette = reopened.colors(&Scope::global()).unwrap();
    assert_eq!(palette.get(3).unwrap(), Argb(0xFF112233));
    // untouched slots keep their stock values
    assert_eq!(palette.get(0).unwrap(), Palette::default().get(0).unwrap());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_set_default_colors_roundtrips_per_scope() {
    let path = temp_store_path("set-defaults");
    let _ = std::fs::remove_file(&path);

    let host = Scope::host("rack-1");
    {
        let mut store = TomlStore::open(&path).unwrap();
        store
            .set_default_colors(&host, DefaultColors::new(5, 2).unwrap())
            .unwrap();
    }

    let reopened = TomlStore::open(&path).unwrap();
    assert_eq!(
        reopened.default_colors(&host).unwrap(),
        DefaultColors::new(5, 2).unwrap()
    );
    // the global pair is unaffected
    assert_eq!(
        reopened.default_colors(&Scope::global()).unwrap(),
        DefaultColors::default()
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_unknown_host_falls_back_to_stock() {
    let path = temp_store_path("unknown-host");
    let _ = std::fs::remove_file(&path);

    let store = TomlStore::open(&path).unwrap();
    let scope = Scope::host("never-seen");
    assert_eq!(store.colors(&scope).unwrap(), Palette::default());
    assert_eq!(
        store.default_colors(&scope).unwrap(),
        DefaultColors::default()
    );
}

#[test]
fn test_set_color_out_of_range_fails() {
    let path = temp_store_path("slot-range");
    let _ = std::fs::remove_file(&path);

    let mut store = TomlStore::open(&path).unwrap();
    let err = store.set_color(&Scope::global(), 16, Argb(0xFF112233));
    assert!(matches!(err, Err(StoreError::SlotOutOfRange(16))));

    let _ = std::fs::remove_file(&path);
}
