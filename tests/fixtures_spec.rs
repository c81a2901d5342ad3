mod common;

use common::fixture_path;
use mo_reader::{parse, DomainTable, HeaderRecord, ParseOptions};
use std::fs;

fn read_fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(&["tests", "fixtures", name]);
    fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn messages(bytes: &[u8], options: &ParseOptions) -> DomainTable {
    let catalog = parse(bytes, options).expect("parse fixture");
    catalog
        .domain(&options.domain)
        .cloned()
        .unwrap_or_else(|| panic!("missing domain {}", options.domain))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn french_fixture_matches_source() {
    let table = messages(&read_fixture("fr-le.mo"), &ParseOptions::default());

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.header(),
        Some(&HeaderRecord {
            domain: "messages".to_string(),
            lang: Some("fr".to_string()),
            plural_forms: Some("nplurals=2; plural=(n > 1);".to_string()),
        })
    );
    assert_eq!(table.translations("Hello"), Some(strings(&["Bonjour"]).as_slice()));
    assert_eq!(
        table.translations("Goodbye"),
        Some(strings(&["Au revoir, à bientôt"]).as_slice())
    );
    assert_eq!(
        table.translations("%d file"),
        Some(strings(&["%d fichier", "%d fichiers"]).as_slice())
    );
    assert!(table.get("%d file\0%d files").is_none());
}

#[test]
fn big_endian_fixture_equals_little_endian_fixture() {
    let options = ParseOptions::default();
    let le = parse(&read_fixture("fr-le.mo"), &options).expect("parse le");
    let be = parse(&read_fixture("fr-be.mo"), &options).expect("parse be");
    assert_eq!(le, be);
}

#[test]
fn latin1_fixture_uses_header_charset() {
    let table = messages(&read_fixture("de-latin1.mo"), &ParseOptions::default());

    assert_eq!(table.header().and_then(|h| h.lang.as_deref()), Some("de"));
    assert_eq!(table.translations("Cheese"), Some(strings(&["Käse"]).as_slice()));
    assert_eq!(table.translations("Größe"), Some(strings(&["Größe"]).as_slice()));
}

#[test]
fn encoding_override_beats_header_charset() {
    let options = ParseOptions::default().with_encoding("iso-8859-1");
    let table = messages(&read_fixture("fr-le.mo"), &options);

    // UTF-8 bytes read as Latin-1 (windows-1252 under WHATWG labels).
    assert_eq!(
        table.translations("Goodbye"),
        Some(strings(&["Au revoir, Ã\u{a0} bientÃ\u{b4}t"]).as_slice())
    );
    // The header block stays UTF-8.
    assert_eq!(table.header().and_then(|h| h.lang.as_deref()), Some("fr"));
}

#[test]
fn custom_domain_names_the_only_table() {
    let options = ParseOptions::default().with_domain("app");
    let catalog = parse(&read_fixture("fr-le.mo"), &options).expect("parse fixture");

    assert_eq!(catalog.domains().count(), 1);
    assert!(catalog.domain("messages").is_none());
    let table = catalog.domain("app").expect("app domain");
    assert_eq!(table.header().map(|h| h.domain.as_str()), Some("app"));
}
