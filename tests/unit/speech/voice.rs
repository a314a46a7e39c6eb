use super::*;

fn catalog() -> VoiceCatalog {
    VoiceCatalog::new(vec![
        Voice::new("Alex", "en-US").with_default(true),
        Voice::new("Amelie", "fr-CA"),
        Voice::new("Anna", "de-DE"),
    ])
}

#[test]
fn option_labels_mark_the_default_voice() {
    let labels: Vec<String> = catalog().options().into_iter().map(|o| o.label).collect();
    assert_eq!(
        labels,
        vec![
            "Alex (en-US) -- DEFAULT".to_string(),
            "Amelie (fr-CA)".to_string(),
            "Anna (de-DE)".to_string(),
        ]
    );
}

#[test]
fn find_by_name_and_default() {
    let c = catalog();
    assert_eq!(c.find("Anna").unwrap().lang, "de-DE");
    assert!(c.find("Nobody").is_none());
    assert_eq!(c.default_voice().unwrap().name, "Alex");
}

#[test]
fn duplicate_names_resolve_to_the_last_voice() {
    let c = VoiceCatalog::new(vec![Voice::new("Sam", "en-GB"), Voice::new("Sam", "en-AU")]);
    assert_eq!(c.find("Sam").unwrap().lang, "en-AU");
}

#[test]
fn replace_swaps_the_whole_list() {
    let mut c = catalog();
    c.replace(vec![Voice::new("Kyoko", "ja-JP")]);
    assert_eq!(c.voices().len(), 1);
    assert!(c.find("Alex").is_none());
    assert!(c.default_voice().is_none());

    c.replace(Vec::new());
    assert!(c.is_empty());
    assert!(c.options().is_empty());
}
