// tests/assemble.rs
//
// End-to-end extraction over a captured-page-style fixture plus the minimal
// scenarios the extraction contract promises.
//
use ldoce_scrape::{ParseError, extract_entries};

static PAGE: &str = include_str!("fixtures/sprint.html");

#[test]
fn one_record_per_real_entry_root_in_document_order() {
    let got = extract_entries(PAGE).unwrap();
    // the third dictentry block has no header fields and is dropped silently
    assert_eq!(got.entries.len(), 2);
    assert!(got.failed_roots.is_empty());

    let (key1, verb) = &got.entries[0];
    let (key2, noun) = &got.entries[1];
    assert_eq!(key1, "1");
    assert_eq!(key2, "2");
    assert_eq!(verb.part_of_speech.as_deref(), Some("verb"));
    assert_eq!(noun.part_of_speech.as_deref(), Some("noun"));
}

#[test]
fn header_fields_extract_including_audio() {
    let got = extract_entries(PAGE).unwrap();
    let entry = &got.entries[0].1;
    assert_eq!(entry.headword, "sprint");
    assert_eq!(entry.hyphenation.as_deref(), Some("sprint"));
    assert_eq!(entry.homonym_number.as_deref(), Some("1"));
    assert_eq!(
        entry.british_audio_url.as_deref(),
        Some("https://www.ldoceonline.com/media/english/breProns/sprint1.mp3")
    );
    assert_eq!(
        entry.american_audio_url.as_deref(),
        Some("https://www.ldoceonline.com/media/english/ameProns/sprint1.mp3")
    );
}

#[test]
fn senses_keep_document_order_with_scalar_fields() {
    let got = extract_entries(PAGE).unwrap();
    let senses = &got.entries[0].1.senses;
    assert_eq!(senses.len(), 2);

    assert_eq!(senses[0].sense_number.as_deref(), Some("1"));
    assert_eq!(senses[0].grammar_note.as_deref(), Some("[intransitive]"));
    assert_eq!(senses[0].definition.as_deref(), Some("to run quickly"));
    assert_eq!(senses[0].signpost, None);

    assert_eq!(senses[1].sense_number.as_deref(), Some("2"));
    assert_eq!(senses[1].signpost.as_deref(), Some("sport"));
    assert_eq!(senses[1].register_label.as_deref(), Some("informal"));
}

#[test]
fn sense_example_clusters_stay_with_their_sense() {
    let got = extract_entries(PAGE).unwrap();
    let senses = &got.entries[0].1.senses;

    assert_eq!(senses[0].examples.len(), 1);
    assert_eq!(senses[0].examples[0].text, "She sprinted to the bus.");
    assert_eq!(
        senses[0].examples[0].audio_url.as_deref(),
        Some("https://www.ldoceonline.com/media/english/exaProns/sprint-ex1.mp3")
    );
    assert_eq!(senses[0].grammar_examples.len(), 1);
    assert_eq!(
        senses[0].grammar_examples[0].text,
        "sprint towards/for something"
    );

    // sense 2's clusters never leak into sense 1
    assert!(senses[0].collocation_examples.is_empty());
    assert_eq!(senses[1].collocation_examples[0].text, "break into a sprint");
    assert!(senses[1].examples.is_empty());
}

#[test]
fn cross_references_carry_absolute_links() {
    let got = extract_entries(PAGE).unwrap();
    let refs = &got.entries[0].1.senses[1].cross_references;
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].text, "marathon");
    assert_eq!(
        refs[0].link_url,
        "https://www.ldoceonline.com/dictionary/marathon"
    );
}

#[test]
fn sub_senses_extract_and_empty_ones_are_omitted() {
    let got = extract_entries(PAGE).unwrap();
    let sense = &got.entries[0].1.senses[1];
    // the fixture has two Subsense nodes; the second is empty markup
    assert_eq!(sense.sub_senses.len(), 1);

    let sub = &sense.sub_senses[0];
    assert_eq!(sub.sense_number.as_deref(), Some("a)"));
    assert_eq!(sub.geography_label.as_deref(), Some("British English"));
    assert_eq!(sub.synonym.as_deref(), Some("dash"));
    assert_eq!(
        sub.definition.as_deref(),
        Some("to take part in a short fast race")
    );
    assert_eq!(sub.examples[0].text, "He sprinted the last 100 metres.");
}

#[test]
fn corpus_group_attaches_to_its_entry() {
    let got = extract_entries(PAGE).unwrap();
    let verb = &got.entries[0].1;
    assert_eq!(
        verb.corpus["sprint"],
        vec![
            "Everyone was sprinting for the train.",
            "He sprinted past the finish line."
        ]
    );
    // the second entry has no example group block
    assert!(got.entries[1].1.corpus.is_empty());
}

#[test]
fn word_family_groups_by_part_of_speech() {
    let got = extract_entries(PAGE).unwrap();
    assert_eq!(got.word_family["noun"], vec!["sprint", "sprinter"]);
    assert_eq!(got.word_family["verb"], vec!["sprint", "outsprint"]);
}

#[test]
fn zero_entry_root_markers_is_empty_not_an_error() {
    let got = extract_entries("<html><body><p>nothing here</p></body></html>").unwrap();
    assert!(got.entries.is_empty());
    assert!(got.failed_roots.is_empty());
}

#[test]
fn empty_input_is_a_parse_error() {
    assert_eq!(extract_entries("").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(extract_entries(" \n ").unwrap_err(), ParseError::EmptyInput);
}

#[test]
fn malformed_markup_still_extracts() {
    let html = r#"<span class="dictentry"><span class="HWD">run</span><div><span class="Sense"><span class="DEF">to move fast"#;
    let got = extract_entries(html).unwrap();
    assert_eq!(got.entries.len(), 1);
    assert_eq!(got.entries[0].1.headword, "run");
    assert_eq!(
        got.entries[0].1.senses[0].definition.as_deref(),
        Some("to move fast")
    );
}

#[test]
fn minimal_round_trip_scenario() {
    let html = r#"
        <span class="dictentry">
            <span class="HWD">sprint</span>
            <span class="Sense">
                <span class="DEF">to run quickly</span>
                <span class="EXAMPLE">She sprinted to the bus.</span>
            </span>
        </span>
    "#;
    let got = extract_entries(html).unwrap();
    let entry = &got.entries[0].1;
    assert_eq!(entry.senses[0].definition.as_deref(), Some("to run quickly"));
    assert_eq!(entry.senses[0].examples[0].text, "She sprinted to the bus.");
    assert_eq!(entry.senses[0].examples[0].audio_url, None);
}

#[test]
fn serialized_records_omit_empty_collections() {
    let got = extract_entries(PAGE).unwrap();
    let json = serde_json::to_value(&got.entries[1].1).unwrap();
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("corpus"));
    assert!(!obj.contains_key("british_audio_url"));
    let sense = &json["senses"][0];
    assert!(sense.get("examples").is_none());
    assert!(sense.get("sub_senses").is_none());
}
