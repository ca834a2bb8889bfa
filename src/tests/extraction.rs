use crate::{ProcessedDocument, StatementExtractor};

fn test_extract(input: &str) -> String {
    let doc = ProcessedDocument::from_text("snapshot", input);
    StatementExtractor::new()
        .extract(&doc)
        .iter()
        .map(|s| {
            format!(
                "{}..{} {} {}",
                s.span.start,
                s.span.end,
                s.semantic_role.as_str(),
                s.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn settlement_letter() {
    insta::assert_snapshot!(test_extract(
        "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken. Vi benekter ethvert ansvar for de påståtte skadene i denne saken."
    ), @r###"
    0..64 claim Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken
    66..130 claim Vi benekter ethvert ansvar for de påståtte skadene i denne saken
    "###);
}

#[test]
fn date_with_period_is_split() {
    insta::assert_snapshot!(test_extract(
        "Dokumentet ble mottatt den 15. januar. Vi har ikke mottatt noe dokument fra deg."
    ), @r###"
    0..29 claim Dokumentet ble mottatt den 15
    39..79 claim Vi har ikke mottatt noe dokument fra deg
    "###);
}

#[test]
fn roles_in_decision_letter() {
    insta::assert_snapshot!(test_extract(
        "Vedlagt følger legeerklæringen fra januar! Du må sende inn ny søknad innen fristen? Derfor opprettholdes vedtaket i saken."
    ), @r###"
    0..41 evidence Vedlagt følger legeerklæringen fra januar
    43..82 requirement Du må sende inn ny søknad innen fristen
    84..121 conclusion Derfor opprettholdes vedtaket i saken
    "###);
}

#[test]
fn no_substantive_sentences() {
    insta::assert_snapshot!(test_extract("Hei. Takk! Mvh."), @"");
}
