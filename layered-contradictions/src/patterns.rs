//! Fixed phrase vocabularies for the detectors.
//!
//! All phrases are lower-case and matched as substrings of lower-cased
//! statement text, except where a regex is needed for word boundaries.

use once_cell::sync::Lazy;
use regex::Regex;

// Settlement

pub(crate) const SETTLEMENT_OFFER: &[&str] = &[
    "tilby", "tilbud", "oppgjør", "forlik", "betaling", "kompensasjon", "utbetale",
    "utbetaling", "kulanse", "minnelig løsning", "offer", "settlement", "payment",
    "compensation",
];

pub(crate) const LIABILITY_DENIAL: &[&str] = &[
    "ikke ansvarlig", "ikke ansvar", "benekter", "avviser", "bestrider", "ingen forpliktelse",
    "uten å erkjenne", "fraskriver", "ingen skyld", "not liable", "deny", "denies", "reject",
    "dispute", "no obligation",
];

// Physical confrontation

pub(crate) const PHYSICAL_INCIDENT: &[&str] = &[
    "slo til", "slo ham", "slo henne", "ble slått", "slått ned", "dyttet", "dytting", "skubbet",
    "knuffet", "angrep", "håndgemeng", "basketak", "slagsmål", "holdt fast", "tok tak i",
    "fysisk kontakt", "fysisk konfrontasjon", "fysisk hendelse",
];

pub(crate) const CONFRONTATION_DENIAL: &[&str] = &[
    "ingen fysisk", "ikke fysisk", "ingen konfrontasjon", "ikke noen konfrontasjon",
    "ingen håndgemeng", "ingen slåsskamp", "intet basketak", "ikke noe basketak",
    "fant ikke sted", "ikke forekommet", "aldri rørt", "ikke rørt",
];

// Factual inconsistency: (positive claim, negative claim)

pub(crate) const FACTUAL_PAIRS: &[(&str, &str)] = &[
    ("var til stede", "var ikke til stede"),
    ("var på jobb", "var ikke på jobb"),
    ("møtte opp", "møtte ikke opp"),
    ("ble informert", "ble ikke informert"),
    ("ble varslet", "ble ikke varslet"),
    ("ble meldt", "ble ikke meldt"),
    ("skjedde i arbeidstiden", "skjedde utenfor arbeidstiden"),
    ("skjedde på arbeidsplassen", "skjedde ikke på arbeidsplassen"),
    ("hadde vitner", "ingen vitner"),
    ("samtykket til", "samtykket ikke"),
];

// Medical causation

pub(crate) const CAUSAL_ACKNOWLEDGMENT: &[&str] = &[
    "symptomer", "plager etter", "skaden oppstod", "som følge av hendelsen",
    "som følge av ulykken", "forårsaket av", "skyldes hendelsen", "skyldes ulykken",
    "diagnostisert", "sykemeldt etter", "årsakssammenheng mellom",
];

pub(crate) const CAUSAL_DENIAL: &[&str] = &[
    "ingen årsakssammenheng", "ikke årsakssammenheng", "skyldes ikke", "ikke forårsaket",
    "ikke relatert til", "ikke som følge av", "degenerative", "tidligere lidelse",
    "forutbestående",
];

// Direct negation: (affirmative, negated)

pub(crate) const NEGATION_PAIRS: &[(&str, &str)] = &[
    ("ble mottatt", "ikke mottatt"),
    ("ble mottatt", "aldri mottatt"),
    ("ble levert", "ikke levert"),
    ("ble levert", "aldri levert"),
    ("ble sendt", "ikke sendt"),
    ("ble sendt", "aldri sendt"),
    ("er betalt", "ikke betalt"),
    ("er utbetalt", "ikke utbetalt"),
    ("er godkjent", "ikke godkjent"),
    ("har fått", "ikke fått"),
    ("was delivered", "never delivered"),
    ("was received", "never received"),
    ("was sent", "never sent"),
];

// Timeline

pub(crate) static BEFORE_INDICATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:før|tidligere enn|forut for|before|prior to)\b").unwrap());

pub(crate) static AFTER_INDICATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:etter|senere enn|i etterkant av|after|following)\b").unwrap());

// Authorities

/// Canonical authority names, matched case-insensitively.
pub const AUTHORITIES: &[&str] = &[
    "NAV",
    "Finanstilsynet",
    "Finansklagenemnda",
    "Høyesterett",
    "Lagmannsrett",
];

/// "nav" needs whole-word matching ("navn" is not NAV); the longer names may
/// carry inflection suffixes ("Høyesteretts", "lagmannsretten").
pub(crate) static AUTHORITY_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bnav\b|finanstilsynet|finansklagenemnda|høyesterett|lagmannsrett").unwrap()
});

pub(crate) const APPROVAL: &[&str] = &[
    "godkjent", "godkjenner", "innvilget", "innvilger", "gitt medhold", "fått medhold",
    "får medhold", "anerkjent", "anerkjenner", "approved",
];

pub(crate) const REJECTION: &[&str] = &[
    "avslått", "avslår", "avvist", "avviser", "ikke medhold", "forkastet", "underkjent",
    "ikke godkjent", "rejected",
];

// Administrative jurisdiction

pub(crate) const CASE_CLOSURE: &[&str] = &[
    "saken er avsluttet", "saken er lukket", "avsluttet saken", "saken anses som avsluttet",
    "endelig avgjort", "henlagt",
];

pub(crate) const CASE_CONTINUATION: &[&str] = &[
    "gjenopptatt", "gjenopptas", "gjenåpnet", "gjenåpnes", "fortsatt under behandling",
    "videre behandling", "behandles videre", "fortsetter behandlingen",
];

pub(crate) const JURISDICTION_CLAIM: &[&str] = &[
    "har myndighet", "har kompetanse", "under vår jurisdiksjon", "innenfor vårt ansvarsområde",
    "er rett instans", "er rette instans",
];

pub(crate) const JURISDICTION_DENIAL: &[&str] = &[
    "ikke myndighet", "ikke kompetanse", "utenfor vår jurisdiksjon",
    "utenfor vårt ansvarsområde", "ikke rett instans", "ikke rette instans",
    "mangler kompetanse", "mangler myndighet",
];

// Procedural delay and burden of proof

pub(crate) const DELAY_JUSTIFICATION: &[&str] = &[
    "trenger mer tid", "behov for mer tid", "ytterligere utredning", "ytterligere opplysninger",
    "innhente mer informasjon", "avventer", "stor pågang", "lang saksbehandlingstid",
    "kapasitetsmessige",
];

pub(crate) const LONG_WAIT: &[&str] = &[
    "måneder", "over ett år", "over et år", "flere år", "lang ventetid", "har ventet",
    "lang tid",
];

pub(crate) const EVIDENCE_AVAILABLE: &[&str] = &[
    "allerede dokumentert", "allerede sendt inn", "allerede levert", "allerede foreligger",
    "foreligger allerede", "all nødvendig dokumentasjon", "fullstendig dokumentasjon",
];

pub(crate) const PROOF_DEMAND: &[&str] = &[
    "må dokumentere", "må bevise", "må sannsynliggjøre", "bevisbyrden", "fremlegge bevis",
    "fremlegge dokumentasjon", "kreve dokumentasjon",
];

pub(crate) const PROOF_EVASION: &[&str] = &[
    "kan ikke ta stilling", "tar ikke stilling", "ikke grunnlag for å vurdere",
    "ikke mulig å vurdere", "ikke tilstrekkelig", "uklart",
];

// Legal mandate

pub(crate) const MANDATE_CITATION: &[&str] = &[
    "forvaltningsloven", "fvl §", "fvl. §", "utredningsplikt", "veiledningsplikt",
    "begrunnelsesplikt", "forsvarlig saksbehandling",
];

pub(crate) const VIOLATION_ACKNOWLEDGMENT: &[&str] = &[
    "brudd på", "ikke overholdt", "ikke fulgt", "mangelfull saksbehandling",
    "saksbehandlingsfeil", "beklager at",
];

pub(crate) const CONTRADICTORY_OUTCOME: &[&str] = &[
    "likevel", "opprettholder vedtaket", "opprettholdes", "endrer ikke", "ikke virket inn",
    "uten betydning for", "står ved",
];

/// Returns the first phrase from `phrases` found in `text`.
pub(crate) fn first_match<'p>(text: &str, phrases: &[&'p str]) -> Option<&'p str> {
    phrases.iter().copied().find(|phrase| text.contains(phrase))
}

pub(crate) fn contains_any(text: &str, phrases: &[&str]) -> bool {
    first_match(text, phrases).is_some()
}

/// True when `text` hits `positive` and none of `negative`.
///
/// Negated phrasings often embed their positive form ("ikke godkjent"
/// contains "godkjent"), so a statement only counts as affirming when it
/// carries no negated phrasing at all.
pub(crate) fn affirms(text: &str, positive: &[&str], negative: &[&str]) -> bool {
    contains_any(text, positive) && !contains_any(text, negative)
}

/// Canonical authority names mentioned in lower-cased `text`, in order of
/// first appearance.
pub(crate) fn authorities_in(text: &str) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for mention in AUTHORITY_MENTION.find_iter(text) {
        let canonical = AUTHORITIES
            .iter()
            .copied()
            .find(|name| name.to_lowercase() == mention.as_str());
        if let Some(name) = canonical {
            if !found.contains(&name) {
                found.push(name);
            }
        }
    }
    found
}
