//! Pairwise contradiction detectors.
//!
//! Each detector is a pure function of two prepared statements and returns
//! the explanation scored with the detector's fixed confidence. Symmetric
//! detectors fire whichever statement carries which side; the category
//! detectors further down look at the concatenated text of both statements.

use chrono::NaiveDate;

use layered_statements::Statement;

use crate::contradiction_type::ContradictionType;
use crate::dates::extract_dates;
use crate::patterns::*;
use crate::scored::Scored;

pub const SETTLEMENT_CONFIDENCE: f64 = 0.89;
pub const PHYSICAL_CONFRONTATION_CONFIDENCE: f64 = 0.92;
pub const FACTUAL_INCONSISTENCY_CONFIDENCE: f64 = 0.88;
pub const MEDICAL_CAUSATION_CONFIDENCE: f64 = 0.85;
pub const DIRECT_NEGATION_CONFIDENCE: f64 = 0.92;
pub const TIMELINE_CONFIDENCE: f64 = 0.88;
pub const AUTHORITY_CONFLICT_CONFIDENCE: f64 = 0.85;
pub const ADMINISTRATIVE_JURISDICTION_CONFIDENCE: f64 = 0.78;
pub const PROCEDURAL_DELAY_CONFIDENCE: f64 = 0.82;
pub const BURDEN_OF_PROOF_CONFIDENCE: f64 = 0.85;
/// Statute cited, breach acknowledged and outcome upheld.
pub const LEGAL_MANDATE_FULL_CONFIDENCE: f64 = 0.85;
/// Statute cited with either a breach or an upheld outcome.
pub const LEGAL_MANDATE_PARTIAL_CONFIDENCE: f64 = 0.83;

/// A statement with the derived data every detector needs.
#[derive(Debug, Clone)]
pub struct PreparedStatement<'a> {
    pub statement: &'a Statement,
    pub lower: String,
    pub dates: Vec<NaiveDate>,
}

impl<'a> PreparedStatement<'a> {
    pub fn new(statement: &'a Statement) -> Self {
        let lower = statement.lowercase_text();
        let dates = extract_dates(&lower);
        Self {
            statement,
            lower,
            dates,
        }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }
}

/// Run the detector for `ty` on a pair.
pub fn detect(
    ty: ContradictionType,
    a: &PreparedStatement<'_>,
    b: &PreparedStatement<'_>,
) -> Option<Scored<String>> {
    let explanation = match ty {
        ContradictionType::SettlementContradiction => settlement(a, b),
        ContradictionType::PhysicalConfrontationContradiction => physical_confrontation(a, b),
        ContradictionType::FactualInconsistency => factual_inconsistency(a, b),
        ContradictionType::MedicalCausationContradiction => medical_causation(a, b),
        ContradictionType::DirectNegation => direct_negation(a, b),
        ContradictionType::TimelineImpossible => timeline_impossible(a, b),
        ContradictionType::AuthorityConflict => authority_conflict(a, b),
        ContradictionType::AdministrativeJurisdictionContradiction => {
            administrative_jurisdiction(&combined(a, b))
        }
        ContradictionType::ProceduralDelayManipulation => procedural_delay(&combined(a, b)),
        ContradictionType::BurdenOfProofEvasion => burden_of_proof(&combined(a, b)),
        ContradictionType::LegalMandateViolation => {
            return legal_mandate(&combined(a, b))
                .map(|(explanation, confidence)| Scored::rule(explanation, confidence, ty.as_str()));
        }
    }?;
    Some(Scored::rule(explanation, base_confidence(ty), ty.as_str()))
}

/// The first detector in priority order that fires on the pair.
pub fn first_detection(
    a: &PreparedStatement<'_>,
    b: &PreparedStatement<'_>,
) -> Option<(ContradictionType, Scored<String>)> {
    ContradictionType::ALL
        .iter()
        .find_map(|&ty| detect(ty, a, b).map(|hit| (ty, hit)))
}

/// The fixed confidence of a detector. For legal mandate violations this is
/// the full-pattern value.
pub fn base_confidence(ty: ContradictionType) -> f64 {
    match ty {
        ContradictionType::SettlementContradiction => SETTLEMENT_CONFIDENCE,
        ContradictionType::PhysicalConfrontationContradiction => PHYSICAL_CONFRONTATION_CONFIDENCE,
        ContradictionType::FactualInconsistency => FACTUAL_INCONSISTENCY_CONFIDENCE,
        ContradictionType::MedicalCausationContradiction => MEDICAL_CAUSATION_CONFIDENCE,
        ContradictionType::DirectNegation => DIRECT_NEGATION_CONFIDENCE,
        ContradictionType::TimelineImpossible => TIMELINE_CONFIDENCE,
        ContradictionType::AuthorityConflict => AUTHORITY_CONFLICT_CONFIDENCE,
        ContradictionType::AdministrativeJurisdictionContradiction => {
            ADMINISTRATIVE_JURISDICTION_CONFIDENCE
        }
        ContradictionType::ProceduralDelayManipulation => PROCEDURAL_DELAY_CONFIDENCE,
        ContradictionType::BurdenOfProofEvasion => BURDEN_OF_PROOF_CONFIDENCE,
        ContradictionType::LegalMandateViolation => LEGAL_MANDATE_FULL_CONFIDENCE,
    }
}

fn combined(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> String {
    format!("{} {}", a.lower, b.lower)
}

/// Fires when one side matches `left` and the other matches `right`, in
/// either order. Returns the two matched phrases as (left, right).
fn split_match<'p>(
    a: &str,
    b: &str,
    left: impl Fn(&str) -> Option<&'p str>,
    right: impl Fn(&str) -> Option<&'p str>,
) -> Option<(&'p str, &'p str)> {
    match (left(a), right(b)) {
        (Some(l), Some(r)) => Some((l, r)),
        _ => match (left(b), right(a)) {
            (Some(l), Some(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// First phrase of `positive` in `text`, unless `text` also carries any of
/// `negative`.
fn affirming<'p>(text: &str, positive: &[&'p str], negative: &[&str]) -> Option<&'p str> {
    if contains_any(text, negative) {
        None
    } else {
        first_match(text, positive)
    }
}

fn settlement(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (offer, denial) = split_match(
        &a.lower,
        &b.lower,
        |t| first_match(t, SETTLEMENT_OFFER),
        |t| first_match(t, LIABILITY_DENIAL),
    )?;
    Some(format!(
        "Settlement is offered ('{}') while liability is denied ('{}')",
        offer, denial
    ))
}

fn physical_confrontation(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (incident, denial) = split_match(
        &a.lower,
        &b.lower,
        |t| affirming(t, PHYSICAL_INCIDENT, CONFRONTATION_DENIAL),
        |t| first_match(t, CONFRONTATION_DENIAL),
    )?;
    Some(format!(
        "A physical incident is described ('{}') while confrontation is denied ('{}')",
        incident, denial
    ))
}

/// Matches an affirmative/negated phrase pair from `pairs` across the two
/// statements, skipping affirmative hits whose statement also holds the
/// negated form.
fn opposing_pair(
    a: &str,
    b: &str,
    pairs: &[(&'static str, &'static str)],
) -> Option<(&'static str, &'static str)> {
    pairs.iter().copied().find(|&(positive, negative)| {
        let a_affirms = a.contains(positive) && !a.contains(negative);
        let b_affirms = b.contains(positive) && !b.contains(negative);
        (a_affirms && b.contains(negative)) || (b_affirms && a.contains(negative))
    })
}

fn factual_inconsistency(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (positive, negative) = opposing_pair(&a.lower, &b.lower, FACTUAL_PAIRS)?;
    Some(format!(
        "Mutually exclusive claims: '{}' versus '{}'",
        positive, negative
    ))
}

fn medical_causation(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (acknowledged, denied) = split_match(
        &a.lower,
        &b.lower,
        |t| affirming(t, CAUSAL_ACKNOWLEDGMENT, CAUSAL_DENIAL),
        |t| first_match(t, CAUSAL_DENIAL),
    )?;
    Some(format!(
        "Symptoms are linked to the incident ('{}') while causation is denied ('{}')",
        acknowledged, denied
    ))
}

fn direct_negation(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (positive, negative) = opposing_pair(&a.lower, &b.lower, NEGATION_PAIRS)?;
    Some(format!(
        "'{}' is directly negated by '{}'",
        positive, negative
    ))
}

/// True when `text` orders its own date against `other` in a way the dates
/// contradict.
fn ordering_contradicted(text: &str, own: NaiveDate, other: NaiveDate) -> bool {
    (BEFORE_INDICATOR.is_match(text) && own > other)
        || (AFTER_INDICATOR.is_match(text) && own < other)
}

fn timeline_impossible(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (date_a, date_b) = (a.first_date()?, b.first_date()?);
    if ordering_contradicted(&a.lower, date_a, date_b)
        || ordering_contradicted(&b.lower, date_b, date_a)
    {
        Some(format!(
            "Stated order of events contradicts the dates {} and {}",
            date_a, date_b
        ))
    } else {
        None
    }
}

fn authority_conflict(a: &PreparedStatement<'_>, b: &PreparedStatement<'_>) -> Option<String> {
    let (authorities_a, authorities_b) = (authorities_in(&a.lower), authorities_in(&b.lower));

    let distinct = authorities_a.iter().find_map(|first| {
        authorities_b
            .iter()
            .find(|second| *second != first)
            .map(|second| (*first, *second))
    })?;

    let a_approves = affirms(&a.lower, APPROVAL, REJECTION);
    let b_approves = affirms(&b.lower, APPROVAL, REJECTION);
    let a_rejects = contains_any(&a.lower, REJECTION);
    let b_rejects = contains_any(&b.lower, REJECTION);

    if (a_approves && b_rejects) || (b_approves && a_rejects) {
        Some(format!(
            "{} and {} are cited with opposite outcomes",
            distinct.0, distinct.1
        ))
    } else {
        None
    }
}

fn administrative_jurisdiction(text: &str) -> Option<String> {
    if contains_any(text, CASE_CLOSURE) && contains_any(text, CASE_CONTINUATION) {
        return Some("The case is described as both closed and still being processed".to_string());
    }
    if contains_any(text, JURISDICTION_CLAIM) && contains_any(text, JURISDICTION_DENIAL) {
        return Some(
            "The institution both claims and disclaims competence over the case".to_string(),
        );
    }
    None
}

fn procedural_delay(text: &str) -> Option<String> {
    if !contains_any(text, DELAY_JUSTIFICATION) {
        return None;
    }
    match (contains_any(text, LONG_WAIT), contains_any(text, EVIDENCE_AVAILABLE)) {
        (true, true) => Some(
            "Further delay is justified after a long wait and with the evidence already available"
                .to_string(),
        ),
        (true, false) => Some("Further delay is justified after a long wait".to_string()),
        (false, true) => {
            Some("Further delay is justified although the evidence is already available".to_string())
        }
        (false, false) => None,
    }
}

fn burden_of_proof(text: &str) -> Option<String> {
    if contains_any(text, PROOF_DEMAND)
        && contains_any(text, PROOF_EVASION)
        && contains_any(text, LONG_WAIT)
    {
        Some("Proof is demanded while the evidence is left unassessed over a long period".to_string())
    } else {
        None
    }
}

fn legal_mandate(text: &str) -> Option<(String, f64)> {
    if !contains_any(text, MANDATE_CITATION) {
        return None;
    }
    let violation = contains_any(text, VIOLATION_ACKNOWLEDGMENT);
    let outcome = contains_any(text, CONTRADICTORY_OUTCOME);
    match (violation, outcome) {
        (true, true) => Some((
            "The governing statute is cited, its breach acknowledged, and the outcome upheld anyway"
                .to_string(),
            LEGAL_MANDATE_FULL_CONFIDENCE,
        )),
        (true, false) => Some((
            "The governing statute is cited alongside an acknowledged breach".to_string(),
            LEGAL_MANDATE_PARTIAL_CONFIDENCE,
        )),
        (false, true) => Some((
            "The governing statute is cited while a contrary outcome is upheld".to_string(),
            LEGAL_MANDATE_PARTIAL_CONFIDENCE,
        )),
        (false, false) => None,
    }
}
