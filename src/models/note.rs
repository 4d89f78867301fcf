//! Supervisor notes reduced to the tokens that drive reclassification.
//!
//! Free text is scanned once; everything downstream works on [`NoteTokens`]
//! so the rule set can be tested without string matching.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static SUPPLEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+\s*(\d+)(?:[.,](\d+))?\s*h").expect("supplement marker regex")
});

/// A `+Nh` marker asking for part of the shift to be paid as supplemental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SupplementMarker {
    HalfHour,
    OneHour,
    OneAndHalfHours,
    TwoHours,
    TwoAndHalfHours,
}

impl SupplementMarker {
    /// Largest first: the order in which markers are applied.
    pub const DESCENDING: [SupplementMarker; 5] = [
        SupplementMarker::TwoAndHalfHours,
        SupplementMarker::TwoHours,
        SupplementMarker::OneAndHalfHours,
        SupplementMarker::OneHour,
        SupplementMarker::HalfHour,
    ];

    pub fn minutes(&self) -> i64 {
        match self {
            SupplementMarker::HalfHour => 30,
            SupplementMarker::OneHour => 60,
            SupplementMarker::OneAndHalfHours => 90,
            SupplementMarker::TwoHours => 120,
            SupplementMarker::TwoAndHalfHours => 150,
        }
    }

    pub fn from_minutes(minutes: i64) -> Option<Self> {
        Self::DESCENDING
            .into_iter()
            .find(|m| m.minutes() == minutes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplementMarker::HalfHour => "+0.5h",
            SupplementMarker::OneHour => "+1h",
            SupplementMarker::OneAndHalfHours => "+1.5h",
            SupplementMarker::TwoHours => "+2h",
            SupplementMarker::TwoAndHalfHours => "+2.5h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NoteToken {
    /// "renfort": the shift was a reinforcement.
    Renfort,
    Supplement(SupplementMarker),
}

impl NoteToken {
    /// Every recognized token in `notes`, case-insensitive. Repeated markers
    /// are reported each time; [`NoteTokens`] deduplicates them.
    pub fn scan(notes: &str) -> Vec<NoteToken> {
        let lower = notes.to_lowercase();
        let mut found = Vec::new();
        if lower.contains("renfort") {
            found.push(NoteToken::Renfort);
        }

        for caps in SUPPLEMENT_RE.captures_iter(&lower) {
            let whole: i64 = match caps[1].parse() {
                Ok(h) => h,
                Err(_) => continue,
            };
            let frac = caps.get(2).map(|m| m.as_str()).unwrap_or("0");
            let half = match frac.trim_end_matches('0') {
                "" => 0,
                "5" => 30,
                _ => {
                    tracing::debug!(marker = &caps[0], "ignoring supplement marker");
                    continue;
                }
            };

            match whole
                .checked_mul(60)
                .and_then(|m| SupplementMarker::from_minutes(m + half))
            {
                Some(marker) => found.push(NoteToken::Supplement(marker)),
                None => tracing::debug!(marker = &caps[0], "ignoring supplement marker"),
            }
        }

        found
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteToken::Renfort => "renfort",
            NoteToken::Supplement(m) => m.as_str(),
        }
    }
}

/// Recognized tokens of one note, deduplicated.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NoteTokens {
    pub renfort: bool,
    pub supplements: BTreeSet<SupplementMarker>,
}

impl NoteTokens {
    pub fn parse(notes: &str) -> Self {
        Self::from_tokens(NoteToken::scan(notes))
    }

    pub fn from_tokens<I: IntoIterator<Item = NoteToken>>(iter: I) -> Self {
        let mut tokens = NoteTokens::default();
        for tok in iter {
            match tok {
                NoteToken::Renfort => tokens.renfort = true,
                NoteToken::Supplement(m) => {
                    tokens.supplements.insert(m);
                }
            }
        }
        tokens
    }

    /// Markers in application order (largest first).
    pub fn supplements_descending(&self) -> impl Iterator<Item = SupplementMarker> + '_ {
        self.supplements.iter().rev().copied()
    }

    /// Tokens in application order: markers largest first, renfort last.
    pub fn tokens(&self) -> impl Iterator<Item = NoteToken> + '_ {
        self.supplements_descending()
            .map(NoteToken::Supplement)
            .chain(self.renfort.then_some(NoteToken::Renfort))
    }

    pub fn is_empty(&self) -> bool {
        !self.renfort && self.supplements.is_empty()
    }

    /// Compact description, e.g. `+1h renfort`.
    pub fn describe(&self) -> String {
        self.tokens()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
