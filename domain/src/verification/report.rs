//! Article report returned by the URL pipeline.

use super::verdict::Verdict;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Summary, key claims, and fact-checks for one article
///
/// Produced by a single combined oracle call. Missing fields in the oracle
/// output default to empty. `keyClaims` and `factChecks` are read entry by
/// entry: a malformed entry is skipped without losing the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleReport {
    /// Free-text summary of the article
    pub summary: String,
    /// Key claims in extraction order
    #[serde(deserialize_with = "lenient_key_claims")]
    pub key_claims: Vec<String>,
    /// Fact-check verdicts for the key claims
    #[serde(deserialize_with = "lenient_fact_checks")]
    pub fact_checks: Vec<Verdict>,
}

/// A `factChecks` entry that could not be turned into a [`Verdict`]
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedFactCheck {
    /// Position in the oracle's `factChecks` array
    pub index: usize,
    pub reason: String,
}

/// An [`ArticleReport`] read from oracle output, plus the entries it dropped
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArticleReport {
    pub report: ArticleReport,
    pub rejected: Vec<RejectedFactCheck>,
}

/// Split `factChecks` entries into usable verdicts and rejects.
///
/// An entry is usable when it deserializes as a [`Verdict`] with a
/// non-blank claim.
pub fn parse_fact_checks(entries: Vec<Value>) -> (Vec<Verdict>, Vec<RejectedFactCheck>) {
    let mut verdicts = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Verdict>(entry) {
            Ok(verdict) if !verdict.claim.trim().is_empty() => verdicts.push(verdict),
            Ok(_) => rejected.push(RejectedFactCheck {
                index,
                reason: "blank claim".to_string(),
            }),
            Err(e) => rejected.push(RejectedFactCheck {
                index,
                reason: e.to_string(),
            }),
        }
    }
    (verdicts, rejected)
}

fn lenient_key_claims<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect())
}

fn lenient_fact_checks<'de, D>(deserializer: D) -> Result<Vec<Verdict>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(parse_fact_checks(entries).0)
}

impl ArticleReport {
    /// The safe default returned when the oracle gives nothing usable
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read oracle output, keeping track of the fact-checks that were dropped.
    ///
    /// Fails only when the top-level shape is unusable (not an object, or a
    /// non-string `summary`).
    pub fn from_oracle_output(mut value: Value) -> Result<ParsedArticleReport, serde_json::Error> {
        let fact_checks = value
            .as_object_mut()
            .and_then(|map| map.remove("factChecks"));
        let mut report: ArticleReport = serde_json::from_value(value)?;

        let rejected = match fact_checks {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => {
                let (verdicts, rejected) = parse_fact_checks(entries);
                report.fact_checks = verdicts;
                rejected
            }
            Some(_) => vec![RejectedFactCheck {
                index: 0,
                reason: "factChecks is not an array".to_string(),
            }],
        };

        Ok(ParsedArticleReport { report, rejected })
    }

    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty() && self.key_claims.is_empty() && self.fact_checks.is_empty()
    }

    /// Drop blank claims and clamp confidence scores into [0, 1].
    ///
    /// Fact-checks with a blank claim are dropped; the claim text is the
    /// only field a verdict must always carry.
    pub fn sanitized(mut self) -> Self {
        self.summary = self.summary.trim().to_string();
        self.key_claims = self
            .key_claims
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        self.fact_checks = self
            .fact_checks
            .into_iter()
            .filter(|v| !v.claim.trim().is_empty())
            .map(|mut v| {
                v.confidence_score = v
                    .confidence_score
                    .filter(|c| c.is_finite())
                    .map(|c| c.clamp(0.0, 1.0));
                v
            })
            .collect();
        self
    }
}
