//! Core types for the Campus Placement Portal

use serde::{Deserialize, Serialize};

/// Key of a student cohort, e.g. `btech-2026`.
///
/// Doubles as the section element id, the navigation entry key and the
/// history fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CohortKey(String);

impl CohortKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the card container inside this cohort's section
    pub fn container_id(&self) -> String {
        format!("{}-cards", self.0)
    }

    /// History fragment for this cohort, including the leading `#`
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }

    /// Parse a history fragment with or without its leading `#`.
    ///
    /// Returns `None` for an empty fragment.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let key = fragment.trim_start_matches('#');
        if key.is_empty() {
            None
        } else {
            Some(Self(key.to_string()))
        }
    }
}

impl From<&str> for CohortKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl std::fmt::Display for CohortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a registration counter.
///
/// Derived from the cohort key and the employer name so that it is stable
/// across reloads and unique per (cohort, employer) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Derive the id for an employer within a cohort.
    ///
    /// The employer name is lower-cased and every whitespace run becomes a
    /// single `-`: `("btech-2027", "Goldman Sachs")` -> `btech-2027-goldman-sachs`.
    pub fn derive(cohort: &CohortKey, employer: &str) -> Self {
        let normalized = employer
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(format!("{}-{}", cohort.as_str(), normalized))
    }

    /// Wrap an already-derived id (e.g. one read back from storage)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the on-screen counter for this listing
    pub fn count_element_id(&self) -> String {
        format!("count-{}", self.0)
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employment-type tag shown on each card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    FullTime,
    Internship,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One opportunity, defined at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub employer: &'static str,
    pub role: &'static str,
    /// Free-form, currency-localized (e.g. `₹45 LPA`, `₹80K PM`)
    pub compensation: &'static str,
    pub deadline: &'static str,
    /// External application form, opened verbatim
    pub form_url: &'static str,
    pub employment: EmploymentType,
}

impl Listing {
    /// Counter id of this listing within `cohort`
    pub fn id_in(&self, cohort: &CohortKey) -> ListingId {
        ListingId::derive(cohort, self.employer)
    }
}

/// A named group of listings with its own section and navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub key: CohortKey,
    /// Section heading
    pub title: &'static str,
    /// Line under the section heading
    pub subtitle: &'static str,
    /// Short label for the navigation menu
    pub nav_label: &'static str,
    pub listings: Vec<Listing>,
}
