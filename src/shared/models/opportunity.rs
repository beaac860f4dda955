//! Opportunity Data Structure
//!
//! A job (or similar) listing that users can apply to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of opportunity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    #[default]
    Job,
    Internship,
    Freelance,
    Volunteer,
}

impl OpportunityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityKind::Job => "job",
            OpportunityKind::Internship => "internship",
            OpportunityKind::Freelance => "freelance",
            OpportunityKind::Volunteer => "volunteer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "job" => Some(OpportunityKind::Job),
            "internship" => Some(OpportunityKind::Internship),
            "freelance" => Some(OpportunityKind::Freelance),
            "volunteer" => Some(OpportunityKind::Volunteer),
            _ => None,
        }
    }
}

/// An opportunity listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Unique opportunity ID
    pub id: Uuid,
    /// User who posted the listing
    pub author: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: OpportunityKind,
    /// Users who applied; each user appears at most once
    #[serde(default)]
    pub applicants: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Opportunity {
    pub fn has_applied(&self, user: Uuid) -> bool {
        self.applicants.contains(&user)
    }
}
