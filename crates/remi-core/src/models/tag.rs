//! Reminder category tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category label for a reminder.
///
/// The remote service defines this closed set; unrecognized strings are
/// rejected at the gateway boundary instead of being carried around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderTag {
    Medication,
    Appointment,
    Event,
    Task,
    Personal,
    Work,
    Finance,
    Health,
    Travel,
    Social,
    Education,
    Leisure,
    Other,
}

impl ReminderTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medication => "MEDICATION",
            Self::Appointment => "APPOINTMENT",
            Self::Event => "EVENT",
            Self::Task => "TASK",
            Self::Personal => "PERSONAL",
            Self::Work => "WORK",
            Self::Finance => "FINANCE",
            Self::Health => "HEALTH",
            Self::Travel => "TRAVEL",
            Self::Social => "SOCIAL",
            Self::Education => "EDUCATION",
            Self::Leisure => "LEISURE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ReminderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderTag {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MEDICATION" => Ok(Self::Medication),
            "APPOINTMENT" => Ok(Self::Appointment),
            "EVENT" => Ok(Self::Event),
            "TASK" => Ok(Self::Task),
            "PERSONAL" => Ok(Self::Personal),
            "WORK" => Ok(Self::Work),
            "FINANCE" => Ok(Self::Finance),
            "HEALTH" => Ok(Self::Health),
            "TRAVEL" => Ok(Self::Travel),
            "SOCIAL" => Ok(Self::Social),
            "EDUCATION" => Ok(Self::Education),
            "LEISURE" => Ok(Self::Leisure),
            "OTHER" => Ok(Self::Other),
            other => Err(format!("unknown reminder tag: {other}")),
        }
    }
}

/// Deduplicate tags preserving first-insertion order, defaulting an empty
/// set to `OTHER`.
#[must_use]
pub fn normalize_tags(tags: Vec<ReminderTag>) -> Vec<ReminderTag> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    if seen.is_empty() {
        seen.push(ReminderTag::Other);
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tags_deduplicates_preserving_order() {
        let tags = normalize_tags(vec![
            ReminderTag::Health,
            ReminderTag::Medication,
            ReminderTag::Health,
        ]);
        assert_eq!(tags, vec![ReminderTag::Health, ReminderTag::Medication]);
    }

    #[test]
    fn normalize_tags_defaults_to_other() {
        assert_eq!(normalize_tags(Vec::new()), vec![ReminderTag::Other]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("medication".parse(), Ok(ReminderTag::Medication));
        assert_eq!(" Social ".parse(), Ok(ReminderTag::Social));
        assert!("URGENT".parse::<ReminderTag>().is_err());
    }

    #[test]
    fn wire_form_is_screaming_snake_case() {
        let json = serde_json::to_string(&ReminderTag::Appointment).unwrap();
        assert_eq!(json, "\"APPOINTMENT\"");
    }
}
