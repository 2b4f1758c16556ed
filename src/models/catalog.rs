use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card accent colors, assigned by position
pub const CARD_PALETTE: [&str; 5] = ["#ef4444", "#f59e0b", "#22c55e", "#3b82f6", "#8b5cf6"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: String,
}

/// Catalog item shown as a dashboard card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub year_level: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Subject {
    pub fn is_active(&self) -> bool {
        !matches!(self.status.as_deref(), Some(s) if s.eq_ignore_ascii_case("inactive"))
    }

    pub fn year_label(&self) -> String {
        self.year_level
            .map(year_label)
            .unwrap_or_else(|| "Year N/A".to_string())
    }
}

pub fn year_label(level: u32) -> String {
    match level {
        1 => "1st Year".to_string(),
        2 => "2nd Year".to_string(),
        3 => "3rd Year".to_string(),
        4 => "4th Year".to_string(),
        n => format!("{} Year", n),
    }
}

pub fn card_color(index: usize) -> &'static str {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

/// Year dropdown value: "All Years" or an exact year level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(u32),
}

impl YearFilter {
    pub fn matches(&self, subject: &Subject) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(level) => subject.year_level == Some(*level),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("All Years"),
            YearFilter::Year(level) => f.write_str(&year_label(*level)),
        }
    }
}

impl FromStr for YearFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "All Years" => Ok(YearFilter::All),
            "1st Year" => Ok(YearFilter::Year(1)),
            "2nd Year" => Ok(YearFilter::Year(2)),
            "3rd Year" => Ok(YearFilter::Year(3)),
            "4th Year" => Ok(YearFilter::Year(4)),
            other => Err(format!("Unknown year filter: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_labels() {
        assert_eq!(year_label(1), "1st Year");
        assert_eq!(year_label(3), "3rd Year");
        assert_eq!(year_label(5), "5 Year");
        let subject = Subject {
            code: "GE1".to_string(),
            title: "Ethics".to_string(),
            year_level: None,
            status: None,
        };
        assert_eq!(subject.year_label(), "Year N/A");
    }

    #[test]
    fn palette_wraps_by_position() {
        assert_eq!(card_color(0), "#ef4444");
        assert_eq!(card_color(5), "#ef4444");
        assert_eq!(card_color(7), "#22c55e");
    }

    #[test]
    fn year_filter_round_trips_dropdown_values() {
        assert_eq!("All Years".parse::<YearFilter>(), Ok(YearFilter::All));
        assert_eq!("2nd Year".parse::<YearFilter>(), Ok(YearFilter::Year(2)));
        assert_eq!(YearFilter::Year(4).to_string(), "4th Year");
        assert!("Graduate".parse::<YearFilter>().is_err());
    }

    #[test]
    fn inactive_subjects_are_flagged() {
        let subject: Subject =
            serde_json::from_str(r#"{"code":"IT9","title":"Old","yearLevel":2,"status":"inactive"}"#).unwrap();
        assert!(!subject.is_active());
    }
}
