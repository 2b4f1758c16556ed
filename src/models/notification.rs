use serde::{Deserialize, Deserializer, Serialize};

/// Badge shows the exact count up to this value, then "99+"
pub const BADGE_CAP: usize = 99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,

    /// course | subject | material | system
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Backend column is nullable; null counts as unread
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_read: bool,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl Notification {
    pub fn kind_label(&self) -> &str {
        self.kind.as_deref().filter(|k| !k.is_empty()).unwrap_or("system")
    }

    pub fn time_label(&self) -> &str {
        self.created_at.as_deref().filter(|t| !t.is_empty()).unwrap_or("Just now")
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Ids arrive from JS as numbers; only non-negative integers within the
/// safe-integer range are accepted
pub fn notification_id_from_js(value: f64) -> Option<u64> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER {
        Some(value as u64)
    } else {
        None
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// `None` hides the badge
pub fn badge_text(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: u64, is_read: bool) -> Notification {
        Notification {
            id,
            title: format!("N{}", id),
            message: "msg".to_string(),
            kind: None,
            is_read,
            created_at: None,
        }
    }

    #[test]
    fn badge_counts_unread_only() {
        let list: Vec<_> = (0..3)
            .map(|i| notification(i, false))
            .chain((3..5).map(|i| notification(i, true)))
            .collect();
        assert_eq!(unread_count(&list), 3);
        assert_eq!(badge_text(unread_count(&list)).as_deref(), Some("3"));
    }

    #[test]
    fn badge_caps_at_99_plus() {
        let list: Vec<_> = (0..150).map(|i| notification(i, false)).collect();
        assert_eq!(badge_text(unread_count(&list)).as_deref(), Some("99+"));
        assert_eq!(badge_text(99).as_deref(), Some("99"));
        assert_eq!(badge_text(0), None);
    }

    #[test]
    fn parses_backend_shape() {
        let json = r#"[{"id":4,"userId":1,"title":"New material","message":"Week 3 slides","type":"material","relatedId":"IT101","isRead":false,"createdAt":"2025-05-01T10:00:00"}]"#;
        let list: Vec<Notification> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].kind_label(), "material");
        assert_eq!(list[0].time_label(), "2025-05-01T10:00:00");
        assert!(!list[0].is_read);
    }

    #[test]
    fn null_read_flag_counts_as_unread() {
        let json = r#"[{"id":1,"title":"A","message":"m","isRead":null},{"id":2,"title":"B","message":"m","isRead":false},{"id":3,"title":"C","message":"m","isRead":true}]"#;
        let list: Vec<Notification> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 3);
        assert!(!list[0].is_read);
        assert_eq!(unread_count(&list), 2);
    }

    #[test]
    fn js_ids_keep_full_long_range() {
        assert_eq!(notification_id_from_js(7.0), Some(7));
        assert_eq!(notification_id_from_js(5_000_000_000.0), Some(5_000_000_000));
        assert_eq!(notification_id_from_js(-1.0), None);
        assert_eq!(notification_id_from_js(1.5), None);
        assert_eq!(notification_id_from_js(f64::NAN), None);
    }

    #[test]
    fn missing_fields_get_display_defaults() {
        let n = notification(1, true);
        assert_eq!(n.kind_label(), "system");
        assert_eq!(n.time_label(), "Just now");
    }
}
