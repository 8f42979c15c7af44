use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u32,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub date: NaiveDate,
    pub is_read: bool,
}

/// The persisted shape of `alerts.json`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AlertDocument {
    pub alerts: Vec<Alert>,
}

impl AlertDocument {
    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.is_read).count()
    }

    /// Ids grow from the current maximum; deleting the newest alert
    /// frees its id for reuse.
    pub fn next_id(&self) -> u32 {
        self.alerts.iter().map(|alert| alert.id).max().unwrap_or(0) + 1
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Alert> {
        self.alerts.iter_mut().find(|alert| alert.id == id)
    }

    pub fn remove(&mut self, id: u32) -> Option<Alert> {
        let index = self.alerts.iter().position(|alert| alert.id == id)?;
        Some(self.alerts.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: u32, is_read: bool) -> Alert {
        Alert {
            id,
            message: "Permit renewal due in 15 days".into(),
            kind: AlertKind::Warning,
            date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
            is_read,
        }
    }

    #[test]
    fn unread_count_ignores_read_alerts() {
        let document = AlertDocument {
            alerts: vec![alert(1, true), alert(2, false), alert(3, false)],
        };
        assert_eq!(document.unread_count(), 2);
    }

    #[test]
    fn next_id_allocates_above_the_maximum() {
        assert_eq!(AlertDocument::default().next_id(), 1);

        let document = AlertDocument {
            alerts: vec![alert(4, false), alert(2, false)],
        };
        assert_eq!(document.next_id(), 5);
    }

    #[test]
    fn wire_format_uses_type_and_is_read() {
        let encoded = serde_json::to_value(alert(1, false)).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "id": 1,
                "message": "Permit renewal due in 15 days",
                "type": "warning",
                "date": "2026-01-25",
                "isRead": false,
            })
        );
    }
}
