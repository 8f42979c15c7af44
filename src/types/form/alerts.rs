use chrono::NaiveDate;
use serde::Deserialize;

use crate::schema::AlertKind;

#[derive(Debug, Deserialize)]
pub struct MarkRead {
    pub id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct Create {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AlertKind>,
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_wire_field_names() {
        let form: Create = serde_json::from_str(
            r#"{ "message": "Permit renewal due in 15 days", "type": "warning" }"#,
        )
        .unwrap();

        assert_eq!(form.message.as_deref(), Some("Permit renewal due in 15 days"));
        assert_eq!(form.kind, Some(AlertKind::Warning));
        assert_eq!(form.date, None);
    }
}
