use chrono::NaiveDate;
use serde::Deserialize;

use crate::schema::{ChecklistItem, ItemStatus};

#[derive(Debug, Deserialize)]
pub struct MarkCompleted {
    pub id: Option<u32>,
}

/// Partial update of one checklist item. Only the provided fields are
/// applied; the item id never changes regardless of the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub title: Option<String>,
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    pub expiry_date: Option<NaiveDate>,
}

impl UpdateItem {
    pub fn apply(&self, item: &mut ChecklistItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(expiry_date) = self.expiry_date {
            item.expiry_date = expiry_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> ChecklistItem {
        ChecklistItem {
            id: 3,
            title: "Renew food safety permit".into(),
            category: "Permits".into(),
            status: ItemStatus::Pending,
            expiry_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        }
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut item = sample_item();
        let update: UpdateItem =
            serde_json::from_str(r#"{ "status": "completed" }"#).unwrap();

        update.apply(&mut item);
        assert_eq!(item.status, ItemStatus::Completed);
        assert_eq!(item.title, "Renew food safety permit");
        assert_eq!(item.id, 3);
    }

    #[test]
    fn body_cannot_change_the_id() {
        let mut item = sample_item();
        let update: UpdateItem =
            serde_json::from_str(r#"{ "id": 99, "title": "Renamed" }"#).unwrap();

        update.apply(&mut item);
        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Renamed");
    }
}
