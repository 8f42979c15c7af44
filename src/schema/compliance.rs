use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Completed,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub status: ItemStatus,
    pub expiry_date: NaiveDate,
}

/// Derived counters stored alongside the checklist and recomputed on
/// every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
}

/// The persisted shape of `compliance.json`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ComplianceDocument {
    pub checklist: Vec<ChecklistItem>,
    pub summary: Summary,
}

impl ComplianceDocument {
    pub fn completed(&self) -> usize {
        self.checklist
            .iter()
            .filter(|item| item.status == ItemStatus::Completed)
            .count()
    }

    /// Share of completed items, rounded to whole percent. An empty
    /// checklist counts as fully compliant.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score(&self) -> u32 {
        let total = self.checklist.len();
        if total == 0 {
            return 100;
        }
        ((self.completed() as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|item| item.id == id)
    }

    /// Flips an item between done and not-done: `completed` goes back
    /// to `pending`, anything else (including `expired`) becomes
    /// `completed`. Recomputes the summary on success.
    pub fn toggle(&mut self, id: u32) -> Option<&ChecklistItem> {
        let index = self.checklist.iter().position(|item| item.id == id)?;

        let item = &mut self.checklist[index];
        item.status = if item.status == ItemStatus::Completed {
            ItemStatus::Pending
        } else {
            ItemStatus::Completed
        };

        self.recompute_summary();
        Some(&self.checklist[index])
    }

    pub fn remove(&mut self, id: u32) -> Option<ChecklistItem> {
        let index = self.checklist.iter().position(|item| item.id == id)?;
        let removed = self.checklist.remove(index);
        self.recompute_summary();
        Some(removed)
    }

    pub fn recompute_summary(&mut self) {
        self.summary = Summary {
            completed: self.completed(),
            total: self.checklist.len(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, status: ItemStatus) -> ChecklistItem {
        ChecklistItem {
            id,
            title: format!("Task #{id}"),
            category: "Permits".into(),
            status,
            expiry_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        }
    }

    fn build_document(statuses: &[ItemStatus]) -> ComplianceDocument {
        let mut document = ComplianceDocument {
            checklist: statuses
                .iter()
                .enumerate()
                .map(|(i, status)| item(i as u32 + 1, *status))
                .collect(),
            summary: Summary::default(),
        };
        document.recompute_summary();
        document
    }

    #[test]
    fn score_rounds_to_whole_percent() {
        use ItemStatus::{Completed, Pending};

        let document = build_document(&[Completed, Pending, Pending]);
        // 1/3 rounds to 33
        assert_eq!(document.score(), 33);

        let document = build_document(&[Completed, Completed, Pending]);
        // 2/3 rounds to 67
        assert_eq!(document.score(), 67);
    }

    #[test]
    fn empty_checklist_scores_full_marks() {
        let document = ComplianceDocument::default();
        assert_eq!(document.score(), 100);
    }

    #[test]
    fn toggle_flips_and_recounts() {
        use ItemStatus::{Completed, Expired, Pending};

        let mut document = build_document(&[Pending, Completed, Expired]);
        assert_eq!(document.summary.completed, 1);

        let toggled = document.toggle(1).unwrap();
        assert_eq!(toggled.status, Completed);
        assert_eq!(document.summary.completed, 2);
        assert_eq!(document.score(), 67);

        // completed goes back to pending
        let toggled = document.toggle(2).unwrap();
        assert_eq!(toggled.status, Pending);
        assert_eq!(document.summary.completed, 1);

        // expired items can be checked off directly
        let toggled = document.toggle(3).unwrap();
        assert_eq!(toggled.status, Completed);

        assert!(document.toggle(99).is_none());
    }

    #[test]
    fn remove_recounts() {
        use ItemStatus::{Completed, Pending};

        let mut document = build_document(&[Completed, Pending]);
        let removed = document.remove(1).unwrap();
        assert_eq!(removed.status, Completed);
        assert_eq!(document.summary, Summary { completed: 0, total: 1 });

        assert!(document.remove(1).is_none());
    }
}
