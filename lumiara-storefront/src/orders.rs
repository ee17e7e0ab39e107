//! Order history shown on the profile page

use serde::{Deserialize, Serialize};

/// Past order summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    /// Display total (`"€118"`)
    pub total: String,
    /// Number of items
    pub items: u32,
    pub status: String,
    /// Product names
    pub products: Vec<String>,
}

/// Order history, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHistory {
    records: Vec<OrderRecord>,
}

impl OrderHistory {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, total: &str) -> OrderRecord {
        OrderRecord {
            id,
            date: "2024-01-15".to_string(),
            total: total.to_string(),
            items: 1,
            status: "Доставлен".to_string(),
            products: vec!["Hydra Glow Cream".to_string()],
        }
    }

    #[test]
    fn test_get_by_id() {
        let history = OrderHistory::new(vec![record(1, "€118"), record(2, "€49")]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(2).unwrap().total, "€49");
        assert!(history.get(3).is_none());
        assert_eq!(history.records()[0].id, 1);
    }

    #[test]
    fn test_clear() {
        let mut history = OrderHistory::new(vec![record(1, "€118")]);
        history.clear();

        assert!(history.is_empty());
        assert!(history.get(1).is_none());
    }
}
