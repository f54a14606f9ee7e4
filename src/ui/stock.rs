//! Warehouse stock panel state.

use crate::domain::InventoryItem;

#[derive(Debug, Default)]
pub struct StockPanel {
    pub visible: bool,
    pub loading: bool,
    rows: Vec<InventoryItem>,
    error: Option<String>,
}

impl StockPanel {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, rows: Vec<InventoryItem>) {
        self.loading = false;
        self.error = None;
        self.rows = rows;
    }

    /// Keep the previous rows around; only the error line changes.
    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn rows(&self) -> &[InventoryItem] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Warehouse quantity for an item code, if the last pull listed it.
    pub fn quantity_for(&self, code: u32) -> Option<i64> {
        self.rows
            .iter()
            .find(|row| row.code == code)
            .map(|row| row.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, code: u32, quantity: i64) -> InventoryItem {
        InventoryItem {
            id,
            code,
            name: format!("item {}", code),
            quantity,
        }
    }

    #[test]
    fn quantity_is_matched_by_code() {
        let mut panel = StockPanel::default();
        panel.loaded(vec![row(1, 9103, 12), row(2, 9101, 4)]);
        assert_eq!(panel.quantity_for(9101), Some(4));
        assert_eq!(panel.quantity_for(1), None);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut panel = StockPanel::default();
        panel.loaded(vec![row(1, 9103, 12)]);
        panel.begin_loading();
        assert!(panel.loading);
        panel.failed("Network error".to_string());
        assert!(!panel.loading);
        assert_eq!(panel.error(), Some("Network error"));
        assert_eq!(panel.rows().len(), 1);
    }
}
