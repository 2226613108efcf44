//! Table layouts for each printable type, with pt-BR number formatting.

use campo_core::entities::{Expense, Lot, Sale, Task, WeighingWithMetrics};
use campo_core::format::{
    format_arrobas, format_brl, format_gmd, format_kg, format_naive_date_br, format_percent,
};
use campo_core::reports::{ExpenseSummary, HerdSnapshot, LotPerformance, WeighingPerformance};
use serde::Serialize;

/// A value that can be printed with `--format table`.
pub trait TableView {
    fn headers() -> &'static [&'static str];
    fn rows(&self) -> Vec<Vec<String>>;
}

impl<T: TableView> TableView for Vec<T> {
    fn headers() -> &'static [&'static str] {
        T::headers()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter().flat_map(TableView::rows).collect()
    }
}

impl<T: TableView> TableView for Option<T> {
    fn headers() -> &'static [&'static str] {
        T::headers()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.as_ref().map(TableView::rows).unwrap_or_default()
    }
}

/// Acknowledgement printed after a delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: String,
}

impl TableView for Deleted {
    fn headers() -> &'static [&'static str] {
        &["deleted"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.deleted.clone()]]
    }
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

impl TableView for Lot {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "status", "entry", "heads", "capacity"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.name.clone(),
            self.status.to_string(),
            format_naive_date_br(self.entry_date),
            self.head_count.to_string(),
            or_dash(self.capacity.map(|c| c.to_string())),
        ]]
    }
}

impl TableView for WeighingWithMetrics {
    fn headers() -> &'static [&'static str] {
        &["id", "animal", "date", "weight", "gain", "days", "gmd"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let w = &self.weighing;
        vec![vec![
            w.id.clone(),
            w.animal_tag.clone(),
            format_naive_date_br(w.date),
            format_kg(w.weight_kg),
            or_dash(self.gain_kg.map(format_kg)),
            or_dash(self.days_between.map(|d| d.to_string())),
            format_gmd(self.gmd),
        ]]
    }
}

impl TableView for Expense {
    fn headers() -> &'static [&'static str] {
        &["id", "date", "category", "amount", "lot", "description"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            format_naive_date_br(self.date),
            self.category.label().to_string(),
            format_brl(self.amount),
            or_dash(self.lot_id.clone()),
            self.description.clone(),
        ]]
    }
}

impl TableView for Sale {
    fn headers() -> &'static [&'static str] {
        &["id", "date", "lot", "heads", "weight", "revenue", "profit", "margin", "objective"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            format_naive_date_br(self.date),
            self.lot_id.clone(),
            self.head_count.to_string(),
            format_arrobas(self.total_weight_kg),
            format_brl(self.revenue),
            format_brl(self.gross_profit),
            or_dash(self.margin_percent.map(format_percent)),
            yes_no(self.objective_reached),
        ]]
    }
}

impl TableView for Task {
    fn headers() -> &'static [&'static str] {
        &["id", "due", "time", "status", "category", "title"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            format_naive_date_br(self.due_date),
            or_dash(self.due_time.map(|t| t.format("%H:%M").to_string())),
            self.status.to_string(),
            self.category.to_string(),
            self.title.clone(),
        ]]
    }
}

impl TableView for HerdSnapshot {
    fn headers() -> &'static [&'static str] {
        &["lots", "active", "heads", "capacity", "occupancy", "last weighing", "avg weight"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.total_lots.to_string(),
            self.active_lots.to_string(),
            self.total_heads.to_string(),
            self.total_capacity.to_string(),
            or_dash(self.occupancy_percent.map(format_percent)),
            or_dash(self.last_weighing_date.map(format_naive_date_br)),
            or_dash(self.average_weight_kg.map(format_kg)),
        ]]
    }
}

impl TableView for WeighingPerformance {
    fn headers() -> &'static [&'static str] {
        &["animal", "weighings", "first", "last", "gain", "gmd"]
    }

    /// One row per animal plus an `average` footer when any GMD is defined.
    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = self
            .animals
            .iter()
            .map(|a| {
                vec![
                    a.animal_tag.clone(),
                    a.weighings.to_string(),
                    format_kg(a.first_weight_kg),
                    format_kg(a.last_weight_kg),
                    format_kg(a.gain_kg),
                    format_gmd(a.gmd),
                ]
            })
            .collect();
        if self.average_gmd.is_some() {
            rows.push(vec![
                "average".to_string(),
                self.total_weighings.to_string(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                format_gmd(self.average_gmd),
            ]);
        }
        rows
    }
}

impl TableView for LotPerformance {
    fn headers() -> &'static [&'static str] {
        &["lot", "status", "sold", "expenses", "revenue", "profit", "margin", "objective"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.name.clone(),
            self.status.to_string(),
            format!("{}/{}", self.heads_sold, self.head_count),
            format_brl(self.total_expenses),
            format_brl(self.total_revenue),
            format_brl(self.profit),
            or_dash(self.margin_percent.map(format_percent)),
            yes_no(self.objective_reached),
        ]]
    }
}

impl TableView for ExpenseSummary {
    fn headers() -> &'static [&'static str] {
        &["group", "entries", "total"]
    }

    /// Categories, then months, then the overall total.
    fn rows(&self) -> Vec<Vec<String>> {
        if self.is_empty() {
            return Vec::new();
        }
        let categories = self.by_category.iter().map(|c| {
            vec![
                c.category.label().to_string(),
                c.count.to_string(),
                format_brl(c.total),
            ]
        });
        let months = self
            .by_month
            .iter()
            .map(|m| vec![m.month.clone(), "-".to_string(), format_brl(m.total)]);
        let entries: u32 = self.by_category.iter().map(|c| c.count).sum();
        categories
            .chain(months)
            .chain(std::iter::once(vec![
                "total".to_string(),
                entries.to_string(),
                format_brl(self.total),
            ]))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use campo_core::enums::{ExpenseCategory, PriceUnit};
    use campo_core::reports::{CategoryTotal, MonthTotal};
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn sample_sale() -> Sale {
        let at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        Sale {
            id: "ven-1".to_string(),
            user_id: "user-1".to_string(),
            lot_id: "lot-1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            head_count: 1,
            total_weight_kg: 712.0,
            price_per_unit: 20.0,
            price_unit: PriceUnit::Kg,
            costs: 2_240.0,
            buyer: None,
            revenue: 14_240.0,
            gross_profit: 12_000.0,
            margin_percent: Some(84.269_662_921_348_31),
            objective_reached: true,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn sale_row_uses_brl_and_arrobas() {
        let row = &sample_sale().rows()[0];
        assert_eq!(row[4], "47,47 @");
        assert_eq!(row[5], "R$ 14.240,00");
        assert_eq!(row[7], "84,3%");
        assert_eq!(row[8], "yes");
    }

    #[test]
    fn expense_summary_rows_end_with_total() {
        let summary = ExpenseSummary::from_parts(
            3_600.25,
            vec![
                CategoryTotal {
                    category: ExpenseCategory::Feed,
                    total: 3_000.0,
                    count: 2,
                },
                CategoryTotal {
                    category: ExpenseCategory::Health,
                    total: 600.25,
                    count: 1,
                },
            ],
            vec![MonthTotal {
                month: "2026-02".to_string(),
                total: 3_600.25,
            }],
        );
        let rows = summary.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2], vec!["2026-02", "-", "R$ 3.600,25"]);
        assert_eq!(rows[3], vec!["total", "3", "R$ 3.600,25"]);
    }

    #[test]
    fn empty_summary_has_no_rows() {
        assert!(ExpenseSummary::from_parts(0.0, Vec::new(), Vec::new()).rows().is_empty());
    }
}
