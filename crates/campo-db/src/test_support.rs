//! Shared test utilities for campo-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use campo_core::entities::{NewExpense, NewLot, NewSale, NewTask, NewWeighing};
    use campo_core::enums::{ExpenseCategory, PriceUnit, TaskCategory};
    use campo_core::identity::AuthIdentity;
    use chrono::NaiveDate;

    use crate::CampoDb;
    use crate::service::CampoService;

    pub const TEST_USER: &str = "user-1";

    /// In-memory service authenticated as [`TEST_USER`].
    pub async fn test_service() -> CampoService {
        let db = CampoDb::open_local(":memory:").await.unwrap();
        CampoService::from_db(db, Some(AuthIdentity::new(TEST_USER)))
    }

    /// In-memory service with no identity attached.
    pub async fn test_service_without_identity() -> CampoService {
        let db = CampoDb::open_local(":memory:").await.unwrap();
        CampoService::from_db(db, None)
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn new_lot(name: &str, entry_date: &str, head_count: u32) -> NewLot {
        NewLot {
            name: name.into(),
            entry_date: date(entry_date),
            head_count,
            capacity: None,
            notes: None,
        }
    }

    /// Create a lot and return its ID.
    pub async fn create_test_lot(svc: &CampoService, name: &str) -> String {
        svc.create_lot(&new_lot(name, "2026-01-10", 20)).await.unwrap().id
    }

    pub fn new_weighing(animal_tag: &str, day: &str, weight_kg: f64) -> NewWeighing {
        NewWeighing {
            animal_tag: animal_tag.into(),
            lot_id: None,
            date: date(day),
            weight_kg,
            notes: None,
        }
    }

    pub fn new_expense(category: ExpenseCategory, amount: f64, day: &str) -> NewExpense {
        NewExpense {
            lot_id: None,
            category,
            amount,
            date: date(day),
            description: format!("{} {day}", category.label()),
        }
    }

    pub fn new_sale(lot_id: &str, day: &str, price_per_unit: f64, costs: f64) -> NewSale {
        NewSale {
            lot_id: lot_id.into(),
            date: date(day),
            head_count: 10,
            total_weight_kg: 4500.0,
            price_per_unit,
            price_unit: PriceUnit::Arroba,
            costs,
            buyer: None,
        }
    }

    pub fn new_task(title: &str, due_date: &str) -> NewTask {
        NewTask {
            title: title.into(),
            category: TaskCategory::Other,
            due_date: date(due_date),
            due_time: None,
            description: None,
        }
    }
}
