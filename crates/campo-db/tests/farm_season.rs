//! End-to-end season flow through the public service API: a lot enters,
//! animals are weighed, costs accrue, part of the lot is sold and the reports
//! reflect every step.

use campo_core::entities::{NewExpense, NewLot, NewSale, NewWeighing};
use campo_core::enums::{ExpenseCategory, LotStatus, PriceUnit};
use campo_core::identity::AuthIdentity;
use campo_core::metrics::OBJETIVO_MARGEM;
use campo_core::reports::ReportFilter;
use campo_db::service::CampoService;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[tokio::test]
async fn season_from_entry_to_sale() {
    let svc = CampoService::new_local(":memory:", Some(AuthIdentity::new("user-1")))
        .await
        .unwrap();

    let lot = svc
        .create_lot(&NewLot {
            name: "Recria 2026".into(),
            entry_date: date("2026-01-02"),
            head_count: 2,
            capacity: Some(4),
            notes: Some("Pasto do córrego".into()),
        })
        .await
        .unwrap();

    let weighings = [
        ("BR-01", "2026-01-02", 300.0),
        ("BR-02", "2026-01-02", 280.0),
        ("BR-01", "2026-03-03", 372.0),
        ("BR-02", "2026-03-03", 340.0),
    ];
    for (tag, day, weight) in weighings {
        svc.create_weighing(&NewWeighing {
            animal_tag: tag.into(),
            lot_id: Some(lot.id.clone()),
            date: date(day),
            weight_kg: weight,
            notes: None,
        })
        .await
        .unwrap();
    }

    let history = svc.list_weighings_for_animal("BR-01").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].gain_kg, Some(72.0));
    assert!(close(history[1].gmd.unwrap(), 1.2));

    for (category, amount) in [(ExpenseCategory::Feed, 900.0), (ExpenseCategory::Health, 100.0)] {
        svc.create_expense(&NewExpense {
            lot_id: Some(lot.id.clone()),
            category,
            amount,
            date: date("2026-02-15"),
            description: category.label().to_string(),
        })
        .await
        .unwrap();
    }

    // 712 kg at R$ 20/kg = 14 240 revenue; 9 000 purchase cost
    let sale = svc
        .create_sale(&NewSale {
            lot_id: lot.id.clone(),
            date: date("2026-03-10"),
            head_count: 2,
            total_weight_kg: 712.0,
            price_per_unit: 20.0,
            price_unit: PriceUnit::Kg,
            costs: 9_000.0,
            buyer: Some("Frigorífico Central".into()),
        })
        .await
        .unwrap();
    assert!(close(sale.revenue, 14_240.0));
    assert_eq!(
        sale.objective_reached,
        sale.margin_percent.unwrap() >= OBJETIVO_MARGEM
    );

    let closed = svc.transition_lot(&lot.id, LotStatus::Closed).await.unwrap();
    assert_eq!(closed.status, LotStatus::Closed);

    let filter = ReportFilter::default();
    let perf = svc.weighing_performance(&filter).await.unwrap();
    assert_eq!(perf.animals_weighed, 2);
    assert_eq!(perf.best_animal.as_deref(), Some("BR-01"));

    let lots = svc.lot_performance(&filter).await.unwrap();
    assert_eq!(lots.len(), 1);
    assert!(close(lots[0].profit, 14_240.0 - 9_000.0 - 1_000.0));
    assert_eq!(lots[0].status, LotStatus::Closed);

    let summary = svc.expense_summary(&filter).await.unwrap();
    assert!(close(summary.total, 1_000.0));
    assert_eq!(summary.by_month.len(), 1);

    let herd = svc.herd_snapshot(&filter).await.unwrap().unwrap();
    assert_eq!(herd.total_lots, 1);
    assert_eq!(herd.active_lots, 0);
    assert_eq!(herd.last_weighing_date, Some(date("2026-03-03")));
}
