//! Serde roundtrip and JsonSchema validation tests for entity and report types.

use chrono::{NaiveDate, NaiveTime, Utc};
use schemars::schema_for;
use campo_core::entities::*;
use campo_core::enums::*;
use campo_core::reports::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    lot_roundtrip,
    Lot,
    Lot {
        id: "lot-a3f8b2c1".into(),
        user_id: "user-1".into(),
        name: "Lote Nelore 2026".into(),
        entry_date: date("2026-02-01"),
        head_count: 48,
        capacity: Some(60),
        status: LotStatus::Active,
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    weighing_with_metrics_roundtrip,
    WeighingWithMetrics,
    WeighingWithMetrics {
        weighing: Weighing {
            id: "pes-00aa11bb".into(),
            user_id: "user-1".into(),
            animal_tag: "BR-0042".into(),
            lot_id: Some("lot-a3f8b2c1".into()),
            date: date("2026-03-01"),
            weight_kg: 330.5,
            notes: None,
            created_at: Utc::now(),
        },
        previous_weight_kg: Some(300.5),
        previous_date: Some(date("2026-01-30")),
        days_between: Some(30),
        gain_kg: Some(30.0),
        gmd: Some(1.0),
    }
);

roundtrip_and_validate!(
    expense_roundtrip,
    Expense,
    Expense {
        id: "gas-12345678".into(),
        user_id: "user-1".into(),
        lot_id: None,
        category: ExpenseCategory::AnimalPurchase,
        amount: 15_000.0,
        date: date("2026-01-15"),
        description: "Compra de bezerros".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    sale_roundtrip,
    Sale,
    Sale {
        id: "ven-deadbeef".into(),
        user_id: "user-1".into(),
        lot_id: "lot-a3f8b2c1".into(),
        date: date("2026-10-01"),
        head_count: 20,
        total_weight_kg: 10_800.0,
        price_per_unit: 310.0,
        price_unit: PriceUnit::Arroba,
        costs: 150_000.0,
        buyer: Some("Frigorífico Central".into()),
        revenue: 223_200.0,
        gross_profit: 73_200.0,
        margin_percent: Some(32.795_698_924_731_18),
        objective_reached: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: "tar-0badf00d".into(),
        user_id: "user-1".into(),
        title: "Vacinação contra aftosa".into(),
        category: TaskCategory::Health,
        due_date: date("2026-05-10"),
        due_time: Some(NaiveTime::from_hms_opt(7, 30, 0).unwrap()),
        status: TaskStatus::Pending,
        description: None,
        completed_at: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    herd_snapshot_roundtrip,
    HerdSnapshot,
    HerdSnapshot {
        total_lots: 3,
        active_lots: 2,
        total_heads: 90,
        total_capacity: 120,
        occupancy_percent: Some(75.0),
        last_weighing_date: Some(date("2026-09-30")),
        average_weight_kg: Some(412.5),
    }
);

roundtrip_and_validate!(
    expense_summary_roundtrip,
    ExpenseSummary,
    ExpenseSummary::from_parts(
        820.0,
        vec![CategoryTotal {
            category: ExpenseCategory::Feed,
            total: 820.0,
            count: 2,
        }],
        vec![MonthTotal {
            month: "2026-01".into(),
            total: 820.0,
        }],
    )
);

#[test]
fn new_sale_defaults_price_unit_to_arroba() {
    let json = serde_json::json!({
        "lot_id": "lot-a3f8b2c1",
        "date": "2026-10-01",
        "head_count": 10,
        "total_weight_kg": 5400.0,
        "price_per_unit": 300.0,
        "costs": 0.0
    });
    let sale: NewSale = serde_json::from_value(json).unwrap();
    assert_eq!(sale.price_unit, PriceUnit::Arroba);
    assert_eq!(sale.buyer, None);
}

#[test]
fn weighing_metrics_flatten_the_weighing() {
    let json = serde_json::to_value(WeighingWithMetrics {
        weighing: Weighing {
            id: "pes-00aa11bb".into(),
            user_id: "user-1".into(),
            animal_tag: "BR-0042".into(),
            lot_id: None,
            date: date("2026-03-01"),
            weight_kg: 330.0,
            notes: None,
            created_at: Utc::now(),
        },
        previous_weight_kg: None,
        previous_date: None,
        days_between: None,
        gain_kg: None,
        gmd: None,
    })
    .unwrap();
    assert_eq!(json["animal_tag"], "BR-0042");
    assert!(json["gmd"].is_null());
}
