//! Sale repository.
//!
//! Revenue, gross profit, margin and the objective flag are recomputed with
//! [`SaleFigures`] on every create and update and persisted with the row.

use campo_core::entities::{NewSale, Sale};
use campo_core::ids::PREFIX_SALE;
use campo_core::metrics::SaleFigures;
use campo_core::validation::Validate;

use crate::error::DatabaseError;
use crate::helpers::{
    date_text, get_bool, get_f64, get_opt_f64, get_opt_string, get_u32, now, opt_value,
    parse_date, parse_datetime, parse_enum, timestamp,
};
use crate::service::CampoService;
use crate::updates::sale::SaleUpdate;

const SELECT_COLS: &str = "id, user_id, lot_id, date, head_count, total_weight_kg, \
     price_per_unit, price_unit, costs, buyer, revenue, gross_profit, margin_percent, \
     objective_reached, created_at, updated_at";

fn row_to_sale(row: &libsql::Row) -> Result<Sale, DatabaseError> {
    Ok(Sale {
        id: row.get(0)?,
        user_id: row.get(1)?,
        lot_id: row.get(2)?,
        date: parse_date(&row.get::<String>(3)?)?,
        head_count: get_u32(row, 4)?,
        total_weight_kg: get_f64(row, 5)?,
        price_per_unit: get_f64(row, 6)?,
        price_unit: parse_enum(&row.get::<String>(7)?)?,
        costs: get_f64(row, 8)?,
        buyer: get_opt_string(row, 9)?,
        revenue: get_f64(row, 10)?,
        gross_profit: get_f64(row, 11)?,
        margin_percent: get_opt_f64(row, 12)?,
        objective_reached: get_bool(row, 13)?,
        created_at: parse_datetime(&row.get::<String>(14)?)?,
        updated_at: parse_datetime(&row.get::<String>(15)?)?,
    })
}

fn figures_for(input: &NewSale) -> SaleFigures {
    SaleFigures::compute(
        input.total_weight_kg,
        input.head_count,
        input.price_per_unit,
        input.price_unit,
        input.costs,
    )
}

impl CampoService {
    pub async fn create_sale(&self, input: &NewSale) -> Result<Sale, DatabaseError> {
        let user_id = self.require_user()?;
        input.validate()?;
        self.ensure_lot(&input.lot_id).await?;

        let figures = figures_for(input);
        let now = now();
        let id = self.db().generate_id(PREFIX_SALE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO sales ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    input.lot_id.as_str(),
                    date_text(input.date),
                    i64::from(input.head_count),
                    input.total_weight_kg,
                    input.price_per_unit,
                    input.price_unit.as_str(),
                    input.costs,
                    opt_value(input.buyer.clone()),
                    figures.revenue,
                    figures.gross_profit,
                    opt_value(figures.margin_percent),
                    i64::from(figures.objective_reached),
                    timestamp(now),
                    timestamp(now)
                ],
            )
            .await?;

        tracing::info!(
            sale_id = %id,
            lot_id = %input.lot_id,
            revenue = figures.revenue,
            objective_reached = figures.objective_reached,
            "sale recorded"
        );

        Ok(Sale {
            id,
            user_id: user_id.to_string(),
            lot_id: input.lot_id.clone(),
            date: input.date,
            head_count: input.head_count,
            total_weight_kg: input.total_weight_kg,
            price_per_unit: input.price_per_unit,
            price_unit: input.price_unit,
            costs: input.costs,
            buyer: input.buyer.clone(),
            revenue: figures.revenue,
            gross_profit: figures.gross_profit,
            margin_percent: figures.margin_percent,
            objective_reached: figures.objective_reached,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_sale(&self, id: &str) -> Result<Sale, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM sales WHERE id = ?1 AND user_id = ?2"),
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("sale", id))?;
        row_to_sale(&row)
    }

    /// Sales of the current user, most recent first.
    pub async fn list_sales(&self) -> Result<Vec<Sale>, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM sales WHERE user_id = ?1
                     ORDER BY date DESC, created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut sales = Vec::new();
        while let Some(row) = rows.next().await? {
            sales.push(row_to_sale(&row)?);
        }
        Ok(sales)
    }

    /// Sales out of one lot, most recent first.
    pub async fn list_sales_for_lot(&self, lot_id: &str) -> Result<Vec<Sale>, DatabaseError> {
        let user_id = self.require_user()?;
        self.ensure_lot(lot_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM sales WHERE user_id = ?1 AND lot_id = ?2
                     ORDER BY date DESC, created_at DESC"
                ),
                libsql::params![user_id, lot_id],
            )
            .await?;

        let mut sales = Vec::new();
        while let Some(row) = rows.next().await? {
            sales.push(row_to_sale(&row)?);
        }
        Ok(sales)
    }

    /// Apply `update` and recompute the derived figures from the merged row.
    ///
    /// All sale columns are rewritten so the stored figures always match the
    /// stored inputs.
    pub async fn update_sale(&self, id: &str, update: SaleUpdate) -> Result<Sale, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_sale(id).await?;
        if update.is_empty() {
            return Ok(current);
        }

        let merged = NewSale {
            lot_id: current.lot_id.clone(),
            date: update.date.unwrap_or(current.date),
            head_count: update.head_count.unwrap_or(current.head_count),
            total_weight_kg: update.total_weight_kg.unwrap_or(current.total_weight_kg),
            price_per_unit: update.price_per_unit.unwrap_or(current.price_per_unit),
            price_unit: update.price_unit.unwrap_or(current.price_unit),
            costs: update.costs.unwrap_or(current.costs),
            buyer: update.buyer.clone().unwrap_or_else(|| current.buyer.clone()),
        };
        merged.validate()?;

        let figures = figures_for(&merged);
        let now = now();

        self.db()
            .conn()
            .execute(
                "UPDATE sales SET date = ?1, head_count = ?2, total_weight_kg = ?3,
                     price_per_unit = ?4, price_unit = ?5, costs = ?6, buyer = ?7,
                     revenue = ?8, gross_profit = ?9, margin_percent = ?10,
                     objective_reached = ?11, updated_at = ?12
                 WHERE id = ?13 AND user_id = ?14",
                libsql::params![
                    date_text(merged.date),
                    i64::from(merged.head_count),
                    merged.total_weight_kg,
                    merged.price_per_unit,
                    merged.price_unit.as_str(),
                    merged.costs,
                    opt_value(merged.buyer.clone()),
                    figures.revenue,
                    figures.gross_profit,
                    opt_value(figures.margin_percent),
                    i64::from(figures.objective_reached),
                    timestamp(now),
                    id,
                    user_id
                ],
            )
            .await?;

        tracing::info!(
            sale_id = id,
            changes = ?update,
            objective_reached = figures.objective_reached,
            "sale updated"
        );

        Ok(Sale {
            date: merged.date,
            head_count: merged.head_count,
            total_weight_kg: merged.total_weight_kg,
            price_per_unit: merged.price_per_unit,
            price_unit: merged.price_unit,
            costs: merged.costs,
            buyer: merged.buyer,
            revenue: figures.revenue,
            gross_profit: figures.gross_profit,
            margin_percent: figures.margin_percent,
            objective_reached: figures.objective_reached,
            updated_at: now,
            ..current
        })
    }

    pub async fn delete_sale(&self, id: &str) -> Result<(), DatabaseError> {
        let user_id = self.require_user()?;
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM sales WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("sale", id));
        }
        tracing::info!(sale_id = id, "sale deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{create_test_lot, new_sale, test_service};
    use crate::updates::sale::SaleUpdateBuilder;
    use campo_core::enums::PriceUnit;
    use campo_core::metrics::OBJETIVO_MARGEM;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-6, "{actual} != {expected}");
    }

    #[tokio::test]
    async fn create_sale_persists_derived_figures() {
        let svc = test_service().await;
        let lot_id = create_test_lot(&svc, "Lote A").await;

        // 4500 kg = 300 @ at 300 → 90 000 revenue; 60 000 costs → 33.3 %
        let sale = svc
            .create_sale(&new_sale(&lot_id, "2026-09-01", 300.0, 60_000.0))
            .await
            .unwrap();

        assert!(sale.id.starts_with("ven-"));
        assert_close(sale.revenue, 90_000.0);
        assert_close(sale.gross_profit, 30_000.0);
        assert_close(sale.margin_percent.unwrap(), 100.0 / 3.0);
        assert!(sale.objective_reached);

        let fetched = svc.get_sale(&sale.id).await.unwrap();
        assert_eq!(fetched, sale);
    }

    #[tokio::test]
    async fn objective_flag_matches_margin() {
        let svc = test_service().await;
        let lot_id = create_test_lot(&svc, "Lote A").await;

        for costs in [0.0, 50_000.0, 72_000.0, 80_000.0, 95_000.0] {
            let sale = svc
                .create_sale(&new_sale(&lot_id, "2026-09-01", 300.0, costs))
                .await
                .unwrap();
            let margin = (sale.revenue - sale.costs) / sale.revenue * 100.0;
            assert_close(sale.margin_percent.unwrap(), margin);
            assert_eq!(sale.objective_reached, margin >= OBJETIVO_MARGEM);
        }
    }

    #[tokio::test]
    async fn update_recomputes_figures() {
        let svc = test_service().await;
        let lot_id = create_test_lot(&svc, "Lote A").await;
        let sale = svc
            .create_sale(&new_sale(&lot_id, "2026-09-01", 300.0, 60_000.0))
            .await
            .unwrap();

        let update = SaleUpdateBuilder::new().costs(85_000.0).build();
        let updated = svc.update_sale(&sale.id, update).await.unwrap();
        assert_close(updated.gross_profit, 5_000.0);
        assert!(!updated.objective_reached);

        let fetched = svc.get_sale(&sale.id).await.unwrap();
        assert_eq!(fetched, updated);

        let per_kg = SaleUpdateBuilder::new()
            .price_unit(PriceUnit::Kg)
            .price_per_unit(25.0)
            .build();
        let updated = svc.update_sale(&sale.id, per_kg).await.unwrap();
        assert_close(updated.revenue, 112_500.0);
    }

    #[tokio::test]
    async fn sale_requires_existing_lot_and_valid_figures() {
        let svc = test_service().await;
        assert!(matches!(
            svc.create_sale(&new_sale("lot-ffffffff", "2026-09-01", 300.0, 0.0)).await,
            Err(DatabaseError::NotFound { .. })
        ));

        let lot_id = create_test_lot(&svc, "Lote A").await;
        let err = svc
            .create_sale(&new_sale(&lot_id, "2026-09-01", 0.0, 0.0))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Field 'price_per_unit' must be a positive number");

        let sale = svc
            .create_sale(&new_sale(&lot_id, "2026-09-01", 300.0, 0.0))
            .await
            .unwrap();
        let bad = SaleUpdateBuilder::new().costs(-5.0).build();
        assert!(matches!(
            svc.update_sale(&sale.id, bad).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn list_sales_for_lot_and_delete() {
        let svc = test_service().await;
        let a = create_test_lot(&svc, "Lote A").await;
        let b = create_test_lot(&svc, "Lote B").await;
        let first = svc.create_sale(&new_sale(&a, "2026-08-01", 300.0, 0.0)).await.unwrap();
        svc.create_sale(&new_sale(&a, "2026-09-01", 300.0, 0.0)).await.unwrap();
        svc.create_sale(&new_sale(&b, "2026-07-01", 300.0, 0.0)).await.unwrap();

        let for_a = svc.list_sales_for_lot(&a).await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[0].date.to_string(), "2026-09-01");
        assert_eq!(svc.list_sales().await.unwrap().len(), 3);

        svc.delete_sale(&first.id).await.unwrap();
        assert_eq!(svc.list_sales_for_lot(&a).await.unwrap().len(), 1);
    }
}
