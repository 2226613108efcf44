//! Report aggregators.
//!
//! Each aggregator runs a named [`Procedure`] for the current user and an
//! optional date range, then maps the rows into the typed summaries in
//! `campo_core::reports`. Store failures surface as
//! [`DatabaseError::Report`] naming the procedure. Zero rows is an empty
//! result, not an error.

pub mod procedures;

use campo_core::reports::{
    AnimalPerformance, CategoryTotal, ExpenseSummary, HerdSnapshot, LotPerformance, MonthTotal,
    ReportFilter, WeighingPerformance,
};
use campo_core::validation::validate_date_range;

use crate::error::DatabaseError;
use crate::helpers::{
    date_text, get_f64, get_opt_f64, get_opt_string, get_u32, opt_value, parse_date,
    parse_enum, parse_optional_date,
};
use crate::service::CampoService;

pub use procedures::Procedure;

fn report_error(procedure: Procedure, err: impl std::fmt::Display) -> DatabaseError {
    DatabaseError::Report {
        procedure: procedure.name().to_string(),
        message: err.to_string(),
    }
}

impl CampoService {
    /// Run `procedure` and map every row with `map_row`.
    async fn call_procedure<T>(
        &self,
        procedure: Procedure,
        filter: &ReportFilter,
        map_row: impl Fn(&libsql::Row) -> Result<T, DatabaseError>,
    ) -> Result<Vec<T>, DatabaseError> {
        let user_id = self.require_user()?;
        validate_date_range(filter.start, filter.end)?;

        tracing::debug!(
            procedure = procedure.name(),
            start = ?filter.start,
            end = ?filter.end,
            "calling report procedure"
        );

        let rows = async {
            let mut rows = self
                .db()
                .conn()
                .query(
                    procedure.sql(),
                    libsql::params![
                        user_id,
                        opt_value(filter.start.map(date_text)),
                        opt_value(filter.end.map(date_text))
                    ],
                )
                .await?;
            let mut mapped = Vec::new();
            while let Some(row) = rows.next().await? {
                mapped.push(map_row(&row)?);
            }
            Ok::<_, DatabaseError>(mapped)
        }
        .await;

        rows.map_err(|err| {
            tracing::error!(procedure = procedure.name(), error = %err, "report procedure failed");
            report_error(procedure, err)
        })
    }

    /// Herd snapshot. `None` when the user has no lots and no weighings in range.
    pub async fn herd_snapshot(
        &self,
        filter: &ReportFilter,
    ) -> Result<Option<HerdSnapshot>, DatabaseError> {
        let rows = self
            .call_procedure(Procedure::Rebanho, filter, |row| {
                let total_lots = get_u32(row, 0)?;
                let total_heads = get_u32(row, 2)?;
                let total_capacity = get_u32(row, 3)?;
                let capacity_heads = get_u32(row, 6)?;
                Ok(HerdSnapshot {
                    total_lots,
                    active_lots: get_u32(row, 1)?,
                    total_heads,
                    total_capacity,
                    occupancy_percent: (total_capacity > 0).then(|| {
                        f64::from(capacity_heads) / f64::from(total_capacity) * 100.0
                    }),
                    last_weighing_date: parse_optional_date(get_opt_string(row, 4)?.as_deref())?,
                    average_weight_kg: get_opt_f64(row, 5)?,
                })
            })
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .filter(|s| s.total_lots > 0 || s.last_weighing_date.is_some()))
    }

    /// Per-animal gain and GMD between the first and last weighing in range.
    pub async fn weighing_performance(
        &self,
        filter: &ReportFilter,
    ) -> Result<WeighingPerformance, DatabaseError> {
        let animals = self
            .call_procedure(Procedure::DesempenhoPesagens, filter, |row| {
                Ok(AnimalPerformance::from_endpoints(
                    row.get(0)?,
                    get_opt_string(row, 1)?,
                    get_u32(row, 2)?,
                    parse_date(&row.get::<String>(3)?)?,
                    get_f64(row, 4)?,
                    parse_date(&row.get::<String>(5)?)?,
                    get_f64(row, 6)?,
                ))
            })
            .await?;
        Ok(WeighingPerformance::from_animals(animals))
    }

    /// Financial performance of each non-archived lot.
    pub async fn lot_performance(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<LotPerformance>, DatabaseError> {
        self.call_procedure(Procedure::DesempenhoLotes, filter, |row| {
            Ok(LotPerformance::compute(
                row.get(0)?,
                row.get(1)?,
                parse_enum(&row.get::<String>(2)?)?,
                get_u32(row, 3)?,
                get_u32(row, 4)?,
                get_f64(row, 5)?,
                get_f64(row, 6)?,
                get_f64(row, 7)?,
            ))
        })
        .await
    }

    /// Expense totals by category and by month for the same range.
    pub async fn expense_summary(
        &self,
        filter: &ReportFilter,
    ) -> Result<ExpenseSummary, DatabaseError> {
        let by_category = self
            .call_procedure(Procedure::GastosPorCategoria, filter, |row| {
                Ok(CategoryTotal {
                    category: parse_enum(&row.get::<String>(0)?)?,
                    total: get_f64(row, 1)?,
                    count: get_u32(row, 2)?,
                })
            })
            .await?;
        let by_month = self
            .call_procedure(Procedure::GastosPorMes, filter, |row| {
                Ok(MonthTotal {
                    month: row.get(0)?,
                    total: get_f64(row, 1)?,
                })
            })
            .await?;
        let total = self
            .call_procedure(Procedure::GastosTotal, filter, |row| get_f64(row, 0))
            .await?
            .into_iter()
            .next()
            .unwrap_or(0.0);
        Ok(ExpenseSummary::from_parts(total, by_category, by_month))
    }
}
