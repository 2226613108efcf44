//! Expense repository.

use campo_core::entities::{Expense, NewExpense};
use campo_core::ids::PREFIX_EXPENSE;
use campo_core::validation::{Validate, require_non_empty, require_positive};

use crate::error::DatabaseError;
use crate::helpers::{
    SetClause, date_text, get_f64, get_opt_string, now, opt_value, parse_date, parse_datetime,
    parse_enum, timestamp,
};
use crate::service::CampoService;
use crate::updates::expense::ExpenseUpdate;

const SELECT_COLS: &str = "id, user_id, lot_id, category, amount, date, description, created_at";

fn row_to_expense(row: &libsql::Row) -> Result<Expense, DatabaseError> {
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        lot_id: get_opt_string(row, 2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        amount: get_f64(row, 4)?,
        date: parse_date(&row.get::<String>(5)?)?,
        description: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl CampoService {
    pub async fn create_expense(&self, input: &NewExpense) -> Result<Expense, DatabaseError> {
        let user_id = self.require_user()?;
        input.validate()?;
        if let Some(ref lot_id) = input.lot_id {
            self.ensure_lot(lot_id).await?;
        }

        let now = now();
        let id = self.db().generate_id(PREFIX_EXPENSE).await?;
        let description = input.description.trim();

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO expenses ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    opt_value(input.lot_id.clone()),
                    input.category.as_str(),
                    input.amount,
                    date_text(input.date),
                    description,
                    timestamp(now)
                ],
            )
            .await?;

        tracing::info!(expense_id = %id, category = %input.category, amount = input.amount, "expense recorded");

        Ok(Expense {
            id,
            user_id: user_id.to_string(),
            lot_id: input.lot_id.clone(),
            category: input.category,
            amount: input.amount,
            date: input.date,
            description: description.to_string(),
            created_at: now,
        })
    }

    pub async fn get_expense(&self, id: &str) -> Result<Expense, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM expenses WHERE id = ?1 AND user_id = ?2"),
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("expense", id))?;
        row_to_expense(&row)
    }

    /// Expenses of the current user, most recent first.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM expenses WHERE user_id = ?1
                     ORDER BY date DESC, created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut expenses = Vec::new();
        while let Some(row) = rows.next().await? {
            expenses.push(row_to_expense(&row)?);
        }
        Ok(expenses)
    }

    /// Expenses charged to one lot, most recent first.
    pub async fn list_expenses_for_lot(&self, lot_id: &str) -> Result<Vec<Expense>, DatabaseError> {
        let user_id = self.require_user()?;
        self.ensure_lot(lot_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM expenses WHERE user_id = ?1 AND lot_id = ?2
                     ORDER BY date DESC, created_at DESC"
                ),
                libsql::params![user_id, lot_id],
            )
            .await?;

        let mut expenses = Vec::new();
        while let Some(row) = rows.next().await? {
            expenses.push(row_to_expense(&row)?);
        }
        Ok(expenses)
    }

    pub async fn update_expense(
        &self,
        id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_expense(id).await?;

        let mut set = SetClause::new();
        if let Some(ref lot_id) = update.lot_id {
            if let Some(lot_id) = lot_id {
                self.ensure_lot(lot_id).await?;
            }
            set.set("lot_id", opt_value(lot_id.clone()));
        }
        if let Some(category) = update.category {
            set.set("category", category.as_str());
        }
        if let Some(amount) = update.amount {
            require_positive("amount", amount)?;
            set.set("amount", amount);
        }
        if let Some(date) = update.date {
            set.set("date", date_text(date));
        }
        if let Some(ref description) = update.description {
            require_non_empty("description", description)?;
            set.set("description", description.trim());
        }

        if set.is_empty() {
            return Ok(current);
        }

        let (sql, params) = set.into_update("expenses", id, user_id);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::info!(expense_id = id, changes = ?update, "expense updated");
        self.get_expense(id).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), DatabaseError> {
        let user_id = self.require_user()?;
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM expenses WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("expense", id));
        }
        tracing::info!(expense_id = id, "expense deleted");
        Ok(())
    }
}
