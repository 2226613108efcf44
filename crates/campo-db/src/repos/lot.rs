//! Lot repository: CRUD, archive (soft delete) and status transitions.

use campo_core::entities::{Lot, NewLot};
use campo_core::enums::LotStatus;
use campo_core::ids::PREFIX_LOT;
use campo_core::validation::{Validate, require_non_empty, require_positive_count, validate_capacity};

use crate::error::DatabaseError;
use crate::helpers::{
    SetClause, now, date_text, get_opt_string, get_opt_u32, get_u32, opt_value, parse_date,
    parse_datetime, parse_enum, timestamp,
};
use crate::service::CampoService;
use crate::updates::lot::LotUpdate;

const SELECT_COLS: &str =
    "id, user_id, name, entry_date, head_count, capacity, status, notes, created_at, updated_at";

fn row_to_lot(row: &libsql::Row) -> Result<Lot, DatabaseError> {
    Ok(Lot {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        entry_date: parse_date(&row.get::<String>(3)?)?,
        head_count: get_u32(row, 4)?,
        capacity: get_opt_u32(row, 5)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        notes: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl CampoService {
    pub async fn create_lot(&self, input: &NewLot) -> Result<Lot, DatabaseError> {
        let user_id = self.require_user()?;
        input.validate()?;

        let now = now();
        let id = self.db().generate_id(PREFIX_LOT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO lots ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    input.name.trim(),
                    date_text(input.entry_date),
                    i64::from(input.head_count),
                    opt_value(input.capacity.map(i64::from)),
                    LotStatus::Active.as_str(),
                    opt_value(input.notes.clone()),
                    timestamp(now),
                    timestamp(now)
                ],
            )
            .await?;

        tracing::info!(lot_id = %id, head_count = input.head_count, "lot created");

        Ok(Lot {
            id,
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            entry_date: input.entry_date,
            head_count: input.head_count,
            capacity: input.capacity,
            status: LotStatus::Active,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_lot(&self, id: &str) -> Result<Lot, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM lots WHERE id = ?1 AND user_id = ?2"),
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("lot", id))?;
        row_to_lot(&row)
    }

    /// Lots that are not archived, newest entry first.
    pub async fn list_lots(&self) -> Result<Vec<Lot>, DatabaseError> {
        self.query_lots("AND status != 'archived'").await
    }

    /// All lots including archived ones, newest entry first.
    pub async fn list_all_lots(&self) -> Result<Vec<Lot>, DatabaseError> {
        self.query_lots("").await
    }

    async fn query_lots(&self, extra_filter: &str) -> Result<Vec<Lot>, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM lots WHERE user_id = ?1 {extra_filter}
                     ORDER BY entry_date DESC, created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut lots = Vec::new();
        while let Some(row) = rows.next().await? {
            lots.push(row_to_lot(&row)?);
        }
        Ok(lots)
    }

    pub async fn update_lot(&self, id: &str, update: LotUpdate) -> Result<Lot, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_lot(id).await?;

        if let Some(ref name) = update.name {
            require_non_empty("name", name)?;
        }
        if let Some(head_count) = update.head_count {
            require_positive_count("head_count", head_count)?;
        }
        validate_capacity(
            update.head_count.unwrap_or(current.head_count),
            update.capacity.unwrap_or(current.capacity),
        )?;

        let mut set = SetClause::new();
        if let Some(ref name) = update.name {
            set.set("name", name.trim());
        }
        if let Some(entry_date) = update.entry_date {
            set.set("entry_date", date_text(entry_date));
        }
        if let Some(head_count) = update.head_count {
            set.set("head_count", i64::from(head_count));
        }
        if let Some(capacity) = update.capacity {
            set.set("capacity", opt_value(capacity.map(i64::from)));
        }
        if let Some(ref notes) = update.notes {
            set.set("notes", opt_value(notes.clone()));
        }

        if set.is_empty() {
            return Ok(current);
        }
        set.set("updated_at", timestamp(now()));

        let (sql, params) = set.into_update("lots", id, user_id);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::info!(lot_id = id, changes = ?update, "lot updated");
        self.get_lot(id).await
    }

    /// Move a lot to `new_status` if the lifecycle allows it.
    pub async fn transition_lot(&self, id: &str, new_status: LotStatus) -> Result<Lot, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_lot(id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot move lot {id} from {} to {new_status}",
                current.status
            )));
        }

        let now = now();
        self.db()
            .conn()
            .execute(
                "UPDATE lots SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
                libsql::params![new_status.as_str(), timestamp(now), id, user_id],
            )
            .await?;

        tracing::info!(lot_id = id, from = %current.status, to = %new_status, "lot status changed");

        Ok(Lot {
            status: new_status,
            updated_at: now,
            ..current
        })
    }

    /// Archive a lot. Lots are never hard-deleted.
    pub async fn archive_lot(&self, id: &str) -> Result<Lot, DatabaseError> {
        self.transition_lot(id, LotStatus::Archived).await
    }

    /// Fail with `NotFound` unless `lot_id` names a lot of the current user.
    pub(crate) async fn ensure_lot(&self, lot_id: &str) -> Result<(), DatabaseError> {
        self.get_lot(lot_id).await.map(|_| ())
    }
}
