//! Weighing repository.
//!
//! Reads return `WeighingWithMetrics`: gain and GMD are derived against the
//! animal's latest strictly-earlier weighing in `(date, created_at)` order and
//! are never stored.

use campo_core::entities::{NewWeighing, Weighing, WeighingWithMetrics};
use campo_core::ids::PREFIX_WEIGHING;
use campo_core::metrics::{derive_weighing_metrics, with_previous};
use campo_core::validation::{Validate, require_non_empty, require_positive};

use crate::error::DatabaseError;
use crate::helpers::{
    SetClause, now, date_text, get_f64, get_opt_string, opt_value, parse_date, parse_datetime, timestamp,
};
use crate::service::CampoService;
use crate::updates::weighing::WeighingUpdate;

const SELECT_COLS: &str = "id, user_id, animal_tag, lot_id, date, weight_kg, notes, created_at";

fn row_to_weighing(row: &libsql::Row) -> Result<Weighing, DatabaseError> {
    Ok(Weighing {
        id: row.get(0)?,
        user_id: row.get(1)?,
        animal_tag: row.get(2)?,
        lot_id: get_opt_string(row, 3)?,
        date: parse_date(&row.get::<String>(4)?)?,
        weight_kg: get_f64(row, 5)?,
        notes: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl CampoService {
    pub async fn create_weighing(
        &self,
        input: &NewWeighing,
    ) -> Result<WeighingWithMetrics, DatabaseError> {
        let user_id = self.require_user()?;
        input.validate()?;
        if let Some(ref lot_id) = input.lot_id {
            self.ensure_lot(lot_id).await?;
        }

        let now = now();
        let id = self.db().generate_id(PREFIX_WEIGHING).await?;
        let animal_tag = input.animal_tag.trim();

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO weighings ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    animal_tag,
                    opt_value(input.lot_id.clone()),
                    date_text(input.date),
                    input.weight_kg,
                    opt_value(input.notes.clone()),
                    timestamp(now)
                ],
            )
            .await?;

        tracing::info!(weighing_id = %id, animal_tag, weight_kg = input.weight_kg, "weighing recorded");

        let weighing = Weighing {
            id,
            user_id: user_id.to_string(),
            animal_tag: animal_tag.to_string(),
            lot_id: input.lot_id.clone(),
            date: input.date,
            weight_kg: input.weight_kg,
            notes: input.notes.clone(),
            created_at: now,
        };
        self.attach_previous(weighing).await
    }

    pub async fn get_weighing(&self, id: &str) -> Result<WeighingWithMetrics, DatabaseError> {
        let weighing = self.get_raw_weighing(id).await?;
        self.attach_previous(weighing).await
    }

    async fn get_raw_weighing(&self, id: &str) -> Result<Weighing, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM weighings WHERE id = ?1 AND user_id = ?2"),
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("weighing", id))?;
        row_to_weighing(&row)
    }

    /// The latest weighing of the same animal strictly before `weighing`.
    async fn previous_weighing(&self, weighing: &Weighing) -> Result<Option<Weighing>, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM weighings
                     WHERE user_id = ?1 AND animal_tag = ?2 AND id != ?3
                       AND (date < ?4 OR (date = ?4 AND created_at < ?5))
                     ORDER BY date DESC, created_at DESC
                     LIMIT 1"
                ),
                libsql::params![
                    user_id,
                    weighing.animal_tag.as_str(),
                    weighing.id.as_str(),
                    date_text(weighing.date),
                    timestamp(weighing.created_at)
                ],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_weighing(&row)?)),
            None => Ok(None),
        }
    }

    async fn attach_previous(&self, weighing: Weighing) -> Result<WeighingWithMetrics, DatabaseError> {
        let previous = self.previous_weighing(&weighing).await?;
        Ok(with_previous(&weighing, previous.as_ref()))
    }

    async fn query_weighings(
        &self,
        filter: &str,
        arg: Option<&str>,
    ) -> Result<Vec<Weighing>, DatabaseError> {
        let user_id = self.require_user()?;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM weighings WHERE user_id = ?1 {filter}
             ORDER BY date ASC, created_at ASC"
        );
        let mut rows = match arg {
            Some(arg) => self.db().conn().query(&sql, libsql::params![user_id, arg]).await?,
            None => self.db().conn().query(&sql, [user_id]).await?,
        };

        let mut weighings = Vec::new();
        while let Some(row) = rows.next().await? {
            weighings.push(row_to_weighing(&row)?);
        }
        Ok(weighings)
    }

    /// All weighings of the current user, oldest first, with derived metrics.
    pub async fn list_weighings(&self) -> Result<Vec<WeighingWithMetrics>, DatabaseError> {
        let weighings = self.query_weighings("", None).await?;
        Ok(derive_weighing_metrics(&weighings))
    }

    /// The weighing history of one animal, oldest first.
    pub async fn list_weighings_for_animal(
        &self,
        animal_tag: &str,
    ) -> Result<Vec<WeighingWithMetrics>, DatabaseError> {
        let weighings = self
            .query_weighings("AND animal_tag = ?2", Some(animal_tag.trim()))
            .await?;
        Ok(derive_weighing_metrics(&weighings))
    }

    /// Weighings recorded against one lot, oldest first.
    ///
    /// Metrics still pair each weighing with the animal's previous weighing,
    /// even when that one was recorded in another lot.
    pub async fn list_weighings_for_lot(
        &self,
        lot_id: &str,
    ) -> Result<Vec<WeighingWithMetrics>, DatabaseError> {
        self.ensure_lot(lot_id).await?;
        let all = self.list_weighings().await?;
        Ok(all
            .into_iter()
            .filter(|w| w.weighing.lot_id.as_deref() == Some(lot_id))
            .collect())
    }

    pub async fn update_weighing(
        &self,
        id: &str,
        update: WeighingUpdate,
    ) -> Result<WeighingWithMetrics, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_raw_weighing(id).await?;

        let mut set = SetClause::new();
        if let Some(ref animal_tag) = update.animal_tag {
            require_non_empty("animal_tag", animal_tag)?;
            set.set("animal_tag", animal_tag.trim());
        }
        if let Some(ref lot_id) = update.lot_id {
            if let Some(lot_id) = lot_id {
                self.ensure_lot(lot_id).await?;
            }
            set.set("lot_id", opt_value(lot_id.clone()));
        }
        if let Some(date) = update.date {
            set.set("date", date_text(date));
        }
        if let Some(weight_kg) = update.weight_kg {
            require_positive("weight_kg", weight_kg)?;
            set.set("weight_kg", weight_kg);
        }
        if let Some(ref notes) = update.notes {
            set.set("notes", opt_value(notes.clone()));
        }

        if set.is_empty() {
            return self.attach_previous(current).await;
        }

        let (sql, params) = set.into_update("weighings", id, user_id);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::info!(weighing_id = id, changes = ?update, "weighing updated");
        self.get_weighing(id).await
    }

    pub async fn delete_weighing(&self, id: &str) -> Result<(), DatabaseError> {
        let user_id = self.require_user()?;
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM weighings WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("weighing", id));
        }
        tracing::info!(weighing_id = id, "weighing deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{create_test_lot, date, new_weighing, test_service};
    use crate::updates::weighing::WeighingUpdateBuilder;
    use campo_core::identity::AuthIdentity;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn first_weighing_has_no_metrics() {
        let svc = test_service().await;
        let w = svc
            .create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();

        assert!(w.weighing.id.starts_with("pes-"));
        assert_eq!(w.previous_weight_kg, None);
        assert_eq!(w.gain_kg, None);
        assert_eq!(w.gmd, None);
    }

    #[tokio::test]
    async fn second_weighing_derives_gain_and_gmd() {
        let svc = test_service().await;
        svc.create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();
        let w = svc
            .create_weighing(&new_weighing("BR-01", "2026-01-31", 330.0))
            .await
            .unwrap();

        assert_eq!(w.previous_weight_kg, Some(300.0));
        assert_eq!(w.days_between, Some(30));
        assert_eq!(w.gain_kg, Some(30.0));
        assert_eq!(w.gmd, Some(1.0));

        let fetched = svc.get_weighing(&w.weighing.id).await.unwrap();
        assert_eq!(fetched, w);
    }

    #[tokio::test]
    async fn same_day_weighing_has_gain_but_no_gmd() {
        let svc = test_service().await;
        svc.create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();
        let w = svc
            .create_weighing(&new_weighing("BR-01", "2026-01-01", 302.0))
            .await
            .unwrap();

        assert_eq!(w.gain_kg, Some(2.0));
        assert_eq!(w.days_between, Some(0));
        assert_eq!(w.gmd, None);
    }

    #[tokio::test]
    async fn back_dated_weighing_pairs_with_earlier_one() {
        let svc = test_service().await;
        svc.create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();
        svc.create_weighing(&new_weighing("BR-01", "2026-03-01", 360.0))
            .await
            .unwrap();
        let middle = svc
            .create_weighing(&new_weighing("BR-01", "2026-01-21", 320.0))
            .await
            .unwrap();

        assert_eq!(middle.previous_weight_kg, Some(300.0));
        assert_eq!(middle.gmd, Some(1.0));

        let list = svc.list_weighings().await.unwrap();
        let dates: Vec<_> = list.iter().map(|w| w.weighing.date).collect();
        assert_eq!(dates, vec![date("2026-01-01"), date("2026-01-21"), date("2026-03-01")]);
        assert_eq!(list[2].previous_weight_kg, Some(320.0));
    }

    #[tokio::test]
    async fn animals_do_not_share_history() {
        let svc = test_service().await;
        svc.create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();
        let other = svc
            .create_weighing(&new_weighing("BR-02", "2026-02-01", 280.0))
            .await
            .unwrap();
        assert_eq!(other.gain_kg, None);

        let history = svc.list_weighings_for_animal("BR-01").await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn lot_filter_requires_owned_lot() {
        let svc = test_service().await;
        let lot_id = create_test_lot(&svc, "Lote A").await;

        let mut input = new_weighing("BR-01", "2026-01-01", 300.0);
        input.lot_id = Some(lot_id.clone());
        svc.create_weighing(&input).await.unwrap();
        svc.create_weighing(&new_weighing("BR-02", "2026-01-01", 310.0))
            .await
            .unwrap();

        assert_eq!(svc.list_weighings_for_lot(&lot_id).await.unwrap().len(), 1);

        input.lot_id = Some("lot-ffffffff".into());
        assert!(matches!(
            svc.create_weighing(&input).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn update_recomputes_metrics() {
        let svc = test_service().await;
        svc.create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();
        let w = svc
            .create_weighing(&new_weighing("BR-01", "2026-01-11", 305.0))
            .await
            .unwrap();

        let update = WeighingUpdateBuilder::new().weight_kg(320.0).build();
        let updated = svc.update_weighing(&w.weighing.id, update).await.unwrap();
        assert_eq!(updated.gain_kg, Some(20.0));
        assert_eq!(updated.gmd, Some(2.0));

        let bad = WeighingUpdateBuilder::new().weight_kg(-1.0).build();
        assert!(matches!(
            svc.update_weighing(&w.weighing.id, bad).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn delete_weighing_and_not_found() {
        let svc = test_service().await;
        let w = svc
            .create_weighing(&new_weighing("BR-01", "2026-01-01", 300.0))
            .await
            .unwrap();

        let other = svc.with_identity(Some(AuthIdentity::new("user-2")));
        assert!(matches!(
            other.delete_weighing(&w.weighing.id).await,
            Err(DatabaseError::NotFound { .. })
        ));

        svc.delete_weighing(&w.weighing.id).await.unwrap();
        assert!(matches!(
            svc.get_weighing(&w.weighing.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
