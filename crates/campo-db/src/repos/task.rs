//! Task repository: CRUD plus complete / reopen transitions.

use campo_core::entities::{NewTask, Task};
use campo_core::enums::TaskStatus;
use campo_core::ids::PREFIX_TASK;
use campo_core::validation::{Validate, require_non_empty};

use crate::error::DatabaseError;
use crate::helpers::{
    SetClause, date_text, get_opt_string, now, opt_value, parse_date, parse_datetime, parse_enum,
    parse_optional_datetime, parse_optional_time, time_text, timestamp,
};
use crate::service::CampoService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str =
    "id, user_id, title, category, due_date, due_time, status, description, completed_at, created_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        due_date: parse_date(&row.get::<String>(4)?)?,
        due_time: parse_optional_time(get_opt_string(row, 5)?.as_deref())?,
        status: parse_enum(&row.get::<String>(6)?)?,
        description: get_opt_string(row, 7)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 8)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl CampoService {
    pub async fn create_task(&self, input: &NewTask) -> Result<Task, DatabaseError> {
        let user_id = self.require_user()?;
        input.validate()?;

        let now = now();
        let id = self.db().generate_id(PREFIX_TASK).await?;
        let title = input.title.trim();

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    title,
                    input.category.as_str(),
                    date_text(input.due_date),
                    opt_value(input.due_time.map(time_text)),
                    TaskStatus::Pending.as_str(),
                    opt_value(input.description.clone()),
                    libsql::Value::Null,
                    timestamp(now)
                ],
            )
            .await?;

        tracing::info!(task_id = %id, due_date = %input.due_date, "task created");

        Ok(Task {
            id,
            user_id: user_id.to_string(),
            title: title.to_string(),
            category: input.category,
            due_date: input.due_date,
            due_time: input.due_time,
            status: TaskStatus::Pending,
            description: input.description.clone(),
            completed_at: None,
            created_at: now,
        })
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
                libsql::params![id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("task", id))?;
        row_to_task(&row)
    }

    /// Tasks by due date, then due time with untimed tasks last.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks("").await
    }

    /// Pending tasks only, in the same order as [`CampoService::list_tasks`].
    pub async fn list_pending_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        self.query_tasks("AND status = 'pending'").await
    }

    async fn query_tasks(&self, extra_filter: &str) -> Result<Vec<Task>, DatabaseError> {
        let user_id = self.require_user()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE user_id = ?1 {extra_filter}
                     ORDER BY due_date ASC, due_time IS NULL, due_time ASC, created_at ASC"
                ),
                [user_id],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Task, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_task(id).await?;

        let mut set = SetClause::new();
        if let Some(ref title) = update.title {
            require_non_empty("title", title)?;
            set.set("title", title.trim());
        }
        if let Some(category) = update.category {
            set.set("category", category.as_str());
        }
        if let Some(due_date) = update.due_date {
            set.set("due_date", date_text(due_date));
        }
        if let Some(due_time) = update.due_time {
            set.set("due_time", opt_value(due_time.map(time_text)));
        }
        if let Some(ref description) = update.description {
            set.set("description", opt_value(description.clone()));
        }

        if set.is_empty() {
            return Ok(current);
        }

        let (sql, params) = set.into_update("tasks", id, user_id);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::info!(task_id = id, changes = ?update, "task updated");
        self.get_task(id).await
    }

    /// Move a task to `new_status`, stamping or clearing `completed_at`.
    pub async fn transition_task(&self, id: &str, new_status: TaskStatus) -> Result<Task, DatabaseError> {
        let user_id = self.require_user()?;
        let current = self.get_task(id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot move task {id} from {} to {new_status}",
                current.status
            )));
        }

        let completed_at = (new_status == TaskStatus::Completed).then(now);
        self.db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, completed_at = ?2 WHERE id = ?3 AND user_id = ?4",
                libsql::params![
                    new_status.as_str(),
                    opt_value(completed_at.map(timestamp)),
                    id,
                    user_id
                ],
            )
            .await?;

        tracing::info!(task_id = id, from = %current.status, to = %new_status, "task status changed");

        Ok(Task {
            status: new_status,
            completed_at,
            ..current
        })
    }

    pub async fn complete_task(&self, id: &str) -> Result<Task, DatabaseError> {
        self.transition_task(id, TaskStatus::Completed).await
    }

    pub async fn reopen_task(&self, id: &str) -> Result<Task, DatabaseError> {
        self.transition_task(id, TaskStatus::Pending).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), DatabaseError> {
        let user_id = self.require_user()?;
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("task", id));
        }
        tracing::info!(task_id = id, "task deleted");
        Ok(())
    }
}
