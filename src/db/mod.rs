use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info};

use crate::auth::TeamMemberLookup;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Client, TaskItem, TeamMember};
use crate::validation::{Validate, ValidationErrors};

const DUPLICATE_CLIENT_NAME: &str = "A client with this name already exists.";

/// Database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    // Team member operations

    /// Validate and insert a new team member, account row included. The
    /// id comes from the wrapped account.
    pub async fn create_team_member(&self, member: &TeamMember) -> Result<()> {
        member.validate()?;

        sqlx::query(
            r#"
            INSERT INTO team_members (id, user_name, email, email_confirmed, password_hash,
                                      first_name, last_name, birth_date, work_position,
                                      skill_level, registration_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(member.id())
        .bind(&member.account.user_name)
        .bind(&member.account.email)
        .bind(member.account.email_confirmed)
        .bind(&member.account.password_hash)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(member.birth_date)
        .bind(member.work_position)
        .bind(member.skill_level)
        .bind(member.registration_date())
        .execute(self.get_pool())
        .await?;

        debug!(member_id = member.id(), "team member created");
        Ok(())
    }

    pub async fn get_team_members(&self) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members ORDER BY last_name ASC, first_name ASC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(members)
    }

    pub async fn get_team_member(&self, id: &str) -> Result<TeamMember> {
        let member = sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
            .bind(id)
            .fetch_one(self.get_pool())
            .await?;

        Ok(member)
    }

    /// Like [`get_team_member`](Self::get_team_member), but absence is an
    /// answer rather than an error.
    pub async fn find_team_member(&self, id: &str) -> Result<Option<TeamMember>> {
        let member = sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?;

        Ok(member)
    }

    pub async fn update_team_member(&self, member: &TeamMember) -> Result<()> {
        member.validate()?;

        sqlx::query(
            r#"
            UPDATE team_members
            SET user_name = $1, email = $2, email_confirmed = $3, password_hash = $4,
                first_name = $5, last_name = $6, birth_date = $7, work_position = $8,
                skill_level = $9
            WHERE id = $10
            "#,
        )
        .bind(&member.account.user_name)
        .bind(&member.account.email)
        .bind(member.account.email_confirmed)
        .bind(&member.account.password_hash)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(member.birth_date)
        .bind(member.work_position)
        .bind(member.skill_level)
        .bind(member.id())
        .execute(self.get_pool())
        .await?;

        Ok(())
    }

    /// Delete a team member. Their task assignments and managed clients
    /// are released, never deleted with them.
    pub async fn delete_team_member(&self, id: &str) -> Result<()> {
        // Start a transaction
        let mut tx = self.pool.begin().await?;

        // Release the member's task assignments
        sqlx::query("UPDATE task_items SET team_member_id = NULL WHERE team_member_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Release the clients they manage
        sqlx::query("UPDATE clients SET project_manager_id = NULL WHERE project_manager_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Finally delete the member
        sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Commit the transaction
        tx.commit().await?;

        info!(member_id = id, "team member deleted, assignments released");
        Ok(())
    }

    // Client operations

    /// Validate and insert a new client. The client name must be unique
    /// across the agency; a taken name comes back as a validation error
    /// on the `name` field, not a database error.
    pub async fn create_client(&self, client: &Client) -> Result<i32> {
        client.validate()?;

        let mut tx = self.pool.begin().await?;

        // Check the name before inserting; the unique index backs this
        // up against concurrent submissions.
        if Self::client_name_taken(&mut tx, &client.name, None).await? {
            return Err(duplicate_client_name());
        }

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO clients (name, description, industry, contact_person, contact_email,
                                 contact_phone, start_date, project_manager_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&client.name)
        .bind(&client.description)
        .bind(client.industry)
        .bind(&client.contact_person)
        .bind(&client.contact_email)
        .bind(&client.contact_phone)
        .bind(client.start_date())
        .bind(&client.project_manager_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(unique_violation_to_duplicate_name)?;

        tx.commit().await?;

        debug!(client_id = id, name = %client.name, "client created");
        Ok(id)
    }

    pub async fn get_clients(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name ASC")
            .fetch_all(self.get_pool())
            .await?;

        Ok(clients)
    }

    pub async fn get_client(&self, id: i32) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_one(self.get_pool())
            .await?;

        Ok(client)
    }

    pub async fn find_client_by_name(&self, name: &str) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE name = $1")
            .bind(name)
            .fetch_optional(self.get_pool())
            .await?;

        Ok(client)
    }

    pub async fn get_clients_by_manager(&self, member_id: &str) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE project_manager_id = $1 ORDER BY name ASC",
        )
        .bind(member_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(clients)
    }

    /// Validate and persist changes to a client. The uniqueness check
    /// skips the client's own row so saving without renaming stays legal.
    pub async fn update_client(&self, client: &Client) -> Result<()> {
        client.validate()?;

        let mut tx = self.pool.begin().await?;

        if Self::client_name_taken(&mut tx, &client.name, Some(client.id)).await? {
            return Err(duplicate_client_name());
        }

        sqlx::query(
            r#"
            UPDATE clients
            SET name = $1, description = $2, industry = $3, contact_person = $4,
                contact_email = $5, contact_phone = $6, project_manager_id = $7
            WHERE id = $8
            "#,
        )
        .bind(&client.name)
        .bind(&client.description)
        .bind(client.industry)
        .bind(&client.contact_person)
        .bind(&client.contact_email)
        .bind(&client.contact_phone)
        .bind(&client.project_manager_id)
        .bind(client.id)
        .execute(&mut *tx)
        .await
        .map_err(unique_violation_to_duplicate_name)?;

        tx.commit().await?;

        Ok(())
    }

    /// Delete a client and every task that belongs to it.
    pub async fn delete_client(&self, id: i32) -> Result<()> {
        // Start a transaction
        let mut tx = self.pool.begin().await?;

        // Delete the client's tasks first
        sqlx::query("DELETE FROM task_items WHERE client_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Finally delete the client
        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Commit the transaction
        tx.commit().await?;

        info!(client_id = id, "client deleted together with its tasks");
        Ok(())
    }

    pub async fn get_client_with_tasks(&self, id: i32) -> Result<(Client, Vec<TaskItem>)> {
        let client = self.get_client(id).await?;
        let tasks = self.get_tasks_by_client(id).await?;
        Ok((client, tasks))
    }

    async fn client_name_taken(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool> {
        let existing = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM clients WHERE name = $1 AND ($2::int4 IS NULL OR id <> $2)",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(existing.is_some())
    }

    // Task operations

    /// Validate and insert a new task for a client.
    pub async fn create_task(&self, task: &TaskItem) -> Result<i32> {
        task.validate()?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO task_items (title, description, due_date, start_date, completed_date,
                                    status, client_id, team_member_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.start_date())
        .bind(task.completed_date())
        .bind(task.status())
        .bind(task.client_id)
        .bind(&task.team_member_id)
        .fetch_one(self.get_pool())
        .await?;

        debug!(task_id = id, client_id = task.client_id, "task created");
        Ok(id)
    }

    pub async fn get_task(&self, id: i32) -> Result<TaskItem> {
        let task = sqlx::query_as::<_, TaskItem>("SELECT * FROM task_items WHERE id = $1")
            .bind(id)
            .fetch_one(self.get_pool())
            .await?;

        Ok(task)
    }

    pub async fn get_tasks_by_client(&self, client_id: i32) -> Result<Vec<TaskItem>> {
        let tasks = sqlx::query_as::<_, TaskItem>(
            "SELECT * FROM task_items WHERE client_id = $1 ORDER BY start_date ASC, id ASC",
        )
        .bind(client_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(tasks)
    }

    pub async fn get_tasks_by_team_member(&self, member_id: &str) -> Result<Vec<TaskItem>> {
        let tasks = sqlx::query_as::<_, TaskItem>(
            "SELECT * FROM task_items WHERE team_member_id = $1 ORDER BY start_date ASC, id ASC",
        )
        .bind(member_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(tasks)
    }

    /// Validate and persist changes to a task. The status and completion
    /// date are written as the model carries them; the transition rules
    /// live on [`TaskItem`] itself.
    pub async fn update_task(&self, task: &TaskItem) -> Result<()> {
        task.validate()?;

        sqlx::query(
            r#"
            UPDATE task_items
            SET title = $1, description = $2, due_date = $3, completed_date = $4,
                status = $5, client_id = $6, team_member_id = $7
            WHERE id = $8
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.completed_date())
        .bind(task.status())
        .bind(task.client_id)
        .bind(&task.team_member_id)
        .bind(task.id)
        .execute(self.get_pool())
        .await?;

        Ok(())
    }

    /// Load a task, run the Active to Closed transition, and persist the
    /// outcome. Closing an already closed task changes nothing.
    pub async fn close_task(&self, id: i32) -> Result<TaskItem> {
        let mut task = self.get_task(id).await?;
        task.close();

        sqlx::query("UPDATE task_items SET status = $1, completed_date = $2 WHERE id = $3")
            .bind(task.status())
            .bind(task.completed_date())
            .bind(task.id)
            .execute(self.get_pool())
            .await?;

        info!(task_id = id, "task closed");
        Ok(task)
    }

    pub async fn delete_task(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM task_items WHERE id = $1")
            .bind(id)
            .execute(self.get_pool())
            .await?;

        Ok(())
    }
}

impl TeamMemberLookup for &Database {
    async fn team_member_by_id(&self, id: &str) -> Result<Option<TeamMember>> {
        self.find_team_member(id).await
    }
}

fn duplicate_client_name() -> Error {
    Error::Validation(ValidationErrors::single("name", DUPLICATE_CLIENT_NAME))
}

/// Map a unique-index violation on the client name to the same validation
/// error the pre-insert check produces, so racing submissions see the
/// same failure either way.
fn unique_violation_to_duplicate_name(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => duplicate_client_name(),
        _ => Error::Database(err),
    }
}

/// Initialize the database connection pool
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    // Bring the schema current on startup
    sqlx::migrate!().run(db.get_pool()).await?;

    info!("database ready");
    Ok(db)
}
