//! PostgreSQL-backed role store over the `roles` table.

use async_trait::async_trait;
use kspace_core::identity::IdentityError;
use kspace_core::roles::{validate_role, Role};

use crate::models::role::RoleRow;
use crate::store::{RoleQuery, RoleStore, StoreError};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, normalized_name";

/// Filter clause shared by `count` and `fetch`. `$1` is the optional
/// substring; `strpos` keeps `%` and `_` literal.
const FILTER: &str = "($1::text IS NULL OR strpos(id, $1) > 0 OR strpos(name, $1) > 0)";

/// Primary key constraint on `roles.id`.
const PK_CONSTRAINT: &str = "roles_pkey";

/// Unique constraint on `roles.normalized_name`.
const NAME_CONSTRAINT: &str = "uq_roles_normalized_name";

/// PostgreSQL unique violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone)]
pub struct PgRoleStore {
    pool: DbPool,
}

impl PgRoleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find_by_normalized_name(
        &self,
        normalized_name: &str,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE normalized_name = $1");
        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(normalized_name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Role::from))
    }

    /// Validator checks plus uniqueness lookups, collected into one rejection.
    async fn check_write(&self, role: &Role, updating: bool) -> Result<(), StoreError> {
        let mut errors = validate_role(role);

        if !updating && self.find_by_id(&role.id).await?.is_some() {
            errors.push(IdentityError::duplicate_role_id(&role.id));
        }
        if let Some(owner) = self.find_by_normalized_name(&role.normalized_name).await? {
            if owner.id != role.id {
                errors.push(IdentityError::duplicate_role_name(&role.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Rejected(errors))
        }
    }
}

/// Map a unique violation that slipped past [`PgRoleStore::check_write`]
/// (a concurrent writer) to the matching identity error.
fn classify_write_error(err: sqlx::Error, role: &Role) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            match db_err.constraint() {
                Some(PK_CONSTRAINT) => {
                    return StoreError::rejected(IdentityError::duplicate_role_id(&role.id))
                }
                Some(NAME_CONSTRAINT) => {
                    return StoreError::rejected(IdentityError::duplicate_role_name(&role.name))
                }
                _ => {}
            }
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn list(&self) -> Result<Vec<Role>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id ASC");
        let rows = sqlx::query_as::<_, RoleRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Role>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Role::from))
    }

    async fn count(&self, query: &RoleQuery) -> Result<i64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM roles WHERE {FILTER}");
        let total = sqlx::query_scalar::<_, i64>(&sql)
            .bind(query.contains.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn fetch(
        &self,
        query: &RoleQuery,
        skip: i64,
        take: i64,
    ) -> Result<Vec<Role>, StoreError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM roles WHERE {FILTER} \
             ORDER BY id ASC \
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, RoleRow>(&sql)
            .bind(query.contains.as_deref())
            .bind(take.max(0))
            .bind(skip.max(0))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn create(&self, role: &Role) -> Result<(), StoreError> {
        self.check_write(role, false).await?;

        sqlx::query("INSERT INTO roles (id, name, normalized_name) VALUES ($1, $2, $3)")
            .bind(&role.id)
            .bind(&role.name)
            .bind(&role.normalized_name)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_write_error(e, role))?;
        Ok(())
    }

    async fn update(&self, role: &Role) -> Result<(), StoreError> {
        self.check_write(role, true).await?;

        let result =
            sqlx::query("UPDATE roles SET name = $2, normalized_name = $3 WHERE id = $1")
                .bind(&role.id)
                .bind(&role.name)
                .bind(&role.normalized_name)
                .execute(&self.pool)
                .await
                .map_err(|e| classify_write_error(e, role))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::rejected(IdentityError::concurrency_failure()));
        }
        Ok(())
    }

    async fn delete(&self, role: &Role) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(&role.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::rejected(IdentityError::concurrency_failure()));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
