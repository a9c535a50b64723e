//! PostgreSQL implementation of AccountStore.
//!
//! The entitlement update is one `UPDATE ... WHERE email = $1 RETURNING`
//! statement; Postgres row locking serializes concurrent updates to the
//! same account.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{Account, Change, Entitlement, EntitlementPatch, EntitlementStatus};
use crate::domain::billing::Plan;
use crate::domain::foundation::{AccountId, DomainError, ErrorCode, Timestamp};
use crate::ports::AccountStore;

const EMAIL_CONSTRAINT: &str = "accounts_email_key";

const RETURNING: &str = "id, email, full_name, password_hash, status, plan, \
                         external_order_id, external_product_id, created_at, updated_at";

/// PostgreSQL implementation of the AccountStore port.
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending schema migrations.
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Migration failed: {}", e)))
    }
}

/// Database row representation of an account.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    full_name: String,
    password_hash: String,
    status: String,
    plan: String,
    external_order_id: Option<String>,
    external_product_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<EntitlementStatus>().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid status value: {}", e))
        })?;

        Ok(Account {
            id: AccountId::from_uuid(row.id),
            email: row.email,
            full_name: row.full_name,
            password_hash: row.password_hash,
            entitlement: Entitlement {
                status,
                plan: Plan::from(row.plan),
                external_order_id: row.external_order_id,
                external_product_id: row.external_product_id,
            },
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

/// Bind pair for a `CASE WHEN $n THEN $m ELSE column END` assignment:
/// whether the column is written, and the value written.
fn change_binds<T>(
    change: &Change<T>,
    render: impl Fn(&T) -> Option<String>,
) -> (bool, Option<String>) {
    match change {
        Change::Keep => (false, None),
        Change::Set(value) => (true, render(value)),
    }
}

fn database_error(context: &str) -> impl Fn(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn insert(&self, account: &Account) -> Result<(), DomainError> {
        let e = &account.entitlement;
        sqlx::query(
            r#"
            INSERT INTO accounts (
                id, email, full_name, password_hash, status, plan,
                external_order_id, external_product_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(&account.email)
        .bind(&account.full_name)
        .bind(&account.password_hash)
        .bind(e.status.as_str())
        .bind(e.plan.as_str())
        .bind(&e.external_order_id)
        .bind(&e.external_product_id)
        .bind(account.created_at.as_datetime())
        .bind(account.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.constraint() == Some(EMAIL_CONSTRAINT) {
                    return DomainError::new(ErrorCode::AccountExists, "Email already registered")
                        .with_detail("email", account.email.clone());
                }
            }
            DomainError::database(format!("Failed to insert account: {}", err))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> =
            sqlx::query_as(&format!("SELECT {} FROM accounts WHERE id = $1", RETURNING))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error("Failed to fetch account"))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> =
            sqlx::query_as(&format!("SELECT {} FROM accounts WHERE email = $1", RETURNING))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error("Failed to fetch account"))?;

        row.map(Account::try_from).transpose()
    }

    async fn conditional_update(
        &self,
        email: &str,
        patch: &EntitlementPatch,
    ) -> Result<Option<Account>, DomainError> {
        let sql = format!(
            r#"
            UPDATE accounts SET
                status = $2,
                plan = CASE WHEN $3 THEN $4::text ELSE plan END,
                external_product_id = CASE WHEN $5 THEN $6::text ELSE external_product_id END,
                external_order_id = CASE WHEN $7 THEN $8::text ELSE external_order_id END,
                updated_at = $9
            WHERE email = $1
            RETURNING {}
            "#,
            RETURNING
        );

        let (set_plan, plan) = change_binds(&patch.plan, |p| Some(p.as_str().to_string()));
        let (set_product, product_id) = change_binds(&patch.external_product_id, Clone::clone);
        let (set_order, order_id) = change_binds(&patch.external_order_id, Clone::clone);

        let row: Option<AccountRow> = sqlx::query_as(&sql)
            .bind(email)
            .bind(patch.status.as_str())
            .bind(set_plan)
            .bind(plan)
            .bind(set_product)
            .bind(product_id)
            .bind(set_order)
            .bind(order_id)
            .bind(Timestamp::now().as_datetime())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to update entitlement"))?;

        row.map(Account::try_from).transpose()
    }
}
