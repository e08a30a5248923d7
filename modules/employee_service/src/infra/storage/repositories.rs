//! SeaORM repository implementations
//!
//! Every method runs inside `TransactionTrait::transaction`, which commits when
//! the closure returns `Ok`, rolls back on `Err`, and hands the connection back
//! to the pool on every path.

use crate::contract::{Employee, EmployeeSalary, NewEmployee};
use crate::domain::repository::{EmployeeRepository, EmployeeRows};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, FromQueryResult, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Statement, TransactionTrait,
};
use std::sync::Arc;

use super::entity;

const SELECT_SALARIES_SQL: &str = "SELECT first_name, salary FROM employee ORDER BY id";
const SELECT_EMPLOYEES_SQL: &str = "SELECT * FROM employee ORDER BY id";

pub struct SeaOrmEmployeeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<i32> {
        let active: entity::ActiveModel = employee.into();

        let id = self
            .db
            .transaction::<_, i32, DbErr>(move |txn| {
                Box::pin(async move {
                    let result = entity::Entity::insert(active).exec(txn).await?;
                    Ok(result.last_insert_id)
                })
            })
            .await
            .context("insert employee")?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>> {
        let result = self
            .db
            .transaction::<_, Option<entity::Model>, DbErr>(move |txn| {
                Box::pin(async move { entity::Entity::find_by_id(id).one(txn).await })
            })
            .await
            .with_context(|| format!("find employee {id}"))?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<Employee>> {
        let results = self
            .db
            .transaction::<_, Vec<entity::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    entity::Entity::find()
                        .order_by_asc(entity::Column::Id)
                        .all(txn)
                        .await
                })
            })
            .await
            .context("list employees")?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn update_salary(&self, id: i32, salary: i32) -> Result<Option<Employee>> {
        use sea_orm::ActiveValue::Set;

        let result = self
            .db
            .transaction::<_, Option<entity::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(existing) = entity::Entity::find_by_id(id).one(txn).await? else {
                        return Ok(None);
                    };

                    let mut active: entity::ActiveModel = existing.into();
                    active.salary = Set(salary);
                    let updated = active.update(txn).await?;
                    Ok(Some(updated))
                })
            })
            .await
            .with_context(|| format!("update salary of employee {id}"))?;

        Ok(result.map(|e| e.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(existing) = entity::Entity::find_by_id(id).one(txn).await? else {
                        return Ok(false);
                    };

                    let result = existing.delete(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .with_context(|| format!("delete employee {id}"))?;

        Ok(deleted)
    }

    async fn find_by_salary_above(&self, threshold: i32) -> Result<Vec<Employee>> {
        let results = self
            .db
            .transaction::<_, Vec<entity::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    entity::Entity::find()
                        .filter(entity::Column::Salary.gt(threshold))
                        .order_by_asc(entity::Column::Id)
                        .all(txn)
                        .await
                })
            })
            .await
            .with_context(|| format!("list employees with salary above {threshold}"))?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn count(&self) -> Result<u64> {
        let count = self
            .db
            .transaction::<_, u64, DbErr>(move |txn| {
                Box::pin(async move { entity::Entity::find().count(txn).await })
            })
            .await
            .context("count employees")?;

        Ok(count)
    }

    async fn total_salary(&self) -> Result<i64> {
        // SUM over zero rows is NULL
        let total = self
            .db
            .transaction::<_, Option<Option<i64>>, DbErr>(move |txn| {
                Box::pin(async move {
                    entity::Entity::find()
                        .select_only()
                        .column_as(entity::Column::Salary.sum(), "total")
                        .into_tuple::<Option<i64>>()
                        .one(txn)
                        .await
                })
            })
            .await
            .context("sum employee salaries")?;

        Ok(total.flatten().unwrap_or(0))
    }

    async fn list_salaries_raw(&self) -> Result<Vec<EmployeeSalary>> {
        let rows = self
            .db
            .transaction::<_, Vec<entity::SalaryRow>, DbErr>(move |txn| {
                Box::pin(async move {
                    let stmt =
                        Statement::from_string(txn.get_database_backend(), SELECT_SALARIES_SQL);
                    entity::SalaryRow::find_by_statement(stmt).all(txn).await
                })
            })
            .await
            .context("list employee salaries (raw SQL)")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn list_all_raw(&self) -> Result<Vec<Employee>> {
        let results = self
            .db
            .transaction::<_, Vec<entity::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let stmt =
                        Statement::from_string(txn.get_database_backend(), SELECT_EMPLOYEES_SQL);
                    entity::Entity::find().from_raw_sql(stmt).all(txn).await
                })
            })
            .await
            .context("list employees (raw SQL)")?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn insert_batched(&self, rows: EmployeeRows, batch_size: usize) -> Result<u64> {
        let batch_size = batch_size.max(1);

        let inserted = self
            .db
            .transaction::<_, u64, DbErr>(move |txn| {
                Box::pin(async move {
                    let mut pending: Vec<entity::ActiveModel> = Vec::with_capacity(batch_size);
                    let mut inserted = 0u64;

                    for row in rows {
                        pending.push(row.into());
                        if pending.len() == batch_size {
                            inserted += flush(txn, &mut pending).await?;
                        }
                    }
                    inserted += flush(txn, &mut pending).await?;

                    Ok(inserted)
                })
            })
            .await
            .context("batch insert employees")?;

        Ok(inserted)
    }
}

/// Bound parameters per inserted row (`first_name`, `last_name`, `salary`)
const PARAMS_PER_ROW: usize = 3;

/// Largest row count one INSERT can carry on `backend` without exceeding
/// its bind-parameter limit.
fn max_rows_per_insert(backend: DbBackend) -> usize {
    let max_params = match backend {
        DbBackend::Sqlite => 32_766,
        _ => 65_535,
    };
    max_params / PARAMS_PER_ROW
}

/// Writes the pending rows with multi-row INSERTs and empties the buffer.
/// The rows stay uncommitted until the surrounding transaction commits.
async fn flush<C>(conn: &C, pending: &mut Vec<entity::ActiveModel>) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let chunk_rows = max_rows_per_insert(conn.get_database_backend());
    let mut written = 0u64;

    while !pending.is_empty() {
        let take = pending.len().min(chunk_rows);
        let rows = entity::Entity::insert_many(pending.drain(..take))
            .exec_without_returning(conn)
            .await?;
        written += rows;
    }

    if written > 0 {
        tracing::trace!(rows = written, "Flushed employee batch");
    }
    Ok(written)
}
