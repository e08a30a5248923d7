//! The fixed demonstration sequence

use anyhow::{Context, Result};
use employee_service::{Employee, EmployeeApi};
use std::io::Write;

/// Figures collected while the sequence runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub count: u64,
    pub total_salary: i64,
    pub batch_inserted: u64,
    pub final_count: u64,
}

/// Add, list, update, delete, filter, aggregate, project, then bulk load.
pub async fn run<W: Write>(
    api: &dyn EmployeeApi,
    batch_count: usize,
    out: &mut W,
) -> Result<DemoSummary> {
    // Add few employee records
    let zara = api.add_employee("Zara", "Ali", 1000).await?;
    let daisy = api.add_employee("Daisy", "Das", 5000).await?;
    let _john = api.add_employee("John", "Paul", 10000).await?;

    print_employees(out, &api.list_employees().await?)?;

    api.update_employee(zara, 5000)
        .await
        .with_context(|| format!("update employee {zara}"))?;
    api.delete_employee(daisy)
        .await
        .with_context(|| format!("delete employee {daisy}"))?;

    print_employees(out, &api.list_employees().await?)?;
    print_employees(out, &api.list_employees_by_salary_above(2000).await?)?;

    let count = api.count_employees().await?;
    writeln!(out, "Total Count: {count}")?;

    let total_salary = api.total_salary().await?;
    writeln!(out, "Total Salary: {total_salary}")?;

    for row in api.list_employees_scalar().await? {
        writeln!(out, "First Name: {}, Salary: {}", row.first_name, row.salary)?;
    }

    print_employees(out, &api.list_employees_entity().await?)?;

    let batch_inserted = api
        .add_employees_in_batches(batch_count)
        .await
        .context("bulk insert")?;
    let final_count = api.count_employees().await?;
    writeln!(out, "Batch Inserted: {batch_inserted}")?;
    writeln!(out, "Total Count: {final_count}")?;

    Ok(DemoSummary {
        count,
        total_salary,
        batch_inserted,
        final_count,
    })
}

fn print_employees<W: Write>(out: &mut W, employees: &[Employee]) -> Result<()> {
    for employee in employees {
        writeln!(
            out,
            "First Name: {}  Last Name: {}  Salary: {}",
            employee.first_name, employee.last_name, employee.salary
        )?;
    }
    Ok(())
}
