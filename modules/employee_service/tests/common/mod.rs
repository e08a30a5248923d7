//! Common test utilities: in-memory module setup and the reference staff

#![allow(dead_code)]

use employee_service::{Config, EmployeeServiceModule};
use sea_orm::ConnectionTrait;

/// Staff used by the end-to-end scenario
pub const STAFF: [(&str, &str, i32); 3] = [
    ("Zara", "Ali", 1000),
    ("Daisy", "Das", 5000),
    ("John", "Paul", 10000),
];

/// Fresh in-memory database with migrations applied
pub async fn setup() -> EmployeeServiceModule {
    setup_with_batch_size(50).await
}

pub async fn setup_with_batch_size(batch_size: usize) -> EmployeeServiceModule {
    let config = Config {
        batch_size,
        ..Config::in_memory()
    };
    EmployeeServiceModule::init(config)
        .await
        .expect("in-memory employee module")
}

/// Makes every INSERT of an employee with `salary` fail inside the engine
pub async fn reject_salary(module: &EmployeeServiceModule, salary: i32) {
    let sql = format!(
        "CREATE TRIGGER employee_reject_salary_{} BEFORE INSERT ON employee \
         WHEN NEW.salary = {salary} \
         BEGIN SELECT RAISE(ABORT, 'forced insert failure'); END;",
        salary.unsigned_abs()
    );
    module
        .db()
        .execute_unprepared(&sql)
        .await
        .expect("create failure trigger");
}
