//! Infrastructure layer - SeaORM storage

pub mod storage;
