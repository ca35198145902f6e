pub mod row;
pub mod run_id;
