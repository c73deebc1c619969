pub mod assign;
pub mod health;
pub mod task_types;
pub mod workers;
