pub mod assign_request;
pub mod recommendation;
pub mod task_type_request;
