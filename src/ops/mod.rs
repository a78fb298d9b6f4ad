pub mod category_ops;
pub mod ids;
pub mod stats;
pub mod task_ops;
