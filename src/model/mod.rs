pub mod task;
pub mod category;
pub mod dashboard;
pub mod config;

pub use task::*;
pub use category::*;
pub use dashboard::*;
pub use config::*;
