//! Single-user task list kept in a JSON file and driven by a text menu.

pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod store;
pub mod task;
pub mod task_list;
pub mod ui;

pub use config::Config;
pub use error::{InputError, StoreError};
pub use manager::{AddOutcome, MarkOutcome, TaskManager};
pub use store::{JsonStore, TaskStore};
pub use task::Task;
pub use task_list::TaskList;
pub use ui::Menu;
