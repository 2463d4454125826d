//! Domain model for task tracking.
//!
//! The task domain owns the task aggregate, its closed status and priority
//! enumerations, the start/due date window, and the business rules that
//! govern mutation. Infrastructure concerns stay outside this boundary.

mod error;
mod ids;
mod schedule;
mod status;
mod task;

pub use error::{ParseTaskIdError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use schedule::{HIGH_PRIORITY_WINDOW_DAYS, Schedule};
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, Task, TaskPatch};
