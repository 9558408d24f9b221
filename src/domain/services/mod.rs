//! Domain Services
//!
//! Business logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod integrity;
pub mod prompt;
mod session_store;

pub use integrity::{check_schedule, IntegrityIssue, IntegrityReport};
pub use prompt::{render_prompt, SYSTEM_PROMPT};
pub use session_store::SessionStore;
