//! Domain Layer
//!
//! This is the core of Docent - roster entities and session state without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Faculty, Hall, ScheduleEntry, Schedule
//! - `value_objects/` - Immutable value types (CommaList, DuplicatePolicy)
//! - `services/` - SessionStore, prompt rendering, integrity checks
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Explicit state** - The session store is constructed once and passed by reference
//! 3. **Ports & Adapters** - The generation service and notifications go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
