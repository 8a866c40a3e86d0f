//! # SchoolNav
//!
//! Role-scoped navigation permissions for a school administration console.
//!
//! ## Overview
//!
//! Every role (headmaster, teacher, parent) has a compiled-in sidebar
//! catalog. An administrator can narrow what one specific user sees by
//! storing an override for that `(role, email)` pair. Overrides fail open:
//! when none is stored, when it is switched off, or when storage cannot be
//! read, the whole catalog stays reachable.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── schoolnav-core/           # Storage backends, errors, serde helpers
//! ├── schoolnav-models/         # Role, Email, SidebarConfig, catalog types
//! ├── schoolnav-catalog/        # Per-role sidebar data
//! ├── schoolnav-store/          # PermissionStore, legacy import
//! ├── schoolnav-config/         # Env-driven configuration
//! └── schoolnav-observability/  # Logging setup
//! src/
//! ├── cli/                      # `schoolnav` admin commands
//! ├── modules/
//! │   ├── permissions/          # PermissionEditor
//! │   └── access/               # AccessResolver
//! └── state.rs                  # AppState wiring
//! ```
//!
//! ## Editing rules
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | toggle item | flip one path |
//! | toggle section | clear if fully checked, otherwise add the missing paths |
//! | enable / disable | set the flag; an empty allow-list is refilled first |
//!
//! Every edit is written immediately; there is no save step.
//!
//! ## Environment Variables
//!
//! ```bash
//! SCHOOLNAV_STORAGE_BACKEND=file
//! SCHOOLNAV_STORAGE_DIR=storage/permissions
//! LOG_LEVEL=info
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface
//! - [`modules`]: Permission editor and access resolver
//! - [`state`]: Shared application state

pub mod cli;
pub mod modules;
pub mod state;

pub use modules::access::AccessResolver;
pub use modules::permissions::PermissionEditor;
pub use state::{AppState, init_app_state};
