//! ResourceDisplay implementations for client models.
//!
//! Adding a new model to table output:
//! 1. Implement `ResourceDisplay` for it in the file of its service.
//! 2. Call `format_list` / `format_item` from the command; both formatters
//!    pick it up through the trait.

mod core_data;
mod metadata;
mod notifications;
mod scheduler;
mod system;
