//! Centralized constants for the edgex-cli workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Service Endpoint Defaults
// =============================================================================

/// Default host for every EdgeX microservice.
pub const DEFAULT_HOST: &str = "localhost";

/// Default core-data port.
pub const DEFAULT_CORE_DATA_PORT: u16 = 59880;

/// Default core-metadata port.
pub const DEFAULT_CORE_METADATA_PORT: u16 = 59881;

/// Default core-command port.
pub const DEFAULT_CORE_COMMAND_PORT: u16 = 59882;

/// Default support-notifications port.
pub const DEFAULT_SUPPORT_NOTIFICATIONS_PORT: u16 = 59860;

/// Default support-scheduler port.
pub const DEFAULT_SUPPORT_SCHEDULER_PORT: u16 = 59861;

// =============================================================================
// API Contract
// =============================================================================

/// Version string sent in every request envelope.
pub const API_VERSION: &str = "v2";

/// Path prefix shared by every EdgeX v2 route.
pub const API_PREFIX: &str = "/api/v2";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Listing Defaults
// =============================================================================

/// Default `--limit` for list commands.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Page size used when a list asks for every remaining item.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// EdgeX rejects pages larger than its `MaxResultCount` (1024 by default).
pub const MAX_PAGE_SIZE: usize = 1024;

// =============================================================================
// Config File
// =============================================================================

/// Application directory name used for the config file location.
pub const APP_DIR_NAME: &str = "edgex-cli";

/// Config file name inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
