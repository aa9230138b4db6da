//! Notes header: the state controller behind a document viewer's notes panel header.
//!
//! The header sits above the list of annotation notes and provides:
//! - A debounced search field that commits queries to the parent panel
//! - A comment counter and a sort-strategy dropdown
//! - Multi-select mode and filter-modal buttons
//! - A history date picker that broadcasts the picked date on the event bus
//! - Host-supplied custom header content, shown above or instead of the default header
//!
//! The crate is headless: it composes an immutable view model and leaves
//! drawing to the host.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host UI                                            │  ← Draws HeaderView
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Lifecycle
//! │  - Event handling                                   │  ← Business logic
//! │  - Action execution                                 │
//! │  - Search debouncing                                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Bus Layer     │
//! │ (ui/)         │   │ (store/)      │   │ (bus/)        │
//! │ - Compose     │   │ - Query API   │   │ - Topics      │
//! │ - View models │   │ - Dispatch    │   │ - Listeners   │
//! │ - Elements    │   │ - Memory impl │   │ - Local impl  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Host & Domain Layers                               │
//! │  - Engine, callbacks, sort registry (host/)         │
//! │  - Filters, sort keys, history dates (domain/)      │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber setup                         │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Header controller with event/action model
//! - [`bus`]: Application event bus and its topics
//! - [`domain`]: Core domain types (filters, sort keys, notes, errors)
//! - [`host`]: Traits the embedding viewer implements
//! - [`overlays`]: Page navigation overlays
//! - [`store`]: Application store query/dispatch API
//! - [`ui`]: Header composition into view models
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! Hosts pass string settings, or point at a TOML file:
//!
//! ```toml
//! debounce_ms = 300
//! trace_level = "debug"
//! log_file = "/tmp/notes-header.log"
//! ```
//!
//! # Key Design Decisions
//!
//! ## Deadline-Based Debounce
//!
//! Search input is debounced against [`std::time::Instant`] deadlines instead
//! of timers. The host calls [`HeaderController::poll`] when
//! [`HeaderController::next_deadline`] passes; unmounting drops the pending
//! value, so no commit can run after `stop()`.
//!
//! ## Snapshot Versus Live Filters
//!
//! The "filter active" flag is seeded from the store once at mount and then
//! follows `annotationFilterChanged` bus events only. Store changes that are
//! not announced on the bus do not move it.
//!
//! ## Immutable View Models
//!
//! Rendering produces a [`ui::HeaderView`] that the host draws. Element
//! visibility is looked up per region on every render.

pub mod app;
pub mod bus;
pub mod domain;
pub mod host;
pub mod overlays;
pub mod store;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, HeaderController, HeaderDeps, HeaderMode, HeaderState};
pub use domain::{HeaderError, Note, Result, SortStrategy};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default quiet period before a search query is committed.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Header configuration.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use std::time::Duration;
/// use notes_header::Config;
///
/// let mut map = BTreeMap::new();
/// map.insert("debounce_ms".to_string(), "250".to_string());
///
/// let config = Config::from_map(&map);
/// assert_eq!(config.debounce_window, Duration::from_millis(250));
/// assert!(config.trace_level.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiet period after the last keystroke before the search commits.
    /// Default: 500 ms
    pub debounce_window: Duration,

    /// Tracing level filter, e.g. `debug` or `notes_header=trace`.
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            trace_level: None,
            log_file: None,
        }
    }
}

/// On-disk shape of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    debounce_ms: Option<u64>,
    trace_level: Option<String>,
    log_file: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// # Parsing Rules
    ///
    /// - `debounce_ms`: String → milliseconds (falls back to 500 when missing,
    ///   unparsable or zero)
    /// - `trace_level`: String → `Option<String>` (blank means unset)
    /// - `log_file`: String → `Option<PathBuf>` (blank means unset)
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let debounce_window = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(DEFAULT_DEBOUNCE_WINDOW, Duration::from_millis);

        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            debounce_window,
            trace_level: non_blank("trace_level"),
            log_file: non_blank("log_file").map(PathBuf::from),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// - [`HeaderError::Io`] if the file cannot be read
    /// - [`HeaderError::ConfigFormat`] if it is not valid TOML of the expected shape
    /// - [`HeaderError::Config`] if `debounce_ms` is zero
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;

        let debounce_window = match file.debounce_ms {
            Some(0) => {
                return Err(HeaderError::Config(format!(
                    "debounce_ms must be positive in {}",
                    path.display()
                )))
            }
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_DEBOUNCE_WINDOW,
        };

        tracing::debug!(path = %path.display(), ?debounce_window, "configuration loaded");

        Ok(Self {
            debounce_window,
            trace_level: file.trace_level,
            log_file: file.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn from_map_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn from_map_reads_all_keys() {
        let config = Config::from_map(&map(&[
            ("debounce_ms", "120"),
            ("trace_level", "debug"),
            ("log_file", "/tmp/header.log"),
        ]));
        assert_eq!(config.debounce_window, Duration::from_millis(120));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/header.log")));
    }

    #[test]
    fn from_map_falls_back_on_bad_values() {
        let config = Config::from_map(&map(&[("debounce_ms", "soon"), ("trace_level", "  ")]));
        assert_eq!(config.debounce_window, DEFAULT_DEBOUNCE_WINDOW);
        assert!(config.trace_level.is_none());

        let config = Config::from_map(&map(&[("debounce_ms", "0")]));
        assert_eq!(config.debounce_window, DEFAULT_DEBOUNCE_WINDOW);
    }

    #[test]
    fn from_toml_file_reads_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debounce_ms = 300\ntrace_level = \"warn\"").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.debounce_window, Duration::from_millis(300));
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn from_toml_file_empty_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(Config::from_toml_file(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn from_toml_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_toml_file(dir.path().join("missing.toml")),
            Err(HeaderError::Io(_))
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "debounce_ms = \"fast\"").unwrap();
        assert!(matches!(Config::from_toml_file(&bad), Err(HeaderError::ConfigFormat(_))));

        let zero = dir.path().join("zero.toml");
        std::fs::write(&zero, "debounce_ms = 0").unwrap();
        assert!(matches!(Config::from_toml_file(&zero), Err(HeaderError::Config(_))));
    }
}
