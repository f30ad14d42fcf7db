//! Shared infrastructure for recording worktrunk demos.
//!
//! Helpers for setting up an isolated sandbox repository and home directory,
//! shelling out to git / cargo / the VHS terminal recorder, and rendering
//! `{{KEY}}` tape templates with the doc-site color themes. Per-demo scripts
//! compose these pieces; nothing here persists state between runs.

pub mod color;
pub mod demo_env;
pub mod errors;
pub mod exec;
pub mod tape;
pub mod theme;

pub use color::{
    color_enabled_stderr, color_enabled_stdout, log_error_stderr, log_info_stderr,
    log_warn_stdout, paint, set_color_mode, ColorMode,
};
pub use demo_env::{real_home, DemoEnv};
pub use errors::{exit_code_for_error, exit_code_for_io_error};
pub use exec::{
    build_quiet, record_tape, run, run_git, ExecRequest, ProcessFailed, DEFAULT_RECORDER,
};
pub use tape::{render_tape, RenderOutcome, Substitutions};
pub use theme::{format_theme_for_vhs, Theme, DARK, LIGHT, THEMES};
