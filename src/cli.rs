use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate a KEY=VALUE substitution flag value.
pub(crate) fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err("must be KEY=VALUE with a non-empty key".to_string()),
    }
}

#[derive(Parser, Debug)]
#[command(name = "wt-demos", version, about = "Record worktrunk demos with VHS")]
pub(crate) struct Cli {
    /// Colorize output: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    pub color: Option<wt_demos::ColorMode>,

    /// Verbose diagnostics on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Cmd {
    /// Render a tape template with theme and sandbox-path substitutions
    Render {
        /// Tape template containing {{KEY}} tokens
        #[arg(long)]
        template: PathBuf,
        /// Where to write the rendered tape
        #[arg(long)]
        output: PathBuf,
        /// Theme table to embed as {{THEME}}: light|dark
        #[arg(long)]
        theme: Option<String>,
        /// Demo name; enables sandbox-path substitutions
        #[arg(long)]
        name: Option<String>,
        /// Output directory the sandbox lives under (with --name)
        #[arg(long = "out-dir")]
        out_dir: Option<PathBuf>,
        /// Repository name inside the sandbox
        #[arg(long = "repo-name", default_value = "worktrunk")]
        repo_name: String,
        /// Extra KEY=VALUE substitutions, applied in order after the built-ins
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },
    /// Record a rendered tape with the terminal recorder
    Record {
        /// Rendered .tape file to record
        #[arg(long)]
        tape: PathBuf,
        /// Recorder binary (default vhs; WT_DEMOS_VHS overrides, flag wins)
        #[arg(long)]
        recorder: Option<String>,
    },
    /// Build the demoed binary (cargo build --quiet)
    Build {
        /// Repository root to build in
        #[arg(long = "repo-root")]
        repo_root: PathBuf,
    },
    /// Check that git, vhs and cargo are available
    Doctor,
}
