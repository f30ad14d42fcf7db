use std::env;
use std::process::ExitCode;

use clap::Parser;

use wt_demos::{DemoEnv, RenderOutcome, Substitutions};

mod cli;
use cli::{Cli, Cmd};

fn recorder_from_env_or_flag(flag: Option<String>) -> String {
    // CLI flag wins over WT_DEMOS_VHS; empty values fall through.
    if let Some(r) = flag {
        if !r.trim().is_empty() {
            return r;
        }
    }
    if let Ok(r) = env::var("WT_DEMOS_VHS") {
        if !r.trim().is_empty() {
            return r;
        }
    }
    wt_demos::DEFAULT_RECORDER.to_string()
}

fn run_doctor() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("wt-demos doctor");
    eprintln!("  version: v{}", version);
    eprintln!(
        "  host: {} / {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    let recorder = recorder_from_env_or_flag(None);
    for bin in ["git", recorder.as_str(), "cargo"] {
        match which::which(bin) {
            Ok(p) => eprintln!("  {}: {}", bin, p.display()),
            Err(_) => eprintln!("  {}: not found in PATH", bin),
        }
    }
}

fn run_render(
    template: &std::path::Path,
    output: &std::path::Path,
    theme: Option<&str>,
    name: Option<&str>,
    out_dir: Option<&std::path::Path>,
    repo_name: &str,
    set: &[(String, String)],
    verbose: bool,
) -> anyhow::Result<RenderOutcome> {
    let mut subs = Substitutions::new();

    if let Some(name) = name {
        let out_dir = out_dir.unwrap_or_else(|| std::path::Path::new("."));
        let sandbox = DemoEnv::new(name, out_dir).with_repo_name(repo_name);
        subs.push("ROOT", sandbox.root().display());
        subs.push("HOME_DIR", sandbox.home().display());
        subs.push("WORK_DIR", sandbox.work_base().display());
        subs.push("REPO_DIR", sandbox.repo().display());
        subs.push("REMOTE_DIR", sandbox.bare_remote().display());
    }

    if let Some(theme) = theme {
        let table = wt_demos::THEMES
            .get(theme)
            .ok_or_else(|| anyhow::anyhow!("unknown theme '{theme}' (expected light or dark)"))?;
        subs.push("THEME", wt_demos::format_theme_for_vhs(table));
    }

    for (k, v) in set {
        subs.push(k.clone(), v);
    }

    if verbose {
        let use_err = wt_demos::color_enabled_stderr();
        wt_demos::log_info_stderr(
            use_err,
            &format!(
                "wt-demos: rendering {} -> {}",
                template.display(),
                output.display()
            ),
        );
    }
    wt_demos::render_tape(template, output, &subs)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        wt_demos::set_color_mode(mode);
    }

    let result: anyhow::Result<()> = match &cli.command {
        Cmd::Render {
            template,
            output,
            theme,
            name,
            out_dir,
            repo_name,
            set,
        } => run_render(
            template,
            output,
            theme.as_deref(),
            name.as_deref(),
            out_dir.as_deref(),
            repo_name,
            set,
            cli.verbose,
        )
        // Skipped is the lenient path: warning already printed, exit 0.
        .map(|_| ()),
        Cmd::Record { tape, recorder } => {
            let recorder = recorder_from_env_or_flag(recorder.clone());
            if cli.verbose {
                let use_err = wt_demos::color_enabled_stderr();
                wt_demos::log_info_stderr(
                    use_err,
                    &format!("wt-demos: recording {} with {}", tape.display(), recorder),
                );
            }
            wt_demos::record_tape(tape, &recorder)
        }
        Cmd::Build { repo_root } => wt_demos::build_quiet(repo_root),
        Cmd::Doctor => {
            run_doctor();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            let use_err = wt_demos::color_enabled_stderr();
            wt_demos::log_error_stderr(use_err, &format!("wt-demos: {e:#}"));
            ExitCode::from(wt_demos::exit_code_for_error(&e))
        }
    }
}
