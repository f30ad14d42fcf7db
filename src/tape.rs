//! VHS tape rendering: literal `{{KEY}}` substitution into tape templates.
//!
//! A missing template is not an error. Demo recording is best-effort batch
//! tooling, so the renderer reports the skip on stdout and lets the caller
//! move on to the next demo instead of aborting the whole batch.

use std::path::Path;

use anyhow::{Context, Result};

/// Ordered substitution set; pairs apply in insertion order.
///
/// Application is strictly sequential: if a replacement value contains a
/// later pair's `{{KEY}}` token, that token is substituted again. Known
/// sharp edge, kept as-is.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair; the value is stringified once, here.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Outcome of a render: distinguishes the non-fatal skip from success so
/// batch callers can continue past missing templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    SkippedMissingTemplate,
}

/// Render a tape template into `output_path`.
///
/// Replaces each `{{key}}` token with its value, pair by pair, in the order
/// the substitutions were inserted. Tokens with no entry stay verbatim;
/// entries with no token are ignored. No escaping, no recursion.
///
/// A missing template prints one warning line to stdout and returns
/// `SkippedMissingTemplate` without touching `output_path`. Read and write
/// failures are fatal.
pub fn render_tape(
    template_path: &Path,
    output_path: &Path,
    subs: &Substitutions,
) -> Result<RenderOutcome> {
    if !template_path.exists() {
        let use_color = crate::color::color_enabled_stdout();
        crate::color::log_warn_stdout(
            use_color,
            &format!(
                "Warning: {} not found, skipping VHS recording",
                template_path.display()
            ),
        );
        return Ok(RenderOutcome::SkippedMissingTemplate);
    }

    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;
    let rendered = substitute(&template, subs);
    std::fs::write(output_path, rendered)
        .with_context(|| format!("failed to write rendered tape {}", output_path.display()))?;
    Ok(RenderOutcome::Rendered)
}

fn substitute(template: &str, subs: &Substitutions) -> String {
    let mut rendered = template.to_string();
    for (key, value) in subs.iter() {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}
