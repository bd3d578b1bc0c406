//! Per-color expansion of a template file.
//!
//! A template is read once and written out sixteen times, once per palette
//! color, as `<color>_<name>.json`. Existing files are overwritten.

use crate::constants::COLOR_TOKEN;
use crate::generator::placeholders::find_unresolved;
use crate::models::{GenerationReport, UnresolvedPlaceholder, PALETTE};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Writes colored variants of templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExpander {
    dry_run: bool,
}

impl TemplateExpander {
    /// Creates an expander that writes files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expander that only reports what it would write.
    #[must_use]
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }

    /// True if this expander never touches the destination.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Output path for one color variant.
    pub fn variant_path(target_dir: &Path, color: &str, name: &str) -> PathBuf {
        target_dir.join(format!("{color}_{name}.json"))
    }

    /// Expands `template` into `target_dir` replacing only the color token.
    pub fn expand(&self, template: &Path, target_dir: &Path, name: &str) -> Result<GenerationReport> {
        self.expand_with(template, target_dir, name, str::to_string)
    }

    /// Expands `template` into `target_dir`, running `transform` on each
    /// variant after the color token has been replaced.
    ///
    /// The template is read before anything is written, so a missing template
    /// leaves the destination untouched. A write failure part-way through
    /// leaves the earlier variants in place.
    pub fn expand_with<F>(
        &self,
        template: &Path,
        target_dir: &Path,
        name: &str,
        transform: F,
    ) -> Result<GenerationReport>
    where
        F: Fn(&str) -> String,
    {
        let data = fs::read_to_string(template)
            .with_context(|| format!("Failed to read template: {}", template.display()))?;

        if !self.dry_run {
            fs::create_dir_all(target_dir).with_context(|| {
                format!("Failed to create output directory: {}", target_dir.display())
            })?;
        }

        let mut report = GenerationReport::new(self.dry_run);

        for color in PALETTE {
            let content = transform(&data.replace(COLOR_TOKEN, color.label()));
            let path = Self::variant_path(target_dir, color.label(), name);

            for token in find_unresolved(&content) {
                warn!("Unresolved placeholder {} in {}", token, path.display());
                report.unresolved.push(UnresolvedPlaceholder {
                    file: path.clone(),
                    token,
                });
            }

            if !self.dry_run {
                fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            debug!("Wrote {}", path.display());
            report.written.push(path);
        }

        info!(
            "Expanded {} into {} variants of '{}' in {}",
            template.display(),
            report.file_count(),
            name,
            target_dir.display()
        );

        Ok(report)
    }
}
