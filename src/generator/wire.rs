//! Colored wire variants across every resource category.

use crate::generator::expander::TemplateExpander;
use crate::models::{AssetKind, GenerationReport};
use crate::workspace::AssetLayout;
use anyhow::Result;
use tracing::info;

/// Expands the per-category templates of one wire.
///
/// For each [`AssetKind`] in order, `dev/<template_dir>/<name>.json` is
/// expanded into the matching output directory. Only the color token is
/// substituted. A missing template aborts at that category; categories
/// already processed keep their output.
pub fn generate_wire(
    expander: &TemplateExpander,
    layout: &AssetLayout,
    name: &str,
) -> Result<GenerationReport> {
    if name.is_empty() {
        anyhow::bail!("Wire name must not be empty");
    }

    let mut report = GenerationReport::new(expander.is_dry_run());

    for kind in AssetKind::ALL {
        info!("Generating {} variants for '{}'", kind, name);
        let template = layout.asset_template(kind, name);
        report.merge(expander.expand(&template, &layout.output_dir(kind), name)?);
    }

    Ok(report)
}
