//! Assembly of a complete cable: model parts, blockstates and item models.

use crate::constants::{CABLE_TOKEN, TEXTURE_TOKEN, X1_TOKEN, X2_TOKEN};
use crate::generator::expander::TemplateExpander;
use crate::generator::substitutions::Substitutions;
use crate::models::{format_coordinate, CableSpec, GenerationReport, CABLE_MODEL_PARTS};
use crate::workspace::AssetLayout;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use tracing::{debug, info};

/// Builds every asset for one cable.
///
/// 1. `middle.json` and `connector.json` are copied from the cable's model
///    directory to `models/block/cables/<name>/`.
/// 2. The cable blockstate template is expanded with `[CABLE]` replaced.
/// 3. The cable item template is expanded with `[CABLE]`, `[TEXTURE]`,
///    `[X1]` and `[X2]` replaced.
///
/// Both model parts are checked before anything is written, so a missing
/// part leaves every output directory untouched.
pub fn create_cable(
    expander: &TemplateExpander,
    layout: &AssetLayout,
    cable: &CableSpec,
) -> Result<GenerationReport> {
    cable.validate()?;

    let sources: Vec<_> = CABLE_MODEL_PARTS
        .iter()
        .map(|part| cable.model_dir.join(part))
        .collect();

    for source in &sources {
        if !source.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("model part not found: {}", source.display()),
            ))
            .with_context(|| format!("Cannot assemble cable '{}'", cable.name));
        }
    }

    let mut report = GenerationReport::new(expander.is_dry_run());

    let parts_dir = layout.cable_models_dir(&cable.name);
    if !expander.is_dry_run() {
        fs::create_dir_all(&parts_dir).with_context(|| {
            format!("Failed to create cable model directory: {}", parts_dir.display())
        })?;
    }

    for (source, part) in sources.iter().zip(CABLE_MODEL_PARTS) {
        let destination = parts_dir.join(part);
        if !expander.is_dry_run() {
            fs::copy(source, &destination).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    source.display(),
                    destination.display()
                )
            })?;
        }
        debug!("Copied {} to {}", source.display(), destination.display());
        report.written.push(destination);
    }

    let blockstate_subs = Substitutions::new().with(CABLE_TOKEN, cable.name.as_str());
    report.merge(expander.expand_with(
        &layout.cable_blockstate_template(),
        &layout.blockstates_dir(),
        &cable.name,
        |text| blockstate_subs.apply(text),
    )?);

    let (x1, x2) = cable.bounds();
    let item_subs = Substitutions::new()
        .with(CABLE_TOKEN, cable.name.as_str())
        .with(TEXTURE_TOKEN, cable.texture(&layout.namespace))
        .with(X1_TOKEN, format_coordinate(x1))
        .with(X2_TOKEN, format_coordinate(x2));
    report.merge(expander.expand_with(
        &layout.cable_item_template(),
        &layout.item_models_dir(),
        &cable.name,
        |text| item_subs.apply(text),
    )?);

    info!(
        "Assembled cable '{}' ({} files, bounds {}..{})",
        cable.name,
        report.file_count(),
        x1,
        x2
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::PALETTE;
    use std::path::Path;
    use tempfile::TempDir;

    const BLOCKSTATE_TEMPLATE: &str =
        r#"{"multipart": [{"apply": {"model": "kontrol:block/cables/[CABLE]/middle"}, "color": "[[COLOR]]"}]}"#;
    const ITEM_TEMPLATE: &str = r#"{"textures": {"all": "[TEXTURE]"}, "elements": [{"from": [[X1], [X1], 0], "to": [[X2], [X2], 16]}], "name": "[[COLOR]]_[CABLE]"}"#;

    fn setup_dev(root: &Path) -> AssetLayout {
        let dev = root.join("dev");
        let bs = dev.join("autogen-template/blockstates");
        let item = dev.join("autogen-template/models/item");
        let parts = dev.join("autogen-assets/cable");
        fs::create_dir_all(&bs).unwrap();
        fs::create_dir_all(&item).unwrap();
        fs::create_dir_all(&parts).unwrap();
        fs::write(bs.join("cable_template.json"), BLOCKSTATE_TEMPLATE).unwrap();
        fs::write(item.join("cable_template.json"), ITEM_TEMPLATE).unwrap();
        fs::write(parts.join("middle.json"), "{\"part\": \"middle\"}").unwrap();
        fs::write(parts.join("connector.json"), "{\"part\": \"connector\"}").unwrap();
        AssetLayout::new(dev, &Config::default())
    }

    #[test]
    fn test_create_cable_writes_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let layout = setup_dev(temp_dir.path());
        let cable = CableSpec::new("basic_cable", layout.dev_dir.join("autogen-assets/cable"), 1.5);

        let report = create_cable(&TemplateExpander::new(), &layout, &cable).unwrap();
        assert_eq!(report.file_count(), 34);
        assert!(report.unresolved.is_empty());

        let parts_dir = layout.cable_models_dir("basic_cable");
        assert_eq!(
            fs::read_to_string(parts_dir.join("middle.json")).unwrap(),
            "{\"part\": \"middle\"}"
        );
        assert_eq!(
            fs::read_to_string(parts_dir.join("connector.json")).unwrap(),
            "{\"part\": \"connector\"}"
        );

        for color in PALETTE {
            let blockstate = fs::read_to_string(
                layout
                    .blockstates_dir()
                    .join(format!("{color}_basic_cable.json")),
            )
            .unwrap();
            assert!(blockstate.contains("kontrol:block/cables/basic_cable/middle"));
            assert!(blockstate.contains(&format!("\"color\": \"{color}\"")));
            assert!(!blockstate.contains("[CABLE]"));
        }
    }

    #[test]
    fn test_create_cable_item_bounds_and_texture() {
        let temp_dir = TempDir::new().unwrap();
        let layout = setup_dev(temp_dir.path());
        let cable = CableSpec::new("basic_cable", layout.dev_dir.join("autogen-assets/cable"), 1.5);

        create_cable(&TemplateExpander::new(), &layout, &cable).unwrap();

        let item = fs::read_to_string(layout.item_models_dir().join("red_basic_cable.json")).unwrap();
        assert_eq!(
            item,
            r#"{"textures": {"all": "kontrol:block/cables/basic_cable"}, "elements": [{"from": [6.5, 6.5, 0], "to": [9.5, 9.5, 16]}], "name": "red_basic_cable"}"#
        );
    }

    #[test]
    fn test_create_cable_uses_configured_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let mut layout = setup_dev(temp_dir.path());
        layout.namespace = "othermod".to_string();
        let cable = CableSpec::new("thin", layout.dev_dir.join("autogen-assets/cable"), 1.0);

        create_cable(&TemplateExpander::new(), &layout, &cable).unwrap();

        let item = fs::read_to_string(layout.item_models_dir().join("white_thin.json")).unwrap();
        assert!(item.contains("othermod:block/cables/thin"));
        assert!(item.contains("[7, 7, 0]"));
        assert!(item.contains("[9, 9, 16]"));
    }

    #[test]
    fn test_missing_connector_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let layout = setup_dev(temp_dir.path());
        let parts = layout.dev_dir.join("autogen-assets/cable");
        fs::remove_file(parts.join("connector.json")).unwrap();
        let cable = CableSpec::new("basic_cable", parts, 1.5);

        let err = create_cable(&TemplateExpander::new(), &layout, &cable).unwrap_err();

        let io_err = err.root_cause().downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert!(!layout.cable_models_dir("basic_cable").exists());
        assert!(!layout.blockstates_dir().exists());
        assert!(!layout.item_models_dir().exists());
    }

    #[test]
    fn test_missing_middle_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let layout = setup_dev(temp_dir.path());
        let parts = layout.dev_dir.join("autogen-assets/cable");
        fs::remove_file(parts.join("middle.json")).unwrap();
        let cable = CableSpec::new("basic_cable", parts, 1.5);

        assert!(create_cable(&TemplateExpander::new(), &layout, &cable).is_err());
        assert!(!layout.cable_models_dir("basic_cable").exists());
        assert!(!layout.blockstates_dir().exists());
    }

    #[test]
    fn test_invalid_size_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let layout = setup_dev(temp_dir.path());
        let cable = CableSpec::new("basic_cable", layout.dev_dir.join("autogen-assets/cable"), f64::NAN);

        assert!(create_cable(&TemplateExpander::new(), &layout, &cable).is_err());
        assert!(!layout.assets_root().exists());
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let layout = setup_dev(temp_dir.path());
        let cable = CableSpec::new("basic_cable", layout.dev_dir.join("autogen-assets/cable"), 1.5);

        let report = create_cable(&TemplateExpander::dry_run(), &layout, &cable).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.file_count(), 34);
        assert!(!layout.assets_root().exists());
    }
}
