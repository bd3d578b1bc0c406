//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Blockstate template shared by all cables.
pub const CABLE_BLOCKSTATE_TEMPLATE: &str = r#"{
  "multipart": [
    { "apply": { "model": "kontrol:block/cables/[CABLE]/middle" } },
    { "when": { "north": true }, "apply": { "model": "kontrol:block/cables/[CABLE]/connector" } }
  ],
  "color": "[[COLOR]]"
}
"#;

/// Item model template shared by all cables.
pub const CABLE_ITEM_TEMPLATE: &str = r#"{
  "textures": { "particle": "[TEXTURE]", "all": "[TEXTURE]_[[COLOR]]" },
  "elements": [ { "from": [0, [X1], [X1]], "to": [16, [X2], [X2]] } ]
}
"#;

/// Per-category wire template.
pub const WIRE_TEMPLATE: &str = r#"{ "type": "wire", "color": "[[COLOR]]" }
"#;

/// A temporary project laid out like the mod repository.
pub struct TestProject {
    /// Keeps the directory alive for the duration of the test
    pub temp: TempDir,
}

impl TestProject {
    /// Project root (parent of `dev/`).
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// The `dev/` directory.
    pub fn dev(&self) -> PathBuf {
        self.root().join("dev")
    }

    /// `src/main/resources/assets/kontrol`
    pub fn assets(&self) -> PathBuf {
        self.root().join("src/main/resources/assets/kontrol")
    }

    /// `src/main/resources/data/kontrol`
    pub fn data(&self) -> PathBuf {
        self.root().join("src/main/resources/data/kontrol")
    }

    /// Writes a file under `dev/`, creating parent directories.
    pub fn write_dev_file(&self, relative: &str, content: &str) {
        let path = self.dev().join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dev subdirectory");
        fs::write(path, content).expect("Failed to write dev file");
    }
}

/// Creates a project with an empty `dev/` directory.
pub fn empty_project() -> TestProject {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(temp.path().join("dev")).expect("Failed to create dev dir");
    TestProject { temp }
}

/// Creates a project with cable templates and `basic_wire` templates for every category.
pub fn sample_project() -> TestProject {
    let project = empty_project();
    project.write_dev_file(
        "autogen-template/blockstates/cable_template.json",
        CABLE_BLOCKSTATE_TEMPLATE,
    );
    project.write_dev_file(
        "autogen-template/models/item/cable_template.json",
        CABLE_ITEM_TEMPLATE,
    );
    project.write_dev_file("autogen-assets/basic_cable/middle.json", "{ \"part\": \"middle\" }\n");
    project.write_dev_file(
        "autogen-assets/basic_cable/connector.json",
        "{ \"part\": \"connector\" }\n",
    );
    for dir in ["blockstates", "model_item", "recipes", "loot_tables"] {
        project.write_dev_file(&format!("{dir}/basic_wire.json"), WIRE_TEMPLATE);
    }
    project
}

/// The sixteen palette labels in generation order.
pub const COLORS: [&str; 16] = [
    "white",
    "red",
    "orange",
    "pink",
    "yellow",
    "lime",
    "green",
    "light_blue",
    "cyan",
    "blue",
    "magenta",
    "purple",
    "brown",
    "gray",
    "light_gray",
    "black",
];

/// Counts regular files directly inside `dir` (0 if it does not exist).
pub fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_file())
                .count()
        })
        .unwrap_or(0)
}
