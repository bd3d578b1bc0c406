//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, the placeholder tokens understood by
//! the generators and the default output locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Kontrol Asset Generator";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "kontrol-autogen";

/// Name of the directory the generator must run from.
pub const DEV_DIR_NAME: &str = "dev";

/// Name of the optional configuration file inside the dev directory.
pub const CONFIG_FILE_NAME: &str = "autogen.toml";

/// Mod namespace used for asset and data paths when none is configured.
pub const DEFAULT_NAMESPACE: &str = "kontrol";

/// Resource tree root, relative to the dev directory.
pub const DEFAULT_RESOURCES_ROOT: &str = "../src/main/resources";

/// Replaced with the palette color label in every template.
pub const COLOR_TOKEN: &str = "[[COLOR]]";

/// Replaced with the cable identifier.
pub const CABLE_TOKEN: &str = "[CABLE]";

/// Replaced with the cable texture resource path.
pub const TEXTURE_TOKEN: &str = "[TEXTURE]";

/// Replaced with the lower texture bound (`8 - size`).
pub const X1_TOKEN: &str = "[X1]";

/// Replaced with the upper texture bound (`8 + size`).
pub const X2_TOKEN: &str = "[X2]";
