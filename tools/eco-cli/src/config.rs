//! Config file discovery and the `eco config init` template.

/// File names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["eco.toml", ".eco.toml", "eco.json"];

/// Generate a default eco.toml.
pub fn generate_default_config() -> String {
    r#"# Sustainable marketplace configuration

[catalog]
# fixture = "fixtures/products.json"
seed = 42
# "stable" keeps decorations fixed per catalog load, "per_render" redraws them
decoration = "stable"

[listings]
# "static" logs intents without applying them, "in_memory" applies them
store = "static"
# "preserve_draft" keeps typed fields on cancel, "reset_draft" clears them
cancel_policy = "preserve_draft"

[logging]
level = "info"
format = "json"
"#
    .to_string()
}
