//! Application configuration
//!
//! A default configuration is embedded in the binary. The host page may
//! override any part of it with an inline TOML block:
//!
//! ```html
//! <script type="application/toml" id="app-config">
//! [api]
//! port = 8080
//! </script>
//! ```

use serde::Deserialize;

/// Id of the inline `<script>` element holding config overrides
pub const INLINE_CONFIG_ID: &str = "app-config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit base URL; when absent the base is built from the window location
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// TTF, заменяющий встроенный шрифт PDF; загружается при открытии отчёта
    #[serde(default)]
    pub font_url: Option<String>,
    /// Имя, под которым регистрируется шрифт из `font_url`
    pub font_family: String,
    pub font_size_pt: f32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub row_height_mm: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[export]
font_family = "DejaVuSans"
font_size_pt = 10.0
page_width_mm = 210.0
page_height_mm = 297.0
margin_mm = 10.0
row_height_mm = 7.0
"#;

impl AppConfig {
    /// Parse the embedded defaults, then apply `overrides` key by key
    pub fn from_toml(overrides: Option<&str>) -> Result<Self, ConfigError> {
        let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
        if let Some(text) = overrides {
            let extra: toml::Table = toml::from_str(text)?;
            merge_tables(&mut base, extra);
        }
        Ok(toml::Value::Table(base).try_into()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 3000,
            },
            export: ExportConfig {
                font_url: None,
                font_family: "DejaVuSans".to_string(),
                font_size_pt: 10.0,
                page_width_mm: 210.0,
                page_height_mm: 297.0,
                margin_mm: 10.0,
                row_height_mm: 7.0,
            },
        }
    }
}

fn merge_tables(base: &mut toml::Table, extra: toml::Table) {
    for (key, value) in extra {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Load configuration for the running page
///
/// Invalid overrides are logged and ignored; the embedded default is used instead.
pub fn load_config() -> AppConfig {
    let inline = read_inline_config();
    match AppConfig::from_toml(inline.as_deref()) {
        Ok(config) => {
            if inline.is_some() {
                log::info!("Loaded config overrides from #{}", INLINE_CONFIG_ID);
            }
            config
        }
        Err(e) => {
            log::warn!("{}; using default embedded configuration", e);
            AppConfig::default()
        }
    }
}

fn read_inline_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(INLINE_CONFIG_ID)?;
    element.text_content().filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_merge_per_key() {
        let config = AppConfig::from_toml(Some(
            r#"
            [api]
            base_url = "https://pos.example.la"
            [export]
            font_size_pt = 9.0
            "#,
        ))
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://pos.example.la"));
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.export.font_size_pt, 9.0);
        assert_eq!(config.export.font_family, "DejaVuSans");
        assert_eq!(config.export.font_url, None);
    }

    #[test]
    fn test_font_url_override() {
        let config = AppConfig::from_toml(Some(
            r#"
            [export]
            font_url = "/fonts/NotoSansLao-Regular.ttf"
            font_family = "NotoSansLao"
            "#,
        ))
        .unwrap();
        assert_eq!(
            config.export.font_url.as_deref(),
            Some("/fonts/NotoSansLao-Regular.ttf")
        );
        assert_eq!(config.export.font_family, "NotoSansLao");
    }

    #[test]
    fn test_bad_override_is_an_error() {
        assert!(AppConfig::from_toml(Some("[api]\nport = \"x\"")).is_err());
        assert!(AppConfig::from_toml(Some("not toml at all = = ")).is_err());
    }
}
