use gloo::console::{error, log};
use serde::Deserialize;
use web_sys::window;

/// Id of the `<script type="application/json">` block in index.html.
const CONFIG_ELEMENT_ID: &str = "careconnect-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bot_name: String,
    pub typing_delay_ms: u32,
    pub handoff_delay_ms: u32,
    pub scroll_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub analyze_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_name: "EaseBot".to_string(),
            typing_delay_ms: 1000,
            handoff_delay_ms: 1000,
            scroll_delay_ms: 100,
            submit_delay_ms: 1500,
            analyze_delay_ms: 1500,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| format!("config JSON parse error: {e}"))
    }
}

fn config_json_from_dom() -> Result<Option<String>, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    Ok(doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .map(|el| el.text_content().unwrap_or_default()))
}

/// Reads the embedded config, falling back to defaults on any problem.
pub fn load_config() -> AppConfig {
    match config_json_from_dom() {
        Ok(Some(json)) => match AppConfig::from_json(&json) {
            Ok(cfg) => {
                log!("careconnect: config loaded from #careconnect-config");
                cfg
            }
            Err(e) => {
                error!(format!("careconnect: {e}; using defaults"));
                AppConfig::default()
            }
        },
        Ok(None) => AppConfig::default(),
        Err(e) => {
            error!(format!("careconnect: cannot read config ({e}); using defaults"));
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_means_defaults() {
        assert_eq!(AppConfig::from_json("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = AppConfig::from_json(r#"{"bot_name":"CareBot","submit_delay_ms":10}"#).unwrap();
        assert_eq!(cfg.bot_name, "CareBot");
        assert_eq!(cfg.submit_delay_ms, 10);
        assert_eq!(cfg.typing_delay_ms, 1000);
        assert_eq!(cfg.analyze_delay_ms, 1500);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AppConfig::from_json("{bot_name:").unwrap_err();
        assert!(err.starts_with("config JSON parse error"));
    }
}
