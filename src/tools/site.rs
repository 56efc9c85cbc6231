//! Site information and settings tools.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{
    project_settings, project_settings_update, project_site_info, SettingsSource, SiteInfoSource,
};
use crate::wordpress::{Query, WpClient};

const SETTINGS: &str = "/wp/v2/settings";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_site_info",
            "Get WordPress site information (name, description, URL, timezone)",
            json!({ "type": "object", "properties": {} }),
        ),
        ToolDefinition::new(
            "wp_get_settings",
            "Get WordPress site settings (title, tagline, timezone, date format)",
            json!({ "type": "object", "properties": {} }),
        ),
        ToolDefinition::new(
            "wp_update_settings",
            "Update WordPress site settings",
            json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Site title" },
                    "description": { "type": "string", "description": "Site tagline/description" },
                    "timezone_string": {
                        "type": "string",
                        "description": "Timezone (e.g., Europe/Berlin)"
                    }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_get_namespaces",
            "List available REST API namespaces (plugins may add custom endpoints)",
            json!({ "type": "object", "properties": {} }),
        ),
    ]
}

/// Arguments for `wp_update_settings`. Empty strings are not sent.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateSettingsArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_string: Option<String>,
}

impl UpdateSettingsArgs {
    fn without_empty(self) -> Self {
        let keep = |value: Option<String>| value.filter(|s| !s.is_empty());
        Self {
            title: keep(self.title),
            description: keep(self.description),
            timezone_string: keep(self.timezone_string),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct Namespaces {
    #[serde(default)]
    namespaces: Vec<String>,
}

pub(crate) async fn site_info(client: &WpClient) -> ToolOutcome {
    let info: SiteInfoSource = client.get("/", &Query::new()).await?;
    json_result(&project_site_info(&info))
}

pub(crate) async fn get_settings(client: &WpClient) -> ToolOutcome {
    let settings: SettingsSource = client.get(SETTINGS, &Query::new()).await?;
    json_result(&project_settings(&settings))
}

pub(crate) async fn update_settings(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let body = parse_args::<UpdateSettingsArgs>(arguments)?.without_empty();
    let settings: SettingsSource = client.post(SETTINGS, &body).await?;
    json_result(&project_settings_update(&settings))
}

pub(crate) async fn get_namespaces(client: &WpClient) -> ToolOutcome {
    let index: Namespaces = client.get("/", &Query::new()).await?;
    json_result(&index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_fields_dropped() {
        let args: UpdateSettingsArgs =
            parse_args(&json!({"title": "", "description": "Tagline"})).unwrap();
        let body = serde_json::to_value(args.without_empty()).unwrap();
        assert_eq!(body, json!({"description": "Tagline"}));
    }
}
