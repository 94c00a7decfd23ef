use serde::Deserialize;

#[derive(Deserialize)]
pub struct SettingsForm {
    pub api_base_url: String,
}

#[derive(Deserialize)]
pub struct CheckQuery {
    #[serde(default)]
    pub name: Option<String>,
}
