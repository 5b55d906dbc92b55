use serde::Deserialize;

/// One entry of the global Steam app list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct App {
    #[serde(rename = "appid")]
    pub app_id: u32,
    /// A handful of entries in the live list carry no name
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<App>,
}

#[derive(Debug, Deserialize)]
pub struct VanityResponse {
    pub response: VanityResult,
}

/// `success` is 1 on a match and 42 when no user has that vanity name.
#[derive(Debug, Deserialize)]
pub struct VanityResult {
    pub steamid: Option<String>,
    pub success: Option<i32>,
    pub message: Option<String>,
}
