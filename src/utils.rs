use std::collections::HashMap;

use crate::models::App;

/// Key used for case-insensitive name matching.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Builds the lowercase name -> app id lookup. Later entries overwrite
/// earlier ones, so on duplicate names the last app in list order wins.
pub fn build_name_index(apps: &[App]) -> HashMap<String, u32> {
    let mut index = HashMap::with_capacity(apps.len());
    for app in apps {
        index.insert(normalize_name(&app.name), app.app_id);
    }
    index
}
