use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Custom deserializer for Duration from milliseconds
pub fn deserialize_duration_from_ms<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(ms))
}

/// Deserializes a list of strings given either as a sequence or as a single
/// comma-separated string (the form environment overrides arrive in).
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringList {
        Many(Vec<String>),
        Joined(String),
    }

    let items = match StringList::deserialize(deserializer)? {
        StringList::Many(items) => items,
        StringList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
    };

    Ok(items.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
}
