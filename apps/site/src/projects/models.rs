use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Work,
    Project,
    /// Any kind this site does not filter on.
    #[serde(other)]
    Other,
}

impl ProjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectKind::Work => "work",
            ProjectKind::Project => "project",
            ProjectKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub label: String,
    pub value: Value,
}

impl Metric {
    /// `"<label>: <value>"`, with the value printed the way a browser
    /// stringifies it: strings unquoted, `null` literally, arrays comma-joined.
    pub fn badge_text(&self) -> String {
        format!("{}: {}", self.label, display_value(&self.value))
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// One entry of `data/projects.json`. Every field is optional in the file.
///
/// Fields are read independently: a field of the wrong type is treated as
/// absent, and list entries of the wrong type are skipped, so one odd item
/// never rejects the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub org: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date_range: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub kind: Option<ProjectKind>,
    #[serde(deserialize_with = "lenient_vec")]
    pub domains: Vec<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub metrics: Vec<Metric>,
    #[serde(deserialize_with = "lenient")]
    pub color_key: Option<String>,
}

/// Value of the expected type, or the default when the JSON has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Entries of the expected type from an array; anything else is empty.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

impl ProjectItem {
    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }
}
