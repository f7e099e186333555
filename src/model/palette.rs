use super::Status;
use ahash::AHashMap;

/// Used when neither the caller's map nor the defaults know a status.
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// Resolves element statuses to display colors for renderers.
///
/// Lookup order is the caller's custom map, then the built-in defaults, then
/// [`FALLBACK_COLOR`].
#[derive(Debug, Clone, Default)]
pub struct Palette {
    custom: AHashMap<String, String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, status: impl Into<String>, color: impl Into<String>) -> Self {
        self.custom.insert(status.into(), color.into());
        self
    }

    pub fn resolve(&self, status: &Status) -> &str {
        if let Some(color) = self.custom.get(status.as_str()) {
            return color;
        }
        default_color(status).unwrap_or(FALLBACK_COLOR)
    }
}

fn default_color(status: &Status) -> Option<&'static str> {
    let color = match status {
        Status::Unfinished => "#e5e7eb",
        Status::Prepare => "#fbbf24",
        Status::Target => "#f87171",
        Status::Complete => "#34d399",
        Status::Inactive => "#d1d5db",
        Status::Custom(tag) => match tag.as_str() {
            "visited" => "#93c5fd",
            "wall" => "#374151",
            _ => return None,
        },
    };
    Some(color)
}
