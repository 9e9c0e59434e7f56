use std::fmt;

/// Content category derived purely from a filename's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    Audio,
    Image,
    Video,
    Unsupported,
}

const CATEGORY_TABLE: &[(&str, Category)] = &[
    ("txt", Category::Text),
    ("pdf", Category::Text),
    ("mp3", Category::Audio),
    ("wav", Category::Audio),
    ("m4a", Category::Audio),
    ("mp4", Category::Video),
    ("avi", Category::Video),
    ("mov", Category::Video),
    ("jpg", Category::Image),
    ("jpeg", Category::Image),
    ("png", Category::Image),
];

impl Category {
    pub fn from_filename(filename: &str) -> Self {
        match extension_of(filename) {
            Some(ext) => Self::from_extension(&ext),
            None => Self::Unsupported,
        }
    }

    pub fn from_extension(extension: &str) -> Self {
        let lowered = extension.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(ext, _)| *ext == lowered)
            .map(|(_, category)| *category)
            .unwrap_or(Self::Unsupported)
    }

    /// Every extension with a supported category, in table order.
    pub fn allowed_extensions() -> impl Iterator<Item = &'static str> {
        CATEGORY_TABLE.iter().map(|(ext, _)| *ext)
    }

    pub fn is_supported(&self) -> bool {
        *self != Self::Unsupported
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Audio => "audio",
            Category::Image => "image",
            Category::Video => "video",
            Category::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Substring after the last `.`, lowercased. `None` when there is no dot.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}
