use derive_more::{AsRef, Deref, Display, From, Into};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Headline(String);

crate::impl_string_newtype!(Headline);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ButtonLabel(String);

crate::impl_string_newtype!(ButtonLabel);

/// Where a slide's image comes from. Only local paths are ever read;
/// remote URIs are recognized so the loader can skip them with a warning.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ImageSource(String);

crate::impl_string_newtype!(ImageSource);

impl ImageSource {
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Resolves the source to a filesystem path, expanding a leading `~/`.
    pub fn to_path(&self) -> Option<PathBuf> {
        if self.is_remote() {
            return None;
        }
        if let Some(rest) = self.0.strip_prefix("~/") {
            return UserDirs::new().map(|dirs| dirs.home_dir().join(rest));
        }
        Some(PathBuf::from(&self.0))
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Heading(String);

crate::impl_string_newtype!(Heading);

impl Heading {
    /// Identifier referencing the visually hidden heading element:
    /// lowercased, every whitespace run collapsed to a single hyphen.
    pub fn anchor_id(&self) -> String {
        let mut id = String::from("slider-heading__");
        let mut in_gap = false;
        for c in self.0.chars() {
            if c.is_whitespace() {
                if !in_gap {
                    id.push('-');
                    in_gap = true;
                }
            } else {
                id.extend(c.to_lowercase());
                in_gap = false;
            }
        }
        id
    }
}

/// One slide's content. `index` is unique and equals the record's position
/// in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub index: usize,
    pub image: ImageSource,
    pub headline: Headline,
    pub button: ButtonLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_id_lowercases_and_hyphenates() {
        let heading = Heading::new("Example Slider");
        assert_eq!(heading.anchor_id(), "slider-heading__example-slider");
    }

    #[test]
    fn anchor_id_collapses_whitespace_runs() {
        let heading = Heading::new("Our\t Latest  Picks");
        assert_eq!(heading.anchor_id(), "slider-heading__our-latest-picks");
    }

    #[test]
    fn image_source_recognizes_remote_uris() {
        assert!(ImageSource::new("https://example.com/a.jpg").is_remote());
        assert!(!ImageSource::new("/usr/share/pixmaps/a.jpg").is_remote());
        assert!(ImageSource::new("https://example.com/a.jpg").to_path().is_none());
    }

    #[test]
    fn image_source_expands_home_prefix() {
        let source = ImageSource::new("~/Pictures/a.jpg");
        if let Some(path) = source.to_path() {
            assert!(path.ends_with("Pictures/a.jpg"));
            assert!(!path.to_string_lossy().starts_with('~'));
        }
    }

    #[test]
    fn slide_record_serde_round_trip() {
        let record = SlideRecord {
            index: 2,
            image: ImageSource::new("/tmp/guitar.jpg"),
            headline: Headline::new("For Your Current Mood"),
            button: ButtonLabel::new("Listen"),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SlideRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
