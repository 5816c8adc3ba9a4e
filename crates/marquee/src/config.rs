use barker::content::{ButtonLabel, Heading, Headline, ImageSource, SlideRecord};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlideConfig {
    pub image: ImageSource,
    pub headline: Headline,
    pub button: ButtonLabel,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub heading: Heading,
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

impl Config {
    /// Materializes the slide deck. Indices are assigned from position, so
    /// they are always unique and sequential from 0.
    pub fn deck(&self) -> Vec<SlideRecord> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideRecord {
                index,
                image: slide.image.clone(),
                headline: slide.headline.clone(),
                button: slide.button.clone(),
            })
            .collect()
    }

    /// The built-in demo deck, used whenever no usable config exists. The
    /// slider assumes a non-empty deck, so this is the N >= 1 guarantee.
    pub fn demo() -> Self {
        let entries = [
            ("New Fashion Apparel", "Shop now", "fashion.jpg"),
            ("In The Wilderness", "Book travel", "forest.jpg"),
            ("For Your Current Mood", "Listen", "guitar.jpg"),
            ("Focus On The Writing", "Get Focused", "typewriter.jpg"),
        ];

        Self {
            heading: Heading::new("Example Slider"),
            slides: entries
                .into_iter()
                .map(|(headline, button, file)| SlideConfig {
                    image: ImageSource::new(format!("~/Pictures/marquee/{}", file)),
                    headline: Headline::new(headline),
                    button: ButtonLabel::new(button),
                })
                .collect(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "fairground", "marquee").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("MARQUEE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the config, falling back to the demo deck when the file is
/// missing, malformed, or lists no slides.
pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        return Config::demo();
    }

    match load_config() {
        Ok(c) if !c.slides.is_empty() => c,
        Ok(_) => {
            log::warn!("Config lists no slides, using the demo deck");
            Config::demo()
        }
        Err(e) => {
            log::warn!("Failed to load config ({}), using the demo deck", e);
            Config::demo()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Watches the config directory and emits `ConfigReload` whenever the
/// config file itself changes.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn default_config_parses() {
        let config = parse(DEFAULT_CONFIG);
        assert_eq!(config.heading.as_str(), "Example Slider");
        assert_eq!(config.slides.len(), 4);
        assert_eq!(config.slides[2].button.as_str(), "Listen");
    }

    #[test]
    fn deck_indices_are_sequential_from_zero() {
        let deck = parse(DEFAULT_CONFIG).deck();
        for (i, record) in deck.iter().enumerate() {
            assert_eq!(record.index, i);
        }
    }

    #[test]
    fn missing_slides_key_yields_empty_deck() {
        let config = parse("heading = \"Empty\"");
        assert!(config.deck().is_empty());
    }

    #[test]
    fn demo_deck_is_never_empty() {
        let demo = Config::demo();
        assert!(!demo.slides.is_empty());
        assert_eq!(demo.deck().len(), demo.slides.len());
    }
}
