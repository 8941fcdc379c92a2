//! Loader for the RON content compiled into the binary.

use ron::Options;

use super::data::*;
use super::registry::ContentRegistry;

pub(crate) const LEVELS_FILE: &str = "levels.ron";
pub(crate) const DEFAULTS_FILE: &str = "gameplay_defaults.ron";

const LEVELS_SOURCE: &str = include_str!("../../assets/data/levels.ron");
const DEFAULTS_SOURCE: &str = include_str!("../../assets/data/gameplay_defaults.ron");

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a RON document containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(file: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse a single RON struct (not wrapped in DataFile).
pub(crate) fn parse_single_file<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the embedded level and defaults files into a ContentRegistry.
pub fn load_all_content() -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    load_from_sources(LEVELS_SOURCE, DEFAULTS_SOURCE)
}

/// Build a registry from raw RON sources.
/// Returns errors for any file that fails to parse.
pub fn load_from_sources(
    levels_source: &str,
    defaults_source: &str,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    match parse_data_file::<LevelDef>(LEVELS_FILE, levels_source) {
        Ok(levels) => registry.levels = levels,
        Err(e) => errors.push(e),
    }

    // Gameplay defaults are required; archetypes live inside them
    let gameplay_defaults = match parse_single_file::<GameplayDefaults>(DEFAULTS_FILE, defaults_source)
    {
        Ok(defaults) => defaults,
        Err(e) => {
            errors.push(e);
            return Err(errors);
        }
    };

    for archetype in &gameplay_defaults.archetypes {
        registry
            .archetypes
            .insert(archetype.id.clone(), archetype.clone());
    }

    if errors.is_empty() {
        Ok((registry, gameplay_defaults))
    } else {
        Err(errors)
    }
}
