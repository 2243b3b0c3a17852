use lazy_static::lazy_static;
use regex::Regex;

use crate::{camel_case::Abbreviations, error::MapperError, utils::quote};

lazy_static! {
    static ref ABBREVIATION_WORD: Regex = Regex::new(r"^[a-z][a-z0-9]*$").unwrap();
}

/// Knobs of the naming algorithm. The only way to set them is the plugin
/// parameter carried in the request (`--swift-mapper_opt=...`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingOptions {
    pub abbreviations: Abbreviations,
}

impl NamingOptions {
    /// Parse a protoc plugin parameter: comma-separated `key=value` entries.
    ///
    /// Supported keys:
    /// - `abbreviations`: `:`-separated lower-case words, replacing the
    ///   default `url:http:https:id`. An empty value disables abbreviations.
    pub fn from_parameter(parameter: &str) -> Result<NamingOptions, MapperError> {
        let mut options = NamingOptions::default();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                MapperError::InvalidParameter(format!("Expected key=value but found {}", quote(entry)))
            })?;

            match key.trim() {
                "abbreviations" => {
                    let words: Vec<&str> = value.split(':').filter(|w| !w.is_empty()).collect();
                    if let Some(bad) = words.iter().find(|w| !ABBREVIATION_WORD.is_match(w)) {
                        return Err(MapperError::InvalidParameter(format!(
                            "Abbreviation {} must be a lower-case ASCII word",
                            quote(bad)
                        )));
                    }
                    options.abbreviations = Abbreviations::new(words);
                }
                other => {
                    return Err(MapperError::InvalidParameter(format!(
                        "Unknown option {}",
                        quote(other)
                    )))
                }
            }
        }

        tracing::debug!(
            abbreviations = ?options.abbreviations.iter().collect::<Vec<_>>(),
            "naming options"
        );
        Ok(options)
    }
}
