//! YAML parser for list configuration

use crate::config::types::{ListConfig, ListsConfig};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load list configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ListsConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    let config = load_config_from_str(&content)?;
    debug!(path = %path.display(), lists = config.lists.len(), "loaded list config");
    Ok(config)
}

/// Load list configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ListsConfig> {
    let config: ListsConfig = serde_yaml::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ListsConfig) -> Result<()> {
    if config.lists.is_empty() {
        return Err(Error::config("Config must define at least one list"));
    }

    let names: HashSet<_> = config.lists.iter().map(|l| &l.name).collect();
    if names.len() != config.lists.len() {
        return Err(Error::config("Duplicate list names found"));
    }

    for list in &config.lists {
        validate_list(list)?;
    }
    Ok(())
}

fn validate_list(list: &ListConfig) -> Result<()> {
    if list.name.is_empty() {
        return Err(Error::missing_field("name"));
    }

    let field = |name: &str| format!("{}.{name}", list.name);
    let size = list.default_page_size;

    if size == 0 {
        return Err(Error::invalid_value(
            field("default_page_size"),
            "must be positive",
        ));
    }

    if list.page_size_options.contains(&0) {
        return Err(Error::invalid_value(
            field("page_size_options"),
            "options must be positive",
        ));
    }

    if !list.page_size_options.is_empty() && !list.page_size_options.contains(&size) {
        return Err(Error::invalid_value(
            field("default_page_size"),
            format!("{size} is not one of {:?}", list.page_size_options),
        ));
    }

    if let (Some(min), Some(max)) = (list.min_page_size, list.max_page_size) {
        if min > max {
            return Err(Error::invalid_value(
                field("min_page_size"),
                format!("{min} exceeds max_page_size {max}"),
            ));
        }
    }

    if list.min_page_size.is_some_and(|min| size < min) {
        return Err(Error::invalid_value(
            field("default_page_size"),
            "below min_page_size",
        ));
    }

    if list.max_page_size.is_some_and(|max| size > max) {
        return Err(Error::invalid_value(
            field("default_page_size"),
            "above max_page_size",
        ));
    }

    Ok(())
}
