//! Configuration types

use crate::controller::ControllerOptions;
use crate::error::{Error, Result};
use crate::request::DEFAULT_PAGE_SIZE;
use crate::types::PaginationMode;
use serde::{Deserialize, Serialize};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsConfig {
    /// List definitions, in file order
    #[serde(default)]
    pub lists: Vec<ListConfig>,
}

impl ListsConfig {
    /// Look up a list by name
    pub fn get(&self, name: &str) -> Result<&ListConfig> {
        self.lists
            .iter()
            .find(|list| list.name == name)
            .ok_or_else(|| Error::list_not_found(name))
    }

    /// Names of all configured lists
    pub fn names(&self) -> Vec<&str> {
        self.lists.iter().map(|list| list.name.as_str()).collect()
    }
}

/// One paged list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Unique list name (e.g., "available")
    pub name: String,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Allowed page sizes (empty = any)
    #[serde(default)]
    pub page_size_options: Vec<usize>,

    #[serde(default)]
    pub min_page_size: Option<usize>,

    #[serde(default)]
    pub max_page_size: Option<usize>,

    #[serde(default)]
    pub mode: PaginationMode,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl ListConfig {
    /// Create a pager list with the default page size
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: Vec::new(),
            min_page_size: None,
            max_page_size: None,
            mode: PaginationMode::Pager,
        }
    }

    /// Controller options for this list
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions::new(self.default_page_size)
            .with_page_size_options(self.page_size_options.clone())
            .with_bounds(self.min_page_size, self.max_page_size)
            .with_mode(self.mode)
    }
}

impl From<&ListConfig> for ControllerOptions {
    fn from(list: &ListConfig) -> Self {
        list.controller_options()
    }
}
