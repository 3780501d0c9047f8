//! List configuration
//!
//! Named list definitions loaded from YAML.
//!
//! # Example
//!
//! ```yaml
//! lists:
//!   - name: available
//!     default_page_size: 20
//!     page_size_options: [10, 20, 50]
//!     mode: pager
//!   - name: sold
//!     default_page_size: 12
//!     mode: loadMore
//! ```

mod parser;
mod types;

pub use parser::{load_config, load_config_from_str};
pub use types::{ListConfig, ListsConfig};
