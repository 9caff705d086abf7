//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sphinxfeed.toml`:
//!
//! | Module     | TOML Section   | Purpose                           |
//! |------------|----------------|-----------------------------------|
//! | `build`    | `[build]`      | Input/output paths, search feed   |
//! | `site`     | `[site]`       | Site base URL                     |

pub mod build;
pub mod site;

pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
