//! Hide This - shortcode-driven content visibility
//!
//! This library wires the [`hidethis_rules`] engine into a content-rendering
//! host. A document's `[hide]` / `[hidethis]` blocks are resolved per viewer:
//!
//! ```text
//! [hide for="editor, :publish_posts" exclude="userid:3"]Draft notes[/hide]
//! ```
//!
//! # Architecture
//!
//! - **Attributes**: shortcode attribute parsing and defaults
//! - **Selector**: inclusion pass, exclusion pass, test annotation
//! - **Hooks**: host-registered transforms at the extension points
//! - **Shortcode**: finding and expanding blocks in a document

pub mod attributes;
pub mod config;
pub mod constants;
pub mod error;
pub mod hooks;
pub mod selector;
pub mod shortcode;
pub mod viewer;

// Re-export commonly used types
pub use attributes::Attributes;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use hidethis_rules::context::ViewerContext;
pub use hooks::Hooks;
pub use selector::{ContentSelector, resolve_visibility};
pub use shortcode::ShortcodeRenderer;
