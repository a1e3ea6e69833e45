//! Hide This - command line host
//!
//! Renders the shortcodes of a document read from stdin for one viewer:
//!
//! ```text
//! hidethis [VIEWER_JSON] < post.html > rendered.html
//! ```
//!
//! Without a viewer file the document is rendered for an anonymous viewer.

use std::io::{self, Read, Write};
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hidethis::{
    ShortcodeRenderer, ViewerContext,
    config::{Config, LogConfig, LogFormat},
    viewer::load_viewer,
};

fn init_tracing(config: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the rendered document
    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log);

    let viewer = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading viewer from {}", path);
            load_viewer(Path::new(&path))?
        }
        None => {
            tracing::info!("No viewer given, rendering for an anonymous viewer");
            ViewerContext::anonymous()
        }
    };

    let renderer = ShortcodeRenderer::from_config(&config.render)?;

    let mut document = String::new();
    io::stdin().read_to_string(&mut document)?;

    let rendered = renderer.render(&document, &viewer);
    io::stdout().write_all(rendered.as_bytes())?;

    tracing::info!(bytes_in = document.len(), bytes_out = rendered.len(), "Document rendered");
    Ok(())
}
