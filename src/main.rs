use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use newscards::config::{load_feed, Config, ThemeVariant};
use newscards::model::samples;
use newscards::ui::preview::{self, PreviewApp};

/// Preview the popular and history post cards in the terminal.
#[derive(Debug, Parser)]
#[command(name = "newscards", version)]
struct Cli {
    /// Config file (defaults to <config dir>/newscards/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of posts; the first two fill the popular and history cards.
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Use the dark theme regardless of config.
    #[arg(long)]
    dark: bool,
}

fn main() -> anyhow::Result<()> {
    newscards::logging::init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading config")?;
    if cli.dark {
        config.theme = ThemeVariant::Dark;
    }

    let (popular, history) = match cli.feed {
        Some(path) => {
            let mut posts = load_feed(&path)?.into_iter();
            let popular = posts.next().context("feed has no posts")?;
            let history = posts.next().unwrap_or_else(|| popular.clone());
            (popular, history)
        }
        None => (samples::popular(), samples::history()),
    };

    let app = PreviewApp::new(&config, popular, history)?;
    preview::run(app)
}
