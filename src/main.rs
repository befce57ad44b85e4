use anyhow::Context;
use kancli::{
    render::{JsonRenderer, Renderer},
    seed::{FileSeed, SampleSeed, SeedSource},
    Command, Config, Controller, Flow, Theme,
};
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var_os("KANCLI_CONFIG") {
        Some(path) => Config::load(&path)
            .await
            .with_context(|| format!("failed to load config {}", path.to_string_lossy()))?,
        None => Config::default(),
    };

    let source: Box<dyn SeedSource> = match std::env::var_os("KANCLI_SEED") {
        Some(path) => Box::new(FileSeed::new(path)),
        None => Box::new(SampleSeed),
    };
    let seed = source.load().await.context("failed to load seed tasks")?;

    let theme = config.theme;
    let mut controller = Controller::new(&config.board, seed);
    let mut renderer = JsonRenderer::new(std::io::stdout());

    draw(&controller, &theme, &mut renderer)?;

    let (width, height) = terminal_size();
    if controller.handle(Command::Resize { width, height })? == Flow::Render {
        draw(&controller, &theme, &mut renderer)?;
    }

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("{}", e);
                continue;
            }
        };

        match controller.handle(command)? {
            Flow::Render => draw(&controller, &theme, &mut renderer)?,
            Flow::Idle => {}
            Flow::Quit => break,
        }
    }

    Ok(())
}

fn draw<W: Write>(
    controller: &Controller,
    theme: &Theme,
    renderer: &mut JsonRenderer<W>,
) -> anyhow::Result<()> {
    if let Some(frame) = controller.frame(theme) {
        renderer.render(&frame)?;
    }
    Ok(())
}

/// Size from `COLUMNS`/`LINES`, falling back to 80x24
fn terminal_size() -> (u16, u16) {
    let read = |name: &str, default: u16| {
        std::env::var(name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    };
    (read("COLUMNS", DEFAULT_WIDTH), read("LINES", DEFAULT_HEIGHT))
}
