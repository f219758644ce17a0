use anyhow::Context;
use client::host::{TerminalEvents, TerminalSession};
use client::input::KeyRepeater;
use client::logging::init_tracing;
use client::pacer::FramePacer;
use client::renderer::terminal::TerminalCanvas;
use client::App;
use game_core::{Config, GameRng};
use glam::IVec2;

fn main() -> anyhow::Result<()> {
    let log_path = init_tracing().context("failed to open the log file")?;

    let config = Config::new();
    config.validate().context("invalid configuration")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        ?config,
        "starting pong"
    );

    // Dropped last so the terminal is restored on every exit path
    let (session, terminal) = TerminalSession::start().context("failed to set up the terminal")?;
    let logical = IVec2::new(config.screen_width, config.screen_height);
    let canvas = TerminalCanvas::new(terminal, logical).context("failed to query terminal size")?;

    let repeater = session
        .enhanced_keys()
        .then(|| KeyRepeater::new(config.key_repeat_delay(), config.key_repeat_interval()));
    let events = TerminalEvents::new(repeater);
    let pacer = FramePacer::new(config.tick_interval());

    let mut app = App::new(config, canvas, events, pacer, &mut GameRng::from_entropy());
    let result = app.run();
    drop(app);
    drop(session);

    result.context("game loop failed")?;
    tracing::info!("exited cleanly");
    Ok(())
}
