//! Terminal BattleCity map runner (default binary).
//!
//! Renders the map centred in the terminal with an aspect-correct projection.
//! Resize the terminal to see the projection adapt; press Escape to quit.

use std::time::Instant;

use anyhow::Result;

use battlecity::core::{Map, WindowState};
use battlecity::input::EventHandler;
use battlecity::term::{FrameBuffer, MapView, TerminalRenderer};
use battlecity::types::{AppAction, FALLBACK_COLS, FALLBACK_ROWS};
use battlecity::{logging, startup_map, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    log::info!("starting with {:?}", config);

    let map = startup_map(&config)?;
    log::debug!("map census: {:?}", map.census());

    let mut term = TerminalRenderer::new("BattleCity");
    term.enter()?;

    let result = run(&mut term, &config, &map);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::error!("failed to restore terminal: {:#}", err);
    }
    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, map: &Map) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((FALLBACK_COLS, FALLBACK_ROWS));
    let mut window = WindowState::new(w, h);

    let view = MapView::new(config.glyph_ratio).with_hud(config.show_hud);
    let mut input = EventHandler::new();
    let mut fb = FrameBuffer::new(window.width(), window.height());
    let frame = config.frame_interval();
    let started = Instant::now();
    let mut frames: u64 = 0;

    loop {
        // Render.
        view.render_into(map, window.into(), &mut fb);
        term.draw_swap(&mut fb)?;
        frames += 1;

        // Input until the next frame is due.
        for action in input.drain(frame, &mut window)? {
            match action {
                AppAction::Quit => {
                    log::info!(
                        "quit after {} frames, {} events in {:.1?}",
                        frames,
                        input.events_seen(),
                        started.elapsed()
                    );
                    return Ok(());
                }
                AppAction::Resized => term.invalidate(),
            }
        }
    }
}
