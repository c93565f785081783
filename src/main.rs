//! Terminal memory game runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_memorize::cli::Cli;
use tui_memorize::config::Config;
use tui_memorize::core::{theme, DeckRng, GameSnapshot, GameState, Store};
use tui_memorize::input::{click_position, handle_key_event, should_quit};
use tui_memorize::logging;
use tui_memorize::term::{FrameBuffer, GameView, RedrawGate, TerminalRenderer, Viewport};
use tui_memorize::types::POLL_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for t in theme::all() {
            let bounds = t.pair_bounds();
            println!(
                "{}\t{} symbols\tpairs {}-{} (default {})",
                t.name,
                t.symbols.len(),
                bounds.min,
                bounds.max,
                t.initial_pairs()
            );
        }
        return Ok(());
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load_or_default(&path)?;
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let _logger = logging::init(&config.log_level, cli.log_level.is_none(), &logging::log_dir())?;
    info!(
        "tui-memorize v{} starting (config {})",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );

    let rng = match config.seed {
        Some(seed) => DeckRng::seeded(seed),
        None => DeckRng::from_entropy(),
    };
    let mut store = Store::new(GameState::new(&config.theme, rng));
    match store.state().seed() {
        Some(seed) => info!("dealing with fixed seed {seed}"),
        None => debug!("dealing from OS entropy"),
    }
    store.subscribe(|snap| {
        debug!(
            "state r{}: {} with {} pairs, {} face up",
            snap.revision,
            snap.theme,
            snap.pair_count,
            snap.face_up_count()
        );
    });

    let view = GameView::new(config.view.card_width, config.view.card_height);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut store, &view);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("tui-memorize exiting");
    result
}

fn run(term: &mut TerminalRenderer, store: &mut Store, view: &GameView) -> Result<()> {
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut gate = RedrawGate::new();
    let poll = Duration::from_millis(POLL_MS);

    loop {
        // Render when the state or the terminal size changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        store.snapshot_into(&mut snap);
        store.set_columns(view.layout(&snap, viewport).columns);
        if gate.should_draw(store.revision(), viewport) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    store.dispatch(action);
                }
            }
            Event::Mouse(mouse) => {
                if let Some((x, y)) = click_position(mouse) {
                    if let Some(target) = view.hit_test(&snap, viewport, x, y) {
                        store.dispatch(target.action());
                    }
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                gate.invalidate();
            }
            _ => {}
        }
    }
}
