//! # TUI Adapter
//!
//! The terminal-specific layer. Owns the terminal session, renders the
//! universe, and translates raw input bytes into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Threads
//!
//! ```text
//!  input-reader thread                     main thread
//! ┌───────────────────┐   Vec<u8>   ┌──────────────────────────────┐
//! │ stdin.read(32 B)  │ ──────────► │ draw → tick? → try_recv →    │
//! │ (blocking)        │    mpsc     │ decode → update → (sleep)    │
//! └───────────────────┘             └──────────────────────────────┘
//! ```
//!
//! The reader only ever sends bytes; the universe is owned by the main loop.
//! When the reader hits EOF or an error it drops its sender, and the loop
//! treats the disconnected channel as Quit.

mod component;
mod components;
mod event;
mod terminal;
mod ui;

pub use event::{INPUT_BUFFER_CAPACITY, TuiEvent, decode};
pub use terminal::{TerminalError, TerminalSession};

use log::{debug, info, warn};
use std::io::{self, Read, stdout};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::{Terminal, TerminalOptions, Viewport as TerminalViewport};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Universe;
use crate::core::viewport::Viewport;

/// Maps a decoded event to a core action given the current mode.
///
/// Seed browsing and cell edits only exist while paused.
pub fn event_to_action(event: TuiEvent, universe: &Universe) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::TogglePause => Some(Action::TogglePause),
        _ if !universe.paused => None,
        TuiEvent::NextSeed => Some(Action::NextSeed),
        TuiEvent::PrevSeed => Some(Action::PrevSeed),
        TuiEvent::MouseClick { button, col, row } => {
            let cell = universe
                .viewport
                .to_lattice(i64::from(row), i64::from(col));
            match button {
                0 => Some(Action::ToggleOn(cell)),
                2 => Some(Action::ToggleOff(cell)),
                _ => None,
            }
        }
    }
}

/// Starts the blocking reader. Each successful `read()` is forwarded as one
/// buffer holding exactly the bytes read.
pub fn spawn_input_reader<R>(mut source: R, tx: Sender<Vec<u8>>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || {
            let mut buf = [0u8; INPUT_BUFFER_CAPACITY];
            loop {
                match source.read(&mut buf) {
                    Ok(0) => {
                        info!("Input stream reached EOF");
                        return;
                    }
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            debug!("Input receiver dropped, reader exiting");
                            return;
                        }
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        warn!("Input read failed: {}", e);
                        return;
                    }
                }
            }
        })
}

/// The render/evolve/input loop. Returns when a Quit action is applied or the
/// input channel disconnects.
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    universe: &mut Universe,
    input: &Receiver<Vec<u8>>,
    frame_interval: Duration,
    cell_glyph: &str,
) -> Result<(), B::Error> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, &*universe, cell_glyph))?;

        if !universe.paused {
            update(universe, Action::Tick);
        }

        match input.try_recv() {
            Ok(bytes) => {
                let action = decode(&bytes).and_then(|event| event_to_action(event, &*universe));
                if let Some(action) = action
                    && update(universe, action) == Effect::Quit
                {
                    return Ok(());
                }
            }
            Err(TryRecvError::Empty) => thread::sleep(frame_interval),
            Err(TryRecvError::Disconnected) => {
                info!("Input channel closed, quitting");
                return Ok(());
            }
        }
    }
}

pub fn run(config: &ResolvedConfig) -> Result<(), TerminalError> {
    // Declared first so it drops last, after the ratatui terminal.
    let session = TerminalSession::start()?;
    let (rows, cols) = (session.rows(), session.cols());

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: TerminalViewport::Fixed(Rect::new(0, 0, cols, rows)),
        },
    )
    .map_err(TerminalError::Io)?;

    // The reader is never joined: on exit it is left blocked in read().
    let (tx, rx) = mpsc::channel();
    spawn_input_reader(io::stdin(), tx).map_err(TerminalError::Io)?;

    let mut universe = Universe::new(Viewport::new(rows, cols));
    universe.select_seed(config.seed_index);
    info!(
        "Universe ready: {}x{} viewport, seed {}",
        cols,
        rows,
        universe.seed_name()
    );

    run_loop(
        &mut terminal,
        &mut universe,
        &rx,
        config.frame_interval,
        &config.cell_glyph,
    )
    .map_err(TerminalError::Io)?;

    info!(
        "Stopped at generation {} with population {}",
        universe.generation,
        universe.population()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lattice::Cell;
    use crate::core::seeds::CATALOG;
    use crate::test_support::test_universe;
    use ratatui::backend::TestBackend;
    use std::io::Cursor;

    const FAST: Duration = Duration::from_millis(1);

    fn test_terminal(universe: &Universe) -> Terminal<TestBackend> {
        let viewport = universe.viewport;
        Terminal::new(TestBackend::new(viewport.cols(), viewport.rows())).unwrap()
    }

    fn feed(buffers: &[&[u8]]) -> Receiver<Vec<u8>> {
        let (tx, rx) = mpsc::channel();
        for buf in buffers {
            tx.send(buf.to_vec()).unwrap();
        }
        rx
    }

    #[test]
    fn test_click_while_paused_maps_through_viewport() {
        let universe = test_universe();
        let expected = universe.viewport.to_lattice(3, 5);

        let on = decode(b"\x1b[<0;5;3M").unwrap();
        assert_eq!(event_to_action(on, &universe), Some(Action::ToggleOn(expected)));

        let off = decode(b"\x1b[<2;5;3M").unwrap();
        assert_eq!(event_to_action(off, &universe), Some(Action::ToggleOff(expected)));

        let middle = decode(b"\x1b[<1;5;3M").unwrap();
        assert_eq!(event_to_action(middle, &universe), None);
    }

    #[test]
    fn test_running_drops_clicks_and_seed_keys() {
        let mut universe = test_universe();
        universe.paused = false;

        for event in [
            TuiEvent::NextSeed,
            TuiEvent::PrevSeed,
            TuiEvent::MouseClick { button: 0, col: 5, row: 3 },
        ] {
            assert_eq!(event_to_action(event, &universe), None);
        }
        assert_eq!(event_to_action(TuiEvent::Quit, &universe), Some(Action::Quit));
        assert_eq!(
            event_to_action(TuiEvent::TogglePause, &universe),
            Some(Action::TogglePause)
        );
    }

    #[test]
    fn test_run_loop_quits_on_ctrl_c() {
        let mut universe = test_universe();
        let mut terminal = test_terminal(&universe);
        let rx = feed(&[b" ", &[3]]);

        run_loop(&mut terminal, &mut universe, &rx, FAST, "#").unwrap();

        // Frame 1 unpauses, frame 2 ticks once before reading Ctrl+C.
        assert!(!universe.paused);
        assert_eq!(universe.generation, 1);
    }

    #[test]
    fn test_run_loop_treats_closed_input_as_quit() {
        let mut universe = test_universe();
        let mut terminal = test_terminal(&universe);
        let (tx, rx) = mpsc::channel::<Vec<u8>>();
        drop(tx);

        run_loop(&mut terminal, &mut universe, &rx, FAST, "#").unwrap();
        assert_eq!(universe.generation, 0);
        assert!(universe.paused);
    }

    #[test]
    fn test_run_loop_applies_edits_and_seed_changes() {
        let mut universe = test_universe();
        let mut terminal = test_terminal(&universe);
        let clicked = universe.viewport.to_lattice(4, 6);
        let rx = feed(&[
            b"\x1b[C",
            b"\x1b[<0;6;4M",
            b"garbage",
            b"\x1b[<0;6;4m",
            &[3],
        ]);

        run_loop(&mut terminal, &mut universe, &rx, FAST, "#").unwrap();

        assert_eq!(universe.seed_name(), CATALOG[1].name);
        assert!(universe.lattice.is_live(clicked));
        assert_eq!(universe.population(), CATALOG[1].cells.len() + 1);
        assert_eq!(universe.generation, 0);
    }

    #[test]
    fn test_run_loop_keeps_running_until_input_closes() {
        let mut universe = test_universe();
        universe.select_seed(1);
        let mut terminal = test_terminal(&universe);
        let (tx, rx) = mpsc::channel();
        tx.send(b" ".to_vec()).unwrap();
        drop(tx);

        run_loop(&mut terminal, &mut universe, &rx, FAST, "#").unwrap();
        assert_eq!(universe.generation, 1);
        assert_eq!(universe.population(), 5);
    }

    #[test]
    fn test_reader_forwards_only_bytes_read() {
        let input: Vec<u8> = (0..40).collect();
        let (tx, rx) = mpsc::channel();
        let handle = spawn_input_reader(Cursor::new(input), tx).unwrap();
        handle.join().unwrap();

        let buffers: Vec<Vec<u8>> = rx.iter().collect();
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers[0].len(), INPUT_BUFFER_CAPACITY);
        assert_eq!(buffers[1], (32..40).collect::<Vec<u8>>());
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_reader_error_closes_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_input_reader(BrokenPipe, tx).unwrap();
        handle.join().unwrap();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[test]
    fn test_click_on_origin_toggles_center_cell() {
        let mut universe = test_universe();
        let center = universe.viewport.to_screen(Cell::new(0, 0));
        let report = format!("\x1b[<2;{};{}M", center.col, center.row);
        let action = decode(report.as_bytes())
            .and_then(|event| event_to_action(event, &universe))
            .unwrap();
        assert_eq!(action, Action::ToggleOff(Cell::new(0, 0)));

        update(&mut universe, action);
        assert!(!universe.lattice.is_live(Cell::new(0, 0)));
    }
}
