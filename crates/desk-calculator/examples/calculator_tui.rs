//! Desk calculator in the terminal
//!
//! Type on the keyboard or click the keypad.
//!
//! Run with: cargo run --example calculator_tui
//!
//! Set `DESK_CALC_CONFIG` to a JSON config file; logging goes to the
//! config's `log_file` and is filtered by `DESK_CALC_LOG`.

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use desk_calculator::config::CalculatorConfig;
use desk_calculator::logging;
use desk_calculator::tui::{layout, render, CalculatorApp, InputHandler};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_env()?;
    logging::init(&config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(config.display));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "calculator exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();
    let mut keypad_area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            keypad_area = layout(f.area()).keypad;
            render(&app, f);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.apply(input_handler.handle_key(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(keypad_area, mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    Ok(())
}
