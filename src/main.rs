// dsconsole: Data Structures Console Application

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dsconsole::config::{usage, Command, Config};
use dsconsole::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "dsconsole".to_string());

    let config = match Config::from_args(args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", usage(&program_name));
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    eprintln!(
        "Starting with capacity {} (animations {})",
        config.capacity,
        if config.animations { "on" } else { "off" }
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
