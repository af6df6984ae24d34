use anyhow::Result;
use clap::Parser;
use happyvisit::app::{App, AppOptions};
use happyvisit::cli::Cli;
use happyvisit::components::{fallback_text, render_failure_text};
use happyvisit::styles::{init_theme, ThemeType};
use happyvisit::utils::{get_cache_dir, get_config_path, get_log_path};
use happyvisit::Config;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        eprintln!("{}", fallback_text(None));
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands run without the TUI
    if cli.command.is_some() {
        return cli.execute();
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_cache_dir();
    std::fs::create_dir_all(&log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to file
    let file_appender = tracing_appender::rolling::never(&log_dir, "happyvisit.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    // Print log location before TUI starts (this will be visible briefly)
    eprintln!("Logs are being written to: {:?}", get_log_path());

    let no_color = cli.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme = if no_color {
        ThemeType::NoColor
    } else {
        Config::load_or_create(&get_config_path())
            .map(|c| c.theme.parse::<ThemeType>().unwrap_or_default())
            .unwrap_or_default()
    };
    init_theme(theme);

    let options = AppOptions {
        open: cli.open,
        translate: !cli.no_translate,
    };
    let result = App::new(options).and_then(|mut app| app.run());

    // Restore terminal state on normal exit
    // (panic hook handles panics)
    drop(guard);

    if let Err(e) = result {
        if let Some(text) = render_failure_text(&e) {
            eprintln!("{}", text);
            std::process::exit(1);
        }
        return Err(e);
    }
    Ok(())
}
