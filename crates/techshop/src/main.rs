use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;
use techshop_config::AppConfig;
use techshop_core::{BuiltinCatalog, Catalog, CatalogProvider, JsonFileCatalog};

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    cart_feedback::CartFeedbackMiddleware, checkout::CheckoutMiddleware,
    confirmation_popup::ConfirmationPopupMiddleware, keyboard::KeyboardMiddleware,
    logging::LoggingMiddleware, navigation::NavigationMiddleware,
    view_context::ViewContextMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting techshop, logging to {}", log_file.display());

    let config = AppConfig::load();
    let catalog = load_catalog(&config)?;
    log::info!("Catalog ready with {} products", catalog.len());

    let mut store = Store::new(AppState::new(catalog, &config));

    // Middleware runs in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(ViewContextMiddleware::new()));
    store.add_middleware(Box::new(CheckoutMiddleware::new()));
    store.add_middleware(Box::new(ConfirmationPopupMiddleware::new()));
    store.add_middleware(Box::new(CartFeedbackMiddleware::new()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
    }

    log::info!("Exiting techshop");
    result
}

/// Catalog from the configured JSON file, or the built-in one
fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    match &config.catalog_file {
        Some(path) => {
            log::info!("Loading catalog from {}", path.display());
            JsonFileCatalog::new(path)
                .load()
                .with_context(|| format!("Failed to load catalog from {}", path.display()))
        }
        None => BuiltinCatalog
            .load()
            .context("Failed to load built-in catalog"),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
