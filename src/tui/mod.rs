//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the navigator,
//! and turns crossterm events into core `Key` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Strictly synchronous: draw, block for one key, `update()`, repeat. A
//! catalog fetch runs on a current-thread tokio runtime through `block_on`,
//! so the UI is frozen while it is in flight. A "Fetching" banner is drawn
//! first so the freeze is visible.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;
use tokio::runtime::Runtime;

use crate::catalog::{CatalogError, CatalogProvider, OpenAiProvider};
use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::key::KeySource;
use crate::core::state::{Banner, NavError, Navigator};
use crate::tui::event::TerminalKeys;

/// TUI-specific presentation state (not part of the navigator)
pub struct TuiState {
    /// Scroll offset of the menu rows
    pub menu_state: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            menu_state: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Kitty keyboard protocol makes Esc unambiguous where supported;
        // other terminals ignore the sequence
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Build the catalog provider from resolved config, failing when no API key is set.
pub fn build_provider(config: &ResolvedConfig) -> Result<Arc<dyn CatalogProvider>, CatalogError> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        CatalogError::Config(
            "Please set the API key using the OPENAI_API_KEY environment variable \
             (or [openai] api_key in ~/.model-viewer/config.toml)."
                .to_string(),
        )
    })?;
    let provider = OpenAiProvider::new(api_key, Some(config.base_url.clone()))
        .with_organization(config.organization.clone())
        .with_timeout(config.timeout);
    Ok(Arc::new(provider))
}

pub fn run(provider: Arc<dyn CatalogProvider>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    info!("Starting viewer with provider: {}", provider.name());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &runtime, provider.as_ref(), &mut TerminalKeys)
    });
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    runtime: &Runtime,
    provider: &dyn CatalogProvider,
    keys: &mut dyn KeySource,
) -> io::Result<()> {
    let mut nav = Navigator::new();
    let mut tui = TuiState::new();

    loop {
        terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui))?;

        let key = keys.read_key()?;
        debug!("Key: {:?}", key);

        match update(&mut nav, key, keys).map_err(io::Error::other)? {
            Effect::Continue => {}
            Effect::Quit => break,
            Effect::FetchCatalog => {
                nav.set_banner(Banner::Info("Fetching model catalog...".to_string()));
                terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui))?;
                fetch_catalog(&mut nav, runtime, provider).map_err(io::Error::other)?;
            }
        }
    }

    info!("Leaving event loop");
    Ok(())
}

/// Fetch the catalog synchronously and feed the outcome to the navigator.
fn fetch_catalog(
    nav: &mut Navigator,
    runtime: &Runtime,
    provider: &dyn CatalogProvider,
) -> Result<(), NavError> {
    info!("Fetching catalog from {}", provider.name());
    let result = runtime.block_on(provider.list_models());
    nav.catalog_fetched(result)
}
