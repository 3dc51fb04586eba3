//! # Key Dispatch
//!
//! Every key press goes through `update()`. It mutates the navigator and
//! returns an `Effect` telling the driver what to do next.
//!
//! ```text
//! Navigator + Key  →  update()  →  Navigator' + Effect
//! ```
//!
//! Catalog fetching is not done here. `update` asks for it with
//! `Effect::FetchCatalog` and the driver reports back through
//! `Navigator::catalog_fetched`.

use log::{debug, info};

use crate::core::key::{Key, KeySource};
use crate::core::state::{Mode, NavError, Navigator};

/// What the driver must do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Redraw and wait for the next key.
    Continue,
    /// Fetch the catalog, hand the result to `Navigator::catalog_fetched`, redraw.
    FetchCatalog,
    /// Leave the loop.
    Quit,
}

/// Handle one key press.
///
/// Global keys (movement, quit, Escape) are handled first; the view-specific
/// bindings then see the possibly-updated selection. `keys` is only used to
/// probe for the companion key of an Alt chord after an Escape.
pub fn update(
    nav: &mut Navigator,
    key: Key,
    keys: &mut dyn KeySource,
) -> Result<Effect, NavError> {
    debug!("handle_key got key: {:?} in {:?}", key, nav.mode());

    if key != Key::Resize {
        nav.clear_banner();
    }

    match key {
        Key::Up => nav.move_up(),
        Key::Down => nav.move_down(),
        _ => {}
    }
    if matches!(key, Key::Up | Key::Down) {
        debug!("Current choice: {:?}", nav.current_choice());
    }

    if key.is_quit() {
        info!("Handled quit key");
        return Ok(Effect::Quit);
    }

    if key == Key::Escape {
        // A lone Escape has nothing queued behind it; an Alt chord does
        match keys.try_read_key().map_err(NavError::Input)? {
            None => {
                info!("Handled escape key");
                return Ok(Effect::Quit);
            }
            Some(companion) => {
                debug!("Escape followed by {:?}, treating as Alt chord", companion);
                return Ok(Effect::Continue);
            }
        }
    }

    let effect = match nav.mode() {
        Mode::MainMenu => {
            let choice = nav.current_choice();
            if key == Key::Char('1') || (key.is_confirm() && choice == Some(0)) {
                info!("Requesting catalog fetch");
                Effect::FetchCatalog
            } else if key == Key::Char('2') || (key.is_confirm() && choice == Some(1)) {
                info!("Quit selected from main menu");
                Effect::Quit
            } else {
                Effect::Continue
            }
        }
        Mode::ListModels => {
            if key.is_confirm() {
                if nav.on_back_row() {
                    nav.go_to_main_menu();
                } else {
                    nav.go_to_view_model()?;
                }
            } else if key.is_back() {
                nav.go_to_main_menu();
            }
            Effect::Continue
        }
        Mode::ViewModel => {
            if key.is_back() {
                nav.go_to_list_models(false)?;
            }
            Effect::Continue
        }
    };

    Ok(effect)
}
