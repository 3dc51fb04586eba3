//! # Navigation State
//!
//! The one mutable object of the viewer. Rendering and key dispatch both read
//! from it; only the transition methods below change it.
//!
//! ```text
//! Navigator
//! ├── view: View              // current view + its own selection data
//! ├── menu_items: Vec<String> // rows of the current view, never empty
//! ├── catalog: Option<Catalog>// last successful fetch
//! └── banner: Option<Banner>  // info/error line shown below the menu
//! ```
//!
//! Views and the transitions between them:
//!
//! ```text
//!   MainMenu ──fetch ok──► ListModels ──Enter──► ViewModel
//!      ▲                    │    ▲                  │
//!      └──── Back row / ◄ ──┘    └──────── ◄ ───────┘
//!                                (restores saved choice)
//! ```

use std::fmt;
use std::io;

use log::{debug, info, warn};

use crate::catalog::{Catalog, CatalogError, format_unix_timestamp};

pub const MAIN_MENU_ITEMS: [&str; 2] = ["List Available Models", "Quit"];
pub const BACK_ITEM: &str = "Back";

/// Data-less view tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    MainMenu,
    ListModels,
    ViewModel,
}

/// The current view, paired with the selection data that view can have.
///
/// The detail view has no selectable row, only the list row it was entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MainMenu { choice: usize },
    ListModels { choice: usize },
    ViewModel { saved_choice: usize },
}

impl View {
    pub fn mode(&self) -> Mode {
        match self {
            View::MainMenu { .. } => Mode::MainMenu,
            View::ListModels { .. } => Mode::ListModels,
            View::ViewModel { .. } => Mode::ViewModel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Info(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Info(text) | Banner::Error(text) => text,
        }
    }
}

#[derive(Debug)]
pub enum NavError {
    /// List view requested before any catalog was fetched.
    CatalogMissing,
    /// Detail view requested for a row that is not a catalog record.
    NotARecord(usize),
    /// Transition not allowed from the current view.
    InvalidTransition { from: Mode, to: Mode },
    /// The key source failed.
    Input(io::Error),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::CatalogMissing => write!(f, "no catalog has been fetched"),
            NavError::NotARecord(index) => write!(f, "row {index} is not a catalog record"),
            NavError::InvalidTransition { from, to } => {
                write!(f, "invalid transition from {from:?} to {to:?}")
            }
            NavError::Input(e) => write!(f, "key input error: {e}"),
        }
    }
}

impl std::error::Error for NavError {}

pub struct Navigator {
    view: View,
    menu_items: Vec<String>,
    catalog: Option<Catalog>,
    banner: Option<Banner>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            view: View::MainMenu { choice: 0 },
            menu_items: main_menu_items(),
            catalog: None,
            banner: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> Mode {
        self.view.mode()
    }

    pub fn menu_items(&self) -> &[String] {
        &self.menu_items
    }

    /// Highlighted row, `None` while a model's details are shown.
    pub fn current_choice(&self) -> Option<usize> {
        match self.view {
            View::MainMenu { choice } | View::ListModels { choice } => Some(choice),
            View::ViewModel { .. } => None,
        }
    }

    /// List row to restore when leaving the detail view.
    pub fn saved_choice(&self) -> Option<usize> {
        match self.view {
            View::ViewModel { saved_choice } => Some(saved_choice),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn set_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    /// True when the highlighted row is the trailing "Back" entry of the list.
    pub fn on_back_row(&self) -> bool {
        matches!(self.view, View::ListModels { choice } if choice + 1 == self.menu_items.len())
    }

    pub fn move_up(&mut self) {
        if let View::MainMenu { choice } | View::ListModels { choice } = &mut self.view {
            *choice = choice.saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        let last = self.menu_items.len().saturating_sub(1);
        if let View::MainMenu { choice } | View::ListModels { choice } = &mut self.view {
            *choice = (*choice + 1).min(last);
        }
    }

    /// Show the main menu.
    ///
    /// Only a main menu choice carries over. Leaving a list (including from
    /// its Back row) selects the first entry, so a following Enter lists
    /// models again instead of landing on Quit.
    pub fn go_to_main_menu(&mut self) {
        let choice = match self.view {
            View::MainMenu { choice } => choice.min(MAIN_MENU_ITEMS.len() - 1),
            View::ListModels { .. } | View::ViewModel { .. } => 0,
        };
        self.view = View::MainMenu { choice };
        self.menu_items = main_menu_items();
        debug!("Entered main menu (choice {})", choice);
    }

    /// Show the catalog list.
    ///
    /// With `reset_choice` the first row is selected. Without it, coming back
    /// from the detail view restores the row that was drilled into, and any
    /// other view keeps its current choice.
    pub fn go_to_list_models(&mut self, reset_choice: bool) -> Result<(), NavError> {
        let catalog = self.catalog.as_ref().ok_or(NavError::CatalogMissing)?;
        let menu_items = list_items(catalog);

        let choice = if reset_choice {
            0
        } else {
            match self.view {
                View::ViewModel { saved_choice } => saved_choice,
                View::MainMenu { choice } | View::ListModels { choice } => choice,
            }
        };
        // The catalog may have shrunk since the choice was taken
        let choice = choice.min(menu_items.len() - 1);

        self.view = View::ListModels { choice };
        self.menu_items = menu_items;
        debug!(
            "Entered model list ({} models, choice {})",
            catalog.len(),
            choice
        );
        Ok(())
    }

    /// Show the details of the highlighted catalog record.
    pub fn go_to_view_model(&mut self) -> Result<(), NavError> {
        let View::ListModels { choice } = self.view else {
            return Err(NavError::InvalidTransition {
                from: self.mode(),
                to: Mode::ViewModel,
            });
        };
        let catalog = self.catalog.as_ref().ok_or(NavError::CatalogMissing)?;
        let record = catalog.get(choice).ok_or(NavError::NotARecord(choice))?;

        self.menu_items = vec![
            format!("ID: {}", record.id),
            format!("Created: {}", format_unix_timestamp(record.created)),
        ];
        debug!("Viewing model {} (row {})", record.id, choice);
        self.view = View::ViewModel {
            saved_choice: choice,
        };
        Ok(())
    }

    /// Apply the outcome of a catalog fetch.
    ///
    /// Success replaces the catalog and opens the list at its first row. A
    /// failure leaves the current view as it was and shows an error banner.
    pub fn catalog_fetched(&mut self, result: Result<Catalog, CatalogError>) -> Result<(), NavError> {
        match result {
            Ok(catalog) => {
                info!("Catalog fetched: {} models", catalog.len());
                self.catalog = Some(catalog);
                self.clear_banner();
                self.go_to_list_models(true)
            }
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                self.set_banner(Banner::Error(format!("Failed to fetch models: {e}")));
                Ok(())
            }
        }
    }
}

fn main_menu_items() -> Vec<String> {
    MAIN_MENU_ITEMS.iter().map(|s| s.to_string()).collect()
}

fn list_items(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|record| {
            format!(
                "{}, created at: {}",
                record.id,
                format_unix_timestamp(record.created)
            )
        })
        .chain(std::iter::once(BACK_ITEM.to_string()))
        .collect()
}
