//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: the fixed, emphasized title
//! - `StatusLine`: banner or key hints on the bottom row
//!
//! ### Stateful Components
//!
//! - `MenuList`: numbered rows with the selection highlighted; borrows a
//!   persistent `ListState` from `TuiState` for scrolling
//!
//! Components receive external data as props, not by reaching into the
//! navigator, so each one can be rendered against a `TestBackend` on its own.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Title row)
//! ├── menu_list.rs    (Numbered, highlighted rows)
//! └── status_line.rs  (Banner / key hints)
//! ```

pub mod menu_list;
pub mod status_line;
pub mod title_bar;

pub use menu_list::MenuList;
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
