//! # TUI Components
//!
//! One component per screen, plus the shared pieces they are built from.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as fields:
//! - `TitleBar`: app name, current screen, last notice
//! - `Settings`: the language switch
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep presentation state in `TuiState` and emit their own small event
//! enums, which `tui::route_event` turns into core `Action`s:
//! - `MenuState` / `Menu`
//! - `ChildListState` / `ChildList`
//! - `ChildFormState` / `ChildFormView`
//! - `ChildDetailState` / `ChildDetail`
//! - `TextField`: bordered input used by the form and the notes editor
//!
//! The state half persists across frames; the render half is a transient
//! wrapper built each frame with borrowed state and props from `App`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── menu.rs
//! ├── child_list.rs
//! ├── child_form.rs
//! ├── child_detail.rs
//! ├── settings.rs
//! └── text_field/      (input with wrapping and cursor placement)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod child_detail;
pub mod child_form;
pub mod child_list;
pub mod menu;
pub mod settings;
pub mod text_field;

pub use child_detail::{ChildDetail, ChildDetailState, DetailEvent};
pub use child_form::{ChildFormState, ChildFormView, FormEvent};
pub use child_list::{ChildList, ChildListEvent, ChildListState};
pub use menu::{Menu, MenuEvent, MenuState};
pub use settings::{Settings, SettingsEvent};
