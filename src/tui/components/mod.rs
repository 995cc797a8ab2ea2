//! # TUI Components
//!
//! All UI components for the terminal demo.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and render it:
//! - `TitleBar`: which animation runs and where it is
//! - `TypedLine`: the animated text with its cursor
//!
//! ### Stateful Components (Event-Driven)
//!
//! Hold local state and emit events:
//! - `InputLine`: text field whose Enter retargets the animation
//!
//! Each component file carries its state, events, rendering and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! ├── typed_line.rs    (animated text)
//! └── input_line.rs    (text input)
//! ```

pub mod input_line;
pub mod title_bar;
pub mod typed_line;

pub use input_line::{InputEvent, InputLine};
pub use title_bar::TitleBar;
pub use typed_line::TypedLine;
