//! Terminal output: modes, styling, and spinners.
//!
//! # Example
//!
//! ```
//! use liftoff::ui::{Output, OutputMode};
//!
//! let out = Output::new(OutputMode::Normal, false);
//! out.message("Running database migrations...");
//! out.success("Boot sequence complete");
//! ```

pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, LiftoffTheme};
