//! Use cases - derivation, classification, and presentation.
//!
//! Each module covers one step of turning an export into a sheet; `sheet`
//! strings them together.

pub mod character_sheet;
pub mod presentation;
pub mod profile;
pub mod sheet;

// Re-export main types
pub use character_sheet::assemble;
pub use presentation::{build_display, DisplayHints};
pub use profile::{classify, ProfileScores};
pub use sheet::{SheetOps, SheetResult};
