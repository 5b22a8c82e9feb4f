pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{axiom_line, error, header, info, literal, muted, section, success, summary_row, warn};
pub use table::{AxiomRow, SignifierRow, TableBuilder};
pub use theme::{theme, Theme};
