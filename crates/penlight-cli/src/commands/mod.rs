pub mod apply;
pub mod common;
pub mod completions;
pub mod fonts;
pub mod palette;
pub mod preset;
pub mod set;
pub mod share;
pub mod show;
