// Output formatting: terminal display and matrix export.

pub mod export;
pub mod terminal;
