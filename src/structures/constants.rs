// Constants shared by the data-structure engines

/// Capacity used by [`Stack`](super::Stack) and [`Queue`](super::Queue) when none is given
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest capacity accepted on the command line
pub const MAX_CAPACITY: usize = 100_000;

/// Columns of indentation added per tree level in the sideways rendering
pub const TREE_INDENT_STEP: usize = 5;
