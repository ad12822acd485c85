// Constants for the game

/// Distinct clues needed against a suspect for a guilty verdict
pub const GUILTY_THRESHOLD: u32 = 2;

/// Command key: move to the left child
pub const KEY_LEFT: char = 'e';

/// Command key: move to the right child
pub const KEY_RIGHT: char = 'd';

/// Command key: stop exploring
pub const KEY_QUIT: char = 's';

/// Oldest event log lines are dropped past this many
pub const EVENT_LOG_CAPACITY: usize = 200;

/// How long the TUI waits for a key before redrawing
pub const POLL_INTERVAL_MS: u64 = 50;

/// Longest suspect name accepted in the accusation prompt
pub const MAX_SUSPECT_NAME_LEN: usize = 63;
