pub const HOUSE_CMD: &str = "clean-the-house";
pub const VERSION: &str = "0.0.1";
pub const DEFAULT_OUTDIR: &str = "./clean-the-house";

pub const ROOMS: &[&str] = &["living_room", "kitchen", "bedroom", "bathroom", "garage"];

pub const ITEMS: &[&str] = &[
    "sofa", "lamp", "table", "clothes", "toys", "books", "plates", "pans", "food", "trash",
    "toothbrush", "shampoo", "tools", "car-parts",
];

/// Inclusive bounds on the number of files written per item.
pub const MIN_FILES_PER_ITEM: usize = 50;
pub const MAX_FILES_PER_ITEM: usize = 100;

/// Per-level probability that a file name gets a typo.
pub const CORRUPTION_RATE: f64 = 0.3;
/// Per-level probability that a file carries the removal note.
pub const REMOVAL_RATE: f64 = 0.1;
pub const MAX_MESS_LEVEL: u8 = 3;

pub const REMOVE_LINE: &str = "Please remove this item from the house.";
pub const KEEP_LINE: &str = "Please keep this item";

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
