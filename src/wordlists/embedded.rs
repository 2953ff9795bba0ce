//! Embedded default word list
//!
//! A compact list of 4-letter words compiled into the binary, used when no
//! word-list file is supplied.

/// Default 4-letter target words, in play order
pub const WORDS: &[&str] = &[
    "test", "poop", "turd", "word", "play", "game", "grid", "tile", "keys", "quiz", "jazz",
    "fizz", "buzz", "gush", "mush", "hush", "dusk", "dawn", "dark", "glow", "gold", "mint",
    "rose", "ruby", "jade", "opal", "onyx", "lime", "pear", "plum", "kiwi", "figs", "corn",
    "bean", "kale", "leek", "okra", "taro", "yams", "rice", "oats", "brew", "milk", "eggs",
    "salt", "herb", "sage", "dill", "mace", "chef", "cook", "bake", "stew", "soup", "tart",
    "cake", "pies", "buns", "wolf", "bear", "lynx", "deer", "moth", "wasp", "newt", "toad",
    "frog", "crab", "carp", "pike", "sole", "tuna", "hawk", "crow", "wren", "lark", "dove",
    "swan", "duck", "gull", "kite", "barn", "shed", "silo", "well", "gate", "path", "road",
    "lane", "pier", "dock", "ship", "mast", "sail", "helm", "deck", "hull", "keel", "prow",
    "bows",
];

/// Number of embedded words
pub const WORD_COUNT: usize = WORDS.len();

/// Letter count shared by every embedded word
pub const WORD_LEN: usize = 4;
