/// Kart Randomizer library
///
/// Shared by the `kart-randomizer` window and the `count-images` tool:
/// - Asset discovery, counting and random picks (assets)
/// - Display names derived from filenames (names)
/// - Fit-to-box sizing for the display slots (layout)
/// - Slot state owning decoded thumbnails (state)
/// - Slot widgets (ui)

pub mod assets;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod names;
pub mod state;
pub mod ui;
