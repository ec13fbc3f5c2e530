//! Save persistence for emulator frontends.
//!
//! Battery RAM saves live flat under the saves root, named after the game with a
//! `.srm` extension so other frontends can pick them up. State saves (auto and
//! numbered slots) are core specific and live under `<states>/<core>/`. States
//! written by older versions into a flat directory are still readable until the
//! game is saved again.

pub mod config;
pub mod directories;
pub mod error;
pub mod game;
pub mod game_cache;
pub mod paths;
pub mod saves;

pub use config::{StoreConfig, load_cfg, save_cfg};
pub use directories::{Directories, DirectoriesProvider};
pub use error::{Result, SaveError};
pub use game::{Game, GameIdentity};
pub use saves::{
    AsyncSaveStore, MAX_STATES, SaveCategory, SaveSlotInfo, SaveStore, StateLocation,
};
