use serde::{Deserialize, Serialize};

/// What the save layer needs to know about a game.
///
/// The emulation core name is not part of the identity: one game can be run by
/// different cores, so state calls take the core name as an argument.
pub trait GameIdentity {
    /// ROM file name, e.g. `mario.nes`. Save file names derive from it.
    fn file_name(&self) -> &str;
    /// System the game belongs to, used to namespace cache files.
    fn system_id(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub file_name: String,
    pub system_id: String,
}

impl Game {
    pub fn new(file_name: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            system_id: system_id.into(),
        }
    }
}

impl GameIdentity for Game {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn system_id(&self) -> &str {
        &self.system_id
    }
}
