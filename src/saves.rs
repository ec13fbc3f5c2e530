//! Battery RAM saves and save states.
//!
//! Layout on disk:
//!
//! ```text
//! <saves>/<name>.srm                    battery RAM, shared with other frontends
//! <states>/<core>/<file>.state          auto save
//! <states>/<core>/<file>.slot{1..4}     manual slots
//! <legacy states>/<file>.state|.slotN   old flat layout, read fallback only
//! ```
//!
//! `pure` computes names and paths without touching disk, `operations` does single
//! filesystem actions, and [`SaveStore`] combines the two.

pub mod background;
pub mod operations;
pub mod pure;
pub mod store;
pub mod types;

mod tests;

pub use background::AsyncSaveStore;
pub use store::SaveStore;
pub use types::{MAX_STATES, SaveCategory, SaveSlotInfo, StateLocation};
