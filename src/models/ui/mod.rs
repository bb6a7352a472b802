// UI models module
// View state owned by the host, updated from engine results

use serde::{Deserialize, Serialize};

use crate::models::entity::BlockKey;

/// Scroll and stacking state of one rendered timeline.
///
/// The engine never holds this; it hands back values for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Horizontal scroll of the grid, in pixels.
    pub scroll_left: f64,
    /// Block drawn above its neighbours while a gesture is active.
    pub raised: Option<BlockKey>,
}

impl ViewState {
    pub fn raise(&mut self, key: BlockKey) {
        self.raised = Some(key);
    }

    /// Drop the raised block back into normal stacking, if it is `key`.
    pub fn lower(&mut self, key: BlockKey) {
        if self.raised == Some(key) {
            self.raised = None;
        }
    }

    pub fn is_raised(&self, key: BlockKey) -> bool {
        self.raised == Some(key)
    }
}
