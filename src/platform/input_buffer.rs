//=========================================================================
// Input Buffer
//
// Collects launcher input events between two frames. Acts as a transient
// event aggregator between the Platform and the Lobby.
//
// Responsibilities:
// - Store incoming events in arrival order
// - Hand them out once per frame as an `InputBatch` carrying the pointer
//
// Notes:
// A batch is produced every frame, even when empty, so hover state is
// refreshed while the pointer moves without clicking.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::geometry::Position;
use crate::core::input::{InputBatch, InputEvent};

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates so typical frames never reallocate.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    pub(crate) fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events with the sampled pointer and empties the
    // buffer, keeping its capacity.
    //
    pub(crate) fn drain(&mut self, pointer: Position) -> InputBatch {
        InputBatch {
            events: self.events.drain(..).collect(),
            pointer,
        }
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
