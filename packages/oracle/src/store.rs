// Observation Storage

use alloc::vec;
use alloc::vec::Vec;
use kelpswap_math::MAX_OBSERVATIONS;
use crate::types::Observation;

/// Slot-addressed storage behind the oracle ring buffer.
///
/// Slots that were never written read as `Observation::default()`.
pub trait ObservationStore {
    fn observation(&self, index: u16) -> Observation;
    fn set_observation(&mut self, index: u16, observation: Observation);
}

/// Arena holding every addressable slot up front.
#[derive(Clone, Debug)]
pub struct ObservationArray {
    slots: Vec<Observation>,
}

impl ObservationArray {
    pub fn new() -> Self {
        Self {
            slots: vec![Observation::default(); MAX_OBSERVATIONS],
        }
    }
}

impl Default for ObservationArray {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationStore for ObservationArray {
    #[inline]
    fn observation(&self, index: u16) -> Observation {
        self.slots[index as usize]
    }

    #[inline]
    fn set_observation(&mut self, index: u16, observation: Observation) {
        self.slots[index as usize] = observation;
    }
}
