use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Playback position shared between the render and control threads.
///
/// The render thread is the only writer; it publishes the time of the block
/// it is about to render. Readers use it to timestamp key events. Stored as
/// the bit pattern of an `f64` so reads and writes are single atomic ops.
#[derive(Debug, Clone, Default)]
pub struct SharedClock {
    bits: Arc<AtomicU64>,
}

impl SharedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback time in seconds.
    pub fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    pub(crate) fn publish(&self, time: f64) {
        self.bits.store(time.to_bits(), Ordering::Release);
    }
}

/// Count of note-ons the render thread had to refuse.
///
/// Bumped when the registry is full of held notes; the control side reads
/// it to find out that a key press never sounded.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    count: Arc<AtomicU64>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub(crate) fn record(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
