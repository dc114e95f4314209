/*!
 * Queue Configuration
 *
 * Construction-time tuning for heap storage
 */

/// What happens to storage capacity as the queue drains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShrinkPolicy {
    /// Halve capacity when the live count drops to exactly a quarter of it
    #[default]
    QuarterHalve,
    /// Keep capacity until `clear()`
    Never,
}

/// Priority queue configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Capacity reserved at construction and restored by `clear()`
    pub initial_capacity: usize,
    /// Storage shrink behaviour on `pop()`
    pub shrink: ShrinkPolicy,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            shrink: ShrinkPolicy::QuarterHalve,
        }
    }
}

impl QueueConfig {
    /// Pre-size storage for an expected working set
    pub const fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            shrink: ShrinkPolicy::QuarterHalve,
        }
    }

    /// Never give storage back while draining (bursty producers)
    pub const fn no_shrink() -> Self {
        Self {
            initial_capacity: 0,
            shrink: ShrinkPolicy::Never,
        }
    }
}
