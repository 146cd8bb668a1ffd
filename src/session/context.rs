use crate::foundation::core::DVec3;

/// Cross-frame orientation state for one clip.
///
/// Holds the previous face forward vector and the clip yaw chosen by the projector. One
/// context belongs to exactly one extraction session; call [`StabilizationContext::reset`]
/// (or build a fresh one) before each new clip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StabilizationContext {
    prev_forward: Option<DVec3>,
    clip_yaw: Option<f64>,
}

impl StabilizationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flip `forward` if it points against the previous frame's forward, then remember it.
    pub fn stabilize_forward(&mut self, forward: DVec3) -> DVec3 {
        let forward = match self.prev_forward {
            Some(prev) if forward.dot(prev) < 0.0 => -forward,
            _ => forward,
        };
        self.prev_forward = Some(forward);
        forward
    }

    pub fn prev_forward(&self) -> Option<DVec3> {
        self.prev_forward
    }

    /// Yaw chosen for this clip, if the projector has estimated one.
    pub fn clip_yaw(&self) -> Option<f64> {
        self.clip_yaw
    }

    /// Return the stored clip yaw, estimating and storing it on first use.
    pub fn clip_yaw_or_insert_with(&mut self, estimate: impl FnOnce() -> f64) -> f64 {
        *self.clip_yaw.get_or_insert_with(estimate)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/context.rs"]
mod tests;
