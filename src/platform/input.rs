//! Activation button sampling

/// The single push-button, read as a level
pub trait ActivationInput {
    /// Whether the button is held right now
    fn is_asserted(&mut self) -> bool;
}

impl<F: FnMut() -> bool> ActivationInput for F {
    fn is_asserted(&mut self) -> bool {
        self()
    }
}

/// Turns once-per-tick level samples into press edges
///
/// A button held across many ticks reports exactly one press.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    previous: bool,
}

impl ButtonEdge {
    /// Feed this tick's level; true only on a released -> held transition
    pub fn sample(&mut self, level: bool) -> bool {
        let pressed = level && !self.previous;
        self.previous = level;
        pressed
    }

    pub fn is_held(&self) -> bool {
        self.previous
    }
}
