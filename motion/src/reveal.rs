//! Presentation mapping for staggered reveal blocks.
//!
//! A reveal block is either hidden (faded, shifted down) or revealed. The
//! tracker's boolean picks the state; a per-block delay offsets the CSS
//! transition so siblings cascade instead of appearing together.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Two-state presentation of a reveal block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Revealed } else { Self::Hidden }
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    /// CSS classes for this state.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Hidden => "reveal reveal--hidden",
            Self::Revealed => "reveal reveal--revealed",
        }
    }
}

/// Inline style offsetting the reveal transition by `delay_ms`.
#[must_use]
pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms")
}

/// Delay for the `index`-th sibling in a cascade starting at `base_ms`.
#[must_use]
pub fn stagger_delay(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}
