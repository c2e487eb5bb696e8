//! Drawer geometry helpers
//!
//! Offsets are horizontal translations of the panel relative to its open
//! resting position: `0.0` is fully open, `-width` is fully closed.
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of any panel or input source.

/// Clamp a raw panel offset into `[-width, 0]`
#[inline]
pub fn clamp_offset(offset: f64, width: f64) -> f64 {
    offset.max(-width).min(0.0)
}

/// How far open the panel is, as a fraction in `[0, 1]`
///
/// Drives the backdrop overlay intensity linearly. A non-positive width
/// yields `0.0` (nothing to show).
#[inline]
pub fn progress(offset: f64, width: f64) -> f64 {
    if width > 0.0 {
        (1.0 - clamp_offset(offset, width).abs() / width).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Resting offset for the given open state
#[inline]
pub fn resting_offset(open: bool, width: f64) -> f64 {
    if open {
        0.0
    } else {
        -width
    }
}

/// Outcome of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitDecision {
    /// Whether the panel ends up open
    pub open: bool,
    /// Resting offset the panel settles to
    pub target_offset: f64,
}

impl CommitDecision {
    /// Decide open/closed from the release position alone
    ///
    /// Opens only when the panel was released strictly past
    /// `-width * commit_ratio`. There is no velocity term.
    pub fn from_release(last_offset: f64, width: f64, commit_ratio: f64) -> Self {
        let open = last_offset > -width * commit_ratio;
        Self::resting(open, width)
    }

    /// A decision that returns the panel to a known resting state
    pub fn resting(open: bool, width: f64) -> Self {
        Self {
            open,
            target_offset: resting_offset(open, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_offset_bounds() {
        assert_eq!(clamp_offset(50.0, 300.0), 0.0);
        assert_eq!(clamp_offset(-500.0, 300.0), -300.0);
        assert_eq!(clamp_offset(-120.5, 300.0), -120.5);
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress(0.0, 300.0), 1.0);
        assert_eq!(progress(-300.0, 300.0), 0.0);
        assert_eq!(progress(-150.0, 300.0), 0.5);
    }

    #[test]
    fn test_progress_zero_width() {
        assert_eq!(progress(0.0, 0.0), 0.0);
        assert_eq!(progress(-10.0, -5.0), 0.0);
    }

    #[test]
    fn test_commit_exactly_half_closes() {
        let decision = CommitDecision::from_release(-150.0, 300.0, 0.5);
        assert!(!decision.open);
        assert_eq!(decision.target_offset, -300.0);
    }

    #[test]
    fn test_commit_just_past_half_opens() {
        let decision = CommitDecision::from_release(-149.9, 300.0, 0.5);
        assert!(decision.open);
        assert_eq!(decision.target_offset, 0.0);
    }
}
