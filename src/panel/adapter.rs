//! Panel adapter capability traits

use crate::pointer::Point;

/// Capabilities the drawer needs from the embedding UI
///
/// Offsets follow the convention in [`crate::geometry`]: `0.0` is the open
/// resting position and `-width` is fully closed.
pub trait PanelAdapter {
    /// Current rendered width in logical pixels
    fn width(&self) -> f64;

    /// Persistent open/closed state; the source of truth for resting position
    fn is_open(&self) -> bool;

    fn set_open(&mut self, open: bool);

    /// Set the transient inline horizontal offset of the panel
    fn set_visual_offset(&mut self, offset: f64);

    /// Set the backdrop overlay intensity, `0.0..=1.0`
    fn set_overlay_intensity(&mut self, intensity: f64);

    /// Enable or disable eased transitions of offset and intensity
    fn set_transition_enabled(&mut self, enabled: bool);

    /// Drop inline offset, intensity and transition overrides so the panel
    /// falls back to its stylesheet resting rule
    fn clear_inline_style(&mut self);

    /// Whether a point lies inside the region the open panel occupies
    fn contains_point(&self, point: Point) -> bool;
}

/// Looks up the panel for each gesture
///
/// Returning `None` is not an error; the controller does nothing for that
/// event and tries again on the next one.
pub trait PanelResolver {
    type Panel: PanelAdapter;

    fn resolve(&mut self) -> Option<&mut Self::Panel>;
}

impl<P: PanelAdapter> PanelResolver for Option<P> {
    type Panel = P;

    fn resolve(&mut self) -> Option<&mut P> {
        self.as_mut()
    }
}
