#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Platform haptic feedback. Platforms without haptics can use [`NoHaptics`].
pub trait Haptics {
    fn impact(&mut self, style: ImpactStyle);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impact(&mut self, _style: ImpactStyle) {}
}

impl<F: FnMut(ImpactStyle)> Haptics for F {
    fn impact(&mut self, style: ImpactStyle) {
        self(style)
    }
}
