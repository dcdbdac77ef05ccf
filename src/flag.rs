// Mirror of a boolean `data-*` attribute. Only flips reach the DOM.

#[derive(Debug, Default)]
pub struct FlagMirror {
    last: Option<bool>,
}

impl FlagMirror {
    /// Attribute value to write when `value` differs from the last one
    /// written, `None` otherwise. The first call always writes.
    pub fn update(&mut self, value: bool) -> Option<&'static str> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(if value { "1" } else { "0" })
    }
}
