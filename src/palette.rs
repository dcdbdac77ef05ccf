use folio_core::{Hsl, Theme};

/// Remembers the last `--foreground` token so per-frame lookups only parse
/// when the stylesheet actually changed.
#[derive(Clone, Debug, Default)]
pub struct ForegroundCache {
    raw: Option<String>,
    color: Option<Hsl>,
}

impl ForegroundCache {
    /// Colour for `token`, or the theme's built-in ink when the token is
    /// missing or unparsable.
    pub fn resolve(&mut self, token: Option<&str>, theme: Theme) -> Hsl {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        let Some(token) = token else {
            self.raw = None;
            self.color = None;
            return theme.fallback_foreground();
        };
        if self.raw.as_deref() != Some(token) {
            self.color = match Hsl::parse(token) {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("[theme] {}", e);
                    None
                }
            };
            self.raw = Some(token.to_string());
        }
        self.color.unwrap_or_else(|| theme.fallback_foreground())
    }
}
