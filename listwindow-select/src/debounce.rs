use alloc::string::String;

/// Default debounce window for keyword input, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Coalesces keystrokes into search triggers.
///
/// A pure data structure driven entirely by `now_ms` timestamps from the
/// embedding event loop; it holds no timers of its own. Every keystroke
/// re-arms the window, and a keyword only fires once the window elapses
/// and it differs from the last fired keyword, bounding search frequency.
#[derive(Clone, Debug)]
pub struct SearchDebouncer {
    delay_ms: u64,
    pending: Option<(String, u64)>,
    last_fired: Option<String>,
}

impl SearchDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
            last_fired: None,
        }
    }

    pub fn with_default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a keystroke and re-arms the window.
    pub fn note_input(&mut self, text: &str, now_ms: u64) {
        self.pending = Some((String::from(text), now_ms));
    }

    /// Fires the pending keyword once its window has elapsed.
    ///
    /// A keyword equal to the previously fired one is consumed silently,
    /// so retyping the same text never re-triggers a search.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        let (_, armed_at) = self.pending.as_ref()?;
        if now_ms.saturating_sub(*armed_at) < self.delay_ms {
            return None;
        }
        let (text, _) = self.pending.take()?;
        if self.last_fired.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last_fired = Some(text.clone());
        Some(text)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending keyword without firing.
    pub fn flush(&mut self) {
        self.pending = None;
    }
}
