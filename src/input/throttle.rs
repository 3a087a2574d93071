//! Drosselung roher Zeigerpositionen (nur Vorschauen, nie das Modell).

/// Lässt höchstens ein Zeiger-Event pro Intervall durch.
#[derive(Debug, Clone, Default)]
pub struct PointerThrottle {
    last_emit_ms: Option<u64>,
}

impl PointerThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft, ob ein Event zum Zeitpunkt `time_ms` durchgelassen wird.
    pub fn admit(&mut self, time_ms: u64, interval_ms: u64) -> bool {
        let due = self
            .last_emit_ms
            .is_none_or(|last| time_ms.saturating_sub(last) >= interval_ms);
        if due {
            self.last_emit_ms = Some(time_ms);
        }
        due
    }

    /// Nächstes Event sofort durchlassen.
    pub fn reset(&mut self) {
        self.last_emit_ms = None;
    }
}
