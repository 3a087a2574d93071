use glam::Vec2;

/// Verweis auf eine einzelne Entität (Eigenschaften-Editor, Zentrieren)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Point(u64),
    Edge(u64),
    Area(u64),
}

/// Schweregrad einer Benutzer-Meldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Vorübergehende Meldung für den Benutzer
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Offenes Kontextmenü
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenu {
    /// Canvas-Position, an der das Menü geöffnet wurde
    pub canvas_pos: Vec2,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ausstehende Meldungen (älteste zuerst)
    pub notifications: Vec<Notification>,
    /// Entität im Eigenschaften-Editor
    pub property_target: Option<EntityRef>,
    /// Offenes Kontextmenü
    pub context_menu: Option<ContextMenu>,
    /// Pfad der aktuell geladenen Datei (für Save ohne Pfadangabe)
    pub current_file_path: Option<String>,
}

impl UiState {
    /// Obergrenze gehaltener Meldungen.
    const MAX_NOTIFICATIONS: usize = 20;

    /// Erstellt den Standard-UI-Zustand (alles geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        if self.notifications.len() >= Self::MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
        self.notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Warning, message);
    }

    /// Letzte Meldung (für Tests und Statuszeile).
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}
