//! Outcome notifications for setup and calculator actions.

use std::collections::VecDeque;
use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::ImportError;
use crate::util::generate_id;
use crate::util::persistence::PersistSaveError;

const NOTICE_LIFETIME: Duration = Duration::from_secs(3);
const NOTICE_LIMIT: usize = 5;

pub type NoticeQueue = Signal<VecDeque<Toast>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Info => "toast toast-info",
            Severity::Success => "toast toast-success",
            Severity::Warning => "toast toast-warning",
            Severity::Error => "toast toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Severity::Info => "ℹ️",
            Severity::Success => "✅",
            Severity::Warning => "⚠️",
            Severity::Error => "⛔",
        }
    }
}

/// Something the user did, and how it went.
#[derive(Debug)]
pub enum Notice {
    PlanetAdded { name: String },
    PlanetUpdated { name: String },
    PlanetRemoved { name: String },
    MissingName,
    InvalidUnits { raw: String },
    SetupImported { planets: usize },
    MatrixImported { rows: usize },
    Recalculated { traded_units: u64 },
    ImportRejected(ImportError),
    ExportFailed(serde_json::Error),
    SaveFailed(PersistSaveError),
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::PlanetRemoved { .. } => Severity::Info,
            Notice::PlanetAdded { .. }
            | Notice::PlanetUpdated { .. }
            | Notice::SetupImported { .. }
            | Notice::MatrixImported { .. }
            | Notice::Recalculated { .. } => Severity::Success,
            Notice::MissingName | Notice::InvalidUnits { .. } | Notice::SaveFailed(_) => {
                Severity::Warning
            }
            Notice::ImportRejected(_) | Notice::ExportFailed(_) => Severity::Error,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::PlanetAdded { name } => format!("Added {name}."),
            Notice::PlanetUpdated { name } => format!("Saved changes to {name}."),
            Notice::PlanetRemoved { name } => format!("Removed {name}."),
            Notice::MissingName => "Give the planet a name first.".to_string(),
            Notice::InvalidUnits { raw } => {
                format!("{raw:?} is not a whole, non-negative number of units.")
            }
            Notice::SetupImported { planets } => format!("Imported {planets} planets."),
            Notice::MatrixImported { rows } => format!("Imported trade structure for {rows} planets."),
            Notice::Recalculated { traded_units } => {
                format!("Trades recalculated: {traded_units} units exchanged.")
            }
            Notice::ImportRejected(err) => format!("Import failed: {err}"),
            Notice::ExportFailed(err) => format!("Export failed: {err}"),
            Notice::SaveFailed(err) => format!("Changes are not saved: {err}"),
        }
    }
}

impl From<ImportError> for Notice {
    fn from(err: ImportError) -> Self {
        Notice::ImportRejected(err)
    }
}

impl From<PersistSaveError> for Notice {
    fn from(err: PersistSaveError) -> Self {
        Notice::SaveFailed(err)
    }
}

impl From<serde_json::Error> for Notice {
    fn from(err: serde_json::Error) -> Self {
        Notice::ExportFailed(err)
    }
}

/// A rendered notice waiting in the queue.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub severity: Severity,
    pub text: String,
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Self {
            id: generate_id("notice"),
            severity: notice.severity(),
            text: notice.text(),
        }
    }
}

pub fn notify(mut queue: NoticeQueue, notice: impl Into<Notice>) {
    let notice = notice.into();
    match notice.severity() {
        Severity::Warning | Severity::Error => {
            tracing::warn!(target: "ui", notice = ?notice, "action failed")
        }
        _ => tracing::debug!(target: "ui", notice = ?notice, "action completed"),
    }
    queue.with_mut(|entries| enqueue(entries, Toast::from(notice)));
}

fn enqueue(entries: &mut VecDeque<Toast>, toast: Toast) {
    while entries.len() >= NOTICE_LIMIT {
        entries.pop_front();
    }
    entries.push_back(toast);
}

#[component]
pub fn NoticeStack() -> Element {
    let queue = use_context::<NoticeQueue>();
    let toasts = queue().into_iter().collect::<Vec<_>>();
    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "toast-stack",
            for toast in toasts {
                NoticeCard { key: "{toast.id}", toast: toast.clone(), queue }
            }
        }
    }
}

#[component]
fn NoticeCard(toast: Toast, queue: NoticeQueue) -> Element {
    let expiring = toast.id.clone();
    use_future(move || {
        let id = expiring.clone();
        async move {
            tokio::time::sleep(NOTICE_LIFETIME).await;
            let mut queue = queue;
            queue.with_mut(|entries| entries.retain(|entry| entry.id != id));
        }
    });

    let id = toast.id.clone();
    let mut dismiss = queue;
    rsx! {
        li { class: toast.severity.class(),
            span { class: "toast-icon", "{toast.severity.icon()}" }
            p { "{toast.text}" }
            button {
                class: "btn-link",
                onclick: move |_| dismiss.with_mut(|entries| entries.retain(|entry| entry.id != id)),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_not_reported_as_success() {
        let rejected = crate::domain::parse_planets_json("{}", || "id".to_string())
            .expect_err("object is not a setup");
        let notice = Notice::from(rejected);
        assert_eq!(notice.severity(), Severity::Error);
        assert!(notice.text().contains("expected an array of planets"));

        let notice = Notice::from(PersistSaveError::StorageUnavailable);
        assert_eq!(notice.severity(), Severity::Warning);
        assert!(notice.text().contains("storage directory unavailable"));
    }

    #[test]
    fn invalid_units_echo_the_raw_input() {
        let notice = Notice::InvalidUnits { raw: "-4".to_string() };
        assert_eq!(notice.severity(), Severity::Warning);
        assert!(notice.text().starts_with("\"-4\""));
    }

    #[test]
    fn queue_keeps_only_the_newest_notices() {
        let mut entries = VecDeque::new();
        for traded_units in 0..(NOTICE_LIMIT as u64 + 2) {
            enqueue(&mut entries, Toast::from(Notice::Recalculated { traded_units }));
        }
        assert_eq!(entries.len(), NOTICE_LIMIT);
        assert!(entries[0].text.contains(": 2 units"));
    }
}
