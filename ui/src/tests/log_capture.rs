//! Failure paths that are handled by logging must actually emit records to the installed
//! `tracing` subscriber (the one `dioxus_logger::init` installs in the web binary).

use std::fmt;
use std::sync::{Arc, Mutex};

use dioxus_logger::tracing::field::{Field, Visit};
use dioxus_logger::tracing::{self, span, Event, Level, Metadata, Subscriber};

use super::fake_dom::FakeDom;
use crate::charts::{init_dashboard_charts, ChartError, ChartLibrary, ChartSpec};
use crate::core::config::SidebarConfig;
use crate::core::storage::{self, KeyValueStore, MemoryStore, StorageError};
use crate::sidebar::{SidebarController, SidebarEvent, SidebarRuntime};

type Records = Arc<Mutex<Vec<(Level, String)>>>;

#[derive(Clone, Default)]
struct Capture {
    records: Records,
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.records
            .lock()
            .expect("records lock")
            .push((*event.metadata().level(), visitor.0));
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

fn captured<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    let capture = Capture::default();
    tracing::subscriber::with_default(capture.clone(), f);
    let records = capture.records.lock().expect("records lock").clone();
    records
}

fn has(records: &[(Level, String)], level: Level, needle: &str) -> bool {
    records
        .iter()
        .any(|(lvl, message)| *lvl == level && message.contains(needle))
}

struct FullStore;

impl KeyValueStore for FullStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.into(),
            reason: "SecurityError".into(),
        })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.into(),
            reason: "QuotaExceededError".into(),
        })
    }
}

struct NoChartJs;

impl ChartLibrary for NoChartJs {
    fn is_available(&self) -> bool {
        false
    }

    fn apply_defaults(&self, _font_family: &str, _text_color: &str) -> Result<(), ChartError> {
        Err(ChartError::LibraryMissing)
    }

    fn has_canvas(&self, _canvas_id: &str) -> bool {
        true
    }

    fn render(&self, _spec: &ChartSpec) -> Result<(), ChartError> {
        Err(ChartError::LibraryMissing)
    }
}

#[test]
fn missing_layout_is_reported_as_warning() {
    let records = captured(|| {
        let dom = FakeDom::new(1280.0, "/");
        dom.add(None, &["admin-sidebar"], &[]);
        let controller =
            SidebarController::initialize(dom, MemoryStore::new(), SidebarConfig::default());
        assert!(controller.is_none());
    });
    assert!(has(&records, Level::WARN, "sidebar disabled"), "{records:?}");
}

#[test]
fn storage_failures_are_reported_as_warnings() {
    let records = captured(|| {
        assert_eq!(storage::load_flag(&FullStore, "sidebarCollapsed"), None);
        storage::save_flag(&FullStore, "sidebarCollapsed", true);
    });
    assert!(has(&records, Level::WARN, "Could not load `sidebarCollapsed`"), "{records:?}");
    assert!(has(&records, Level::WARN, "Could not save `sidebarCollapsed`"), "{records:?}");
}

#[test]
fn missing_chart_library_is_reported_as_error() {
    let records = captured(|| {
        let styles = std::collections::HashMap::new();
        assert_eq!(
            init_dashboard_charts(&NoChartJs, &styles),
            Err(ChartError::LibraryMissing)
        );
    });
    assert!(has(&records, Level::ERROR, "Chart.js not loaded"), "{records:?}");
}

#[test]
fn unknown_dropdown_target_is_traced() {
    let records = captured(|| {
        let page = FakeDom::admin_page(1280.0, "/admin/index.html", &["index.html"]);
        let controller = SidebarController::try_initialize(
            page.dom.clone(),
            MemoryStore::new(),
            SidebarConfig::default(),
        )
        .expect("admin layout present");
        let mut runtime = SidebarRuntime::new(controller);
        runtime.dispatch(SidebarEvent::DropdownToggleClicked("ghost-menu".into()), 0);
    });
    assert!(has(&records, Level::DEBUG, "no dropdown menu `ghost-menu`"), "{records:?}");
}
