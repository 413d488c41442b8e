//! Browser-side implementations of the portal seams.

use dioxus::prelude::*;
use portal::{
    HospitalApi, HttpApi, ListState, ListView, ModalHost, ModalKind, ModalState, Page,
    SessionStore,
};
use shared_types::{ROLE_KEY, TOKEN_KEY};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::routes::Route;

/// `localStorage`-backed session entries.
///
/// Reads are served from a cache filled once by [`hydrate`](Self::hydrate);
/// writes update the cache and are mirrored to the browser.
#[derive(Debug, Default)]
pub struct BrowserSessionStore {
    cache: RefCell<HashMap<String, String>>,
}

impl BrowserSessionStore {
    /// Load `userRole` and `token` from `localStorage` into the cache.
    pub async fn hydrate(&self) {
        let script = format!(
            "return {{ {role}: localStorage.getItem({role}), {token}: localStorage.getItem({token}) }};",
            role = js_string(ROLE_KEY),
            token = js_string(TOKEN_KEY),
        );
        match document::eval(&script).await {
            Ok(value) => {
                let mut cache = self.cache.borrow_mut();
                for key in [ROLE_KEY, TOKEN_KEY] {
                    if let Some(v) = value.get(key).and_then(|v| v.as_str()) {
                        cache.insert(key.to_string(), v.to_string());
                    }
                }
                tracing::debug!(entries = cache.len(), "session hydrated");
            }
            Err(e) => tracing::warn!(error = ?e, "could not read localStorage"),
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.cache
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        document::eval(&format!(
            "localStorage.setItem({}, {});",
            js_string(key),
            js_string(value)
        ));
    }

    fn remove(&self, key: &str) {
        self.cache.borrow_mut().remove(key);
        document::eval(&format!("localStorage.removeItem({});", js_string(key)));
    }
}

/// Quote a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Blocking `window.alert` notices.
#[derive(Debug, Default)]
pub struct AlertNotifier;

impl portal::Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        tracing::info!(notice = message, "alert");
        document::eval(&format!("alert({});", js_string(message)));
    }
}

/// Router-backed page navigation.
pub struct RouterNavigator;

impl portal::Navigator for RouterNavigator {
    fn navigate(&self, page: Page) {
        navigator().push(Route::from(page));
    }

    fn reload(&self) {
        document::eval("window.location.reload();");
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Landing => Route::Landing {},
            Page::AdminDashboard => Route::AdminDashboard {},
            Page::DoctorDashboard => Route::DoctorDashboard {},
            Page::PatientDashboard => Route::PatientDashboard {},
            Page::LoggedPatientDashboard => Route::LoggedPatientDashboard {},
            Page::PatientAppointments => Route::PatientAppointments {},
        }
    }
}

/// List region backed by a signal; every `show` re-renders its readers.
pub struct SignalListView<T: 'static>(pub Signal<ListState<T>>);

impl<T: 'static> ListView<T> for SignalListView<T> {
    fn show(&self, state: ListState<T>) {
        let mut signal = self.0;
        signal.set(state);
    }
}

/// Overlay state backed by a signal.
pub struct SignalModalHost(pub Signal<ModalState>);

impl ModalHost for SignalModalHost {
    fn open(&self, kind: ModalKind) {
        let mut signal = self.0;
        signal.write().show(kind);
    }

    fn close(&self) {
        let mut signal = self.0;
        signal.write().close_modal();
    }
}

/// Long-lived services shared by every page through context.
#[derive(Clone)]
pub struct Services {
    pub api: Rc<dyn HospitalApi>,
    pub session: Rc<BrowserSessionStore>,
    pub notifier: Rc<AlertNotifier>,
    pub navigator: Rc<RouterNavigator>,
}

impl Services {
    pub fn new(api: HttpApi) -> Self {
        Self {
            api: Rc::new(api),
            session: Rc::new(BrowserSessionStore::default()),
            notifier: Rc::new(AlertNotifier),
            navigator: Rc::new(RouterNavigator),
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
