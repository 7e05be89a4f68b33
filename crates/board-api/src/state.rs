use std::sync::Arc;

pub type AppState<S> = Arc<AppStateInner<S>>;

/// Shared by every handler. The store is constructed by the caller and
/// handed in; nothing here reaches for globals.
pub struct AppStateInner<S> {
    pub store: S,
}

pub fn app_state<S>(store: S) -> AppState<S> {
    Arc::new(AppStateInner { store })
}
