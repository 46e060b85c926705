use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::nav::NavEntry;
use crate::status::StatusClass;

/// Zero-argument accessor, re-evaluated on every read.
pub type Derived<T> = Arc<dyn Fn() -> T + Send + Sync>;
/// Value-to-class accessor bound as `fullClass`.
pub type StatusFn = Arc<dyn Fn(Option<f64>) -> StatusClass + Send + Sync>;

/// Accessors an initializer registers into a page's view state.
///
/// Unset fields leave whatever an earlier registration put there.
#[derive(Clone, Default)]
pub struct ViewOpts {
    /// `navTopSelected`
    pub nav_top_selected: Option<Derived<String>>,
    /// `navTop`
    pub nav_top: Option<Derived<Vec<NavEntry>>>,
    /// `sourceHost`
    pub source_host: Option<Derived<String>>,
    /// `navSubSelected`
    pub nav_sub_selected: Option<Derived<String>>,
    /// `navSub`
    pub nav_sub: Option<Derived<Vec<NavEntry>>>,
    /// `fullClass`
    pub full_class: Option<StatusFn>,
}

impl ViewOpts {
    fn merge(&mut self, other: ViewOpts) {
        if let Some(f) = other.nav_top_selected {
            self.nav_top_selected = Some(f);
        }
        if let Some(f) = other.nav_top {
            self.nav_top = Some(f);
        }
        if let Some(f) = other.source_host {
            self.source_host = Some(f);
        }
        if let Some(f) = other.nav_sub_selected {
            self.nav_sub_selected = Some(f);
        }
        if let Some(f) = other.nav_sub {
            self.nav_sub = Some(f);
        }
        if let Some(f) = other.full_class {
            self.full_class = Some(f);
        }
    }

    /// Bound accessor names, in a stable order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.nav_top_selected.is_some() {
            names.push("navTopSelected");
        }
        if self.nav_top.is_some() {
            names.push("navTop");
        }
        if self.source_host.is_some() {
            names.push("sourceHost");
        }
        if self.nav_sub_selected.is_some() {
            names.push("navSubSelected");
        }
        if self.nav_sub.is_some() {
            names.push("navSub");
        }
        if self.full_class.is_some() {
            names.push("fullClass");
        }
        names
    }
}

impl fmt::Debug for ViewOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewOpts")
            .field("bound", &self.names())
            .finish()
    }
}

/// What an initializer needs from the page it sets up.
pub trait PageHost {
    /// Merge accessors into the page's view state.
    fn add_opts(&mut self, opts: ViewOpts);

    /// Request that a shared fragment be mounted in the page. Fire and
    /// forget: the caller never learns whether the fragment loaded.
    fn include_html_fragment(&mut self, path: &str);

    /// Record that the initializer `key` ran. Returns false if it already had.
    fn begin_once(&mut self, key: &'static str) -> bool;
}

/// View state for a single page render.
#[derive(Debug, Default)]
pub struct PageView {
    title: String,
    opts: ViewOpts,
    fragments: Vec<String>,
    initialized: HashSet<&'static str>,
}

impl PageView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fragment paths in the order they were requested.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn opts(&self) -> &ViewOpts {
        &self.opts
    }

    pub fn nav_top_selected(&self) -> Option<String> {
        self.opts.nav_top_selected.as_ref().map(|f| f())
    }

    pub fn nav_top(&self) -> Option<Vec<NavEntry>> {
        self.opts.nav_top.as_ref().map(|f| f())
    }

    pub fn source_host(&self) -> Option<String> {
        self.opts.source_host.as_ref().map(|f| f())
    }

    pub fn nav_sub_selected(&self) -> Option<String> {
        self.opts.nav_sub_selected.as_ref().map(|f| f())
    }

    pub fn nav_sub(&self) -> Option<Vec<NavEntry>> {
        self.opts.nav_sub.as_ref().map(|f| f())
    }

    pub fn full_class(&self, val: Option<f64>) -> Option<StatusClass> {
        self.opts.full_class.as_ref().map(|f| f(val))
    }
}

impl PageHost for PageView {
    fn add_opts(&mut self, opts: ViewOpts) {
        debug!(page = %self.title, bound = ?opts.names(), "Registering view accessors");
        self.opts.merge(opts);
    }

    fn include_html_fragment(&mut self, path: &str) {
        debug!(page = %self.title, path, "Including fragment");
        self.fragments.push(path.to_string());
    }

    fn begin_once(&mut self, key: &'static str) -> bool {
        self.initialized.insert(key)
    }
}
