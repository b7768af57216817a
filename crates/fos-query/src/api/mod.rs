//! Operation library shared by every selection
//!
//! The library is installed once per process. The first call to
//! [`compose`] (or the first query, which installs the default) wins and
//! later calls are no-ops.

use std::sync::OnceLock;

use fos_dom::NodeRef;

use crate::{Options, Result};

mod traversing;

pub use traversing::Traversing;

/// Selector engine backing `find`
pub trait Matcher: Send + Sync {
    /// Elements below `roots` matching `selector`, in document order
    fn select_all(&self, selector: &str, roots: &[NodeRef], options: &Options) -> Result<Vec<NodeRef>>;
}

/// Default matcher, backed by `fos-css`
#[derive(Debug, Default, Clone, Copy)]
pub struct CssMatcher;

impl Matcher for CssMatcher {
    fn select_all(&self, selector: &str, roots: &[NodeRef], options: &Options) -> Result<Vec<NodeRef>> {
        Ok(fos_css::select_all(selector, roots, options.match_options())?)
    }
}

/// The composed operation library
pub struct Api {
    matcher: Box<dyn Matcher>,
}

impl Api {
    pub fn new(matcher: impl Matcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }

    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new(CssMatcher)
    }
}

static API: OnceLock<Api> = OnceLock::new();

/// Install `api` for the rest of the process
///
/// Returns `true` if this call installed it, `false` if a library was
/// already composed.
pub fn compose(api: Api) -> bool {
    let mut installed = false;
    API.get_or_init(|| {
        installed = true;
        api
    });
    tracing::debug!(installed, "compose");
    installed
}

/// The composed library, installing the default on first use
pub fn composed() -> &'static Api {
    API.get_or_init(|| {
        tracing::debug!("composing default api");
        Api::default()
    })
}

pub fn is_composed() -> bool {
    API.get().is_some()
}
