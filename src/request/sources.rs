//! Request input sources and the mask selecting among them.

use bitflags::bitflags;
use indexmap::IndexMap;

bitflags! {
    /// Which request sources a lookup may consult.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SourceMask: u8 {
        /// Query-string parameters.
        const GET = 1;
        /// Form-body parameters.
        const POST = 2;
        /// Cookies.
        const COOKIE = 4;
    }
}

/// The three independent key-value input sources of one request.
#[derive(Debug, Clone, Default)]
pub struct RequestSources {
    pub query: IndexMap<String, String>,
    pub form: IndexMap<String, String>,
    pub cookies: IndexMap<String, String>,
}

impl RequestSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// First hit in fixed precedence order (query, form, cookie), consulting
    /// only sources enabled in `mask`.
    pub fn lookup(&self, name: &str, mask: SourceMask) -> Option<&str> {
        if mask.contains(SourceMask::GET) {
            if let Some(v) = self.query.get(name) {
                return Some(v);
            }
        }
        if mask.contains(SourceMask::POST) {
            if let Some(v) = self.form.get(name) {
                return Some(v);
            }
        }
        if mask.contains(SourceMask::COOKIE) {
            if let Some(v) = self.cookies.get(name) {
                return Some(v);
            }
        }
        None
    }
}
