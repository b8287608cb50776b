//! Boilerplate status pages and the mount-aware redirect helper.

use super::handler::Reply;

pub fn not_found() -> Reply {
    Reply::new(404, "text/html; charset=utf-8", "<h1>404 Not Found</h1>")
}

pub fn internal_error() -> Reply {
    Reply::new(
        500,
        "text/html; charset=utf-8",
        "<h1>500 Internal Server Error</h1>",
    )
}

/// A 302 redirect. Absolute paths get the mount prefix; anything else is
/// sent through untouched.
pub fn redirect(location: &str, mount: &str) -> Reply {
    let location = if location.starts_with('/') {
        format!("{mount}{location}")
    } else {
        location.to_string()
    };
    Reply::new(302, "text/html; charset=utf-8", "").with_header("Location", location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pages() {
        assert_eq!(not_found().status, 404);
        assert_eq!(not_found().body, "<h1>404 Not Found</h1>");
        assert_eq!(internal_error().status, 500);
        assert_eq!(internal_error().body, "<h1>500 Internal Server Error</h1>");
    }

    #[test]
    fn test_redirect_prefixes_mount() {
        let reply = redirect("/users", "/app");
        assert_eq!(reply.status, 302);
        assert_eq!(
            reply.headers,
            vec![("Location".to_string(), "/app/users".to_string())]
        );
    }

    #[test]
    fn test_redirect_external_untouched() {
        let reply = redirect("https://example.com/", "/app");
        assert_eq!(
            reply.headers,
            vec![("Location".to_string(), "https://example.com/".to_string())]
        );
    }
}
