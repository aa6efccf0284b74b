//! Serves the console bundle compiled into the binary. Unknown paths fall
//! back to `index.html` so client-side navigation survives a reload.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::warn;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

pub(crate) fn serve_from(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => {
                warn!("console bundle missing, cannot serve /{}", file_path);
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use include_dir::{DirEntry, File};

    static INDEX: &[u8] = b"<html>console</html>";
    static SCRIPT: &[u8] = b"console.log(1)";
    static ENTRIES: &[DirEntry<'static>] = &[
        DirEntry::File(File::new("index.html", INDEX)),
        DirEntry::File(File::new("app.js", SCRIPT)),
    ];
    static BUNDLE: Dir<'static> = Dir::new("", ENTRIES);
    static EMPTY: Dir<'static> = Dir::new("", &[]);

    fn content_type(resp: &HttpResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn root_serves_index() {
        let resp = serve_from(&BUNDLE, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[test]
    fn assets_get_their_mime_type() {
        let resp = serve_from(&BUNDLE, "/app.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).contains("javascript"));
    }

    #[test]
    fn client_routes_fall_back_to_index() {
        let resp = serve_from(&BUNDLE, "/account");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[test]
    fn missing_bundle_is_not_found() {
        let resp = serve_from(&EMPTY, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
