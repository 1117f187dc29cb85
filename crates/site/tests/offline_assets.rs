use platform_host::{ServiceWorkerMessage, APP_SHELL_URL, CACHE_NAME, PRECACHE_URLS};
use pretty_assertions::assert_eq;

const SERVICE_WORKER: &str = include_str!("../public/sw.js");
const MANIFEST: &str = include_str!("../public/manifest.webmanifest");
const INDEX_HTML: &str = include_str!("../index.html");

fn quoted(value: &str) -> String {
    format!("'{value}'")
}

#[test]
fn worker_uses_the_shared_cache_name_and_message_type() {
    assert!(SERVICE_WORKER.contains(&format!("const CACHE_NAME = {};", quoted(CACHE_NAME))));
    assert!(SERVICE_WORKER.contains(&format!("const APP_SHELL_URL = {};", quoted(APP_SHELL_URL))));
    assert!(SERVICE_WORKER.contains(&quoted(ServiceWorkerMessage::SkipWaiting.wire_type())));
}

#[test]
fn worker_precaches_exactly_the_shared_url_list() {
    let expected = format!(
        "const PRECACHE_URLS = [{}];",
        PRECACHE_URLS.map(quoted).join(", ")
    );
    assert!(SERVICE_WORKER.contains(&expected), "missing `{expected}`");
}

#[test]
fn precached_assets_are_shipped_with_the_bundle() {
    for url in PRECACHE_URLS {
        match url {
            "/" | "/index.html" => {}
            "/manifest.webmanifest" => {
                assert!(INDEX_HTML.contains(r#"href="public/manifest.webmanifest""#))
            }
            other if other.starts_with("/icons/") => {
                assert!(INDEX_HTML.contains(r#"href="public/icons""#));
                let file = other.trim_start_matches("/icons/");
                assert!(std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                    .join("public/icons")
                    .join(file)
                    .is_file());
            }
            other => panic!("precached url {other} has no bundled asset"),
        }
    }
    assert!(INDEX_HTML.contains(r#"href="public/sw.js""#));
}

#[test]
fn manifest_starts_the_shell_at_root() {
    let manifest: serde_json::Value = serde_json::from_str(MANIFEST).expect("manifest is JSON");
    assert_eq!(manifest["start_url"], "/");
    assert_eq!(manifest["icons"][0]["src"], "/icons/suitewaste.svg");
}
