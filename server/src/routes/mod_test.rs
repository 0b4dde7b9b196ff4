use std::time::Duration;

use axum::http::header::LOCATION;

use super::*;

async fn serve_api_routes() -> String {
    let proxy = ProxyState::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client should build");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, api_routes(proxy)).await.expect("serve should run");
    });
    format!("http://{addr}")
}

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = serve_api_routes().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn legacy_html_pages_redirect_permanently() {
    let base = serve_api_routes().await;
    let client = no_redirect_client();

    for (legacy, target) in [
        ("/index.html", "/register"),
        ("/register.html", "/register"),
        ("/login.html", "/login"),
        ("/dashboard.html", "/dashboard"),
    ] {
        let resp = client.get(format!("{base}{legacy}")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT, "{legacy}");
        assert_eq!(resp.headers()[LOCATION], target, "{legacy}");
    }
}

#[test]
fn every_legacy_page_maps_to_a_page_kind() {
    for path in LEGACY_PAGES {
        assert!(PageKind::from_path(path).is_some(), "{path}");
    }
}
