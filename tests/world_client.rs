use std::collections::HashMap;

use orbit_rig::Error;
use orbit_rig::world::{BubbleSettings, WorldBubble, WorldClient, WorldLoader};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve canned `(status, body)` pairs by request path until the test ends.
async fn serve(routes: HashMap<&'static str, (u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = routes
                .get(path.as_str())
                .copied()
                .unwrap_or((404, "not found"));

            let response = format!(
                "HTTP/1.1 {status} X\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}/api")
}

fn client(base_url: &str) -> WorldClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    WorldClient::with_http(base_url, http)
}

const WORLDS: &str = r#"{"items":[
    {"worldId":"w-1","name":"Alpha"},
    {"worldId":"w-2","name":"Beta"}
]}"#;
const BETA: &str = r#"{
    "worldId":"w-2", "name":"Beta", "seed":42, "radius":300,
    "version":"2", "createdAt":"2025-10-01", "dirty":false
}"#;

#[tokio::test]
async fn fetches_world_list() {
    let base = serve(HashMap::from([("/api/worlds", (200, WORLDS))])).await;

    let worlds = client(&base).fetch_worlds().await.unwrap();
    assert_eq!(worlds.len(), 2);
    assert_eq!(worlds[0].name, "Alpha");
}

#[tokio::test]
async fn list_without_items_is_malformed() {
    let base = serve(HashMap::from([("/api/worlds", (200, "{}"))])).await;

    let err = client(&base).fetch_worlds().await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }), "{err}");
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let base = serve(HashMap::from([("/api/worlds", (500, "boom"))])).await;

    let err = client(&base).fetch_worlds().await.unwrap_err();
    match err {
        Error::HttpStatus { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/api/worlds"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    let base = serve(HashMap::from([("/api/world/w-9", (200, "not json"))])).await;

    let err = client(&base).fetch_world("w-9").await.unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "{err}");
}

#[tokio::test]
async fn connecting_scales_the_bubble() {
    let base = serve(HashMap::from([
        ("/api/worlds", (200, WORLDS)),
        ("/api/world/w-2", (200, BETA)),
    ]))
    .await;

    let bubble = WorldBubble::new(BubbleSettings::default());
    let mut loader = WorldLoader::new(client(&base), Some(bubble));

    assert_eq!(loader.load_world_list().await.unwrap(), 2);
    assert_eq!(loader.selector().options()[1], "Beta (w-2)");

    loader.selector_mut().select(1);
    let detail = loader.connect_selected().await.unwrap();
    assert_eq!(detail.seed, 42);

    let instance = loader.bubble().unwrap().instance().unwrap();
    assert_eq!(instance.scale.x, 600.0);
    assert_eq!(loader.current().unwrap().world_id, "w-2");
}

#[tokio::test]
async fn failed_connect_keeps_previous_world() {
    let base = serve(HashMap::from([
        ("/api/worlds", (200, WORLDS)),
        ("/api/world/w-2", (200, BETA)),
    ]))
    .await;

    let bubble = WorldBubble::new(BubbleSettings::default());
    let mut loader = WorldLoader::new(client(&base), Some(bubble));
    loader.load_world_list().await.unwrap();
    loader.selector_mut().select(1);
    loader.connect_selected().await.unwrap();

    // w-1 has no detail route
    loader.selector_mut().select(0);
    assert!(loader.connect_selected().await.is_err());
    assert_eq!(loader.current().unwrap().world_id, "w-2");
    assert_eq!(loader.bubble().unwrap().instance().unwrap().scale.x, 600.0);
}
