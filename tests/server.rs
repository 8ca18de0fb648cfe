//! End-to-end tests against a listening server.

use axum::http::StatusCode;
use path_router::app::demo_router;
use path_router::config::RouterConfig;
use path_router::{RouteRequest, Router};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_params_and_root_over_http() {
    let router = Router::new()
        .add_route("GET", "/path/{foo}/{bar}", |req: RouteRequest| async move {
            let p = req.params();
            let ok = p.len() == 4
                && p.get("foo") == Some("fuz")
                && p.get("bar") == Some("baz")
                && p.get("aaa") == Some("bbb")
                && p.get("ccc") == Some("ddd");
            if ok {
                StatusCode::OK
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        })
        .unwrap()
        .add_route("GET", "/", |_req: RouteRequest| async { StatusCode::OK })
        .unwrap();

    let server = common::start_server(router).await;
    let client = common::client();

    let res = client
        .get(server.url("/path/fuz/baz?aaa=bbb&ccc=ddd"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let res = client.get(server.url("/nowhere")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_demo_routes() {
    let server = common::start_server(demo_router(&RouterConfig::default()).unwrap()).await;
    let client = common::client();

    let search: Value = client
        .get(server.url("/search?s=stuff+to+search+for"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(search["query"], "stuff to search for");

    let res = client.get(server.url("/search")).send().await.unwrap();
    assert_eq!(res.status(), 400);

    let book: Value = client
        .get(server.url("/book/978-0316371247"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(book["isbn"], "978-0316371247");

    let ready: Value = client
        .get(server.url("/health/ready"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["status"], "ready");

    let res = client.post(server.url("/health/ready")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_publish_while_serving() {
    let server = common::start_server(Router::new()).await;
    let client = common::client();

    let res = client.get(server.url("/added")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.routes.publish(
        Router::new()
            .add_route("GET", "/added", |_req: RouteRequest| async { "added" })
            .unwrap(),
    );

    let res = client.get(server.url("/added")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "added");

    server.stop().await.unwrap();
}
