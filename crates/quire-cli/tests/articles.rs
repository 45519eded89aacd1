//! Article commands against a mock server.


use fixtures::{can_bind_localhost, quire, stored_token, temp_quire_home, write_token};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(header("authorization", "tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": [
                {"article_id": 1, "title": "Closures", "text": "Functions remember scope", "topic": "JavaScript"},
                {"article_id": 2, "title": "Hooks", "text": "useEffect runs after render", "topic": "React"}
            ],
            "message": "Here are your articles, foo!"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_prints_table() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-abc");
    mount_list(&server).await;

    quire(home.path(), &server)
        .args(["articles", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Here are your articles, foo!"))
        .stdout(predicate::str::contains("Closures"))
        .stdout(predicate::str::contains("React"));
}

#[tokio::test]
async fn test_create_posts_fields() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-abc");
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(body_json(
            json!({"title": "Streams", "text": "Backpressure", "topic": "Node"}),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "article": {"article_id": 9, "title": "Streams", "text": "Backpressure", "topic": "Node"},
            "message": "Created"
        })))
        .expect(1)
        .mount(&server)
        .await;

    quire(home.path(), &server)
        .args([
            "articles", "create", "--title", "Streams", "--text", "Backpressure", "--topic", "Node",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}

#[tokio::test]
async fn test_create_rejects_invalid_draft_without_request() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-abc");

    quire(home.path(), &server)
        .args([
            "articles", "create", "--title", "ab", "--text", "abcdef", "--topic", "React",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title must be at least 3 characters"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_update_keeps_unchanged_fields() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-abc");
    mount_list(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/articles/2"))
        .and(body_json(json!({
            "title": "Hooks in depth",
            "text": "useEffect runs after render",
            "topic": "React"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "article": {"article_id": 2, "title": "Hooks in depth", "text": "useEffect runs after render", "topic": "React"},
            "message": "Article 2 was updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    quire(home.path(), &server)
        .args(["articles", "update", "2", "--title", "Hooks in depth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article 2 was updated"));
}

#[tokio::test]
async fn test_update_unknown_id_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-abc");
    mount_list(&server).await;

    quire(home.path(), &server)
        .args(["articles", "update", "42", "--title", "Whatever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Article 42 not found"));
}

#[tokio::test]
async fn test_delete_prints_server_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-abc");
    Mock::given(method("DELETE"))
        .and(path("/api/articles/3"))
        .and(header("authorization", "tok-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Article 3 was deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    quire(home.path(), &server)
        .args(["articles", "delete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article 3 was deleted"));
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_quire_home();
    let server = MockServer::start().await;
    write_token(home.path(), "tok-expired");
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})),
        )
        .mount(&server)
        .await;

    quire(home.path(), &server)
        .args(["articles", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Token expired"));

    assert_eq!(stored_token(home.path()), None);
}

#[tokio::test]
async fn test_server_down_uses_generic_message() {
    let home = temp_quire_home();
    write_token(home.path(), "tok-abc");

    assert_cmd::cargo::cargo_bin_cmd!("quire")
        .env("QUIRE_HOME", home.path())
        .args(["--api-url", "http://127.0.0.1:1/api", "articles", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Something went wrong. Please try again."));

    assert_eq!(stored_token(home.path()).as_deref(), Some("tok-abc"));
}
