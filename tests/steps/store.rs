//! Given steps that set up the mock post store

use crate::common::world::PostlineWorld;
use cucumber::gherkin::Step;
use cucumber::given;
use serde_json::{json, Map, Value};

#[given("a post store with posts:")]
async fn given_store_with_posts(world: &mut PostlineWorld, step: &Step) {
    let table = step.table.as_ref().expect("a table of posts");
    let header = &table.rows[0];

    let posts = table.rows[1..]
        .iter()
        .map(|row| {
            let mut post = Map::new();
            for (column, cell) in header.iter().zip(row) {
                let value = match column.as_str() {
                    "id" => json!(cell.parse::<u64>().expect("numeric id")),
                    _ => json!(cell),
                };
                post.insert(column.clone(), value);
            }
            Value::Object(post)
        })
        .collect();

    world.mount_posts(posts).await;
}

#[given("an empty post store")]
async fn given_empty_store(world: &mut PostlineWorld) {
    world.mount_posts(Vec::new()).await;
}

#[given("the post store is unreachable")]
async fn given_unreachable_store(world: &mut PostlineWorld) {
    // Nothing listens on a port freed right after binding it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind a local port");
    let port = listener.local_addr().expect("local address").port();
    drop(listener);
    world.base_url_override = Some(format!("http://127.0.0.1:{port}"));
}

#[given(expr = "the post store fails to {word} post {int}")]
async fn given_store_fails(world: &mut PostlineWorld, action: String, id: u64) {
    let verb = match action.as_str() {
        "load" => "GET",
        "update" => "PATCH",
        "delete" => "DELETE",
        other => panic!("Unknown store action: {other}"),
    };
    world
        .mount_failure(verb, &format!("/posts/{id}"), 500)
        .await;
}

#[given(expr = "the post store fails to create posts")]
async fn given_store_fails_create(world: &mut PostlineWorld) {
    world.mount_failure("POST", "/posts", 500).await;
}

#[given(expr = "the post store creates post {int} titled {string}")]
async fn given_store_creates(world: &mut PostlineWorld, id: u64, title: String) {
    let created = json!({
        "id": id,
        "title": title,
        "author": "",
        "image": "",
        "content": "",
        "date": "2024-06-01"
    });
    world.mount_json("POST", "/posts", 201, created).await;
}

#[given(expr = "the post store saves post {int} as {string}")]
async fn given_store_saves(world: &mut PostlineWorld, id: u64, title: String) {
    let mut saved = world.post(id).expect("post to save exists");
    saved["title"] = json!(title);
    world
        .mount_json("PATCH", &format!("/posts/{id}"), 200, saved)
        .await;
}

#[given(expr = "the post store deletes post {int}")]
async fn given_store_deletes(world: &mut PostlineWorld, id: u64) {
    world
        .mount_json("DELETE", &format!("/posts/{id}"), 200, json!({}))
        .await;
}
