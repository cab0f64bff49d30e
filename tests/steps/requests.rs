//! Then steps about the requests the store received

use crate::common::world::PostlineWorld;
use cucumber::then;
use serde_json::Value;

#[then(expr = "the store should have received {int} {word} request(s)")]
async fn then_request_count(world: &mut PostlineWorld, count: usize, verb: String) {
    let requests = world.requests_with_method(&verb).await;
    assert_eq!(requests.len(), count, "{verb} requests: {requests:?}");
}

#[then(expr = "the last {word} request should have {string} set to {string}")]
async fn then_last_request_field(world: &mut PostlineWorld, verb: String, field: String, value: String) {
    let requests = world.requests_with_method(&verb).await;
    let last = requests.last().expect("at least one request");
    let body: Value = serde_json::from_slice(&last.body).expect("JSON request body");
    assert_eq!(body[field.as_str()], Value::String(value), "body was {body}");
}

#[then(expr = "the last {word} request should go to {string}")]
async fn then_last_request_path(world: &mut PostlineWorld, verb: String, expected: String) {
    let requests = world.requests_with_method(&verb).await;
    let last = requests.last().expect("at least one request");
    assert_eq!(last.url.path(), expected);
}

#[then(expr = "the last {word} request should have {string} set to:")]
async fn then_last_request_field_docstring(
    world: &mut PostlineWorld,
    step: &cucumber::gherkin::Step,
    verb: String,
    field: String,
) {
    let expected = step.docstring.as_deref().expect("a doc string").trim();
    let requests = world.requests_with_method(&verb).await;
    let last = requests.last().expect("at least one request");
    let body: Value = serde_json::from_slice(&last.body).expect("JSON request body");
    assert_eq!(body[field.as_str()], Value::String(expected.to_string()), "body was {body}");
}
