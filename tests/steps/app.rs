//! Steps that start the app and drive it with keys

use crate::common::world::PostlineWorld;
use cucumber::{then, when};

#[when("the app starts")]
async fn when_app_starts(world: &mut PostlineWorld) {
    world.start_app().await.expect("app starts");
}

#[when(expr = "I press {string}")]
async fn when_press(world: &mut PostlineWorld, key: String) {
    world.press_key(&key).await.expect("key is handled");
}

#[when(expr = "I press {string} {int} times")]
async fn when_press_repeatedly(world: &mut PostlineWorld, key: String, times: usize) {
    for _ in 0..times {
        world.press_key(&key).await.expect("key is handled");
    }
}

#[when(expr = "I type {string}")]
async fn when_type(world: &mut PostlineWorld, text: String) {
    world.type_text(&text).await.expect("text is typed");
}

#[then("the app should quit")]
async fn then_app_quits(world: &mut PostlineWorld) {
    assert!(world.app().should_quit());
}
