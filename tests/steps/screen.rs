//! Then steps about regions, forms and what the screen shows

use crate::common::world::PostlineWorld;
use crossterm::style::Color;
use cucumber::then;

#[then(expr = "the post list should be {string}")]
async fn then_post_list_is(world: &mut PostlineWorld, expected: String) {
    let titles: Vec<&str> = world
        .app()
        .view_model()
        .list()
        .entries()
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(titles.join(", "), expected);
}

#[then("the post list should be empty")]
async fn then_post_list_empty(world: &mut PostlineWorld) {
    assert!(world.app().view_model().list().entries().is_empty());
}

#[then(expr = "the detail region should show post {string}")]
async fn then_detail_shows(world: &mut PostlineWorld, title: String) {
    let post = world
        .app()
        .view_model()
        .detail()
        .current_post()
        .expect("a post in the detail region");
    assert_eq!(post.title, title);
}

#[then("the detail region should show no post")]
async fn then_detail_shows_no_post(world: &mut PostlineWorld) {
    assert!(world.app().view_model().current_detail_id().is_none());
}

#[then(expr = "the screen should show {string}")]
async fn then_screen_shows(world: &mut PostlineWorld, text: String) {
    assert!(
        world.screen().contains(&text),
        "{text:?} not on screen:\n{}",
        world.screen().screen_text()
    );
}

#[then(expr = "the screen should not show {string}")]
async fn then_screen_does_not_show(world: &mut PostlineWorld, text: String) {
    assert!(
        !world.screen().contains(&text),
        "{text:?} unexpectedly on screen:\n{}",
        world.screen().screen_text()
    );
}

#[then(expr = "{string} should be shown in red")]
async fn then_shown_in_red(world: &mut PostlineWorld, text: String) {
    assert_eq!(world.screen().color_of(&text), Some(Some(Color::Red)));
}

#[then(expr = "{string} should be shown without color")]
async fn then_shown_plain(world: &mut PostlineWorld, text: String) {
    assert_eq!(world.screen().color_of(&text), Some(None));
}

#[then(expr = "the status line should show {string}")]
async fn then_status_line_shows(world: &mut PostlineWorld, text: String) {
    let status_row = world.screen().row_text(crate::common::world::SCREEN_SIZE.1 - 1);
    assert!(status_row.contains(&text), "status line was {status_row:?}");
}

#[then(expr = "the edit form should be open for post {string}")]
async fn then_edit_form_open(world: &mut PostlineWorld, id: String) {
    let editing = world
        .app()
        .view_model()
        .editing_id()
        .map(ToString::to_string);
    assert_eq!(editing.as_deref(), Some(id.as_str()));
}

#[then("the edit form should be closed")]
async fn then_edit_form_closed(world: &mut PostlineWorld) {
    assert!(world.app().view_model().editing_id().is_none());
}

#[then("the new-post form should be empty")]
async fn then_new_post_form_empty(world: &mut PostlineWorld) {
    use postline::events::NewPostField;
    let form = world.app().view_model().new_post_form();
    for field in NewPostField::ALL {
        assert_eq!(form.field(field).text(), "", "{} not cleared", field.label());
    }
}

#[then(expr = "the new-post title should be {string}")]
async fn then_new_post_title(world: &mut PostlineWorld, title: String) {
    use postline::events::NewPostField;
    let form = world.app().view_model().new_post_form();
    assert_eq!(form.field(NewPostField::Title).text(), title);
}
