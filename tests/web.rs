//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use accessibility_animations::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
    <header>
      <h1>SCM &amp; UI/UX Analysis</h1>
    </header>
    <section>
      <h2>Test Section</h2>
    </section>
    <button id="testButton">Test Button</button>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn reset_page(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn by_selector(selector: &str) -> Option<HtmlElement> {
    document()
        .query_selector(selector)
        .unwrap()
        .map(|el| el.dyn_into::<HtmlElement>().unwrap())
}

#[wasm_bindgen_test]
fn stats_are_fixed_before_and_after_init() {
    let before = get_animation_stats();
    assert_eq!(before.particle_count(), 50);
    assert_eq!(before.canvas_id(), "accessibility-canvas");
    assert!(before.animations_active());

    reset_page(PAGE);
    let handle = init_accessibility_animations().unwrap();
    let after = get_animation_stats();
    assert_eq!(after.particle_count(), 50);
    assert_eq!(after.canvas_id(), "accessibility-canvas");
    handle.stop();
}

#[wasm_bindgen_test]
fn background_canvas_is_fixed_behind_the_page() {
    reset_page(PAGE);
    let handle = init_accessibility_animations().unwrap();

    let canvas = by_selector("#accessibility-canvas").unwrap();
    assert_eq!(canvas.tag_name(), "CANVAS");
    let style = canvas.style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("z-index").unwrap(), "-1");
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");

    let body = document().body().unwrap();
    let first: HtmlElement = body.first_element_child().unwrap().dyn_into().unwrap();
    assert_eq!(first.id(), "accessibility-canvas");

    assert_eq!(handle.particle_count(), 50);
    assert!(handle.is_running());
    handle.stop();
    assert!(!handle.is_running());
}

#[wasm_bindgen_test]
fn particles_start_inside_the_viewport() {
    reset_page(PAGE);
    let handle = init_accessibility_animations().unwrap();
    let (width, height) = (handle.width(), handle.height());
    let positions = handle.particle_positions();
    assert_eq!(positions.len(), 100);
    for xy in positions.chunks(2) {
        assert!(xy[0] >= 0.0 && xy[0] <= width);
        assert!(xy[1] >= 0.0 && xy[1] <= height);
    }
    handle.stop();
}

#[wasm_bindgen_test]
fn seeded_config_is_reproducible() {
    reset_page(PAGE);
    let config = r#"{ "seed": 1234, "particle_count": 12 }"#;
    let a = init_accessibility_animations_with_config(config).unwrap();
    let b = init_accessibility_animations_with_config(config).unwrap();
    assert_eq!(a.particle_count(), 12);
    assert_eq!(a.particle_positions(), b.particle_positions());
    a.stop();
    b.stop();
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    reset_page(PAGE);
    assert!(init_accessibility_animations_with_config(r#"{ "link_distance": -5 }"#).is_err());
    assert!(init_accessibility_animations_with_config("not json").is_err());
}

#[wasm_bindgen_test]
fn resize_keeps_every_particle() {
    reset_page(PAGE);
    let handle = init_accessibility_animations().unwrap();
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();

    assert_eq!(handle.particle_count(), 50);
    assert_eq!(handle.width(), window.inner_width().unwrap().as_f64().unwrap());
    assert_eq!(handle.height(), window.inner_height().unwrap().as_f64().unwrap());
    handle.stop();
}

#[wasm_bindgen_test]
fn typewriter_clears_header_and_shows_cursor() {
    reset_page(PAGE);
    let id = init_typewriter_effect();
    assert!(id.is_some());

    let header = by_selector("header h1").unwrap();
    assert_eq!(header.text_content().unwrap(), "");
    assert!(header
        .style()
        .get_property_value("border-right")
        .unwrap()
        .contains("2px solid"));
    web_sys::window()
        .unwrap()
        .clear_interval_with_handle(id.unwrap());
}

#[wasm_bindgen_test]
fn typewriter_without_header_returns_nothing() {
    reset_page("<section></section>");
    assert_eq!(init_typewriter_effect(), None);
}

#[wasm_bindgen_test]
fn scroll_reveal_hides_sections_until_seen() {
    reset_page(PAGE);
    let observer = init_scroll_reveal().unwrap();
    let section = by_selector("section").unwrap();
    let style = section.style();
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(30px)");
    assert!(style.get_property_value("transition").unwrap().contains("opacity"));
    observer.disconnect();
}

#[wasm_bindgen_test]
fn buttons_get_ripple_container_styles() {
    reset_page(PAGE);
    assert_eq!(enhance_buttons().unwrap(), 1);
    let button = by_selector("#testButton").unwrap();
    assert_eq!(button.style().get_property_value("position").unwrap(), "relative");
    assert_eq!(button.style().get_property_value("overflow").unwrap(), "hidden");
}

#[wasm_bindgen_test]
fn ripple_keyframes_are_injected_once() {
    reset_page("");
    assert_eq!(enhance_buttons().unwrap(), 0);
    assert_eq!(enhance_buttons().unwrap(), 0);
    let styles = document().query_selector_all("#ripple-effect-style").unwrap();
    assert_eq!(styles.length(), 1);
    let style = by_selector("#ripple-effect-style").unwrap();
    assert!(style.text_content().unwrap().contains("ripple-effect"));
}

#[wasm_bindgen_test]
fn hover_spawns_a_ripple() {
    reset_page(PAGE);
    enhance_buttons().unwrap();
    let button = by_selector("#testButton").unwrap();
    let event = web_sys::MouseEvent::new("mouseenter").unwrap();
    button.dispatch_event(&event).unwrap();
    assert!(button.query_selector(".ripple-span").unwrap().is_some());
}

#[wasm_bindgen_test]
fn empty_page_degrades_gracefully() {
    reset_page("");
    assert_eq!(init_typewriter_effect(), None);
    let observer = init_scroll_reveal().unwrap();
    observer.disconnect();
    assert_eq!(enhance_buttons().unwrap(), 0);
}

#[wasm_bindgen_test]
fn init_all_wires_every_effect() {
    reset_page(PAGE);
    let handle = init_all_animations().unwrap();
    assert_eq!(handle.particle_count(), 50);
    assert!(handle.typewriter_interval().is_some());
    assert!(handle.scroll_observer().is_some());
    handle.stop();
}

#[wasm_bindgen_test]
async fn ripple_removes_itself_after_its_duration() {
    reset_page(PAGE);
    enhance_buttons().unwrap();
    let button = by_selector("#testButton").unwrap();
    let event = web_sys::MouseEvent::new("mouseenter").unwrap();
    button.dispatch_event(&event).unwrap();
    assert!(button.query_selector(".ripple-span").unwrap().is_some());

    sleep(700).await;
    assert!(button.query_selector(".ripple-span").unwrap().is_none());
}

#[wasm_bindgen_test]
fn page_effects_start_even_when_background_fails() {
    reset_page(PAGE);
    let result = init_all_animations_with_config(r#"{ "link_distance": -1 }"#);
    assert!(result.is_err());
    assert!(by_selector("#accessibility-canvas").is_none());

    let header = by_selector("header h1").unwrap();
    assert_eq!(header.text_content().unwrap(), "");
    assert!(header
        .style()
        .get_property_value("border-right")
        .unwrap()
        .contains("2px solid"));

    let section = by_selector("section").unwrap();
    assert_eq!(section.style().get_property_value("opacity").unwrap(), "0");

    let button = by_selector("#testButton").unwrap();
    assert_eq!(button.style().get_property_value("position").unwrap(), "relative");
}
