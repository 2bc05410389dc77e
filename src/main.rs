use george_portfolio::app::App;
use wasm_bindgen::JsValue;

fn inject_stylesheet() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("Failed to get document object")?;
    let head = document.head().ok_or("Document has no <head>")?;

    let style = document.create_element("style")?;
    style.set_inner_html(include_str!("../styles.css"));
    head.append_child(&style)?;
    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = inject_stylesheet() {
        gloo::console::error!("Failed to inject stylesheet", error);
    }

    yew::Renderer::<App>::new().render();
}
