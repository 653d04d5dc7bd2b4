use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod block_canvas;

use block_canvas::BlockCanvas;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        BlockCanvas {}
    }
}
