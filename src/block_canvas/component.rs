use super::config::CanvasConfig;
use super::connector::Elbow;
use super::drag::{release_when_idle, DragState, PointerSubscription};
use super::geometry::{Point, Viewport};
use super::scene::{BlockId, SceneModel};
use super::viewport::viewport_or;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[component]
pub fn BlockCanvas() -> Element {
    let config = use_context_provider(CanvasConfig::load);
    let (fallback, padding) = (config.fallback_viewport, config.padding);
    let scene = use_context_provider(|| Signal::new(SceneModel::new(viewport_or(fallback), padding)));

    let model = scene.read();
    let blocks: Vec<_> = model
        .blocks()
        .iter()
        .map(|b| (b.id, b.position, model.parent_position(b.id)))
        .collect();

    rsx! {
        div {
            class: "block-canvas",
            style: "width: 100vw; height: 100vh; position: relative; overflow: hidden;",
            for (id, position, parent_position) in blocks {
                BlockView { key: "{id}", id, position, parent_position }
            }
        }
    }
}

#[component]
fn BlockView(id: BlockId, position: Point, #[props(!optional)] parent_position: Option<Point>) -> Element {
    let config = use_context::<CanvasConfig>();
    let mut scene = use_context::<Signal<SceneModel>>();
    let mut pos = use_signal(|| position);
    let mut drag = use_signal(DragState::default);
    // Window listeners for the current drag; torn down with the view.
    let mut pointer = use_signal(|| None::<PointerSubscription>);

    // Runs after mouseup has returned, never from inside the listener being dropped.
    use_effect(move || {
        let state = *drag.read();
        if !state.is_dragging() && pointer.peek().is_some() {
            release_when_idle(state, &mut pointer.write());
        }
    });

    let fallback = config.fallback_viewport;
    let size = config.block_size;
    let current = pos();
    let cursor = if drag.read().is_dragging() { "grabbing" } else { "grab" };
    let connector = parent_position.map(|parent| Elbow::between(parent, current, size).to_svg_path());

    rsx! {
        {connector.map(|d| rsx! {
            svg {
                style: "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;",
                path {
                    d: "{d}",
                    stroke: "{config.connector_stroke}",
                    stroke_dasharray: "{config.connector_dash}",
                    fill: "none",
                }
            }
        })}

        div {
            class: "block",
            style: "
                position: absolute;
                left: {current.x}px;
                top: {current.y}px;
                width: {size}px;
                height: {size}px;
                background-color: {config.block_color};
                cursor: {cursor};
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 10px;
                user-select: none;
                z-index: 1;
            ",
            onmousedown: move |e| {
                let c = e.client_coordinates();
                drag.write().press(Point::new(c.x, c.y), pos());
                let subscription = PointerSubscription::acquire(
                    move |at| {
                        let next = drag.peek().motion(at);
                        if let Some(next) = next {
                            pos.set(next);
                            scene.write().update_block_position(id, next);
                        }
                    },
                    move || {
                        drag.write().release();
                    },
                );
                match subscription {
                    Some(subscription) => pointer.set(Some(subscription)),
                    None => {
                        warn!("block {id} cannot be dragged: no window to listen on");
                        drag.write().release();
                    }
                }
            },

            div { "{id}" }
            button {
                style: "padding: 2px 30px; margin: 5px; cursor: pointer; background-color: {config.button_color};",
                onmousedown: move |e| e.stop_propagation(),
                onclick: move |_| add_child(scene, id, pos(), fallback),
                "+"
            }
        }
    }
}

fn add_child(mut scene: Signal<SceneModel>, parent: BlockId, hint: Point, fallback: Viewport) {
    let viewport = viewport_or(fallback);
    if let Err(err) = scene.write().create_child_block(parent, hint, viewport) {
        warn!("{err}");
    }
}
