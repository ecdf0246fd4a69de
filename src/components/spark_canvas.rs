use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::sparks::{BrowserHost, SparkAnimator, SparkParams};

#[function_component(SparkCanvas)]
pub fn spark_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let host = BrowserHost::new(canvas_ref);
                let animator = match SparkAnimator::activate(
                    &host,
                    SparkParams::default(),
                    StdRng::from_entropy(),
                ) {
                    Ok(animator) => {
                        info!("Spark cursor enabled");
                        Some(animator)
                    }
                    Err(err) => {
                        debug!("Spark cursor disabled: {}", err);
                        None
                    }
                };
                move || drop(animator)
            },
            (), // Mount once, tear down on unmount
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .spark-canvas {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                        z-index: 50;
                    }
                    @media (max-width: 767px) {
                        .spark-canvas {
                            display: none;
                        }
                    }
                "#}
            </style>
            <canvas ref={canvas_ref} class="spark-canvas" />
        </>
    }
}
