use log::debug;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::content::SECTIONS;

/// Smooth-scrolls to the element with `id`, if the page has one.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(BrandBar)]
pub fn brand_bar() -> Html {
    html! {
        <div class="brand-bar">
            <h1>{config::BUSINESS_NAME}</h1>
            <p>{"Safety • Quality • Trust"}</p>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
            })
        }
    };

    let links = |class: &'static str| -> Html {
        SECTIONS
            .iter()
            .map(|section| {
                html! {
                    <button key={section.id} class={class} onclick={go_to(section.id)}>
                        {section.label}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .brand-bar {
                        background: #eab308;
                        padding: 0.75rem 1rem;
                        text-align: center;
                        position: relative;
                        z-index: 20;
                    }
                    .brand-bar h1 {
                        margin: 0;
                        font-size: 1.5rem;
                        font-weight: 800;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #000;
                    }
                    .brand-bar p {
                        margin: 0.25rem 0 0;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        background: #111827;
                        color: #fff;
                        border-bottom: 1px solid #eab308;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        font-weight: 700;
                        font-size: 1.25rem;
                        background: none;
                        border: none;
                        color: inherit;
                    }
                    .nav-logo i {
                        background: #eab308;
                        color: #000;
                        border-radius: 9999px;
                        padding: 0.4rem 0.5rem;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-link {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 0.875rem;
                        font-weight: 500;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.375rem;
                        transition: all 0.2s;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #facc15;
                        background: #1f2937;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #d1d5db;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                        background: #1f2937;
                        border-top: 1px solid #374151;
                        padding: 0.5rem;
                    }
                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        font-size: 1rem;
                        color: #d1d5db;
                    }
                    @media (max-width: 767px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to("home")}>
                    <i class="fa-solid fa-bolt"></i>
                    <span>{"RES"}</span>
                </button>
                <div class="nav-links">
                    { links("nav-link") }
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Open menu">
                    <i class={if *menu_open { "fa-solid fa-xmark" } else { "fa-solid fa-bars" }}></i>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { links("mobile-link") }
            </div>
        </nav>
    }
}
