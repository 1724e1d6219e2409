use std::rc::Rc;

use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::about_cards::AboutCards;
use crate::components::header::SiteHeader;
use crate::config::DIAGNOSTICS;
use crate::motion::mapper::{ScrollProgressMapper, VisualState, BACKGROUND_PROPERTY};
use crate::scroll::progress::use_scroll_progress;
use crate::scroll::sink::ElementStyleSink;

/// Validated hero settings handed down from `main`.
#[derive(Clone, PartialEq)]
pub struct HeroContext {
    pub mapper: Rc<ScrollProgressMapper>,
    pub container_height_vh: u32,
}

#[function_component(PinnedHero)]
pub fn pinned_hero() -> Html {
    match use_context::<HeroContext>() {
        Some(hero) => html! {
            <HeroScene mapper={hero.mapper} container_height_vh={hero.container_height_vh} />
        },
        None => {
            log::error!("PinnedHero rendered without a HeroContext");
            html! { <SiteHeader /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroSceneProps {
    pub mapper: Rc<ScrollProgressMapper>,
    pub container_height_vh: u32,
}

#[function_component(HeroScene)]
pub fn hero_scene(props: &HeroSceneProps) -> Html {
    let container_ref = use_node_ref();
    let backdrop_ref = use_node_ref();
    // Each mounted hero owns its latch.
    let mapper = use_mut_ref({
        let mapper = props.mapper.clone();
        move || (*mapper).clone()
    });
    let visual = use_state_eq({
        let mapper = props.mapper.clone();
        move || mapper.resting_state()
    });

    let on_sample = {
        let mapper = mapper.clone();
        let visual = visual.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |sample: Option<f64>| {
            let next: VisualState = match sample {
                Some(p) => {
                    let mut mapper = mapper.borrow_mut();
                    match backdrop_ref.cast::<HtmlElement>() {
                        Some(backdrop) => mapper.map_into(p, &ElementStyleSink::new(backdrop)),
                        None => mapper.map(p),
                    }
                }
                None => mapper.borrow().resting_state(),
            };
            if DIAGNOSTICS {
                debug!(
                    "hero progress={:.3} bg={} hero_opacity={:.3} cards_opacity={:.3} cards={} pin={:?}",
                    next.progress,
                    next.background,
                    next.hero_opacity,
                    next.cards_opacity,
                    next.cards_visible,
                    next.pin
                );
            }
            visual.set(next);
        })
    };
    use_scroll_progress(container_ref.clone(), props.mapper.span(), on_sample);

    let container_style = format!(
        "height: {}vh; position: relative;",
        props.container_height_vh
    );
    // Written once; later updates go through the style sink.
    let backdrop_style = format!(
        "{BACKGROUND_PROPERTY}: {}; background-color: var({BACKGROUND_PROPERTY});",
        props.mapper.initial_background()
    );

    html! {
        <div class="pinned-hero" ref={container_ref} style={container_style}>
            <div class="hero-backdrop" ref={backdrop_ref} style={backdrop_style} aria-hidden="true"></div>

            <SiteHeader logo_color={visual.logo_color.to_string()} />

            <div class="pin-wrap" style={visual.pin_style()}>
                <section class="hero fullscreen">
                    <div class="hero-inner container">
                        <div class="hero-center" style={visual.hero_style()}>
                            <h1 class="hero-head">
                                {"Vaše rešenje "}<strong class="em">{"SEO"}</strong>{" problema"}
                            </h1>
                            <p class="subhead">
                                {"Stručna SEO optimizacija, moderni web sajtovi i jasno dizajnirana komunikacija."}
                            </p>
                        </div>
                    </div>
                </section>
                <div class="cards-overlay" style={visual.cards_style()}>
                    <AboutCards />
                </div>
            </div>

            <section class="about container" style={format!("display: {};", visual.section_display())}>
                <AboutCards />
            </section>

            <style>
                {r#"
                .hero-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                }
                .pin-wrap {
                    top: 0;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero.fullscreen {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                }
                .hero-center {
                    text-align: center;
                    transform-origin: center;
                }
                .hero-head {
                    font-size: clamp(2.5rem, 8vw, 5.5rem);
                    line-height: 1.05;
                    margin: 0 0 18px;
                }
                .hero-head .em {
                    background: #FDCA40;
                    padding: 0 0.15em;
                }
                .subhead {
                    font-size: 1.2rem;
                    color: #333;
                }
                .cards-overlay {
                    position: absolute;
                    inset: 0;
                    align-items: center;
                    justify-content: center;
                    z-index: 250;
                    padding: 0 24px;
                }
                .about {
                    padding: 100px 24px;
                }
                "#}
            </style>
        </div>
    }
}
