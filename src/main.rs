use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod color;
    pub mod error;
    pub mod flags;
    pub mod keyframes;
    pub mod mapper;
}
mod scroll {
    pub mod progress;
    pub mod sink;
}
mod components {
    pub mod about_cards;
    pub mod header;
    pub mod page_shell;
}
mod pages {
    pub mod blog;
    pub mod hero;
    pub mod izrada_sajtova;
    pub mod kontakt;
    pub mod seo;
}

use motion::mapper::ScrollProgressMapper;
use pages::{
    blog::Blog,
    hero::{HeroContext, PinnedHero},
    izrada_sajtova::IzradaSajtova,
    kontakt::Kontakt,
    seo::Seo,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/izrada-sajtova")]
    IzradaSajtova,
    #[at("/seo")]
    Seo,
    #[at("/blog")]
    Blog,
    #[at("/kontakt")]
    Kontakt,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <PinnedHero /> }
        }
        Route::IzradaSajtova => {
            info!("Rendering Izrada sajtova page");
            html! { <IzradaSajtova /> }
        }
        Route::Seo => {
            info!("Rendering SEO page");
            html! { <Seo /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::Kontakt => {
            info!("Rendering Kontakt page");
            html! { <Kontakt /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub hero: HeroContext,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<HeroContext> context={props.hero.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<HeroContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if config::DIAGNOSTICS { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    // Calibration is authored with the build; a bad file should stop the page.
    let calibration = config::hero_calibration().expect("invalid hero calibration");
    let mapper = ScrollProgressMapper::new(&calibration).expect("invalid hero calibration");
    let hero = HeroContext {
        mapper: Rc::new(mapper),
        container_height_vh: calibration.container_height_vh,
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { hero }).render();
}
