use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// CSS color for the logo text and its underline.
    #[prop_or(AttrValue::Static("#000000"))]
    pub logo_color: AttrValue,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let logo_style = format!(
        "color: {0}; text-decoration: underline; text-decoration-color: {0}; text-decoration-thickness: 2px;",
        props.logo_color
    );
    let sub_style = format!("color: {};", props.logo_color);

    html! {
        <header class="site-header">
            <div class="container">
                <Link<Route> to={Route::Home} classes="logo">
                    <span class="logo-mark" aria-hidden="true">
                        <svg width="40" height="40" viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg" role="img">
                            <circle cx="20" cy="20" r="18" fill="#FDCA40" stroke="#000" stroke-width="2" />
                        </svg>
                    </span>
                    <span class="logo-text" style={logo_style}>
                        {"SEO"}<br/>
                        <span class="logo-sub" style={sub_style}>{"Mačak."}</span>
                    </span>
                </Link<Route>>
                <nav class="nav-pill">
                    <Link<Route> to={Route::Home}>{"Početna"}</Link<Route>>
                    <Link<Route> to={Route::IzradaSajtova}>{"Izrada sajtova"}</Link<Route>>
                    <Link<Route> to={Route::Seo}>{"SEO"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                    <Link<Route> to={Route::Kontakt} classes="btn nav-cta">{"Kontakt"}</Link<Route>>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 500;
                    padding: 18px 0;
                }
                .site-header .container {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo {
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    text-decoration: none;
                }
                .logo-text {
                    font-weight: 800;
                    line-height: 1;
                    font-size: 1.1rem;
                }
                .logo-sub {
                    font-weight: 600;
                }
                .nav-pill {
                    display: flex;
                    gap: 6px;
                    padding: 6px;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.9);
                    border: 1px solid rgba(0, 0, 0, 0.1);
                }
                .nav-pill a {
                    color: #000;
                    text-decoration: none;
                    padding: 8px 14px;
                    border-radius: 999px;
                    font-size: 0.95rem;
                }
                .nav-pill a:hover {
                    background: rgba(0, 0, 0, 0.06);
                }
                .nav-pill .nav-cta {
                    background: #000;
                    color: #fff;
                }
                @media (max-width: 720px) {
                    .nav-pill a:not(.nav-cta) {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
