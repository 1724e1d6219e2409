use yew::prelude::*;

use crate::components::header::SiteHeader;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Header plus the black content column every inner page uses.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div>
            <SiteHeader />
            <div class="page-shell">
                <div class="page-shell-content">
                    <h1>{props.title.clone()}</h1>
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .page-shell {
                    padding: 100px 24px;
                    background: #000;
                    color: #fff;
                    min-height: 100vh;
                }
                .page-shell-content {
                    max-width: 1000px;
                    margin: 0 auto;
                }
                "#}
            </style>
        </div>
    }
}
