use yew::prelude::*;

use crate::components::page_shell::PageShell;

#[function_component(Seo)]
pub fn seo() -> Html {
    html! {
        <PageShell title="SEO">
            <p>{"Stranica za SEO usluge..."}</p>
        </PageShell>
    }
}
