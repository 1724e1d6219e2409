use yew::prelude::*;

use crate::components::page_shell::PageShell;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <PageShell title="Blog">
            <p>{"Blog stranica..."}</p>
        </PageShell>
    }
}
