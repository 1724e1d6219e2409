use yew::prelude::*;

use crate::components::page_shell::PageShell;

#[function_component(Kontakt)]
pub fn kontakt() -> Html {
    html! {
        <PageShell title="Kontakt">
            <p>{"Kontaktirajte nas..."}</p>
        </PageShell>
    }
}
