use yew::prelude::*;

use crate::components::page_shell::PageShell;

#[function_component(IzradaSajtova)]
pub fn izrada_sajtova() -> Html {
    html! {
        <PageShell title="Izrada Sajtova">
            <p>{"Stranica za izradu sajtova..."}</p>
        </PageShell>
    }
}
