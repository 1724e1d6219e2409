use yew::prelude::*;

const INTRO: [(&str, &str); 3] = [
    (
        "left",
        "Ja sam Marko, developer i SEO strateg. SEO Mačak je nastao iz ideje da klijentima pružim direktnu, zanatsku posvećenost kakvu agencije često gube, ali sa tehničkom snagom koja može da iznese i najkompleksnije projekte.",
    ),
    (
        "right",
        "Kako radim? Svaki projekat vodim lično – ja sam vaša prva i glavna tačka kontakta. Ipak, niko ne može biti najbolji u svemu. Zato, kada projekat zahteva veći obim posla ili specifične dodatne ekspertize, u priču uključujem svoj provereni tim saradnika i partnerskih firmi.",
    ),
    (
        "left",
        "To znači da dobijate agencijsku snagu i sigurnost, ali uz personalizovanu pažnju jednog profesionalca koji bdi nad svakim detaljom vašeg sajta.",
    ),
];

/// "Ko je SEO Mačak?" introduction, shared by the hero overlay and the
/// section that follows the pinned hero.
#[function_component(AboutCards)]
pub fn about_cards() -> Html {
    html! {
        <div class="about-cards">
            <h2 class="section-title">{"Ko je SEO Mačak?"}</h2>
            <div class="cards">
                { for INTRO.iter().map(|(side, text)| html! {
                    <article class={classes!("card", *side)}>
                        <p>{*text}</p>
                    </article>
                }) }
            </div>
            <style>
                {r#"
                .about-cards {
                    width: 100%;
                    max-width: 1000px;
                    margin: 0 auto;
                }
                .about-cards .section-title {
                    color: #fff;
                    text-align: center;
                    margin-bottom: 20px;
                }
                .about-cards .cards {
                    display: flex;
                    flex-direction: column;
                    gap: 22px;
                }
                .about-cards .card {
                    max-width: 640px;
                    padding: 24px 28px;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                }
                .about-cards .card.right {
                    align-self: flex-end;
                }
                .about-cards .card p {
                    color: #fff;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
