//! Root component: switches between the game and the playground.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::game_host::GameHost;
use crate::components::playground::Playground;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Game,
    Playground,
}

#[component]
pub fn App() -> impl IntoView {
    let screen = RwSignal::new(Screen::Game);

    view! {
        <div class="app">
            <nav class="app__nav">
                <button
                    class:active=move || screen.get() == Screen::Game
                    on:click=move |_| screen.set(Screen::Game)
                >
                    "game"
                </button>
                <button
                    class:active=move || screen.get() == Screen::Playground
                    on:click=move |_| screen.set(Screen::Playground)
                >
                    "playground"
                </button>
            </nav>
            {move || match screen.get() {
                Screen::Game => view! { <GameHost /> }.into_any(),
                Screen::Playground => view! { <Playground /> }.into_any(),
            }}
        </div>
    }
}
