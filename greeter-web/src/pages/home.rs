//! Greeting Page - connects the wallet on load and greets the account

use leptos::prelude::*;

use crate::state::session::use_session_context;
use crate::utils::constants::{
    COLLECTION_IMAGE, COLLECTION_NAME, CONNECTED_LABEL, CONNECT_LABEL, DESCRIPTION,
};
use crate::utils::format::greeting;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    // Runs on mount and again whenever the session is seen disconnected
    Effect::new(move || {
        if !session.is_connected() {
            session.initialize();
        }
    });

    view! {
        <div class="main">
            <div>
                <h1 class="title">{move || greeting(&session.identity())}</h1>
                <div class="description">{DESCRIPTION}</div>
                <Show
                    when=move || !session.is_connected()
                    fallback=|| view! { <div class="connected">{CONNECTED_LABEL}</div> }
                >
                    <button
                        class="button"
                        disabled=move || session.is_connecting()
                        on:click=move |_| session.initialize()
                    >
                        {CONNECT_LABEL}
                    </button>
                </Show>
            </div>
            <div>
                <img class="image" src=COLLECTION_IMAGE alt=COLLECTION_NAME/>
            </div>
        </div>
    }
}
