//! Root component: session context plus the single greeting route.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Footer;
use crate::pages::HomePage;
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="main">
            <div>
                <h1 class="title">"404"</h1>
                <div class="description">"La página que buscas no existe."</div>
                <A href="/">
                    <span class="button">"Volver al inicio"</span>
                </A>
            </div>
        </div>
    }
}
