use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::ApiClient;
use crate::session::Session;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let navigator = use_navigator().expect("navigator missing");

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<web_sys::HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<web_sys::HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let user = (*username).clone();
            let pass = (*password).clone();
            if user.trim().is_empty() || pass.trim().is_empty() {
                error.set("Username and password are required.".to_string());
                return;
            }

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);

            spawn_local(async move {
                let api = ApiClient::new(session.clone());
                match api.login(&user, &pass).await {
                    Ok(response) => {
                        session.set_token(&response.token);
                        log::info!("✅ Login successful");
                        navigator.push(&Route::Dashboard);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set("Invalid username or password. Please try again.".to_string());
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-gray-200">
            <div class="bg-white p-8 rounded-2xl shadow-2xl w-96">
                <h2 class="text-3xl font-semibold text-center text-gray-800 mb-6">{ "Admin Login" }</h2>

                if !error.is_empty() {
                    <p class="text-red-500 text-center mb-4">{ (*error).clone() }</p>
                }

                <form class="space-y-4" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Username"
                        value={(*username).clone()}
                        oninput={on_username}
                        class="w-full border border-gray-300 p-3 rounded-lg focus:ring-2 focus:ring-blue-400 focus:border-blue-400 outline-none"
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password}
                        class="w-full border border-gray-300 p-3 rounded-lg focus:ring-2 focus:ring-blue-400 focus:border-blue-400 outline-none"
                    />
                    <button
                        type="submit"
                        disabled={*busy}
                        class="w-full bg-blue-600 text-white py-3 rounded-lg hover:bg-blue-700 transition duration-300 font-medium disabled:bg-gray-400"
                    >
                        { if *busy { "Signing in..." } else { "Login" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
