use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session::Session;
use crate::utils::INSTITUTION_NAME;

const LINKS: [(Route, &str, &str); 7] = [
    (Route::Dashboard, "📊", "Dashboard"),
    (Route::Attendance, "🗓️", "Attendance Management"),
    (Route::Locations, "📍", "Attendance Location"),
    (Route::Students, "🎓", "Student Management"),
    (Route::Announcements, "📢", "Announcements"),
    (Route::DeviceChange, "📱", "Device Change"),
    (Route::Admins, "👨🏻‍💻", "Admin"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let navigator = use_navigator().expect("navigator missing");

    let on_logout = Callback::from(move |_: MouseEvent| {
        log::info!("👋 Logging out");
        session.clear_token();
        navigator.push(&Route::Login);
    });

    html! {
        <div class="w-64 min-h-screen p-6 border-r border-gray-200 flex flex-col justify-between shadow-lg">
            <div>
                <div class="flex items-center space-x-4 mb-8">
                    <div>
                        <p class="text-sm font-semibold text-gray-800">{ INSTITUTION_NAME }</p>
                    </div>
                </div>

                <nav>
                    <ul class="space-y-2">
                        {
                            for LINKS.iter().map(|(route, icon, label)| html! {
                                <li key={*label}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes="flex items-center p-3 text-gray-700 hover:bg-gray-100 rounded-lg transition-all duration-200"
                                    >
                                        <span class="mr-3">{ *icon }</span>
                                        <span class="text-sm font-medium">{ *label }</span>
                                    </Link<Route>>
                                </li>
                            })
                        }
                    </ul>
                </nav>
            </div>

            <button
                onclick={on_logout}
                class="flex items-center justify-center p-3 text-sm font-medium text-gray-700 hover:bg-red-50 hover:text-red-600 rounded-lg transition-all duration-200"
            >
                <span class="mr-2">{ "🚪" }</span>
                { "Logout" }
            </button>
        </div>
    }
}
