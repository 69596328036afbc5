use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::Spinner;
use crate::models::DashboardData;
use crate::services::ApiClient;
use crate::session::Session;

enum DashboardState {
    Loading,
    Loaded(Box<DashboardData>),
    Error(String),
}

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let state = use_state(|| DashboardState::Loading);

    {
        let state = state.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new(session);
                match api.dashboard().await {
                    Ok(data) => state.set(DashboardState::Loaded(Box::new(data))),
                    Err(e) => {
                        log::error!("❌ Failed to load dashboard: {}", e);
                        state.set(DashboardState::Error(
                            "Failed to load dashboard data".to_string(),
                        ));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*state {
        DashboardState::Loading => html! { <Spinner /> },
        DashboardState::Error(message) => html! { <p class="p-5 text-red-500">{ message }</p> },
        DashboardState::Loaded(data) => render_dashboard(data),
    };

    html! {
        <div class="p-6 w-full">
            <h1 class="text-3xl font-semibold mb-6 text-gray-800">{ "Dashboard" }</h1>
            { body }
        </div>
    }
}

fn render_dashboard(data: &DashboardData) -> Html {
    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300">
                    <h2 class="text-xl font-semibold text-gray-700 mb-2">{ "Total Students" }</h2>
                    <p class="text-3xl font-bold text-blue-600">{ data.total_students }</p>
                </div>

                <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300">
                    <h2 class="text-xl font-semibold text-gray-700 mb-2">{ "Total Attendance Locations" }</h2>
                    <p class="text-3xl font-bold text-green-600">{ data.total_attendance_locations }</p>
                </div>

                <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300">
                    <h2 class="text-xl font-semibold text-gray-700 mb-2">{ "Today's Attendance" }</h2>
                    <p class="text-3xl font-bold text-indigo-600">{ data.todays_attendance }</p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-xl font-semibold text-gray-700 mb-4">{ "Students by Year" }</h2>
                    <ul class="space-y-2">
                        {
                            for data.students_by_year.iter().map(|item| html! {
                                <li key={item.year.to_string()} class="text-gray-700">
                                    <span class="font-medium">{ format!("Year {}:", item.year) }</span>
                                    { " " }
                                    <span class="font-bold text-blue-600">{ item.count }</span>
                                    { " students" }
                                </li>
                            })
                        }
                    </ul>
                </div>

                <div class="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-xl font-semibold text-gray-700 mb-4">{ "Students by Department" }</h2>
                    <ul class="space-y-2">
                        {
                            for data.students_by_department.iter().map(|item| html! {
                                <li key={item.department.clone()} class="text-gray-700">
                                    <span class="font-medium">{ format!("{}:", item.department) }</span>
                                    { " " }
                                    <span class="font-bold text-green-600">{ item.count }</span>
                                    { " students" }
                                </li>
                            })
                        }
                    </ul>
                </div>
            </div>
        </>
    }
}
