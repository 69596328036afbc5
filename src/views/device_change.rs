use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::Spinner;
use crate::hooks::{use_collection, FetchState};
use crate::models::{DeviceChangeRequest, RequestStatus};
use crate::services::ApiClient;
use crate::session::Session;

#[function_component(DeviceChangeView)]
pub fn device_change_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let api = ApiClient::new(session);

    let requests = use_collection::<DeviceChangeRequest>();
    let error_message = use_state(String::new);
    // Id of the request whose update call is in flight, to disable its buttons.
    let updating: UseStateHandle<Option<String>> = use_state(|| None);

    let reload = {
        let requests = requests.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            requests.run(async move { api.list_device_requests().await });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let set_status = {
        let api = api.clone();
        let error_message = error_message.clone();
        let updating = updating.clone();
        let reload = reload.clone();
        Callback::from(move |(id, status): (String, RequestStatus)| {
            let api = api.clone();
            let error_message = error_message.clone();
            let updating = updating.clone();
            let reload = reload.clone();
            updating.set(Some(id.clone()));
            spawn_local(async move {
                match api.set_device_request_status(&id, status).await {
                    Ok(()) => {
                        error_message.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to update device change request: {}", e);
                        error_message
                            .set("Failed to update the request. Please try again.".to_string());
                    }
                }
                updating.set(None);
            });
        })
    };

    let body = match requests.state() {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Error(_) => html! {
            <p class="text-red-500 text-center">{ "Failed to fetch device change requests. Please try again." }</p>
        },
        FetchState::Loaded(items) if items.is_empty() => html! {
            <p class="text-gray-600 text-center">{ "No device change requests." }</p>
        },
        FetchState::Loaded(items) => render_table(items, &set_status, (*updating).clone()),
    };

    html! {
        <div class="p-5 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold mb-6 text-center text-gray-800">{ "Device Change Requests" }</h2>

            if !error_message.is_empty() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    { (*error_message).clone() }
                </div>
            }

            { body }
        </div>
    }
}

fn status_badge(status: RequestStatus) -> Html {
    let class = match status {
        RequestStatus::Pending => {
            "px-2 py-1 rounded-full text-xs font-semibold bg-yellow-100 text-yellow-800"
        }
        RequestStatus::Approved => {
            "px-2 py-1 rounded-full text-xs font-semibold bg-green-100 text-green-800"
        }
        RequestStatus::Rejected => {
            "px-2 py-1 rounded-full text-xs font-semibold bg-red-100 text-red-800"
        }
    };
    html! { <span {class}>{ status.as_str() }</span> }
}

fn render_table(
    items: &[DeviceChangeRequest],
    set_status: &Callback<(String, RequestStatus)>,
    updating: Option<String>,
) -> Html {
    html! {
        <div class="bg-white shadow-lg rounded-lg overflow-hidden">
            <table class="w-full text-left">
                <thead>
                    <tr class="bg-gray-100">
                        { for ["Student", "Email", "Department", "Year", "Reason", "Status", "Actions"].iter().map(|h| html! {
                            <th class="p-4">{ *h }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for items.iter().map(|request| {
                            let busy = updating.as_deref() == Some(request.id.as_str());
                            let approve = {
                                let set_status = set_status.clone();
                                let id = request.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    set_status.emit((id.clone(), RequestStatus::Approved));
                                })
                            };
                            let reject = {
                                let set_status = set_status.clone();
                                let id = request.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    set_status.emit((id.clone(), RequestStatus::Rejected));
                                })
                            };
                            html! {
                                <tr key={request.id.clone()} class="hover:bg-gray-50">
                                    <td class="p-4">{ &request.student.name }</td>
                                    <td class="p-4">{ &request.student.email }</td>
                                    <td class="p-4">{ request.student.department.as_str() }</td>
                                    <td class="p-4">{ request.student.year }</td>
                                    <td class="p-4">{ &request.reason }</td>
                                    <td class="p-4">{ status_badge(request.status) }</td>
                                    <td class="p-4">
                                        if request.status.is_pending() {
                                            <div class="flex space-x-2">
                                                <button
                                                    onclick={approve}
                                                    disabled={busy}
                                                    class="bg-green-500 hover:bg-green-600 text-white px-3 py-1 rounded transition disabled:bg-gray-400"
                                                >
                                                    { "Approve" }
                                                </button>
                                                <button
                                                    onclick={reject}
                                                    disabled={busy}
                                                    class="bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded transition disabled:bg-gray-400"
                                                >
                                                    { "Reject" }
                                                </button>
                                            </div>
                                        } else {
                                            <span class="text-gray-400 text-sm">{ "Resolved" }</span>
                                        }
                                    </td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}
