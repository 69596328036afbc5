use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{ConfirmDialog, Modal, Spinner};
use crate::hooks::{use_collection, FetchState};
use crate::models::{AttendanceLocation, Department, GeoPoint, LocationPayload, YEAR_OPTIONS};
use crate::services::ApiClient;
use crate::session::Session;
use crate::validate::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationForm {
    pub department: String,
    pub year: String,
    pub latitude: String,
    pub longitude: String,
}

impl LocationForm {
    pub fn from_location(location: &AttendanceLocation) -> Self {
        Self {
            department: location.department.as_str().to_string(),
            year: location.year.to_string(),
            latitude: location.geo_location.latitude().to_string(),
            longitude: location.geo_location.longitude().to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require("department", &self.department, "Department");
        errors.require("year", &self.year, "Year");
        errors.require("latitude", &self.latitude, "Latitude");
        errors.require("longitude", &self.longitude, "Longitude");

        if !self.latitude.trim().is_empty() && self.latitude.trim().parse::<f64>().is_err() {
            errors.insert("latitude", "Latitude must be a number");
        }
        if !self.longitude.trim().is_empty() && self.longitude.trim().parse::<f64>().is_err() {
            errors.insert("longitude", "Longitude must be a number");
        }
        errors
    }

    pub fn payload(&self) -> Option<LocationPayload> {
        let latitude = self.latitude.trim().parse::<f64>().ok()?;
        let longitude = self.longitude.trim().parse::<f64>().ok()?;
        Some(LocationPayload {
            department: self.department.parse().ok()?,
            year: self.year.parse().ok()?,
            geo_location: GeoPoint::new(longitude, latitude),
        })
    }
}

#[function_component(LocationsView)]
pub fn locations_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let api = ApiClient::new(session);

    let locations = use_collection::<AttendanceLocation>();
    let modal_open = use_state(|| false);
    let editing: UseStateHandle<Option<AttendanceLocation>> = use_state(|| None);
    let form = use_state(LocationForm::default);
    let errors = use_state(FieldErrors::default);
    let delete_target: UseStateHandle<Option<AttendanceLocation>> = use_state(|| None);
    let error_message = use_state(String::new);

    let reload = {
        let locations = locations.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            locations.run(async move { api.list_locations().await });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let open_add_modal = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form.set(LocationForm::default());
            errors.set(FieldErrors::default());
            modal_open.set(true);
        })
    };

    let open_edit_modal = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |location: AttendanceLocation| {
            form.set(LocationForm::from_location(&location));
            editing.set(Some(location));
            errors.set(FieldErrors::default());
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(false);
            editing.set(None);
        })
    };

    let on_submit = {
        let api = api.clone();
        let form = form.clone();
        let errors = errors.clone();
        let editing = editing.clone();
        let modal_open = modal_open.clone();
        let error_message = error_message.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            let field_errors = form.validate();
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            let payload = match form.payload() {
                Some(p) => p,
                None => return,
            };

            let api = api.clone();
            let form = form.clone();
            let errors = errors.clone();
            let editing = editing.clone();
            let modal_open = modal_open.clone();
            let error_message = error_message.clone();
            let reload = reload.clone();
            let edit_id = (*editing).as_ref().map(|l| l.id.clone());

            spawn_local(async move {
                let result = match edit_id {
                    Some(id) => api.update_location(&id, &payload).await,
                    None => api.create_location(&payload).await,
                };
                match result {
                    Ok(()) => {
                        modal_open.set(false);
                        editing.set(None);
                        form.set(LocationForm::default());
                        errors.set(FieldErrors::default());
                        error_message.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to save location: {}", e);
                        error_message.set("Failed to save location. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let request_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |location: AttendanceLocation| delete_target.set(Some(location)))
    };
    let cancel_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |_: ()| delete_target.set(None))
    };
    let confirm_delete = {
        let api = api.clone();
        let delete_target = delete_target.clone();
        let error_message = error_message.clone();
        let reload = reload.clone();
        Callback::from(move |_: ()| {
            let Some(location) = (*delete_target).clone() else {
                return;
            };
            let api = api.clone();
            let delete_target = delete_target.clone();
            let error_message = error_message.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_location(&location.id).await {
                    Ok(()) => {
                        delete_target.set(None);
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to delete location: {}", e);
                        delete_target.set(None);
                        error_message
                            .set("Failed to delete location. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let body = match locations.state() {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Error(_) => html! {
            <p class="text-red-500 text-center">{ "Failed to fetch locations. Please try again." }</p>
        },
        FetchState::Loaded(items) => render_table(items, &open_edit_modal, &request_delete),
    };

    html! {
        <div class="p-5 max-w-5xl mx-auto">
            <h2 class="text-3xl font-bold mb-6 text-center text-gray-800">{ "Attendance Location" }</h2>

            if !error_message.is_empty() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    { (*error_message).clone() }
                </div>
            }

            <div class="flex justify-end mb-4">
                <button
                    onclick={open_add_modal}
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg shadow-md transition"
                >
                    { "+ Add Location" }
                </button>
            </div>

            { body }

            if *modal_open {
                <Modal title={if editing.is_some() { "Edit Location" } else { "Add Location" }}>
                    { render_form(&form, &errors, &on_submit, &close_modal, editing.is_some()) }
                </Modal>
            }

            if let Some(location) = (*delete_target).clone() {
                <ConfirmDialog
                    message={format!(
                        "Are you sure you want to delete the {} year {} location?",
                        location.department.as_str(),
                        location.year
                    )}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete}
                />
            }
        </div>
    }
}

fn render_table(
    locations: &[AttendanceLocation],
    on_edit: &Callback<AttendanceLocation>,
    on_delete: &Callback<AttendanceLocation>,
) -> Html {
    html! {
        <div class="bg-white shadow-lg rounded-lg overflow-hidden">
            <table class="w-full text-left">
                <thead>
                    <tr class="bg-gray-100">
                        { for ["Department", "Year", "Longitude", "Latitude", "Actions"].iter().map(|h| html! {
                            <th class="p-4">{ *h }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for locations.iter().map(|location| {
                            let edit = {
                                let on_edit = on_edit.clone();
                                let location = location.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(location.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let location = location.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(location.clone()))
                            };
                            html! {
                                <tr key={location.id.clone()} class="hover:bg-gray-50">
                                    <td class="p-4">{ location.department.as_str() }</td>
                                    <td class="p-4">{ location.year }</td>
                                    <td class="p-4">{ location.geo_location.longitude() }</td>
                                    <td class="p-4">{ location.geo_location.latitude() }</td>
                                    <td class="p-4 flex space-x-2">
                                        <button onclick={edit} class="bg-green-500 hover:bg-green-600 text-white px-3 py-1 rounded transition">{ "Edit" }</button>
                                        <button onclick={delete} class="bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded transition">{ "Delete" }</button>
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

fn render_form(
    form: &UseStateHandle<LocationForm>,
    errors: &UseStateHandle<FieldErrors>,
    on_submit: &Callback<MouseEvent>,
    on_cancel: &Callback<MouseEvent>,
    is_edit: bool,
) -> Html {
    let text_input = |field: fn(&mut LocationForm) -> &mut String, placeholder: &'static str, value: String| {
        let form = form.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let mut f = (*form).clone();
            *field(&mut f) = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(f);
        });
        html! {
            <input
                type="text"
                placeholder={placeholder}
                {value}
                {oninput}
                class="w-full p-2 border rounded mb-2"
            />
        }
    };

    let on_department = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut f = (*form).clone();
            f.department = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.set(f);
        })
    };
    let on_year = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut f = (*form).clone();
            f.year = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.set(f);
        })
    };

    html! {
        <>
            { for errors.messages().map(|m| html! { <p class="text-red-500 text-sm">{ m }</p> }) }

            <select onchange={on_department} class="w-full p-2 border rounded mb-2">
                <option value="" selected={form.department.is_empty()}>{ "Select Department" }</option>
                {
                    for Department::ALL.iter().map(|d| html! {
                        <option value={d.as_str()} selected={form.department == d.as_str()}>{ d.as_str() }</option>
                    })
                }
            </select>
            <select onchange={on_year} class="w-full p-2 border rounded mb-2">
                <option value="" selected={form.year.is_empty()}>{ "Select Year" }</option>
                {
                    for YEAR_OPTIONS.iter().map(|y| html! {
                        <option value={y.to_string()} selected={form.year == y.to_string()}>{ *y }</option>
                    })
                }
            </select>
            { text_input(|f| &mut f.latitude, "Latitude", form.latitude.clone()) }
            { text_input(|f| &mut f.longitude, "Longitude", form.longitude.clone()) }

            <button
                onclick={on_submit.clone()}
                class="bg-blue-500 text-white px-4 py-2 rounded-lg w-full mt-2"
            >
                { if is_edit { "Update Location" } else { "Add Location" } }
            </button>
            <button onclick={on_cancel.clone()} class="bg-gray-500 text-white px-4 py-2 rounded-lg w-full mt-2">
                { "Cancel" }
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> LocationForm {
        LocationForm {
            department: "IT".into(),
            year: "3".into(),
            latitude: "11.35".into(),
            longitude: "76.96".into(),
        }
    }

    #[test]
    fn payload_submits_geojson_axis_order() {
        let payload = filled_form().payload().unwrap();
        // longitude first, latitude second
        assert_eq!(payload.geo_location.coordinates, [76.96, 11.35]);
        assert_eq!(payload.department, Department::IT);
        assert_eq!(payload.year, 3);
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        let mut form = filled_form();
        form.latitude = "north".into();
        let errors = form.validate();
        assert_eq!(errors.get("latitude"), Some("Latitude must be a number"));
        assert!(errors.get("longitude").is_none());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = LocationForm::default().validate();
        for field in ["department", "year", "latitude", "longitude"] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
    }

    #[test]
    fn form_round_trips_from_location() {
        let location = AttendanceLocation {
            id: "l1".into(),
            department: Department::EEE,
            year: 2,
            geo_location: GeoPoint::new(76.9, 11.3),
        };
        let form = LocationForm::from_location(&location);
        assert_eq!(form.latitude, "11.3");
        assert_eq!(form.longitude, "76.9");
        assert!(form.validate().is_empty());
    }
}
