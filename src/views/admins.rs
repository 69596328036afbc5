use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ConfirmDialog, Modal, Spinner};
use crate::hooks::{use_collection, FetchState};
use crate::models::{Admin, AdminPayload};
use crate::services::ApiClient;
use crate::session::Session;
use crate::validate::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

impl AdminForm {
    pub fn from_admin(admin: &Admin) -> Self {
        Self {
            first_name: admin.first_name.clone(),
            last_name: admin.last_name.clone(),
            email: admin.email.clone(),
            username: admin.username.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require("first_name", &self.first_name, "First name");
        errors.require("last_name", &self.last_name, "Last name");
        errors.require("email", &self.email, "Email");
        errors.require("username", &self.username, "Username");
        errors
    }

    pub fn payload(&self) -> AdminPayload {
        AdminPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
        }
    }
}

#[function_component(AdminsView)]
pub fn admins_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let api = ApiClient::new(session);

    let admins = use_collection::<Admin>();
    let modal_open = use_state(|| false);
    let editing: UseStateHandle<Option<Admin>> = use_state(|| None);
    let form = use_state(AdminForm::default);
    let errors = use_state(FieldErrors::default);
    let delete_target: UseStateHandle<Option<Admin>> = use_state(|| None);
    let error_message = use_state(String::new);

    let reload = {
        let admins = admins.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            admins.run(async move { api.list_admins().await });
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
            form.set(AdminForm::default());
            errors.set(FieldErrors::default());
            modal_open.set(true);
        })
    };
    let open_edit_modal = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |admin: Admin| {
            form.set(AdminForm::from_admin(&admin));
            editing.set(Some(admin));
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
            let payload = form.payload();

            let api = api.clone();
            let form = form.clone();
            let errors = errors.clone();
            let editing = editing.clone();
            let modal_open = modal_open.clone();
            let error_message = error_message.clone();
            let reload = reload.clone();
            let edit_id = (*editing).as_ref().map(|a| a.id.clone());

            spawn_local(async move {
                let result = match edit_id {
                    Some(id) => api.update_admin(&id, &payload).await,
                    None => api.create_admin(&payload).await,
                };
                match result {
                    Ok(()) => {
                        modal_open.set(false);
                        editing.set(None);
                        form.set(AdminForm::default());
                        errors.set(FieldErrors::default());
                        error_message.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to save admin: {}", e);
                        error_message.set("Failed to save admin. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let request_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |admin: Admin| delete_target.set(Some(admin)))
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
            let Some(admin) = (*delete_target).clone() else {
                return;
            };
            let api = api.clone();
            let delete_target = delete_target.clone();
            let error_message = error_message.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_admin(&admin.id).await {
                    Ok(()) => {
                        delete_target.set(None);
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to delete admin: {}", e);
                        delete_target.set(None);
                        error_message.set("Failed to delete admin. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let body = match admins.state() {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Error(_) => html! {
            <p class="text-red-500 text-center">{ "Failed to fetch admins. Please try again." }</p>
        },
        FetchState::Loaded(items) => render_table(items, &open_edit_modal, &request_delete),
    };

    html! {
        <div class="p-5 max-w-5xl mx-auto">
            <h2 class="text-3xl font-bold mb-6 text-center text-gray-800">{ "Admin Management" }</h2>

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
                    { "+ Add Admin" }
                </button>
            </div>

            { body }

            if *modal_open {
                <Modal title={if editing.is_some() { "Edit Admin" } else { "Add Admin" }}>
                    { render_form(&form, &errors, &on_submit, &close_modal, editing.is_some()) }
                </Modal>
            }

            if let Some(admin) = (*delete_target).clone() {
                <ConfirmDialog
                    message={format!(
                        "Are you sure you want to delete admin {} {}?",
                        admin.first_name, admin.last_name
                    )}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete}
                />
            }
        </div>
    }
}

fn render_table(
    admins: &[Admin],
    on_edit: &Callback<Admin>,
    on_delete: &Callback<Admin>,
) -> Html {
    html! {
        <div class="bg-white shadow-lg rounded-lg overflow-hidden">
            <table class="w-full text-left">
                <thead>
                    <tr class="bg-gray-100">
                        { for ["Name", "Email", "Username", "Actions"].iter().map(|h| html! {
                            <th class="p-4">{ *h }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for admins.iter().map(|admin| {
                            let edit = {
                                let on_edit = on_edit.clone();
                                let admin = admin.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(admin.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let admin = admin.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(admin.clone()))
                            };
                            html! {
                                <tr key={admin.id.clone()} class="hover:bg-gray-50">
                                    <td class="p-4">{ format!("{} {}", admin.first_name, admin.last_name) }</td>
                                    <td class="p-4">{ &admin.email }</td>
                                    <td class="p-4">{ &admin.username }</td>
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
    form: &UseStateHandle<AdminForm>,
    errors: &UseStateHandle<FieldErrors>,
    on_submit: &Callback<MouseEvent>,
    on_cancel: &Callback<MouseEvent>,
    is_edit: bool,
) -> Html {
    let text_input = |field: fn(&mut AdminForm) -> &mut String,
                      placeholder: &'static str,
                      value: String| {
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

    html! {
        <>
            { for errors.messages().map(|m| html! { <p class="text-red-500 text-sm">{ m }</p> }) }

            { text_input(|f| &mut f.first_name, "First Name", form.first_name.clone()) }
            { text_input(|f| &mut f.last_name, "Last Name", form.last_name.clone()) }
            { text_input(|f| &mut f.email, "Email", form.email.clone()) }
            { text_input(|f| &mut f.username, "Username", form.username.clone()) }

            <button onclick={on_submit.clone()} class="bg-blue-500 text-white px-4 py-2 rounded-lg w-full mt-2">
                { if is_edit { "Update Admin" } else { "Add Admin" } }
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

    fn filled_form() -> AdminForm {
        AdminForm {
            first_name: "Ravi".into(),
            last_name: "Kumar".into(),
            email: "ravi@example.edu".into(),
            username: "rkumar".into(),
        }
    }

    #[test]
    fn complete_form_validates_and_trims() {
        let mut form = filled_form();
        form.email = " ravi@example.edu ".into();
        assert!(form.validate().is_empty());
        assert_eq!(form.payload().email, "ravi@example.edu");
    }

    #[test]
    fn each_field_is_required() {
        for field in ["first_name", "last_name", "email", "username"] {
            let mut form = filled_form();
            match field {
                "first_name" => form.first_name.clear(),
                "last_name" => form.last_name.clear(),
                "email" => form.email.clear(),
                _ => form.username.clear(),
            }
            assert!(form.validate().get(field).is_some(), "{} should be required", field);
        }
    }

    #[test]
    fn form_round_trips_from_admin() {
        let admin = Admin {
            id: "a1".into(),
            first_name: "Anu".into(),
            last_name: "S".into(),
            email: "anu@example.edu".into(),
            username: "anus1".into(),
        };
        let form = AdminForm::from_admin(&admin);
        assert!(form.validate().is_empty());
        let payload = form.payload();
        assert_eq!(payload.username, admin.username);
    }
}
