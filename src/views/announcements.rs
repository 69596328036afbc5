use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{Modal, Spinner};
use crate::hooks::{use_collection, FetchState};
use crate::models::{Announcement, AnnouncementPayload, Department, YEAR_OPTIONS};
use crate::services::ApiClient;
use crate::session::Session;
use crate::validate::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
    pub department: String,
    pub year: String,
    pub attachment_link: String,
}

impl AnnouncementForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require("title", &self.title, "Title");
        errors.require("content", &self.content, "Content");
        errors.require("department", &self.department, "Department");
        errors.require("year", &self.year, "Year");
        errors
    }

    /// The attachment link is optional; an empty field is simply omitted.
    pub fn payload(&self) -> Option<AnnouncementPayload> {
        let attachment = self.attachment_link.trim();
        Some(AnnouncementPayload {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            department: self.department.parse().ok()?,
            year: self.year.parse().ok()?,
            attachment_link: if attachment.is_empty() {
                None
            } else {
                Some(attachment.to_string())
            },
        })
    }
}

#[function_component(AnnouncementsView)]
pub fn announcements_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let api = ApiClient::new(session);

    let announcements = use_collection::<Announcement>();
    let modal_open = use_state(|| false);
    let form = use_state(AnnouncementForm::default);
    let errors = use_state(FieldErrors::default);
    let error_message = use_state(String::new);

    let reload = {
        let announcements = announcements.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            announcements.run(async move { api.list_announcements().await });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(AnnouncementForm::default());
            errors.set(FieldErrors::default());
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(false))
    };

    let on_submit = {
        let api = api.clone();
        let form = form.clone();
        let errors = errors.clone();
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
            let modal_open = modal_open.clone();
            let error_message = error_message.clone();
            let reload = reload.clone();

            spawn_local(async move {
                match api.create_announcement(&payload).await {
                    Ok(()) => {
                        log::info!("📢 Announcement posted");
                        modal_open.set(false);
                        form.set(AnnouncementForm::default());
                        errors.set(FieldErrors::default());
                        error_message.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to post announcement: {}", e);
                        error_message
                            .set("Failed to post the announcement. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let body = match announcements.state() {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Error(_) => html! {
            <p class="text-red-500 text-center">{ "Failed to fetch announcements. Please try again." }</p>
        },
        FetchState::Loaded(items) if items.is_empty() => html! {
            <p class="text-gray-600 text-center">{ "No announcements yet." }</p>
        },
        FetchState::Loaded(items) => html! {
            <div class="space-y-4">
                { for items.iter().map(render_card) }
            </div>
        },
    };

    html! {
        <div class="p-5 max-w-4xl mx-auto">
            <h2 class="text-3xl font-bold mb-6 text-center text-gray-800">{ "Announcements" }</h2>

            if !error_message.is_empty() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    { (*error_message).clone() }
                </div>
            }

            <div class="flex justify-end mb-4">
                <button
                    onclick={open_modal}
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg shadow-md transition"
                >
                    { "+ Post Announcement" }
                </button>
            </div>

            { body }

            if *modal_open {
                <Modal title="Post Announcement">
                    { render_form(&form, &errors, &on_submit, &close_modal) }
                </Modal>
            }
        </div>
    }
}

fn render_card(announcement: &Announcement) -> Html {
    let audience = match (announcement.department, announcement.year) {
        (Some(d), Some(y)) => format!("{} · Year {}", d.as_str(), y),
        (Some(d), None) => d.as_str().to_string(),
        (None, Some(y)) => format!("Year {}", y),
        (None, None) => "All students".to_string(),
    };

    html! {
        <div key={announcement.id.clone()} class="bg-white p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow duration-300">
            <div class="flex justify-between items-start mb-2">
                <h3 class="text-xl font-semibold text-gray-800">{ &announcement.title }</h3>
                <span class="text-sm bg-blue-100 text-blue-800 px-2 py-1 rounded-full whitespace-nowrap ml-4">
                    { audience }
                </span>
            </div>
            <p class="text-gray-700 whitespace-pre-line">{ &announcement.content }</p>
            if let Some(link) = &announcement.attachment_link {
                <a
                    href={link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block mt-3 text-blue-600 hover:underline"
                >
                    { "📎 View attachment" }
                </a>
            }
            if let Some(created) = &announcement.created_at {
                <p class="text-xs text-gray-400 mt-3">{ created }</p>
            }
        </div>
    }
}

fn render_form(
    form: &UseStateHandle<AnnouncementForm>,
    errors: &UseStateHandle<FieldErrors>,
    on_submit: &Callback<MouseEvent>,
    on_cancel: &Callback<MouseEvent>,
) -> Html {
    let on_title = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut f = (*form).clone();
            f.title = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(f);
        })
    };
    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut f = (*form).clone();
            f.content = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            form.set(f);
        })
    };
    let on_attachment = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut f = (*form).clone();
            f.attachment_link = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(f);
        })
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

            <input
                type="text"
                placeholder="Title"
                value={form.title.clone()}
                oninput={on_title}
                class="w-full p-2 border rounded mb-2"
            />
            <textarea
                placeholder="Content"
                value={form.content.clone()}
                oninput={on_content}
                rows="4"
                class="w-full p-2 border rounded mb-2"
            />
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
            <input
                type="text"
                placeholder="Attachment link (optional)"
                value={form.attachment_link.clone()}
                oninput={on_attachment}
                class="w-full p-2 border rounded mb-2"
            />

            <button onclick={on_submit.clone()} class="bg-blue-500 text-white px-4 py-2 rounded-lg w-full mt-2">
                { "Post" }
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

    fn filled_form() -> AnnouncementForm {
        AnnouncementForm {
            title: "Exam schedule".into(),
            content: "Hall A, 9am".into(),
            department: "CSE".into(),
            year: "3".into(),
            attachment_link: String::new(),
        }
    }

    #[test]
    fn complete_form_validates_and_builds_payload() {
        let form = filled_form();
        assert!(form.validate().is_empty());
        let payload = form.payload().unwrap();
        assert_eq!(payload.department, Department::CSE);
        assert_eq!(payload.year, 3);
        assert!(payload.attachment_link.is_none());
    }

    #[test]
    fn blank_attachment_is_omitted_but_filled_one_kept() {
        let mut form = filled_form();
        form.attachment_link = "  https://example.edu/schedule.pdf ".into();
        let payload = form.payload().unwrap();
        assert_eq!(
            payload.attachment_link.as_deref(),
            Some("https://example.edu/schedule.pdf")
        );
    }

    #[test]
    fn required_fields_block_submission() {
        for field in ["title", "content", "department", "year"] {
            let mut form = filled_form();
            match field {
                "title" => form.title.clear(),
                "content" => form.content.clear(),
                "department" => form.department.clear(),
                _ => form.year.clear(),
            }
            assert!(form.validate().get(field).is_some(), "{} should be required", field);
        }
    }
}
