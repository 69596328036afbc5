use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{ConfirmDialog, Modal, Spinner};
use crate::hooks::{use_collection, FetchState};
use crate::models::{Department, Student, StudentFilter, StudentPayload, YEAR_OPTIONS};
use crate::services::ApiClient;
use crate::session::Session;
use crate::validate::FieldErrors;

/// Modal form state. Selects keep raw string values until submit so the
/// "Select Department" placeholder can stay unselected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub exam_no: String,
    pub department: String,
    pub year: String,
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            exam_no: student.exam_no.clone(),
            department: student.department.as_str().to_string(),
            year: student.year.to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name, "Name");
        errors.require("email", &self.email, "Email");
        errors.require("exam_no", &self.exam_no, "Exam No");
        errors.require("department", &self.department, "Department");
        errors.require("year", &self.year, "Year");
        errors
    }

    /// Only meaningful after a clean validate().
    pub fn payload(&self) -> Option<StudentPayload> {
        Some(StudentPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            exam_no: self.exam_no.trim().to_string(),
            department: self.department.parse().ok()?,
            year: self.year.parse().ok()?,
        })
    }
}

#[function_component(StudentsView)]
pub fn students_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let api = ApiClient::new(session);

    let students = use_collection::<Student>();
    let filters = use_state(StudentFilter::default);
    let search = use_state(String::new);

    let modal_open = use_state(|| false);
    let editing: UseStateHandle<Option<Student>> = use_state(|| None);
    let form = use_state(StudentForm::default);
    let errors = use_state(FieldErrors::default);
    let delete_target: UseStateHandle<Option<Student>> = use_state(|| None);
    let error_message = use_state(String::new);

    let reload = {
        let students = students.clone();
        let filters = filters.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            let filter = (*filters).clone();
            let api = api.clone();
            students.run(async move { api.list_students(&filter).await });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let on_department_filter = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(department) = value.parse::<Department>() {
                let mut f = (*filters).clone();
                f.department = department;
                filters.set(f);
            }
        })
    };
    let on_year_filter = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(year) = value.parse::<u32>() {
                let mut f = (*filters).clone();
                f.year = year;
                filters.set(f);
            }
        })
    };
    let on_apply = reload.reform(|_: MouseEvent| ());

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let open_add_modal = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form.set(StudentForm::default());
            errors.set(FieldErrors::default());
            modal_open.set(true);
        })
    };

    let open_edit_modal = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |student: Student| {
            form.set(StudentForm::from_student(&student));
            editing.set(Some(student));
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
            let edit_id = (*editing).as_ref().map(|s| s.id.clone());

            spawn_local(async move {
                let result = match edit_id {
                    Some(id) => api.update_student(&id, &payload).await,
                    None => api.create_student(&payload).await,
                };
                match result {
                    Ok(()) => {
                        modal_open.set(false);
                        editing.set(None);
                        form.set(StudentForm::default());
                        errors.set(FieldErrors::default());
                        error_message.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to save student: {}", e);
                        error_message.set("Failed to save student. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let request_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |student: Student| delete_target.set(Some(student)))
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
            let Some(student) = (*delete_target).clone() else {
                return;
            };
            let api = api.clone();
            let delete_target = delete_target.clone();
            let error_message = error_message.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_student(&student.id).await {
                    Ok(()) => {
                        delete_target.set(None);
                        reload.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to delete student: {}", e);
                        delete_target.set(None);
                        error_message
                            .set("Failed to delete student. Please try again.".to_string());
                    }
                }
            });
        })
    };

    let body = match students.state() {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Error(_) => html! {
            <div class="flex flex-col items-center justify-center h-64">
                <p class="text-gray-600 text-lg">{ "Failed to fetch students. Please try again." }</p>
            </div>
        },
        FetchState::Loaded(items) => {
            let visible: Vec<&Student> = items.iter().filter(|s| s.matches(&search)).collect();
            if visible.is_empty() {
                html! {
                    <div class="flex flex-col items-center justify-center h-64">
                        <p class="text-gray-600 text-lg">{ "No students found." }</p>
                    </div>
                }
            } else {
                render_table(&visible, &open_edit_modal, &request_delete)
            }
        }
    };

    html! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <h2 class="text-3xl font-bold text-gray-800 mb-6">{ "Student Management" }</h2>

            if !error_message.is_empty() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    { (*error_message).clone() }
                </div>
            }

            <div class="flex space-x-4 mb-6">
                <select
                    onchange={on_department_filter}
                    class="p-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                    {
                        for Department::ALL.iter().map(|d| html! {
                            <option value={d.as_str()} selected={filters.department == *d}>{ d.as_str() }</option>
                        })
                    }
                </select>
                <select
                    onchange={on_year_filter}
                    class="p-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                    {
                        for YEAR_OPTIONS.iter().map(|y| html! {
                            <option value={y.to_string()} selected={filters.year == *y}>{ *y }</option>
                        })
                    }
                </select>
                <button
                    onclick={on_apply}
                    disabled={students.state().is_loading()}
                    class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded shadow transition duration-300 disabled:bg-gray-400 disabled:cursor-not-allowed"
                >
                    { if students.state().is_loading() { "Applying Filters..." } else { "Apply Filters" } }
                </button>
            </div>

            <div class="mb-6">
                <input
                    type="text"
                    placeholder="Search by name or exam number"
                    value={(*search).clone()}
                    oninput={on_search}
                    class="w-full p-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
            </div>

            <button
                onclick={open_add_modal}
                class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded shadow transition duration-300 mb-6"
            >
                { "Add Student" }
            </button>

            { body }

            if *modal_open {
                <Modal title={if editing.is_some() { "Edit Student" } else { "Add Student" }}>
                    { render_form(&form, &errors, &on_submit, &close_modal, editing.is_some()) }
                </Modal>
            }

            if let Some(student) = (*delete_target).clone() {
                <ConfirmDialog
                    message={format!("Are you sure you want to delete {}?", student.name)}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete}
                />
            }
        </div>
    }
}

fn render_table(
    students: &[&Student],
    on_edit: &Callback<Student>,
    on_delete: &Callback<Student>,
) -> Html {
    html! {
        <div class="overflow-x-auto bg-white rounded-lg shadow">
            <table class="min-w-full">
                <thead class="bg-gray-100">
                    <tr>
                        { for ["Name", "Email", "Exam No", "Department", "Year", "Actions"].iter().map(|h| html! {
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{ *h }</th>
                        }) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {
                        for students.iter().map(|student| {
                            let edit = {
                                let on_edit = on_edit.clone();
                                let student = (*student).clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(student.clone()))
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let student = (*student).clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(student.clone()))
                            };
                            html! {
                                <tr key={student.id.clone()} class="hover:bg-gray-50 transition-colors">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ &student.name }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ &student.email }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ &student.exam_no }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ student.department.as_str() }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ student.year }</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm">
                                        <div class="flex space-x-2">
                                            <button onclick={edit} class="bg-green-500 hover:bg-green-600 text-white px-3 py-1 rounded-md transition-colors">{ "Edit" }</button>
                                            <button onclick={delete} class="bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded-md transition-colors">{ "Delete" }</button>
                                        </div>
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
    form: &UseStateHandle<StudentForm>,
    errors: &UseStateHandle<FieldErrors>,
    on_submit: &Callback<MouseEvent>,
    on_cancel: &Callback<MouseEvent>,
    is_edit: bool,
) -> Html {
    let text_input = |field: fn(&mut StudentForm) -> &mut String, placeholder: &'static str, value: String| {
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
                class="w-full border p-2 mb-2 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
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

            { text_input(|f| &mut f.name, "Name", form.name.clone()) }
            { text_input(|f| &mut f.email, "Email", form.email.clone()) }
            { text_input(|f| &mut f.exam_no, "Exam No", form.exam_no.clone()) }

            <select
                onchange={on_department}
                class="w-full border p-2 mb-2 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                <option value="" selected={form.department.is_empty()}>{ "Select Department" }</option>
                {
                    for Department::ALL.iter().map(|d| html! {
                        <option value={d.as_str()} selected={form.department == d.as_str()}>{ d.as_str() }</option>
                    })
                }
            </select>
            <select
                onchange={on_year}
                class="w-full border p-2 mb-2 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                <option value="" selected={form.year.is_empty()}>{ "Select Year" }</option>
                {
                    for YEAR_OPTIONS.iter().map(|y| html! {
                        <option value={y.to_string()} selected={form.year == y.to_string()}>{ *y }</option>
                    })
                }
            </select>

            <button
                onclick={on_submit.clone()}
                class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded w-full transition duration-300"
            >
                { if is_edit { "Update" } else { "Add" } }
            </button>
            <button onclick={on_cancel.clone()} class="mt-2 text-red-500 hover:text-red-600 w-full">
                { "Cancel" }
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> StudentForm {
        StudentForm {
            name: "Priya Raman".into(),
            email: "priya@example.edu".into(),
            exam_no: "21IT042".into(),
            department: "IT".into(),
            year: "4".into(),
        }
    }

    #[test]
    fn complete_form_validates_and_builds_payload() {
        let form = filled_form();
        assert!(form.validate().is_empty());

        let payload = form.payload().unwrap();
        assert_eq!(payload.department, Department::IT);
        assert_eq!(payload.year, 4);
        assert_eq!(payload.exam_no, "21IT042");
    }

    #[test]
    fn each_missing_field_blocks_submission() {
        for blank in ["name", "email", "exam_no", "department", "year"] {
            let mut form = filled_form();
            match blank {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                "exam_no" => form.exam_no.clear(),
                "department" => form.department.clear(),
                _ => form.year.clear(),
            }
            let errors = form.validate();
            assert!(!errors.is_empty(), "expected error for missing {}", blank);
            assert!(errors.get(blank).is_some());
        }
    }

    #[test]
    fn form_round_trips_from_student() {
        let student = Student {
            id: "s1".into(),
            name: "Anu".into(),
            email: "anu@example.edu".into(),
            exam_no: "21CS001".into(),
            department: Department::CSE,
            year: 2,
        };
        let form = StudentForm::from_student(&student);
        assert_eq!(form.department, "CSE");
        assert_eq!(form.year, "2");
        assert!(form.validate().is_empty());
    }
}
