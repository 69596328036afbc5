use chrono::Local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::Spinner;
use crate::export::{build_rows, to_csv, ExportScope, ReportMeta};
use crate::hooks::{use_collection, FetchState};
use crate::models::{AttendanceFilter, AttendanceRecord, Department, SessionOfDay, YEAR_OPTIONS};
use crate::services::ApiClient;
use crate::session::Session;
use crate::utils::download::download_csv;

#[function_component(AttendanceView)]
pub fn attendance_view() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let api = ApiClient::new(session);

    let attendance = use_collection::<AttendanceRecord>();
    let filters = use_state(AttendanceFilter::today);
    let scope = use_state(|| ExportScope::All);
    let export_warning = use_state(String::new);

    // Attendance refetches on every filter change; the collection hook
    // drops responses from filters the user has already moved past.
    {
        let attendance = attendance.clone();
        let api = api.clone();
        use_effect_with((*filters).clone(), move |filter: &AttendanceFilter| {
            let filter = filter.clone();
            let api = api.clone();
            attendance.run(async move { api.list_attendance(&filter).await });
            || ()
        });
    }

    let update_filter = |apply: fn(&mut AttendanceFilter, String)| {
        let filters = filters.clone();
        move |value: String| {
            let mut f = (*filters).clone();
            apply(&mut f, value);
            filters.set(f);
        }
    };

    let on_department = {
        let set = update_filter(|f, v| {
            if let Ok(department) = v.parse::<Department>() {
                f.department = department;
            }
        });
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_year = {
        let set = update_filter(|f, v| {
            if let Ok(year) = v.parse::<u32>() {
                f.year = year;
            }
        });
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_date = {
        let set = update_filter(|f, v| f.date = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_session = {
        let set = update_filter(|f, v| {
            if let Ok(session) = v.parse::<SessionOfDay>() {
                f.session = session;
            }
        });
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };

    let on_scope = {
        let scope = scope.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            scope.set(match value.as_str() {
                "present" => ExportScope::PresentOnly,
                "absent" => ExportScope::AbsentOnly,
                _ => ExportScope::All,
            });
        })
    };

    let on_export = {
        let attendance = attendance.clone();
        let filters = filters.clone();
        let scope = scope.clone();
        let export_warning = export_warning.clone();
        Callback::from(move |_: MouseEvent| {
            let FetchState::Loaded(records) = attendance.state() else {
                export_warning.set("Attendance data is still loading.".to_string());
                return;
            };
            let meta = ReportMeta {
                department: filters.department.to_string(),
                year: filters.year.to_string(),
                date: filters.date.clone(),
                session: filters.session.label().to_string(),
            };
            match build_rows(records, *scope, &meta) {
                Ok(rows) => {
                    export_warning.set(String::new());
                    let filename =
                        format!("attendance-{}-{}.csv", filters.date, filters.session);
                    if let Err(e) = download_csv(&filename, &to_csv(&rows)) {
                        log::error!("❌ Export failed: {}", e);
                        export_warning.set("Failed to export the report.".to_string());
                    } else {
                        log::info!("📄 Exported {}", filename);
                    }
                }
                Err(e) => export_warning.set(e.to_string()),
            }
        })
    };

    let today = Local::now().date_naive().to_string();

    let list = match attendance.state() {
        FetchState::Idle | FetchState::Loading => html! { <Spinner /> },
        FetchState::Error(_) => html! {
            <div class="flex flex-col items-center justify-center h-64">
                <p class="text-red-500 text-lg">{ "Failed to fetch attendance data. Please try again." }</p>
            </div>
        },
        FetchState::Loaded(records) if records.is_empty() => html! {
            <div class="flex flex-col items-center justify-center h-64">
                <p class="text-gray-600 text-lg">{ "No attendance data found." }</p>
            </div>
        },
        FetchState::Loaded(records) => render_table(records),
    };

    html! {
        <div class="p-6 bg-gray-50 min-h-screen">
            <h1 class="text-3xl font-bold text-gray-800 mb-6 text-center">{ "Attendance Management" }</h1>

            <div class="w-full max-w-4xl mx-auto mb-8">
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-xl font-semibold mb-4 text-gray-700">{ "Filters" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                        <select onchange={on_department} class="p-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500">
                            {
                                for Department::ALL.iter().map(|d| html! {
                                    <option value={d.as_str()} selected={filters.department == *d}>{ d.as_str() }</option>
                                })
                            }
                        </select>
                        <select onchange={on_year} class="p-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500">
                            {
                                for YEAR_OPTIONS.iter().map(|y| html! {
                                    <option value={y.to_string()} selected={filters.year == *y}>{ format!("Year {}", y) }</option>
                                })
                            }
                        </select>
                        <input
                            type="date"
                            value={filters.date.clone()}
                            max={today}
                            onchange={on_date}
                            class="p-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                        <select onchange={on_session} class="p-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500">
                            <option value="morning" selected={filters.session == SessionOfDay::Morning}>{ "Morning" }</option>
                            <option value="afternoon" selected={filters.session == SessionOfDay::Afternoon}>{ "Afternoon" }</option>
                        </select>
                    </div>
                </div>
            </div>

            <div class="w-full max-w-4xl mx-auto mb-8">
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-xl font-semibold mb-4 text-gray-700">{ "Export" }</h2>
                    if !export_warning.is_empty() {
                        <p class="text-yellow-700 bg-yellow-100 border border-yellow-400 rounded px-4 py-2 mb-4">
                            { (*export_warning).clone() }
                        </p>
                    }
                    <div class="flex space-x-4">
                        <select onchange={on_scope} class="p-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500">
                            <option value="all" selected={*scope == ExportScope::All}>{ "All Students" }</option>
                            <option value="present" selected={*scope == ExportScope::PresentOnly}>{ "Present Only" }</option>
                            <option value="absent" selected={*scope == ExportScope::AbsentOnly}>{ "Absent Only" }</option>
                        </select>
                        <button
                            onclick={on_export}
                            class="bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded shadow transition duration-300"
                        >
                            { "Export Report" }
                        </button>
                    </div>
                </div>
            </div>

            <div class="w-full max-w-4xl mx-auto">
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-xl font-semibold mb-4 text-gray-700">{ "Attendance List" }</h2>
                    { list }
                </div>
            </div>
        </div>
    }
}

fn render_table(records: &[AttendanceRecord]) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full">
                <thead class="bg-gray-100">
                    <tr>
                        { for ["Name", "Exam No", "Department", "Year", "Status"].iter().map(|h| html! {
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{ *h }</th>
                        }) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {
                        for records.iter().map(|record| html! {
                            <tr key={record.exam_no.clone()} class="hover:bg-gray-50 transition-colors">
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ &record.name }</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ &record.exam_no }</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ record.department.as_str() }</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{ record.year }</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                    <span
                                        class={if record.present {
                                            "px-2 py-1 rounded-full text-xs font-semibold bg-green-100 text-green-800"
                                        } else {
                                            "px-2 py-1 rounded-full text-xs font-semibold bg-red-100 text-red-800"
                                        }}
                                    >
                                        { if record.present { "Present" } else { "Absent" } }
                                    </span>
                                </td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}
