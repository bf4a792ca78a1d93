use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Directory row; this page runs on placeholder data until the teacher
/// backend endpoints exist, with verification applied locally.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TeacherRow {
    id: u32,
    name: &'static str,
    email: &'static str,
    institute: &'static str,
    subjects: &'static str,
    verified: bool,
    registered: &'static str,
}

fn seed_teachers() -> Vec<TeacherRow> {
    vec![
        TeacherRow { id: 1, name: "Dr. Sarah Johnson", email: "sarah.j@mit.edu", institute: "MIT", subjects: "Computer Science", verified: true, registered: "2024-10-15" },
        TeacherRow { id: 2, name: "Prof. Michael Chen", email: "mchen@stanford.edu", institute: "Stanford University", subjects: "Mathematics", verified: true, registered: "2024-10-12" },
        TeacherRow { id: 3, name: "Dr. Emily Rodriguez", email: "emily.r@harvard.edu", institute: "Harvard University", subjects: "Physics", verified: false, registered: "2024-10-18" },
        TeacherRow { id: 4, name: "Prof. David Kumar", email: "dkumar@caltech.edu", institute: "Caltech", subjects: "Engineering", verified: false, registered: "2024-10-17" },
        TeacherRow { id: 5, name: "Dr. Lisa Anderson", email: "landerson@yale.edu", institute: "Yale University", subjects: "Chemistry", verified: true, registered: "2024-10-10" },
        TeacherRow { id: 6, name: "Prof. James Wilson", email: "jwilson@princeton.edu", institute: "Princeton", subjects: "Biology", verified: false, registered: "2024-10-19" },
        TeacherRow { id: 7, name: "Dr. Maria Garcia", email: "mgarcia@columbia.edu", institute: "Columbia University", subjects: "Economics", verified: true, registered: "2024-10-08" },
        TeacherRow { id: 8, name: "Prof. Robert Taylor", email: "rtaylor@uchicago.edu", institute: "University of Chicago", subjects: "Statistics", verified: false, registered: "2024-10-16" },
    ]
}

#[function_component(TeachersPage)]
pub fn teachers_page() -> Html {
    let teachers = use_state(seed_teachers);
    let filter = use_state(|| "All".to_string());
    let query = use_state(String::new);

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                filter.set(select.value());
            }
        })
    };

    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let needle = query.to_lowercase();
    let filtered: Vec<TeacherRow> = teachers
        .iter()
        .filter(|teacher| match filter.as_str() {
            "Verified" => teacher.verified,
            "Pending" => !teacher.verified,
            _ => true,
        })
        .filter(|teacher| {
            needle.is_empty()
                || format!(
                    "{} {} {} {}",
                    teacher.name, teacher.email, teacher.institute, teacher.subjects
                )
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect();

    html! {
        <div>
            <div class="mb-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-semibold text-gray-800">{ "Teachers" }</h2>
                    <p class="text-sm text-gray-500">{ "Manage and verify teacher accounts" }</p>
                </div>
                <div class="flex items-center gap-3">
                    <input
                        type="text"
                        placeholder="Search teachers..."
                        value={(*query).clone()}
                        oninput={on_query}
                        class="px-3 py-2 border border-gray-200 rounded-lg text-sm"
                    />
                    <select onchange={on_filter} class="px-3 py-2 border border-gray-200 rounded-lg text-sm bg-white">
                        <option selected={*filter == "All"}>{ "All" }</option>
                        <option selected={*filter == "Verified"}>{ "Verified" }</option>
                        <option selected={*filter == "Pending"}>{ "Pending" }</option>
                    </select>
                </div>
            </div>

            <div class="bg-white rounded-xl shadow-sm overflow-x-auto">
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="text-xs text-gray-500 border-b">
                            <th class="py-3 px-4">{ "Name" }</th>
                            <th class="py-3 px-4">{ "Email" }</th>
                            <th class="py-3 px-4">{ "Institute" }</th>
                            <th class="py-3 px-4">{ "Subjects" }</th>
                            <th class="py-3 px-4">{ "Status" }</th>
                            <th class="py-3 px-4">{ "Registered" }</th>
                            <th class="py-3 px-4"></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered.into_iter().map(|teacher| {
                            let verify = {
                                let teachers = teachers.clone();
                                let id = teacher.id;
                                Callback::from(move |_: MouseEvent| {
                                    let next: Vec<TeacherRow> = teachers
                                        .iter()
                                        .map(|row| {
                                            let mut row = row.clone();
                                            if row.id == id {
                                                row.verified = true;
                                            }
                                            row
                                        })
                                        .collect();
                                    teachers.set(next);
                                })
                            };
                            html! {
                                <tr class="border-b border-gray-50">
                                    <td class="py-3 px-4 font-medium text-gray-800">{ teacher.name }</td>
                                    <td class="py-3 px-4 text-gray-600">{ teacher.email }</td>
                                    <td class="py-3 px-4 text-gray-600">{ teacher.institute }</td>
                                    <td class="py-3 px-4 text-gray-600">{ teacher.subjects }</td>
                                    <td class="py-3 px-4">
                                        if teacher.verified {
                                            <span class="text-xs bg-emerald-100 text-emerald-700 px-2 py-1 rounded-full">{ "Verified" }</span>
                                        } else {
                                            <span class="text-xs bg-amber-100 text-amber-700 px-2 py-1 rounded-full">{ "Pending" }</span>
                                        }
                                    </td>
                                    <td class="py-3 px-4 text-gray-600">{ teacher.registered }</td>
                                    <td class="py-3 px-4">
                                        if !teacher.verified {
                                            <button
                                                onclick={verify}
                                                class="text-xs bg-indigo-500 hover:bg-indigo-600 text-white px-3 py-1.5 rounded-lg"
                                            >
                                                { "Verify" }
                                            </button>
                                        }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
