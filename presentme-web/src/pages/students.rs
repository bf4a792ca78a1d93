use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StudentRow {
    id: u32,
    name: &'static str,
    email: &'static str,
    institute: &'static str,
    course: &'static str,
    enrolled: bool,
    registered: &'static str,
}

fn seed_students() -> Vec<StudentRow> {
    vec![
        StudentRow { id: 1, name: "John Smith", email: "john.smith@mit.edu", institute: "MIT", course: "Computer Science", enrolled: true, registered: "2024-09-10" },
        StudentRow { id: 2, name: "Emma Davis", email: "emma.d@stanford.edu", institute: "Stanford University", course: "Mathematics", enrolled: true, registered: "2024-09-12" },
        StudentRow { id: 3, name: "Liam Martinez", email: "liam.m@harvard.edu", institute: "Harvard University", course: "Physics", enrolled: false, registered: "2024-10-01" },
        StudentRow { id: 4, name: "Olivia Brown", email: "olivia.b@caltech.edu", institute: "Caltech", course: "Engineering", enrolled: false, registered: "2024-10-03" },
        StudentRow { id: 5, name: "Noah Wilson", email: "noah.w@yale.edu", institute: "Yale University", course: "Chemistry", enrolled: true, registered: "2024-09-08" },
        StudentRow { id: 6, name: "Ava Johnson", email: "ava.j@princeton.edu", institute: "Princeton", course: "Biology", enrolled: false, registered: "2024-10-05" },
        StudentRow { id: 7, name: "Sophia Lee", email: "sophia.l@columbia.edu", institute: "Columbia University", course: "Economics", enrolled: true, registered: "2024-09-15" },
        StudentRow { id: 8, name: "Mason Clark", email: "mason.c@uchicago.edu", institute: "University of Chicago", course: "Statistics", enrolled: false, registered: "2024-10-02" },
    ]
}

#[function_component(StudentsPage)]
pub fn students_page() -> Html {
    let students = use_state(seed_students);
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
    let filtered: Vec<StudentRow> = students
        .iter()
        .filter(|student| match filter.as_str() {
            "Enrolled" => student.enrolled,
            "Pending" => !student.enrolled,
            _ => true,
        })
        .filter(|student| {
            needle.is_empty()
                || format!(
                    "{} {} {} {}",
                    student.name, student.email, student.institute, student.course
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
                    <h2 class="text-2xl font-semibold text-gray-800">{ "Students" }</h2>
                    <p class="text-sm text-gray-500">{ "Manage student enrollments" }</p>
                </div>
                <div class="flex items-center gap-3">
                    <input
                        type="text"
                        placeholder="Search students..."
                        value={(*query).clone()}
                        oninput={on_query}
                        class="px-3 py-2 border border-gray-200 rounded-lg text-sm"
                    />
                    <select onchange={on_filter} class="px-3 py-2 border border-gray-200 rounded-lg text-sm bg-white">
                        <option selected={*filter == "All"}>{ "All" }</option>
                        <option selected={*filter == "Enrolled"}>{ "Enrolled" }</option>
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
                            <th class="py-3 px-4">{ "Course" }</th>
                            <th class="py-3 px-4">{ "Status" }</th>
                            <th class="py-3 px-4">{ "Registered" }</th>
                            <th class="py-3 px-4"></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for filtered.into_iter().map(|student| {
                            let enroll = {
                                let students = students.clone();
                                let id = student.id;
                                Callback::from(move |_: MouseEvent| {
                                    let next: Vec<StudentRow> = students
                                        .iter()
                                        .map(|row| {
                                            let mut row = row.clone();
                                            if row.id == id {
                                                row.enrolled = true;
                                            }
                                            row
                                        })
                                        .collect();
                                    students.set(next);
                                })
                            };
                            html! {
                                <tr class="border-b border-gray-50">
                                    <td class="py-3 px-4 font-medium text-gray-800">{ student.name }</td>
                                    <td class="py-3 px-4 text-gray-600">{ student.email }</td>
                                    <td class="py-3 px-4 text-gray-600">{ student.institute }</td>
                                    <td class="py-3 px-4 text-gray-600">{ student.course }</td>
                                    <td class="py-3 px-4">
                                        if student.enrolled {
                                            <span class="text-xs bg-emerald-100 text-emerald-700 px-2 py-1 rounded-full">{ "Enrolled" }</span>
                                        } else {
                                            <span class="text-xs bg-amber-100 text-amber-700 px-2 py-1 rounded-full">{ "Pending" }</span>
                                        }
                                    </td>
                                    <td class="py-3 px-4 text-gray-600">{ student.registered }</td>
                                    <td class="py-3 px-4">
                                        if !student.enrolled {
                                            <button
                                                onclick={enroll}
                                                class="text-xs bg-indigo-500 hover:bg-indigo-600 text-white px-3 py-1.5 rounded-lg"
                                            >
                                                { "Enroll" }
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
