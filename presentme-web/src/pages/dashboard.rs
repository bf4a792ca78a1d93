use crate::components::stat_card::StatCard;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Overview page: metric tiles (institute counts live from the store,
/// teacher/student figures are placeholder data until those backends
/// exist), recent activity, and quick actions.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let counts = use_selector(|state: &AppState| state.institute.counts);

    html! {
        <div>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
                <StatCard
                    title="Total Teachers"
                    value="248"
                    subtitle="186 verified, 62 pending"
                    icon={IconId::HeroiconsOutlineUsers}
                    accent="bg-indigo-400"
                />
                <StatCard
                    title="Total Students"
                    value="5,432"
                    subtitle="Across 45 colleges"
                    icon={IconId::HeroiconsOutlineAcademicCap}
                    accent="bg-green-400"
                />
                <StatCard
                    title="Verified Institutes"
                    value={counts.verified.to_string()}
                    subtitle="All verified and active"
                    icon={IconId::HeroiconsOutlineCheckCircle}
                    accent="bg-purple-400"
                />
                <StatCard
                    title="Pending Verification"
                    value={counts.pending.to_string()}
                    subtitle="Institutes awaiting approval"
                    icon={IconId::HeroiconsOutlineClock}
                    accent="bg-orange-400"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                <div class="lg:col-span-2 bg-white rounded-xl p-6 shadow-sm">
                    <h3 class="font-semibold text-gray-800 mb-4">{ "Recent Activity" }</h3>
                    <ul class="space-y-4">
                        <li class="flex items-center justify-between border-b border-gray-100 pb-3">
                            <div>
                                <div class="font-medium">{ "New institute registered" }</div>
                                <div class="text-sm text-gray-500">{ "Stanford University" }</div>
                            </div>
                            <div class="text-xs text-gray-400">{ "2 hours ago" }</div>
                        </li>
                        <li class="flex items-center justify-between border-b border-gray-100 pb-3">
                            <div>
                                <div class="font-medium">{ "Teacher verified" }</div>
                                <div class="text-sm text-gray-500">{ "Dr. Sarah Johnson" }</div>
                            </div>
                            <div class="text-xs text-gray-400">{ "5 hours ago" }</div>
                        </li>
                        <li class="flex items-center justify-between border-b border-gray-100 pb-3">
                            <div>
                                <div class="font-medium">{ "Student enrolled" }</div>
                                <div class="text-sm text-gray-500">{ "John Smith - MIT" }</div>
                            </div>
                            <div class="text-xs text-gray-400">{ "1 day ago" }</div>
                        </li>
                        <li class="flex items-center justify-between">
                            <div>
                                <div class="font-medium">{ "Institute approved" }</div>
                                <div class="text-sm text-gray-500">{ "Harvard College" }</div>
                            </div>
                            <div class="text-xs text-gray-400">{ "2 days ago" }</div>
                        </li>
                    </ul>
                </div>

                <div class="bg-white rounded-xl p-6 shadow-sm">
                    <h3 class="font-semibold text-gray-800 mb-4">{ "Quick Actions" }</h3>
                    <div class="space-y-3">
                        <Link<MainRoute> to={MainRoute::PendingInstitutes} classes="block bg-indigo-50 text-indigo-700 px-4 py-3 rounded">
                            { "Review Pending Institutes" }
                            <br />
                            <span class="text-sm text-indigo-500">
                                { format!("{} institutes waiting", counts.pending) }
                            </span>
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Teachers} classes="block bg-amber-50 text-amber-700 px-4 py-3 rounded">
                            { "Verify Teachers" }
                            <br />
                            <span class="text-sm text-amber-500">{ "62 pending verification" }</span>
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Students} classes="block bg-emerald-50 text-emerald-700 px-4 py-3 rounded">
                            { "View Student Reports" }
                            <br />
                            <span class="text-sm text-emerald-500">{ "Generate attendance reports" }</span>
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </div>
    }
}
