use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Sidebar;
use crate::session::Session;
use crate::views::{
    AdminsView, AnnouncementsView, AttendanceView, DashboardView, DeviceChangeView, LocationsView,
    LoginView, StudentsView,
};

#[derive(Routable, Debug, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/students")]
    Students,
    #[at("/attendance")]
    Attendance,
    #[at("/attendance-location")]
    Locations,
    #[at("/announcements")]
    Announcements,
    #[at("/device-change")]
    DeviceChange,
    #[at("/admin")]
    Admins,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Outcome of the guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Render,
    ToLogin,
    ToDashboard,
}

/// Token presence is the only signal; evaluated on every navigation.
/// An authenticated visit to the login page or the bare root lands on the
/// dashboard; everything else renders as requested.
pub fn route_verdict(authenticated: bool, route: &Route) -> Verdict {
    match (authenticated, route) {
        (false, Route::Login) => Verdict::Render,
        (false, _) => Verdict::ToLogin,
        (true, Route::Root) | (true, Route::Login) => Verdict::ToDashboard,
        (true, _) => Verdict::Render,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = Session::browser();

    html! {
        <BrowserRouter>
            <ContextProvider<Session> context={session}>
                <Switch<Route> render={switch} />
            </ContextProvider<Session>>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! { <Guarded {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: Route,
}

#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let session = use_context::<Session>().expect("session context missing");

    match route_verdict(session.is_authenticated(), &props.route) {
        Verdict::ToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        Verdict::ToDashboard => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Verdict::Render => render_screen(&props.route),
    }
}

fn render_screen(route: &Route) -> Html {
    // Login renders without the shell; every other screen sits next to the
    // fixed sidebar.
    if *route == Route::Login {
        return html! { <LoginView /> };
    }

    let screen = match route {
        Route::Dashboard => html! { <DashboardView /> },
        Route::Students => html! { <StudentsView /> },
        Route::Attendance => html! { <AttendanceView /> },
        Route::Locations => html! { <LocationsView /> },
        Route::Announcements => html! { <AnnouncementsView /> },
        Route::DeviceChange => html! { <DeviceChangeView /> },
        Route::Admins => html! { <AdminsView /> },
        Route::NotFound => html! { <h1 class="p-6 text-2xl">{ "404 - Not Found" }</h1> },
        // Root and Login never reach here; the guard redirects them.
        Route::Root | Route::Login => Html::default(),
    };

    html! {
        <div class="flex min-h-screen">
            <div class="fixed top-0 left-0 h-screen w-64 bg-white shadow-lg z-50">
                <Sidebar />
            </div>
            <div class="flex-1 ml-64 overflow-y-auto">
                { screen }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROUTES: [Route; 10] = [
        Route::Root,
        Route::Login,
        Route::Dashboard,
        Route::Students,
        Route::Attendance,
        Route::Locations,
        Route::Announcements,
        Route::DeviceChange,
        Route::Admins,
        Route::NotFound,
    ];

    #[test]
    fn unauthenticated_sessions_only_reach_login() {
        for route in &ALL_ROUTES {
            let expected = if *route == Route::Login {
                Verdict::Render
            } else {
                Verdict::ToLogin
            };
            assert_eq!(route_verdict(false, route), expected, "route {:?}", route);
        }
    }

    #[test]
    fn authenticated_root_and_login_redirect_to_dashboard() {
        assert_eq!(route_verdict(true, &Route::Root), Verdict::ToDashboard);
        assert_eq!(route_verdict(true, &Route::Login), Verdict::ToDashboard);
    }

    #[test]
    fn authenticated_sessions_render_requested_screens() {
        for route in &ALL_ROUTES {
            if matches!(route, Route::Root | Route::Login) {
                continue;
            }
            assert_eq!(route_verdict(true, route), Verdict::Render, "route {:?}", route);
        }
    }
}
