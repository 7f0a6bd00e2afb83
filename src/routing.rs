//! Data-driven route table with role guards, evaluated by one
//! dispatcher per navigation. The guard only ever looks at the session
//! user held by this client; nothing server-side re-checks it.

use crate::modules::store::records::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    HealthInfo,
    PatientDashboard,
    GoalTracker,
    Profile,
    ProviderDashboard,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub required_role: Option<Role>,
    pub view: View,
}

pub const LOGIN_PATH: &str = "/login";

pub const ROUTES: &[Route] = &[
    Route {
        path: "/login",
        required_role: None,
        view: View::Login,
    },
    Route {
        path: "/register",
        required_role: None,
        view: View::Register,
    },
    Route {
        path: "/health-info",
        required_role: None,
        view: View::HealthInfo,
    },
    Route {
        path: "/patient/dashboard",
        required_role: Some(Role::Patient),
        view: View::PatientDashboard,
    },
    Route {
        path: "/patient/goals",
        required_role: Some(Role::Patient),
        view: View::GoalTracker,
    },
    Route {
        path: "/patient/profile",
        required_role: Some(Role::Patient),
        view: View::Profile,
    },
    Route {
        path: "/provider/dashboard",
        required_role: Some(Role::Provider),
        view: View::ProviderDashboard,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(&'static str),
    NotFound,
}

/// Resolves a navigation against the table. Stateless: the decision is
/// re-made from scratch on every call.
pub fn resolve(path: &str, user: Option<&User>) -> Resolution {
    if path == "/" {
        return Resolution::Redirect(LOGIN_PATH);
    }

    let Some(route) = ROUTES.iter().find(|r| r.path == path) else {
        return Resolution::NotFound;
    };

    match route.required_role {
        None => Resolution::Render(route.view),
        Some(required) => match user {
            Some(user) if user.role == required => Resolution::Render(route.view),
            _ => Resolution::Redirect(LOGIN_PATH),
        },
    }
}

/// Where a fresh login lands, by role.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Patient => "/patient/dashboard",
        Role::Provider => "/provider/dashboard",
    }
}
