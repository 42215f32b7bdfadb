//! Route table for the users API.

use percent_encoding::percent_decode_str;

/// The service operation a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListUsers,
    GetUser,
    CreateUser,
    ReplaceUser,
    PatchUser,
    DeleteUser,
}

impl Operation {
    /// Message returned with a 500 when the operation hits a storage fault.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListUsers => "Could not retrieve users",
            Operation::GetUser => "Could not retrieve user",
            Operation::CreateUser => "Could not create user",
            Operation::ReplaceUser | Operation::PatchUser => "Could not update user",
            Operation::DeleteUser => "Could not delete user",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: &'static str,
    /// Segments starting with `:` capture the user id.
    pub path: &'static str,
    pub operation: Operation,
}

pub const ROUTES: &[Route] = &[
    Route {
        method: "GET",
        path: "/users",
        operation: Operation::ListUsers,
    },
    Route {
        method: "GET",
        path: "/users/:userId",
        operation: Operation::GetUser,
    },
    Route {
        method: "POST",
        path: "/users",
        operation: Operation::CreateUser,
    },
    Route {
        method: "PUT",
        path: "/users/:userId",
        operation: Operation::ReplaceUser,
    },
    Route {
        method: "PATCH",
        path: "/users/:userId",
        operation: Operation::PatchUser,
    },
    Route {
        method: "DELETE",
        path: "/users/:userId",
        operation: Operation::DeleteUser,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub operation: Operation,
    pub user_id: Option<String>,
}

/// Finds the first route matching `method` and `path`.
///
/// Methods compare case-insensitively, a single trailing slash is ignored and
/// the captured user id is percent-decoded.
#[must_use]
pub fn match_route(method: &str, path: &str) -> Option<RouteMatch> {
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    ROUTES
        .iter()
        .filter(|route| route.method.eq_ignore_ascii_case(method))
        .find_map(|route| {
            match_path(route.path, path).map(|user_id| RouteMatch {
                operation: route.operation,
                user_id,
            })
        })
}

/// Returns `Some(capture)` when `path` fits `pattern`.
fn match_path(pattern: &str, path: &str) -> Option<Option<String>> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut captured = None;

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(captured),
            (Some(expected), Some(actual)) if expected.starts_with(':') => {
                if actual.is_empty() {
                    return None;
                }
                captured = Some(percent_decode_str(actual).decode_utf8().ok()?.into_owned());
            }
            (Some(expected), Some(actual)) if expected == actual => {}
            _ => return None,
        }
    }
}
