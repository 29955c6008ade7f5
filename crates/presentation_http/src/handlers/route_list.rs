//! Self-describing route listing

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

/// One documented API route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// Handler name
    pub endpoint: &'static str,
    pub methods: &'static [&'static str],
    pub path: &'static str,
    pub description: &'static str,
    /// Group the route is listed under
    #[serde(skip)]
    pub group: &'static str,
}

/// Every route mounted under `/api/v1`
pub const API_ROUTES: &[RouteInfo] = &[
    RouteInfo {
        endpoint: "get_weather",
        methods: &["GET"],
        path: "/api/v1/weather",
        description: "Current weather for a city",
        group: "weather",
    },
    RouteInfo {
        endpoint: "get_weather_history",
        methods: &["GET"],
        path: "/api/v1/weather/history",
        description: "Most recent recorded lookup for a city",
        group: "weather",
    },
    RouteInfo {
        endpoint: "register",
        methods: &["POST"],
        path: "/api/v1/register",
        description: "Create a user account",
        group: "user",
    },
    RouteInfo {
        endpoint: "login",
        methods: &["POST"],
        path: "/api/v1/login",
        description: "Check user credentials",
        group: "user",
    },
    RouteInfo {
        endpoint: "list_routes",
        methods: &["GET"],
        path: "/api/v1/routes",
        description: "List the available API routes",
        group: "meta",
    },
];

/// Response of `GET /api/v1/routes`
#[derive(Debug, Clone, Serialize)]
pub struct RouteListResponse {
    pub status: &'static str,
    pub routes: BTreeMap<&'static str, Vec<RouteInfo>>,
    pub total_routes: usize,
}

/// Group [`API_ROUTES`] by module, each group sorted by path
#[must_use]
pub fn grouped_routes() -> BTreeMap<&'static str, Vec<RouteInfo>> {
    let mut groups: BTreeMap<&'static str, Vec<RouteInfo>> = BTreeMap::new();
    for route in API_ROUTES {
        groups.entry(route.group).or_default().push(*route);
    }
    for routes in groups.values_mut() {
        routes.sort_by_key(|r| r.path);
    }
    groups
}

pub async fn list_routes() -> Json<RouteListResponse> {
    Json(RouteListResponse {
        status: "success",
        routes: grouped_routes(),
        total_routes: API_ROUTES.len(),
    })
}
