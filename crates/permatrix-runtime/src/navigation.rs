//! Navigation gating.
//!
//! Derives which routes an actor may see and where the actor lands on
//! entering the authenticated area.
//!
//! # Algorithm
//!
//! ```text
//! RouteTable (declaration order)      AccessPolicy
//!   Dashboard  → "Access Dashboard"  ──check──► ✗
//!   Crm        → "Access CRM Module" ──check──► ✓ ─► visible, first granted
//!   Finance    → "Access Finance …"  ──check──► ✗
//!   …
//!
//! default_route():
//!   Dashboard granted?          → Dashboard
//!   else first granted in order → that route
//!   else                        → no-access
//! ```
//!
//! Declaration order is part of the contract: reordering the table
//! changes where a marginal actor lands.

use crate::PermissionRegistry;
use permatrix_auth::{AccessPolicy, PermissionKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A navigable area of the business suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Company overview; preferred landing route.
    Dashboard,
    /// Customer relationship management.
    Crm,
    /// Invoicing and financial reports.
    Finance,
    /// Human resources.
    Hr,
    /// Stock and unit costs.
    Inventory,
    /// Document storage.
    Documents,
    /// Task assignment.
    Operations,
    /// Team chat.
    Chat,
    /// AI assistant.
    Assistant,
    /// Matrix and system settings.
    Settings,
}

impl Route {
    /// Every route in builtin declaration order.
    pub const DECLARED: [Self; 10] = [
        Self::Dashboard,
        Self::Crm,
        Self::Finance,
        Self::Hr,
        Self::Inventory,
        Self::Documents,
        Self::Operations,
        Self::Chat,
        Self::Assistant,
        Self::Settings,
    ];

    /// Returns the route identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Crm => "crm",
            Self::Finance => "finance",
            Self::Hr => "hr",
            Self::Inventory => "inventory",
            Self::Documents => "documents",
            Self::Operations => "operations",
            Self::Chat => "chat",
            Self::Assistant => "assistant",
            Self::Settings => "settings",
        }
    }

    /// Returns the human-readable menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Crm => "CRM",
            Self::Finance => "Finance",
            Self::Hr => "HR",
            Self::Inventory => "Inventory",
            Self::Documents => "Documents",
            Self::Operations => "Operations",
            Self::Chat => "Team Chat",
            Self::Assistant => "AI Assistant",
            Self::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Route {
    type Err = ParseRouteError;

    /// Parses a route identifier, ignoring ASCII case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DECLARED
            .into_iter()
            .find(|route| route.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRouteError {
                value: s.to_string(),
            })
    }
}

/// Text did not name a declared route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized route '{value}'")]
pub struct ParseRouteError {
    /// The rejected input.
    pub value: String,
}

/// One candidate route and the permission that gates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// The declared route.
    pub route: Route,
    /// `None` means the route is intentionally ungated.
    pub permission: Option<String>,
}

/// Ordered route declarations with their route → permission map.
///
/// # Example
///
/// ```
/// use permatrix_runtime::{Route, RouteTable};
///
/// let table = RouteTable::new()
///     .gated(Route::Dashboard, "Access Dashboard")
///     .ungated(Route::Chat);
///
/// assert_eq!(table.required_permission(Route::Dashboard), Some("Access Dashboard"));
/// assert_eq!(table.required_permission(Route::Chat), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in table: every [`Route`] in declaration order,
    /// gated by its builtin Access permission.
    #[must_use]
    pub fn builtin() -> Self {
        Route::DECLARED.into_iter().fold(Self::new(), |table, route| {
            table.gated(route, crate::builtin::access_permission(route))
        })
    }

    /// Appends a route gated by `permission`.
    #[must_use]
    pub fn gated(mut self, route: Route, permission: impl Into<String>) -> Self {
        self.entries.push(RouteEntry {
            route,
            permission: Some(permission.into()),
        });
        self
    }

    /// Appends a route that is always visible.
    #[must_use]
    pub fn ungated(mut self, route: Route) -> Self {
        self.entries.push(RouteEntry {
            route,
            permission: None,
        });
        self
    }

    /// Returns the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Returns the declared routes in order.
    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        self.entries.iter().map(|entry| entry.route)
    }

    /// Returns the permission gating `route`, or `None` if the route is
    /// ungated or not declared.
    #[must_use]
    pub fn required_permission(&self, route: Route) -> Option<&str> {
        self.entry(route)
            .and_then(|entry| entry.permission.as_deref())
    }

    fn entry(&self, route: Route) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.route == route)
    }

    /// Checks the table against a registry.
    ///
    /// Every gated route must point at an existing, Access-kind record
    /// named `"Access <Module>"` whose module is the route's own. Each
    /// route is declared once and each permission gates one route.
    #[must_use]
    pub fn audit(&self, registry: &PermissionRegistry) -> Vec<RouteIssue> {
        let mut issues = Vec::new();
        let mut seen: Vec<Route> = Vec::with_capacity(self.entries.len());
        let mut gates: Vec<(&str, Route)> = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            if seen.contains(&entry.route) {
                issues.push(RouteIssue::DuplicateRoute { route: entry.route });
                continue;
            }
            seen.push(entry.route);

            let Some(permission) = entry.permission.as_deref() else {
                continue;
            };
            match gates.iter().find(|(gate, _)| *gate == permission) {
                Some(&(_, first)) => issues.push(RouteIssue::SharedGate {
                    route: entry.route,
                    permission: permission.to_string(),
                    first,
                }),
                None => gates.push((permission, entry.route)),
            }
            if !permission.starts_with("Access ") {
                issues.push(RouteIssue::NamingConvention {
                    route: entry.route,
                    permission: permission.to_string(),
                });
            }
            match registry.find(permission) {
                None => issues.push(RouteIssue::MissingPermission {
                    route: entry.route,
                    permission: permission.to_string(),
                }),
                Some(record) => {
                    if !record.kind.is_access() {
                        issues.push(RouteIssue::NotAccessKind {
                            route: entry.route,
                            permission: permission.to_string(),
                            kind: record.kind,
                        });
                    }
                    if record.module != entry.route.label() {
                        issues.push(RouteIssue::ForeignModule {
                            route: entry.route,
                            permission: permission.to_string(),
                            module: record.module.clone(),
                        });
                    }
                }
            }
        }

        issues
    }
}

/// A consistency problem between a route table and a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteIssue {
    /// The gating permission is not in the registry (route is unreachable).
    MissingPermission { route: Route, permission: String },
    /// The gating permission exists but is not Access-kind.
    NotAccessKind {
        route: Route,
        permission: String,
        kind: PermissionKind,
    },
    /// The gating permission does not follow `"Access <Module>"`.
    NamingConvention { route: Route, permission: String },
    /// The gating permission belongs to another module.
    ForeignModule {
        route: Route,
        permission: String,
        module: String,
    },
    /// The gating permission already gates the earlier route `first`.
    SharedGate {
        route: Route,
        permission: String,
        first: Route,
    },
    /// The route is declared more than once; only the first counts.
    DuplicateRoute { route: Route },
}

impl std::fmt::Display for RouteIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPermission { route, permission } => {
                write!(f, "route '{route}': permission '{permission}' is not in the matrix")
            }
            Self::NotAccessKind {
                route,
                permission,
                kind,
            } => write!(
                f,
                "route '{route}': permission '{permission}' is {kind}, expected Access"
            ),
            Self::NamingConvention { route, permission } => write!(
                f,
                "route '{route}': permission '{permission}' does not follow 'Access <Module>'"
            ),
            Self::ForeignModule {
                route,
                permission,
                module,
            } => write!(
                f,
                "route '{route}': permission '{permission}' belongs to module '{module}'"
            ),
            Self::SharedGate {
                route,
                permission,
                first,
            } => write!(
                f,
                "route '{route}': permission '{permission}' already gates route '{first}'"
            ),
            Self::DuplicateRoute { route } => write!(f, "route '{route}' is declared twice"),
        }
    }
}

/// Where an actor lands on entering the authenticated area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landing {
    /// A visible route.
    Route(Route),
    /// Terminal state: the actor may see no route at all.
    NoAccess,
}

impl Landing {
    /// Returns the landing route, if any.
    #[must_use]
    pub fn route(self) -> Option<Route> {
        match self {
            Self::Route(route) => Some(route),
            Self::NoAccess => None,
        }
    }

    /// Returns `true` for the terminal no-access state.
    #[must_use]
    pub fn is_no_access(self) -> bool {
        matches!(self, Self::NoAccess)
    }
}

impl std::fmt::Display for Landing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Route(route) => route.fmt(f),
            Self::NoAccess => f.write_str("no-access"),
        }
    }
}

/// Filters a [`RouteTable`] through an [`AccessPolicy`].
///
/// The gate holds no state of its own; every call re-evaluates the
/// policy, so a matrix edit is reflected on the next render.
///
/// # Example
///
/// ```
/// use permatrix_auth::Role;
/// use permatrix_runtime::{AccessEvaluator, Landing, NavigationGate, PermissionRegistry, Route, RouteTable};
/// use std::sync::Arc;
///
/// let registry = Arc::new(PermissionRegistry::builtin().expect("builtin"));
/// let table = RouteTable::builtin();
/// let viewer = AccessEvaluator::for_role(registry, Role::Viewer);
///
/// let gate = NavigationGate::new(&table, &viewer);
/// assert_eq!(gate.default_route(), Landing::Route(Route::Crm));
/// assert!(!gate.visible_routes().contains(&Route::Dashboard));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NavigationGate<'a, P> {
    table: &'a RouteTable,
    policy: P,
}

impl<'a, P: AccessPolicy> NavigationGate<'a, P> {
    /// Creates a gate over `table` evaluated by `policy`.
    pub fn new(table: &'a RouteTable, policy: P) -> Self {
        Self { table, policy }
    }

    fn is_granted(&self, entry: &RouteEntry) -> bool {
        entry
            .permission
            .as_deref()
            .map_or(true, |permission| self.policy.check_permission(permission))
    }

    /// Returns `true` if `route` is declared and its permission is granted.
    #[must_use]
    pub fn is_visible(&self, route: Route) -> bool {
        self.table
            .entry(route)
            .is_some_and(|entry| self.is_granted(entry))
    }

    /// Returns the visible routes in declaration order.
    ///
    /// A route declared twice is listed once, at its first position.
    #[must_use]
    pub fn visible_routes(&self) -> Vec<Route> {
        let mut visible: Vec<Route> = Vec::new();
        for entry in self.table.entries() {
            if !visible.contains(&entry.route) && self.is_visible(entry.route) {
                visible.push(entry.route);
            }
        }
        visible
    }

    /// Selects the landing route.
    ///
    /// Dashboard wins when granted; otherwise the first granted route in
    /// declaration order; otherwise [`Landing::NoAccess`].
    #[must_use]
    pub fn default_route(&self) -> Landing {
        if self.is_visible(Route::Dashboard) {
            tracing::debug!(route = %Route::Dashboard, "landing on dashboard");
            return Landing::Route(Route::Dashboard);
        }

        match self
            .table
            .routes()
            .find(|route| self.is_visible(*route))
        {
            Some(route) => {
                tracing::debug!(route = %route, "dashboard denied; landing on first granted route");
                Landing::Route(route)
            }
            None => {
                tracing::debug!("no route granted; landing on no-access");
                Landing::NoAccess
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Allow(&'static [&'static str]);

    impl AccessPolicy for Allow {
        fn check_permission(&self, name: &str) -> bool {
            self.0.contains(&name)
        }
    }

    fn table() -> RouteTable {
        RouteTable::new()
            .gated(Route::Dashboard, "Access Dashboard")
            .gated(Route::Crm, "Access CRM Module")
            .gated(Route::Finance, "Access Finance Module")
    }

    #[test]
    fn dashboard_preferred_when_granted() {
        let table = table();
        let policy = Allow(&["Access Finance Module", "Access Dashboard"]);
        let gate = NavigationGate::new(&table, &policy);
        assert_eq!(gate.default_route(), Landing::Route(Route::Dashboard));
    }

    #[test]
    fn dashboard_preferred_even_when_declared_last() {
        let table = RouteTable::new()
            .gated(Route::Finance, "Access Finance Module")
            .gated(Route::Dashboard, "Access Dashboard");
        let policy = Allow(&["Access Finance Module", "Access Dashboard"]);
        let gate = NavigationGate::new(&table, &policy);
        assert_eq!(gate.default_route(), Landing::Route(Route::Dashboard));
        assert_eq!(gate.visible_routes(), vec![Route::Finance, Route::Dashboard]);
    }

    #[test]
    fn declaration_order_breaks_ties() {
        let policy = Allow(&["Access CRM Module", "Access Finance Module"]);

        let forward = table();
        assert_eq!(
            NavigationGate::new(&forward, &policy).default_route(),
            Landing::Route(Route::Crm)
        );

        let reversed = RouteTable::new()
            .gated(Route::Finance, "Access Finance Module")
            .gated(Route::Crm, "Access CRM Module");
        assert_eq!(
            NavigationGate::new(&reversed, &policy).default_route(),
            Landing::Route(Route::Finance)
        );
    }

    #[test]
    fn nothing_granted_is_no_access() {
        let table = table();
        let gate = NavigationGate::new(&table, Allow(&[]));
        assert!(gate.visible_routes().is_empty());
        assert!(gate.default_route().is_no_access());
        assert_eq!(gate.default_route().to_string(), "no-access");
    }

    #[test]
    fn ungated_route_always_visible() {
        let table = table().ungated(Route::Chat);
        let gate = NavigationGate::new(&table, Allow(&[]));
        assert_eq!(gate.visible_routes(), vec![Route::Chat]);
        assert_eq!(gate.default_route(), Landing::Route(Route::Chat));
    }

    #[test]
    fn undeclared_route_is_not_visible() {
        let table = table();
        let gate = NavigationGate::new(&table, Allow(&["Access Settings"]));
        assert!(!gate.is_visible(Route::Settings));
    }

    #[test]
    fn visible_routes_keep_declaration_order() {
        let table = RouteTable::builtin();
        let policy = Allow(&["Access Team Chat", "Access CRM Module", "Access Documents"]);
        let gate = NavigationGate::new(&table, &policy);
        assert_eq!(
            gate.visible_routes(),
            vec![Route::Crm, Route::Documents, Route::Chat]
        );
    }

    #[test]
    fn builtin_table_follows_declared_order() {
        let routes: Vec<_> = RouteTable::builtin().routes().collect();
        assert_eq!(routes, Route::DECLARED.to_vec());
    }

    #[test]
    fn audit_builtin_is_clean() {
        let registry = PermissionRegistry::builtin().expect("builtin");
        assert_eq!(RouteTable::builtin().audit(&registry), Vec::new());
    }

    #[test]
    fn audit_reports_problems() {
        let registry = PermissionRegistry::builtin().expect("builtin");
        let table = RouteTable::new()
            .gated(Route::Dashboard, "Access Dashbord")
            .gated(Route::Hr, "View Salary Data")
            .gated(Route::Crm, "Access CRM Module")
            .gated(Route::Crm, "Access CRM Module")
            .gated(Route::Finance, "Access Settings")
            .gated(Route::Inventory, "Access Inventory Module")
            .gated(Route::Operations, "Access Inventory Module");

        let issues = table.audit(&registry);
        assert!(issues.contains(&RouteIssue::MissingPermission {
            route: Route::Dashboard,
            permission: "Access Dashbord".to_string(),
        }));
        assert!(issues.contains(&RouteIssue::NotAccessKind {
            route: Route::Hr,
            permission: "View Salary Data".to_string(),
            kind: PermissionKind::Data,
        }));
        assert!(issues.contains(&RouteIssue::NamingConvention {
            route: Route::Hr,
            permission: "View Salary Data".to_string(),
        }));
        assert!(issues.contains(&RouteIssue::DuplicateRoute { route: Route::Crm }));
        assert!(issues.contains(&RouteIssue::ForeignModule {
            route: Route::Finance,
            permission: "Access Settings".to_string(),
            module: "Settings".to_string(),
        }));
        assert!(issues.contains(&RouteIssue::SharedGate {
            route: Route::Operations,
            permission: "Access Inventory Module".to_string(),
            first: Route::Inventory,
        }));
        assert!(issues.contains(&RouteIssue::ForeignModule {
            route: Route::Operations,
            permission: "Access Inventory Module".to_string(),
            module: "Inventory".to_string(),
        }));
        assert_eq!(issues.len(), 7);
    }

    #[test]
    fn route_parse_and_display() {
        for route in Route::DECLARED {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
        assert_eq!("CRM".parse::<Route>(), Ok(Route::Crm));
        let err = "payroll".parse::<Route>().expect_err("not a route");
        assert_eq!(err.value, "payroll");
        assert!(err.to_string().contains("'payroll'"));
    }
}
