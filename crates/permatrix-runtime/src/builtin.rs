//! Builtin business matrix.
//!
//! The default capability matrix of the business suite: one Access
//! record per navigable module plus the feature, data, and critical
//! capabilities the modules query. Hosts that ship their own seed file
//! ignore this table entirely.

use crate::navigation::Route;
use crate::redaction::FieldGuard;
use permatrix_auth::{ColumnKey, PermissionKind, PermissionRecord};

pub const ACCESS_DASHBOARD: &str = "Access Dashboard";
pub const ACCESS_CRM: &str = "Access CRM Module";
pub const ACCESS_FINANCE: &str = "Access Finance Module";
pub const ACCESS_HR: &str = "Access HR Module";
pub const ACCESS_INVENTORY: &str = "Access Inventory Module";
pub const ACCESS_DOCUMENTS: &str = "Access Documents";
pub const ACCESS_OPERATIONS: &str = "Access Operations";
pub const ACCESS_CHAT: &str = "Access Team Chat";
pub const ACCESS_ASSISTANT: &str = "Access AI Assistant";
pub const ACCESS_SETTINGS: &str = "Access Settings";

pub const VIEW_SALARY_DATA: &str = "View Salary Data";
pub const EDIT_COMPENSATION: &str = "Edit Compensation";
pub const VIEW_UNIT_COSTS: &str = "View Unit Costs";
pub const ADJUST_STOCK_LEVELS: &str = "Adjust Stock Levels";
pub const VIEW_FINANCIAL_REPORTS: &str = "View Financial Reports";
pub const CREATE_INVOICES: &str = "Create Invoices";
pub const EDIT_INVOICE_TOTALS: &str = "Edit Invoice Totals";

/// Returns the Access permission that gates `route` in the builtin table.
#[must_use]
pub fn access_permission(route: Route) -> &'static str {
    match route {
        Route::Dashboard => ACCESS_DASHBOARD,
        Route::Crm => ACCESS_CRM,
        Route::Finance => ACCESS_FINANCE,
        Route::Hr => ACCESS_HR,
        Route::Inventory => ACCESS_INVENTORY,
        Route::Documents => ACCESS_DOCUMENTS,
        Route::Operations => ACCESS_OPERATIONS,
        Route::Chat => ACCESS_CHAT,
        Route::Assistant => ACCESS_ASSISTANT,
        Route::Settings => ACCESS_SETTINGS,
    }
}

/// Salary column on employee records.
#[must_use]
pub fn salary_field() -> FieldGuard {
    FieldGuard::new(VIEW_SALARY_DATA, EDIT_COMPENSATION)
}

/// Unit cost column on stock items.
#[must_use]
pub fn unit_cost_field() -> FieldGuard {
    FieldGuard::new(VIEW_UNIT_COSTS, ADJUST_STOCK_LEVELS)
}

/// Invoice totals on finance reports.
#[must_use]
pub fn invoice_total_field() -> FieldGuard {
    FieldGuard::new(VIEW_FINANCIAL_REPORTS, EDIT_INVOICE_TOTALS)
}

const MANAGER: &[ColumnKey] = &[ColumnKey::Manager];
const STAFF: &[ColumnKey] = &[ColumnKey::Manager, ColumnKey::User];
const EVERYONE: &[ColumnKey] = &[ColumnKey::Manager, ColumnKey::User, ColumnKey::Viewer];
const ADMIN_ONLY: &[ColumnKey] = &[];

#[rustfmt::skip]
const SEED: &[(&str, &str, PermissionKind, &str, &[ColumnKey])] = &[
    ("dash-access",           "Dashboard",    PermissionKind::Access,   ACCESS_DASHBOARD,              MANAGER),
    ("dash-kpi-view",         "Dashboard",    PermissionKind::Data,     "View Company KPIs",           MANAGER),

    ("crm-access",            "CRM",          PermissionKind::Access,   ACCESS_CRM,                    EVERYONE),
    ("crm-deals-manage",      "CRM",          PermissionKind::Feature,  "Manage Deals",                STAFF),
    ("crm-contacts-export",   "CRM",          PermissionKind::Data,     "Export Contacts",             MANAGER),
    ("crm-pipeline-delete",   "CRM",          PermissionKind::Critical, "Delete Pipeline",             ADMIN_ONLY),

    ("fin-access",            "Finance",      PermissionKind::Access,   ACCESS_FINANCE,                MANAGER),
    ("fin-invoice-create",    "Finance",      PermissionKind::Feature,  CREATE_INVOICES,               STAFF),
    ("fin-invoice-edit",      "Finance",      PermissionKind::Feature,  EDIT_INVOICE_TOTALS,           MANAGER),
    ("fin-reports-view",      "Finance",      PermissionKind::Data,     VIEW_FINANCIAL_REPORTS,        MANAGER),
    ("fin-payment-approve",   "Finance",      PermissionKind::Critical, "Approve Payments",            ADMIN_ONLY),

    ("hr-access",             "HR",           PermissionKind::Access,   ACCESS_HR,                     STAFF),
    ("hr-leave-request",      "HR",           PermissionKind::Feature,  "Request Leave",               STAFF),
    ("hr-salary-view",        "HR",           PermissionKind::Data,     VIEW_SALARY_DATA,              MANAGER),
    ("hr-compensation-edit",  "HR",           PermissionKind::Feature,  EDIT_COMPENSATION,             ADMIN_ONLY),
    ("hr-payroll-run",        "HR",           PermissionKind::Critical, "Run Payroll",                 ADMIN_ONLY),

    ("inv-access",            "Inventory",    PermissionKind::Access,   ACCESS_INVENTORY,              STAFF),
    ("inv-stock-adjust",      "Inventory",    PermissionKind::Feature,  ADJUST_STOCK_LEVELS,           MANAGER),
    ("inv-cost-view",         "Inventory",    PermissionKind::Data,     VIEW_UNIT_COSTS,               MANAGER),

    ("doc-access",            "Documents",    PermissionKind::Access,   ACCESS_DOCUMENTS,              EVERYONE),
    ("doc-upload",            "Documents",    PermissionKind::Feature,  "Upload Documents",            STAFF),
    ("doc-confidential-view", "Documents",    PermissionKind::Data,     "View Confidential Documents", MANAGER),
    ("doc-purge",             "Documents",    PermissionKind::Critical, "Purge Documents",             ADMIN_ONLY),

    ("ops-access",            "Operations",   PermissionKind::Access,   ACCESS_OPERATIONS,             STAFF),
    ("ops-task-assign",       "Operations",   PermissionKind::Feature,  "Assign Tasks",                MANAGER),

    ("chat-access",           "Team Chat",    PermissionKind::Access,   ACCESS_CHAT,                   EVERYONE),
    ("chat-announce",         "Team Chat",    PermissionKind::Feature,  "Post Announcements",          MANAGER),

    ("ai-access",             "AI Assistant", PermissionKind::Access,   ACCESS_ASSISTANT,              STAFF),
    ("ai-business-context",   "AI Assistant", PermissionKind::Data,     "Share Business Data with AI", ADMIN_ONLY),

    ("set-access",            "Settings",     PermissionKind::Access,   ACCESS_SETTINGS,               ADMIN_ONLY),
    ("set-audit-view",        "Settings",     PermissionKind::Data,     "View Audit Log",              MANAGER),
    ("set-matrix-edit",       "Settings",     PermissionKind::Critical, "Edit Permission Matrix",      ADMIN_ONLY),
];

/// Returns the builtin seed in declaration order.
#[must_use]
pub fn seed() -> Vec<PermissionRecord> {
    SEED.iter()
        .map(|(id, module, kind, name, columns)| {
            columns.iter().fold(
                PermissionRecord::new(*id, *module, *kind, *name),
                |record, column| record.allow(*column),
            )
        })
        .collect()
}
