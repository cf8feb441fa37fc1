//! Embedded seeding plan.
//!
//! The label and issue tables for the Bolt AI Salon Assistant project,
//! fully known at build time. Read-only input data: the tables are built
//! fresh on each call and never mutated at runtime.

mod bodies;

use planbot_models::{IssueSpec, LabelSpec, ProjectPlan};

/// The built-in plan: nine labels, thirteen epics and three subtasks.
pub fn default_plan() -> ProjectPlan {
    ProjectPlan {
        labels: label_table(),
        issues: issue_table(),
    }
}

fn label_table() -> Vec<LabelSpec> {
    vec![
        LabelSpec::new("backend", "0366d6", "Backend development tasks"),
        LabelSpec::new("frontend", "fbca04", "Frontend development tasks"),
        LabelSpec::new("ai", "a2eeef", "AI/ML related tasks"),
        LabelSpec::new("telephony", "d73a4a", "Telephony/Twilio related tasks"),
        LabelSpec::new("billing", "0e8a16", "Billing/payment related tasks"),
        LabelSpec::new("auth", "c5def5", "Authentication related tasks"),
        LabelSpec::new("database", "bfdadc", "Database related tasks"),
        LabelSpec::new("docs", "d4c5f9", "Documentation tasks"),
        LabelSpec::new("enhancement", "84b6eb", "New feature or request"),
    ]
}

fn issue_table() -> Vec<IssueSpec> {
    vec![
        IssueSpec::new(
            "[EPIC] Backend Infrastructure Setup",
            bodies::EPIC_BACKEND_INFRASTRUCTURE,
            &["backend", "enhancement", "database"],
        ),
        IssueSpec::new(
            "[EPIC] Authentication & 2FA System",
            bodies::EPIC_AUTH_2FA,
            &["backend", "auth", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Multi-Tenant Management",
            bodies::EPIC_MULTI_TENANT,
            &["backend", "enhancement", "database"],
        ),
        IssueSpec::new(
            "[EPIC] Employee & Service Management",
            bodies::EPIC_EMPLOYEE_SERVICE,
            &["backend", "enhancement", "database"],
        ),
        IssueSpec::new(
            "[EPIC] Appointments & Availability System",
            bodies::EPIC_APPOINTMENTS,
            &["backend", "enhancement", "database"],
        ),
        IssueSpec::new(
            "[EPIC] Billing & Subscriptions (Stripe)",
            bodies::EPIC_BILLING,
            &["backend", "billing", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Telephony Integration (Twilio)",
            bodies::EPIC_TELEPHONY,
            &["backend", "telephony", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] AI Assistant Integration",
            bodies::EPIC_AI_ASSISTANT,
            &["backend", "ai", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Frontend Application (Vue 3)",
            bodies::EPIC_FRONTEND,
            &["frontend", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Public Website Pages",
            bodies::EPIC_PUBLIC_PAGES,
            &["frontend", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Admin Dashboard Pages",
            bodies::EPIC_ADMIN_DASHBOARD,
            &["frontend", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Reporting & Analytics",
            bodies::EPIC_REPORTING,
            &["backend", "frontend", "enhancement"],
        ),
        IssueSpec::new(
            "[EPIC] Documentation",
            bodies::EPIC_DOCUMENTATION,
            &["docs", "enhancement"],
        ),
        IssueSpec::new(
            "Create Branding Assets (Logo & Favicon)",
            bodies::TASK_BRANDING_ASSETS,
            &["frontend", "enhancement"],
        ),
        IssueSpec::new(
            "Set up Demo Salon Tenant",
            bodies::TASK_DEMO_TENANT,
            &["backend", "ai", "telephony", "enhancement"],
        ),
        IssueSpec::new(
            "Set up Docker Compose for Local Development",
            bodies::TASK_DOCKER_COMPOSE,
            &["backend", "database", "enhancement", "docs"],
        ),
    ]
}
