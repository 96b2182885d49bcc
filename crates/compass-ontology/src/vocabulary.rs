//! Closed vocabularies shared by every ontology node
//!
//! Provides [`Capability`], [`Domain`], [`IntentTag`] and [`EntityType`].
//! Each is a fixed enumeration with a stable wire name, so adding a value is
//! a compile-time change that every exhaustive `match` has to acknowledge.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Error for parsing a vocabulary value from its wire name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValue {
    /// Vocabulary name (`capability`, `domain`, ...)
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}

/// Declares a closed vocabulary enum with its wire names.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire name
            #[inline]
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Atomic permission grant, checked only by set containment
    Capability, "capability" {
        /// Portfolio dashboard
        ViewDashboard => "view_dashboard",
        /// Read issues
        ViewIssues => "view_issues",
        /// Create, edit and close issues
        ManageIssues => "manage_issues",
        /// Kanban board
        ViewKanban => "view_kanban",
        /// Read requirements
        ViewRequirements => "view_requirements",
        /// Edit requirements and baselines
        ManageRequirements => "manage_requirements",
        /// Requirement traceability matrix
        ViewTraceability => "view_traceability",
        /// Read test cases and runs
        ViewTests => "view_tests",
        /// Author and execute tests
        ManageTests => "manage_tests",
        /// Read deliverables
        ViewDeliverables => "view_deliverables",
        /// Approve or reject deliverables
        ApproveDeliverables => "approve_deliverables",
        /// Work breakdown structure and schedule
        ViewWbs => "view_wbs",
        /// Edit the WBS and schedule
        ManageWbs => "manage_wbs",
        /// Read reports
        ViewReports => "view_reports",
        /// Export reports
        ExportReports => "export_reports",
        /// Audit evidence and change history
        ViewAuditLog => "view_audit_log",
    }
}

vocabulary! {
    /// Functional area a node belongs to
    Domain, "domain" {
        /// Cross-cutting overview screens
        Overview => "overview",
        /// Day-to-day execution (issues, boards)
        Execution => "execution",
        /// Requirements management
        Requirements => "requirements",
        /// Testing and quality
        Quality => "quality",
        /// Deliverables and acceptance
        Delivery => "delivery",
        /// WBS and schedule
        Planning => "planning",
        /// Reports and analytics
        Reporting => "reporting",
        /// Audit and governance
        Governance => "governance",
    }
}

vocabulary! {
    /// What a user is trying to accomplish
    IntentTag, "intent" {
        /// High-level health of a project
        StatusOverview => "status_overview",
        /// Progress against plan
        TrackProgress => "track_progress",
        /// Blocked or overdue work
        FindBlockers => "find_blockers",
        /// Triage and grooming
        ManageBacklog => "manage_backlog",
        /// Requirement coverage and links
        TraceRequirements => "trace_requirements",
        /// Test results and defects
        ReviewQuality => "review_quality",
        /// Deliverable sign-off
        ApproveDeliverable => "approve_deliverable",
        /// Schedule and baseline planning
        PlanSchedule => "plan_schedule",
        /// Trends over time
        AnalyzeTrends => "analyze_trends",
        /// Evidence gathering for audits
        CollectEvidence => "collect_evidence",
    }
}

vocabulary! {
    /// Domain entity a node displays
    EntityType, "entity" {
        /// Project
        Project => "project",
        /// Project phase
        Phase => "phase",
        /// Issue or defect
        Issue => "issue",
        /// Requirement
        Requirement => "requirement",
        /// Test case
        TestCase => "test_case",
        /// Deliverable
        Deliverable => "deliverable",
        /// WBS task
        Task => "task",
        /// Sprint
        Sprint => "sprint",
        /// Report
        Report => "report",
        /// Milestone
        Milestone => "milestone",
        /// Audit record
        AuditRecord => "audit_record",
    }
}
