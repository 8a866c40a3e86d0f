//! Sidebar sections per role.
//!
//! Paths are unique within a catalog. The same path may appear in several
//! catalogs (`/users`, `/dashboard`).

use schoolnav_models::{NavigationItem as Item, NavigationSection as Section};

// =============================================================================
// Headmaster
// =============================================================================

const HEADMASTER_DASHBOARD: Section =
    Section::new("Dashboard", &[Item::new("/dashboard", "Overview")]);

const HEADMASTER_PEOPLE: Section = Section::new(
    "People",
    &[
        Item::new("/users", "All Users"),
        Item::new("/teachers", "Teachers"),
        Item::new("/students", "Students"),
        Item::new("/parents", "Parents"),
    ],
);

const HEADMASTER_ACADEMICS: Section = Section::new(
    "Academics",
    &[
        Item::new("/classrooms", "Classrooms"),
        Item::new("/subjects", "Subjects"),
        Item::new("/timetable", "Timetable"),
        Item::new("/attendance/students", "Student Attendance"),
        Item::new("/attendance/teachers", "Teacher Attendance"),
    ],
);

const HEADMASTER_FINANCE: Section = Section::new(
    "Finance",
    &[
        Item::new("/fees/payments", "Fee Payments"),
        Item::new("/fees/structure", "Fee Structure"),
        Item::new("/fees/outstanding", "Outstanding Balances"),
    ],
);

const HEADMASTER_REPORTS: Section = Section::new(
    "Reports",
    &[
        Item::new("/reports/enrollment", "Enrollment"),
        Item::new("/reports/attendance", "Attendance"),
        Item::new("/reports/performance", "Academic Performance"),
        Item::new("/reports/finance", "Financial Summary"),
        Item::new("/reports/staff", "Staff"),
    ],
);

const HEADMASTER_ADMINISTRATION: Section = Section::new(
    "Administration",
    &[
        Item::new("/admin/permissions", "Permissions"),
        Item::new("/admin/headmasters", "Headmasters"),
        Item::new("/settings", "Settings"),
    ],
);

pub(crate) const HEADMASTER: &[Section] = &[
    HEADMASTER_DASHBOARD,
    HEADMASTER_PEOPLE,
    HEADMASTER_ACADEMICS,
    HEADMASTER_FINANCE,
    HEADMASTER_REPORTS,
    HEADMASTER_ADMINISTRATION,
];

/// Shown by the headmaster management screen. Administration pages are not
/// delegable there.
pub(crate) const HEADMASTER_MANAGEMENT: &[Section] = &[
    HEADMASTER_DASHBOARD,
    HEADMASTER_PEOPLE,
    HEADMASTER_ACADEMICS,
    HEADMASTER_FINANCE,
    HEADMASTER_REPORTS,
];

// =============================================================================
// Teacher
// =============================================================================

pub(crate) const TEACHER: &[Section] = &[
    Section::new("Dashboard", &[Item::new("/dashboard", "Overview")]),
    Section::new(
        "Classes",
        &[
            Item::new("/classrooms", "My Classrooms"),
            Item::new("/students", "Students"),
            Item::new("/timetable", "Timetable"),
        ],
    ),
    Section::new(
        "Attendance",
        &[Item::new("/attendance/students", "Student Attendance")],
    ),
    Section::new(
        "Assessments",
        &[
            Item::new("/grades", "Gradebook"),
            Item::new("/assignments", "Assignments"),
            Item::new("/exams", "Exams"),
        ],
    ),
    Section::new(
        "Reports",
        &[
            Item::new("/reports/performance", "Class Performance"),
            Item::new("/reports/attendance", "Attendance"),
        ],
    ),
    Section::new("Directory", &[Item::new("/users", "Staff & Parents")]),
];

// =============================================================================
// Parent
// =============================================================================

pub(crate) const PARENT: &[Section] = &[
    Section::new("Dashboard", &[Item::new("/dashboard", "Overview")]),
    Section::new(
        "My Children",
        &[
            Item::new("/children", "Children"),
            Item::new("/children/attendance", "Attendance"),
            Item::new("/children/grades", "Grades"),
            Item::new("/children/timetable", "Timetable"),
        ],
    ),
    Section::new(
        "Finance",
        &[
            Item::new("/fees/payments", "Fee Payments"),
            Item::new("/fees/receipts", "Receipts"),
        ],
    ),
    Section::new(
        "Communication",
        &[
            Item::new("/messages", "Messages"),
            Item::new("/users", "School Directory"),
        ],
    ),
];
