// SPDX-License-Identifier: MPL-2.0
//! Message keys with a contract outside the catalog files.

/// Keys of the first, minimal string table. The current table must still
/// define every one of them.
pub const LEGACY_KEYS: &[&str] = &[
    "dashboardTitle",
    "dashboardSubtitle",
    "createNew",
    "import",
    "edited",
    "deleteConfirm",
    "duplicate",
    "delete",
    "edit",
    "personalInfo",
    "education",
    "experience",
    "skills",
    "preview",
    "back",
    "save",
    "exportPDF",
];

