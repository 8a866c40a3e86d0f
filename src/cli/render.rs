use std::io::Write;

use schoolnav_catalog::Catalog;
use schoolnav_models::{Email, Role, SectionState};
use serde::Serialize;

use crate::modules::permissions::{PermissionEditor, SectionView};

fn state_marker(state: SectionState) -> &'static str {
    match state {
        SectionState::Checked => "[x]",
        SectionState::Unchecked => "[ ]",
        SectionState::Indeterminate => "[-]",
    }
}

pub fn catalog<W: Write>(catalog: Catalog, out: &mut W) -> anyhow::Result<()> {
    for section in catalog.sections() {
        writeln!(out, "{}", section.title)?;
        for item in section.items {
            writeln!(out, "  {:<28} {}", item.path, item.label)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SubjectReport<'a> {
    role: Role,
    subject: &'a Email,
    enabled: bool,
    allowed: &'a std::collections::BTreeSet<String>,
    sections: Vec<SectionView>,
}

/// Print a subject's override with checkbox state for every catalog item.
pub fn subject<W: Write>(editor: &PermissionEditor, json: bool, out: &mut W) -> anyhow::Result<()> {
    let config = editor.config();

    if json {
        let report = SubjectReport {
            role: editor.role(),
            subject: editor.subject(),
            enabled: config.enabled,
            allowed: &config.allowed,
            sections: editor.sections(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let status = if config.enabled {
        "restricted"
    } else {
        "unrestricted (override off)"
    };
    writeln!(out, "{} ({}): {}", editor.subject(), editor.role(), status)?;

    for section in editor.sections() {
        writeln!(out, "{} {}", state_marker(section.state), section.title)?;
        for view in section.items {
            let marker = if view.checked { "[x]" } else { "[ ]" };
            writeln!(out, "    {} {:<28} {}", marker, view.item.path, view.item.label)?;
        }
    }
    Ok(())
}
