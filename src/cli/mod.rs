//! `schoolnav` command-line interface.
//!
//! Administrative access to the permission store: inspect catalogs, edit a
//! subject's sidebar override, check access, and import the legacy
//! headmaster record.

pub mod render;

use std::io::Write;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use dialoguer::{Confirm, Input};
use schoolnav_catalog::Catalog;
use schoolnav_models::{Email, Role};
use schoolnav_store::ImportPolicy;
use serde_json::json;

use crate::modules::permissions::PermissionEditor;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "schoolnav")]
#[command(about = "SchoolNav CLI - Sidebar permission administration", long_about = None)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the sections and items of a role's catalog
    Catalog {
        #[arg(short, long)]
        role: Role,

        /// Show the headmaster management screen's catalog
        #[arg(long)]
        management: bool,
    },
    /// Show a subject's override and per-section state
    Show(SubjectArgs),
    /// List subjects with a stored override for a role
    Subjects {
        #[arg(short, long)]
        role: Role,
    },
    /// Flip one path in a subject's allow-list
    ToggleItem {
        #[command(flatten)]
        target: SubjectArgs,

        #[arg(short, long)]
        path: String,
    },
    /// Check or uncheck a whole section
    ToggleSection {
        #[command(flatten)]
        target: SubjectArgs,

        /// Section title, exactly as listed by `catalog`
        #[arg(short, long)]
        section: String,
    },
    /// Turn a subject's restriction on
    Enable(SubjectArgs),
    /// Turn a subject's restriction off
    Disable(SubjectArgs),
    /// Decide whether a subject may open a path
    Check {
        #[command(flatten)]
        target: SubjectArgs,

        #[arg(short, long)]
        path: String,
    },
    /// List allowed paths that no longer exist in the catalog
    Stale(SubjectArgs),
    /// Copy the legacy headmaster record into the unified store
    ImportLegacy {
        /// Replace subjects that already have a unified entry
        #[arg(long)]
        overwrite: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SubjectArgs {
    #[arg(short, long)]
    pub role: Role,

    /// Subject e-mail (prompted if omitted)
    #[arg(short, long)]
    pub email: Option<Email>,

    /// Edit through the headmaster management screen's catalog
    #[arg(long)]
    pub management: bool,
}

impl SubjectArgs {
    fn subject(&self) -> anyhow::Result<Email> {
        if let Some(email) = &self.email {
            return Ok(email.clone());
        }

        let raw: String = Input::new()
            .with_prompt("Subject email")
            .interact_text()
            .context("Failed to read subject email")?;
        Ok(raw.parse()?)
    }

    fn catalog(&self) -> anyhow::Result<Catalog> {
        catalog_for(self.role, self.management)
    }

    fn editor(&self, state: &AppState) -> anyhow::Result<PermissionEditor> {
        let catalog = self.catalog()?;
        let subject = self.subject()?;
        Ok(PermissionEditor::with_catalog(
            std::sync::Arc::clone(&state.store),
            catalog,
            subject,
        ))
    }
}

/// The catalog a command works through. `--management` selects the headmaster
/// management screen's catalog.
fn catalog_for(role: Role, management: bool) -> anyhow::Result<Catalog> {
    match (management, role) {
        (false, role) => Ok(Catalog::for_role(role)),
        (true, Role::Headmaster) => Ok(Catalog::HeadmasterManagement),
        (true, role) => bail!("--management only applies to headmaster, not {role}"),
    }
}

/// Execute one parsed command, writing its output to `out`.
pub fn run<W: Write>(cli: Cli, state: &AppState, out: &mut W) -> anyhow::Result<()> {
    let json = cli.json;

    match cli.command {
        Commands::Catalog { role, management } => {
            handle_catalog(catalog_for(role, management)?, json, out)
        }
        Commands::Show(target) => {
            let editor = target.editor(state)?;
            render::subject(&editor, json, out)
        }
        Commands::Subjects { role } => handle_subjects(state, role, json, out),
        Commands::ToggleItem { target, path } => {
            let mut editor = target.editor(state)?;
            editor.toggle_item(&path);
            finish_edit(&editor, json, out)
        }
        Commands::ToggleSection { target, section } => {
            let mut editor = target.editor(state)?;
            if !editor.toggle_section(&section) {
                bail!(
                    "No section titled '{}' in the {} catalog",
                    section,
                    editor.role()
                );
            }
            finish_edit(&editor, json, out)
        }
        Commands::Enable(target) => {
            let mut editor = target.editor(state)?;
            editor.toggle_enabled(true);
            finish_edit(&editor, json, out)
        }
        Commands::Disable(target) => {
            let mut editor = target.editor(state)?;
            editor.toggle_enabled(false);
            finish_edit(&editor, json, out)
        }
        Commands::Check { target, path } => handle_check(state, &target, &path, json, out),
        Commands::Stale(target) => handle_stale(state, &target, json, out),
        Commands::ImportLegacy { overwrite, yes } => {
            handle_import_legacy(state, overwrite, yes, json, out)
        }
    }
}

fn handle_catalog<W: Write>(catalog: Catalog, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog.sections())?;
        writeln!(out)?;
        return Ok(());
    }
    render::catalog(catalog, out)
}

fn handle_subjects<W: Write>(
    state: &AppState,
    role: Role,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let subjects = state.store.subjects(role);
    if json {
        serde_json::to_writer_pretty(&mut *out, &subjects)?;
        writeln!(out)?;
    } else if subjects.is_empty() {
        writeln!(out, "No stored overrides for {role}")?;
    } else {
        for subject in subjects {
            writeln!(out, "{subject}")?;
        }
    }
    Ok(())
}

fn finish_edit<W: Write>(editor: &PermissionEditor, json: bool, out: &mut W) -> anyhow::Result<()> {
    if !editor.is_persisted() {
        bail!(
            "Permissions for {} ({}) could not be saved",
            editor.subject(),
            editor.role()
        );
    }
    render::subject(editor, json, out)
}

fn handle_check<W: Write>(
    state: &AppState,
    target: &SubjectArgs,
    path: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    // Access is decided against the role's full catalog, even from the
    // management view.
    target.catalog()?;
    let subject = target.subject()?;
    let resolver = state.resolver();
    let in_catalog = Catalog::for_role(target.role).contains(path);
    let allowed = resolver.is_allowed(target.role, &subject, path);
    let accessible = resolver.can_access(target.role, &subject, path);

    if json {
        serde_json::to_writer_pretty(
            &mut *out,
            &json!({
                "role": target.role,
                "subject": subject,
                "path": path,
                "in_catalog": in_catalog,
                "allowed": allowed,
                "accessible": accessible,
            }),
        )?;
        writeln!(out)?;
    } else if accessible {
        writeln!(out, "✅ {subject} ({}) may open {path}", target.role)?;
    } else if !in_catalog {
        writeln!(out, "❌ {path} is not in the {} catalog", target.role)?;
    } else {
        writeln!(out, "❌ {subject} ({}) is restricted from {path}", target.role)?;
    }
    Ok(())
}

fn handle_stale<W: Write>(
    state: &AppState,
    target: &SubjectArgs,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let subject = target.subject()?;
    let stale = state.resolver().stale_paths(target.role, &subject);

    if json {
        serde_json::to_writer_pretty(&mut *out, &stale)?;
        writeln!(out)?;
    } else if stale.is_empty() {
        writeln!(out, "No stale paths for {subject} ({})", target.role)?;
    } else {
        for path in stale {
            writeln!(out, "{path}")?;
        }
    }
    Ok(())
}

fn handle_import_legacy<W: Write>(
    state: &AppState,
    overwrite: bool,
    yes: bool,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let policy = if overwrite {
        ImportPolicy::Overwrite
    } else {
        ImportPolicy::KeepExisting
    };

    if !yes {
        let prompt = format!(
            "Import '{}' into '{}' ({:?})?",
            state.storage_config.legacy_headmaster_key, state.storage_config.permissions_key, policy
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            writeln!(out, "Import cancelled")?;
            return Ok(());
        }
    }

    let report = state
        .store
        .import_legacy_headmaster(policy)
        .context("Failed to import legacy headmaster permissions")?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "✅ Imported {} headmaster override(s)", report.imported)?;
        writeln!(out, "   Skipped (already present): {}", report.skipped)?;
        for key in &report.invalid {
            writeln!(out, "   Invalid e-mail key ignored: {key}")?;
        }
    }
    Ok(())
}
