//! Generated TypeScript loader aggregating every group file.
//!
//! The front-end imports `conferenceLoader.ts` as its single entry point for
//! conference data. It is rebuilt from scratch on every sync and never
//! edited by hand.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use askama::Template;

use crate::error::{Result, SyncError};
use crate::store::group_files;
use crate::utils::module_identifier;

struct LoaderModule {
    ident: String,
    file_name: String,
}

#[derive(Template)]
#[template(path = "conference_loader.ts", escape = "none")]
struct ConferenceLoaderTemplate<'a> {
    import_prefix: &'a str,
    modules: Vec<LoaderModule>,
}

/// Render the loader for the group files in `data_dir`.
///
/// Returns the source and the number of group files it imports. Files whose
/// names reduce to the same identifier get `2`, `3`, ... appended in file
/// name order.
pub fn render_loader(data_dir: &Path, import_prefix: &str) -> Result<(String, usize)> {
    let mut used = HashSet::new();
    let modules: Vec<LoaderModule> = group_files(data_dir)?
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .map(|file_name| LoaderModule {
            ident: unique_identifier(module_identifier(file_name), &mut used),
            file_name: file_name.to_string(),
        })
        .collect();

    let count = modules.len();
    let template = ConferenceLoaderTemplate {
        import_prefix: import_prefix.trim_end_matches('/'),
        modules,
    };
    Ok((template.render()?, count))
}

fn unique_identifier(base: String, used: &mut HashSet<String>) -> String {
    let mut ident = base.clone();
    let mut n = 2;
    while !used.insert(ident.clone()) {
        ident = format!("{base}{n}");
        n += 1;
    }
    ident
}

/// Regenerate the loader at `loader_path`, overwriting it.
pub fn write_loader(data_dir: &Path, loader_path: &Path, import_prefix: &str) -> Result<usize> {
    let (source, count) = render_loader(data_dir, import_prefix)?;
    if let Some(parent) = loader_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::write(loader_path, source).map_err(|e| SyncError::io(loader_path, e))?;
    Ok(count)
}
