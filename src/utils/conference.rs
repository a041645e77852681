//! Conference group naming utilities
//!
//! Every conference title maps to one group file, named by a filesystem-safe
//! key: `ACM SIGGRAPH` is stored in `acm_siggraph.yml`.

/// Extension of the per-group data files.
pub const GROUP_FILE_EXTENSION: &str = "yml";

/// Derive the group key for a conference title
///
/// Lower-cases the title, keeps only ASCII letters, digits, whitespace,
/// `&`, parentheses and hyphens, joins words with underscores and spells
/// out `&`.
///
/// # Examples
/// ```
/// use confsync::utils::group_key;
///
/// assert_eq!(group_key("ACM SIGGRAPH"), "acm_siggraph");
/// assert_eq!(group_key("IJCNLP & AACL"), "ijcnlp_and_aacl");
/// assert_eq!(group_key("ECML-PKDD"), "ecml-pkdd");
/// assert_eq!(group_key("  COLM!  "), "colm");
/// ```
pub fn group_key(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || "&()-".contains(*c))
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace('&', "and")
        .trim_matches('_')
        .to_string()
}

/// Group file name for a conference title, e.g. `acm_siggraph.yml`
pub fn group_file_name(title: &str) -> String {
    format!("{}.{}", group_key(title), GROUP_FILE_EXTENSION)
}

/// Identifier the generated loader imports a group file under
///
/// # Examples
/// ```
/// use confsync::utils::module_identifier;
///
/// assert_eq!(module_identifier("acm_mm.yml"), "acm_mmData");
/// assert_eq!(module_identifier("ecml-pkdd.yml"), "ecml_pkddData");
/// assert_eq!(module_identifier("emnlp_(findings).yml"), "emnlp_findingsData");
/// assert_eq!(module_identifier("3dv.yml"), "conf_3dvData");
/// ```
pub fn module_identifier(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(&format!(".{GROUP_FILE_EXTENSION}"))
        .unwrap_or(file_name);

    let ident: String = stem
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("conf_{ident}Data")
    } else {
        format!("{ident}Data")
    }
}
