//! Document-sharing link normalization
//!
//! Google Docs and Sheets viewer links serve an HTML editor, not the
//! document. [`normalize`] rewrites them into export links that return
//! plain text or CSV; [`denormalize`] turns export links back into viewer
//! links for display. Any other URL passes through both unchanged.

/// Length of the document identifier embedded in Google Docs/Sheets links.
pub const DOCUMENT_ID_LEN: usize = 44;

const DOCUMENT_VIEW_PREFIX: &str = "https://docs.google.com/document/d/";
const SPREADSHEET_VIEW_PREFIX: &str = "https://docs.google.com/spreadsheets/d/";
const DOCUMENT_EXPORT_PREFIX: &str = "https://docs.google.com/document/export?format=txt&id=";
const SPREADSHEET_EXPORT_PREFIX: &str = "https://docs.google.com/spreadsheets/export?format=csv&id=";

/// A known link prefix without a full document identifier after it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed document URL <{url}>: expected a {expected}-character document id after {prefix}")]
pub struct MalformedUrl {
    pub url: String,
    pub prefix: &'static str,
    pub expected: usize,
}

/// Rewrite a viewer link into its direct-export equivalent.
///
/// # Errors
///
/// Returns [`MalformedUrl`] when `url` starts with a viewer prefix but is
/// too short to hold a document identifier.
///
/// # Example
///
/// ```
/// use bobbin_core::normalize;
///
/// let id = "1AbCdEfGhIjKlMnOpQrStUvWxYz0123456789-_abcde";
/// let view = format!("https://docs.google.com/spreadsheets/d/{id}/edit#gid=0");
/// assert_eq!(
///     normalize(&view).unwrap(),
///     format!("https://docs.google.com/spreadsheets/export?format=csv&id={id}")
/// );
/// assert_eq!(normalize("https://example.com/a.json").unwrap(), "https://example.com/a.json");
/// ```
pub fn normalize(url: &str) -> Result<String, MalformedUrl> {
    if url.starts_with(DOCUMENT_VIEW_PREFIX) {
        let id = document_id(url, DOCUMENT_VIEW_PREFIX)?;
        return Ok(format!(
            "{DOCUMENT_EXPORT_PREFIX}{id}&includes_info_params=true"
        ));
    }
    if url.starts_with(SPREADSHEET_VIEW_PREFIX) {
        let id = document_id(url, SPREADSHEET_VIEW_PREFIX)?;
        return Ok(format!("{SPREADSHEET_EXPORT_PREFIX}{id}"));
    }
    Ok(url.to_string())
}

/// Rebuild a human-viewable link from an export link.
///
/// The export prefixes include the `&id=` parameter, so an export link
/// without one (`.../document/export?format=txt`) passes through unchanged.
///
/// # Errors
///
/// Returns [`MalformedUrl`] when `url` starts with an export prefix but is
/// too short to hold a document identifier.
pub fn denormalize(url: &str) -> Result<String, MalformedUrl> {
    if url.starts_with(DOCUMENT_EXPORT_PREFIX) {
        let id = document_id(url, DOCUMENT_EXPORT_PREFIX)?;
        return Ok(format!("{DOCUMENT_VIEW_PREFIX}{id}/edit"));
    }
    if url.starts_with(SPREADSHEET_EXPORT_PREFIX) {
        let id = document_id(url, SPREADSHEET_EXPORT_PREFIX)?;
        return Ok(format!("{SPREADSHEET_VIEW_PREFIX}{id}"));
    }
    Ok(url.to_string())
}

/// The fixed-length identifier right after `prefix`.
fn document_id<'a>(url: &'a str, prefix: &'static str) -> Result<&'a str, MalformedUrl> {
    let start = prefix.len();
    url.get(start..start + DOCUMENT_ID_LEN)
        .ok_or_else(|| MalformedUrl {
            url: url.to_string(),
            prefix,
            expected: DOCUMENT_ID_LEN,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz0123456789-_abcde";

    #[test]
    fn id_fixture_has_expected_length() {
        assert_eq!(ID.len(), DOCUMENT_ID_LEN);
    }

    #[test]
    fn document_view_becomes_text_export() {
        let url = format!("https://docs.google.com/document/d/{ID}/edit");
        assert_eq!(
            normalize(&url).unwrap(),
            format!(
                "https://docs.google.com/document/export?format=txt&id={ID}&includes_info_params=true"
            )
        );
    }

    #[test]
    fn spreadsheet_view_becomes_csv_export() {
        let url = format!("https://docs.google.com/spreadsheets/d/{ID}/edit#gid=0");
        assert_eq!(
            normalize(&url).unwrap(),
            format!("https://docs.google.com/spreadsheets/export?format=csv&id={ID}")
        );
    }

    #[test]
    fn export_links_denormalize_to_viewer_links() {
        let doc = format!(
            "https://docs.google.com/document/export?format=txt&id={ID}&includes_info_params=true"
        );
        assert_eq!(
            denormalize(&doc).unwrap(),
            format!("https://docs.google.com/document/d/{ID}/edit")
        );

        let sheet = format!("https://docs.google.com/spreadsheets/export?format=csv&id={ID}");
        assert_eq!(
            denormalize(&sheet).unwrap(),
            format!("https://docs.google.com/spreadsheets/d/{ID}")
        );
    }

    #[test]
    fn normalize_is_stable_on_export_links() {
        let export = normalize(&format!("https://docs.google.com/document/d/{ID}")).unwrap();
        assert_eq!(normalize(&export).unwrap(), export);
    }

    #[rstest]
    #[case("https://docs.google.com/document/d/short/edit")]
    #[case("https://docs.google.com/document/d/")]
    #[case("https://docs.google.com/spreadsheets/d/1AbC")]
    fn short_viewer_links_are_malformed(#[case] url: &str) {
        let err = normalize(url).unwrap_err();
        assert_eq!(err.url, url);
        assert_eq!(err.expected, DOCUMENT_ID_LEN);
    }

    #[test]
    fn short_export_link_is_malformed() {
        let err = denormalize("https://docs.google.com/spreadsheets/export?format=csv&id=abc")
            .unwrap_err();
        assert_eq!(err.prefix, SPREADSHEET_EXPORT_PREFIX);
    }

    #[test]
    fn multibyte_boundary_is_malformed_not_a_panic() {
        let url = format!("https://docs.google.com/document/d/{}é", &ID[..43]);
        assert!(normalize(&url).is_err());
    }

    #[rstest]
    #[case("https://docs.google.com/document/export?format=txt")]
    #[case("https://docs.google.com/spreadsheets/export?format=csv&gid=0")]
    fn export_links_without_id_pass_through(#[case] url: &str) {
        assert_eq!(denormalize(url).unwrap(), url);
    }

    #[rstest]
    #[case("https://example.com/data.json")]
    #[case("http://docs.google.com/document/d/plain-http-is-not-rewritten")]
    #[case("https://docs.google.com/presentation/d/abc/edit")]
    #[case("")]
    fn other_urls_pass_through(#[case] url: &str) {
        assert_eq!(normalize(url).unwrap(), url);
        assert_eq!(denormalize(url).unwrap(), url);
    }
}
