//! Server-rendered HTML pages
//!
//! Pages are minijinja templates with HTML auto-escaping on for every
//! template. Group names placed in filter URLs go through `urlencode`.

use minijinja::{AutoEscape, Environment, Value, context};

use crate::errors::Result;
use crate::services::LinkForm;
use crate::storage::{Link, LinkStats};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("templates/layout.html")),
    ("link_fields.html", include_str!("templates/link_fields.html")),
    ("index.html", include_str!("templates/index.html")),
    ("add.html", include_str!("templates/add.html")),
    ("edit.html", include_str!("templates/edit.html")),
    ("stats.html", include_str!("templates/stats.html")),
    ("import.html", include_str!("templates/import.html")),
    ("error.html", include_str!("templates/error.html")),
];

fn urlencode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_filter("urlencode", urlencode);
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn render(name: &str, ctx: Value) -> Result<String> {
    let env = environment()?;
    let template = env.get_template(name)?;
    Ok(template.render(ctx)?)
}

/// Link table with search box and group filter.
///
/// `search` is echoed back into the search box; `selected_group` marks the
/// active option of the group filter.
pub fn render_index(
    links: &[Link],
    groups: &[String],
    search: &str,
    selected_group: Option<&str>,
) -> Result<String> {
    render(
        "index.html",
        context! { links, groups, search, selected_group },
    )
}

/// Add form. A rejected submission is re-rendered with its values and `error`.
pub fn render_add_form(form: &LinkForm, error: Option<&str>) -> Result<String> {
    render(
        "add.html",
        context! { page_title => "Add Link", form, error },
    )
}

pub fn render_edit_form(link: &Link) -> Result<String> {
    render(
        "edit.html",
        context! {
            page_title => "Edit Link",
            id => link.id,
            form => LinkForm::from(link),
        },
    )
}

pub fn render_stats(stats: &LinkStats) -> Result<String> {
    render("stats.html", context! { page_title => "Stats", stats })
}

pub fn render_import() -> Result<String> {
    render("import.html", context! { page_title => "Import" })
}

pub fn render_error(status: u16, message: &str) -> Result<String> {
    render(
        "error.html",
        context! { page_title => "Error", status, message },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::GroupCount;

    // 自动转义会把 `/` 写成 `&#x2f;`，断言前还原
    fn page(rendered: Result<String>) -> String {
        rendered.unwrap().replace("&#x2f;", "/")
    }

    fn link(id: i64, description: &str, group: &str) -> Link {
        Link {
            id,
            description: description.to_string(),
            tags: Some("t".to_string()),
            url: "https://example.com/?a=1&b=2".to_string(),
            file_group: group.to_string(),
        }
    }

    #[test]
    fn test_index_escapes_and_encodes() {
        let html = page(render_index(
            &[link(1, "<b>bold</b>", "dev & ops")],
            &["dev & ops".to_string()],
            "\"q\"",
            None,
        ));

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains(r#"value="/?group=dev%20%26%20ops""#));
        assert!(html.contains(">dev &amp; ops</option>"));
        assert!(html.contains(r#"value="&quot;q&quot;""#));
        assert!(html.contains("https://example.com/?a=1&amp;b=2"));
        assert!(html.contains(r#"action="/delete/1""#));
    }

    #[test]
    fn test_index_escapes_script_in_group() {
        let html = page(render_index(
            &[],
            &["<script>x</script>".to_string()],
            "",
            None,
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains(">&lt;script&gt;x&lt;/script&gt;</option>"));
    }

    #[test]
    fn test_index_marks_selected_group() {
        let groups = vec!["a".to_string(), "b".to_string()];
        let html = page(render_index(&[], &groups, "", Some("b")));
        assert!(html.contains(r#"<option value="/?group=b" selected>b</option>"#));
        assert!(html.contains(r#"<option value="/?group=a">a</option>"#));
        assert!(html.contains("No links found."));
    }

    #[test]
    fn test_index_link_without_tags() {
        let mut untagged = link(2, "plain", "g");
        untagged.tags = None;
        let html = page(render_index(&[untagged], &["g".to_string()], "", None));
        assert!(html.contains("<td>plain</td>\n<td></td>"));
    }

    #[test]
    fn test_add_form_shows_error() {
        let form = LinkForm {
            url: "ftp://x".to_string(),
            ..LinkForm::default()
        };
        let html = page(render_add_form(
            &form,
            Some("URL must start with http:// or https://"),
        ));
        assert!(html.contains(r#"<div class="error">URL must start with http:// or https://</div>"#));
        assert!(html.contains(r#"value="ftp://x""#));
        assert!(html.contains("<title>Add Link - Web Links Manager</title>"));
    }

    #[test]
    fn test_add_form_without_error() {
        let html = page(render_add_form(&LinkForm::default(), None));
        assert!(!html.contains(r#"class="error""#));
        assert!(html.contains(r#"action="/add""#));
    }

    #[test]
    fn test_stats_none_sentinel() {
        let html = page(render_stats(&LinkStats::default()));
        assert!(html.contains("Most Populous Group: <strong>None</strong>"));
    }

    #[test]
    fn test_stats_with_group() {
        let html = page(render_stats(&LinkStats {
            total_links: 4,
            total_groups: 2,
            most_populous: Some(GroupCount {
                group: "A".to_string(),
                count: 3,
            }),
        }));
        assert!(html.contains("Total Links: <strong>4</strong>"));
        assert!(html.contains("A (3 links)"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = page(render_error(404, "<i>gone</i>"));
        assert!(html.contains("<h2>Error 404</h2>"));
        assert!(html.contains("&lt;i&gt;gone&lt;/i&gt;"));
    }
}
