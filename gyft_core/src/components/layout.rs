use maud::{html, Markup, DOCTYPE};

use crate::{
    assets::{stylesheet_href, GLOBAL_STYLESHEET, PAGE_STYLESHEET},
    content::LANG,
    metadata::Metadata,
};

/// Takes 'children' and wraps the document shell around it: the `<head>`
/// built from `metadata` and a `<body>` holding the children unmodified.
pub fn root_layout(metadata: &Metadata, children: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(LANG) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (metadata.title) }
                meta name="description" content=(metadata.description);
                meta property="og:title" content=(metadata.title);
                meta property="og:description" content=(metadata.description);
                meta property="og:type" content="website";
                link rel="stylesheet" href=(stylesheet_href(GLOBAL_STYLESHEET));
                link rel="stylesheet" href=(stylesheet_href(PAGE_STYLESHEET));
            }
            body {
                (children)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use maud::html;

    use super::*;
    use crate::{
        components::dom::{inner_html, start_tags},
        metadata::METADATA,
    };

    fn render(children: Markup) -> String {
        root_layout(&METADATA, children).into_string()
    }

    #[test]
    fn declares_doctype_and_language() {
        let html = render(html! {});
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(start_tags(&html, "html"), vec![r#"<html lang="en">"#]);
    }

    #[test]
    fn head_has_title_and_description() {
        let html = render(html! {});
        assert_eq!(inner_html(&html, "title"), vec![METADATA.title]);
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            METADATA.description
        )));
    }

    #[test]
    fn head_has_social_preview_tags() {
        let html = render(html! {});
        assert!(html.contains(&format!(
            r#"<meta property="og:title" content="{}">"#,
            METADATA.title
        )));
        assert!(html.contains(&format!(
            r#"<meta property="og:description" content="{}">"#,
            METADATA.description
        )));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
    }

    #[test]
    fn links_both_stylesheets() {
        let html = render(html! {});
        let links = start_tags(&html, "link");
        assert_eq!(links.len(), 2);
        assert!(links[0].contains(&stylesheet_href(GLOBAL_STYLESHEET)));
        assert!(links[1].contains(&stylesheet_href(PAGE_STYLESHEET)));
    }

    #[test]
    fn children_are_passed_through_unmodified() {
        let children = html! { section id="child" { "Hello & welcome" } };
        let expected = children.clone().into_string();
        let html = render(children);
        assert_eq!(inner_html(&html, "body"), vec![expected.as_str()]);
    }

    #[test]
    fn uses_the_metadata_it_is_given() {
        let metadata = Metadata {
            title: "Other page",
            description: "Something else",
        };
        let html = root_layout(&metadata, html! {}).into_string();
        assert_eq!(inner_html(&html, "title"), vec!["Other page"]);
        assert!(html.contains(r#"content="Something else""#));
    }
}
