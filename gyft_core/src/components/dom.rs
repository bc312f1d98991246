//! Just enough HTML inspection for the component tests: our own output is
//! well-formed and never nests an element inside one of the same name.

/// Returns the inner HTML of every `tag` element, in document order.
pub fn inner_html<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut found = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        // <header> is not a <head>.
        if !after.starts_with([' ', '>']) {
            rest = after;
            continue;
        }

        let Some(gt) = after.find('>') else { break };
        let body = &after[gt + 1..];
        let Some(end) = body.find(&close) else { break };
        found.push(&body[..end]);
        rest = &body[end + close.len()..];
    }

    found
}

/// Returns the opening tag (attributes included) of every `tag` element.
pub fn start_tags<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter_map(|(start, _)| {
            let after = &html[start + open.len()..];
            if !after.starts_with([' ', '>']) {
                return None;
            }
            after.find('>').map(|gt| &html[start..start + open.len() + gt + 1])
        })
        .collect()
}

/// Returns every element in document order as its tag name, followed by
/// `.class` when it has a class attribute.
pub fn outline(html: &str) -> Vec<String> {
    let mut found = Vec::new();

    for (start, _) in html.match_indices('<') {
        let rest = &html[start + 1..];
        if rest.starts_with(['/', '!']) {
            continue;
        }

        let Some(gt) = rest.find('>') else { break };
        let tag = &rest[..gt];
        let name = tag.split_whitespace().next().unwrap_or(tag);
        let class = tag
            .split_once(r#"class=""#)
            .and_then(|(_, after)| after.split('"').next());

        match class {
            Some(class) => found.push(format!("{name}.{class}")),
            None => found.push(name.to_string()),
        }
    }

    found
}

/// Strips tags, leaving the text content.
pub fn text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;

    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_elements_but_not_prefixed_ones() {
        let html = "<head><title>t</title></head><header>h</header><head>x</head>";
        assert_eq!(inner_html(html, "head"), vec!["<title>t</title>", "x"]);
    }

    #[test]
    fn start_tags_include_attributes() {
        let html = r#"<p class="a">1</p><pre>2</pre><p>3</p>"#;
        assert_eq!(start_tags(html, "p"), vec![r#"<p class="a">"#, "<p>"]);
    }

    #[test]
    fn outline_lists_elements_with_classes() {
        let html = r#"<!DOCTYPE html><div class="a" style="x: y"><p>1<br></p></div>"#;
        assert_eq!(outline(html), vec!["div.a", "p", "br"]);
    }

    #[test]
    fn text_drops_markup() {
        assert_eq!(text("Discover <strong>gifts</strong> now"), "Discover gifts now");
    }
}
