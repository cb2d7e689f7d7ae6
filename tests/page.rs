use feather::markdown::line::rewrite;
use feather::markdown::{Page, render};
use pretty_assertions::assert_eq;

#[test]
fn it_renders_a_complete_document() {
    let html = render(
        "Test site",
        ["# Title", "Some **bold** and [a link](http://x)"],
    );

    let title = html.find("<title>Test site</title>").expect("missing title");
    let header = html.find("<h1>Title</h1>").expect("missing header");
    let text = html
        .find("Some <b>bold</b> and <a href=\"http://x\">a link</a>")
        .expect("missing text");

    assert!(title < header);
    assert!(header < text);
    assert_eq!(&html[header + "<h1>Title</h1>".len()..text], "\n");
}

#[test]
fn it_wraps_the_body_in_a_page() {
    let html = Page::new("Test site", ["x"]).render();
    assert!(html.starts_with("<html>"));
    assert!(html.ends_with("</html>"));
    assert!(html.contains("<body>\nx\n"));
}

#[test]
fn it_does_not_rewrite_rendered_html_again() {
    for line in ["# Title", "---", "[a](b) *c* **d** _e_", "## [x](y)"] {
        let once = rewrite(line);
        assert_eq!(rewrite(&once), once);
    }
}

#[test]
fn it_renders_headers_at_every_level() {
    for level in 1..=9 {
        let line = format!("{} text", "#".repeat(level));
        let capped = level.min(7);
        assert_eq!(rewrite(&line), format!("<h{capped}>text</h{capped}>"));
    }
}
