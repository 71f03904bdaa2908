use super::*;

#[test]
fn root_path_defaults_to_home_document() {
    assert_eq!(page_file_name("/"), "index.html");
    assert_eq!(page_file_name(""), "index.html");
}

#[test]
fn plain_page_path_yields_its_file_name() {
    assert_eq!(page_file_name("/menu.html"), "menu.html");
    assert_eq!(page_file_name("/contact.html"), "contact.html");
}

#[test]
fn nested_path_yields_the_last_segment() {
    assert_eq!(page_file_name("/sub/dir/about.html"), "about.html");
}

#[test]
fn trailing_slash_defaults_to_home_document() {
    assert_eq!(page_file_name("/menu/"), "index.html");
}
