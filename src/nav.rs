/// Where a click on a project row navigates to.
///
/// Links nested inside the row handle their own clicks, so nothing happens
/// when `on_nested_link` is set. A missing or empty `href` also means no
/// navigation.
pub fn row_click_href(href: Option<String>, on_nested_link: bool) -> Option<String> {
    if on_nested_link {
        return None;
    }
    href.filter(|h| !h.is_empty())
}
