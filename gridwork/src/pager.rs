//! Pagination window generation.
//!
//! Maps (page count, current page) to the ellipsis-collapsed sequence
//! of page tokens a pagination control displays. Pure and
//! deterministic; the pagination bar widget lives in
//! [`crate::pagination_bar`].

/// One entry in a pagination display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A 1-based page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

/// Generate the display window for a pagination control.
///
/// `current_page` is 1-based and expected to lie in
/// `1..=page_count`. Guarantees, for `page_count >= 2`:
/// - the first token is page 1 and the last token is `page_count`,
/// - numeric tokens are strictly increasing,
/// - no two consecutive tokens are ellipses.
///
/// A single page (or none) yields an empty window: no pagination is
/// shown at all.
pub fn page_window(page_count: usize, current_page: usize) -> Vec<PageToken> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut window = vec![PageToken::Page(1)];

    if current_page == 1 {
        if page_count <= 3 {
            window.extend((2..=page_count).map(PageToken::Page));
        } else {
            window.push(PageToken::Page(2));
            window.push(PageToken::Page(3));
            window.push(PageToken::Ellipsis);
            window.push(PageToken::Page(page_count));
        }
    } else if current_page + 2 >= page_count {
        // Near the end: show a fixed-width tail. Landing exactly on
        // page_count - 2 widens the tail by one so the window does not
        // shrink while stepping backwards.
        let start = if current_page == page_count - 2 {
            page_count.saturating_sub(3).max(2)
        } else {
            page_count.saturating_sub(2).max(2)
        };
        if start > 2 {
            window.push(PageToken::Ellipsis);
        }
        window.extend((start..=page_count).map(PageToken::Page));
    } else {
        // Middle: current page with one neighbor on each side.
        if current_page - 1 > 2 {
            window.push(PageToken::Ellipsis);
        }
        if current_page - 1 > 1 {
            window.push(PageToken::Page(current_page - 1));
        }
        window.push(PageToken::Page(current_page));
        if current_page + 1 < page_count {
            window.push(PageToken::Page(current_page + 1));
        }
        if current_page + 1 < page_count - 1 {
            window.push(PageToken::Ellipsis);
        }
        window.push(PageToken::Page(page_count));
    }

    window
}
