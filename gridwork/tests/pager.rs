use gridwork::{PageToken, page_window};

fn pages(tokens: &[PageToken]) -> Vec<usize> {
    tokens
        .iter()
        .filter_map(|t| match t {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        })
        .collect()
}

const E: PageToken = PageToken::Ellipsis;

fn p(n: usize) -> PageToken {
    PageToken::Page(n)
}

// ============================================================================
// Shape scenarios
// ============================================================================

#[test]
fn test_single_page_hides_pagination() {
    assert!(page_window(0, 1).is_empty());
    assert!(page_window(1, 1).is_empty());
}

#[test]
fn test_small_counts_show_every_page() {
    assert_eq!(page_window(2, 1), vec![p(1), p(2)]);
    assert_eq!(page_window(3, 1), vec![p(1), p(2), p(3)]);
    assert_eq!(page_window(2, 2), vec![p(1), p(2)]);
}

#[test]
fn test_first_page_of_many() {
    assert_eq!(page_window(10, 1), vec![p(1), p(2), p(3), E, p(10)]);
    assert_eq!(page_window(4, 1), vec![p(1), p(2), p(3), E, p(4)]);
}

#[test]
fn test_middle_page_centers_on_current() {
    assert_eq!(page_window(10, 5), vec![p(1), E, p(4), p(5), p(6), E, p(10)]);
    // Close enough to the front that no leading ellipsis is needed.
    assert_eq!(page_window(10, 3), vec![p(1), p(2), p(3), p(4), E, p(10)]);
}

#[test]
fn test_last_pages_show_fixed_tail() {
    assert_eq!(page_window(10, 10), vec![p(1), E, p(8), p(9), p(10)]);
    assert_eq!(page_window(10, 9), vec![p(1), E, p(8), p(9), p(10)]);
    // Landing exactly two before the end widens the tail by one.
    assert_eq!(page_window(10, 8), vec![p(1), E, p(7), p(8), p(9), p(10)]);
}

// ============================================================================
// Invariants over the whole input range
// ============================================================================

#[test]
fn test_window_invariants() {
    for page_count in 2..=40 {
        for current_page in 1..=page_count {
            let window = page_window(page_count, current_page);
            let numbers = pages(&window);

            assert_eq!(
                window.first(),
                Some(&p(1)),
                "first token ({page_count}, {current_page})"
            );
            assert_eq!(
                window.last(),
                Some(&p(page_count)),
                "last token ({page_count}, {current_page})"
            );
            assert!(
                numbers.contains(&current_page),
                "current page missing ({page_count}, {current_page})"
            );
            assert!(
                numbers.windows(2).all(|pair| pair[0] < pair[1]),
                "numbers not increasing ({page_count}, {current_page})"
            );
            assert!(
                !window.windows(2).any(|pair| pair[0] == E && pair[1] == E),
                "adjacent ellipses ({page_count}, {current_page})"
            );
        }
    }
}
