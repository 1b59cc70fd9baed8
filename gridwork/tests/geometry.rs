use gridwork::{
    CellPosition, Column, PinSide, TextDirection, pinned_widths, pinning_style,
};

fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("select", "", 36.0).pinned(PinSide::Left).fixed(),
        Column::new("name", "Name", 200.0).pinned(PinSide::Left),
        Column::new("email", "Email", 240.0),
        Column::new("status", "Status", 140.0),
        Column::new("actions", "", 80.0).pinned(PinSide::Right).fixed(),
        Column::new("audit", "Audit", 60.0).pinned(PinSide::Right),
    ]
}

// ============================================================================
// Pinned widths
// ============================================================================

#[test]
fn test_pinned_widths_sum_per_side() {
    let widths = pinned_widths(&sample_columns());
    assert_eq!(widths.left, 236.0);
    assert_eq!(widths.right, 140.0);
}

#[test]
fn test_pinned_widths_skip_hidden_columns() {
    let mut columns = sample_columns();
    columns[1].visible = false;
    let widths = pinned_widths(&columns);
    assert_eq!(widths.left, 36.0);
    assert_eq!(widths.right, 140.0);
}

// ============================================================================
// Per-column style
// ============================================================================

#[test]
fn test_unpinned_column_keeps_normal_flow() {
    let style = pinning_style(&sample_columns(), "email", TextDirection::Ltr, true);
    assert_eq!(style.position, CellPosition::Relative);
    assert_eq!(style.width, 240.0);
    assert_eq!(style.left, None);
    assert_eq!(style.right, None);
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.z_index, 0);
    assert!(style.shadow.is_none());
}

#[test]
fn test_left_group_offsets_accumulate() {
    let columns = sample_columns();
    let first = pinning_style(&columns, "select", TextDirection::Ltr, false);
    let second = pinning_style(&columns, "name", TextDirection::Ltr, false);
    assert_eq!(first.left, Some(0.0));
    assert_eq!(second.left, Some(36.0));
    assert_eq!(second.position, CellPosition::Sticky);
    assert_eq!(second.opacity, 0.97);
    assert_eq!(second.z_index, 1);
}

#[test]
fn test_right_group_offsets_accumulate_from_trailing_edge() {
    let columns = sample_columns();
    let first_right = pinning_style(&columns, "actions", TextDirection::Ltr, false);
    let last_right = pinning_style(&columns, "audit", TextDirection::Ltr, false);
    assert_eq!(first_right.right, Some(60.0));
    assert_eq!(last_right.right, Some(0.0));
}

#[test]
fn test_hidden_columns_do_not_shift_offsets() {
    let mut columns = sample_columns();
    columns[0].visible = false;
    let style = pinning_style(&columns, "name", TextDirection::Ltr, false);
    assert_eq!(style.left, Some(0.0));
}

#[test]
fn test_unknown_column_falls_back_to_default_style() {
    let style = pinning_style(&sample_columns(), "missing", TextDirection::Ltr, true);
    assert_eq!(style.position, CellPosition::Relative);
    assert_eq!(style.width, 0.0);
    assert!(style.shadow.is_none());
}

// ============================================================================
// Boundary shadow
// ============================================================================

#[test]
fn test_shadow_marks_only_group_boundaries() {
    let columns = sample_columns();
    assert!(
        pinning_style(&columns, "select", TextDirection::Ltr, true)
            .shadow
            .is_none()
    );
    let last_left = pinning_style(&columns, "name", TextDirection::Ltr, true)
        .shadow
        .unwrap();
    assert_eq!(last_left.offset_x, -4.0);
    assert_eq!(last_left.blur, 4.0);
    assert_eq!(last_left.spread, -4.0);

    let first_right = pinning_style(&columns, "actions", TextDirection::Ltr, true)
        .shadow
        .unwrap();
    assert_eq!(first_right.offset_x, 4.0);
    assert!(
        pinning_style(&columns, "audit", TextDirection::Ltr, true)
            .shadow
            .is_none()
    );
}

#[test]
fn test_shadow_requires_border_flag() {
    let style = pinning_style(&sample_columns(), "name", TextDirection::Ltr, false);
    assert!(style.shadow.is_none());
}

#[test]
fn test_rtl_mirrors_offsets_and_shadows() {
    let columns = sample_columns();
    let last_left = pinning_style(&columns, "name", TextDirection::Rtl, true);
    // The left pin group hugs the right viewport edge under RTL.
    assert_eq!(last_left.left, None);
    assert_eq!(last_left.right, Some(36.0));
    assert_eq!(last_left.shadow.unwrap().offset_x, 4.0);

    let first_right = pinning_style(&columns, "actions", TextDirection::Rtl, true);
    assert_eq!(first_right.right, None);
    assert_eq!(first_right.left, Some(60.0));
    assert_eq!(first_right.shadow.unwrap().offset_x, -4.0);
}
