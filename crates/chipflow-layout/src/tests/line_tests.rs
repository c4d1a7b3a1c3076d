use crate::{ItemMetrics, Line, LineBuilder};

fn items(lengths: &[f32]) -> Vec<ItemMetrics> {
    lengths
        .iter()
        .map(|&length| ItemMetrics::new(length, 24.0))
        .collect()
}

fn line_lengths(lines: &[crate::Line]) -> Vec<Vec<f32>> {
    lines
        .iter()
        .map(|line| line.items.iter().map(|placed| placed.length).collect())
        .collect()
}

#[test]
fn packs_greedily_until_the_line_is_full() {
    let lines = LineBuilder::new(100.0).pack(&items(&[40.0, 40.0, 40.0]));

    // 40 + 40 fits in 100; the third wraps (80 + 40 > 100).
    assert_eq!(line_lengths(&lines), vec![vec![40.0, 40.0], vec![40.0]]);
    assert_eq!(lines[0].line_length, 80.0);
    assert_eq!(lines[1].line_length, 40.0);
}

#[test]
fn zero_items_still_produce_one_line() {
    let lines = LineBuilder::new(100.0).pack(&[]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_empty());
}

#[test]
fn oversized_item_gets_its_own_line() {
    let lines = LineBuilder::new(100.0).pack(&items(&[60.0, 150.0, 30.0]));

    assert_eq!(line_lengths(&lines), vec![vec![60.0], vec![150.0], vec![30.0]]);
    // overflow is reported, never dropped
    assert!(lines[1].line_length > 100.0);
}

#[test]
fn force_new_line_wraps_even_with_room() {
    let packed = vec![
        ItemMetrics::new(20.0, 24.0),
        ItemMetrics::new(20.0, 24.0).on_new_line(),
    ];
    let lines = LineBuilder::new(100.0).pack(&packed);
    assert_eq!(lines.len(), 2);
}

#[test]
fn no_item_is_dropped_or_duplicated() {
    let mut packed = items(&[35.0, 80.0, 10.0, 55.0, 99.0, 5.0, 41.0]);
    packed[3].force_new_line = true;
    let lines = LineBuilder::new(90.0).pack(&packed);

    let total: usize = lines.iter().map(Line::len).sum();
    assert_eq!(total, packed.len());
}

#[test]
fn every_line_fits_unless_alone_and_oversized() {
    let max_length = 90.0;
    let lines = LineBuilder::new(max_length).pack(&items(&[35.0, 80.0, 10.0, 120.0, 5.0, 41.0]));

    for line in &lines {
        assert!(
            line.line_length <= max_length || line.len() == 1,
            "committed line of {} items overflows: {}",
            line.len(),
            line.line_length
        );
    }
}

#[test]
fn adjacent_margins_collapse_to_the_larger_one() {
    let packed = vec![
        ItemMetrics::new(40.0, 24.0).with_margins(4.0, 8.0, 0.0, 0.0),
        ItemMetrics::new(40.0, 24.0).with_margins(6.0, 0.0, 0.0, 0.0),
    ];
    let lines = LineBuilder::new(200.0).pack(&packed);

    // 4 + 40 + max(8, 6) + 40 = 92
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].line_length, 92.0);
}

#[test]
fn line_thickness_is_max_outer_thickness() {
    let packed = vec![
        ItemMetrics::new(40.0, 24.0),
        ItemMetrics::new(40.0, 20.0).with_margins(0.0, 0.0, 6.0, 6.0),
    ];
    let lines = LineBuilder::new(200.0).pack(&packed);
    assert_eq!(lines[0].line_thickness, 32.0);
}

#[test]
fn fit_checking_can_be_disabled() {
    let lines = LineBuilder::new(50.0)
        .check_fit(false)
        .pack(&items(&[40.0, 40.0, 40.0]));
    assert_eq!(lines.len(), 1);
}

#[test]
fn input_slot_shrinks_to_the_remaining_space() {
    let packed = vec![
        ItemMetrics::new(85.0, 24.0),
        ItemMetrics::input_slot(20.0, 24.0),
    ];
    let lines = LineBuilder::new(100.0)
        .input_slot_min_length(10.0)
        .pack(&packed);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].items[1].length, 15.0);
}

#[test]
fn input_slot_never_shrinks_below_its_floor() {
    let packed = vec![
        ItemMetrics::new(95.0, 24.0),
        ItemMetrics::input_slot(18.0, 24.0),
    ];
    let lines = LineBuilder::new(100.0).pack(&packed);

    assert_eq!(lines[0].items[1].length, crate::INPUT_SLOT_MIN_LENGTH);
}

#[test]
fn input_slot_wraps_once_its_content_outgrows_the_line_share() {
    // intrinsic 30 > 100 / 5, so the slot moves to its own line
    let packed = vec![
        ItemMetrics::new(40.0, 24.0),
        ItemMetrics::input_slot(30.0, 24.0),
    ];
    let lines = LineBuilder::new(100.0).pack(&packed);

    assert_eq!(lines.len(), 2);
    assert!(lines[1].items[0].metrics.is_input_slot());
    // alone on its line it may take everything that is left
    assert_eq!(lines[1].items[0].length, 30.0);
}

#[test]
fn short_input_slot_stays_on_the_current_line() {
    let packed = vec![
        ItemMetrics::new(70.0, 24.0),
        ItemMetrics::input_slot(18.0, 24.0),
    ];
    let lines = LineBuilder::new(100.0).pack(&packed);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].items[1].length, 18.0);
}
