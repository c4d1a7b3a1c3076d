use crate::{
    Axis, CrossGravity, FlowConfig, Gravity, ItemMetrics, LayoutSolver, MainGravity, MeasureMode,
};

fn chips(lengths: &[f32]) -> Vec<ItemMetrics> {
    lengths
        .iter()
        .map(|&length| ItemMetrics::new(length, 24.0))
        .collect()
}

#[test]
fn content_size_tracks_longest_line_and_stacked_thickness() {
    let config = FlowConfig::default().with_max_length(100.0);
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0, 40.0]), &config);

    assert_eq!(result.line_count(), 2);
    assert_eq!(result.content_length, 80.0);
    assert_eq!(result.content_thickness, 48.0);
    assert_eq!(result.length, 80.0);
    assert_eq!(result.thickness, 48.0);
}

#[test]
fn exactly_mode_forces_the_constraint() {
    let config = FlowConfig::default().with_exact_length(100.0);
    let result = LayoutSolver::solve(&chips(&[40.0]), &config);
    assert_eq!(result.length, 100.0);
}

#[test]
fn unspecified_mode_uses_content_and_never_wraps() {
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0, 40.0]), &FlowConfig::default());
    assert_eq!(result.line_count(), 1);
    assert_eq!(result.length, 120.0);
}

#[test]
fn empty_input_resolves_to_a_valid_result() {
    let config = FlowConfig::default().with_exact_length(100.0);
    let result = LayoutSolver::solve(&[], &config);

    assert_eq!(result.line_count(), 1);
    assert_eq!(result.length, 100.0);
    assert_eq!(result.content_thickness, 0.0);
}

#[test]
fn weighted_items_share_leftover_proportionally() {
    let items = vec![
        ItemMetrics::new(40.0, 24.0).with_weight(1.0),
        ItemMetrics::new(40.0, 24.0).with_weight(3.0),
    ];
    let config = FlowConfig::default().with_exact_length(100.0);
    let result = LayoutSolver::solve(&items, &config);

    let line = &result.lines[0];
    assert_eq!(line.items[0].length, 45.0);
    assert_eq!(line.items[1].length, 55.0);
    assert_eq!(line.line_length, 100.0);
    // offsets follow the expanded lengths
    assert_eq!(line.items[1].inline_offset, 45.0);
}

#[test]
fn weight_default_applies_to_unset_items() {
    let config = FlowConfig::default()
        .with_exact_length(100.0)
        .with_weight_default(1.0);
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0]), &config);

    assert_eq!(result.lines[0].items[0].length, 50.0);
    assert_eq!(result.lines[0].items[1].length, 50.0);
}

#[test]
fn fill_gravity_spreads_leftover_when_nothing_is_weighted() {
    let config = FlowConfig::default()
        .with_exact_length(100.0)
        .with_gravity(Gravity::new(MainGravity::Fill, CrossGravity::Start));
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0]), &config);

    assert_eq!(result.lines[0].items[0].length, 50.0);
    assert_eq!(result.lines[0].items[1].length, 50.0);
    assert_eq!(result.lines[0].start_length, 0.0);
}

#[test]
fn end_and_center_gravity_offset_the_line() {
    let end = FlowConfig::default()
        .with_exact_length(100.0)
        .with_gravity(Gravity::new(MainGravity::End, CrossGravity::Start));
    assert_eq!(
        LayoutSolver::solve(&chips(&[40.0, 40.0]), &end).lines[0].start_length,
        20.0
    );

    let center = FlowConfig::default()
        .with_exact_length(100.0)
        .with_gravity(Gravity::new(MainGravity::Center, CrossGravity::Start));
    assert_eq!(
        LayoutSolver::solve(&chips(&[40.0, 40.0]), &center).lines[0].start_length,
        10.0
    );
}

#[test]
fn cross_fill_distributes_extra_thickness_across_lines() {
    let config = FlowConfig::default()
        .with_max_length(50.0)
        .with_max_thickness(100.0, MeasureMode::Exactly)
        .with_gravity(Gravity::new(MainGravity::Start, CrossGravity::Fill));
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0]), &config);

    // two 24-thick lines split the extra 52 evenly
    assert_eq!(result.lines[0].line_thickness, 50.0);
    assert_eq!(result.lines[1].line_thickness, 50.0);
    assert_eq!(result.lines[1].start_thickness, 50.0);
}

#[test]
fn cross_end_gravity_shifts_the_line_block() {
    let config = FlowConfig::default()
        .with_max_length(50.0)
        .with_max_thickness(100.0, MeasureMode::Exactly)
        .with_gravity(Gravity::new(MainGravity::Start, CrossGravity::End));
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0]), &config);

    assert_eq!(result.lines[0].start_thickness, 52.0);
    assert_eq!(result.lines[1].start_thickness, 76.0);
}

#[test]
fn item_cross_gravity_centers_within_the_line() {
    let items = vec![
        ItemMetrics::new(40.0, 40.0),
        ItemMetrics::new(40.0, 20.0)
            .with_gravity(Gravity::new(MainGravity::Start, CrossGravity::Center)),
    ];
    let result = LayoutSolver::solve(&items, &FlowConfig::default().with_max_length(200.0));

    assert_eq!(result.lines[0].items[1].cross_offset, 10.0);
}

#[test]
fn item_cross_fill_stretches_to_the_line_thickness() {
    let items = vec![
        ItemMetrics::new(40.0, 40.0),
        ItemMetrics::new(40.0, 20.0)
            .with_gravity(Gravity::new(MainGravity::Start, CrossGravity::Fill)),
    ];
    let result = LayoutSolver::solve(&items, &FlowConfig::default().with_max_length(200.0));

    assert_eq!(result.lines[0].items[1].thickness, 40.0);
}

#[test]
fn max_lines_caps_reported_thickness_but_keeps_every_item() {
    let config = FlowConfig::default().with_max_length(50.0).with_max_lines(1);
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0, 40.0]), &config);

    assert_eq!(result.line_count(), 3);
    assert_eq!(result.clipped_line_count(), 2);
    assert_eq!(result.content_thickness, 24.0);
    // clipped lines are still positioned below the counted ones
    assert_eq!(result.lines[2].start_thickness, 48.0);
    let total: usize = result.lines.iter().map(|l| l.len()).sum();
    assert_eq!(total, 3);
}

#[test]
fn max_item_length_clamps_chips_before_packing() {
    let config = FlowConfig::default()
        .with_max_length(100.0)
        .with_max_item_length(60.0);
    let result = LayoutSolver::solve(&chips(&[90.0, 30.0]), &config);

    assert_eq!(result.line_count(), 1);
    assert_eq!(result.lines[0].items[0].length, 60.0);
}

#[test]
fn max_item_length_leaves_the_input_slot_alone() {
    let items = vec![ItemMetrics::input_slot(18.0, 24.0)];
    let config = FlowConfig::default()
        .with_max_length(100.0)
        .with_max_item_length(10.0);
    let result = LayoutSolver::solve(&items, &config);

    assert_eq!(result.lines[0].items[0].length, 18.0);
}

#[test]
fn vertical_orientation_swaps_the_reported_axes() {
    let config = FlowConfig::default()
        .with_orientation(Axis::Vertical)
        .with_max_length(100.0);
    let result = LayoutSolver::solve(&chips(&[40.0, 40.0, 40.0]), &config);

    assert_eq!(result.total_height(), 80.0);
    assert_eq!(result.total_width(), 48.0);
    // line offsets map the same way
    assert_eq!(result.lines[1].x(Axis::Vertical), 24.0);
    assert_eq!(result.lines[1].y(Axis::Vertical), 0.0);
}

#[test]
fn offsets_accumulate_with_collapsed_margins() {
    let items = vec![
        ItemMetrics::new(40.0, 24.0).with_margins(4.0, 8.0, 0.0, 0.0),
        ItemMetrics::new(40.0, 24.0).with_margins(6.0, 0.0, 0.0, 0.0),
    ];
    let result = LayoutSolver::solve(&items, &FlowConfig::default().with_max_length(200.0));

    let line = &result.lines[0];
    assert_eq!(line.items[0].inline_offset, 4.0);
    assert_eq!(line.items[1].inline_offset, 52.0);
}
