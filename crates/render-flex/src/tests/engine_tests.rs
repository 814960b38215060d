use crate::{
    Align, Dimension, Display, EdgeInsets, FlexDirection, FlexEngine, FlexStyle, JustifyContent,
    LayoutEngine, Rect, Size, StyleNode,
};

fn row() -> FlexStyle {
    FlexStyle {
        direction: FlexDirection::Row,
        ..FlexStyle::default()
    }
}

fn fixed(width: f32, height: f32) -> FlexStyle {
    FlexStyle {
        width: Dimension::Points(width),
        height: Dimension::Points(height),
        ..FlexStyle::default()
    }
}

fn leaf(style: FlexStyle) -> StyleNode {
    StyleNode::new(style)
}

#[test]
fn root_auto_fills_available_size() {
    let output = FlexEngine::new().compute_layout(&leaf(FlexStyle::default()), Size::new(300.0, 100.0));
    assert_eq!(output.frame, Rect::new(0.0, 0.0, 300.0, 100.0));
}

#[test]
fn grow_distributes_remaining_main_space() {
    let label = leaf(FlexStyle {
        flex_grow: 1.0,
        ..FlexStyle::default()
    });
    let button = leaf(FlexStyle {
        width: Dimension::Points(80.0),
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(row(), vec![label, button]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(300.0, 100.0));

    assert_eq!(output.children[0].frame, Rect::new(0.0, 0.0, 220.0, 100.0));
    assert_eq!(output.children[1].frame, Rect::new(220.0, 0.0, 80.0, 100.0));
}

#[test]
fn grow_splits_proportionally() {
    let one = leaf(FlexStyle {
        flex_grow: 1.0,
        ..FlexStyle::default()
    });
    let three = leaf(FlexStyle {
        flex_grow: 3.0,
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(row(), vec![one, three]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(400.0, 50.0));

    assert_eq!(output.children[0].frame.width(), 100.0);
    assert_eq!(output.children[1].frame.width(), 300.0);
    assert_eq!(output.children[1].frame.origin.x, 100.0);
}

#[test]
fn shrink_resolves_overflow_proportionally() {
    let wide = leaf(FlexStyle {
        width: Dimension::Points(200.0),
        flex_shrink: 1.0,
        ..FlexStyle::default()
    });
    let rigid = leaf(FlexStyle {
        width: Dimension::Points(200.0),
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(row(), vec![wide, rigid]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(300.0, 50.0));

    assert_eq!(output.children[0].frame.width(), 100.0);
    assert_eq!(output.children[1].frame.width(), 200.0);
}

#[test]
fn margins_offset_and_consume_main_space() {
    let child = leaf(FlexStyle {
        flex_grow: 1.0,
        margin: EdgeInsets::new(5.0, 10.0, 5.0, 10.0),
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(row(), vec![child]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 40.0));

    let frame = output.children[0].frame;
    assert_eq!(frame.origin.x, 10.0);
    assert_eq!(frame.origin.y, 5.0);
    assert_eq!(frame.width(), 80.0);
    assert_eq!(frame.height(), 30.0);
}

#[test]
fn container_padding_shrinks_content_box() {
    let mut style = row();
    style.padding = EdgeInsets::all(10.0);
    let child = leaf(FlexStyle {
        flex_grow: 1.0,
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(style, vec![child]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 100.0));

    assert_eq!(output.children[0].frame, Rect::new(10.0, 10.0, 80.0, 80.0));
}

#[test]
fn justify_center_and_end() {
    let child = || leaf(fixed(50.0, 20.0));
    for (justify, expected_x) in [
        (JustifyContent::Center, 25.0),
        (JustifyContent::FlexEnd, 50.0),
    ] {
        let mut style = row();
        style.justify_content = justify;
        let root = StyleNode::with_children(style, vec![child()]);
        let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 20.0));
        assert_eq!(output.children[0].frame.origin.x, expected_x, "{justify:?}");
    }
}

#[test]
fn justify_space_between() {
    let mut style = row();
    style.justify_content = JustifyContent::SpaceBetween;
    let root = StyleNode::with_children(style, vec![leaf(fixed(20.0, 10.0)), leaf(fixed(20.0, 10.0))]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 10.0));

    assert_eq!(output.children[0].frame.origin.x, 0.0);
    assert_eq!(output.children[1].frame.origin.x, 80.0);
}

#[test]
fn align_items_center_positions_cross_axis() {
    let mut style = row();
    style.align_items = Align::Center;
    let root = StyleNode::with_children(style, vec![leaf(fixed(10.0, 20.0))]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 100.0));

    assert_eq!(output.children[0].frame.origin.y, 40.0);
    assert_eq!(output.children[0].frame.height(), 20.0);
}

#[test]
fn align_self_overrides_align_items() {
    let mut style = row();
    style.align_items = Align::FlexStart;
    let child = leaf(FlexStyle {
        width: Dimension::Points(10.0),
        height: Dimension::Points(20.0),
        align_self: Align::FlexEnd,
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(style, vec![child]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 100.0));

    assert_eq!(output.children[0].frame.origin.y, 80.0);
}

#[test]
fn stretch_fills_cross_axis_by_default() {
    let root = StyleNode::with_children(row(), vec![leaf(FlexStyle {
        width: Dimension::Points(10.0),
        ..FlexStyle::default()
    })]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 60.0));

    assert_eq!(output.children[0].frame.height(), 60.0);
}

#[test]
fn display_none_keeps_tree_shape_with_zero_frame() {
    let hidden = leaf(FlexStyle {
        width: Dimension::Points(40.0),
        display: Display::None,
        ..FlexStyle::default()
    });
    let visible = leaf(fixed(40.0, 10.0));
    let root = StyleNode::with_children(row(), vec![hidden, visible]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 10.0));

    assert_eq!(output.children.len(), 2);
    assert_eq!(output.children[0].frame, Rect::ZERO);
    assert_eq!(output.children[1].frame.origin.x, 0.0);
}

#[test]
fn column_stacks_children_vertically() {
    let root = StyleNode::with_children(
        FlexStyle::default(),
        vec![leaf(fixed(10.0, 30.0)), leaf(fixed(10.0, 30.0))],
    );
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 100.0));

    assert_eq!(output.children[0].frame.origin.y, 0.0);
    assert_eq!(output.children[1].frame.origin.y, 30.0);
}

#[test]
fn auto_container_sizes_from_content() {
    let inner = StyleNode::with_children(
        row(),
        vec![leaf(fixed(30.0, 10.0)), leaf(fixed(30.0, 20.0))],
    );
    let mut outer_style = FlexStyle::default();
    outer_style.align_items = Align::FlexStart;
    let root = StyleNode::with_children(outer_style, vec![inner]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(200.0, 200.0));

    // The nested row is measured from its children: 60 wide, 20 tall.
    assert_eq!(output.children[0].frame.width(), 60.0);
    assert_eq!(output.children[0].frame.height(), 20.0);
}

#[test]
fn min_dimensions_clamp_shrink() {
    let child = leaf(FlexStyle {
        width: Dimension::Points(200.0),
        min_width: Dimension::Points(150.0),
        flex_shrink: 1.0,
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(row(), vec![child]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(100.0, 10.0));

    assert_eq!(output.children[0].frame.width(), 150.0);
}

#[test]
fn percent_dimension_resolves_against_container() {
    let child = leaf(FlexStyle {
        width: Dimension::Percent(0.5),
        ..FlexStyle::default()
    });
    let root = StyleNode::with_children(row(), vec![child]);
    let output = FlexEngine::new().compute_layout(&root, Size::new(200.0, 10.0));

    assert_eq!(output.children[0].frame.width(), 100.0);
}
