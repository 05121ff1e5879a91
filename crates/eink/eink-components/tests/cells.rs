//! Widgets drawn into the full portrait layout

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use eink_components::prelude::*;
use eink_system::prelude::*;
use eink_testing::{AcepColor, TestCanvas};
use embedded_graphics::{prelude::*, primitives::Rectangle};
use image::{GrayAlphaImage, LumaA};

fn canvas(layout: &PanelLayout) -> TestCanvas {
    let mut t = TestCanvas::new(layout.canvas.width, layout.canvas.height);
    for i in 0..15 {
        t.register_region(&format!("cell-{i}"), layout.cell_rect(i));
    }
    t.register_region("calendar", layout.calendar);
    t.register_region("next-up", layout.next_up);
    t.register_region("status", layout.status);
    t
}

// ====================
// Grid cells
// ====================

#[test]
fn test_each_variant_draws_its_border() {
    let layout = PanelLayout::default();
    let icons = IconSet::new();
    let style = CellStyle {
        padding: 10,
        frame: FrameStyle::default(),
        icons: &icons,
    };
    let one = vec!["7".to_string()];
    let two = vec!["7".to_string(), "8".to_string()];

    let cases = [
        (Variant::Single, None, &one),
        (Variant::Dual, None, &two),
        (Variant::TitledSingle, Some("Temp"), &one),
        (Variant::TitledDual, Some("Wind"), &two),
        (Variant::Icon, None, &one),
        (Variant::Roster, None, &one),
    ];

    let mut t = canvas(&layout);
    for (i, (variant, title, values)) in cases.iter().enumerate() {
        let content = CellContent {
            title: *title,
            values: values.as_slice(),
            ..Default::default()
        };
        Cell::new(*variant, content)
            .render(&mut *t, layout.cell_rect(i), &style)
            .unwrap();
    }

    for (i, (variant, _, _)) in cases.iter().enumerate() {
        let id = format!("cell-{i}");
        t.assert_named_contains(&id, variant.border()).unwrap();
        // Top edge midpoint of the outline
        let rect = layout.cell_rect(i);
        let x = (rect.top_left.x + rect.size.width as i32 / 2) as u32;
        t.assert_pixel(x, rect.top_left.y as u32 + 1, variant.border())
            .unwrap();
    }

    // Unused cells stay blank
    t.assert_named_uniform("cell-6", AcepColor::White).unwrap();
}

#[test]
fn test_values_drawn_in_black() {
    let layout = PanelLayout::default();
    let icons = IconSet::new();
    let style = CellStyle {
        padding: 10,
        frame: FrameStyle::default(),
        icons: &icons,
    };
    let values = vec!["21°".to_string()];
    let content = CellContent {
        title: Some("Temp"),
        values: &values,
        ..Default::default()
    };

    let mut t = canvas(&layout);
    Cell::new(Variant::TitledSingle, content)
        .render(&mut *t, layout.cell_rect(0), &style)
        .unwrap();

    let rect = layout.cell_rect(0);
    // Title band and value area both carry ink
    let title_band = Rectangle::new(rect.top_left + Point::new(8, 8), Size::new(140, 20));
    let value_area = Rectangle::new(rect.top_left + Point::new(8, 40), Size::new(140, 70));
    t.assert_region_contains(title_band, AcepColor::Black).unwrap();
    t.assert_region_contains(value_area, AcepColor::Black).unwrap();
}

#[test]
fn test_icon_cell_draws_bitmap() {
    let layout = PanelLayout::default();
    let mut icons = IconSet::new();
    let art = GrayAlphaImage::from_pixel(16, 16, LumaA([0, 255]));
    icons.insert("01d", IconBitmap::from_image(&art, true));
    let style = CellStyle {
        padding: 10,
        frame: FrameStyle::default(),
        icons: &icons,
    };

    let hit = vec!["01d".to_string()];
    let miss = vec!["99x".to_string()];
    let mut t = canvas(&layout);
    for (i, values) in [(0, &hit), (1, &miss)] {
        let content = CellContent {
            values: values.as_slice(),
            ..Default::default()
        };
        Cell::new(Variant::Icon, content)
            .render(&mut *t, layout.cell_rect(i), &style)
            .unwrap();
    }

    let rect = layout.cell_rect(0);
    assert_eq!(t.pixel_count_of_color(rect, AcepColor::Black), 16 * 16);
    t.assert_named_lacks("cell-1", AcepColor::Black).unwrap();
    t.assert_named_contains("cell-1", AcepColor::Red).unwrap();
}

#[test]
fn test_roster_cell() {
    let layout = PanelLayout::default();
    let icons = IconSet::new();
    let style = CellStyle {
        padding: 10,
        frame: FrameStyle::default(),
        icons: &icons,
    };
    let members = vec![RosterMember {
        name: "Ada".into(),
        last_seen: "08:15".into(),
        symbol: None,
        element: None,
    }];

    let mut t = canvas(&layout);
    let with_member = CellContent {
        roster: &members,
        ..Default::default()
    };
    Cell::new(Variant::Roster, with_member)
        .render(&mut *t, layout.cell_rect(0), &style)
        .unwrap();
    Cell::new(Variant::Roster, CellContent::default())
        .render(&mut *t, layout.cell_rect(1), &style)
        .unwrap();

    t.assert_named_contains("cell-0", AcepColor::Black).unwrap();
    t.assert_named_lacks("cell-1", AcepColor::Black).unwrap();
    t.assert_named_contains("cell-1", AcepColor::Blue).unwrap();
}

// ====================
// Top row and status strip
// ====================

#[test]
fn test_top_row_and_status() {
    let layout = PanelLayout::default();
    let frame = FrameStyle::default();
    let mut t = canvas(&layout);

    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    Calendar::new(today)
        .render(&mut *t, layout.calendar, &frame)
        .unwrap();
    let event = UpcomingEvent {
        summary: "Lisbon".into(),
        days_remaining: 4,
    };
    NextUp::new(Some(&event))
        .render(&mut *t, layout.next_up, 10, &frame)
        .unwrap();
    StatusStrip::default()
        .render(&mut *t, layout.status, &frame)
        .unwrap();

    t.assert_named_contains("calendar", AcepColor::Red).unwrap();
    t.assert_named_contains("next-up", AcepColor::Black).unwrap();
    t.assert_named_contains("status", AcepColor::Blue).unwrap();
    t.assert_named_lacks("status", AcepColor::Black).unwrap();

    // Grid untouched, gutter between calendar and next-up stays white
    t.assert_named_uniform("cell-0", AcepColor::White).unwrap();
    let gutter = Rectangle::new(Point::new(158, 0), Size::new(3, 158));
    t.assert_region_uniform(gutter, AcepColor::White).unwrap();
}
