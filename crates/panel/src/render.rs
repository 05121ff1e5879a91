//! Drawing one full frame from the plan and the current snapshot

use crate::config::{BoxPlan, PanelPlan};
use chrono::NaiveDate;
use eink_components::prelude::*;
use eink_emulator::{AcepColor, Framebuffer};
use eink_system::layout::PanelLayout;
use embedded_graphics::prelude::*;
use feeds::convert::Converter;
use feeds::resolve::{stringify, ERROR_TEXT};
use feeds::snapshot::Snapshot;
use serde_json::Value;

/// A box with its values resolved and its variant chosen
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBox {
    /// Variant the box draws as
    pub variant: Variant,
    /// Display strings, `"Error"` for failed values
    pub values: Vec<String>,
    /// Roster members (roster boxes only)
    pub roster: Vec<RosterMember>,
}

/// Resolve every value of `plan` and pick its variant
pub fn resolve_box(plan: &BoxPlan, snapshot: &Snapshot) -> ResolvedBox {
    let values: Vec<String> = plan.values.iter().map(|v| v.resolve(snapshot)).collect();
    let variant = Variant::select(plan.tag, plan.title.is_some(), values.len());

    let roster = match (variant, plan.source.as_deref()) {
        (Variant::Roster, Some(source)) => snapshot
            .document(source)
            .map(roster_members)
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    ResolvedBox {
        variant,
        values,
        roster,
    }
}

/// Members of a presence document `{"members": [...]}`
///
/// Each member needs a `name`; `lastIn` is shown as local `HH:MM`, the first
/// character of `cardSuit` as symbol and `elementName` as element.
pub fn roster_members(doc: &Value) -> Vec<RosterMember> {
    let Some(members) = doc.get("members").and_then(Value::as_array) else {
        return Vec::new();
    };

    members
        .iter()
        .filter_map(|m| {
            let name = m.get("name").filter(|n| !n.is_null()).map(stringify)?;
            let last_seen = m
                .get("lastIn")
                .and_then(Value::as_str)
                .and_then(|ts| Converter::Hhmm.apply(ts).ok())
                .unwrap_or_else(|| ERROR_TEXT.to_string());
            let symbol = non_empty_str(m, "cardSuit")
                .and_then(|s| s.chars().next())
                .map(String::from);
            let element = non_empty_str(m, "elementName").map(str::to_string);
            Some(RosterMember {
                name,
                last_seen,
                symbol,
                element,
            })
        })
        .collect()
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Dated events of a calendar document `[{"start": {"date": ...}, "summary": ...}]`
///
/// Entries without a parseable date or a summary are skipped.
pub fn calendar_events(doc: &Value) -> Vec<(NaiveDate, String)> {
    let Some(events) = doc.as_array() else {
        return Vec::new();
    };

    events
        .iter()
        .filter_map(|event| {
            let date = event.pointer("/start/date").and_then(Value::as_str)?;
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            let summary = event.get("summary").and_then(Value::as_str)?;
            Some((date, summary.to_string()))
        })
        .collect()
}

/// Render a complete frame
///
/// The canvas starts white; fixed regions are drawn first, then every box in
/// declaration order.
pub fn render_frame(
    plan: &PanelPlan,
    snapshot: &Snapshot,
    today: NaiveDate,
    icons: &IconSet,
) -> Framebuffer {
    let layout = PanelLayout::new(&plan.layout);
    let mut frame = Framebuffer::new(layout.canvas.width, layout.canvas.height);
    if let Err(never) = draw_panel(&mut frame, &layout, plan, snapshot, today, icons) {
        match never {}
    }
    frame
}

/// Draw every region of the panel onto `display`
pub fn draw_panel<D>(
    display: &mut D,
    layout: &PanelLayout,
    plan: &PanelPlan,
    snapshot: &Snapshot,
    today: NaiveDate,
    icons: &IconSet,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = AcepColor>,
{
    let frame = plan.frame;

    Calendar::new(today).render(display, layout.calendar, &frame)?;

    let event = plan
        .next_up_source
        .as_deref()
        .and_then(|source| snapshot.document(source))
        .and_then(|doc| UpcomingEvent::next(calendar_events(doc), today));
    NextUp::new(event.as_ref()).render(display, layout.next_up, layout.padding, &frame)?;

    StatusStrip::new(&plan.status_message).render(display, layout.status, &frame)?;

    let style = CellStyle {
        padding: layout.padding,
        frame,
        icons,
    };
    for (index, box_plan) in plan.boxes.iter().enumerate() {
        let resolved = resolve_box(box_plan, snapshot);
        tracing::debug!(
            index,
            variant = resolved.variant.name(),
            values = ?resolved.values,
            "drawing box"
        );
        let content = CellContent {
            title: box_plan.title.as_deref(),
            values: &resolved.values,
            roster: &resolved.roster,
        };
        Cell::new(resolved.variant, content).render(display, layout.grid.cell_rect(index), &style)?;
    }

    Ok(())
}
