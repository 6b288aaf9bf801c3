//! # Content Flow
//!
//! Turning a run of text into layout units and placing units onto lines.
//!
//! Splitting has two modes, matching the two whitespace regimes of the
//! style system: collapsed (the default), where whitespace runs disappear
//! into `has_space_before`/`has_space_after` flags on the surrounding words,
//! and preformatted, where whitespace runs survive as their own units and
//! mandatory breaks become line-break units. Mandatory breaks come from
//! UAX #14 classification, which folds CRLF into a single break and covers
//! NEL and the Unicode line/paragraph separators.
//!
//! Placement is a greedy flow: units advance a cursor by their full width
//! (width plus trailing spacing) and wrap when a unit's visible width would
//! cross the line edge. Unit widths and heights are measured by the font
//! collaborator before flow runs; flow only assigns positions.

use unicode_linebreak::{linebreaks, BreakOpportunity};

use crate::container::{BoxId, DocumentContext};
use crate::layout::unit::LayoutUnit;

/// Characters that terminate a line in preformatted text. CRLF is handled
/// as a pair before this set applies.
const LINE_TERMINATORS: [char; 7] = [
    '\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Split a run of text belonging to `owner` into layout units.
///
/// In collapsed mode every maximal whitespace run becomes adjacency flags on
/// the neighboring words. In preformatted mode space/tab runs become
/// whitespace units and each mandatory break becomes a line-break unit.
pub fn split_into_units(
    ctx: &mut DocumentContext,
    owner: BoxId,
    text: &str,
    preformatted: bool,
) -> Vec<LayoutUnit> {
    if preformatted {
        split_preformatted(ctx, owner, text)
    } else {
        split_collapsed(ctx, owner, text)
    }
}

fn split_collapsed(ctx: &mut DocumentContext, owner: BoxId, text: &str) -> Vec<LayoutUnit> {
    let mut units = Vec::new();
    let mut word = String::new();
    let mut space_before = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                units.push(LayoutUnit::word(
                    ctx.next_unit_id(),
                    Some(owner),
                    std::mem::take(&mut word),
                    space_before,
                    true,
                ));
            }
            space_before = true;
        } else {
            word.push(ch);
        }
    }
    if !word.is_empty() {
        units.push(LayoutUnit::word(
            ctx.next_unit_id(),
            Some(owner),
            word,
            space_before,
            false,
        ));
    }
    units
}

fn split_preformatted(ctx: &mut DocumentContext, owner: BoxId, text: &str) -> Vec<LayoutUnit> {
    let mut units = Vec::new();
    if text.is_empty() {
        return units;
    }

    // UAX#14 reports a mandatory break after every line terminator and one
    // more at end of text. The end-of-text break has no terminator before
    // it and produces no line-break unit.
    let mut segment_start = 0;
    for (pos, opportunity) in linebreaks(text) {
        if !matches!(opportunity, BreakOpportunity::Mandatory) {
            continue;
        }
        let segment = &text[segment_start..pos];
        let body = segment
            .strip_suffix("\r\n")
            .or_else(|| segment.strip_suffix(LINE_TERMINATORS));
        match body {
            Some(body) => {
                push_runs(ctx, owner, body, &mut units);
                units.push(LayoutUnit::line_break(ctx.next_unit_id(), Some(owner)));
            }
            None => push_runs(ctx, owner, segment, &mut units),
        }
        segment_start = pos;
    }
    units
}

/// Split line-terminator-free text into alternating word and whitespace
/// units. Preformatted words carry no adjacency flags; their spacing is
/// explicit in the whitespace units.
fn push_runs(ctx: &mut DocumentContext, owner: BoxId, body: &str, units: &mut Vec<LayoutUnit>) {
    let mut rest = body;
    while !rest.is_empty() {
        let leading_space = rest.starts_with([' ', '\t']);
        let run_end = rest
            .find(|ch: char| (ch == ' ' || ch == '\t') != leading_space)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(run_end);
        let unit = if leading_space {
            LayoutUnit::spaces(ctx.next_unit_id(), Some(owner), run)
        } else {
            LayoutUnit::word(ctx.next_unit_id(), Some(owner), run, false, false)
        };
        units.push(unit);
        rest = tail;
    }
}

/// Greedily place pre-measured units onto lines starting at
/// (`origin_x`, `origin_y`). Returns the number of lines used.
///
/// A unit wraps when its visible width would cross `origin_x + max_width`
/// and the line already has content; the cursor advance between units uses
/// the full width, so word spacing accumulates exactly as it will paint.
/// Whitespace at the start of a line takes no space.
pub fn flow_into_lines(
    units: &mut [LayoutUnit],
    ctx: &DocumentContext,
    origin_x: f64,
    origin_y: f64,
    max_width: f64,
    line_height: f64,
) -> usize {
    let mut x = origin_x;
    let mut y = origin_y;
    let mut lines = 1;
    let mut line_has_content = false;

    for unit in units.iter_mut() {
        if unit.is_line_break() {
            unit.set_left(x);
            unit.set_top(y);
            x = origin_x;
            y += line_height;
            lines += 1;
            line_has_content = false;
            continue;
        }

        if unit.is_spaces() && !line_has_content {
            unit.set_left(x);
            unit.set_top(y);
            continue;
        }

        if line_has_content && x + unit.width() > origin_x + max_width {
            x = origin_x;
            y += line_height;
            lines += 1;
            line_has_content = false;
        }

        unit.set_left(x);
        unit.set_top(y);
        x += unit.full_width(ctx);
        if !unit.is_spaces() {
            line_has_content = true;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{DocumentContext, InlineBox};

    fn ctx_and_owner(word_spacing: f64) -> (DocumentContext, BoxId) {
        let mut ctx = DocumentContext::new();
        let owner = ctx.push_box(InlineBox {
            word_spacing,
            ..InlineBox::default()
        });
        (ctx, owner)
    }

    fn texts(units: &[LayoutUnit]) -> Vec<&str> {
        units.iter().map(|unit| unit.text()).collect()
    }

    #[test]
    fn collapsed_split_collapses_runs_into_flags() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        let units = split_into_units(&mut ctx, owner, "  hello \t world", false);
        assert_eq!(texts(&units), ["hello", "world"]);
        assert!(units[0].has_space_before());
        assert!(units[0].has_space_after());
        assert!(units[1].has_space_before());
        assert!(!units[1].has_space_after());
    }

    #[test]
    fn collapsed_split_of_pure_whitespace_yields_nothing() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        assert!(split_into_units(&mut ctx, owner, " \n\t ", false).is_empty());
    }

    #[test]
    fn preformatted_split_keeps_spaces_and_breaks() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        let units = split_into_units(&mut ctx, owner, "a  b\nc", true);
        assert_eq!(units.len(), 5);
        assert_eq!(units[0].text(), "a");
        assert_eq!(units[1].text(), "  ");
        assert!(units[1].is_spaces());
        assert_eq!(units[2].text(), "b");
        assert!(units[3].is_line_break());
        assert_eq!(units[4].text(), "c");
    }

    #[test]
    fn crlf_is_one_line_break() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        let units = split_into_units(&mut ctx, owner, "a\r\nb", true);
        let breaks = units.iter().filter(|unit| unit.is_line_break()).count();
        assert_eq!(breaks, 1);
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn trailing_newline_still_produces_a_break() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        let units = split_into_units(&mut ctx, owner, "a\n", true);
        assert_eq!(units.len(), 2);
        assert!(units[1].is_line_break());
    }

    #[test]
    fn flow_wraps_when_a_word_would_overflow() {
        let (mut ctx, owner) = ctx_and_owner(2.0);
        let mut units = split_into_units(&mut ctx, owner, "aa bb cc", false);
        for unit in &mut units {
            unit.set_width(40.0);
            unit.set_height(10.0);
        }
        // Line fits two words (40 + 2 + 40) but not three.
        let lines = flow_into_lines(&mut units, &ctx, 0.0, 0.0, 100.0, 12.0);
        assert_eq!(lines, 2);
        assert_eq!(units[0].left(), 0.0);
        assert_eq!(units[1].left(), 42.0);
        assert_eq!(units[2].left(), 0.0);
        assert_eq!(units[2].top(), 12.0);
    }

    #[test]
    fn flow_honors_line_break_units() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        let mut units = split_into_units(&mut ctx, owner, "a\nb", true);
        for unit in &mut units {
            if !unit.is_line_break() {
                unit.set_width(10.0);
                unit.set_height(10.0);
            }
        }
        let lines = flow_into_lines(&mut units, &ctx, 5.0, 7.0, 1000.0, 12.0);
        assert_eq!(lines, 2);
        assert_eq!(units[0].top(), 7.0);
        assert_eq!(units[2].left(), 5.0);
        assert_eq!(units[2].top(), 19.0);
    }

    #[test]
    fn leading_spaces_take_no_room_on_a_line() {
        let (mut ctx, owner) = ctx_and_owner(0.0);
        let mut units = vec![
            LayoutUnit::spaces(ctx.next_unit_id(), Some(owner), "  "),
            LayoutUnit::word(ctx.next_unit_id(), Some(owner), "a", false, false),
        ];
        units[0].set_width(8.0);
        units[1].set_width(10.0);
        flow_into_lines(&mut units, &ctx, 0.0, 0.0, 100.0, 12.0);
        assert_eq!(units[1].left(), 0.0);
    }
}
