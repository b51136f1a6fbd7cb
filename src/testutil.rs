//! Shared test fixtures.

use crate::config::Layout;
use crate::extraction::pdf::{PageContent, RuleLine, TextElement};

pub fn text(content: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> TextElement {
    TextElement {
        text: content.to_string(),
        x0,
        y0,
        x1,
        y1,
    }
}

pub fn rule(y: f32, width: f32) -> RuleLine {
    RuleLine { y, width }
}

/// A minimal single-page chequing statement for `layout`
/// ([Layout::rbc_chequing]): the five headers on one row at y 700..712 and
/// two transaction rows separated by grid rules at y 660 and 620.
///
/// Expected reconstruction, before sanitization:
///
/// ```text
/// 21 Jan | e-Transfer sent | 1,250.00 |          | 3,456.78
/// 22 Jan | Payroll deposit |          | 2,000.00 | 5,456.78
/// ```
pub fn statement_page(layout: &Layout) -> PageContent {
    let header_spans = [
        (50.0, 110.0),
        (150.0, 210.0),
        (250.0, 310.0),
        (400.0, 460.0),
        (550.0, 610.0),
    ];

    let mut texts: Vec<TextElement> = layout
        .labels
        .iter()
        .zip(header_spans)
        .map(|(label, (x0, x1))| text(label, x0, 700.0, x1, 712.0))
        .collect();

    // First transaction row, between the header and the rule at 660.
    texts.push(text("21 Jan", 50.0, 670.0, 90.0, 682.0));
    texts.push(text("e-Transfer sent", 150.0, 670.0, 230.0, 682.0));
    texts.push(text("1,250.00", 250.0, 670.0, 305.0, 682.0));
    texts.push(text("3,456.78", 550.0, 670.0, 605.0, 682.0));

    // Second transaction row, between the rules at 660 and 620.
    texts.push(text("22 Jan", 50.0, 630.0, 90.0, 642.0));
    texts.push(text("Payroll deposit", 150.0, 630.0, 230.0, 642.0));
    texts.push(text("2,000.00", 400.0, 630.0, 455.0, 642.0));
    texts.push(text("5,456.78", 550.0, 630.0, 605.0, 642.0));

    PageContent {
        texts,
        rules: vec![rule(660.0, layout.rule_width), rule(620.0, layout.rule_width)],
    }
}

/// [statement_page] with the header matching `label` removed, leaving the
/// page degraded.
pub fn statement_page_without_label(layout: &Layout, label: &str) -> PageContent {
    let mut content = statement_page(layout);
    content.texts.retain(|element| element.text != label);
    content
}
