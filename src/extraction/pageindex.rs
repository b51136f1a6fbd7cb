//! Geometric queries over a single page's positioned content.

use crate::extraction::pdf::{PageContent, RuleLine, TextElement};

/// Rule width comparisons tolerate sub-pixel float error from the engine.
const WIDTH_TOLERANCE: f32 = 0.01;

/// Read-only query index over one page's content.
///
/// All queries return empty results for malformed or absent content; callers
/// treat an empty result as "not found".
pub struct PageIndex<'a> {
    content: &'a PageContent,
}

impl<'a> PageIndex<'a> {
    pub fn new(content: &'a PageContent) -> Self {
        Self { content }
    }

    /// Finds the first text element whose content contains `label`.
    pub fn find_label(&self, label: &str) -> Option<&'a TextElement> {
        self.content
            .texts
            .iter()
            .find(|element| element.text.contains(label))
    }

    /// All horizontal rules whose line width matches `width`.
    pub fn rule_lines(&self, width: f32) -> impl Iterator<Item = &'a RuleLine> {
        self.content
            .rules
            .iter()
            .filter(move |rule| (rule.width - width).abs() <= WIDTH_TOLERANCE)
    }

    /// Concatenates the text of the elements lying entirely within the given
    /// rectangle, space-joined in the page content's natural order. Returns
    /// an empty string when nothing matches.
    pub fn text_in_box(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> String {
        let mut out = String::new();
        for element in &self.content.texts {
            if element.x0 >= x0 && element.y0 >= y0 && element.x1 <= x1 && element.y1 <= y1 {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&element.text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use googletest::{
        expect_that,
        matchers::{eq, none, some},
    };

    use super::PageIndex;
    use crate::extraction::pdf::PageContent;
    use crate::testutil::{rule, text};

    #[googletest::test]
    fn test_find_label() {
        let content = PageContent {
            texts: vec![
                text("Opening balance", 10.0, 700.0, 80.0, 712.0),
                text("Date", 50.0, 650.0, 80.0, 662.0),
            ],
            rules: Vec::new(),
        };
        let index = PageIndex::new(&content);

        expect_that!(
            index.find_label("Date").map(|element| element.x0),
            some(eq(50.0))
        );
        expect_that!(index.find_label("Balance ($)"), none());
    }

    #[googletest::test]
    fn test_find_label_matches_containing_text() {
        let content = PageContent {
            texts: vec![text("  Deposits ($)  ", 400.0, 700.0, 460.0, 712.0)],
            rules: Vec::new(),
        };
        let index = PageIndex::new(&content);

        expect_that!(
            index.find_label("Deposits ($)").map(|element| element.x0),
            some(eq(400.0))
        );
    }

    #[googletest::test]
    fn test_rule_lines_filters_by_width() {
        let content = PageContent {
            texts: Vec::new(),
            rules: vec![rule(300.0, 1.0), rule(280.0, 2.5), rule(260.0, 1.0)],
        };
        let index = PageIndex::new(&content);

        let matched: Vec<f32> = index.rule_lines(1.0).map(|rule| rule.y).collect();
        expect_that!(matched, eq(vec![300.0, 260.0]));
    }

    #[googletest::test]
    fn test_text_in_box_requires_full_containment() {
        let content = PageContent {
            texts: vec![
                text("inside", 10.0, 10.0, 20.0, 20.0),
                text("straddles", 18.0, 10.0, 40.0, 20.0),
                text("outside", 100.0, 100.0, 120.0, 110.0),
            ],
            rules: Vec::new(),
        };
        let index = PageIndex::new(&content);

        expect_that!(index.text_in_box(0.0, 0.0, 30.0, 30.0), eq("inside"));
    }

    #[googletest::test]
    fn test_text_in_box_concatenates_in_natural_order() {
        let content = PageContent {
            texts: vec![
                text("sent", 30.0, 10.0, 40.0, 20.0),
                text("e-Transfer", 10.0, 10.0, 28.0, 20.0),
            ],
            rules: Vec::new(),
        };
        let index = PageIndex::new(&content);

        // No sorting beyond the content's own order.
        expect_that!(index.text_in_box(0.0, 0.0, 50.0, 30.0), eq("sent e-Transfer"));
    }

    #[googletest::test]
    fn test_empty_content_yields_empty_results() {
        let content = PageContent::default();
        let index = PageIndex::new(&content);

        expect_that!(index.find_label("Date"), none());
        expect_that!(index.rule_lines(1.0).count(), eq(0));
        expect_that!(index.text_in_box(0.0, 0.0, 1000.0, 1000.0), eq(""));
    }
}
