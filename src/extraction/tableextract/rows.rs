//! Row boundary inference from horizontal rule positions.

use crate::extraction::Interval;
use crate::extraction::pageindex::PageIndex;

/// Computes row intervals from the rule lines lying below the header row.
///
/// `table_top` is the y0 of the first header element and joins the rule
/// positions as an implicit boundary. Rules at or above it (the header line
/// itself, page furniture) are excluded; y decreases down the page. N
/// boundaries yield N−1 intervals, top of page first.
pub fn row_intervals(
    index: &PageIndex,
    table_top: f32,
    rule_width: f32,
    buffer: f32,
) -> Vec<Interval> {
    let mut boundaries: Vec<f32> = index
        .rule_lines(rule_width)
        .map(|rule| rule.y)
        .filter(|y| *y < table_top)
        .collect();
    boundaries.push(table_top);

    // A rule detected as overlapping fragments collapses to one boundary.
    boundaries.sort_by(|a, b| b.total_cmp(a));
    boundaries.dedup();

    boundaries
        .windows(2)
        .map(|pair| Interval::new(pair[1], pair[0]).expand(buffer))
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::{expect_that, matchers::eq};

    use super::row_intervals;
    use crate::extraction::Interval;
    use crate::extraction::pageindex::PageIndex;
    use crate::extraction::pdf::PageContent;
    use crate::testutil::rule;

    const RULE_WIDTH: f32 = 1.0;
    const BUFFER: f32 = 1.0;

    fn content_with_rules(rules: Vec<crate::extraction::pdf::RuleLine>) -> PageContent {
        PageContent {
            texts: Vec::new(),
            rules,
        }
    }

    #[googletest::test]
    fn test_single_rule_below_header_yields_one_interval() {
        let content = content_with_rules(vec![rule(300.0, RULE_WIDTH)]);
        let index = PageIndex::new(&content);

        let actual = row_intervals(&index, 320.0, RULE_WIDTH, BUFFER);

        expect_that!(actual, eq(vec![Interval::new(299.0, 321.0)]));
    }

    #[googletest::test]
    fn test_one_interval_per_rule_below_the_header() {
        let content = content_with_rules(vec![
            rule(660.0, RULE_WIDTH),
            rule(620.0, RULE_WIDTH),
            rule(580.0, RULE_WIDTH),
        ]);
        let index = PageIndex::new(&content);

        let actual = row_intervals(&index, 700.0, RULE_WIDTH, BUFFER);

        expect_that!(
            actual,
            eq(vec![
                Interval::new(659.0, 701.0),
                Interval::new(619.0, 661.0),
                Interval::new(579.0, 621.0),
            ])
        );
    }

    #[googletest::test]
    fn test_duplicate_rule_detections_collapse() {
        let content = content_with_rules(vec![
            rule(660.0, RULE_WIDTH),
            rule(660.0, RULE_WIDTH),
            rule(620.0, RULE_WIDTH),
        ]);
        let index = PageIndex::new(&content);

        let actual = row_intervals(&index, 700.0, RULE_WIDTH, BUFFER);

        expect_that!(
            actual,
            eq(vec![Interval::new(659.0, 701.0), Interval::new(619.0, 661.0)])
        );
    }

    #[googletest::test]
    fn test_rules_above_the_header_are_excluded() {
        let content = content_with_rules(vec![
            rule(750.0, RULE_WIDTH),
            rule(700.0, RULE_WIDTH),
            rule(660.0, RULE_WIDTH),
        ]);
        let index = PageIndex::new(&content);

        let actual = row_intervals(&index, 700.0, RULE_WIDTH, BUFFER);

        expect_that!(actual, eq(vec![Interval::new(659.0, 701.0)]));
    }

    #[googletest::test]
    fn test_rules_of_other_widths_are_ignored() {
        let content = content_with_rules(vec![rule(660.0, RULE_WIDTH), rule(620.0, 3.0)]);
        let index = PageIndex::new(&content);

        let actual = row_intervals(&index, 700.0, RULE_WIDTH, BUFFER);

        expect_that!(actual, eq(vec![Interval::new(659.0, 701.0)]));
    }

    #[googletest::test]
    fn test_no_rules_yields_no_intervals() {
        let content = content_with_rules(Vec::new());
        let index = PageIndex::new(&content);

        let actual = row_intervals(&index, 700.0, RULE_WIDTH, BUFFER);

        expect_that!(actual, eq(vec![]));
    }
}
