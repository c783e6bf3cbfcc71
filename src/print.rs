//! Tabulation of counts for console output.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::count::{try_choices, try_combination_count, try_permutation_count, Choices};
use crate::factorial::{try_factorial, Overflow};

/// Every count this crate knows about for a set of `n` elements and a selection size of `k`.
pub fn tabulate_counts(n: u64, k: u64) -> Table {
    let mut counts = vec![
        (format!("{n}!"), try_factorial(n)),
        (format!("P({n}, {k})"), try_permutation_count(n, k)),
        (format!("C({n}, {k})"), try_combination_count(n, k)),
    ];
    for (label, replace, ordered) in [
        ("replaced, ordered", true, true),
        ("replaced, unordered", true, false),
        ("unreplaced, ordered", false, true),
        ("unreplaced, unordered", false, false),
    ] {
        counts.push((label.into(), try_choices(n, k, Choices { replace, ordered })));
    }

    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(22))),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(12))
                    .with(HAlign::Right),
            ),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Quantity".into(), "Count".into()],
        ));
    for (label, count) in counts {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), format_count(&count).into()],
        ));
    }
    table
}

fn format_count(count: &Result<u128, Overflow>) -> String {
    match count {
        Ok(count) => count.to_string(),
        Err(_) => "overflow".into(),
    }
}
