//! Directory listing reconstruction.
//!
//! Turns the flat entry names scraped from a directory page into display rows.
//! GitHub collapses single-child directories into one link such as
//! `static/favicon.ico`; those become a group row with an indented child.
//! Only the first `/` is split on.

use crate::models::TreeRow;

pub const SEPARATOR: char = '/';

fn to_row(name: &str) -> TreeRow {
    match name.split_once(SEPARATOR) {
        Some((group, child)) => TreeRow::GroupWithChild {
            group: group.to_string(),
            child: child.to_string(),
        },
        None => TreeRow::Plain {
            name: name.to_string(),
        },
    }
}

/// Builds the listing rows: plain entries first, then groups, each class in
/// input order.
pub fn build_tree<S: AsRef<str>>(names: &[S]) -> Vec<TreeRow> {
    let (plain, groups): (Vec<TreeRow>, Vec<TreeRow>) = names
        .iter()
        .map(|name| to_row(name.as_ref()))
        .partition(|row| !row.is_group());

    plain.into_iter().chain(groups).collect()
}

/// Renders rows as an `ls` session: a `$ ls` line, then `> ` before each row.
pub fn render_listing(rows: &[TreeRow]) -> String {
    let mut listing = String::from("$ ls\n");
    for row in rows {
        listing.push_str("> ");
        listing.push_str(&row.to_string());
        listing.push('\n');
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str) -> TreeRow {
        TreeRow::Plain { name: name.into() }
    }

    fn group(group: &str, child: &str) -> TreeRow {
        TreeRow::GroupWithChild {
            group: group.into(),
            child: child.into(),
        }
    }

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let names: [&str; 0] = [];
        assert!(build_tree(&names).is_empty());
    }

    #[test]
    fn plain_entries_precede_groups() {
        let rows = build_tree(&["b", "a/x", "c", "a/y"]);
        assert_eq!(
            rows,
            vec![plain("b"), plain("c"), group("a", "x"), group("a", "y")]
        );
    }

    #[test]
    fn partition_holds_for_every_input_order() {
        for names in permutations(&["b", "a/x", "c", "a/y"]) {
            let rows = build_tree(&names);
            assert_eq!(rows.len(), 4);
            let first_group = rows.iter().position(TreeRow::is_group).unwrap();
            assert_eq!(first_group, 2, "{names:?}");
            assert!(rows[first_group..].iter().all(TreeRow::is_group), "{names:?}");
        }
    }

    #[test]
    fn splits_on_first_separator_only() {
        let rows = build_tree(&["docs/guide/intro.md"]);
        assert_eq!(rows, vec![group("docs", "guide/intro.md")]);
    }

    #[test]
    fn listing_prefixes_each_row() {
        let rows = build_tree(&["static/favicon.ico", "main.go"]);
        assert_eq!(
            render_listing(&rows),
            "$ ls\n> main.go\n> static\n  └── favicon.ico\n"
        );
    }

    #[test]
    fn empty_listing_is_just_the_command() {
        assert_eq!(render_listing(&[]), "$ ls\n");
    }
}
